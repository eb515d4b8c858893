use serde::{Deserialize, Serialize};

/// A locally persisted administrator record. The id is assigned by the
/// store on creation and never accepted from the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Request payload for create and update.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdminInput {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl AdminInput {
    pub fn into_admin(self, id: u64) -> Admin {
        Admin { id, name: self.name, email: self.email, role: self.role }
    }
}

impl Admin {
    /// Overwrite the mutable fields in place; the id is preserved.
    pub fn apply(&mut self, input: AdminInput) {
        self.name = input.name;
        self.email = input.email;
        self.role = input.role;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_preserves_id() {
        let mut a = Admin {
            id: 7,
            name: "Ada".into(),
            email: "ada@example.com".into(),
            role: "ops".into(),
        };
        a.apply(AdminInput {
            name: "Ada L".into(),
            email: "ada.l@example.com".into(),
            role: "superadmin".into(),
        });
        assert_eq!(a.id, 7);
        assert_eq!(a.name, "Ada L");
        assert_eq!(a.role, "superadmin");
    }

    #[test]
    fn admin_json_shape() {
        let a = AdminInput {
            name: "Bob".into(),
            email: "bob@example.com".into(),
            role: "admin".into(),
        }
        .into_admin(1);
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["email"], "bob@example.com");
    }
}
