use async_trait::async_trait;

use models::admin::{Admin, AdminInput};

use crate::errors::ServiceError;

/// Seam over the Admin persistence collaborator. Keyed by numeric id with
/// store-assigned auto-increment identity; substitutable with in-memory
/// fakes in tests.
#[async_trait]
pub trait AdminStore: Send + Sync {
    /// Persist a new record, assigning the next id.
    async fn create(&self, input: AdminInput) -> Result<Admin, ServiceError>;

    /// Look up a record by id.
    async fn get(&self, id: u64) -> Result<Option<Admin>, ServiceError>;

    /// All records in ascending id order.
    async fn list(&self) -> Result<Vec<Admin>, ServiceError>;

    /// Overwrite name/email/role of an existing record. Returns `None` when
    /// the id is absent; never creates a record.
    async fn update(&self, id: u64, input: AdminInput) -> Result<Option<Admin>, ServiceError>;

    /// Remove a record; returns whether an entry existed. Deleting an absent
    /// id is a successful no-op.
    async fn delete(&self, id: u64) -> Result<bool, ServiceError>;
}
