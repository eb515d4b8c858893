use std::{collections::HashMap, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::{fs, sync::RwLock};

use models::admin::{Admin, AdminInput};

use crate::admin::store::AdminStore;
use crate::errors::ServiceError;

/// On-disk representation. `next_id` is persisted alongside the records so
/// ids are never reused across restarts.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    next_id: u64,
    admins: Vec<Admin>,
}

#[derive(Debug)]
struct Inner {
    next_id: u64,
    admins: HashMap<u64, Admin>,
}

/// File-backed store for Admin records persisted as JSON.
#[derive(Clone)]
pub struct FileAdminStore {
    inner: Arc<RwLock<Inner>>,
    file_path: PathBuf,
}

impl FileAdminStore {
    /// Initialize the store from the given file path. Creates the file if missing.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let loaded: StoreFile = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
            Err(_) => {
                let empty = StoreFile { next_id: 1, admins: Vec::new() };
                fs::write(
                    &file_path,
                    serde_json::to_vec(&empty).map_err(|e| ServiceError::Storage(e.to_string()))?,
                )
                .await
                .map_err(|e| ServiceError::Storage(e.to_string()))?;
                empty
            }
        };

        let max_id = loaded.admins.iter().map(|a| a.id).max().unwrap_or(0);
        let next_id = loaded.next_id.max(max_id + 1).max(1);
        let admins = loaded.admins.into_iter().map(|a| (a.id, a)).collect();

        Ok(Arc::new(Self {
            inner: Arc::new(RwLock::new(Inner { next_id, admins })),
            file_path,
        }))
    }

    async fn save(&self) -> Result<(), ServiceError> {
        let inner = self.inner.read().await;
        let mut admins: Vec<Admin> = inner.admins.values().cloned().collect();
        admins.sort_by_key(|a| a.id);
        let file = StoreFile { next_id: inner.next_id, admins };
        drop(inner);
        let data =
            serde_json::to_vec(&file).map_err(|e| ServiceError::Storage(e.to_string()))?;
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl AdminStore for FileAdminStore {
    async fn create(&self, input: AdminInput) -> Result<Admin, ServiceError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;
        let admin = input.into_admin(id);
        inner.admins.insert(id, admin.clone());
        drop(inner);
        self.save().await?;
        Ok(admin)
    }

    async fn get(&self, id: u64) -> Result<Option<Admin>, ServiceError> {
        let inner = self.inner.read().await;
        Ok(inner.admins.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Admin>, ServiceError> {
        let inner = self.inner.read().await;
        let mut admins: Vec<Admin> = inner.admins.values().cloned().collect();
        admins.sort_by_key(|a| a.id);
        Ok(admins)
    }

    async fn update(&self, id: u64, input: AdminInput) -> Result<Option<Admin>, ServiceError> {
        let mut inner = self.inner.write().await;
        let updated = match inner.admins.get_mut(&id) {
            Some(existing) => {
                existing.apply(input);
                Some(existing.clone())
            }
            None => None,
        };
        drop(inner);
        if updated.is_some() {
            self.save().await?;
        }
        Ok(updated)
    }

    async fn delete(&self, id: u64) -> Result<bool, ServiceError> {
        let mut inner = self.inner.write().await;
        let existed = inner.admins.remove(&id).is_some();
        drop(inner);
        if existed {
            self.save().await?;
        }
        Ok(existed)
    }
}
