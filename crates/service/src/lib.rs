//! Service layer for admin-service.
//! - `admin` defines the store seam for locally persisted Admin records.
//! - `file` provides the JSON-file-backed store implementation.
//! - `user_client` performs the synchronous HTTP calls to the remote
//!   user-service and collapses every failure into one tagged error.

pub mod admin;
pub mod errors;
pub mod file;
pub mod user_client;
