pub mod admin_store;
