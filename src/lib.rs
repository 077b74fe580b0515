pub mod config;
pub mod error;
pub mod filter;
pub mod storage;
pub mod store;

pub use self::config::StoreConfig;
pub use store::{CredentialStore, PasswordStrength};
