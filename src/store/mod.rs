//! Credential store
//!
//! Signup, login, password recovery, and password-strength gating over an
//! authoritative in-memory map fronted by membership filters.

pub mod core;
pub mod digest;
pub mod strength;
pub mod weak_passwords;

pub use self::core::CredentialStore;
pub use strength::PasswordStrength;
pub use weak_passwords::DEFAULT_WEAK_PASSWORDS;
