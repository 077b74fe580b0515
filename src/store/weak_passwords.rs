//! Built-in weak-password corpus
//!
//! Common passwords preloaded into the weak-password filter at store
//! construction. The corpus is fixed; it is never mutated at runtime.

/// Known weak passwords seeded into every store unless a custom corpus is
/// injected.
pub const DEFAULT_WEAK_PASSWORDS: &[&str] = &[
    "password", "123456", "12345678", "qwerty", "abc123",
    "monkey", "1234567", "letmein", "trustno1", "dragon",
    "baseball", "111111", "iloveyou", "master", "sunshine",
    "ashley", "bailey", "passw0rd", "shadow", "123123",
    "654321", "superman", "qazwsx", "michael", "football",
    "password1", "admin", "welcome", "login", "test",
    "pass", "root", "user", "guest", "demo",
];
