//! Persistence round trips across store reopen.

use tempfile::TempDir;

use credstore::{CredentialStore, PasswordStrength, StoreConfig};

fn config_at(dir: &TempDir) -> StoreConfig {
    StoreConfig {
        db_path: dir.path().join("users.db").to_string_lossy().into_owned(),
        ..StoreConfig::default()
    }
}

#[test]
fn test_signups_survive_restart() {
    let dir = TempDir::new().unwrap();
    let config = config_at(&dir);

    let users: Vec<(String, String)> = (0..10)
        .map(|i| (format!("user_{}", i), format!("pa55word_{}!", i)))
        .collect();

    {
        let mut store = CredentialStore::open(&config).unwrap();
        for (username, password) in &users {
            assert!(store.sign_up(username, password, "Favorite color?", "blue"));
        }
        assert_eq!(store.total_users(), users.len());
    }

    // Reopen against the same path: rebuilt filter and maps must reproduce
    // every prior login result.
    let store = CredentialStore::open(&config).unwrap();
    assert_eq!(store.total_users(), users.len());
    for (username, password) in &users {
        assert!(store.username_exists(username));
        assert!(store.login(username, password));
        assert!(!store.login(username, "wrong-password"));
        assert_eq!(store.security_question(username), "Favorite color?");
    }
}

#[test]
fn test_password_reset_survives_restart() {
    let dir = TempDir::new().unwrap();
    let config = config_at(&dir);

    {
        let mut store = CredentialStore::open(&config).unwrap();
        assert!(store.sign_up("alice", "old-pass", "City of birth?", "lisbon"));
        assert!(store.reset_password("alice", "lisbon", "new-pass"));
    }

    let store = CredentialStore::open(&config).unwrap();
    assert!(store.login("alice", "new-pass"));
    assert!(!store.login("alice", "old-pass"));
    // Question and answer are untouched by a reset.
    assert_eq!(store.security_question("alice"), "City of birth?");
}

#[test]
fn test_reset_rewrites_whole_file() {
    let dir = TempDir::new().unwrap();
    let config = config_at(&dir);

    {
        let mut store = CredentialStore::open(&config).unwrap();
        for name in ["alice", "bob", "carol"] {
            assert!(store.sign_up(name, "start-pw", "q?", "a"));
        }
        assert!(store.reset_password("bob", "a", "changed-pw"));
    }

    let store = CredentialStore::open(&config).unwrap();
    assert_eq!(store.total_users(), 3);
    assert!(store.login("alice", "start-pw"));
    assert!(store.login("bob", "changed-pw"));
    assert!(store.login("carol", "start-pw"));
}

#[test]
fn test_duplicate_rejected_after_restart() {
    let dir = TempDir::new().unwrap();
    let config = config_at(&dir);

    {
        let mut store = CredentialStore::open(&config).unwrap();
        assert!(store.sign_up("alice", "first-pw", "q?", "a"));
    }

    let mut store = CredentialStore::open(&config).unwrap();
    assert!(!store.sign_up("alice", "second-pw", "q?", "a"));
    assert!(store.login("alice", "first-pw"));
}

#[test]
fn test_weak_corpus_flags_common_passwords() {
    let dir = TempDir::new().unwrap();
    let store = CredentialStore::open(&config_at(&dir)).unwrap();

    for common in ["password", "123456", "qwerty", "letmein", "iloveyou"] {
        assert_eq!(
            store.check_password_strength(common),
            PasswordStrength::Common,
            "{} should be flagged common",
            common
        );
    }
    assert_eq!(
        store.check_password_strength("Vf9!kqzR2m"),
        PasswordStrength::Strong
    );
}
