//! Credential store
//!
//! Owns the authoritative credential maps, the two membership filters, and
//! the path to the durable flat file. Filters are rebuilt from the
//! authoritative records on every load and are never persisted themselves.

use log::{error, info};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::StoreConfig;
use crate::error::PersistenceError;
use crate::filter::MembershipFilter;
use crate::storage::{UserRecord, append_record, load_records, rewrite_records};
use crate::store::digest::digest;
use crate::store::strength::{self, PasswordStrength};
use crate::store::weak_passwords::DEFAULT_WEAK_PASSWORDS;

/// File-backed credential store with a bloom-filter fast-reject layer.
///
/// The username filter answers "definitely unknown" in O(k); every positive
/// answer is confirmed against the authoritative maps. Usernames are
/// case-sensitive and, once signed up, permanently reflected in the filter
/// (there is no account deletion).
pub struct CredentialStore {
    username_filter: MembershipFilter,
    weak_password_filter: MembershipFilter,
    password_digests: BTreeMap<String, String>,
    security_questions: BTreeMap<String, String>,
    answer_digests: BTreeMap<String, String>,
    db_path: PathBuf,
}

impl CredentialStore {
    /// Open a store with the built-in weak-password corpus.
    pub fn open(config: &StoreConfig) -> Result<Self, PersistenceError> {
        Self::open_with_corpus(config, DEFAULT_WEAK_PASSWORDS)
    }

    /// Open a store with an injected weak-password corpus.
    ///
    /// Loads prior records from the configured path; a missing file means an
    /// empty store. Every recovered username is re-inserted into the
    /// username filter.
    pub fn open_with_corpus(
        config: &StoreConfig,
        corpus: &[&str],
    ) -> Result<Self, PersistenceError> {
        let mut weak_password_filter =
            MembershipFilter::new(config.weak_password_filter_bits, config.hash_count);
        for password in corpus {
            weak_password_filter.insert(password);
        }

        let mut store = Self {
            username_filter: MembershipFilter::new(config.username_filter_bits, config.hash_count),
            weak_password_filter,
            password_digests: BTreeMap::new(),
            security_questions: BTreeMap::new(),
            answer_digests: BTreeMap::new(),
            db_path: PathBuf::from(&config.db_path),
        };

        for record in load_records(&store.db_path)? {
            store.username_filter.insert(&record.username);
            store
                .password_digests
                .insert(record.username.clone(), record.password_digest);
            store
                .security_questions
                .insert(record.username.clone(), record.security_question);
            store
                .answer_digests
                .insert(record.username, record.answer_digest);
        }

        info!(
            "Loaded {} user(s) from {}",
            store.password_digests.len(),
            store.db_path.display()
        );
        Ok(store)
    }

    /// Filter-then-map double check: a filter negative short-circuits the
    /// authoritative lookup, a filter positive is resolved against `map`.
    fn screened<'a>(&self, username: &str, map: &'a BTreeMap<String, String>) -> Option<&'a str> {
        if !self.username_filter.might_contain(username) {
            return None;
        }
        map.get(username).map(String::as_str)
    }

    /// Whether `username` is registered.
    pub fn username_exists(&self, username: &str) -> bool {
        self.screened(username, &self.password_digests).is_some()
    }

    /// Register a new user. Returns false if any input is empty, the
    /// username is taken, or the record could not be persisted.
    ///
    /// The maps and the username filter are only updated after a successful
    /// append, so durable state, maps, and filter never diverge.
    pub fn sign_up(&mut self, username: &str, password: &str, question: &str, answer: &str) -> bool {
        if username.is_empty() || password.is_empty() || question.is_empty() || answer.is_empty() {
            return false;
        }
        if self.username_exists(username) {
            return false;
        }

        let record = UserRecord {
            username: username.to_string(),
            password_digest: digest(password),
            security_question: question.to_string(),
            answer_digest: digest(answer),
        };

        if let Err(e) = append_record(&self.db_path, &record) {
            error!("Failed to persist new user {:?}: {}", username, e);
            return false;
        }

        self.password_digests
            .insert(record.username.clone(), record.password_digest);
        self.security_questions
            .insert(record.username.clone(), record.security_question);
        self.answer_digests
            .insert(record.username, record.answer_digest);
        self.username_filter.insert(username);

        info!("Registered user {:?}", username);
        true
    }

    /// Authenticate `username` with `password`.
    pub fn login(&self, username: &str, password: &str) -> bool {
        match self.screened(username, &self.password_digests) {
            Some(stored) => stored == digest(password),
            None => false,
        }
    }

    /// Security question for `username`; empty string when not found.
    pub fn security_question(&self, username: &str) -> String {
        self.screened(username, &self.security_questions)
            .unwrap_or_default()
            .to_string()
    }

    /// Verify the security answer and replace the stored password digest.
    ///
    /// A successful reset triggers a full rewrite of the durable file in map
    /// order. A rewrite failure is logged and the in-memory update stands;
    /// durable state catches up on the next full rewrite.
    pub fn reset_password(&mut self, username: &str, answer: &str, new_password: &str) -> bool {
        if !self.username_exists(username) {
            return false;
        }
        match self.answer_digests.get(username) {
            Some(stored) if *stored == digest(answer) => {}
            _ => return false,
        }

        self.password_digests
            .insert(username.to_string(), digest(new_password));

        if let Err(e) = self.rewrite_all() {
            error!("Failed to rewrite {}: {}", self.db_path.display(), e);
        }

        info!("Password reset for user {:?}", username);
        true
    }

    /// Classify a candidate password against the weak-password filter and
    /// the scoring policy.
    pub fn check_password_strength(&self, password: &str) -> PasswordStrength {
        strength::classify(password, &self.weak_password_filter)
    }

    /// Number of registered users, from the authoritative map.
    pub fn total_users(&self) -> usize {
        self.password_digests.len()
    }

    /// Serialize every record back to the flat file in map order.
    fn rewrite_all(&self) -> Result<(), PersistenceError> {
        let records = self.password_digests.iter().map(|(username, pw_digest)| {
            UserRecord {
                username: username.clone(),
                password_digest: pw_digest.clone(),
                security_question: self
                    .security_questions
                    .get(username)
                    .cloned()
                    .unwrap_or_default(),
                answer_digest: self.answer_digests.get(username).cloned().unwrap_or_default(),
            }
        });
        rewrite_records(&self.db_path, records)
    }
}
