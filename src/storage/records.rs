//! Record line format
//!
//! One user per line in the flat file:
//!
//! ```text
//! <username> <passwordDigest> <securityQuestion>|<answerDigest>
//! ```
//!
//! Known limitations, kept for compatibility with existing files: a username
//! containing a space or a question containing `|` corrupts parsing on
//! reload. Only the first `|` after the digest is significant.

/// A single persisted credential record.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub username: String,
    pub password_digest: String,
    pub security_question: String,
    pub answer_digest: String,
}

impl UserRecord {
    /// Serialize to the one-line file format.
    pub fn to_line(&self) -> String {
        format!(
            "{} {} {}|{}",
            self.username, self.password_digest, self.security_question, self.answer_digest
        )
    }

    /// Parse a line of the file format.
    ///
    /// Returns `None` when the line has fewer than two fields. A missing `|`
    /// in the remainder yields an empty question and answer digest so every
    /// parsed record carries all four fields.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.splitn(3, ' ');
        let username = parts.next().filter(|s| !s.is_empty())?;
        let password_digest = parts.next().filter(|s| !s.is_empty())?;
        let rest = parts.next().unwrap_or("");

        let (question, answer) = rest.split_once('|').unwrap_or(("", ""));

        Some(Self {
            username: username.to_string(),
            password_digest: password_digest.to_string(),
            security_question: question.to_string(),
            answer_digest: answer.to_string(),
        })
    }
}
