//! Password strength classification
//!
//! Deterministic policy: length gate, weak-corpus filter check, then a
//! character-class score. A filter false positive flags the password weak
//! anyway; that conservative bias is intentional.

use std::fmt;

use crate::filter::MembershipFilter;

/// Special characters that count towards the strength score.
const SPECIAL_CHARS: [char; 7] = ['!', '@', '#', '$', '%', '&', '*'];

/// Minimum acceptable password length in bytes.
const MIN_LENGTH: usize = 6;

/// Length at which a password earns a bonus score point.
const BONUS_LENGTH: usize = 10;

/// Classification of a candidate password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    /// Shorter than the minimum length.
    TooShort,
    /// Matched the weak-password filter (possibly a false positive).
    Common,
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            PasswordStrength::TooShort => "Weak: Password too short (minimum 6 characters)",
            PasswordStrength::Common => "Weak: Common password detected",
            PasswordStrength::Weak => "Weak: Use mix of letters, numbers, and special characters",
            PasswordStrength::Medium => "Medium: Add numbers, uppercase, or special characters",
            PasswordStrength::Strong => "Strong: Good password!",
        };
        write!(f, "{}", message)
    }
}

/// Classify `password` against the weak-password filter and the scoring
/// policy: one point each for a digit, an uppercase letter, a lowercase
/// letter, a special character, and length >= 10. Score >= 4 is strong,
/// >= 2 medium, otherwise weak.
pub fn classify(password: &str, weak_filter: &MembershipFilter) -> PasswordStrength {
    if password.len() < MIN_LENGTH {
        return PasswordStrength::TooShort;
    }

    if weak_filter.might_contain(password) {
        return PasswordStrength::Common;
    }

    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_special = password.chars().any(|c| SPECIAL_CHARS.contains(&c));

    let score = usize::from(has_digit)
        + usize::from(has_upper)
        + usize::from(has_lower)
        + usize::from(has_special)
        + usize::from(password.len() >= BONUS_LENGTH);

    if score >= 4 {
        PasswordStrength::Strong
    } else if score >= 2 {
        PasswordStrength::Medium
    } else {
        PasswordStrength::Weak
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::weak_passwords::DEFAULT_WEAK_PASSWORDS;

    fn weak_filter() -> MembershipFilter {
        let mut filter = MembershipFilter::new(5000, 3);
        for password in DEFAULT_WEAK_PASSWORDS {
            filter.insert(password);
        }
        filter
    }

    #[test]
    fn test_short_password_is_too_short() {
        assert_eq!(classify("abc", &weak_filter()), PasswordStrength::TooShort);
    }

    #[test]
    fn test_corpus_hit_is_common() {
        assert_eq!(
            classify("password", &weak_filter()),
            PasswordStrength::Common
        );
        assert_eq!(classify("letmein", &weak_filter()), PasswordStrength::Common);
    }

    #[test]
    fn test_all_character_classes_is_strong() {
        // 8 bytes, digit + upper + lower + special: score 4.
        assert_eq!(
            classify("Abc123!@", &weak_filter()),
            PasswordStrength::Strong
        );
    }

    #[test]
    fn test_lowercase_only_is_weak() {
        // 9 lowercase letters: score 1.
        assert_eq!(
            classify("abcdefghj", &weak_filter()),
            PasswordStrength::Weak
        );
    }

    #[test]
    fn test_two_classes_is_medium() {
        // Lowercase + digit, under 10 bytes: score 2.
        assert_eq!(classify("abcdef9", &weak_filter()), PasswordStrength::Medium);
    }

    #[test]
    fn test_long_lowercase_is_medium() {
        // Lowercase + length bonus: score 2.
        assert_eq!(
            classify("abcdefghjkm", &weak_filter()),
            PasswordStrength::Medium
        );
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            PasswordStrength::TooShort.to_string(),
            "Weak: Password too short (minimum 6 characters)"
        );
        assert_eq!(
            PasswordStrength::Strong.to_string(),
            "Strong: Good password!"
        );
    }
}
