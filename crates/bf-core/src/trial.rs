//! Trial-gate keys.
//!
//! Key names are fixed; they are the durable contract with stores written
//! by earlier versions of the application.

/// Device-level trial flag. Write-once, never cleared.
pub const DEVICE_USED_KEY: &str = "breakfear_device_used";

/// Permanent premium unlock flag.
pub const PREMIUM_KEY: &str = "breakfear_is_premium";

/// Backup copy of the last known [`crate::UserInfo`], as JSON.
pub const USER_BACKUP_KEY: &str = "breakfear_user_backup";

/// Value stored under boolean flag keys.
pub const FLAG_SET: &str = "true";

/// Per-email trial flag key.
///
/// Returns `None` when the email is empty after trimming, in which case the
/// identity contributes no email-level flag. Emails are trimmed and
/// ASCII-lowercased so `" X@y "` and `"x@y"` share one trial.
pub fn email_usage_key(email: &str) -> Option<String> {
    let normalized = normalize_email(email);
    if normalized.is_empty() {
        None
    } else {
        Some(format!("breakfear_usage_{normalized}"))
    }
}

/// Canonical form of an email for gate keying.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{email_usage_key, normalize_email};

    #[test]
    fn email_key_is_trimmed_and_lowercased() {
        assert_eq!(
            email_usage_key("  Ada@Example.COM "),
            Some("breakfear_usage_ada@example.com".to_string())
        );
    }

    #[test]
    fn equivalent_spellings_share_one_key() {
        assert_eq!(email_usage_key("x@y.z"), email_usage_key(" X@Y.Z "));
    }

    #[test]
    fn empty_email_has_no_key() {
        assert_eq!(email_usage_key(""), None);
        assert_eq!(email_usage_key("   "), None);
    }

    #[test]
    fn normalize_preserves_non_ascii() {
        assert_eq!(normalize_email(" Ünit@Test "), "Ünit@test");
    }
}
