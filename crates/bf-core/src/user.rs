//! User identity captured at the disclaimer screen.

/// User identity collected at intake.
///
/// Held by the session for its lifetime and mirrored into the local backup
/// slot so a payment return on a fresh page load can restore it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub name: String,
    pub email: String,
    /// Premium unlock state. Older stored backups predate this field, so it
    /// defaults to false when absent.
    #[serde(default)]
    pub is_premium: bool,
}

impl UserInfo {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            is_premium: false,
        }
    }

    /// Fallback identity used when a payment return arrives without a
    /// recoverable backup.
    pub fn traveler() -> Self {
        Self {
            name: "Traveler".to_string(),
            email: String::new(),
            is_premium: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UserInfo;

    #[test]
    fn deserializes_backup_without_premium_field() {
        let user: UserInfo =
            serde_json::from_str(r#"{"name":"Ada","email":"ada@example.com"}"#).unwrap();
        assert_eq!(user.name, "Ada");
        assert!(!user.is_premium);
    }

    #[test]
    fn round_trips_camel_case_premium_field() {
        let user = UserInfo {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            is_premium: true,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"isPremium\":true"));
        assert_eq!(serde_json::from_str::<UserInfo>(&json).unwrap(), user);
    }
}
