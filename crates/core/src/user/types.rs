use serde::{Deserialize, Serialize};

/// A record in the username directory.
///
/// The backing table has a single attribute. The create operation performs
/// no type checking on it, so the value is kept as raw JSON rather than a
/// `String`: whatever the caller sent is what gets stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: serde_json::Value,
}

impl UserRecord {
    /// Creates a record from any JSON-serializable username value.
    pub fn new(username: impl Into<serde_json::Value>) -> Self {
        Self {
            username: username.into(),
        }
    }

    /// Canonical string key for stores that index records by string.
    ///
    /// Uses the compact JSON encoding, so `"0"` and `0` stay distinct.
    pub fn key(&self) -> String {
        self.username.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_distinguishes_value_types() {
        assert_eq!(UserRecord::new("alice").key(), "\"alice\"");
        assert_eq!(UserRecord::new(0).key(), "0");
        assert_ne!(UserRecord::new("0").key(), UserRecord::new(0).key());
    }

    #[test]
    fn test_serde_round_trip() {
        let record = UserRecord::new("alice");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"username":"alice"}"#);

        let parsed: UserRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
