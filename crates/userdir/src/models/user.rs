use serde::Deserialize;

/// Request payload for creating a username.
///
/// The field is optional and untyped on purpose: presence and truthiness
/// are checked by the handler, not the deserializer.
#[derive(Debug, Deserialize)]
pub struct CreateUsername {
    #[serde(default)]
    pub username: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_username_deserializes() {
        let payload: CreateUsername = serde_json::from_str("{}").unwrap();
        assert!(payload.username.is_none());
    }

    #[test]
    fn test_untyped_username_deserializes() {
        let payload: CreateUsername = serde_json::from_str(r#"{"username": 42}"#).unwrap();
        assert_eq!(payload.username, Some(serde_json::json!(42)));
    }
}
