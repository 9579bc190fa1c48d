//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! domain types. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::Value;

use userdir_core::storage::RepositoryError;
use userdir_core::user::UserRecord;

/// Convert a UserRecord to a DynamoDB item.
pub fn record_to_item(record: &UserRecord) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();
    item.insert(
        "username".to_string(),
        json_to_attribute_value(&record.username),
    );

    item
}

/// Convert a DynamoDB item to a UserRecord.
pub fn item_to_record(
    item: &HashMap<String, AttributeValue>,
) -> Result<UserRecord, RepositoryError> {
    let username = item
        .get("username")
        .ok_or_else(|| RepositoryError::InvalidData("Missing field: username".to_string()))?;

    Ok(UserRecord {
        username: attribute_value_to_json(username)?,
    })
}

/// Convert a JSON value to its native DynamoDB attribute type.
///
/// The create operation accepts any JSON value for `username`; whether the
/// result is a legal key type is the store's decision, not ours.
pub fn json_to_attribute_value(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(values) => {
            AttributeValue::L(values.iter().map(json_to_attribute_value).collect())
        }
        Value::Object(map) => AttributeValue::M(
            map.iter()
                .map(|(k, v)| (k.clone(), json_to_attribute_value(v)))
                .collect(),
        ),
    }
}

/// Convert a DynamoDB attribute back to JSON.
pub fn attribute_value_to_json(value: &AttributeValue) -> Result<Value, RepositoryError> {
    match value {
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::N(n) => n
            .parse::<serde_json::Number>()
            .map(Value::Number)
            .map_err(|e| RepositoryError::InvalidData(format!("Invalid number attribute: {}", e))),
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::L(values) => values
            .iter()
            .map(attribute_value_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(map) => map
            .iter()
            .map(|(k, v)| attribute_value_to_json(v).map(|v| (k.clone(), v)))
            .collect::<Result<serde_json::Map<_, _>, _>>()
            .map(Value::Object),
        other => Err(RepositoryError::InvalidData(format!(
            "Unsupported attribute type: {:?}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_item_round_trip() {
        let record = UserRecord::new("alice");
        let item = record_to_item(&record);
        let parsed = item_to_record(&item).unwrap();

        assert_eq!(record, parsed);
    }

    #[test]
    fn test_string_username_maps_to_s() {
        let item = record_to_item(&UserRecord::new("alice"));

        assert_eq!(item.get("username").unwrap().as_s().unwrap(), "alice");
    }

    #[test]
    fn test_number_username_maps_to_n() {
        let item = record_to_item(&UserRecord::new(42));

        assert_eq!(item.get("username").unwrap().as_n().unwrap(), "42");
    }

    #[test]
    fn test_nested_value_round_trip() {
        let value = json!({"name": "alice", "tags": ["a", "b"], "active": true});
        let attribute = json_to_attribute_value(&value);
        let parsed = attribute_value_to_json(&attribute).unwrap();

        assert_eq!(parsed, value);
    }

    #[test]
    fn test_item_missing_username_is_invalid() {
        let item = HashMap::new();

        assert!(matches!(
            item_to_record(&item),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_binary_attribute_is_invalid() {
        let attribute = AttributeValue::B(aws_sdk_dynamodb::primitives::Blob::new(vec![1, 2]));

        assert!(matches!(
            attribute_value_to_json(&attribute),
            Err(RepositoryError::InvalidData(_))
        ));
    }
}
