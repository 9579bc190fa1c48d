//! Seed command implementation.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use super::error::{DynamodbError, Result};

/// Generate a deterministic pool of sample usernames.
pub fn generate_seed_usernames(count: u32) -> Vec<String> {
    let first = [
        "amelia", "bruno", "carla", "diego", "elena", "felipe", "gloria", "hugo", "irene",
        "joaquin",
    ];
    let last = [
        "acosta", "benitez", "cardozo", "duarte", "estevez", "ferreira", "gimenez", "herrera",
    ];

    (0..count as usize)
        .map(|i| {
            let f = first[i % first.len()];
            let l = last[(i / first.len()) % last.len()];
            match i / (first.len() * last.len()) {
                0 if i < first.len() => f.to_string(),
                0 => format!("{}.{}", f, l),
                n => format!("{}.{}{}", f, l, n),
            }
        })
        .collect()
}

/// Convert a username to a DynamoDB item.
fn username_to_item(username: &str) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();
    item.insert(
        "username".to_string(),
        AttributeValue::S(username.to_string()),
    );

    item
}

/// Insert usernames into DynamoDB.
pub async fn seed_usernames(
    client: &Client,
    table_name: &str,
    usernames: &[String],
) -> Result<u32> {
    let mut inserted = 0;

    // Use batch write for efficiency (25 items per batch max)
    for chunk in usernames.chunks(25) {
        let write_requests: Vec<_> = chunk
            .iter()
            .map(|username| {
                aws_sdk_dynamodb::types::WriteRequest::builder()
                    .put_request(
                        aws_sdk_dynamodb::types::PutRequest::builder()
                            .set_item(Some(username_to_item(username)))
                            .build()
                            .expect("Failed to build PutRequest"),
                    )
                    .build()
            })
            .collect();

        client
            .batch_write_item()
            .request_items(table_name, write_requests)
            .send()
            .await
            .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

        inserted += chunk.len() as u32;
    }

    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_usernames_are_unique() {
        let usernames = generate_seed_usernames(100);
        let unique: HashSet<_> = usernames.iter().collect();

        assert_eq!(unique.len(), usernames.len());
    }

    #[test]
    fn test_small_counts_use_bare_first_names() {
        let usernames = generate_seed_usernames(3);

        assert_eq!(usernames, vec!["amelia", "bruno", "carla"]);
    }
}
