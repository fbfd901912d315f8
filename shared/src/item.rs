//! Conversion between serde values and DynamoDB attribute maps.
//!
//! Values go through `serde_json::Value` on the way in and out, so any type
//! that round-trips through JSON can be stored as an item.

use aws_sdk_dynamodb::types::AttributeValue;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::HashMap;
use thiserror::Error;

/// A single DynamoDB record
pub type Item = HashMap<String, AttributeValue>;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("item must serialize to a JSON object")]
    NotAnObject,
    #[error("attribute {0} has an unsupported type")]
    Unsupported(String),
    #[error("attribute {0} is not a valid number")]
    InvalidNumber(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Encode a value as an item. The value must serialize to a JSON object.
pub fn to_item<T: Serialize>(value: &T) -> Result<Item, ItemError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map
            .into_iter()
            .map(|(name, value)| (name, to_attribute(value)))
            .collect()),
        _ => Err(ItemError::NotAnObject),
    }
}

/// Decode an item into `T`
pub fn from_item<T: DeserializeOwned>(item: &Item) -> Result<T, ItemError> {
    let map = item
        .iter()
        .map(|(name, attr)| Ok((name.clone(), from_attribute(name, attr)?)))
        .collect::<Result<Map<String, Value>, ItemError>>()?;
    Ok(serde_json::from_value(Value::Object(map))?)
}

/// Build a single-attribute string key
pub fn string_key(name: &str, value: &str) -> Item {
    HashMap::from([(name.to_string(), AttributeValue::S(value.to_string()))])
}

fn to_attribute(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s),
        Value::Array(values) => AttributeValue::L(values.into_iter().map(to_attribute).collect()),
        Value::Object(map) => AttributeValue::M(
            map.into_iter()
                .map(|(name, value)| (name, to_attribute(value)))
                .collect(),
        ),
    }
}

fn from_attribute(name: &str, attr: &AttributeValue) -> Result<Value, ItemError> {
    let value = match attr {
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::N(n) => Value::Number(parse_number(name, n)?),
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::Ss(values) => {
            Value::Array(values.iter().cloned().map(Value::String).collect())
        }
        AttributeValue::L(values) => Value::Array(
            values
                .iter()
                .map(|v| from_attribute(name, v))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        AttributeValue::M(map) => Value::Object(
            map.iter()
                .map(|(k, v)| Ok((k.clone(), from_attribute(k, v)?)))
                .collect::<Result<Map<String, Value>, ItemError>>()?,
        ),
        _ => return Err(ItemError::Unsupported(name.to_string())),
    };
    Ok(value)
}

fn parse_number(name: &str, raw: &str) -> Result<Number, ItemError> {
    if let Ok(n) = raw.parse::<i64>() {
        return Ok(Number::from(n));
    }
    if let Ok(n) = raw.parse::<u64>() {
        return Ok(Number::from(n));
    }
    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .ok_or_else(|| ItemError::InvalidNumber(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::User;

    fn user() -> User {
        User {
            email: "a@b.com".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
        }
    }

    #[test]
    fn test_user_item_uses_string_attributes() {
        let item = to_item(&user()).unwrap();

        assert_eq!(item.len(), 3);
        assert_eq!(item.get("email"), Some(&AttributeValue::S("a@b.com".to_string())));
        assert_eq!(item.get("firstName"), Some(&AttributeValue::S("A".to_string())));
        assert_eq!(item.get("lastName"), Some(&AttributeValue::S("B".to_string())));
    }

    #[test]
    fn test_decode_tolerates_missing_attributes() {
        let item = string_key("email", "a@b.com");
        let decoded: User = from_item(&item).unwrap();

        assert_eq!(decoded.email, "a@b.com");
        assert!(decoded.first_name.is_empty());
    }

    #[test]
    fn test_decode_rejects_wrong_attribute_type() {
        let mut item = to_item(&user()).unwrap();
        item.insert("firstName".to_string(), AttributeValue::N("42".to_string()));

        assert!(matches!(from_item::<User>(&item), Err(ItemError::Json(_))));
    }

    #[test]
    fn test_decode_rejects_binary_attributes() {
        let mut item = to_item(&user()).unwrap();
        item.insert(
            "avatar".to_string(),
            AttributeValue::B(aws_sdk_dynamodb::primitives::Blob::new(vec![1, 2, 3])),
        );

        assert!(matches!(from_item::<User>(&item), Err(ItemError::Unsupported(name)) if name == "avatar"));
    }

    #[test]
    fn test_non_object_values_are_rejected() {
        assert!(matches!(to_item(&"just a string"), Err(ItemError::NotAnObject)));
        assert!(matches!(to_item(&vec![1, 2]), Err(ItemError::NotAnObject)));
    }

    #[test]
    fn test_nested_values() {
        let value = serde_json::json!({
            "count": 3,
            "ratio": 0.5,
            "active": true,
            "tags": ["x", "y"],
            "profile": {"city": "Oslo"},
            "nickname": null,
        });

        let item = to_item(&value).unwrap();
        assert_eq!(item.get("count"), Some(&AttributeValue::N("3".to_string())));
        assert_eq!(item.get("nickname"), Some(&AttributeValue::Null(true)));

        let back: serde_json::Value = from_item(&item).unwrap();
        assert_eq!(back, value);
    }
}
