use serde::{Deserialize, Serialize};

/// Name of the partition key attribute in the users table
pub const USER_KEY: &str = "email";

// ========== USER ==========
// Absent fields decode to empty strings, both from request bodies and from stored items.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_uses_camel_case_fields() {
        let user = User {
            email: "a@b.com".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "a@b.com", "firstName": "A", "lastName": "B"})
        );
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let user: User = serde_json::from_str(r#"{"email":"a@b.com"}"#).unwrap();
        assert_eq!(user.email, "a@b.com");
        assert!(user.first_name.is_empty());
        assert!(user.last_name.is_empty());

        let empty: User = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, User::default());
    }
}
