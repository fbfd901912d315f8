use std::env;
use thiserror::Error;

/// Table holding user records unless `TABLE_NAME` says otherwise
pub const DEFAULT_TABLE_NAME: &str = "LambdaUser";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("AWS_REGION must be set")]
    MissingRegion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub region: String,
    pub table_name: String,
    /// Overrides the DynamoDB endpoint, e.g. for DynamoDB Local
    pub endpoint_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let region = non_empty("AWS_REGION").ok_or(ConfigError::MissingRegion)?;
        let table_name =
            non_empty("TABLE_NAME").unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string());
        let endpoint_url = non_empty("DYNAMODB_ENDPOINT");

        Ok(Self {
            region,
            table_name,
            endpoint_url,
        })
    }
}
