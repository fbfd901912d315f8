pub mod types;
pub mod error;
pub mod validators;
pub mod item;
pub mod store;
pub mod users;
pub mod response;

use aws_sdk_dynamodb::Client as DynamoClient;
use std::sync::Arc;

/// Shared application state, built once per process
pub struct AppState<S = DynamoClient> {
    pub store: S,
    pub table_name: String,
}

impl<S> AppState<S> {
    pub fn new(store: S, table_name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            store,
            table_name: table_name.into(),
        })
    }
}
