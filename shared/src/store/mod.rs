//! Key-value store seam used by the user repository.
//!
//! `aws_sdk_dynamodb::Client` is the production implementation. `MemoryStore`
//! keeps items in process and backs the tests.

mod dynamo;
mod memory;

pub use memory::MemoryStore;

use crate::item::Item;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The condition attached to a conditional write did not hold
    #[error("conditional check failed")]
    ConditionFailed,
    #[error("store request failed: {0}")]
    Backend(String),
}

/// Guard evaluated by the store atomically with a put
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutCondition<'a> {
    /// Only write when no item with this key attribute exists yet
    AttributeNotExists(&'a str),
    /// Only write when an item with this key attribute already exists
    AttributeExists(&'a str),
}

#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Fetch one item by its primary key. `None` when no item matches.
    async fn get_item(&self, table_name: &str, key: Item) -> Result<Option<Item>, StoreError>;

    /// Read every item in the table, following pagination to the end
    async fn scan_all(&self, table_name: &str) -> Result<Vec<Item>, StoreError>;

    async fn put_item(
        &self,
        table_name: &str,
        item: Item,
        condition: PutCondition<'_>,
    ) -> Result<(), StoreError>;

    /// Delete by primary key. Deleting a missing key is not an error.
    async fn delete_item(&self, table_name: &str, key: Item) -> Result<(), StoreError>;
}
