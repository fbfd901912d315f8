use super::{ItemStore, PutCondition, StoreError};
use crate::item::Item;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

/// In-process store keyed on a single string partition key.
///
/// Tables are created on first write. Scans return items in key order.
#[derive(Debug)]
pub struct MemoryStore {
    key_attribute: String,
    tables: RwLock<HashMap<String, BTreeMap<String, Item>>>,
}

impl MemoryStore {
    pub fn new(key_attribute: impl Into<String>) -> Self {
        Self {
            key_attribute: key_attribute.into(),
            tables: RwLock::new(HashMap::new()),
        }
    }

    /// Extract the partition key. Like DynamoDB, an empty string is not a valid key.
    fn key_of(&self, item: &Item) -> Result<String, StoreError> {
        match item.get(&self.key_attribute).and_then(|v| v.as_s().ok()) {
            Some(key) if !key.is_empty() => Ok(key.clone()),
            Some(_) => Err(StoreError::Backend(format!(
                "key attribute {} must not be empty",
                self.key_attribute
            ))),
            None => Err(StoreError::Backend(format!(
                "missing string key attribute {}",
                self.key_attribute
            ))),
        }
    }

    fn poisoned() -> StoreError {
        StoreError::Backend("memory store lock poisoned".to_string())
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn get_item(&self, table_name: &str, key: Item) -> Result<Option<Item>, StoreError> {
        let key = self.key_of(&key)?;
        let tables = self.tables.read().map_err(|_| Self::poisoned())?;
        Ok(tables.get(table_name).and_then(|t| t.get(&key)).cloned())
    }

    async fn scan_all(&self, table_name: &str) -> Result<Vec<Item>, StoreError> {
        let tables = self.tables.read().map_err(|_| Self::poisoned())?;
        Ok(tables
            .get(table_name)
            .map(|t| t.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn put_item(
        &self,
        table_name: &str,
        item: Item,
        condition: PutCondition<'_>,
    ) -> Result<(), StoreError> {
        let key = self.key_of(&item)?;
        let mut tables = self.tables.write().map_err(|_| Self::poisoned())?;
        let table = tables.entry(table_name.to_string()).or_default();

        let holds = match condition {
            PutCondition::AttributeNotExists(name) => {
                table.get(&key).map_or(true, |existing| !existing.contains_key(name))
            }
            PutCondition::AttributeExists(name) => {
                table.get(&key).is_some_and(|existing| existing.contains_key(name))
            }
        };
        if !holds {
            return Err(StoreError::ConditionFailed);
        }

        table.insert(key, item);
        Ok(())
    }

    async fn delete_item(&self, table_name: &str, key: Item) -> Result<(), StoreError> {
        let key = self.key_of(&key)?;
        let mut tables = self.tables.write().map_err(|_| Self::poisoned())?;
        if let Some(table) = tables.get_mut(table_name) {
            table.remove(&key);
        }
        Ok(())
    }
}
