use super::{ItemStore, PutCondition, StoreError};
use crate::item::Item;
use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::Client as DynamoClient;

fn backend<E: std::error::Error>(err: E) -> StoreError {
    StoreError::Backend(DisplayErrorContext(err).to_string())
}

#[async_trait]
impl ItemStore for DynamoClient {
    async fn get_item(&self, table_name: &str, key: Item) -> Result<Option<Item>, StoreError> {
        let result = self
            .get_item()
            .table_name(table_name)
            .set_key(Some(key))
            .send()
            .await
            .map_err(backend)?;

        // DynamoDB omits `Item` when nothing matches the key
        Ok(result.item.filter(|item| !item.is_empty()))
    }

    async fn scan_all(&self, table_name: &str) -> Result<Vec<Item>, StoreError> {
        let mut items = Vec::new();
        let mut start_key: Option<Item> = None;

        loop {
            let result = self
                .scan()
                .table_name(table_name)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(backend)?;

            if let Some(page) = result.items {
                items.extend(page);
            }

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        tracing::debug!("Scanned {} items from {}", items.len(), table_name);
        Ok(items)
    }

    async fn put_item(
        &self,
        table_name: &str,
        item: Item,
        condition: PutCondition<'_>,
    ) -> Result<(), StoreError> {
        let builder = self.put_item().table_name(table_name).set_item(Some(item));

        let builder = match condition {
            PutCondition::AttributeNotExists(name) => builder
                .condition_expression("attribute_not_exists(#key)")
                .expression_attribute_names("#key", name),
            PutCondition::AttributeExists(name) => builder
                .condition_expression("attribute_exists(#key)")
                .expression_attribute_names("#key", name),
        };

        match builder.send().await {
            Ok(_) => Ok(()),
            Err(err)
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_conditional_check_failed_exception()) =>
            {
                Err(StoreError::ConditionFailed)
            }
            Err(err) => Err(backend(err)),
        }
    }

    async fn delete_item(&self, table_name: &str, key: Item) -> Result<(), StoreError> {
        self.delete_item()
            .table_name(table_name)
            .set_key(Some(key))
            .send()
            .await
            .map_err(backend)?;
        Ok(())
    }
}
