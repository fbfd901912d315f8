use crate::error::UserError;
use crate::item::{from_item, string_key, to_item};
use crate::store::{ItemStore, PutCondition, StoreError};
use crate::types::{User, USER_KEY};
use crate::validators::is_email_valid;

/// Get a user by email. `Ok(None)` when no record matches.
pub async fn fetch_user<S: ItemStore + ?Sized>(
    store: &S,
    table_name: &str,
    email: &str,
) -> Result<Option<User>, UserError> {
    let item = store
        .get_item(table_name, string_key(USER_KEY, email))
        .await
        .map_err(|e| {
            tracing::error!("GetItem on {} failed: {}", table_name, e);
            UserError::FetchFailed
        })?;

    match item {
        Some(item) => from_item(&item).map(Some).map_err(|e| {
            tracing::error!("Stored user in {} could not be decoded: {}", table_name, e);
            UserError::DeserializeFailed
        }),
        None => Ok(None),
    }
}

/// List every user in the table.
///
/// Reads the whole table in one pass, so large tables hold the caller until
/// the last page has been fetched.
pub async fn fetch_users<S: ItemStore + ?Sized>(
    store: &S,
    table_name: &str,
) -> Result<Vec<User>, UserError> {
    let items = store.scan_all(table_name).await.map_err(|e| {
        tracing::error!("Scan on {} failed: {}", table_name, e);
        UserError::FetchFailed
    })?;

    items
        .iter()
        .map(|item| {
            from_item(item).map_err(|e| {
                tracing::error!("Stored user in {} could not be decoded: {}", table_name, e);
                UserError::DeserializeFailed
            })
        })
        .collect()
}

/// Create a user from a JSON body
pub async fn create_user<S: ItemStore + ?Sized>(
    store: &S,
    table_name: &str,
    body: &[u8],
) -> Result<User, UserError> {
    let user: User = serde_json::from_slice(body).map_err(|_| UserError::InvalidUserData)?;

    if !is_email_valid(&user.email) {
        return Err(UserError::InvalidUserData);
    }

    if let Some(current) = fetch_user(store, table_name, &user.email).await? {
        if !current.email.is_empty() {
            return Err(UserError::UserAlreadyExists);
        }
    }

    // A concurrent create between the check above and this write trips the condition
    put_user(
        store,
        table_name,
        &user,
        PutCondition::AttributeNotExists(USER_KEY),
        UserError::UserAlreadyExists,
    )
    .await?;

    tracing::info!("Created user {}", user.email);
    Ok(user)
}

/// Replace an existing user with the JSON body.
///
/// The email format is not re-validated here, only its existence.
pub async fn update_user<S: ItemStore + ?Sized>(
    store: &S,
    table_name: &str,
    body: &[u8],
) -> Result<User, UserError> {
    let user: User = serde_json::from_slice(body).map_err(|_| UserError::InvalidUserData)?;

    // DynamoDB rejects empty key values, and no stored user can have one
    if user.email.is_empty() {
        return Err(UserError::UserDoesNotExist);
    }

    match fetch_user(store, table_name, &user.email).await? {
        Some(current) if !current.email.is_empty() => {}
        _ => return Err(UserError::UserDoesNotExist),
    }

    put_user(
        store,
        table_name,
        &user,
        PutCondition::AttributeExists(USER_KEY),
        UserError::UserDoesNotExist,
    )
    .await?;

    tracing::info!("Updated user {}", user.email);
    Ok(user)
}

/// Delete a user by email. Missing users are not an error.
pub async fn delete_user<S: ItemStore + ?Sized>(
    store: &S,
    table_name: &str,
    email: &str,
) -> Result<(), UserError> {
    store
        .delete_item(table_name, string_key(USER_KEY, email))
        .await
        .map_err(|e| {
            tracing::error!("DeleteItem on {} failed: {}", table_name, e);
            UserError::DeleteFailed
        })?;

    tracing::info!("Deleted user {}", email);
    Ok(())
}

async fn put_user<S: ItemStore + ?Sized>(
    store: &S,
    table_name: &str,
    user: &User,
    condition: PutCondition<'_>,
    on_condition_failed: UserError,
) -> Result<(), UserError> {
    let item = to_item(user).map_err(|e| {
        tracing::error!("User {} could not be encoded: {}", user.email, e);
        UserError::MarshalFailed
    })?;

    store
        .put_item(table_name, item, condition)
        .await
        .map_err(|e| match e {
            StoreError::ConditionFailed => on_condition_failed,
            StoreError::Backend(msg) => {
                tracing::error!("PutItem on {} failed: {}", table_name, msg);
                UserError::PutFailed
            }
        })
}
