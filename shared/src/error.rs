use lambda_http::http::StatusCode;
use thiserror::Error;

/// Failure categories surfaced by the user repository.
///
/// The `Display` text is the message returned to callers, so it never carries
/// store internals. Those are logged where the error is produced.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UserError {
    #[error("Failed to fetch record")]
    FetchFailed,
    #[error("Failed to unmarshal record")]
    DeserializeFailed,
    #[error("Invalid user data")]
    InvalidUserData,
    #[error("Could not marshal item")]
    MarshalFailed,
    #[error("Could not dynamo put item")]
    PutFailed,
    #[error("Could not delete item")]
    DeleteFailed,
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User does not exist")]
    UserDoesNotExist,
}

impl UserError {
    /// Client mistakes are 400s, anything the store did wrong is a 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            UserError::InvalidUserData
            | UserError::UserAlreadyExists
            | UserError::UserDoesNotExist => StatusCode::BAD_REQUEST,
            UserError::FetchFailed
            | UserError::DeserializeFailed
            | UserError::MarshalFailed
            | UserError::PutFailed
            | UserError::DeleteFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
