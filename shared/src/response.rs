use crate::error::UserError;
use lambda_http::{http::StatusCode, Body, Error, Response};
use serde::Serialize;

/// Write `body` as JSON into a response with the given status.
///
/// A value that fails to serialize yields an empty body rather than an error.
pub fn api_response<T: Serialize + ?Sized>(
    status: StatusCode,
    body: &T,
) -> Result<Response<Body>, Error> {
    let body = serde_json::to_string(body).unwrap_or_else(|e| {
        tracing::warn!("Response body could not be serialized: {}", e);
        String::new()
    });

    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(body.into())
        .map_err(Box::new)?)
}

pub fn error_response(err: &UserError) -> Result<Response<Body>, Error> {
    api_response(
        err.status_code(),
        &serde_json::json!({"error": err.to_string()}),
    )
}

pub fn method_not_allowed() -> Result<Response<Body>, Error> {
    api_response(
        StatusCode::BAD_REQUEST,
        &serde_json::json!({"error": "method not allowed"}),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::User;
    use serde::ser::Error as _;
    use serde::Serializer;

    fn body_string(response: &Response<Body>) -> String {
        String::from_utf8(response.body().to_vec()).unwrap()
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("nope"))
        }
    }

    #[test]
    fn test_json_envelope() {
        let user = User {
            email: "a@b.com".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
        };

        let response = api_response(StatusCode::OK, &user).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["Content-Type"], "application/json");
        assert_eq!(
            body_string(&response),
            r#"{"email":"a@b.com","firstName":"A","lastName":"B"}"#
        );
    }

    #[test]
    fn test_unit_body_is_null() {
        let response = api_response(StatusCode::OK, &()).unwrap();
        assert_eq!(body_string(&response), "null");
    }

    #[test]
    fn test_serialization_failure_gives_empty_body() {
        let response = api_response(StatusCode::OK, &Unserializable).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(&response), "");
    }

    #[test]
    fn test_error_response() {
        let response = error_response(&UserError::UserAlreadyExists).unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_string(&response), r#"{"error":"User already exists"}"#);

        let response = error_response(&UserError::FetchFailed).unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(&response), r#"{"error":"Failed to fetch record"}"#);
    }

    #[test]
    fn test_method_not_allowed() {
        let response = method_not_allowed().unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_string(&response), r#"{"error":"method not allowed"}"#);
    }
}
