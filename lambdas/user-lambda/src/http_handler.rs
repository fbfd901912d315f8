use lambda_http::{
    http::{Method, StatusCode},
    Body, Error, Request, RequestExt, Response,
};
use std::sync::Arc;
use user_service_shared::{
    error::UserError,
    response::{api_response, error_response, method_not_allowed},
    store::ItemStore,
    users, AppState,
};

/// What a single invocation asks of the user table
#[derive(Debug, PartialEq, Eq)]
enum UserCommand<'a> {
    FetchAll,
    FetchOne(&'a str),
    Create(&'a [u8]),
    Update(&'a [u8]),
    Delete(&'a str),
    /// DELETE without an `email` query parameter
    DeleteWithoutEmail,
    Unsupported,
}

impl<'a> UserCommand<'a> {
    fn parse(method: &Method, email: Option<&'a str>, body: &'a [u8]) -> Self {
        let email = email.filter(|e| !e.is_empty());

        match (method, email) {
            (&Method::GET, None) => UserCommand::FetchAll,
            (&Method::GET, Some(email)) => UserCommand::FetchOne(email),
            (&Method::POST, _) => UserCommand::Create(body),
            (&Method::PUT, _) => UserCommand::Update(body),
            (&Method::DELETE, Some(email)) => UserCommand::Delete(email),
            (&Method::DELETE, None) => UserCommand::DeleteWithoutEmail,
            _ => UserCommand::Unsupported,
        }
    }
}

/// Main Lambda handler - routes requests to the user repository
pub(crate) async fn function_handler<S: ItemStore>(
    event: Request,
    state: Arc<AppState<S>>,
) -> Result<Response<Body>, Error> {
    let method = event.method();
    let path = event.uri().path();
    tracing::info!("User Lambda invoked - Method: {} Path: {}", method, path);

    let email = event
        .query_string_parameters_ref()
        .and_then(|params| params.first("email"));
    let command = UserCommand::parse(method, email, event.body());

    let store = &state.store;
    let table_name = state.table_name.as_str();

    let result = match command {
        UserCommand::FetchAll => users::fetch_users(store, table_name)
            .await
            .map(|all| api_response(StatusCode::OK, &all)),
        // A missing record renders as an all-empty user, not a 404
        UserCommand::FetchOne(email) => users::fetch_user(store, table_name, email)
            .await
            .map(|user| api_response(StatusCode::OK, &user.unwrap_or_default())),
        UserCommand::Create(body) => users::create_user(store, table_name, body)
            .await
            .map(|user| api_response(StatusCode::OK, &user)),
        UserCommand::Update(body) => users::update_user(store, table_name, body)
            .await
            .map(|user| api_response(StatusCode::OK, &user)),
        UserCommand::Delete(email) => users::delete_user(store, table_name, email)
            .await
            .map(|()| api_response(StatusCode::OK, &())),
        UserCommand::DeleteWithoutEmail => Err(UserError::InvalidUserData),
        UserCommand::Unsupported => {
            tracing::warn!("⚠️ Unsupported method: {}", method);
            return method_not_allowed();
        }
    };

    match result {
        Ok(response) => response,
        Err(err) => {
            if err.status_code().is_server_error() {
                tracing::error!("{} {} failed: {}", method, path, err);
            } else {
                tracing::warn!("{} {} rejected: {}", method, path, err);
            }
            error_response(&err)
        }
    }
}
