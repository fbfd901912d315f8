use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::Client as DynamoClient;
use lambda_http::{run, service_fn, tracing, Error, Request};
use std::sync::Arc;
use user_service_shared::AppState;

mod config;
mod http_handler;

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // Without a region there is no store to talk to, so refuse to start
    let config = Config::from_env().map_err(|e| {
        tracing::error!("User Lambda failed to boot: {}", e);
        e
    })?;

    let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .load()
        .await;

    let mut dynamo_config = aws_sdk_dynamodb::config::Builder::from(&sdk_config);
    if let Some(endpoint) = &config.endpoint_url {
        dynamo_config = dynamo_config.endpoint_url(endpoint);
    }
    let dynamo_client = DynamoClient::from_conf(dynamo_config.build());

    tracing::info!(
        "User Lambda ready - Region: {} Table: {}",
        config.region,
        config.table_name
    );

    let state = AppState::new(dynamo_client, config.table_name);

    run(service_fn(move |event: Request| {
        let state = Arc::clone(&state);
        async move { http_handler::function_handler(event, state).await }
    }))
    .await
}
