use aws_sdk_dynamodb::Client as DynamoClient;
use cloudkit_shared::config;
use cloudkit_shared::users::{CreateUser, DynamoUserStore};
use lambda_http::{run, service_fn, tracing, Error, Request};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // No table, no service: fail before the first request
    let table_name = config::table_name()?;
    tracing::info!("Using users table: {}", table_name);

    let sdk_config = aws_config::load_from_env().await;
    let store = DynamoUserStore::new(DynamoClient::new(&sdk_config), table_name);
    let action = Arc::new(CreateUser::new(Arc::new(store)));

    run(service_fn(move |event: Request| {
        let action = Arc::clone(&action);
        async move { cloudkit_shared::function_handler(event, action).await }
    }))
    .await
}
