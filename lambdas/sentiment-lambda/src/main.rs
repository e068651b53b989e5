use aws_sdk_comprehend::Client as ComprehendClient;
use cloudkit_shared::sentiment::{AnalyzeSentiment, ComprehendAnalyzer};
use lambda_http::{run, service_fn, tracing, Error, Request};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // Initialize AWS clients once at startup
    let config = aws_config::load_from_env().await;
    let analyzer = ComprehendAnalyzer::new(ComprehendClient::new(&config));
    let action = Arc::new(AnalyzeSentiment::new(Arc::new(analyzer)));

    run(service_fn(move |event: Request| {
        let action = Arc::clone(&action);
        async move { cloudkit_shared::function_handler(event, action).await }
    }))
    .await
}
