use aws_sdk_polly::Client as PollyClient;
use cloudkit_shared::speech::{PollySynthesizer, SynthesizeSpeech};
use lambda_http::{run, service_fn, tracing, Error, Request};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // Initialize AWS clients once at startup
    let config = aws_config::load_from_env().await;
    let synthesizer = PollySynthesizer::new(PollyClient::new(&config));
    let action = Arc::new(SynthesizeSpeech::new(Arc::new(synthesizer)));

    run(service_fn(move |event: Request| {
        let action = Arc::clone(&action);
        async move { cloudkit_shared::function_handler(event, action).await }
    }))
    .await
}
