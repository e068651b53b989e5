use crate::error::ActionError;
use crate::request;
use crate::response::{error_response, json_response, preflight};
use async_trait::async_trait;
use futures::FutureExt;
use lambda_http::{
    http::{Method, StatusCode},
    Body, Error, Request, Response,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

/// One request-handling behavior: a typed input schema, a validation rule and
/// a single call to an external capability.
#[async_trait]
pub trait Action: Send + Sync {
    /// Shape the JSON body is decoded into
    type Input: DeserializeOwned + Send;
    /// Input that passed validation
    type Validated: Send;

    /// Name used in logs
    const NAME: &'static str;
    /// Message for a body that does not fit `Input`
    const INVALID_INPUT: &'static str;
    /// Status of a successful response
    const SUCCESS: StatusCode;

    fn validate(&self, input: Self::Input) -> Result<Self::Validated, ActionError>;

    /// Make the external call and shape its result into the response payload.
    async fn execute(&self, request: Self::Validated) -> Result<Value, ActionError>;
}

/// Terminal state of an invocation.
#[derive(Debug)]
pub enum Outcome {
    /// Input failed parsing or validation; no external call was made
    Rejected(ActionError),
    Succeeded(StatusCode, Value),
    /// The external call (or anything after validation) failed
    CallFailed(ActionError),
}

impl Outcome {
    pub fn into_response(self) -> Response<Body> {
        match self {
            Outcome::Succeeded(status, payload) => json_response(status, &payload),
            Outcome::Rejected(err) | Outcome::CallFailed(err) => error_response(&err),
        }
    }
}

/// Run one invocation through parse, validate and execute.
pub async fn process<A: Action>(action: &A, body: &Body) -> Outcome {
    let validated = match request::parse_object(body)
        .and_then(|fields| request::decode::<A::Input>(fields, A::INVALID_INPUT))
        .and_then(|input| action.validate(input))
    {
        Ok(validated) => validated,
        Err(err) => {
            tracing::warn!("{} rejected: {}", A::NAME, err);
            return Outcome::Rejected(err);
        }
    };

    match AssertUnwindSafe(action.execute(validated)).catch_unwind().await {
        Ok(Ok(payload)) => {
            tracing::info!("{} succeeded", A::NAME);
            Outcome::Succeeded(A::SUCCESS, payload)
        }
        Ok(Err(err)) => {
            tracing::error!("{} failed: {}", A::NAME, err);
            Outcome::CallFailed(err)
        }
        Err(panic) => {
            let details = panic_message(panic.as_ref());
            tracing::error!("{} panicked: {}", A::NAME, details);
            Outcome::CallFailed(ActionError::Panicked(details))
        }
    }
}

/// Handle a request body. Always resolves to a response.
pub async fn handle<A: Action>(action: &A, body: &Body) -> Response<Body> {
    process(action, body).await.into_response()
}

/// Lambda entry point shared by every action binary
pub async fn function_handler<A: Action>(
    event: Request,
    action: Arc<A>,
) -> Result<Response<Body>, Error> {
    tracing::info!("{} invoked - Method: {}", A::NAME, event.method());

    // Handle CORS preflight
    if event.method() == Method::OPTIONS {
        return Ok(preflight());
    }

    Ok(handle(action.as_ref(), event.body()).await)
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "handler panicked".to_string()
    }
}
