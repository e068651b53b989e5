use crate::error::ActionError;
use lambda_http::{
    http::{
        header::{HeaderValue, CONTENT_TYPE},
        StatusCode,
    },
    Body, Response,
};
use serde_json::{json, Value};

pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Build a JSON response carrying the headers every caller relies on.
/// Infallible, unlike `Response::builder()`.
pub fn json_response(status: StatusCode, payload: &Value) -> Response<Body> {
    let mut resp = Response::new(Body::from(payload.to_string()));
    *resp.status_mut() = status;
    let headers = resp.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        "access-control-allow-origin",
        HeaderValue::from_static("*"),
    );
    resp
}

/// 400 for validation failures, 500 with `details` for everything else
pub fn error_response(err: &ActionError) -> Response<Body> {
    match err {
        ActionError::Validation(message) => {
            json_response(StatusCode::BAD_REQUEST, &json!({ "error": message }))
        }
        _ => {
            let mut details = err.to_string();
            if details.is_empty() {
                details = format!("{:?}", err);
            }
            json_response(
                err.status(),
                &json!({
                    "error": INTERNAL_SERVER_ERROR,
                    "details": details,
                }),
            )
        }
    }
}

/// CORS preflight answer for browser callers
pub fn preflight() -> Response<Body> {
    let mut resp = json_response(StatusCode::OK, &json!({}));
    let headers = resp.headers_mut();
    headers.insert(
        "access-control-allow-methods",
        HeaderValue::from_static("POST,OPTIONS"),
    );
    headers.insert(
        "access-control-allow-headers",
        HeaderValue::from_static("Content-Type"),
    );
    resp
}
