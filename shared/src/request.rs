use crate::error::ActionError;
use lambda_http::Body;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub const INVALID_BODY: &str = "Request body must be a JSON object";
pub const TEXT_REQUIRED: &str = "Text parameter is required";

/// Body text, with a missing or blank body read as `{}`
pub fn body_text(body: &Body) -> Result<&str, ActionError> {
    let text = match body {
        Body::Text(text) => text.as_str(),
        Body::Binary(bytes) => {
            std::str::from_utf8(bytes).map_err(|_| ActionError::Validation(INVALID_BODY))?
        }
        Body::Empty => "",
    };

    if text.trim().is_empty() {
        Ok("{}")
    } else {
        Ok(text)
    }
}

/// Parse the body into a field map. Anything but a JSON object is rejected.
pub fn parse_object(body: &Body) -> Result<Map<String, Value>, ActionError> {
    match serde_json::from_str::<Value>(body_text(body)?) {
        Ok(Value::Object(fields)) => Ok(fields),
        _ => Err(ActionError::Validation(INVALID_BODY)),
    }
}

/// Decode fields into an action's input schema; a mismatch is reported with
/// that action's own validation message.
pub fn decode<T: DeserializeOwned>(
    fields: Map<String, Value>,
    message: &'static str,
) -> Result<T, ActionError> {
    serde_json::from_value(Value::Object(fields)).map_err(|e| {
        tracing::debug!("Input did not match schema: {}", e);
        ActionError::Validation(message)
    })
}
