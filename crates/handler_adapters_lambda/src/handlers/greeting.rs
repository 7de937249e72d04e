use handler_adapters_core::{with_fallible_interface, Handler};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::scope::RequestScope;

pub const MISSING_NAME_ERROR: &str = "name must be a non-empty string";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GreetingResponse {
    pub message: String,
    pub request_id: String,
}

/// Greets the `name` field of an object event.
///
/// Any other event shape, including a non-string `name`, is rejected with
/// [`MISSING_NAME_ERROR`].
pub fn greet<C: RequestScope>(context: &C, event: Value) -> Result<GreetingResponse, String> {
    let name = event
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| MISSING_NAME_ERROR.to_string())?;

    Ok(GreetingResponse {
        message: format!("Hello, {name}!"),
        request_id: context.request_id().to_string(),
    })
}

pub fn greeting_handler<C: RequestScope>() -> impl Handler<C, Value, Output = GreetingResponse> {
    with_fallible_interface(greet::<C>)
}
