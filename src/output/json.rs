//! JSON output.

use serde::Serialize;
use std::error::Error;

/// Pretty-printed JSON for any result type.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(value).map_err(|e| format!("Error serializing JSON: {e}").into())
}
