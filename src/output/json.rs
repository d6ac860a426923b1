//! JSON output of dispatched results.

use crate::dispatch::Outcome;
use serde::Serialize;
use std::error::Error;

#[derive(Serialize)]
struct Envelope<'a> {
    action: String,
    result: &'a Outcome,
}

/// Serialize an outcome as a single JSON object tagged with its action.
pub fn render(outcome: &Outcome) -> Result<String, Box<dyn Error>> {
    let envelope = Envelope {
        action: outcome.action().to_string(),
        result: outcome,
    };
    serde_json::to_string(&envelope).map_err(|e| format!("Error serializing JSON: {e}").into())
}
