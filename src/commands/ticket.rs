//! Ticket Commands
//!
//! Frontend bindings for ticket-related backend commands.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::invoke;
use crate::error::LoadError;
use crate::models::Ticket;

pub async fn list_tickets(command: &str) -> Result<Vec<Ticket>, LoadError> {
    let result = invoke(command, JsValue::NULL).await.map_err(rejection_to_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| LoadError::Decode(e.to_string()))
}

/// Tauri rejects with the command's error payload (usually a string). A thrown
/// `Error` means the IPC bridge itself failed.
fn rejection_to_error(value: JsValue) -> LoadError {
    if let Some(message) = value.as_string() {
        return LoadError::Backend(message);
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return LoadError::Transport(String::from(err.message()));
    }
    LoadError::Backend(format!("{:?}", value))
}
