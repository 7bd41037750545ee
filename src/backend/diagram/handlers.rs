/**
 * Diagram Handlers
 *
 * This module implements the document-store endpoints for the diagram:
 *
 * - `GET /diagram` - return the persisted diagram document (empty object
 *   if none has been saved yet)
 * - `POST /diagram` - overwrite the persisted document entirely
 *
 * The document is an arbitrary JSON object; the server does not interpret
 * its contents. Non-object bodies are rejected at extraction.
 */

use axum::{extract::State, Json};
use serde_json::{Map, Value};

use crate::backend::diagram::store::DiagramStore;
use crate::backend::error::BackendError;

/// Handle diagram read (GET /diagram)
///
/// # Returns
///
/// The persisted diagram document as JSON, or `{}` if no diagram has been
/// saved yet.
///
/// # Errors
///
/// * `500 Internal Server Error` - If the diagram file cannot be read or
///   parsed
pub async fn get_diagram(State(store): State<DiagramStore>) -> Result<Json<Value>, BackendError> {
    let document = store.load().await?;
    Ok(Json(document))
}

/// Handle diagram write (POST /diagram)
///
/// Overwrites the persisted document with the request body. The body must
/// be a JSON object; anything else is rejected by extraction before this
/// handler runs.
///
/// # Returns
///
/// `{"status": "success"}` on success
///
/// # Errors
///
/// * `500 Internal Server Error` - If the diagram file cannot be written
pub async fn update_diagram(
    State(store): State<DiagramStore>,
    Json(document): Json<Map<String, Value>>,
) -> Result<Json<Value>, BackendError> {
    store.save(&Value::Object(document)).await?;
    tracing::info!("[Diagram] Diagram updated");
    Ok(Json(serde_json::json!({"status": "success"})))
}
