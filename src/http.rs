//! HTTP transport for the item store.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /items` — list every item.
//! - `POST /items` — create an item. Body = `{ "content": string }`.
//! - `PATCH /items` — replace an item's content. Body = `{ "id": string, "content": string }`.
//! - `DELETE /items?id=<id>` — delete an item.
//! - `GET /health` — health check returning `{ "ok": true, "items": <count> }`.
//!
//! Failures are returned as `{ "message": string }` with a 400, 404 or 500
//! status. The cause of a 500 is logged and never sent to the client.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use item_store::{http, ItemStore};
//!
//! let store = Arc::new(ItemStore::new());
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(store.clone());
//!
//! // Or serve directly
//! http::serve(store, "0.0.0.0:3000").await?;
//! ```

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::{error, info, warn};

use crate::store::{ItemCollection, ItemStore, StoreError};
use crate::validate::{is_blank, CONTENT_REQUIRED, ID_AND_CONTENT_REQUIRED, ID_QUERY_REQUIRED};

/// Body of a successful delete.
pub const DELETED_MESSAGE: &str = "Item deleted successfully.";

/// Build an axum `Router` serving the item routes for the given store.
pub fn router<C: ItemCollection + 'static>(store: Arc<ItemStore<C>>) -> Router {
    Router::new()
        .route("/health", get(health_handler::<C>))
        .route(
            "/items",
            get(list_handler::<C>)
                .post(create_handler::<C>)
                .patch(update_handler::<C>)
                .delete(delete_handler::<C>),
        )
        .with_state(store)
}

/// Serve the store over HTTP at the given address (e.g. `"0.0.0.0:3000"`)
/// until Ctrl-C is received.
pub async fn serve<C: ItemCollection + 'static>(
    store: Arc<ItemStore<C>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(store);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "item store listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => warn!(error = %e, "failed to listen for shutdown signal"),
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        match &self {
            StoreError::Internal(cause) => error!(%cause, "error processing request"),
            StoreError::NotFound { id } => warn!(%id, "item not found"),
            StoreError::Validation(message) => warn!(%message, "request rejected"),
        }
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(json!({ "message": self.public_message() }))).into_response()
    }
}

/// `GET /health` — returns `{ "ok": true, "items": <count> }`.
async fn health_handler<C: ItemCollection + 'static>(
    State(store): State<Arc<ItemStore<C>>>,
) -> Result<Response, StoreError> {
    let items = store.len()?;
    Ok(Json(json!({ "ok": true, "items": items })).into_response())
}

/// `GET /items`
async fn list_handler<C: ItemCollection + 'static>(
    State(store): State<Arc<ItemStore<C>>>,
) -> Result<Response, StoreError> {
    let items = store.list().await?;
    Ok(Json(items).into_response())
}

/// `POST /items` — 201 with the new item.
async fn create_handler<C: ItemCollection + 'static>(
    State(store): State<Arc<ItemStore<C>>>,
    body: Bytes,
) -> Result<Response, StoreError> {
    let content = match parse_body(&body)
        .and_then(|body| required_string(&body, "content", CONTENT_REQUIRED))
    {
        Ok(content) => content,
        Err(e) => return store.reject(e).await,
    };
    let item = store.create(content).await?;
    Ok((StatusCode::CREATED, Json(item)).into_response())
}

/// `PATCH /items`
async fn update_handler<C: ItemCollection + 'static>(
    State(store): State<Arc<ItemStore<C>>>,
    body: Bytes,
) -> Result<Response, StoreError> {
    let fields = parse_body(&body).and_then(|body| {
        let id = required_string(&body, "id", ID_AND_CONTENT_REQUIRED)?;
        let content = required_string(&body, "content", ID_AND_CONTENT_REQUIRED)?;
        Ok((id, content))
    });
    let (id, content) = match fields {
        Ok(fields) => fields,
        Err(e) => return store.reject(e).await,
    };
    let item = store.update(&id, &content).await?;
    Ok(Json(item).into_response())
}

/// `DELETE /items?id=<id>`
///
/// When `id` is repeated, the first value wins. An unparseable query string
/// is treated as a missing id.
async fn delete_handler<C: ItemCollection + 'static>(
    State(store): State<Arc<ItemStore<C>>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, StoreError> {
    let params = query.map(|Query(params)| params).unwrap_or_default();
    let id = match first_param(&params, "id").filter(|id| !is_blank(id)) {
        Some(id) => id,
        None => return store.reject(StoreError::validation(ID_QUERY_REQUIRED)).await,
    };
    store.delete(id).await?;
    Ok(Json(json!({ "message": DELETED_MESSAGE })).into_response())
}

/// Decode a request body as JSON. An undecodable body is an internal error,
/// not a validation failure.
fn parse_body(body: &[u8]) -> Result<Value, StoreError> {
    serde_json::from_slice(body).map_err(|e| StoreError::Internal(format!("invalid JSON body: {}", e)))
}

/// A field of a JSON object, if present and a string.
fn string_field<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field).and_then(Value::as_str)
}

fn required_string(body: &Value, field: &str, message: &str) -> Result<String, StoreError> {
    string_field(body, field)
        .map(str::to_string)
        .ok_or_else(|| StoreError::validation(message))
}

/// Value of the first query pair named `name`.
fn first_param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}
