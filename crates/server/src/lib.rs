//! HTTP surface for the cabinet item store
//!
//! Maps the item store operations onto an axum router. Handlers call the
//! facade in a fixed sequence per operation and translate outcomes:
//! missing required fields become 400, absent keys become 404, backend
//! failures become a generic 500 with the detail emitted to the
//! operational log only. Error bodies are plain text; no structured
//! error format is guaranteed.
//!
//! Each handler catches backend errors independently at its own
//! boundary; nothing retries.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::error;
use tracing_subscriber::EnvFilter;

use cabinet_core::Error;
use cabinet_primitives::{ItemStore, LEADERBOARD_SIZE, LOG_CAPACITY};

pub mod config;

pub use config::ServerConfig;

/// Initialize the tracing subscriber from `RUST_LOG`, defaulting to info
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Build the application router over a shared item store
pub fn router(store: Arc<ItemStore>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/item", post(create_item))
        .route(
            "/item/{key}",
            get(read_item).put(update_item).delete(delete_item),
        )
        .route("/item/{key}/like", post(like_item))
        .route("/items", get(list_items))
        .route("/items/count", get(count_items))
        .route("/items/tag/{tagname}", get(items_by_tag))
        .route("/logs", get(recent_logs))
        .route("/leaderboard", get(leaderboard))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Log the backend failure detail and answer with a generic message
fn internal_error(public: &'static str, err: Error) -> Response {
    error!(error = %err, "backend operation failed");
    (StatusCode::INTERNAL_SERVER_ERROR, public).into_response()
}

const NOT_FOUND: (StatusCode, &str) = (StatusCode::NOT_FOUND, "Item não encontrado.");

#[derive(Deserialize)]
struct CreateItem {
    key: Option<String>,
    value: Option<String>,
    tag: Option<String>,
}

#[derive(Deserialize)]
struct UpdateItem {
    value: Option<String>,
    tags: Option<String>,
}

#[derive(Serialize)]
struct ItemBody {
    key: String,
    value: String,
}

#[derive(Serialize)]
struct CountBody {
    #[serde(rename = "totalItems")]
    total_items: u64,
}

#[derive(Serialize)]
struct LikeBody {
    key: String,
    likes: i64,
}

#[derive(Serialize)]
struct LeaderboardEntry {
    #[serde(rename = "itemKey")]
    item_key: String,
    views: u64,
}

async fn index() -> Html<&'static str> {
    Html(
        "<!DOCTYPE html>\n<html>\n<head><title>Cabinet</title></head>\n\
         <body><h1>Cabinet</h1><p>Item store - veja /items, /logs e /leaderboard.</p></body>\n\
         </html>",
    )
}

async fn create_item(
    State(store): State<Arc<ItemStore>>,
    Json(body): Json<CreateItem>,
) -> Response {
    let (Some(key), Some(value)) = (body.key, body.value) else {
        return (StatusCode::BAD_REQUEST, "Key e Value são obrigatórios.").into_response();
    };
    match store.create(&key, &value, body.tag.as_deref()) {
        Ok(()) => (StatusCode::CREATED, "Item criado com sucesso!").into_response(),
        Err(Error::Validation(msg)) => (StatusCode::BAD_REQUEST, msg).into_response(),
        Err(err) => internal_error("Erro ao criar item.", err),
    }
}

async fn read_item(State(store): State<Arc<ItemStore>>, Path(key): Path<String>) -> Response {
    match store.fetch(&key) {
        Ok(Some(value)) => Json(ItemBody { key, value }).into_response(),
        Ok(None) => NOT_FOUND.into_response(),
        Err(err) => internal_error("Erro ao ler item.", err),
    }
}

async fn list_items(State(store): State<Arc<ItemStore>>) -> Response {
    match store.list_all() {
        Ok(items) => Json(items).into_response(),
        Err(err) => internal_error("Erro ao listar itens.", err),
    }
}

async fn update_item(
    State(store): State<Arc<ItemStore>>,
    Path(key): Path<String>,
    Json(body): Json<UpdateItem>,
) -> Response {
    let Some(value) = body.value else {
        return (StatusCode::BAD_REQUEST, "Value é obrigatório para atualização.").into_response();
    };
    match store.update(&key, &value, body.tags.as_deref()) {
        Ok(true) => "Item atualizado com sucesso!".into_response(),
        Ok(false) => {
            (StatusCode::NOT_FOUND, "Item não encontrado para atualização.").into_response()
        }
        Err(Error::Validation(msg)) => (StatusCode::BAD_REQUEST, msg).into_response(),
        Err(err) => internal_error("Erro ao atualizar item.", err),
    }
}

async fn delete_item(State(store): State<Arc<ItemStore>>, Path(key): Path<String>) -> Response {
    match store.delete(&key) {
        Ok(true) => "Item deletado com sucesso!".into_response(),
        Ok(false) => (StatusCode::NOT_FOUND, "Item não encontrado para deleção.").into_response(),
        Err(err) => internal_error("Erro ao deletar item.", err),
    }
}

async fn count_items(State(store): State<Arc<ItemStore>>) -> Response {
    match store.count() {
        Ok(total_items) => Json(CountBody { total_items }).into_response(),
        Err(err) => internal_error("Erro ao contar itens.", err),
    }
}

async fn recent_logs(State(store): State<Arc<ItemStore>>) -> Response {
    match store.recent_activity(LOG_CAPACITY) {
        Ok(entries) => Json(entries).into_response(),
        Err(err) => internal_error("Erro ao ler logs.", err),
    }
}

async fn like_item(State(store): State<Arc<ItemStore>>, Path(key): Path<String>) -> Response {
    match store.like(&key) {
        Ok(likes) => Json(LikeBody { key, likes }).into_response(),
        Err(err) => internal_error("Erro ao curtir item.", err),
    }
}

async fn items_by_tag(
    State(store): State<Arc<ItemStore>>,
    Path(tagname): Path<String>,
) -> Response {
    match store.items_by_tag(&tagname) {
        Ok(items) => Json(items).into_response(),
        Err(err) => internal_error("Erro ao listar itens por tag.", err),
    }
}

async fn leaderboard(State(store): State<Arc<ItemStore>>) -> Response {
    match store.leaderboard(LEADERBOARD_SIZE) {
        Ok(ranked) => Json(
            ranked
                .into_iter()
                .map(|(item_key, views)| LeaderboardEntry { item_key, views })
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(err) => internal_error("Erro ao montar leaderboard.", err),
    }
}
