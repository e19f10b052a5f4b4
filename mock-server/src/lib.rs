use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, Method, StatusCode},
    routing::{any, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Anime {
    pub mal_id: u32,
    pub title: String,
    pub episodes: Option<u32>,
}

pub type Db = Arc<Vec<Anime>>;

pub fn seed() -> Vec<Anime> {
    vec![
        Anime {
            mal_id: 1,
            title: "Cowboy Bebop".to_string(),
            episodes: Some(26),
        },
        Anime {
            mal_id: 5114,
            title: "Fullmetal Alchemist: Brotherhood".to_string(),
            episodes: Some(64),
        },
    ]
}

pub fn app() -> Router {
    let db: Db = Arc::new(seed());
    Router::new()
        .route("/anime", get(search_anime))
        .route("/anime/{id}", get(get_anime))
        .route("/random/anime", get(random_anime))
        .route("/broken", get(broken))
        .route("/echo", any(echo))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "status": 404,
            "type": "BadResponseException",
            "message": "Resource does not exist",
            "error": null,
        })),
    )
}

async fn get_anime(
    State(db): State<Db>,
    Path(id): Path<u32>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    db.iter()
        .find(|a| a.mal_id == id)
        .map(|a| Json(json!({ "data": a })))
        .ok_or_else(not_found)
}

/// Echoes the decoded query pairs back in `params` so callers can check
/// exactly what arrived.
async fn search_anime(
    State(db): State<Db>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<Value> {
    let needle = params
        .iter()
        .find(|(k, _)| k == "q")
        .map(|(_, v)| v.to_lowercase());
    let data: Vec<&Anime> = db
        .iter()
        .filter(|a| match &needle {
            Some(q) => a.title.to_lowercase().contains(q),
            None => true,
        })
        .collect();
    Json(json!({ "data": data, "params": params }))
}

async fn random_anime(State(db): State<Db>) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    db.first()
        .map(|a| Json(json!({ "data": a })))
        .ok_or_else(not_found)
}

async fn broken() -> (StatusCode, [(header::HeaderName, &'static str); 1], &'static str) {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        "{\"data\": [1, 2",
    )
}

async fn echo(method: Method, headers: HeaderMap, body: String) -> Json<Value> {
    let read = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    Json(json!({
        "method": method.as_str(),
        "host": read(header::HOST),
        "user_agent": read(header::USER_AGENT),
        "body": body,
    }))
}
