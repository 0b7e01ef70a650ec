use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    pub id: Uuid,
    pub movie_id: u32,
    pub value: f32,
}

#[derive(Deserialize)]
pub struct CreateRating {
    pub movie_id: u32,
    pub value: f32,
}

pub type Db = Arc<RwLock<HashMap<Uuid, Rating>>>;

pub fn genres() -> Vec<Genre> {
    [(28, "Action"), (12, "Adventure"), (16, "Animation"), (35, "Comedy")]
        .into_iter()
        .map(|(id, name)| Genre {
            id,
            name: name.to_string(),
        })
        .collect()
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/genres", get(list_genres))
        .route("/ratings", post(create_rating))
        .route("/ratings/{id}", delete(delete_rating))
        .route("/health", get(health))
        .route("/status/{code}", get(echo_status))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_genres() -> Json<Value> {
    Json(json!({ "genres": genres() }))
}

async fn create_rating(
    State(db): State<Db>,
    Json(input): Json<CreateRating>,
) -> Result<(StatusCode, Json<Rating>), (StatusCode, Json<Value>)> {
    if !(0.5..=10.0).contains(&input.value) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "status_message": "Value too high. Value must be less than, or equal to 10.0." })),
        ));
    }
    let rating = Rating {
        id: Uuid::new_v4(),
        movie_id: input.movie_id,
        value: input.value,
    };
    db.write().await.insert(rating.id, rating.clone());
    tracing::debug!(id = %rating.id, movie_id = rating.movie_id, "rating created");
    Ok((StatusCode::CREATED, Json(rating)))
}

async fn delete_rating(State(db): State<Db>, Path(id): Path<Uuid>) -> StatusCode {
    match db.write().await.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}

/// Plain-text body, for clients that must cope with non-JSON payloads.
async fn health() -> &'static str {
    "ok"
}

/// Answers with whatever status the path names, and an empty body.
async fn echo_status(Path(code): Path<u16>) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST)
}
