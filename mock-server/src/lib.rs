use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Counter {
    pub id: String,
    pub title: String,
    pub count: i64,
}

#[derive(Deserialize)]
pub struct CreateCounter {
    pub title: String,
}

#[derive(Deserialize)]
pub struct CounterId {
    pub id: String,
}

// Counters keep insertion order, so the list the API returns is stable.
pub type Db = Arc<RwLock<Vec<Counter>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/api/v1/counters", get(list_counters))
        .route(
            "/api/v1/counter",
            post(create_counter).delete(delete_counter),
        )
        .route("/api/v1/counter/inc", post(increase_counter))
        .route("/api/v1/counter/dec", post(decrease_counter))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_counters(State(db): State<Db>) -> Json<Vec<Counter>> {
    Json(db.read().await.clone())
}

async fn create_counter(
    State(db): State<Db>,
    Json(input): Json<CreateCounter>,
) -> (StatusCode, Json<Vec<Counter>>) {
    let mut counters = db.write().await;
    counters.push(Counter {
        id: Uuid::new_v4().to_string(),
        title: input.title,
        count: 0,
    });
    (StatusCode::CREATED, Json(counters.clone()))
}

async fn increase_counter(
    State(db): State<Db>,
    Json(input): Json<CounterId>,
) -> Result<Json<Vec<Counter>>, StatusCode> {
    let mut counters = db.write().await;
    let counter = counters
        .iter_mut()
        .find(|c| c.id == input.id)
        .ok_or(StatusCode::NOT_FOUND)?;
    counter.count += 1;
    Ok(Json(counters.clone()))
}

async fn decrease_counter(
    State(db): State<Db>,
    Json(input): Json<CounterId>,
) -> Result<Json<Vec<Counter>>, StatusCode> {
    let mut counters = db.write().await;
    let counter = counters
        .iter_mut()
        .find(|c| c.id == input.id)
        .ok_or(StatusCode::NOT_FOUND)?;
    // Counts never go negative.
    counter.count = (counter.count - 1).max(0);
    Ok(Json(counters.clone()))
}

async fn delete_counter(
    State(db): State<Db>,
    Json(input): Json<CounterId>,
) -> Result<Json<Vec<Counter>>, StatusCode> {
    let mut counters = db.write().await;
    let before = counters.len();
    counters.retain(|c| c.id != input.id);
    if counters.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(counters.clone()))
}
