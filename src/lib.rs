use std::sync::Arc;

use axum::extract::rejection::BytesRejection;
use axum::extract::{DefaultBodyLimit, Path, State};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use bytes::Bytes;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod logger;
pub mod server;
pub mod store;

use error::Result;
use store::{Course, Store};

type RawBody = std::result::Result<Bytes, BytesRejection>;

/// Route table for the course API.
pub fn router(store: Arc<Store>) -> Router {
    Router::new()
        .route("/api/courses", get(list_courses))
        .route("/api/course/:id", get(get_course))
        .route("/api/courses/create", post(create_course))
        .route("/api/courses/update/:id", put(update_course))
        .route("/api/courses/delete/:id", delete(delete_course))
        .with_state(store)
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
}

/// Decodes a create/update body into a `Course`.
fn decode_course(body: RawBody) -> Result<Course> {
    Ok(serde_json::from_slice(&body?)?)
}

async fn list_courses(State(store): State<Arc<Store>>) -> Json<Vec<Course>> {
    Json(store.list().await)
}

async fn get_course(
    State(store): State<Arc<Store>>,
    Path(id): Path<String>,
) -> Result<Json<Course>> {
    Ok(Json(store.get(&id).await?))
}

async fn create_course(State(store): State<Arc<Store>>, body: RawBody) -> Result<Json<Course>> {
    let input = decode_course(body)?;
    let course = store.create(input).await?;
    tracing::info!(id = %course.id, "Course created");
    Ok(Json(course))
}

async fn update_course(
    State(store): State<Arc<Store>>,
    Path(id): Path<String>,
    body: RawBody,
) -> Result<Json<Course>> {
    let input = decode_course(body)?;
    let course = store.update(&id, input).await?;
    tracing::info!(id = %course.id, "Course updated");
    Ok(Json(course))
}

async fn delete_course(
    State(store): State<Arc<Store>>,
    Path(id): Path<String>,
) -> Json<Vec<Course>> {
    Json(store.delete(&id).await)
}
