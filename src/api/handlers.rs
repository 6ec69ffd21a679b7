//! API Handlers
//!
//! HTTP request handlers for each student registry endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::config::Config;
use crate::error::Result;
use crate::models::{HealthResponse, Student, StudentId};
use crate::service::StudentService;
use crate::store::{JsonFileStore, MemoryStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Student operations over the configured store
    pub students: StudentService,
}

impl AppState {
    /// Creates a new AppState around the given service.
    pub fn new(students: StudentService) -> Self {
        Self { students }
    }

    /// Creates a new AppState backed by an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(StudentService::new(MemoryStore::new()))
    }

    /// Creates a new AppState from configuration.
    ///
    /// Uses the JSON file store when `data_file` is set, memory otherwise.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let students = match &config.data_file {
            Some(path) => StudentService::new(JsonFileStore::open(path).await?),
            None => StudentService::new(MemoryStore::new()),
        };
        Ok(Self::new(students))
    }
}

/// Handler for GET /students
pub async fn list_handler(State(state): State<AppState>) -> Result<Json<Vec<Student>>> {
    let students = state.students.list().await?;
    Ok(Json(students))
}

/// Handler for GET /students/:id
///
/// Responds `200` with `null` when the student does not exist.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<StudentId>,
) -> Result<Json<Option<Student>>> {
    let student = state.students.get(id).await?;
    Ok(Json(student))
}

/// Handler for POST /students
pub async fn create_handler(
    State(state): State<AppState>,
    Json(candidate): Json<Student>,
) -> Result<Json<Student>> {
    let saved = state.students.create(candidate).await?;
    Ok(Json(saved))
}

/// Handler for PUT /students/:id
///
/// The path id wins over any id in the body.
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<StudentId>,
    Json(candidate): Json<Student>,
) -> Result<Json<Student>> {
    let saved = state.students.update(id, candidate).await?;
    Ok(Json(saved))
}

/// Handler for DELETE /students/:id
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<StudentId>,
) -> Result<StatusCode> {
    state.students.delete(id).await?;
    Ok(StatusCode::OK)
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
