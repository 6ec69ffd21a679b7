//! API Module
//!
//! HTTP handlers and routing for the student registry REST API.
//!
//! # Endpoints
//! - `GET /students` - List every student
//! - `POST /students` - Create a student
//! - `GET /students/:id` - Fetch one student
//! - `PUT /students/:id` - Create or replace a student
//! - `DELETE /students/:id` - Remove a student
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
