//! Student Registry - A small REST service for student records
//!
//! Exposes list, get, create, update and delete over a pluggable record store.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use service::StudentService;
