//! Request and Response models for the student registry API
//!
//! `Student` doubles as request and response body; the remaining DTOs cover
//! the health probe and error payloads.

pub mod responses;
pub mod student;

// Re-export commonly used types
pub use responses::{ErrorResponse, HealthResponse};
pub use student::{Student, StudentId};
