//! Store Module
//!
//! The `RecordStore` seam between the service and persistence, with an
//! in-memory and a JSON-file implementation.

mod file;
mod memory;
mod table;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Student, StudentId};

// Re-export public types
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use table::{StudentTable, TableSnapshot, FIRST_ID};

// == Record Store ==
/// CRUD primitives over student records.
///
/// Implementations own the authoritative collection. Absence is reported as
/// `None` or as a no-op, never as an error.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Returns every stored record.
    async fn find_all(&self) -> Result<Vec<Student>>;

    /// Returns the record stored under `id`, if any.
    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>>;

    /// Inserts or replaces `record`, assigning an id when it has none.
    async fn save(&mut self, record: Student) -> Result<Student>;

    /// Removes the record stored under `id`; absent ids are ignored.
    async fn delete_by_id(&mut self, id: StudentId) -> Result<()>;
}
