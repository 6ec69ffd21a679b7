//! In-memory record store.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Student, StudentId};
use crate::store::{RecordStore, StudentTable};

/// Keeps every record in process memory. Contents are lost on shutdown.
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: StudentTable,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Student>> {
        Ok(self.table.find_all())
    }

    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>> {
        Ok(self.table.find_by_id(id))
    }

    async fn save(&mut self, record: Student) -> Result<Student> {
        self.table.save(record)
    }

    async fn delete_by_id(&mut self, id: StudentId) -> Result<()> {
        self.table.delete_by_id(id);
        Ok(())
    }
}
