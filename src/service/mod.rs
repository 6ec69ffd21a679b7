//! Student Service
//!
//! The five CRUD operations exposed over HTTP, each a single call into the
//! injected `RecordStore`.


use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::Result;
use crate::models::{Student, StudentId};
use crate::store::RecordStore;

/// Shared handle to a boxed record store.
pub type SharedStore = Arc<RwLock<Box<dyn RecordStore>>>;

// == Student Service ==
/// CRUD operations over student records.
///
/// Holds no state besides the store handle. Reads take the read lock,
/// mutations the write lock.
#[derive(Clone)]
pub struct StudentService {
    store: SharedStore,
}

impl StudentService {
    /// Creates a service owning `store`.
    pub fn new(store: impl RecordStore + 'static) -> Self {
        let store: Box<dyn RecordStore> = Box::new(store);
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    // == List ==
    /// Returns every student in store order.
    pub async fn list(&self) -> Result<Vec<Student>> {
        let store = self.store.read().await;
        let students = store.find_all().await?;
        debug!("Listed {} students", students.len());
        Ok(students)
    }

    // == Get ==
    /// Returns the student with `id`, or `None` when there is none.
    pub async fn get(&self, id: StudentId) -> Result<Option<Student>> {
        let store = self.store.read().await;
        let student = store.find_by_id(id).await?;
        if student.is_none() {
            debug!("Student {} not found", id);
        }
        Ok(student)
    }

    // == Create ==
    /// Saves `candidate` as-is and returns the stored record.
    pub async fn create(&self, candidate: Student) -> Result<Student> {
        let mut store = self.store.write().await;
        let saved = store.save(candidate).await?;
        info!(id = ?saved.id, "Created student");
        Ok(saved)
    }

    // == Update ==
    /// Saves `candidate` under `id`, ignoring any id it carries.
    ///
    /// Replaces the existing record or creates one with that id.
    pub async fn update(&self, id: StudentId, candidate: Student) -> Result<Student> {
        let mut store = self.store.write().await;
        let saved = store.save(candidate.with_id(id)).await?;
        info!("Updated student {}", id);
        Ok(saved)
    }

    // == Delete ==
    /// Removes the student with `id` if present.
    pub async fn delete(&self, id: StudentId) -> Result<()> {
        let mut store = self.store.write().await;
        store.delete_by_id(id).await?;
        info!("Deleted student {}", id);
        Ok(())
    }
}
