//! Student Table Module
//!
//! Id-ordered record storage plus the id sequence, shared by every bundled
//! store implementation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StudentError};
use crate::models::{Student, StudentId};

/// First id handed out by an empty table.
pub const FIRST_ID: StudentId = 1;

// == Student Table ==
/// Records keyed by id, together with the next id to assign.
///
/// `next_id` is always greater than every id ever saved, so store-assigned
/// ids never collide with client-supplied ones and deleted ids are never
/// handed out again. It becomes `None` once `StudentId::MAX` has been saved.
#[derive(Debug, Clone)]
pub struct StudentTable {
    /// Records ordered by id
    students: BTreeMap<StudentId, Student>,
    /// Next id to assign to a record submitted without one
    next_id: Option<StudentId>,
}

/// On-disk shape of a table.
#[derive(Debug, Serialize, Deserialize)]
pub struct TableSnapshot {
    /// `null` once the sequence is exhausted
    pub next_id: Option<StudentId>,
    pub students: Vec<Student>,
}

impl StudentTable {
    // == Constructor ==
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            students: BTreeMap::new(),
            next_id: Some(FIRST_ID),
        }
    }

    // == Find All ==
    /// Returns every record in ascending id order.
    pub fn find_all(&self) -> Vec<Student> {
        self.students.values().cloned().collect()
    }

    // == Find By Id ==
    /// Returns the record stored under `id`, if any.
    pub fn find_by_id(&self, id: StudentId) -> Option<Student> {
        self.students.get(&id).cloned()
    }

    // == Save ==
    /// Inserts or replaces a record.
    ///
    /// A record without an id gets the next id of the sequence. A record
    /// with an id replaces whatever is stored there, or is inserted as-is.
    pub fn save(&mut self, mut record: Student) -> Result<Student> {
        let id = match record.id {
            Some(id) => id,
            None => self.allocate_id()?,
        };
        self.advance_past(id);

        record.id = Some(id);
        self.students.insert(id, record.clone());
        Ok(record)
    }

    // == Delete By Id ==
    /// Removes the record under `id`. Returns whether one existed.
    pub fn delete_by_id(&mut self, id: StudentId) -> bool {
        self.students.remove(&id).is_some()
    }

    // == Length ==
    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    // == Is Empty ==
    /// Returns true if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    // == Snapshot ==
    /// Captures the table in its serializable form.
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            next_id: self.next_id,
            students: self.find_all(),
        }
    }

    // == Restore ==
    /// Rebuilds a table from a snapshot.
    ///
    /// Records saved without an id are given one, and the sequence is moved
    /// past the largest id present even if the snapshot says otherwise.
    pub fn restore(snapshot: TableSnapshot) -> Result<Self> {
        let mut table = Self {
            students: BTreeMap::new(),
            next_id: snapshot.next_id.map(|next| next.max(FIRST_ID)),
        };
        for student in snapshot.students {
            table.save(student)?;
        }
        Ok(table)
    }

    fn allocate_id(&self) -> Result<StudentId> {
        self.next_id.ok_or_else(|| {
            StudentError::Internal("student id sequence exhausted".to_string())
        })
    }

    fn advance_past(&mut self, id: StudentId) {
        if let Some(next) = self.next_id {
            if id >= next {
                self.next_id = id.checked_add(1);
            }
        }
    }
}

impl Default for StudentTable {
    fn default() -> Self {
        Self::new()
    }
}
