//! JSON file record store.
//!
//! The whole table is rewritten after each mutation: the document goes to a
//! sibling `.tmp` file first and is renamed over the target. A write that
//! fails leaves both the file and the in-memory table unchanged.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::error::Result;
use crate::models::{Student, StudentId};
use crate::store::{RecordStore, StudentTable, TableSnapshot};

/// Record store persisted to a single JSON document.
#[derive(Debug)]
pub struct JsonFileStore {
    table: StudentTable,
    file_path: PathBuf,
}

impl JsonFileStore {
    /// Opens the store at `path`, creating an empty document if missing.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let table = match fs::read(&file_path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => StudentTable::new(),
            Ok(bytes) => {
                let snapshot: TableSnapshot = serde_json::from_slice(&bytes)?;
                StudentTable::restore(snapshot)?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let table = StudentTable::new();
                write_table(&file_path, &table).await?;
                table
            }
            Err(e) => return Err(e.into()),
        };

        info!(
            "Opened student store at {} with {} records",
            file_path.display(),
            table.len()
        );
        Ok(Self { table, file_path })
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.file_path
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

/// Sibling file the next document is staged in.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

async fn write_table(path: &Path, table: &StudentTable) -> Result<()> {
    let data = serde_json::to_vec_pretty(&table.snapshot())?;
    let staging = staging_path(path);

    let mut file = fs::File::create(&staging).await?;
    file.write_all(&data).await?;
    file.sync_all().await?;
    drop(file);

    fs::rename(&staging, path).await?;
    debug!("Persisted {} records to {}", table.len(), path.display());
    Ok(())
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn find_all(&self) -> Result<Vec<Student>> {
        Ok(self.table.find_all())
    }

    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>> {
        Ok(self.table.find_by_id(id))
    }

    async fn save(&mut self, record: Student) -> Result<Student> {
        let mut next = self.table.clone();
        let saved = next.save(record)?;
        write_table(&self.file_path, &next).await?;
        self.table = next;
        Ok(saved)
    }

    async fn delete_by_id(&mut self, id: StudentId) -> Result<()> {
        let mut next = self.table.clone();
        if !next.delete_by_id(id) {
            return Ok(());
        }
        write_table(&self.file_path, &next).await?;
        self.table = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StudentError;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "student_registry_{}_{}.json",
            name,
            std::process::id()
        ))
    }

    #[tokio::test]
    async fn test_file_store_persists_across_reopen() {
        let path = temp_path("reopen");
        let _ = fs::remove_file(&path).await;

        {
            let mut store = JsonFileStore::open(&path).await.unwrap();
            assert!(store.is_empty());
            store.save(Student::named("Alice")).await.unwrap();
            store.save(Student::named("Bob")).await.unwrap();
            store.delete_by_id(2).await.unwrap();
        }

        let mut reopened = JsonFileStore::open(&path).await.unwrap();
        let all = reopened.find_all().await.unwrap();
        assert_eq!(all, vec![Student::named("Alice").with_id(1)]);

        // The sequence survives too, so id 2 is not handed out again
        let carol = reopened.save(Student::named("Carol")).await.unwrap();
        assert_eq!(carol.id, Some(3));

        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_file_store_creates_missing_file() {
        let dir = std::env::temp_dir().join(format!("student_registry_dir_{}", std::process::id()));
        let path = dir.join("nested").join("students.json");
        let _ = fs::remove_dir_all(&dir).await;

        let store = JsonFileStore::open(&path).await.unwrap();
        assert_eq!(store.path(), path.as_path());
        assert!(fs::metadata(&path).await.is_ok());

        let _ = fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn test_file_store_empty_file_is_empty_table() {
        let path = temp_path("empty");
        fs::write(&path, b"").await.unwrap();

        let store = JsonFileStore::open(&path).await.unwrap();
        assert!(store.is_empty());

        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_file_store_rejects_corrupt_document() {
        let path = temp_path("corrupt");
        fs::write(&path, b"{not json").await.unwrap();

        let result = JsonFileStore::open(&path).await;
        assert!(matches!(result, Err(StudentError::Serialization(_))));

        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_failed_write_keeps_file_and_table() {
        let path = temp_path("failed_write");
        let staging = staging_path(&path);
        let _ = fs::remove_file(&path).await;
        let _ = fs::remove_dir_all(&staging).await;

        let mut store = JsonFileStore::open(&path).await.unwrap();
        store.save(Student::named("Alice")).await.unwrap();

        // A directory in the staging slot makes the next write fail
        fs::create_dir(&staging).await.unwrap();

        let result = store.save(Student::named("Bob")).await;
        assert!(matches!(result, Err(StudentError::Storage(_))));
        let result = store.delete_by_id(1).await;
        assert!(matches!(result, Err(StudentError::Storage(_))));

        let expected = vec![Student::named("Alice").with_id(1)];
        assert_eq!(store.find_all().await.unwrap(), expected);

        let reopened = JsonFileStore::open(&path).await.unwrap();
        assert_eq!(reopened.find_all().await.unwrap(), expected);

        let _ = fs::remove_dir_all(&staging).await;
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_write_leaves_no_staging_file() {
        let path = temp_path("staging");
        let _ = fs::remove_file(&path).await;

        let mut store = JsonFileStore::open(&path).await.unwrap();
        store.save(Student::named("Alice")).await.unwrap();

        assert!(fs::metadata(staging_path(&path)).await.is_err());
        assert!(fs::metadata(&path).await.is_ok());

        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_file_store_keeps_pass_through_attributes() {
        let path = temp_path("attributes");
        let _ = fs::remove_file(&path).await;

        let student: Student =
            serde_json::from_str(r#"{"name":"Dana","email":"dana@example.org"}"#).unwrap();
        {
            let mut store = JsonFileStore::open(&path).await.unwrap();
            store.save(student).await.unwrap();
        }

        let reopened = JsonFileStore::open(&path).await.unwrap();
        let dana = reopened.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(dana.attributes["email"], "dana@example.org");

        let _ = fs::remove_file(&path).await;
    }
}
