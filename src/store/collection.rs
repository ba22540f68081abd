//! A single JSON-backed document collection.
//!
//! Each collection is one JSON array file on disk, loaded fully at open and
//! held in memory behind a `RwLock`. Documents keep insertion order, which is
//! the "natural order" callers see. Mutations rewrite the file through a
//! temp-file-and-rename so a crash mid-write never truncates the collection.

use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use crate::error::{HrError, HrResult};

/// A file-backed, insertion-ordered collection of documents.
pub struct Collection<T> {
    path: PathBuf,
    docs: RwLock<Vec<T>>,
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Opens the collection at `path`, loading existing documents.
    ///
    /// A missing file is an empty collection, not an error; a file that
    /// exists but fails to parse is surfaced as a store error so a corrupt
    /// data directory is caught at startup rather than mid-request.
    pub async fn open(path: PathBuf) -> HrResult<Self> {
        let docs = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                HrError::store(format!("failed to parse {}: {e}", path.display()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(HrError::store(format!(
                    "failed to read {}: {e}",
                    path.display()
                )));
            }
        };

        Ok(Collection {
            path,
            docs: RwLock::new(docs),
        })
    }

    /// Runs a read-only closure over the documents.
    pub async fn with_docs<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        let docs = self.docs.read().await;
        f(&docs)
    }

    /// Runs a mutating closure over the documents, committing to memory and
    /// disk only when the closure succeeds.
    ///
    /// The closure operates on a working copy, so an aborted mutation leaves
    /// both the in-memory state and the file untouched. The write lock is
    /// held across the flush: a request's mutation is durable before its
    /// response is produced, and concurrent mutations serialize
    /// (last-write-wins at the request level, never a torn file).
    pub async fn mutate<R>(&self, f: impl FnOnce(&mut Vec<T>) -> HrResult<R>) -> HrResult<R> {
        let mut docs = self.docs.write().await;
        let mut working = docs.clone();
        let result = f(&mut working)?;
        self.flush(&working).await?;
        *docs = working;
        Ok(result)
    }

    async fn flush(&self, docs: &[T]) -> HrResult<()> {
        let bytes = serde_json::to_vec_pretty(docs)
            .map_err(|e| HrError::store(format!("failed to serialize collection: {e}")))?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| HrError::store(format!("failed to write {}: {e}", tmp.display())))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| HrError::store(format!("failed to replace {}: {e}", self.path.display())))
    }
}
