//! Original Document Blob Store
//!
//! Keeps the raw uploaded PDF bytes keyed by the stored file name, so
//! originals can be downloaded back and removed together with their
//! metadata. Stored names are unique: a second `put` under the same name is
//! refused instead of silently overwriting someone else's original.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::error::ServiceError;

#[derive(Default)]
pub struct BlobStore {
    objects: DashMap<String, Vec<u8>>,
}

impl BlobStore {
    pub fn new() -> Self {
        Self {
            objects: DashMap::new(),
        }
    }

    /// Stores one original under its unique file name.
    pub fn put(&self, file_name: &str, bytes: Vec<u8>) -> Result<(), ServiceError> {
        match self.objects.entry(file_name.to_string()) {
            Entry::Occupied(_) => Err(ServiceError::Storage {
                message: format!("blob already exists: {}", file_name),
            }),
            Entry::Vacant(slot) => {
                slot.insert(bytes);
                Ok(())
            }
        }
    }

    pub fn get(&self, file_name: &str) -> Option<Vec<u8>> {
        self.objects.get(file_name).map(|entry| entry.value().clone())
    }

    /// Removes one original; unknown names are reported, not ignored, so the
    /// two-phase delete can surface a missing blob.
    pub fn delete(&self, file_name: &str) -> Result<(), ServiceError> {
        self.objects
            .remove(file_name)
            .map(|_| ())
            .ok_or_else(|| ServiceError::NotFound {
                id: file_name.to_string(),
            })
    }

    /// Stored file names, sorted so listings are stable.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.objects.iter().map(|entry| entry.key().clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
