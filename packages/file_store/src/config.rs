use std::path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::local_disk::FileStore;
use crate::record::Record;

fn default_file_type() -> String {
    "json".to_string()
}

/// Where a store keeps its records.
///
/// ```ignore
/// let config: StoreConfig = serde_json::from_str(r#"{"directory": "Contacts"}"#)?;
/// let store: FileStore<Contact> = config.open()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory name, relative to the root the store is opened in.
    pub directory: String,

    /// Extension shared by every record file.
    #[serde(default = "default_file_type")]
    pub file_type: String,
}

impl StoreConfig {
    pub fn new(directory: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            file_type: default_file_type(),
        }
    }

    pub fn with_file_type(mut self, file_type: impl Into<String>) -> Self {
        self.file_type = file_type.into();
        self
    }

    /// Opens the store under the platform's user-data root.
    pub fn open<R: Record>(&self) -> Result<FileStore<R>, Error> {
        FileStore::in_user_data(&self.directory, self.file_type.clone())
    }

    /// Opens the store under an explicit root.
    pub fn open_in<R: Record>(&self, root: &path::Path) -> FileStore<R> {
        FileStore::new(root.join(&self.directory), self.file_type.clone())
    }
}
