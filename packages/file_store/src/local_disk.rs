use std::{fmt, marker, path};

use crate::error::Error;
use crate::fs_utils;
use crate::persistence::Persistence;
use crate::record::Record;

/// A directory of JSON records of one type, keyed by string id.
///
/// Construction never touches the filesystem; the directory is created by the
/// first successful `save`. There is no locking: concurrent writers to one id
/// race and the last rename wins.
pub struct FileStore<R> {
    directory: path::PathBuf,
    file_type: String,
    _record: marker::PhantomData<fn() -> R>,
}

impl<R: Record> FileStore<R> {
    pub fn new(directory: impl Into<path::PathBuf>, file_type: impl Into<String>) -> Self {
        FileStore {
            directory: directory.into(),
            file_type: file_type.into(),
            _record: marker::PhantomData,
        }
    }

    /// A store in `directory_name` under the platform's user-data root.
    pub fn in_user_data(directory_name: &str, file_type: impl Into<String>) -> Result<Self, Error> {
        let root = fs_utils::user_data_root()?;
        Ok(Self::new(root.join(directory_name), file_type))
    }

    /// Writes `record` to `{directory}/{id}.{file_type}`.
    ///
    /// Returns `false` on any failure; the cause is logged, not returned.
    pub fn save(&self, record: &R, id: &str) -> bool {
        self.save_with_id(record, id)
    }

    /// Reads the record stored under `id`.
    ///
    /// A missing record and one that no longer decodes as `R` are both `None`.
    pub fn read(&self, id: &str) -> Option<R> {
        self.read_with_id(id)
    }

    pub fn remove(&self, id: &str) -> bool {
        self.remove_with_id(id)
    }

    /// Every stored id, in the order the filesystem lists them.
    pub fn list(&self) -> Vec<String> {
        self.ids()
    }
}

impl<R> Persistence for FileStore<R> {
    fn directory(&self) -> &path::Path {
        &self.directory
    }

    fn file_type(&self) -> &str {
        &self.file_type
    }
}

impl<R> Clone for FileStore<R> {
    fn clone(&self) -> Self {
        FileStore {
            directory: self.directory.clone(),
            file_type: self.file_type.clone(),
            _record: marker::PhantomData,
        }
    }
}

impl<R> fmt::Debug for FileStore<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileStore")
            .field("directory", &self.directory)
            .field("file_type", &self.file_type)
            .finish()
    }
}

#[cfg(test)]
mod file_store_tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::fs;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct SimpleStruct {
        example: String,
    }

    fn simple(example: &str) -> SimpleStruct {
        SimpleStruct {
            example: example.to_string(),
        }
    }

    #[test]
    fn construction_does_not_create_directory() {
        let dir = tempfile::tempdir().unwrap();
        let records = dir.path().join("records");
        let store: FileStore<SimpleStruct> = FileStore::new(&records, "json");

        assert!(!records.exists());
        assert!(store.list().is_empty());
        assert_eq!(store.read("anything"), None);
        assert!(!records.exists());
    }

    #[test]
    fn save_creates_directory_lazily() {
        let dir = tempfile::tempdir().unwrap();
        let records = dir.path().join("nested").join("records");
        let store = FileStore::new(&records, "json");

        assert!(store.save(&simple("Hello, world!"), "first"));
        assert!(records.join("first.json").is_file());
    }

    #[test]
    fn works() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path(), "json");

        assert!(store.save(&simple("Hello, world!"), "greeting"));
        assert_eq!(store.read("greeting"), Some(simple("Hello, world!")));

        // Last writer wins.
        assert!(store.save(&simple("Goodbye."), "greeting"));
        assert_eq!(store.read("greeting"), Some(simple("Goodbye.")));

        assert!(store.remove("greeting"));
        assert_eq!(store.read("greeting"), None);
        assert!(!store.remove("greeting"));
    }

    #[test]
    fn list_only_sees_its_own_extension() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path(), "contact");
        fs::write(dir.path().join("stray.json"), b"{}").unwrap();

        assert!(store.save(&simple("a"), "a"));
        assert!(store.save(&simple("b"), "b"));

        let mut ids = store.list();
        ids.sort();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn stores_sharing_a_directory_stay_apart() {
        let dir = tempfile::tempdir().unwrap();
        let words: FileStore<SimpleStruct> = FileStore::new(dir.path(), "word");
        let numbers: FileStore<u64> = FileStore::new(dir.path(), "number");

        assert!(words.save(&simple("seven"), "7"));
        assert!(numbers.save(&7, "7"));

        assert_eq!(words.read("7"), Some(simple("seven")));
        assert_eq!(numbers.read("7"), Some(7));
        assert_eq!(words.list(), vec!["7".to_string()]);
        assert_eq!(numbers.list(), vec!["7".to_string()]);
    }

    #[test]
    fn type_mismatch_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let strings: FileStore<String> = FileStore::new(dir.path(), "json");
        let structs: FileStore<SimpleStruct> = FileStore::new(dir.path(), "json");

        assert!(strings.save(&"plain".to_string(), "value"));
        assert_eq!(structs.read("value"), None);
    }

    #[test]
    fn clone_and_debug() {
        let store: FileStore<SimpleStruct> = FileStore::new("/data/Contacts", "json");
        let clone = store.clone();
        assert_eq!(clone.directory(), path::Path::new("/data/Contacts"));
        assert_eq!(clone.file_type(), "json");
        assert!(format!("{:?}", store).contains("Contacts"));
    }
}
