use std::path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Error;
use crate::fs_utils;

/// A directory of records that share one file extension.
///
/// Implementors only name the directory and extension; every store operation
/// is provided. Records are written to `{directory}/{id}.{file_type}`.
pub trait Persistence {
    fn directory(&self) -> &path::Path;

    fn file_type(&self) -> &str;

    /// Every file in the directory carrying this store's extension, in
    /// filesystem order.
    fn files(&self) -> Vec<path::PathBuf> {
        fs_utils::files_with_extension(self.directory(), self.file_type())
    }

    /// Ids of every stored record, in filesystem order.
    fn ids(&self) -> Vec<String> {
        self.files()
            .iter()
            .filter_map(|file| self.file_name(file))
            .collect()
    }

    /// The record id a file path corresponds to (its name without the
    /// `.{file_type}` suffix).
    fn file_name(&self, file: &path::Path) -> Option<String> {
        file.file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| fs_utils::strip_file_type(name, self.file_type()))
            .map(str::to_owned)
    }

    /// Where the record `id` lives, or `None` if `id` cannot name a file in
    /// this directory.
    fn file_path(&self, id: &str) -> Option<path::PathBuf> {
        if let Err(err) = validate_id(id) {
            log::warn!("{}", err);
            return None;
        }

        let file_name = if self.file_type().is_empty() {
            id.to_string()
        } else {
            format!("{}.{}", id, self.file_type())
        };
        Some(self.directory().join(file_name))
    }

    /// Writes `object` under `id`, creating the directory on first use.
    fn save_with_id<T: Serialize + ?Sized>(&self, object: &T, id: &str) -> bool {
        let Some(file) = self.file_path(id) else {
            return false;
        };

        if let Err(err) = fs_utils::ensure_directory(self.directory()) {
            log::warn!("Failed to save {}: {}", file.display(), err);
            return false;
        }

        fs_utils::save_json(object, &file)
    }

    fn read_with_id<T: DeserializeOwned>(&self, id: &str) -> Option<T> {
        self.read_at(&self.file_path(id)?)
    }

    fn read_at<T: DeserializeOwned>(&self, file: &path::Path) -> Option<T> {
        fs_utils::read_json(file)
    }

    fn remove_with_id(&self, id: &str) -> bool {
        match self.file_path(id) {
            Some(file) => fs_utils::delete(&file),
            None => false,
        }
    }
}

/// Ids become file names, so they must stay a single path component.
pub(crate) fn validate_id(id: &str) -> Result<(), Error> {
    let message = if id.is_empty() {
        "must not be empty"
    } else if id == "." || id == ".." {
        "must not be a relative directory reference"
    } else if id.contains(|c: char| c == '/' || c == '\\' || c == path::MAIN_SEPARATOR) {
        "must not contain a path separator"
    } else if id.contains('\0') {
        "must not contain a NUL byte"
    } else {
        return Ok(());
    };

    Err(Error::InvalidId {
        id: id.to_string(),
        message: message.to_string(),
    })
}
