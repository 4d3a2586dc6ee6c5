//! Filesystem helpers shared by every store.
//!
//! The `bool`/`Option` helpers never fail loudly; they log the cause and
//! collapse it. The `try_*` variants keep the cause for callers inside this
//! crate.

use std::{ffi, fs, io, path};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Error;

/// Serializes `object` as JSON and writes it to `path`, replacing any file
/// already there. Returns whether the write succeeded.
pub fn save_json<T: Serialize + ?Sized>(object: &T, path: &path::Path) -> bool {
    match try_save_json(object, path) {
        Ok(()) => true,
        Err(err) => {
            log::warn!("Failed to save {}: {}", path.display(), err);
            false
        }
    }
}

/// Reads and decodes the JSON file at `path`.
///
/// A missing file and a file that does not decode as `T` both yield `None`.
pub fn read_json<T: DeserializeOwned>(path: &path::Path) -> Option<T> {
    match try_read_json(path) {
        Ok(value) => Some(value),
        Err(err) => {
            log::debug!("Failed to read {}: {}", path.display(), err);
            None
        }
    }
}

/// Removes the file at `path`. Returns whether a file was removed.
pub fn delete(path: &path::Path) -> bool {
    match fs::remove_file(path) {
        Ok(()) => true,
        Err(err) => {
            log::debug!("Failed to delete {}: {}", path.display(), err);
            false
        }
    }
}

/// Lists the files directly inside `directory` named `{id}.{file_type}`.
///
/// `file_type` is matched as a whole name suffix, so it may itself contain
/// dots. An empty `file_type` matches every file. A directory that does not
/// exist or cannot be listed has no files.
pub fn files_with_extension(directory: &path::Path, file_type: &str) -> Vec<path::PathBuf> {
    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(err) => {
            log::debug!("Failed to list {}: {}", directory.display(), err);
            return Vec::new();
        }
    };

    entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_ok_and(|kind| kind.is_file()))
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(ffi::OsStr::to_str)
                .and_then(|name| strip_file_type(name, file_type))
                .is_some()
        })
        .collect()
}

/// The id part of `file_name` when it is named `{id}.{file_type}`.
pub fn strip_file_type<'a>(file_name: &'a str, file_type: &str) -> Option<&'a str> {
    let id = if file_type.is_empty() {
        file_name
    } else {
        file_name.strip_suffix(file_type)?.strip_suffix('.')?
    };
    (!id.is_empty()).then_some(id)
}

/// Returns `base/name`, creating the directory (and any parents) if needed.
pub fn directory_in(base: &path::Path, name: &str) -> Result<path::PathBuf, Error> {
    let directory = base.join(name);
    ensure_directory(&directory)?;
    Ok(directory)
}

/// Returns the directory `name` under the platform's user-data root, creating
/// it if needed.
pub fn directory_in_user_data(name: &str) -> Result<path::PathBuf, Error> {
    directory_in(&user_data_root()?, name)
}

/// The platform's per-user data directory.
pub fn user_data_root() -> Result<path::PathBuf, Error> {
    dirs::data_dir().ok_or(Error::NoUserDataDirectory)
}

pub(crate) fn ensure_directory(directory: &path::Path) -> Result<(), Error> {
    if directory.is_dir() {
        return Ok(());
    }
    log::debug!("Creating {}...", directory.display());
    fs::create_dir_all(directory).map_err(|err| Error::io(directory, err))
}

/// Writes into a temporary file beside `path` and renames it into place, so a
/// reader never observes a partially written record.
pub(crate) fn try_save_json<T: Serialize + ?Sized>(
    object: &T,
    path: &path::Path,
) -> Result<(), Error> {
    use io::Write;

    let data = serde_json::to_vec(object)?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| path::Path::new("."));

    log::debug!("Writing {}...", path.display());
    let mut file = tempfile::NamedTempFile::new_in(parent).map_err(|err| Error::io(parent, err))?;
    file.write_all(&data).map_err(|err| Error::io(file.path(), err))?;
    file.as_file()
        .sync_all()
        .map_err(|err| Error::io(file.path(), err))?;
    file.persist(path).map_err(|err| Error::io(path, err.error))?;
    Ok(())
}

pub(crate) fn try_read_json<T: DeserializeOwned>(path: &path::Path) -> Result<T, Error> {
    log::debug!("Reading {}...", path.display());
    let file = fs::File::open(path).map_err(|err| Error::io(path, err))?;
    let reader = io::BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}
