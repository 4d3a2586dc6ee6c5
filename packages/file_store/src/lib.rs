//! # objectlib-file-store
//!
//! Directory-scoped JSON record stores.
//!
//! Every record lives in its own file named `{id}.{file_type}` inside a single
//! directory. The presence of a file is the only index; there is no manifest
//! and no locking, so the last writer for an id wins.
//!
//! ```ignore
//! use objectlib_file_store::FileStore;
//!
//! let store: FileStore<Contact> = FileStore::in_user_data("Contacts", "json")?;
//!
//! store.save(&contact, "2F6B...");
//! let contact = store.read("2F6B...");
//! let ids = store.list();
//! store.remove("2F6B...");
//! ```
//!
//! Failures on this surface are collapsed: `save`/`remove` report a `bool`
//! and `read` reports `None` both for a missing file and for a file that does
//! not decode. Causes are logged through the `log` facade.

pub mod config;
pub mod error;
pub mod fs_utils;
pub mod local_disk;
pub mod persistence;
pub mod record;

pub use config::StoreConfig;
pub use error::Error;
pub use local_disk::FileStore;
pub use persistence::Persistence;
pub use record::Record;
