//! Records for the contacts app.
//!
//! Contacts are immutable values: an edit produces a copy with one field
//! changed. They are records, so a `FileStore<Contact>` keyed by
//! `contact.id().to_string()` persists them.

mod address;
mod contact;
mod input_field;

pub use address::{Address, State, UnknownState};
pub use contact::Contact;
pub use input_field::InputField;
