use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::address::{Address, State};
use super::input_field::InputField;
use crate::text;

const NO_NAME: &str = "No Name";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    id: Uuid,
    first_name: Option<String>,
    last_name: Option<String>,
    address: Option<Address>,
    phone: Option<String>,
    email: Option<String>,
    is_emergency_contact: bool,
}

impl Contact {
    /// A blank contact with a fresh id.
    pub fn instance() -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: None,
            last_name: None,
            address: None,
            phone: None,
            email: None,
            is_emergency_contact: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_emergency_contact(&self) -> bool {
        self.is_emergency_contact
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// No names, address, phone or email. The emergency flag does not count.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.address.is_none()
            && self.phone.is_none()
            && self.email.is_none()
    }

    /// The stored value for `field`. The emergency flag reads as
    /// `"true"`/`"false"`.
    pub fn value(&self, field: InputField) -> Option<String> {
        let address = self.address.as_ref();
        match field {
            InputField::FirstName => self.first_name.clone(),
            InputField::LastName => self.last_name.clone(),
            InputField::Phone => self.phone.clone(),
            InputField::Email => self.email.clone(),
            InputField::Street => address.and_then(Address::street).map(str::to_owned),
            InputField::Apartment => address.and_then(Address::apartment).map(str::to_owned),
            InputField::City => address.and_then(Address::city).map(str::to_owned),
            InputField::State => address
                .and_then(Address::state)
                .map(|state| state.name().to_string()),
            InputField::Zipcode => address.and_then(Address::zipcode).map(str::to_owned),
            InputField::Emergency => Some(self.is_emergency_contact.to_string()),
        }
    }

    /// A copy with `field` set to `value`.
    ///
    /// An empty `value` clears the field. A state that is not a full state
    /// name clears the state. The emergency flag only changes for exactly
    /// `"true"` or `"false"`.
    pub fn copy_with(&self, value: &str, field: InputField) -> Contact {
        let value = (!value.is_empty()).then(|| value.to_string());
        let pick = |target: InputField| {
            if field == target {
                value.clone()
            } else {
                self.value(target)
            }
        };

        let state = if field == InputField::State {
            value.as_deref().and_then(State::from_name)
        } else {
            self.address.as_ref().and_then(Address::state)
        };

        let address = Address::new(
            pick(InputField::Street),
            pick(InputField::Apartment),
            pick(InputField::City),
            state,
            pick(InputField::Zipcode),
        );

        let is_emergency_contact = if field == InputField::Emergency {
            value
                .as_deref()
                .and_then(|flag| flag.parse().ok())
                .unwrap_or(self.is_emergency_contact)
        } else {
            self.is_emergency_contact
        };

        Contact {
            id: self.id,
            first_name: pick(InputField::FirstName),
            last_name: pick(InputField::LastName),
            address,
            phone: pick(InputField::Phone),
            email: pick(InputField::Email),
            is_emergency_contact,
        }
    }

    /// Lowercased names, phone, email and address parts. Empty for an empty
    /// contact.
    pub fn searchable_strings(&self) -> Vec<String> {
        if self.is_empty() {
            return Vec::new();
        }

        let mut strings = text::compact_lowercased(&[
            self.first_name.as_deref(),
            self.last_name.as_deref(),
            self.phone.as_deref(),
            self.email.as_deref(),
        ]);
        if let Some(address) = &self.address {
            strings.extend(address.searchable_strings());
        }
        strings
    }

    /// Whether every word of `query` appears in some searchable string.
    pub fn matches(&self, query: &str) -> bool {
        text::any_contains_all(&self.searchable_strings(), &text::search_terms(query))
    }

    /// The line a contact list shows: "First Last", else the last name, phone
    /// or email, else "No Name". Empty for an empty contact.
    pub fn display_text(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        self.first_name
            .as_deref()
            .map(|first| {
                format!("{} {}", first, self.last_name.as_deref().unwrap_or(""))
                    .trim_end()
                    .to_string()
            })
            .or_else(|| self.last_name.clone())
            .or_else(|| self.phone.clone())
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| NO_NAME.to_string())
    }

    /// Sort key: last name then first name, else the display text.
    pub fn collation_string(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let last_first = self.last_name.as_deref().map(|last| {
            format!("{}{}", last, self.first_name.as_deref().unwrap_or(""))
        });

        match last_first {
            Some(key) => key,
            None => {
                let display = self.display_text();
                if display == NO_NAME {
                    String::new()
                } else {
                    display
                }
            }
        }
    }
}
