use serde::{Deserialize, Serialize};

use crate::text;

macro_rules! states {
    ($($variant:ident => $name:literal, $abbreviation:literal;)*) => {
        /// A US state or the District of Columbia.
        ///
        /// Persisted by full name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum State {
            $($variant,)*
        }

        impl State {
            pub const ALL: &'static [State] = &[$(State::$variant,)*];

            pub fn name(self) -> &'static str {
                match self {
                    $(State::$variant => $name,)*
                }
            }

            pub fn postal_abbreviation(self) -> &'static str {
                match self {
                    $(State::$variant => $abbreviation,)*
                }
            }
        }
    };
}

states! {
    Alabama => "Alabama", "AL";
    Alaska => "Alaska", "AK";
    Arizona => "Arizona", "AZ";
    Arkansas => "Arkansas", "AR";
    California => "California", "CA";
    Colorado => "Colorado", "CO";
    Connecticut => "Connecticut", "CT";
    Delaware => "Delaware", "DE";
    DistrictOfColumbia => "District of Columbia", "DC";
    Florida => "Florida", "FL";
    Georgia => "Georgia", "GA";
    Hawaii => "Hawaii", "HI";
    Idaho => "Idaho", "ID";
    Illinois => "Illinois", "IL";
    Indiana => "Indiana", "IN";
    Iowa => "Iowa", "IA";
    Kansas => "Kansas", "KS";
    Kentucky => "Kentucky", "KY";
    Louisiana => "Louisiana", "LA";
    Maine => "Maine", "ME";
    Maryland => "Maryland", "MD";
    Massachusetts => "Massachusetts", "MA";
    Michigan => "Michigan", "MI";
    Minnesota => "Minnesota", "MN";
    Mississippi => "Mississippi", "MS";
    Missouri => "Missouri", "MO";
    Montana => "Montana", "MT";
    Nebraska => "Nebraska", "NE";
    Nevada => "Nevada", "NV";
    NewHampshire => "New Hampshire", "NH";
    NewJersey => "New Jersey", "NJ";
    NewMexico => "New Mexico", "NM";
    NewYork => "New York", "NY";
    NorthCarolina => "North Carolina", "NC";
    NorthDakota => "North Dakota", "ND";
    Ohio => "Ohio", "OH";
    Oklahoma => "Oklahoma", "OK";
    Oregon => "Oregon", "OR";
    Pennsylvania => "Pennsylvania", "PA";
    RhodeIsland => "Rhode Island", "RI";
    SouthCarolina => "South Carolina", "SC";
    SouthDakota => "South Dakota", "SD";
    Tennessee => "Tennessee", "TN";
    Texas => "Texas", "TX";
    Utah => "Utah", "UT";
    Vermont => "Vermont", "VT";
    Virginia => "Virginia", "VA";
    Washington => "Washington", "WA";
    WestVirginia => "West Virginia", "WV";
    Wisconsin => "Wisconsin", "WI";
    Wyoming => "Wyoming", "WY";
}

impl State {
    /// The state with exactly this full name.
    pub fn from_name(name: &str) -> Option<State> {
        Self::ALL.iter().copied().find(|state| state.name() == name)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown state: {0}")]
pub struct UnknownState(pub String);

impl TryFrom<String> for State {
    type Error = UnknownState;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        State::from_name(&name).ok_or(UnknownState(name))
    }
}

impl From<State> for String {
    fn from(state: State) -> Self {
        state.name().to_string()
    }
}

/// A postal address. Every part is optional, but never all at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    street: Option<String>,
    apartment: Option<String>,
    city: Option<String>,
    state: Option<State>,
    zipcode: Option<String>,
}

impl Address {
    /// `None` when every part is missing.
    pub fn new(
        street: Option<String>,
        apartment: Option<String>,
        city: Option<String>,
        state: Option<State>,
        zipcode: Option<String>,
    ) -> Option<Self> {
        if street.is_none()
            && apartment.is_none()
            && city.is_none()
            && state.is_none()
            && zipcode.is_none()
        {
            return None;
        }

        Some(Self {
            street,
            apartment,
            city,
            state,
            zipcode,
        })
    }

    pub fn street(&self) -> Option<&str> {
        self.street.as_deref()
    }

    pub fn apartment(&self) -> Option<&str> {
        self.apartment.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn state(&self) -> Option<State> {
        self.state
    }

    pub fn zipcode(&self) -> Option<&str> {
        self.zipcode.as_deref()
    }

    /// Lowercased parts, with the state under both its name and abbreviation.
    pub fn searchable_strings(&self) -> Vec<String> {
        text::compact_lowercased(&[
            self.street(),
            self.apartment(),
            self.city(),
            self.state.map(State::name),
            self.state.map(State::postal_abbreviation),
            self.zipcode(),
        ])
    }
}
