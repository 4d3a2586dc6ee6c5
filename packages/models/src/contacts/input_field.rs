/// A contact attribute a user can edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    FirstName,
    LastName,
    Phone,
    Email,
    Street,
    Apartment,
    City,
    State,
    Zipcode,
    Emergency,
}

impl InputField {
    pub const ALL: [InputField; 10] = [
        InputField::FirstName,
        InputField::LastName,
        InputField::Phone,
        InputField::Email,
        InputField::Street,
        InputField::Apartment,
        InputField::City,
        InputField::State,
        InputField::Zipcode,
        InputField::Emergency,
    ];

    pub const NAME_FIELDS: [InputField; 2] = [InputField::FirstName, InputField::LastName];

    pub const CONTACT_FIELDS: [InputField; 2] = [InputField::Phone, InputField::Email];

    pub const ADDRESS_FIELDS: [InputField; 5] = [
        InputField::Street,
        InputField::Apartment,
        InputField::City,
        InputField::State,
        InputField::Zipcode,
    ];

    pub const GROUP_FIELDS: [InputField; 1] = [InputField::Emergency];

    /// Fields grouped the way an edit form lays them out.
    pub const SECTIONS: [&'static [InputField]; 4] = [
        &Self::NAME_FIELDS,
        &Self::CONTACT_FIELDS,
        &Self::ADDRESS_FIELDS,
        &Self::GROUP_FIELDS,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InputField::FirstName => "First Name",
            InputField::LastName => "Last Name",
            InputField::Phone => "Phone",
            InputField::Email => "Email",
            InputField::Street => "Street",
            InputField::Apartment => "Apartment",
            InputField::City => "City",
            InputField::State => "State",
            InputField::Zipcode => "Zipcode",
            InputField::Emergency => "Emergency Contact",
        }
    }

    /// Whether the field belongs to the contact's address.
    pub fn is_address_field(self) -> bool {
        Self::ADDRESS_FIELDS.contains(&self)
    }
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
