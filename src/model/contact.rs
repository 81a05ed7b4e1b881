use std::fmt;

/// A single entry in the address book.
///
/// The name is the lookup key but is not unique: several contacts may share
/// a name until they are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone_numbers: Vec<String>,
}

impl Contact {
    pub fn new(name: String, email: String, phone_numbers: Vec<String>) -> Self {
        Self {
            name,
            email,
            phone_numbers,
        }
    }

    /// Exact, case-insensitive comparison against the contact's name.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Case-insensitive substring match on name or email.
    pub fn matches_query(&self, query: &str) -> bool {
        let lower = query.to_lowercase();
        self.name.to_lowercase().contains(&lower) || self.email.to_lowercase().contains(&lower)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Email: {}, PhoneNumbers: {}",
            self.name,
            self.email,
            self.phone_numbers.join(", ")
        )
    }
}
