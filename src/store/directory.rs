use crate::model::Contact;

/// In-memory, insertion-ordered collection of contacts.
///
/// Lookups are linear scans. Duplicate names are kept as-is; only an explicit
/// merge collapses them.
#[derive(Debug, Clone, Default)]
pub struct ContactDirectory {
    contacts: Vec<Contact>,
}

impl ContactDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// All contacts in insertion order.
    pub fn all(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn find_first_by_name(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.name_matches(name))
    }

    pub fn find_first_by_name_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.contacts.iter_mut().find(|c| c.name_matches(name))
    }

    pub fn find_all_by_name(&self, name: &str) -> Vec<&Contact> {
        self.contacts.iter().filter(|c| c.name_matches(name)).collect()
    }

    /// Removes and returns the first contact whose name matches.
    pub fn remove_first_by_name(&mut self, name: &str) -> Option<Contact> {
        let pos = self.contacts.iter().position(|c| c.name_matches(name))?;
        Some(self.contacts.remove(pos))
    }

    /// Removes every contact whose name matches, returning them in directory order.
    pub fn remove_all_by_name(&mut self, name: &str) -> Vec<Contact> {
        let (removed, kept): (Vec<Contact>, Vec<Contact>) = std::mem::take(&mut self.contacts)
            .into_iter()
            .partition(|c| c.name_matches(name));
        self.contacts = kept;
        removed
    }
}

impl FromIterator<Contact> for ContactDirectory {
    fn from_iter<I: IntoIterator<Item = Contact>>(iter: I) -> Self {
        Self {
            contacts: iter.into_iter().collect(),
        }
    }
}
