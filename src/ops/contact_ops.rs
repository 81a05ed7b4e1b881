use log::{debug, info};

use crate::error::{AddressBookError, AddressBookResult};
use crate::model::Contact;
use crate::store::ContactDirectory;
use crate::validation;

/// Appends a contact. No duplicate check and no field validation.
pub fn add_contact(
    dir: &mut ContactDirectory,
    name: &str,
    email: &str,
    phone_numbers: Vec<String>,
) -> Contact {
    let contact = Contact::new(name.to_string(), email.to_string(), phone_numbers);
    dir.insert(contact.clone());
    info!("added contact name={:?} total={}", contact.name, dir.len());
    contact
}

/// Replaces email and phones of the first contact whose name matches.
/// `phones_csv` is a comma separated list as typed by the user.
pub fn edit_contact(
    dir: &mut ContactDirectory,
    name: &str,
    email: &str,
    phones_csv: &str,
) -> AddressBookResult<Contact> {
    let contact = dir
        .find_first_by_name_mut(name)
        .ok_or_else(|| not_found(name))?;

    contact.email = email.to_string();
    contact.phone_numbers = validation::phones_from_csv(phones_csv);
    info!(
        "edited contact name={:?} phones={}",
        contact.name,
        contact.phone_numbers.len()
    );
    Ok(contact.clone())
}

pub fn delete_contact(dir: &mut ContactDirectory, name: &str) -> AddressBookResult<Contact> {
    let removed = dir.remove_first_by_name(name).ok_or_else(|| not_found(name))?;
    info!("deleted contact name={:?} total={}", removed.name, dir.len());
    Ok(removed)
}

/// Collapses every contact named `name` into one.
///
/// The survivor takes the given name, the first match's email and the union
/// of all phone numbers in first-seen order. It is appended at the end of the
/// directory.
pub fn merge_contacts(dir: &mut ContactDirectory, name: &str) -> AddressBookResult<Contact> {
    let matches = dir.find_all_by_name(name).len();
    debug!("merge lookup name={:?} matches={}", name, matches);
    if matches <= 1 {
        return Err(AddressBookError::NoDuplicates {
            name: name.to_string(),
        });
    }

    let duplicates = dir.remove_all_by_name(name);
    let email = duplicates[0].email.clone();

    let mut phones: Vec<String> = Vec::new();
    for phone in duplicates.into_iter().flat_map(|c| c.phone_numbers) {
        if !phones.contains(&phone) {
            phones.push(phone);
        }
    }

    let merged = Contact::new(name.to_string(), email, phones);
    dir.insert(merged.clone());
    info!(
        "merged contacts name={:?} merged={} total={}",
        merged.name,
        matches,
        dir.len()
    );
    Ok(merged)
}

fn not_found(name: &str) -> AddressBookError {
    AddressBookError::NotFound {
        name: name.to_string(),
    }
}
