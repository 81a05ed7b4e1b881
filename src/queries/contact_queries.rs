use std::collections::HashMap;

use log::debug;

use crate::config::SortPolicy;
use crate::error::{AddressBookError, AddressBookResult};
use crate::model::Contact;
use crate::store::ContactDirectory;

/// Contacts whose name or email contains `query`, ignoring case, in
/// directory order. An empty result is reported as `NotFound`.
pub fn search_contacts<'a>(
    dir: &'a ContactDirectory,
    query: &str,
) -> AddressBookResult<Vec<&'a Contact>> {
    let results: Vec<&Contact> = dir.all().iter().filter(|c| c.matches_query(query)).collect();
    debug!("search query={:?} results={}", query, results.len());
    if results.is_empty() {
        return Err(AddressBookError::NotFound {
            name: query.to_string(),
        });
    }
    Ok(results)
}

/// All contacts sorted by name using ordinal comparison.
pub fn display_contacts(dir: &ContactDirectory) -> Vec<&Contact> {
    display_contacts_with(dir, SortPolicy::Ordinal)
}

/// All contacts sorted by name. The sort is stable, so equal names keep
/// their insertion order.
pub fn display_contacts_with(dir: &ContactDirectory, policy: SortPolicy) -> Vec<&Contact> {
    let mut sorted: Vec<&Contact> = dir.all().iter().collect();
    match policy {
        SortPolicy::Ordinal => sorted.sort_by(|a, b| a.name.cmp(&b.name)),
        SortPolicy::CaseInsensitive => sorted.sort_by_cached_key(|c| c.name.to_lowercase()),
    }
    sorted
}

/// Names shared by more than one contact, spelled as first seen, in
/// first-seen order.
pub fn duplicate_names(dir: &ContactDirectory) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<(String, &str)> = Vec::new();

    for contact in dir.all() {
        let key = contact.name.to_lowercase();
        let count = counts.entry(key.clone()).or_insert(0);
        if *count == 0 {
            order.push((key, contact.name.as_str()));
        }
        *count += 1;
    }

    order
        .into_iter()
        .filter(|(key, _)| counts.get(key).copied().unwrap_or(0) > 1)
        .map(|(_, name)| name.to_string())
        .collect()
}
