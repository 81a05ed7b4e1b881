use addressbook::config::SortPolicy;
use addressbook::error::AddressBookError;
use addressbook::ops::*;
use addressbook::queries::*;
use addressbook::store::ContactDirectory;

fn setup() -> ContactDirectory {
    let mut dir = ContactDirectory::new();
    contact_ops::add_contact(&mut dir, "John Doe", "john@example.com", vec!["123".into()]);
    contact_ops::add_contact(&mut dir, "Jane Smith", "jane@work.org", vec!["555".into()]);
    dir
}

fn names(contacts: &[&addressbook::model::Contact]) -> Vec<String> {
    contacts.iter().map(|c| c.name.clone()).collect()
}

// ==========================================================================
// SEARCH
// ==========================================================================

#[test]
fn search_finds_by_partial_name() {
    let dir = setup();
    let results = contact_queries::search_contacts(&dir, "john").unwrap();
    assert_eq!(names(&results), vec!["John Doe"]);
}

#[test]
fn search_finds_by_email() {
    let dir = setup();
    let results = contact_queries::search_contacts(&dir, "WORK.ORG").unwrap();
    assert_eq!(names(&results), vec!["Jane Smith"]);
}

#[test]
fn search_returns_all_matches_in_directory_order() {
    let dir = setup();
    let results = contact_queries::search_contacts(&dir, "j").unwrap();
    assert_eq!(names(&results), vec!["John Doe", "Jane Smith"]);
}

#[test]
fn search_without_match_is_not_found() {
    let dir = setup();
    let result = contact_queries::search_contacts(&dir, "zzz");
    assert!(matches!(result, Err(AddressBookError::NotFound { .. })));
}

#[test]
fn search_on_empty_directory_is_not_found() {
    let dir = ContactDirectory::new();
    let result = contact_queries::search_contacts(&dir, "john");
    assert!(matches!(result, Err(AddressBookError::NotFound { .. })));
}

// ==========================================================================
// DISPLAY
// ==========================================================================

#[test]
fn display_sorts_by_name() {
    let mut dir = setup();
    contact_ops::add_contact(&mut dir, "Adam", "", Vec::new());
    let sorted = contact_queries::display_contacts(&dir);
    assert_eq!(names(&sorted), vec!["Adam", "Jane Smith", "John Doe"]);
}

#[test]
fn display_is_ordinal_by_default() {
    let mut dir = ContactDirectory::new();
    for name in ["Bob", "alice", "Carol"] {
        contact_ops::add_contact(&mut dir, name, "", Vec::new());
    }
    let sorted = contact_queries::display_contacts(&dir);
    assert_eq!(names(&sorted), vec!["Bob", "Carol", "alice"]);
}

#[test]
fn display_case_insensitive_policy() {
    let mut dir = ContactDirectory::new();
    for name in ["Bob", "alice", "Carol"] {
        contact_ops::add_contact(&mut dir, name, "", Vec::new());
    }
    let sorted = contact_queries::display_contacts_with(&dir, SortPolicy::CaseInsensitive);
    assert_eq!(names(&sorted), vec!["alice", "Bob", "Carol"]);
}

#[test]
fn display_is_stable_for_equal_names() {
    let mut dir = ContactDirectory::new();
    contact_ops::add_contact(&mut dir, "Sam", "first@x.com", Vec::new());
    contact_ops::add_contact(&mut dir, "Al", "", Vec::new());
    contact_ops::add_contact(&mut dir, "Sam", "second@x.com", Vec::new());

    let sorted = contact_queries::display_contacts(&dir);
    assert_eq!(sorted[1].email, "first@x.com");
    assert_eq!(sorted[2].email, "second@x.com");
}

#[test]
fn display_does_not_reorder_directory() {
    let mut dir = ContactDirectory::new();
    contact_ops::add_contact(&mut dir, "Zed", "", Vec::new());
    contact_ops::add_contact(&mut dir, "Amy", "", Vec::new());
    let _ = contact_queries::display_contacts(&dir);
    assert_eq!(dir.all()[0].name, "Zed");
}

// ==========================================================================
// DUPLICATES
// ==========================================================================

#[test]
fn duplicate_names_lists_repeated_names_once() {
    let mut dir = setup();
    contact_ops::add_contact(&mut dir, "JANE SMITH", "", Vec::new());
    contact_ops::add_contact(&mut dir, "jane smith", "", Vec::new());
    assert_eq!(contact_queries::duplicate_names(&dir), vec!["Jane Smith"]);
}

#[test]
fn duplicate_names_empty_when_unique() {
    let dir = setup();
    assert!(contact_queries::duplicate_names(&dir).is_empty());
}

#[test]
fn duplicate_names_cleared_by_merge() {
    let mut dir = setup();
    contact_ops::add_contact(&mut dir, "John Doe", "", vec!["999".into()]);
    contact_ops::merge_contacts(&mut dir, "John Doe").unwrap();
    assert!(contact_queries::duplicate_names(&dir).is_empty());
}
