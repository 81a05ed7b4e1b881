use crate::error::{AddressBookError, AddressBookResult};

/// Splits `value` on `delimiter`, trimming each entry and dropping blank ones.
pub fn split_list(value: &str, delimiter: char) -> Vec<String> {
    value
        .split(delimiter)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parses a comma separated phone list as typed by a user.
pub fn phones_from_csv(value: &str) -> Vec<String> {
    split_list(value, ',')
}

/// Validates that a parsed line carries at least `expected` fields.
pub fn min_fields(fields: &[&str], expected: usize, line: usize) -> AddressBookResult<()> {
    if fields.len() < expected {
        Err(AddressBookError::Parse {
            line,
            reason: format!("expected {} fields, found {}", expected, fields.len()),
        })
    } else {
        Ok(())
    }
}

/// Trims an optional string, returning None if blank.
pub fn trim_optional(value: Option<&str>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
