//! Line-oriented text format for exporting and importing contacts.
//!
//! One contact per line: `<name>, <email>, <phone1>;<phone2>`. Fields are
//! separated by commas and phone numbers by semicolons, in both directions.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{info, warn};

use crate::error::{AddressBookError, AddressBookResult};
use crate::model::Contact;
use crate::store::ContactDirectory;
use crate::validation;

pub const FIELD_DELIMITER: char = ',';
pub const PHONE_DELIMITER: char = ';';
const FIELD_COUNT: usize = 3;

#[derive(Debug)]
pub struct ImportStats {
    pub imported: usize,
    /// One `Parse` error per malformed line that was skipped.
    pub skipped: Vec<AddressBookError>,
}

/// Writes every contact to `path` in directory order, replacing any existing
/// file. Returns the number of contacts written.
pub fn export_contacts(dir: &ContactDirectory, path: &Path) -> AddressBookResult<usize> {
    let mut writer = BufWriter::new(File::create(path)?);
    for contact in dir.all() {
        if has_delimiter(contact) {
            warn!(
                "contact {:?} contains a delimiter and will not import cleanly",
                contact.name
            );
        }
        writeln!(writer, "{}", format_line(contact))?;
    }
    writer.flush()?;

    info!("exported {} contacts to {}", dir.len(), path.display());
    Ok(dir.len())
}

/// Appends every well-formed line of `path` to the directory. Malformed lines
/// are skipped and reported in the returned stats.
pub fn import_contacts(dir: &mut ContactDirectory, path: &Path) -> AddressBookResult<ImportStats> {
    if !path.exists() {
        return Err(AddressBookError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read(path)?;
    let mut stats = ImportStats {
        imported: 0,
        skipped: Vec::new(),
    };

    for (idx, raw) in content.split(|b| *b == b'\n').enumerate() {
        let parsed = decode_line(idx + 1, raw).and_then(|line| {
            if line.trim().is_empty() {
                Ok(None)
            } else {
                parse_line(idx + 1, line).map(Some)
            }
        });
        match parsed {
            Ok(Some(contact)) => {
                dir.insert(contact);
                stats.imported += 1;
            }
            Ok(None) => {}
            Err(e) => {
                warn!("skipping line in {}: {}", path.display(), e);
                stats.skipped.push(e);
            }
        }
    }

    info!(
        "imported {} contacts from {} ({} skipped)",
        stats.imported,
        path.display(),
        stats.skipped.len()
    );
    Ok(stats)
}

/// Renders one contact as an export line, without the trailing newline.
pub fn format_line(contact: &Contact) -> String {
    let phone_separator = PHONE_DELIMITER.to_string();
    format!(
        "{}{} {}{} {}",
        contact.name,
        FIELD_DELIMITER,
        contact.email,
        FIELD_DELIMITER,
        contact.phone_numbers.join(phone_separator.as_str())
    )
}

/// Parses one export line. `line_no` is 1-based and only used for errors.
///
/// Fields past the third are read as extra phone blobs, which accepts files
/// that joined phone numbers with commas.
pub fn parse_line(line_no: usize, line: &str) -> AddressBookResult<Contact> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    validation::min_fields(&fields, FIELD_COUNT, line_no)?;

    let phones = fields[2..]
        .iter()
        .flat_map(|blob| validation::split_list(blob, PHONE_DELIMITER))
        .collect();

    Ok(Contact::new(
        fields[0].trim().to_string(),
        fields[1].trim().to_string(),
        phones,
    ))
}

fn decode_line(line_no: usize, raw: &[u8]) -> AddressBookResult<&str> {
    let line = std::str::from_utf8(raw).map_err(|e| AddressBookError::Parse {
        line: line_no,
        reason: format!("invalid UTF-8: {}", e),
    })?;
    Ok(line.strip_suffix('\r').unwrap_or(line))
}

fn has_delimiter(contact: &Contact) -> bool {
    let in_field = |s: &str| s.contains(FIELD_DELIMITER);
    in_field(&contact.name)
        || in_field(&contact.email)
        || contact
            .phone_numbers
            .iter()
            .any(|p| in_field(p) || p.contains(PHONE_DELIMITER))
}
