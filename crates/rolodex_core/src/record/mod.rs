//! Contact records and their identifiers.

mod id;

pub use id::RecordId;

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// A single contact entry.
///
/// The identifier is assigned by the record store and never changes. The
/// name is the display name used for grouping and searching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Store-assigned identifier.
    pub id: RecordId,
    /// Display name.
    pub name: String,
}

impl Record {
    /// Creates a record from an identifier and a name.
    pub fn new(id: RecordId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Checks that a name can be used for a newly added contact.
///
/// Whitespace-only names are rejected along with empty ones. Imported rows
/// bypass this check and are stored as-is.
///
/// # Errors
///
/// Returns [`CoreError::EmptyName`] if the name has no visible characters.
pub fn validate_name(name: &str) -> CoreResult<()> {
    if name.trim().is_empty() {
        return Err(CoreError::EmptyName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record() {
        let id = RecordId::from_bytes([7; 16]);
        let record = Record::new(id, "Ada");
        assert_eq!(record.id, id);
        assert_eq!(record.name, "Ada");
    }

    #[test]
    fn validate_rejects_blank_names() {
        assert_eq!(validate_name(""), Err(CoreError::EmptyName));
        assert_eq!(validate_name("  \t"), Err(CoreError::EmptyName));
        assert!(validate_name("张三").is_ok());
        assert!(validate_name(" x ").is_ok());
    }

    #[test]
    fn record_serializes_id_as_uuid_text() {
        let record = Record::new(RecordId::from_bytes([0; 16]), "Bob");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("00000000-0000-0000-0000-000000000000"));
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
