//! # Note Draft
//!
//! The `NoteDraft` struct is the container for everything typed into the
//! form: free-text and numeric entries in a flat field-id-keyed map,
//! checkbox states as a set, plus encounter metadata. It serializes to
//! human-readable JSON for the save action (which, in this core, is a
//! simulated hand-off; there is no persistence layer).
//!
//! ## Structure
//!
//! ```text
//! NoteDraft
//! ├── meta: NoteMetadata (version, clinician, encounter id, timestamps)
//! ├── mode: ClinicalMode (selected patient-population context)
//! ├── values: HashMap<String, String> (text/number/select entries)
//! └── checks: HashSet<String> (checked checkbox field ids)
//! ```

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{IntakeError, IntakeResult};
use crate::modes::{self, ClinicalMode};

/// Current schema version for serialized notes
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root container for one encounter's documentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteDraft {
    pub meta: NoteMetadata,

    /// Selected clinical mode; controls which field groups render
    pub mode: ClinicalMode,

    /// Text-backed field values, keyed by field id.
    ///
    /// A flat map rather than per-section structs so the generic renderer
    /// and the mode tables stay the single source of field structure.
    pub values: HashMap<String, String>,

    /// Field ids of checked checkboxes
    pub checks: HashSet<String>,
}

impl NoteDraft {
    /// Start an empty note.
    ///
    /// # Example
    ///
    /// ```rust
    /// use intake_core::note::NoteDraft;
    ///
    /// let note = NoteDraft::new("Dr. Osei", "ENC-2041");
    /// assert_eq!(note.meta.clinician, "Dr. Osei");
    /// ```
    pub fn new(clinician: impl Into<String>, encounter_id: impl Into<String>) -> Self {
        let now = Utc::now();
        NoteDraft {
            meta: NoteMetadata {
                version: SCHEMA_VERSION.to_string(),
                clinician: clinician.into(),
                encounter_id: encounter_id.into(),
                created: now,
                modified: now,
            },
            mode: ClinicalMode::default(),
            values: HashMap::new(),
            checks: HashSet::new(),
        }
    }

    /// Set a text-backed field value. Empty strings remove the entry so a
    /// cleared field does not linger in the saved note.
    ///
    /// The id must exist in the mode tables; anything else is rejected so a
    /// typo'd id cannot silently land in the saved note.
    pub fn set_value(
        &mut self,
        field_id: impl Into<String>,
        value: impl Into<String>,
    ) -> IntakeResult<()> {
        let field_id = field_id.into();
        if !modes::is_known_field(&field_id) {
            return Err(IntakeError::unknown_field(field_id));
        }
        let value = value.into();
        if value.is_empty() {
            self.values.remove(&field_id);
        } else {
            self.values.insert(field_id, value);
        }
        self.touch();
        Ok(())
    }

    /// Current value of a field, or the empty string
    pub fn value(&self, field_id: &str) -> &str {
        self.values.get(field_id).map(String::as_str).unwrap_or("")
    }

    /// Flip a checkbox state. Rejects ids absent from the mode tables.
    pub fn toggle_check(&mut self, field_id: impl Into<String>) -> IntakeResult<()> {
        let field_id = field_id.into();
        if !modes::is_known_field(&field_id) {
            return Err(IntakeError::unknown_field(field_id));
        }
        if !self.checks.remove(&field_id) {
            self.checks.insert(field_id);
        }
        self.touch();
        Ok(())
    }

    pub fn is_checked(&self, field_id: &str) -> bool {
        self.checks.contains(field_id)
    }

    pub fn select_mode(&mut self, mode: ClinicalMode) {
        self.mode = mode;
        self.touch();
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Serialize for the save hand-off.
    pub fn to_json(&self) -> IntakeResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| IntakeError::SerializationError {
            reason: e.to_string(),
        })
    }
}

impl Default for NoteDraft {
    fn default() -> Self {
        NoteDraft::new("", "")
    }
}

/// Note metadata stored alongside the field values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Documenting clinician
    pub clinician: String,

    /// Encounter identifier
    pub encounter_id: String,

    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_creation() {
        let note = NoteDraft::new("Dr. Chen", "ENC-7");
        assert_eq!(note.meta.clinician, "Dr. Chen");
        assert_eq!(note.meta.encounter_id, "ENC-7");
        assert_eq!(note.meta.version, SCHEMA_VERSION);
        assert_eq!(note.mode, ClinicalMode::Adult);
        assert!(note.values.is_empty());
    }

    #[test]
    fn test_set_and_clear_value() {
        let mut note = NoteDraft::default();
        note.set_value("patient_name", "Ada").unwrap();
        assert_eq!(note.value("patient_name"), "Ada");

        note.set_value("patient_name", "").unwrap();
        assert_eq!(note.value("patient_name"), "");
        assert!(!note.values.contains_key("patient_name"));
    }

    #[test]
    fn test_checks_toggle() {
        let mut note = NoteDraft::default();
        assert!(!note.is_checked("ros_fever"));
        note.toggle_check("ros_fever").unwrap();
        assert!(note.is_checked("ros_fever"));
        note.toggle_check("ros_fever").unwrap();
        assert!(!note.is_checked("ros_fever"));
    }

    #[test]
    fn test_unregistered_ids_rejected() {
        let mut note = NoteDraft::default();

        // Misspelled id: rejected, nothing stored
        let err = note.set_value("vitals_hieght_cm", "180").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_FIELD");
        assert!(note.values.is_empty());

        let err = note.toggle_check("no_such_checkbox").unwrap_err();
        assert_eq!(
            err,
            IntakeError::unknown_field("no_such_checkbox")
        );
        assert!(note.checks.is_empty());
    }

    #[test]
    fn test_note_serialization_roundtrip() {
        let mut note = NoteDraft::new("Dr. Osei", "ENC-2041");
        note.select_mode(ClinicalMode::Pediatric);
        note.set_value("vitals_height_cm", "104").unwrap();
        note.toggle_check("imm_up_to_date").unwrap();

        let json = note.to_json().unwrap();
        assert!(json.contains("ENC-2041"));
        assert!(json.contains("Pediatric"));

        let roundtrip: NoteDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.mode, ClinicalMode::Pediatric);
        assert_eq!(roundtrip.value("vitals_height_cm"), "104");
        assert!(roundtrip.is_checked("imm_up_to_date"));
    }
}
