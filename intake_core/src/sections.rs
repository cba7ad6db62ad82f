//! # Section Registry
//!
//! The form is a single page divided into named sections. Both the
//! navigation rail and the form body iterate [`SectionId::ALL`], so they
//! always agree on ordering: the scroll-spy containment rule in
//! [`crate::scrollspy`] depends on rail order matching document order.
//!
//! The registry is fixed at compile time. There is deliberately no way to
//! add, remove, or reorder sections at runtime.

use serde::{Deserialize, Serialize};

/// Identifier for one section of the intake form.
///
/// Declaration order is document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionId {
    /// Patient demographics and identifiers
    Patient,
    /// Visit context: chief complaint, referral, encounter type
    Visit,
    /// Medical, surgical, family and social history
    History,
    /// Review of systems checklist
    ReviewOfSystems,
    /// Vital signs and derived measurements (BMI)
    Vitals,
    /// Physical examination findings
    Exam,
    /// Assessment and plan
    Plan,
}

impl SectionId {
    /// All sections in document order. This is the registry.
    pub const ALL: [SectionId; 7] = [
        SectionId::Patient,
        SectionId::Visit,
        SectionId::History,
        SectionId::ReviewOfSystems,
        SectionId::Vitals,
        SectionId::Exam,
        SectionId::Plan,
    ];

    /// Display title used by both the rail and the section header
    pub fn display_name(&self) -> &'static str {
        match self {
            SectionId::Patient => "Patient",
            SectionId::Visit => "Visit Context",
            SectionId::History => "History",
            SectionId::ReviewOfSystems => "Review of Systems",
            SectionId::Vitals => "Vitals",
            SectionId::Exam => "Examination",
            SectionId::Plan => "Assessment & Plan",
        }
    }

    /// Short glyph shown in the navigation rail
    pub fn icon(&self) -> &'static str {
        match self {
            SectionId::Patient => "\u{1F464}",         // bust
            SectionId::Visit => "\u{1F4C5}",           // calendar
            SectionId::History => "\u{1F4DC}",         // scroll
            SectionId::ReviewOfSystems => "\u{2611}",  // checked box
            SectionId::Vitals => "\u{2764}",           // heart
            SectionId::Exam => "\u{1FA7A}",            // stethoscope
            SectionId::Plan => "\u{1F4DD}",            // memo
        }
    }

    /// Stable string id, used as the prefix of field ids and in saved notes
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Patient => "patient",
            SectionId::Visit => "visit",
            SectionId::History => "history",
            SectionId::ReviewOfSystems => "ros",
            SectionId::Vitals => "vitals",
            SectionId::Exam => "exam",
            SectionId::Plan => "plan",
        }
    }

    /// Index of this section in document order
    pub fn position(&self) -> usize {
        SectionId::ALL
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
    }

    /// First section in document order (initial active section)
    pub fn first() -> SectionId {
        SectionId::ALL[0]
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_ids_unique() {
        let ids: HashSet<&str> = SectionId::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(ids.len(), SectionId::ALL.len());
    }

    #[test]
    fn test_positions_match_declaration_order() {
        for (i, section) in SectionId::ALL.iter().enumerate() {
            assert_eq!(section.position(), i);
        }
        assert_eq!(SectionId::first(), SectionId::Patient);
    }

    #[test]
    fn test_section_serialization() {
        let json = serde_json::to_string(&SectionId::ReviewOfSystems).unwrap();
        assert_eq!(json, "\"ReviewOfSystems\"");
        let roundtrip: SectionId = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, SectionId::ReviewOfSystems);
    }
}
