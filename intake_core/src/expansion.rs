//! # Expansion State Store
//!
//! Per-section open/closed state, independent of which section is active: a
//! section can be active but collapsed, or expanded while another is
//! active. Keys are [`SectionId`] enum values, so state for an unregistered
//! section is unrepresentable.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::sections::SectionId;

/// Which sections are currently expanded in the form body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpansionState {
    open: HashSet<SectionId>,
}

impl ExpansionState {
    /// Default open subset at startup: the sections a clinician fills first.
    pub fn new() -> Self {
        let mut open = HashSet::new();
        open.insert(SectionId::Patient);
        open.insert(SectionId::Vitals);
        ExpansionState { open }
    }

    pub fn is_open(&self, id: SectionId) -> bool {
        self.open.contains(&id)
    }

    /// Flip one section, leaving every other section untouched.
    pub fn toggle(&mut self, id: SectionId) {
        if !self.open.remove(&id) {
            self.open.insert(id);
        }
    }

    /// Ensure a section is open. Idempotent; used when navigating to it.
    pub fn force_open(&mut self, id: SectionId) {
        self.open.insert(id);
    }
}

impl Default for ExpansionState {
    fn default() -> Self {
        ExpansionState::new()
    }
}
