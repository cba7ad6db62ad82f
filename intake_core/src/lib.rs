//! # intake_core - Clinical Intake Documentation Engine
//!
//! `intake_core` is the logic layer of Intake, a single-page clinical
//! documentation form. It owns everything with behavior worth testing:
//! the section registry, the per-mode field tables, the scroll-synchronized
//! navigation state machine, and the derived-vitals calculators. Nothing in
//! this crate touches a renderer.
//!
//! ## Design Philosophy
//!
//! - **Pure data where possible**: which field groups render for a clinical
//!   mode is a static table, not branching in the view layer
//! - **Explicit state machines**: the scroll-spy suppression logic is a
//!   first-class two-phase machine, not an ambient boolean
//! - **JSON-First**: the note draft and errors implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use intake_core::note::NoteDraft;
//!
//! // Start a note for an encounter
//! let note = NoteDraft::new("Dr. Osei", "ENC-2041");
//!
//! // Serialize to JSON for the simulated save
//! let json = note.to_json().unwrap();
//! assert!(json.contains("ENC-2041"));
//! ```
//!
//! ## Modules
//!
//! - [`sections`] - Ordered section registry shared by rail and form body
//! - [`modes`] - Clinical modes and the (mode, section) field-group tables
//! - [`scrollspy`] - Active-section tracking with programmatic-scroll suppression
//! - [`expansion`] - Per-section expand/collapse store
//! - [`vitals`] - BMI and age-normalization calculators
//! - [`note`] - Note draft container and metadata
//! - [`errors`] - Structured error types

pub mod errors;
pub mod expansion;
pub mod modes;
pub mod note;
pub mod scrollspy;
pub mod sections;
pub mod vitals;

// Re-export commonly used types at crate root for convenience
pub use errors::{IntakeError, IntakeResult};
pub use expansion::ExpansionState;
pub use modes::ClinicalMode;
pub use note::NoteDraft;
pub use scrollspy::{ScrollSpy, SectionGeometry, SpyConfig};
pub use sections::SectionId;
