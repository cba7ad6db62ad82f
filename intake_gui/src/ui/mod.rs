//! UI module for Intake GUI
//!
//! This module organizes the GUI into panels and components.
//!
//! # Panel Structure
//! - `toolbar` - Application header, clinical mode picker, Save, theme toggle
//! - `nav_rail` - Left sidebar: section shortcuts with active highlight
//! - `form_panel` - Center panel: the scrollable single-page form body
//! - `status_bar` - Bottom status messages
//!
//! # Shared Components
//! - `fields` - Generic renderer for field-group descriptors; the only
//!   place that interprets `FieldKind`

pub mod fields;
pub mod form_panel;
pub mod nav_rail;
pub mod status_bar;
pub mod toolbar;

// Note: Functions are accessed via module paths (e.g., ui::nav_rail::view_nav_rail)
