//! Section geometry estimation
//!
//! The scroll-spy engine needs each section's top and height in document
//! coordinates. Iced does not report widget positions back to the
//! application, but it does not need to: every row the form renders has a
//! fixed pixel height taken from the constants below, and the field tables
//! are deterministic per mode, so the whole document layout is computable.
//! The form panel and this module must agree on these constants: the form
//! wraps each field in a fixed-height container sized by [`field_height`].
//!
//! Geometry is recomputed from scratch on every use (navigation or spy
//! tick), so mode changes and expansion toggles invalidate it implicitly.

use intake_core::modes::{field_groups, ClinicalMode, FieldKind};
use intake_core::scrollspy::SectionGeometry;
use intake_core::sections::SectionId;
use intake_core::ExpansionState;

/// Clickable section header row
pub const SECTION_HEADER_H: f32 = 34.0;
/// Field-group subheading
pub const GROUP_TITLE_H: f32 = 24.0;
/// Single-line labeled input row
pub const FIELD_ROW_H: f32 = 30.0;
/// Label-above-input row for multi-line entries
pub const MULTILINE_ROW_H: f32 = 52.0;
/// Checkbox row
pub const CHECKBOX_ROW_H: f32 = 24.0;
/// Padding around the whole form body
pub const BODY_PADDING: f32 = 8.0;
/// Vertical gap between sections
pub const SECTION_GAP: f32 = 12.0;
/// How far below the viewport top a navigated-to section header lands
pub const SCROLL_CLEARANCE: f32 = 8.0;

/// Rendered height of one field row
pub fn field_height(kind: FieldKind) -> f32 {
    match kind {
        FieldKind::MultiLine => MULTILINE_ROW_H,
        FieldKind::Checkbox => CHECKBOX_ROW_H,
        _ => FIELD_ROW_H,
    }
}

/// Rendered height of one section: header only when collapsed, header plus
/// all field groups when expanded.
pub fn section_height(mode: ClinicalMode, section: SectionId, open: bool) -> f32 {
    let mut height = SECTION_HEADER_H;
    if open {
        for group in field_groups(mode, section) {
            height += GROUP_TITLE_H;
            for field in group.fields {
                height += field_height(field.kind);
            }
        }
    }
    height
}

/// Geometry for every registered section, in document order.
pub fn section_geometry(mode: ClinicalMode, expansion: &ExpansionState) -> Vec<SectionGeometry> {
    let mut geometry = Vec::with_capacity(SectionId::ALL.len());
    let mut top = BODY_PADDING;
    for section in SectionId::ALL {
        let height = section_height(mode, section, expansion.is_open(section));
        geometry.push(SectionGeometry {
            id: section,
            top,
            height,
        });
        top += height + SECTION_GAP;
    }
    geometry
}

/// Scroll offset that puts `section`'s header just under the viewport top
pub fn scroll_target(geometry: &[SectionGeometry], section: SectionId) -> f32 {
    geometry
        .iter()
        .find(|g| g.id == section)
        .map(|g| (g.top - SCROLL_CLEARANCE).max(0.0))
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_covers_registry_in_order() {
        let geo = section_geometry(ClinicalMode::Adult, &ExpansionState::new());
        assert_eq!(geo.len(), SectionId::ALL.len());
        for (g, section) in geo.iter().zip(SectionId::ALL.iter()) {
            assert_eq!(g.id, *section);
        }
        // Tops strictly increase, no overlap
        for pair in geo.windows(2) {
            assert!(pair[1].top >= pair[0].top + pair[0].height);
        }
    }

    #[test]
    fn test_collapsed_section_is_header_height() {
        let expansion = ExpansionState::new();
        // Plan is collapsed by default
        assert!(!expansion.is_open(SectionId::Plan));
        let geo = section_geometry(ClinicalMode::Adult, &expansion);
        let plan = geo.iter().find(|g| g.id == SectionId::Plan).unwrap();
        assert_eq!(plan.height, SECTION_HEADER_H);

        let open = section_height(ClinicalMode::Adult, SectionId::Plan, true);
        assert!(open > SECTION_HEADER_H);
    }

    #[test]
    fn test_mode_change_alters_heights() {
        let adult = section_height(ClinicalMode::Adult, SectionId::History, true);
        let obgyn = section_height(ClinicalMode::ObGyn, SectionId::History, true);
        assert!(obgyn > adult, "obstetric history group must add height");
    }

    #[test]
    fn test_expansion_shifts_later_sections() {
        let mut expansion = ExpansionState::new();
        let before = section_geometry(ClinicalMode::Adult, &expansion);
        expansion.force_open(SectionId::History);
        let after = section_geometry(ClinicalMode::Adult, &expansion);

        let plan_before = before.iter().find(|g| g.id == SectionId::Plan).unwrap().top;
        let plan_after = after.iter().find(|g| g.id == SectionId::Plan).unwrap().top;
        assert!(plan_after > plan_before);
    }

    #[test]
    fn test_scroll_target_clamps_at_zero() {
        let geo = section_geometry(ClinicalMode::Adult, &ExpansionState::new());
        assert_eq!(geo[0].top, BODY_PADDING);
        assert_eq!(scroll_target(&geo, SectionId::Patient), 0.0);
        assert!(scroll_target(&geo, SectionId::Plan) > 0.0);
    }
}
