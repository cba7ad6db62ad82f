//! # Clinical Modes and Field Tables
//!
//! Which field groups render inside each section depends on the selected
//! clinical mode (adult / obstetric-gynecologic / pediatric). Rather than
//! branching per mode inside the view layer, the mapping is a static table:
//! [`field_groups`] is a total, pure function from `(mode, section)` to an
//! ordered slice of [`FieldGroup`] descriptors, and a single generic
//! renderer consumes the result.
//!
//! Determinism matters here: section heights in the GUI are derived from the
//! group/field counts returned by this table, so identical inputs must
//! always produce identical structure.

use serde::{Deserialize, Serialize};

use crate::sections::SectionId;

/// Selected patient-population context. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ClinicalMode {
    /// General adult medicine
    #[default]
    Adult,
    /// Obstetrics and gynecology
    ObGyn,
    /// Pediatrics
    Pediatric,
}

impl ClinicalMode {
    /// All modes, for UI selection
    pub const ALL: [ClinicalMode; 3] = [
        ClinicalMode::Adult,
        ClinicalMode::ObGyn,
        ClinicalMode::Pediatric,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ClinicalMode::Adult => "Adult",
            ClinicalMode::ObGyn => "OB/GYN",
            ClinicalMode::Pediatric => "Pediatric",
        }
    }
}

impl std::fmt::Display for ClinicalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Values a derived (read-only) field can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedValue {
    /// Body mass index, computed from the height and weight fields
    Bmi,
}

/// How a field is entered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line free text
    Text,
    /// Numeric entry (kept as text until parsed by a consumer)
    Number,
    /// Numeric entry that self-normalizes a birth year into an age when
    /// editing ends (see [`crate::vitals::normalize_age`])
    Age,
    /// Multi-line free text
    MultiLine,
    /// One of a fixed set of options
    Select(&'static [&'static str]),
    /// Present/absent toggle
    Checkbox,
    /// Read-only value computed from other fields
    Derived(DerivedValue),
}

/// A single labeled input
#[derive(Debug, Clone, Copy)]
pub struct Field {
    /// Unique, stable id; keys the value map in [`crate::note::NoteDraft`]
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

/// An ordered group of fields rendered under a subheading
#[derive(Debug, Clone, Copy)]
pub struct FieldGroup {
    pub id: &'static str,
    pub title: &'static str,
    pub fields: &'static [Field],
}

const fn field(id: &'static str, label: &'static str, kind: FieldKind) -> Field {
    Field { id, label, kind }
}

// ============================================================================
// Patient
// ============================================================================

const PATIENT_IDENTITY: FieldGroup = FieldGroup {
    id: "patient_identity",
    title: "Identity",
    fields: &[
        field("patient_name", "Full name:", FieldKind::Text),
        field("patient_age", "Age:", FieldKind::Age),
        field(
            "patient_sex",
            "Sex:",
            FieldKind::Select(&["Female", "Male", "Other"]),
        ),
        field("patient_mrn", "Record no:", FieldKind::Text),
    ],
};

const PATIENT_CONTACT: FieldGroup = FieldGroup {
    id: "patient_contact",
    title: "Contact",
    fields: &[
        field("patient_phone", "Phone:", FieldKind::Text),
        field("patient_address", "Address:", FieldKind::Text),
    ],
};

const PATIENT_GUARDIAN: FieldGroup = FieldGroup {
    id: "patient_guardian",
    title: "Guardian",
    fields: &[
        field("guardian_name", "Guardian:", FieldKind::Text),
        field(
            "guardian_relation",
            "Relation:",
            FieldKind::Select(&["Mother", "Father", "Grandparent", "Other"]),
        ),
        field("guardian_phone", "Phone:", FieldKind::Text),
    ],
};

const PATIENT_ADULT: &[FieldGroup] = &[PATIENT_IDENTITY, PATIENT_CONTACT];
const PATIENT_PEDIATRIC: &[FieldGroup] = &[PATIENT_IDENTITY, PATIENT_GUARDIAN, PATIENT_CONTACT];

// ============================================================================
// Visit Context
// ============================================================================

const VISIT_ENCOUNTER: FieldGroup = FieldGroup {
    id: "visit_encounter",
    title: "Encounter",
    fields: &[
        field("visit_complaint", "Chief complaint:", FieldKind::MultiLine),
        field(
            "visit_type",
            "Type:",
            FieldKind::Select(&["New patient", "Follow-up", "Urgent"]),
        ),
        field("visit_referral", "Referred by:", FieldKind::Text),
    ],
};

const VISIT_PREGNANCY: FieldGroup = FieldGroup {
    id: "visit_pregnancy",
    title: "Pregnancy Status",
    fields: &[
        field("preg_current", "Currently pregnant", FieldKind::Checkbox),
        field("preg_ga_weeks", "Gest. age (wk):", FieldKind::Number),
        field("preg_lmp", "LMP:", FieldKind::Text),
    ],
};

const VISIT_ADULT: &[FieldGroup] = &[VISIT_ENCOUNTER];
const VISIT_OBGYN: &[FieldGroup] = &[VISIT_ENCOUNTER, VISIT_PREGNANCY];

// ============================================================================
// History
// ============================================================================

const HISTORY_MEDICAL: FieldGroup = FieldGroup {
    id: "history_medical",
    title: "Medical",
    fields: &[
        field("hx_conditions", "Conditions:", FieldKind::MultiLine),
        field("hx_medications", "Medications:", FieldKind::MultiLine),
        field("hx_allergies", "Allergies:", FieldKind::MultiLine),
    ],
};

const HISTORY_BACKGROUND: FieldGroup = FieldGroup {
    id: "history_background",
    title: "Surgical / Family / Social",
    fields: &[
        field("hx_surgeries", "Surgeries:", FieldKind::MultiLine),
        field("hx_family", "Family hx:", FieldKind::MultiLine),
        field(
            "hx_smoking",
            "Smoking:",
            FieldKind::Select(&["Never", "Former", "Current"]),
        ),
        field(
            "hx_alcohol",
            "Alcohol:",
            FieldKind::Select(&["None", "Occasional", "Regular"]),
        ),
    ],
};

const HISTORY_OBSTETRIC: FieldGroup = FieldGroup {
    id: "history_obstetric",
    title: "Obstetric",
    fields: &[
        field("ob_gravida", "Gravida:", FieldKind::Number),
        field("ob_para", "Para:", FieldKind::Number),
        field("ob_prior_cesarean", "Prior cesarean", FieldKind::Checkbox),
        field(
            "ob_contraception",
            "Contraception:",
            FieldKind::Select(&["None", "Oral", "IUD", "Implant", "Other"]),
        ),
    ],
};

const HISTORY_BIRTH: FieldGroup = FieldGroup {
    id: "history_birth",
    title: "Birth History",
    fields: &[
        field("birth_ga_weeks", "Born at (wk):", FieldKind::Number),
        field("birth_weight_kg", "Birth wt (kg):", FieldKind::Number),
        field(
            "birth_delivery",
            "Delivery:",
            FieldKind::Select(&["Vaginal", "Cesarean"]),
        ),
        field("birth_nicu", "NICU stay", FieldKind::Checkbox),
    ],
};

const HISTORY_IMMUNIZATIONS: FieldGroup = FieldGroup {
    id: "history_immunizations",
    title: "Immunizations",
    fields: &[
        field("imm_up_to_date", "Up to date", FieldKind::Checkbox),
        field("imm_notes", "Notes:", FieldKind::MultiLine),
    ],
};

const HISTORY_ADULT: &[FieldGroup] = &[HISTORY_MEDICAL, HISTORY_BACKGROUND];
const HISTORY_OBGYN: &[FieldGroup] = &[HISTORY_MEDICAL, HISTORY_OBSTETRIC, HISTORY_BACKGROUND];
const HISTORY_PEDIATRIC: &[FieldGroup] = &[HISTORY_MEDICAL, HISTORY_BIRTH, HISTORY_IMMUNIZATIONS];

// ============================================================================
// Review of Systems
// ============================================================================

const ROS_CONSTITUTIONAL: FieldGroup = FieldGroup {
    id: "ros_constitutional",
    title: "Constitutional",
    fields: &[
        field("ros_fever", "Fever", FieldKind::Checkbox),
        field("ros_fatigue", "Fatigue", FieldKind::Checkbox),
        field("ros_weight_change", "Weight change", FieldKind::Checkbox),
    ],
};

const ROS_CARDIOPULMONARY: FieldGroup = FieldGroup {
    id: "ros_cardiopulmonary",
    title: "Cardiopulmonary",
    fields: &[
        field("ros_chest_pain", "Chest pain", FieldKind::Checkbox),
        field("ros_palpitations", "Palpitations", FieldKind::Checkbox),
        field("ros_dyspnea", "Shortness of breath", FieldKind::Checkbox),
        field("ros_cough", "Cough", FieldKind::Checkbox),
    ],
};

const ROS_GYNECOLOGIC: FieldGroup = FieldGroup {
    id: "ros_gynecologic",
    title: "Gynecologic",
    fields: &[
        field("ros_pelvic_pain", "Pelvic pain", FieldKind::Checkbox),
        field("ros_abnormal_bleeding", "Abnormal bleeding", FieldKind::Checkbox),
        field("ros_discharge", "Discharge", FieldKind::Checkbox),
    ],
};

const ROS_PEDIATRIC: FieldGroup = FieldGroup {
    id: "ros_pediatric",
    title: "Feeding & Development",
    fields: &[
        field("ros_feeding", "Feeding difficulty", FieldKind::Checkbox),
        field("ros_sleep", "Sleep problems", FieldKind::Checkbox),
        field("ros_development", "Developmental concern", FieldKind::Checkbox),
    ],
};

const ROS_ADULT: &[FieldGroup] = &[ROS_CONSTITUTIONAL, ROS_CARDIOPULMONARY];
const ROS_OBGYN: &[FieldGroup] = &[ROS_CONSTITUTIONAL, ROS_CARDIOPULMONARY, ROS_GYNECOLOGIC];
const ROS_PEDS: &[FieldGroup] = &[ROS_CONSTITUTIONAL, ROS_PEDIATRIC];

// ============================================================================
// Vitals
// ============================================================================

const VITALS_MEASUREMENTS: FieldGroup = FieldGroup {
    id: "vitals_measurements",
    title: "Measurements",
    fields: &[
        field("vitals_height_cm", "Height (cm):", FieldKind::Number),
        field("vitals_weight_kg", "Weight (kg):", FieldKind::Number),
        field("vitals_bmi", "BMI:", FieldKind::Derived(DerivedValue::Bmi)),
        field("vitals_temp_c", "Temp (°C):", FieldKind::Number),
        field("vitals_hr", "Heart rate:", FieldKind::Number),
        field("vitals_bp", "BP:", FieldKind::Text),
    ],
};

const VITALS_GROWTH: FieldGroup = FieldGroup {
    id: "vitals_growth",
    title: "Growth",
    fields: &[
        field("growth_head_cm", "Head circ. (cm):", FieldKind::Number),
        field("growth_percentile", "Percentile:", FieldKind::Number),
    ],
};

const VITALS_ADULT: &[FieldGroup] = &[VITALS_MEASUREMENTS];
const VITALS_PEDIATRIC: &[FieldGroup] = &[VITALS_MEASUREMENTS, VITALS_GROWTH];

// ============================================================================
// Examination
// ============================================================================

const EXAM_GENERAL: FieldGroup = FieldGroup {
    id: "exam_general",
    title: "General",
    fields: &[
        field("exam_appearance", "Appearance:", FieldKind::MultiLine),
        field("exam_heent", "HEENT:", FieldKind::MultiLine),
        field("exam_cardiovascular", "Cardiovascular:", FieldKind::MultiLine),
        field("exam_respiratory", "Respiratory:", FieldKind::MultiLine),
        field("exam_abdomen", "Abdomen:", FieldKind::MultiLine),
    ],
};

const EXAM_OBSTETRIC: FieldGroup = FieldGroup {
    id: "exam_obstetric",
    title: "Obstetric",
    fields: &[
        field("exam_pelvic", "Pelvic:", FieldKind::MultiLine),
        field("exam_fundal_cm", "Fundal ht (cm):", FieldKind::Number),
        field("exam_fht", "Fetal HR:", FieldKind::Number),
    ],
};

const EXAM_PEDIATRIC: FieldGroup = FieldGroup {
    id: "exam_pediatric",
    title: "Pediatric",
    fields: &[
        field("exam_development", "Development:", FieldKind::MultiLine),
        field(
            "exam_fontanelle",
            "Fontanelle:",
            FieldKind::Select(&["Flat", "Full", "Sunken", "Closed"]),
        ),
    ],
};

const EXAM_ADULT: &[FieldGroup] = &[EXAM_GENERAL];
const EXAM_OBGYN: &[FieldGroup] = &[EXAM_GENERAL, EXAM_OBSTETRIC];
const EXAM_PEDS: &[FieldGroup] = &[EXAM_GENERAL, EXAM_PEDIATRIC];

// ============================================================================
// Assessment & Plan
// ============================================================================

const PLAN_ASSESSMENT: FieldGroup = FieldGroup {
    id: "plan_assessment",
    title: "Assessment",
    fields: &[
        field("plan_impression", "Impression:", FieldKind::MultiLine),
        field("plan_plan", "Plan:", FieldKind::MultiLine),
        field(
            "plan_followup",
            "Follow-up:",
            FieldKind::Select(&["PRN", "1 week", "2 weeks", "1 month", "3 months"]),
        ),
        field("plan_instructions", "Instructions:", FieldKind::MultiLine),
    ],
};

const PLAN_PRENATAL: FieldGroup = FieldGroup {
    id: "plan_prenatal",
    title: "Prenatal",
    fields: &[
        field("plan_ultrasound", "Next ultrasound:", FieldKind::Text),
        field("plan_labs", "Labs ordered:", FieldKind::MultiLine),
    ],
};

const PLAN_ADULT: &[FieldGroup] = &[PLAN_ASSESSMENT];
const PLAN_OBGYN: &[FieldGroup] = &[PLAN_ASSESSMENT, PLAN_PRENATAL];

/// Field groups rendered inside `section` when `mode` is selected.
///
/// Total and pure: every `(mode, section)` pair has a defined (possibly
/// shared) result, and identical inputs always yield the identical slice.
pub fn field_groups(mode: ClinicalMode, section: SectionId) -> &'static [FieldGroup] {
    match (mode, section) {
        (ClinicalMode::Pediatric, SectionId::Patient) => PATIENT_PEDIATRIC,
        (_, SectionId::Patient) => PATIENT_ADULT,

        (ClinicalMode::ObGyn, SectionId::Visit) => VISIT_OBGYN,
        (_, SectionId::Visit) => VISIT_ADULT,

        (ClinicalMode::Adult, SectionId::History) => HISTORY_ADULT,
        (ClinicalMode::ObGyn, SectionId::History) => HISTORY_OBGYN,
        (ClinicalMode::Pediatric, SectionId::History) => HISTORY_PEDIATRIC,

        (ClinicalMode::Adult, SectionId::ReviewOfSystems) => ROS_ADULT,
        (ClinicalMode::ObGyn, SectionId::ReviewOfSystems) => ROS_OBGYN,
        (ClinicalMode::Pediatric, SectionId::ReviewOfSystems) => ROS_PEDS,

        (ClinicalMode::Pediatric, SectionId::Vitals) => VITALS_PEDIATRIC,
        (_, SectionId::Vitals) => VITALS_ADULT,

        (ClinicalMode::Adult, SectionId::Exam) => EXAM_ADULT,
        (ClinicalMode::ObGyn, SectionId::Exam) => EXAM_OBGYN,
        (ClinicalMode::Pediatric, SectionId::Exam) => EXAM_PEDS,

        (ClinicalMode::ObGyn, SectionId::Plan) => PLAN_OBGYN,
        (_, SectionId::Plan) => PLAN_ADULT,
    }
}

/// Whether `field_id` exists in any mode's tables.
///
/// Mode-independent on purpose: entries typed in one mode survive a mode
/// switch, so the note container accepts any registered id regardless of
/// which mode currently renders it.
pub fn is_known_field(field_id: &str) -> bool {
    ClinicalMode::ALL.iter().any(|mode| {
        SectionId::ALL.iter().any(|section| {
            field_groups(*mode, *section)
                .iter()
                .flat_map(|g| g.fields)
                .any(|f| f.id == field_id)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_pair_defined_and_nonempty() {
        for mode in ClinicalMode::ALL {
            for section in SectionId::ALL {
                let groups = field_groups(mode, section);
                assert!(
                    !groups.is_empty(),
                    "{:?}/{:?} has no field groups",
                    mode,
                    section
                );
                for group in groups {
                    assert!(!group.fields.is_empty(), "group {} is empty", group.id);
                }
            }
        }
    }

    #[test]
    fn test_deterministic_structure() {
        for mode in ClinicalMode::ALL {
            for section in SectionId::ALL {
                let a = field_groups(mode, section);
                let b = field_groups(mode, section);
                assert_eq!(a.len(), b.len());
                for (ga, gb) in a.iter().zip(b.iter()) {
                    assert_eq!(ga.id, gb.id);
                    assert_eq!(ga.fields.len(), gb.fields.len());
                }
            }
        }
    }

    #[test]
    fn test_field_ids_unique_within_mode() {
        for mode in ClinicalMode::ALL {
            let mut seen = HashSet::new();
            for section in SectionId::ALL {
                for group in field_groups(mode, section) {
                    for f in group.fields {
                        assert!(seen.insert(f.id), "duplicate field id {} in {:?}", f.id, mode);
                    }
                }
            }
        }
    }

    #[test]
    fn test_mode_specific_groups() {
        let obgyn_visit = field_groups(ClinicalMode::ObGyn, SectionId::Visit);
        assert!(obgyn_visit.iter().any(|g| g.id == "visit_pregnancy"));
        assert!(!field_groups(ClinicalMode::Adult, SectionId::Visit)
            .iter()
            .any(|g| g.id == "visit_pregnancy"));

        let peds_history = field_groups(ClinicalMode::Pediatric, SectionId::History);
        assert!(peds_history.iter().any(|g| g.id == "history_birth"));

        // Mode change alters structure (and therefore rendered height)
        assert_ne!(
            field_groups(ClinicalMode::Adult, SectionId::History).len(),
            field_groups(ClinicalMode::ObGyn, SectionId::History).len()
        );
    }

    #[test]
    fn test_vitals_carry_derived_bmi() {
        let groups = field_groups(ClinicalMode::Adult, SectionId::Vitals);
        let bmi = groups
            .iter()
            .flat_map(|g| g.fields)
            .find(|f| f.id == "vitals_bmi")
            .expect("vitals must expose a BMI field");
        assert!(matches!(bmi.kind, FieldKind::Derived(DerivedValue::Bmi)));
    }

    #[test]
    fn test_known_field_lookup() {
        // Shared id, present in every mode
        assert!(is_known_field("patient_name"));
        // Mode-specific ids are known regardless of the current mode
        assert!(is_known_field("ob_gravida"));
        assert!(is_known_field("imm_up_to_date"));
        // Misspellings and foreign ids are not
        assert!(!is_known_field("vitals_hieght_cm"));
        assert!(!is_known_field(""));
    }
}
