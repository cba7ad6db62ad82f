//! # Derived-Field Calculators
//!
//! Pure functions recomputed from their raw inputs on every call. Nothing
//! here stores state: the BMI shown in the form is always exactly a
//! function of the current height and weight strings, and invalid or
//! partially-typed input yields a blank display rather than an error.

use chrono::Datelike;

/// BMI display string for raw height (cm) and weight (kg) entries.
///
/// Returns `Some("21.6")`-style text, rounded to one decimal, only when
/// both fields parse and the result lands in the plausible open interval
/// (0, 100). Anything else (blank fields, zero height, transient garbage
/// mid-keystroke) is "not computable" and renders blank.
pub fn bmi_display(height_cm: &str, weight_kg: &str) -> Option<String> {
    let height: f64 = height_cm.trim().parse().ok()?;
    let weight: f64 = weight_kg.trim().parse().ok()?;

    let meters = height / 100.0;
    let bmi = weight / (meters * meters);

    if bmi.is_finite() && bmi > 0.0 && bmi < 100.0 {
        Some(format!("{:.1}", bmi))
    } else {
        None
    }
}

/// Interpret an age entry once editing ends.
///
/// A value strictly greater than 1900 and at most `current_year` is taken
/// as a birth year and replaced by the age in years. Plausible ages,
/// out-of-range years, and non-numeric text are left alone (`None` means
/// "keep the field as typed"). This runs once on end-of-edit, never per
/// keystroke.
pub fn normalize_age(entry: &str, current_year: i32) -> Option<String> {
    let year: i32 = entry.trim().parse().ok()?;
    if year > 1900 && year <= current_year {
        Some((current_year - year).to_string())
    } else {
        None
    }
}

/// Current calendar year, for [`normalize_age`] at the UI boundary.
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_normal_case() {
        assert_eq!(bmi_display("180", "70"), Some("21.6".to_string()));
    }

    #[test]
    fn test_bmi_blank_when_input_missing() {
        assert_eq!(bmi_display("", "70"), None);
        assert_eq!(bmi_display("180", ""), None);
        assert_eq!(bmi_display("", ""), None);
    }

    #[test]
    fn test_bmi_division_guard() {
        // Zero height gives infinite BMI, outside (0, 100)
        assert_eq!(bmi_display("0", "70"), None);
    }

    #[test]
    fn test_bmi_rejects_implausible_results() {
        assert_eq!(bmi_display("10", "70"), None); // bmi = 7000
        assert_eq!(bmi_display("180", "0"), None); // bmi = 0
        assert_eq!(bmi_display("180", "-5"), None);
    }

    #[test]
    fn test_bmi_tolerates_garbage() {
        assert_eq!(bmi_display("tall", "70"), None);
        assert_eq!(bmi_display("180", "7o"), None);
    }

    #[test]
    fn test_age_birth_year_converted() {
        assert_eq!(normalize_age("1990", 2024), Some("34".to_string()));
        assert_eq!(normalize_age(" 2024 ", 2024), Some("0".to_string()));
    }

    #[test]
    fn test_age_plausible_age_unchanged() {
        assert_eq!(normalize_age("34", 2024), None);
        assert_eq!(normalize_age("0", 2024), None);
    }

    #[test]
    fn test_age_out_of_range_unchanged() {
        assert_eq!(normalize_age("1899", 2024), None);
        assert_eq!(normalize_age("1900", 2024), None); // strictly greater than 1900
        assert_eq!(normalize_age("2025", 2024), None); // future year
        assert_eq!(normalize_age("not a year", 2024), None);
    }
}
