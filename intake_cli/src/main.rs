//! # Intake CLI Application
//!
//! Terminal front-end for the intake engine: a quick way to exercise the
//! derived-vitals calculators and inspect the note JSON without launching
//! the GUI.

use std::io::{self, BufRead, Write};

use intake_core::modes::{field_groups, ClinicalMode};
use intake_core::sections::SectionId;
use intake_core::{vitals, NoteDraft};

fn prompt(label: &str, default: &str) -> String {
    print!("{}", label);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn main() {
    println!("Intake CLI - Clinical Documentation");
    println!("===================================");
    println!();

    let height = prompt("Height in cm [180]: ", "180");
    let weight = prompt("Weight in kg [70]: ", "70");
    let age_entry = prompt("Age or birth year [1990]: ", "1990");

    println!();
    match vitals::bmi_display(&height, &weight) {
        Some(bmi) => println!("BMI: {}", bmi),
        None => println!("BMI: (not computable from those entries)"),
    }

    let year = vitals::current_year();
    match vitals::normalize_age(&age_entry, year) {
        Some(age) => println!("Age: {} (from birth year {})", age, age_entry),
        None => println!("Age: {}", age_entry),
    }

    println!();
    println!("Sections per mode:");
    for mode in ClinicalMode::ALL {
        let groups: usize = SectionId::ALL
            .iter()
            .map(|s| field_groups(mode, *s).len())
            .sum();
        println!("  {:<10} {} sections, {} field groups", mode.display_name(), SectionId::ALL.len(), groups);
    }

    let mut note = NoteDraft::new("CLI Demo", "ENC-0000");
    let entries = [
        ("vitals_height_cm", height),
        ("vitals_weight_kg", weight),
        (
            "patient_age",
            vitals::normalize_age(&age_entry, year).unwrap_or(age_entry),
        ),
    ];
    for (field_id, value) in entries {
        if let Err(e) = note.set_value(field_id, value) {
            eprintln!("Skipping {}: {}", field_id, e);
        }
    }

    println!();
    println!("Note JSON:");
    match note.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: {}", e),
    }
}
