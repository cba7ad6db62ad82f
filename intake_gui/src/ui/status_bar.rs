//! Status Bar (Bottom)
//!
//! Displays:
//! - Documenting clinician
//! - Currently active section (the rail highlight, spelled out)
//! - Status messages (save acknowledgments)

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use intake_core::sections::SectionId;

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(
    clinician: &'a str,
    active: SectionId,
    status: &'a str,
) -> Element<'a, Message> {
    let who = if clinician.is_empty() {
        "Unassigned".to_string()
    } else {
        clinician.to_string()
    };

    row![
        text(who).size(10),
        Space::new().width(12),
        text(format!("Viewing: {}", active.display_name()))
            .size(10)
            .color([0.5, 0.5, 0.5]),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
