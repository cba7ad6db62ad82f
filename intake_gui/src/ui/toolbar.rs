//! Toolbar component
//!
//! Application header plus the clinical mode picker, the (simulated) save
//! action, and the theme toggle.

use iced::widget::{button, pick_list, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use intake_core::ClinicalMode;

use crate::Message;

/// Render the application header with title
pub fn view_header(encounter_id: &str) -> Element<'_, Message> {
    row![
        text("Intake").size(24),
        Space::new().width(12),
        text("Clinical Documentation").size(12).color([0.5, 0.5, 0.5]),
        Space::new().width(Length::Fill),
        text(format!("Encounter {}", encounter_id)).size(12),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Render the toolbar row
pub fn view_toolbar(mode: ClinicalMode, saving: bool, dark_mode: bool) -> Element<'static, Message> {
    let mode_picker = row![
        text("Mode:").size(11),
        Space::new().width(4),
        pick_list(&ClinicalMode::ALL[..], Some(mode), Message::ModeSelected)
            .width(Length::Fixed(110.0))
            .text_size(11),
    ]
    .align_y(Alignment::Center);

    let save_label = if saving { "Saving..." } else { "Save Note" };
    let save_button = button(text(save_label).size(11))
        .on_press_maybe(if saving {
            None
        } else {
            Some(Message::SaveRequested)
        })
        .padding(Padding::from([4, 10]))
        .style(button::primary);

    let theme_label = if dark_mode { "Light Mode" } else { "Dark Mode" };
    let theme_button = button(text(theme_label).size(11))
        .on_press(Message::ToggleDarkMode)
        .padding(Padding::from([4, 8]))
        .style(button::secondary);

    row![
        mode_picker,
        Space::new().width(Length::Fill),
        save_button,
        Space::new().width(4),
        theme_button,
    ]
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}
