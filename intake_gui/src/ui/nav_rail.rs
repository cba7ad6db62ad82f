//! Navigation Rail (Left Sidebar)
//!
//! One shortcut per registered section, in registry order (which is also
//! document order; the scroll-spy containment rule relies on that). The
//! active section is highlighted; clicking a non-active entry issues a
//! navigation request, clicking the active one is a no-op.

use iced::widget::{button, column, container, row, scrollable, text, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use intake_core::sections::SectionId;
use intake_core::ExpansionState;

use crate::Message;

/// Render the navigation rail
pub fn view_nav_rail<'a>(
    active: SectionId,
    expansion: &'a ExpansionState,
    width: f32,
) -> Element<'a, Message> {
    let mut rail: Column<'_, Message> = column![].spacing(2);

    for section in SectionId::ALL {
        let is_active = section == active;
        let indicator = if expansion.is_open(section) {
            "▼"
        } else {
            "▶"
        };

        let entry = button(
            row![
                text(section.icon()).size(11),
                Space::new().width(6),
                text(section.display_name()).size(11),
                Space::new().width(Length::Fill),
                text(indicator).size(9).color([0.6, 0.6, 0.6]),
            ]
            .align_y(Alignment::Center),
        )
        .on_press_maybe(if is_active {
            None
        } else {
            Some(Message::NavigateTo(section))
        })
        .padding(Padding::from([6, 8]))
        .style(if is_active {
            button::primary
        } else {
            button::text
        })
        .width(Length::Fill);

        rail = rail.push(entry);
    }

    container(scrollable(rail.padding(4)))
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(4)
        .into()
}
