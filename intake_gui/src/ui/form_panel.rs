//! Form Panel (Center)
//!
//! The scrollable single-page form body: every registered section in
//! document order, each with a clickable header and, when expanded, its
//! mode-dependent field groups. All vertical sizes come from the `layout`
//! constants so the scroll-spy geometry stays in step with what is drawn.

use iced::widget::{button, column, container, row, scrollable, text, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use intake_core::modes::field_groups;
use intake_core::sections::SectionId;

use crate::layout;
use crate::ui::fields;
use crate::{App, Message};

/// Scrollable id for the form body; navigation tasks scroll this widget
pub fn scroll_id() -> iced::widget::Id {
    iced::widget::Id::new("form-body")
}

/// Render the form panel
pub fn view_form_panel(app: &App) -> Element<'_, Message> {
    let mut body: Column<'_, Message> = column![].spacing(layout::SECTION_GAP);

    for section in SectionId::ALL {
        body = body.push(view_section(app, section));
    }

    let pane = scrollable(body.padding(layout::BODY_PADDING))
        .id(scroll_id())
        .on_scroll(|viewport| Message::ScrollObserved(viewport.absolute_offset().y))
        .width(Length::Fill)
        .height(Length::Fill);

    container(pane)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_section(app: &App, section: SectionId) -> Element<'_, Message> {
    let open = app.expansion.is_open(section);
    let is_active = app.spy.active() == section;
    let indicator = if open { "▼" } else { "▶" };

    let header = button(
        row![
            text(indicator).size(10),
            Space::new().width(6),
            text(section.icon()).size(12),
            Space::new().width(4),
            text(section.display_name()).size(13),
        ]
        .align_y(Alignment::Center),
    )
    .on_press(Message::ToggleSection(section))
    .padding(Padding::from([4, 6]))
    .style(if is_active {
        button::secondary
    } else {
        button::text
    })
    .width(Length::Fill);

    let mut block: Column<'_, Message> = column![container(header)
        .height(Length::Fixed(layout::SECTION_HEADER_H))
        .align_y(Alignment::Center)];

    if open {
        for group in field_groups(app.note.mode, section) {
            block = block.push(fields::view_group(group, &app.note).padding(Padding {
                top: 0.0,
                right: 0.0,
                bottom: 0.0,
                left: 16.0,
            }));
        }
    }

    block.into()
}
