//! Generic field-group renderer
//!
//! Consumes the static descriptors from `intake_core::modes` and renders
//! them against the note draft. Every field element is wrapped in a
//! fixed-height container matching `layout::field_height`, which is what
//! keeps the estimated section geometry honest.

use iced::widget::{checkbox, column, container, pick_list, row, text, text_input, Column};
use iced::{Alignment, Element, Length};

use intake_core::modes::{DerivedValue, Field, FieldGroup, FieldKind};
use intake_core::vitals;
use intake_core::NoteDraft;

use crate::layout;
use crate::Message;

/// Render one field group: subheading plus its fields in order
pub fn view_group<'a>(group: &'static FieldGroup, note: &'a NoteDraft) -> Column<'a, Message> {
    let mut body: Column<'a, Message> = column![container(text(group.title).size(12))
        .height(Length::Fixed(layout::GROUP_TITLE_H))
        .align_y(Alignment::Center)];

    for field in group.fields {
        body = body.push(
            container(view_field(field, note))
                .height(Length::Fixed(layout::field_height(field.kind)))
                .align_y(Alignment::Center),
        );
    }

    body
}

fn view_field<'a>(field: &'static Field, note: &'a NoteDraft) -> Element<'a, Message> {
    let id = field.id;
    match field.kind {
        FieldKind::Text | FieldKind::Number => {
            labeled_input(field.label, note.value(id), move |s| {
                Message::FieldChanged(id, s)
            })
        }
        FieldKind::Age => {
            // Normalization from a birth year happens when editing ends,
            // not per keystroke
            row![
                text(field.label).size(11).width(Length::Fixed(110.0)),
                text_input("", note.value(id))
                    .on_input(move |s| Message::FieldChanged(id, s))
                    .on_submit(Message::AgeEditingFinished(id))
                    .width(Length::Fixed(80.0))
                    .padding(4)
                    .size(11),
                text("years or birth year").size(10).color([0.5, 0.5, 0.5]),
            ]
            .spacing(6)
            .align_y(Alignment::Center)
            .into()
        }
        FieldKind::MultiLine => column![
            text(field.label).size(11),
            text_input("", note.value(id))
                .on_input(move |s| Message::FieldChanged(id, s))
                .width(Length::Fill)
                .padding(4)
                .size(11),
        ]
        .spacing(2)
        .into(),
        FieldKind::Select(options) => {
            let current = note.value(id);
            let selected = options.iter().copied().find(|o| *o == current);
            row![
                text(field.label).size(11).width(Length::Fixed(110.0)),
                pick_list(options, selected, move |choice: &'static str| {
                    Message::FieldChanged(id, choice.to_string())
                })
                .width(Length::Fill)
                .text_size(11)
                .placeholder("Select..."),
            ]
            .spacing(6)
            .align_y(Alignment::Center)
            .into()
        }
        FieldKind::Checkbox => checkbox(note.is_checked(id))
            .label(field.label)
            .on_toggle(move |_| Message::CheckToggled(id))
            .text_size(11)
            .into(),
        FieldKind::Derived(DerivedValue::Bmi) => {
            let bmi = vitals::bmi_display(
                note.value("vitals_height_cm"),
                note.value("vitals_weight_kg"),
            );
            row![
                text(field.label).size(11).width(Length::Fixed(110.0)),
                // Blank display when not computable, never an error
                text(bmi.unwrap_or_default()).size(11),
            ]
            .spacing(6)
            .align_y(Alignment::Center)
            .into()
        }
    }
}

/// Helper to create a labeled text input
fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(110.0)),
        text_input("", value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .spacing(6)
    .align_y(Alignment::Center)
    .into()
}
