//! # Intake GUI Application
//!
//! Single-page clinical documentation form built with Iced. The window is a
//! navigation rail beside a long scrollable form body; the two are kept in
//! sync by the scroll-spy engine in `intake_core`:
//!
//! - free scrolling drives the rail highlight through rate-limited
//!   recomputation ticks
//! - rail clicks drive programmatic scrolls, during which scroll
//!   observation is suppressed until a settle timer fires
//!
//! All timers run as tasks on the tokio executor; the engine itself is
//! synchronous and owns no timers, so every race lives in testable core
//! code rather than here.

use iced::widget::operation::{self, AbsoluteOffset};
use iced::widget::{column, row};
use iced::{Element, Length, Task, Theme};

use intake_core::scrollspy::NavTicket;
use intake_core::sections::SectionId;
use intake_core::{vitals, ClinicalMode, ExpansionState, NoteDraft, ScrollSpy, SpyConfig};

mod layout;
mod ui;

/// Width of the navigation rail in pixels
const RAIL_WIDTH: f32 = 190.0;
/// Artificial latency of the simulated save hand-off
const SAVE_DELAY: std::time::Duration = std::time::Duration::from_millis(600);

fn main() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .run()
}

#[derive(Debug, Clone)]
pub enum Message {
    // Form fields
    FieldChanged(&'static str, String),
    CheckToggled(&'static str),
    AgeEditingFinished(&'static str),

    // Mode + sections
    ModeSelected(ClinicalMode),
    ToggleSection(SectionId),

    // Navigation / scroll sync
    NavigateTo(SectionId),
    ScrollObserved(f32),
    SpyTick,
    NavSettled(NavTicket),

    // Save + chrome
    SaveRequested,
    SaveFinished,
    ToggleDarkMode,
}

/// Application state. The scroll-spy, expansion store, and note draft each
/// have a single owner here and are mutated only inside `update`.
pub struct App {
    pub note: NoteDraft,
    pub expansion: ExpansionState,
    pub spy: ScrollSpy,
    saving: bool,
    status: String,
    dark_mode: bool,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let app = App {
            note: NoteDraft::new("Dr. Osei", "ENC-2041"),
            expansion: ExpansionState::new(),
            spy: ScrollSpy::new(SpyConfig::default()),
            saving: false,
            status: String::new(),
            dark_mode: false,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        format!("Intake - Encounter {}", self.note.meta.encounter_id)
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // Field ids here come from the mode tables, so the unknown-field
            // rejection should never trip; surface it in the status bar if a
            // widget ever carries a stale id
            Message::FieldChanged(field_id, value) => {
                if let Err(e) = self.note.set_value(field_id, value) {
                    self.status = e.to_string();
                }
                Task::none()
            }
            Message::CheckToggled(field_id) => {
                if let Err(e) = self.note.toggle_check(field_id) {
                    self.status = e.to_string();
                }
                Task::none()
            }
            Message::AgeEditingFinished(field_id) => {
                let entry = self.note.value(field_id);
                if let Some(age) = vitals::normalize_age(entry, vitals::current_year()) {
                    if let Err(e) = self.note.set_value(field_id, age) {
                        self.status = e.to_string();
                    }
                }
                Task::none()
            }

            Message::ModeSelected(mode) => {
                // Section heights change with the mode; geometry is rebuilt
                // from the tables on the next tick, so nothing to invalidate
                self.note.select_mode(mode);
                Task::none()
            }
            Message::ToggleSection(section) => {
                self.expansion.toggle(section);
                Task::none()
            }

            Message::NavigateTo(section) => {
                if section == self.spy.active() {
                    return Task::none();
                }
                self.expansion.force_open(section);
                let ticket = self.spy.begin_navigation(section);

                // Geometry after the force-open, so the target's own height
                // is the expanded one
                let geometry = layout::section_geometry(self.note.mode, &self.expansion);
                let y = layout::scroll_target(&geometry, section);
                let settle = self.spy.config().settle;

                Task::batch([
                    operation::scroll_to(
                        ui::form_panel::scroll_id(),
                        AbsoluteOffset { x: 0.0, y },
                    ),
                    Task::perform(
                        async move { tokio::time::sleep(settle).await },
                        move |_| Message::NavSettled(ticket),
                    ),
                ])
            }
            Message::ScrollObserved(offset) => {
                if self.spy.record_scroll(offset) {
                    let interval = self.spy.config().frame_interval;
                    Task::perform(
                        async move { tokio::time::sleep(interval).await },
                        |_| Message::SpyTick,
                    )
                } else {
                    Task::none()
                }
            }
            Message::SpyTick => {
                let geometry = layout::section_geometry(self.note.mode, &self.expansion);
                self.spy.recompute(&geometry);
                Task::none()
            }
            Message::NavSettled(ticket) => {
                self.spy.finish_navigation(ticket);
                Task::none()
            }

            Message::SaveRequested => match self.note.to_json() {
                Ok(_) => {
                    self.saving = true;
                    self.status = "Saving...".to_string();
                    Task::perform(
                        async { tokio::time::sleep(SAVE_DELAY).await },
                        |_| Message::SaveFinished,
                    )
                }
                Err(e) => {
                    self.status = format!("Save failed: {}", e);
                    Task::none()
                }
            },
            Message::SaveFinished => {
                self.saving = false;
                self.status = format!("Saved {}", chrono::Local::now().format("%H:%M"));
                Task::none()
            }
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let header = ui::toolbar::view_header(&self.note.meta.encounter_id);
        let toolbar = ui::toolbar::view_toolbar(self.note.mode, self.saving, self.dark_mode);

        let body = row![
            ui::nav_rail::view_nav_rail(self.spy.active(), &self.expansion, RAIL_WIDTH),
            ui::form_panel::view_form_panel(self),
        ]
        .spacing(8)
        .height(Length::Fill);

        let status = ui::status_bar::view_status_bar(
            &self.note.meta.clinician,
            self.spy.active(),
            &self.status,
        );

        column![header, toolbar, body, status]
            .spacing(4)
            .padding(8)
            .into()
    }
}
