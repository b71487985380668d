//! Add/edit dialog for a single countdown.

use chrono::{
    DateTime, Duration as ChronoDuration, Local, LocalResult, NaiveDate, NaiveDateTime,
    NaiveTime, TimeZone, Timelike, Utc,
};
use egui::RichText;
use egui_extras::DatePickerButton;

use crate::models::countdown::{Countdown, DisplayMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditDialogAction {
    None,
    Cancel,
    Save(Countdown),
    Upgrade,
}

/// Form state for adding a new countdown or editing an existing one.
#[derive(Debug, Clone)]
pub struct EditDialogState {
    editing: Option<Countdown>,
    pub title: String,
    pub date: NaiveDate,
    pub hour: u32,
    pub minute: u32,
    pub display_mode: DisplayMode,
    initial_moment: (NaiveDate, u32, u32),
}

impl EditDialogState {
    /// Blank form targeting the current local minute.
    pub fn new_countdown(now: DateTime<Utc>) -> Self {
        let local = now.with_timezone(&Local);
        let moment = (local.date_naive(), local.hour(), local.minute());
        Self {
            editing: None,
            title: String::new(),
            date: moment.0,
            hour: moment.1,
            minute: moment.2,
            display_mode: DisplayMode::default(),
            initial_moment: moment,
        }
    }

    pub fn edit(countdown: &Countdown) -> Self {
        let local = countdown.target_date.with_timezone(&Local);
        let moment = (local.date_naive(), local.hour(), local.minute());
        Self {
            editing: Some(countdown.clone()),
            title: countdown.title.clone(),
            date: moment.0,
            hour: moment.1,
            minute: moment.2,
            display_mode: countdown.display_mode,
            initial_moment: moment,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn heading(&self) -> &'static str {
        if self.is_editing() {
            "Edit countdown"
        } else {
            "New countdown"
        }
    }

    pub fn can_save(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Target instant from the form. An untouched date and time keeps the
    /// original instant, seconds included.
    pub fn target_date(&self) -> DateTime<Utc> {
        if let Some(existing) = &self.editing {
            if (self.date, self.hour, self.minute) == self.initial_moment {
                return existing.target_date;
            }
        }
        let time = NaiveTime::from_hms_opt(self.hour.min(23), self.minute.min(59), 0)
            .unwrap_or(NaiveTime::MIN);
        combine_date_with_time(self.date, time)
    }

    /// Builds the countdown to save, or `None` while the title is blank.
    /// Edits keep the original id and confirm the derived direction.
    pub fn build(&self) -> Option<Countdown> {
        if !self.can_save() {
            return None;
        }
        let title = self.title.trim().to_string();

        let countdown = match &self.editing {
            Some(existing) => {
                let mut updated = existing.clone();
                updated.title = title;
                updated.target_date = self.target_date();
                updated.display_mode = self.display_mode;
                updated.acknowledge_direction();
                updated
            }
            None => Countdown::new(title, self.target_date(), self.display_mode),
        };
        Some(countdown)
    }
}

pub fn render_edit_dialog(
    ctx: &egui::Context,
    state: &mut EditDialogState,
    is_premium: bool,
) -> EditDialogAction {
    let mut action = EditDialogAction::None;

    egui::Window::new(state.heading())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(300.0);

            ui.label(RichText::new("Title").strong());
            ui.add(egui::TextEdit::singleline(&mut state.title).hint_text("Event name"));
            ui.add_space(8.0);

            ui.label(RichText::new("Date").strong());
            ui.horizontal(|ui| {
                ui.add(DatePickerButton::new(&mut state.date).id_source("countdown_target_date"));
                ui.add(
                    egui::DragValue::new(&mut state.hour)
                        .range(0..=23)
                        .custom_formatter(|v, _| format!("{:02}", v as u32)),
                );
                ui.label(":");
                ui.add(
                    egui::DragValue::new(&mut state.minute)
                        .range(0..=59)
                        .custom_formatter(|v, _| format!("{:02}", v as u32)),
                );
            });
            ui.add_space(8.0);

            ui.label(RichText::new("Display").strong());
            egui::ComboBox::from_id_source("countdown_display_mode")
                .selected_text(state.display_mode.label())
                .show_ui(ui, |ui| {
                    for mode in DisplayMode::ALL {
                        ui.selectable_value(&mut state.display_mode, mode, mode.label());
                    }
                });

            if !is_premium {
                ui.add_space(8.0);
                if ui.button("★ Upgrade: more countdowns").clicked() {
                    action = EditDialogAction::Upgrade;
                }
            }

            ui.add_space(12.0);
            ui.separator();

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(state.can_save(), egui::Button::new("Save"))
                    .clicked()
                {
                    if let Some(countdown) = state.build() {
                        action = EditDialogAction::Save(countdown);
                    }
                }
                if ui.button("Cancel").clicked() {
                    action = EditDialogAction::Cancel;
                }
            });
        });

    if action == EditDialogAction::None && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        action = EditDialogAction::Cancel;
    }

    action
}

/// Resolves a local wall-clock time, stepping past DST gaps.
fn combine_date_with_time(date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    resolve_wall_clock(date.and_time(time), |naive| Local.from_local_datetime(naive))
}

fn resolve_wall_clock<Tz: TimeZone>(
    mut naive: NaiveDateTime,
    resolve: impl Fn(&NaiveDateTime) -> LocalResult<DateTime<Tz>>,
) -> DateTime<Utc> {
    for _ in 0..3 {
        match resolve(&naive) {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
                return dt.with_timezone(&Utc)
            }
            LocalResult::None => naive += ChronoDuration::minutes(30),
        }
    }
    // Still unresolvable: keep the chosen wall time, read as UTC
    Utc.from_utc_datetime(&naive)
}
