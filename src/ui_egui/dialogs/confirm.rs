//! Confirmation dialog for deleting a countdown.

use egui::{Context, RichText};

use crate::models::countdown::CountdownId;

/// Types of confirmation dialogs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Delete a countdown by ID
    DeleteCountdown { id: CountdownId, title: String },
}

impl ConfirmAction {
    pub fn title(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteCountdown { .. } => "Delete Countdown",
        }
    }

    pub fn message(&self) -> String {
        match self {
            ConfirmAction::DeleteCountdown { title, .. } => {
                format!(
                    "Are you sure you want to delete the countdown \"{}\"?\n\nThis action cannot be undone.",
                    title
                )
            }
        }
    }

    pub fn confirm_text(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteCountdown { .. } => "Delete",
        }
    }
}

/// Result of a confirmation dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmResult {
    Confirmed(ConfirmAction),
    Cancelled,
    /// Dialog is still open, or nothing is pending
    Pending,
}

#[derive(Debug, Default)]
pub struct ConfirmDialogState {
    pending_action: Option<ConfirmAction>,
}

impl ConfirmDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, action: ConfirmAction) {
        self.pending_action = Some(action);
    }

    pub fn is_open(&self) -> bool {
        self.pending_action.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending_action = None;
    }

    /// Render the confirmation dialog and return the result
    pub fn render(&mut self, ctx: &Context) -> ConfirmResult {
        let Some(action) = &self.pending_action else {
            return ConfirmResult::Pending;
        };

        let mut confirmed = false;
        let mut cancelled = false;

        egui::Window::new(action.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(260.0);
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("⚠")
                            .size(24.0)
                            .color(egui::Color32::from_rgb(220, 150, 50)),
                    );
                    ui.vertical(|ui| {
                        ui.label(action.message());
                    });
                });

                ui.add_space(12.0);
                ui.separator();

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let confirm_button = egui::Button::new(
                        RichText::new(action.confirm_text()).color(egui::Color32::WHITE),
                    )
                    .fill(egui::Color32::from_rgb(180, 60, 60));

                    if ui.add(confirm_button).clicked() {
                        confirmed = true;
                    }
                    ui.add_space(10.0);
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            cancelled = true;
        }

        if confirmed {
            match self.pending_action.take() {
                Some(action) => ConfirmResult::Confirmed(action),
                None => ConfirmResult::Pending,
            }
        } else if cancelled {
            self.cancel();
            ConfirmResult::Cancelled
        } else {
            ConfirmResult::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_and_cancel() {
        let mut state = ConfirmDialogState::new();
        assert!(!state.is_open());

        state.request(ConfirmAction::DeleteCountdown {
            id: CountdownId::new(),
            title: "Trip".to_string(),
        });
        assert!(state.is_open());

        state.cancel();
        assert!(!state.is_open());
    }

    #[test]
    fn delete_message_names_countdown() {
        let action = ConfirmAction::DeleteCountdown {
            id: CountdownId::new(),
            title: "Trip".to_string(),
        };
        assert!(action.message().contains("\"Trip\""));
        assert_eq!(action.confirm_text(), "Delete");
    }
}
