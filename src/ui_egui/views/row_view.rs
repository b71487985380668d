use chrono::{DateTime, Utc};
use egui::{RichText, Sense};

use crate::models::countdown::Countdown;
use crate::services::countdown::format_until;

#[derive(Debug, Default, Clone, Copy)]
pub struct CountdownRowResponse {
    pub edit_requested: bool,
    pub delete_requested: bool,
}

/// Draws one countdown: title, formatted interval and an "until"/"since"
/// caption, with edit and delete affordances.
pub fn render_countdown_row(
    ui: &mut egui::Ui,
    countdown: &Countdown,
    now: DateTime<Utc>,
) -> CountdownRowResponse {
    let mut response = CountdownRowResponse::default();
    let direction = countdown.direction(now);
    let interval = format_until(countdown.target_date, now, countdown.display_mode);

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                let title = ui.add(
                    egui::Label::new(RichText::new(&countdown.title).heading()).sense(Sense::click()),
                );
                if title.clicked() {
                    response.edit_requested = true;
                }
                title.on_hover_text("Click to edit");

                ui.label(RichText::new(interval).size(16.0));

                ui.horizontal(|ui| {
                    ui.label(RichText::new(direction.label()).small().weak());
                    if countdown.has_direction_conflict(now) {
                        ui.label(RichText::new("⚠").small().color(egui::Color32::from_rgb(220, 150, 50)))
                            .on_hover_text(
                                "Saved by an older version with a different direction. \
                                 Open and save it to confirm.",
                            );
                    }
                });
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🗑").on_hover_text("Delete").clicked() {
                    response.delete_requested = true;
                }
                if ui.button("✏").on_hover_text("Edit").clicked() {
                    response.edit_requested = true;
                }
            });
        });
    });

    response
}
