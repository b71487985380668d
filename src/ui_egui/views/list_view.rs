use chrono::{DateTime, Utc};
use egui::RichText;

use super::row_view::render_countdown_row;
use super::ListAction;
use crate::services::countdown::CountdownStore;

/// Draws every countdown in store order plus the add button. Returns the
/// first action the user triggered, if any.
pub fn render_countdown_list(
    ui: &mut egui::Ui,
    store: &CountdownStore,
    now: DateTime<Utc>,
) -> Option<ListAction> {
    let mut action = None;

    ui.heading("Countdowns");
    ui.add_space(6.0);

    let add_height = 56.0;
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .max_height((ui.available_height() - add_height).max(0.0))
        .show(ui, |ui| {
            if store.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label(RichText::new("⏳").size(32.0));
                    ui.label(RichText::new("No countdowns").heading());
                    ui.label(RichText::new("Click + to add a countdown").weak());
                });
                return;
            }

            for countdown in store.countdowns() {
                let row = render_countdown_row(ui, countdown, now);
                if action.is_none() {
                    if row.delete_requested {
                        action = Some(ListAction::Delete(countdown.id));
                    } else if row.edit_requested {
                        action = Some(ListAction::Edit(countdown.id));
                    }
                }
                ui.add_space(4.0);
            }
        });

    ui.separator();
    ui.vertical_centered(|ui| {
        let add = ui.add_enabled(
            store.can_add_more(),
            egui::Button::new(RichText::new("+").size(24.0)).min_size(egui::vec2(44.0, 44.0)),
        );
        let add = if store.can_add_more() {
            add.on_hover_text("Add a countdown")
        } else {
            add.on_disabled_hover_text(format!(
                "You can track up to {} countdowns",
                store.limit()
            ))
        };
        if add.clicked() {
            action = Some(ListAction::Add);
        }
    });

    action
}
