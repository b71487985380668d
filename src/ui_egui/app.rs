use std::time::Duration as StdDuration;

use chrono::{DateTime, Utc};

use super::dialogs::confirm::{ConfirmAction, ConfirmDialogState, ConfirmResult};
use super::dialogs::edit_dialog::{render_edit_dialog, EditDialogAction, EditDialogState};
use super::views::list_view::render_countdown_list;
use super::views::ListAction;
use crate::services::countdown::{CountdownStore, SubscriptionId};
use crate::services::ticker::RefreshTicker;

pub struct CountdownApp {
    store: CountdownStore,
    ticker: RefreshTicker,
    /// Instant of the last refresh tick; every row formats against it
    now: DateTime<Utc>,
    edit_dialog: Option<EditDialogState>,
    confirm_dialog: ConfirmDialogState,
    subscription: SubscriptionId,
}

impl CountdownApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        mut store: CountdownStore,
        refresh_interval: StdDuration,
    ) -> Self {
        // Redraw as soon as the store changes rather than waiting for a tick
        let ctx = cc.egui_ctx.clone();
        let subscription = store.subscribe(move |event| {
            log::debug!("Store changed: {event:?}");
            ctx.request_repaint();
        });

        Self {
            store,
            ticker: RefreshTicker::new(refresh_interval),
            now: Utc::now(),
            edit_dialog: None,
            confirm_dialog: ConfirmDialogState::new(),
            subscription,
        }
    }

    fn handle_list_action(&mut self, action: ListAction) {
        match action {
            ListAction::Add => {
                if self.store.can_add_more() {
                    self.edit_dialog = Some(EditDialogState::new_countdown(self.now));
                }
            }
            ListAction::Edit(id) => {
                if let Some(countdown) = self.store.get(id) {
                    self.edit_dialog = Some(EditDialogState::edit(countdown));
                }
            }
            ListAction::Delete(id) => {
                if let Some(countdown) = self.store.get(id) {
                    self.confirm_dialog.request(ConfirmAction::DeleteCountdown {
                        id,
                        title: countdown.title.clone(),
                    });
                }
            }
        }
    }

    fn show_edit_dialog(&mut self, ctx: &egui::Context) {
        let Some(state) = self.edit_dialog.as_mut() else {
            return;
        };

        match render_edit_dialog(ctx, state, self.store.is_premium()) {
            EditDialogAction::None => {}
            EditDialogAction::Cancel => self.edit_dialog = None,
            EditDialogAction::Upgrade => self.store.set_premium(true),
            EditDialogAction::Save(countdown) => {
                let is_editing = state.is_editing();
                if is_editing {
                    self.store.update(countdown);
                } else if self.store.can_add_more() {
                    self.store.add(countdown);
                }
                self.edit_dialog = None;
            }
        }
    }

    fn show_confirm_dialog(&mut self, ctx: &egui::Context) {
        if let ConfirmResult::Confirmed(ConfirmAction::DeleteCountdown { id, .. }) =
            self.confirm_dialog.render(ctx)
        {
            self.store.delete_id(id);
        }
    }
}

impl eframe::App for CountdownApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Utc::now();
        if self.ticker.tick_at(now) {
            self.now = now;
        }
        ctx.request_repaint_after(self.ticker.time_until_next(now));

        let action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                // Dialogs are modal over the list
                ui.add_enabled_ui(
                    self.edit_dialog.is_none() && !self.confirm_dialog.is_open(),
                    |ui| render_countdown_list(ui, &self.store, self.now),
                )
                .inner
            })
            .inner;

        if let Some(action) = action {
            self.handle_list_action(action);
        }

        self.show_edit_dialog(ctx);
        self.show_confirm_dialog(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.store.unsubscribe(self.subscription);
        self.store.save();
    }
}
