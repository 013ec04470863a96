use egui::{Frame, Margin, ScrollArea, Stroke, Ui};

use crate::state::BoardState;
use crate::utils::colors::{COLOR_RED, TABLE_BORDER_COLOR};
use crate::widgets::field_table;

pub struct BoardApp {
    state: BoardState,
}

impl BoardApp {
    /// Called once before the first frame.
    pub fn new(state: BoardState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Draws the board into `ui`.
    pub fn show(&mut self, ui: &mut Ui) {
        if self.state.poll() {
            self.state.refresh(ui.ctx());
        }
        if self.state.needs_initial_load() {
            self.state.refresh(ui.ctx());
        }

        ui.horizontal(|ui| {
            if ui.button("🔄 Refresh").clicked() {
                self.state.refresh(ui.ctx());
            }
            if self.state.is_fetching {
                ui.spinner();
                ui.label("Loading...");
            }
        });

        if let Some(error) = &self.state.error {
            ui.colored_label(COLOR_RED, format!("Error: {error}"));
        }

        ui.add_space(8.0);

        let BoardState {
            table,
            rows,
            table_state,
            ..
        } = &mut self.state;

        let response = Frame::NONE
            .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
            .inner_margin(Margin::ZERO)
            .show(ui, |ui| {
                ScrollArea::both()
                    .show(ui, |ui| field_table(ui, "board", table, rows.as_deref(), table_state))
                    .inner
            })
            .inner;

        // Handlers only ask; the board owns the reload.
        if response.needs_refetch() {
            self.state.refresh(ui.ctx());
        }
    }
}

impl eframe::App for BoardApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Gigboard");
            ui.separator();
            self.show(ui);
        });
    }
}
