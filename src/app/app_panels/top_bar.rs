use crate::app::app::Tilesmith;

use eframe::egui::RichText;
use eframe::egui::{self, Ui};
use egui_phosphor::regular as icons;

impl Tilesmith {
    pub fn display_panel_top(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);
            ui.label(RichText::new(icons::GRID_FOUR).size(18.0));
            ui.label(RichText::new("Tilesmith").strong());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let close_btn = ui
                    .add(egui::Button::new(icons::X).min_size(egui::vec2(28.0, 28.0)))
                    .on_hover_text("Close");
                if close_btn.clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }

                ui.add_space(8.0);
                let version_label = if self.needs_update.load(std::sync::atomic::Ordering::Relaxed)
                {
                    format!("v{} (update available)", env!("CARGO_PKG_VERSION"))
                } else {
                    format!("v{}", env!("CARGO_PKG_VERSION"))
                };
                ui.label(RichText::new(version_label).small().weak());
            });
        });
    }
}
