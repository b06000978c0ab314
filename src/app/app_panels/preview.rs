use crate::app::app::Tilesmith;
use crate::app::theme;

use eframe::egui::RichText;
use eframe::egui::{self, Ui};
use egui_phosphor::regular as icons;

impl Tilesmith {
    /// Central panel: the composed atlas at 1:1 pixels, scrollable when it
    /// outgrows the window.
    pub fn display_panel_preview(&mut self, ui: &mut Ui) {
        match &self.preview_texture {
            Some(texture) => {
                ui.label(
                    RichText::new(format!(
                        "Composite {}x{} px",
                        self.composite.width(),
                        self.composite.height()
                    ))
                    .small()
                    .color(theme::colors::TEXT_MUTED),
                );
                ui.add_space(4.0);
                egui::ScrollArea::both().show(ui, |ui| {
                    ui.add(egui::Image::new((texture.id(), texture.size_vec2())));
                });
            }
            None => {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.35);
                    ui.label(
                        RichText::new(icons::GRID_FOUR)
                            .size(48.0)
                            .color(theme::colors::TEXT_MUTED),
                    );
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("Drop images anywhere in the window to build a tileset")
                            .color(theme::colors::TEXT_MUTED),
                    );
                });
            }
        }
    }
}
