use crate::app::app::Tilesmith;
use crate::app::theme;

use eframe::egui::RichText;
use eframe::egui::{self, Ui};
use egui_phosphor::regular as icons;

impl Tilesmith {
    /// Right panel: layout fields, the drop zone, and the action buttons.
    pub fn display_panel_tools(&mut self, ui: &mut Ui) {
        ui.add_space(8.0);
        ui.heading("Atlas");
        ui.add_space(4.0);
        ui.separator();
        ui.add_space(4.0);

        let mut dirty = false;

        egui::Grid::new("layout_fields")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("File name");
                ui.text_edit_singleline(&mut self.options.basename);
                ui.end_row();

                ui.label("Tile width");
                dirty |= ui
                    .add(egui::DragValue::new(&mut self.cell_size.width).range(0..=8192))
                    .changed();
                ui.end_row();

                ui.label("Tile height");
                dirty |= ui
                    .add(egui::DragValue::new(&mut self.cell_size.height).range(0..=8192))
                    .changed();
                ui.end_row();

                ui.label("Spacing");
                dirty |= ui
                    .add(egui::DragValue::new(&mut self.options.spacing).range(0..=1024))
                    .changed();
                ui.end_row();

                ui.label("Columns");
                dirty |= ui
                    .add(egui::DragValue::new(&mut self.options.columns).range(1..=256))
                    .changed();
                ui.end_row();
            });

        if dirty {
            self.preview_dirty = true;
        }

        ui.add_space(8.0);

        let hovering = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
        theme::drop_zone_frame(hovering).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_min_height(96.0);
            if self.images.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.label(
                        RichText::new(icons::IMAGES)
                            .size(28.0)
                            .color(theme::colors::TEXT_MUTED),
                    );
                    ui.label(
                        RichText::new("Drop images or folders here")
                            .color(theme::colors::TEXT_MUTED),
                    );
                });
            } else {
                ui.horizontal_wrapped(|ui| {
                    for (i, tex) in self.thumb_textures.iter().enumerate() {
                        let Some(img) = self.images.get(i) else { continue };
                        let (w, h) = (img.width() as f32, img.height() as f32);
                        let scale = (48.0 / w.max(h).max(1.0)).min(1.0);
                        ui.add(egui::Image::new((tex.id(), egui::vec2(w * scale, h * scale))))
                            .on_hover_text(format!(
                                "{} ({}x{})",
                                img.name,
                                img.width(),
                                img.height()
                            ));
                    }
                });
            }
        });

        ui.add_space(4.0);
        ui.label(
            RichText::new(format!(
                "{} tile(s), cell {}x{}",
                self.images.len(),
                self.cell_size.width,
                self.cell_size.height
            ))
            .small()
            .color(theme::colors::TEXT_MUTED),
        );

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let clear_btn = ui.add_enabled(
                !self.images.is_empty(),
                egui::Button::new(format!("{} Clear", icons::TRASH))
                    .min_size(egui::vec2(90.0, 28.0)),
            );
            if clear_btn.clicked() {
                self.clear_images();
            }

            let export_btn = ui.add_enabled(
                !self.images.is_empty(),
                egui::Button::new(format!("{} Export", icons::EXPORT))
                    .min_size(egui::vec2(90.0, 28.0)),
            );
            if export_btn.clicked() {
                self.export();
            }
        });
    }
}
