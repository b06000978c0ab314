// Core app structure and main update loop

use super::config::{AppConfig, load_cfg, save_cfg};
use super::theme;
use super::toasts::Toasts;
use crate::atlas::operations::{compose, decode};
use crate::atlas::pipelines::export::{self, ExportReport};
use crate::atlas::pure::{descriptor, layout};
use crate::atlas::types::{CellSize, LayoutParams, SourceImage};
use crate::util;

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, mpsc};

use eframe::egui;
use image::RgbaImage;

/// Result of a background decode batch, delivered to the UI thread.
pub enum DecodeEvent {
    Failed { name: String, error: String },
    Batch(Vec<SourceImage>),
}

pub struct Tilesmith {
    pub options: AppConfig,

    /// Working set, in insertion order. Grid placement follows this order
    /// and nothing else.
    pub images: Vec<SourceImage>,
    /// Cumulative max image size this session; also user-editable.
    pub cell_size: CellSize,

    /// Composite kept alongside its GPU texture so export never has to
    /// re-render.
    pub composite: RgbaImage,
    pub preview_texture: Option<egui::TextureHandle>,
    pub thumb_textures: Vec<egui::TextureHandle>,
    pub preview_dirty: bool,

    pub toasts: Toasts,
    pub loading_msg: Option<String>,

    pub needs_update: Arc<AtomicBool>,

    pub decode_tx: Sender<DecodeEvent>,
    pub decode_rx: Receiver<DecodeEvent>,
    pub export_tx: Sender<ExportReport>,
    pub export_rx: Receiver<ExportReport>,
}

impl Tilesmith {
    pub fn new() -> Self {
        let options = load_cfg();
        let (decode_tx, decode_rx) = mpsc::channel();
        let (export_tx, export_rx) = mpsc::channel();

        let needs_update = Arc::new(AtomicBool::new(false));
        {
            let flag = needs_update.clone();
            std::thread::spawn(move || {
                if util::check_for_update() {
                    flag.store(true, Ordering::Relaxed);
                }
            });
        }

        Self {
            options,
            images: Vec::new(),
            cell_size: CellSize::default(),
            composite: RgbaImage::new(0, 0),
            preview_texture: None,
            thumb_textures: Vec::new(),
            preview_dirty: false,
            toasts: Toasts::default(),
            loading_msg: None,
            needs_update,
            decode_tx,
            decode_rx,
            export_tx,
            export_rx,
        }
    }

    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            spacing: self.options.spacing,
            columns: self.options.columns.max(1),
        }
    }

    /// Queue a drop payload for background decoding. Files decode
    /// concurrently; the batch lands as one event once every file has
    /// resolved, so render order never depends on decode timing.
    pub fn queue_dropped_paths(&mut self, dropped: Vec<PathBuf>) {
        let files = decode::collect_image_files(&dropped);
        if files.is_empty() {
            self.toasts.error("No image files in drop");
            return;
        }

        println!("[tilesmith] Decoding {} dropped file(s)", files.len());
        self.loading_msg = Some(format!("Loading {} image(s)", files.len()));

        let tx = self.decode_tx.clone();
        std::thread::spawn(move || {
            let (images, failures) = decode::decode_batch(files);
            for (path, error) in failures {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                let _ = tx.send(DecodeEvent::Failed { name, error });
            }
            let _ = tx.send(DecodeEvent::Batch(images));
        });
    }

    pub fn clear_images(&mut self) {
        self.images.clear();
        self.cell_size = CellSize::default();
        self.preview_dirty = true;
    }

    /// Export button handler. A cancelled directory dialog is a silent
    /// no-op; otherwise both artifact writes go off on their own threads
    /// and report back through toasts.
    pub fn export(&mut self) {
        if self.images.is_empty() {
            return;
        }

        let Some(dir) = util::pick_export_dir(self.options.last_export_dir.as_deref()) else {
            return;
        };

        let basename = self.options.basename.clone();
        let desc = descriptor::build_descriptor(
            &basename,
            self.images.len(),
            self.cell_size,
            self.layout_params(),
        );

        println!(
            "[tilesmith] Exporting {} tile(s) to {}",
            self.images.len(),
            dir.display()
        );
        export::export_atlas(
            dir.clone(),
            basename,
            self.composite.clone(),
            desc,
            self.export_tx.clone(),
        );

        self.options.last_export_dir = Some(dir);
        if let Err(e) = save_cfg(&self.options) {
            eprintln!("[tilesmith] Failed to save settings: {}", e);
        }
    }

    /// Drain background events. Runs at the top of every frame.
    pub fn poll_events(&mut self) {
        while let Ok(event) = self.decode_rx.try_recv() {
            match event {
                DecodeEvent::Failed { name, error } => {
                    eprintln!("[tilesmith] Failed to decode {}: {}", name, error);
                    self.toasts.error(format!("Failed to decode {}", name));
                }
                DecodeEvent::Batch(images) => {
                    self.loading_msg = None;
                    if !images.is_empty() {
                        // A new drop replaces the working set, but the cell
                        // keeps the cumulative session maximum.
                        self.cell_size = layout::grow_cell_size(
                            self.cell_size,
                            images.iter().map(|i| (i.width(), i.height())),
                        );
                        self.images = images;
                        self.preview_dirty = true;
                    }
                }
            }
        }

        while let Ok(report) = self.export_rx.try_recv() {
            match report.result {
                Ok(()) => {
                    self.toasts
                        .success(format!("File created: {}", report.file_name));
                }
                Err(error) => {
                    eprintln!("[tilesmith] Failed to write {}: {}", report.file_name, error);
                    self.toasts.error(format!("Error: {}", report.file_name));
                }
            }
        }
    }

    /// Re-render the composite and its textures after any layout-affecting
    /// change. Full rebuild every time, no incremental diffing.
    pub fn ensure_preview(&mut self, ctx: &egui::Context) {
        if !self.preview_dirty {
            return;
        }

        self.composite = compose::compose(&self.images, self.cell_size, self.layout_params());

        self.preview_texture = if self.composite.width() == 0 || self.composite.height() == 0 {
            None
        } else {
            let size = [
                self.composite.width() as usize,
                self.composite.height() as usize,
            ];
            let pixels = egui::ColorImage::from_rgba_unmultiplied(size, self.composite.as_raw());
            Some(ctx.load_texture("atlas_preview", pixels, egui::TextureOptions::NEAREST))
        };

        self.thumb_textures = self
            .images
            .iter()
            .enumerate()
            .map(|(i, img)| {
                let size = [img.width() as usize, img.height() as usize];
                let pixels = egui::ColorImage::from_rgba_unmultiplied(size, img.image.as_raw());
                ctx.load_texture(format!("thumb_{i}"), pixels, egui::TextureOptions::NEAREST)
            })
            .collect();

        self.preview_dirty = false;
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return;
        }
        let paths: Vec<PathBuf> = dropped.into_iter().filter_map(|f| f.path).collect();
        if !paths.is_empty() {
            self.queue_dropped_paths(paths);
        }
    }

    fn display_drop_hint(&self, ctx: &egui::Context) {
        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }

        let screen_rect = ctx.screen_rect();
        ctx.layer_painter(egui::LayerId::new(egui::Order::Foreground, "drop_hint".into()))
            .rect_filled(
                screen_rect,
                0.0,
                egui::Color32::from_rgba_premultiplied(0, 0, 0, 120),
            );
        egui::Area::new("drop_hint_text".into())
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .interactable(false)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new("Drop images to add them to the atlas")
                        .size(22.0)
                        .strong(),
                );
            });
    }
}

impl eframe::App for Tilesmith {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_events();
        self.handle_dropped_files(ctx);
        self.ensure_preview(ctx);

        egui::TopBottomPanel::top("top_bar")
            .frame(
                egui::Frame::NONE
                    .fill(theme::colors::BG_MID)
                    .inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                self.display_panel_top(ui);
            });

        egui::SidePanel::right("tools_panel")
            .resizable(true)
            .default_width(260.0)
            .width_range(220.0..=340.0)
            .frame(
                egui::Frame::NONE
                    .fill(theme::colors::BG_MID)
                    .inner_margin(egui::Margin::same(8))
                    .stroke(egui::Stroke::new(1.0, theme::colors::BG_LIGHT)),
            )
            .show_separator_line(false)
            .show(ctx, |ui| {
                self.display_panel_tools(ui);
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(theme::colors::BG_DARK)
                    .inner_margin(egui::Margin::same(8)),
            )
            .show(ctx, |ui| {
                self.display_panel_preview(ui);
            });

        self.display_drop_hint(ctx);

        if let Some(msg) = &self.loading_msg {
            egui::Area::new("loading".into())
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .interactable(false)
                .show(ctx, |ui| {
                    egui::Frame::NONE
                        .fill(egui::Color32::from_rgba_premultiplied(0, 0, 0, 192))
                        .corner_radius(6.0)
                        .inner_margin(egui::Margin::symmetric(16, 12))
                        .show(ui, |ui| {
                            ui.vertical_centered(|ui| {
                                ui.add(egui::widgets::Spinner::new().size(32.0));
                                ui.add_space(8.0);
                                ui.label(msg);
                            });
                        });
                });
        }

        self.toasts.show(ctx);

        if ctx.input(|input| input.focused) {
            ctx.request_repaint_after(std::time::Duration::from_millis(33)); // 30 fps
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = save_cfg(&self.options) {
            eprintln!("[tilesmith] Failed to save settings: {}", e);
        }
    }
}
