// Transient notification overlay, bottom-right corner

use super::theme::colors;

use std::time::{Duration, Instant};

use eframe::egui;

const TOAST_TTL: Duration = Duration::from_secs(4);
const MAX_TOASTS: usize = 3;

pub enum ToastKind {
    Success,
    Error,
}

struct Toast {
    message: String,
    kind: ToastKind,
    born: Instant,
}

#[derive(Default)]
pub struct Toasts {
    queue: Vec<Toast>,
}

impl Toasts {
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(message.into(), ToastKind::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(message.into(), ToastKind::Error);
    }

    fn push(&mut self, message: String, kind: ToastKind) {
        if self.queue.len() >= MAX_TOASTS {
            self.queue.remove(0);
        }
        self.queue.push(Toast {
            message,
            kind,
            born: Instant::now(),
        });
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        self.queue.retain(|t| t.born.elapsed() < TOAST_TTL);
        if self.queue.is_empty() {
            return;
        }

        egui::Area::new("toasts".into())
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .interactable(false)
            .show(ctx, |ui| {
                for toast in &self.queue {
                    let stroke_color = match toast.kind {
                        ToastKind::Success => colors::SUCCESS,
                        ToastKind::Error => colors::ERROR,
                    };
                    egui::Frame::NONE
                        .fill(colors::BG_LIGHT)
                        .stroke(egui::Stroke::new(1.0, stroke_color))
                        .corner_radius(6.0)
                        .inner_margin(egui::Margin::symmetric(12, 8))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(&toast.message).color(colors::TEXT_PRIMARY),
                            );
                        });
                    ui.add_space(6.0);
                }
            });

        // Keep repainting while toasts are up so they expire on time
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
