//! Brief feedback messages that fade away, e.g. after sharing an event.

use egui::{Color32, Context, Pos2, RichText};
use std::time::{Duration, Instant};

const TOAST_WIDTH: f32 = 280.0;
const TOAST_HEIGHT: f32 = 36.0;
const TOAST_MARGIN: f32 = 12.0;
const TOAST_SPACING: f32 = 5.0;
const FADE_OUT: Duration = Duration::from_millis(500);

/// A single toast notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
            duration: Duration::from_millis(2500),
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Opacity for the fade-out over the last half second
    pub fn opacity(&self) -> f32 {
        let elapsed = self.created_at.elapsed();
        if elapsed >= self.duration {
            return 0.0;
        }
        let remaining = self.duration - elapsed;
        if remaining >= FADE_OUT {
            1.0
        } else {
            (remaining.as_secs_f32() / FADE_OUT.as_secs_f32()).clamp(0.0, 1.0)
        }
    }
}

/// Stack of active toasts, bottom-right of the window
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.add(Toast::new(message));
    }

    pub fn cleanup(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    pub fn has_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }

    pub fn render(&mut self, ctx: &Context) {
        self.cleanup();
        if self.toasts.is_empty() {
            return;
        }

        ctx.request_repaint();

        let screen_rect = ctx.screen_rect();
        let dark = ctx.style().visuals.dark_mode;
        let (bg, fg) = if dark {
            (Color32::from_rgb(30, 50, 80), Color32::from_rgb(100, 180, 255))
        } else {
            (Color32::from_rgb(220, 235, 255), Color32::from_rgb(30, 80, 150))
        };

        for (i, toast) in self.toasts.iter().enumerate() {
            let opacity = toast.opacity();
            if opacity <= 0.0 {
                continue;
            }

            let y_offset = i as f32 * (TOAST_HEIGHT + TOAST_SPACING);
            let pos = Pos2::new(
                screen_rect.right() - TOAST_WIDTH - TOAST_MARGIN,
                screen_rect.bottom() - TOAST_HEIGHT - TOAST_MARGIN - y_offset,
            );

            egui::Area::new(egui::Id::new(("timeline_toast", i)))
                .fixed_pos(pos)
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    egui::Frame::none()
                        .fill(bg.gamma_multiply(0.9 * opacity))
                        .rounding(6.0)
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                        .stroke(egui::Stroke::new(1.0, fg.gamma_multiply(0.3 * opacity)))
                        .show(ui, |ui| {
                            ui.set_min_width(TOAST_WIDTH - 24.0);
                            ui.label(RichText::new(&toast.message).color(fg.gamma_multiply(opacity)));
                        });
                });
        }
    }
}
