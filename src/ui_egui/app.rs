//! Demo window showing a configurable timeline.

use std::path::PathBuf;

use egui::{Context, RichText};

use super::state::TimelineState;
use super::timeline::Timeline;
use super::toast::ToastManager;
use crate::models::animation::TimelineAnimation;
use crate::models::event::TimelineEvent;
use crate::services::config::TimelineConfig;

pub struct TimelineDemoApp {
    config: TimelineConfig,
    config_path: Option<PathBuf>,
    events: Vec<TimelineEvent>,
    state: TimelineState,
    toasts: ToastManager,
    /// Slider value; 0 means fixed spacing
    visible_count: usize,
}

impl TimelineDemoApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: TimelineConfig,
        config_path: Option<PathBuf>,
    ) -> Self {
        apply_system_theme(&cc.egui_ctx);
        Self::from_config(config, config_path)
    }

    pub fn from_config(config: TimelineConfig, config_path: Option<PathBuf>) -> Self {
        let (config, events) = match config.build_events() {
            Ok(events) => (config, events),
            Err(err) => {
                log::error!("Invalid timeline config: {err}; using sample timeline");
                let sample = TimelineConfig::sample();
                let events = sample.build_events().unwrap_or_default();
                (sample, events)
            }
        };

        let visible_count = config.visible_count.unwrap_or(0);
        Self {
            config,
            config_path,
            events,
            state: TimelineState::new(),
            toasts: ToastManager::new(),
            visible_count,
        }
    }

    pub fn events(&self) -> &[TimelineEvent] {
        &self.events
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            let selected = self
                .config
                .animation
                .map(|kind| kind.as_str())
                .unwrap_or("none");
            egui::ComboBox::from_label("Animation")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.config.animation, None, "none");
                    for kind in TimelineAnimation::ALL {
                        ui.selectable_value(&mut self.config.animation, Some(kind), kind.as_str());
                    }
                });

            ui.separator();

            let max_visible = self.events.len().max(1);
            ui.add(egui::Slider::new(&mut self.visible_count, 0..=max_visible).text("Visible"));
            self.config.visible_count = (self.visible_count > 0).then_some(self.visible_count);

            ui.separator();

            ui.checkbox(&mut self.config.likes, "Likes");
            ui.checkbox(&mut self.config.share, "Share");

            ui.separator();

            ui.label(format!("♥ {}", self.state.liked.len()));

            if let Some(path) = self.config_path.clone() {
                ui.separator();
                if ui.button("💾 Save config").clicked() {
                    match self.config.save(&path) {
                        Ok(()) => self.toasts.info(format!("Saved {}", path.display())),
                        Err(err) => {
                            log::error!("Failed to save config: {err}");
                            self.toasts.info(format!("Save failed: {err}"));
                        }
                    }
                }
            }
        });
    }
}

impl eframe::App for TimelineDemoApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("timeline_controls").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_controls(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(RichText::new("Timeline").strong());
            ui.add_space(20.0);

            if self.events.is_empty() {
                ui.label(RichText::new("No events configured").weak());
            }

            let response = Timeline::new(&self.events)
                .style(&self.config.style)
                .animation(self.config.animation)
                .visible_count(self.config.visible_count)
                .likes(self.config.likes)
                .share(self.config.share)
                .show(ui, &mut self.state);

            if let Some((_, text)) = response.shared {
                self.toasts.info(format!("Copied \"{}\"", text));
            }
        });

        self.toasts.render(ctx);
    }
}

/// Follow the OS light/dark preference
fn apply_system_theme(ctx: &Context) {
    match dark_light::detect() {
        dark_light::Mode::Dark => ctx.set_visuals(egui::Visuals::dark()),
        dark_light::Mode::Light => ctx.set_visuals(egui::Visuals::light()),
        dark_light::Mode::Default => {}
    }
}
