//! Detail popup shown when an event is selected.

use egui::{Align, Color32, Context, Id, Layout, RichText};

use crate::models::event::TimelineEvent;
use crate::models::style::TimelineStyle;

const ACTION_BUTTON_HEIGHT: f32 = 36.0;
const ACTION_ROUNDING: f32 = 12.0;
const LIKED_RED: Color32 = Color32::from_rgb(255, 59, 48);
const SHARE_BLUE: Color32 = Color32::from_rgb(0, 122, 255);

/// What the user did in the popup this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupAction {
    None,
    Close,
    ToggleLike,
    Share,
}

/// Which actions the popup offers and their current state
#[derive(Debug, Clone, Copy, Default)]
pub struct PopupOptions {
    pub likes: bool,
    pub share: bool,
    pub liked: bool,
    pub shared: bool,
}

/// Render the popup for `event` and return the action taken
pub fn render_popup(
    ctx: &Context,
    id: Id,
    event: &TimelineEvent,
    style: &TimelineStyle,
    options: PopupOptions,
) -> PopupAction {
    let mut action = PopupAction::None;
    let (window_frame, tint_frame) = popup_frames(&ctx.style(), style);

    egui::Window::new(event.title.as_str())
        .id(id)
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(window_frame)
        .show(ctx, |ui| {
            tint_frame.show(ui, |ui| {
                ui.set_min_width(320.0);
                ui.set_max_width(420.0);

                ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                    let close = egui::Button::new(
                        RichText::new("✕")
                            .strong()
                            .color(ui.visuals().weak_text_color()),
                    )
                    .fill(Color32::from_gray(128).gamma_multiply(0.2))
                    .rounding(ACTION_ROUNDING);

                    if ui.add(close).on_hover_text("Close popup").clicked() {
                        action = PopupAction::Close;
                    }
                });

                ui.add_space(10.0);

                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(&event.title)
                            .font(style.popup_title_font.clone())
                            .strong()
                            .color(event.effective_title_color()),
                    );
                    ui.label(RichText::new(&event.date).weak());
                });

                ui.add_space(10.0);

                egui::ScrollArea::vertical()
                    .max_height(style.popup_description_max_height)
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        ui.add_space(4.0);
                        event
                            .description
                            .show(ui, style.popup_description_font.clone());
                    });

                if options.likes {
                    ui.add_space(20.0);
                    if like_button(ui, event, options.liked) {
                        action = PopupAction::ToggleLike;
                    }
                }

                if options.share {
                    ui.add_space(if options.likes { 10.0 } else { 20.0 });
                    if share_button(ui) {
                        action = PopupAction::Share;
                    }
                    if options.shared {
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new("Shared").small().weak());
                        });
                    }
                }
            });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        action = PopupAction::Close;
    }

    action
}

/// Opaque theme-colored window with the style's tint painted inside it
fn popup_frames(egui_style: &egui::Style, style: &TimelineStyle) -> (egui::Frame, egui::Frame) {
    let window = egui::Frame::window(egui_style)
        .fill(egui_style.visuals.window_fill)
        .rounding(style.popup_corner_radius)
        .inner_margin(0.0);
    let tint = egui::Frame::none()
        .fill(style.popup_background)
        .rounding(style.popup_corner_radius)
        .inner_margin(style.popup_padding);
    (window, tint)
}

fn like_button(ui: &mut egui::Ui, event: &TimelineEvent, liked: bool) -> bool {
    let (label, text_color, fill, hint) = if liked {
        (
            "♥ Liked",
            LIKED_RED,
            event.color.gamma_multiply(0.2),
            "Liked",
        )
    } else {
        (
            "♡ Like",
            ui.visuals().text_color(),
            Color32::from_gray(128).gamma_multiply(0.2),
            "Tap here to like this event",
        )
    };

    let button = egui::Button::new(RichText::new(label).color(text_color))
        .fill(fill)
        .rounding(ACTION_ROUNDING);

    ui.add_sized([ui.available_width(), ACTION_BUTTON_HEIGHT], button)
        .on_hover_text(hint)
        .clicked()
}

fn share_button(ui: &mut egui::Ui) -> bool {
    let button = egui::Button::new(RichText::new("📤 Share").color(SHARE_BLUE))
        .fill(SHARE_BLUE.gamma_multiply(0.1))
        .rounding(ACTION_ROUNDING);

    ui.add_sized([ui.available_width(), ACTION_BUTTON_HEIGHT], button)
        .on_hover_text("Tap here to share the event")
        .clicked()
}
