// Style module
// Layout, animation and popup appearance constants

use egui::{Color32, FontId};
use serde::{Deserialize, Serialize};

use crate::models::color::serde_hex;

/// Appearance of a timeline and its popup.
///
/// Every field has a default, so a partial `[style]` table in a config file
/// only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineStyle {
    #[serde(with = "serde_hex")]
    pub line_color: Color32,
    pub line_thickness: f32,

    /// Icon diameter for important events
    pub important_circle_size: f32,
    /// Icon diameter for regular events
    pub normal_circle_size: f32,
    /// Gap between icons when no visible count is requested
    pub spacing: f32,

    /// Distance between the icon band and the date label
    pub date_vertical_offset: f32,
    /// Shift of the icons relative to the line (negative is up)
    pub event_vertical_offset: f32,

    /// Spring response in seconds for bounce/jump
    pub animation_speed: f32,
    /// Spring damping fraction; below 1.0 overshoots
    pub animation_bouncing: f32,
    /// Time from tap to popup
    pub popup_delay: f32,
    /// Time to ease back to rest after the popup opens
    pub settle_duration: f32,
    pub bounce_scale: f32,
    pub jump_height: f32,
    pub fade_opacity: f32,

    pub popup_corner_radius: f32,
    /// Tint laid over the theme's window fill
    #[serde(with = "serde_hex")]
    pub popup_background: Color32,
    pub popup_padding: f32,
    pub popup_description_max_height: f32,
    pub popup_title_font: FontId,
    pub popup_description_font: FontId,
}

impl Default for TimelineStyle {
    fn default() -> Self {
        Self {
            line_color: Color32::from_rgb(0, 122, 255),
            line_thickness: 3.0,
            important_circle_size: 35.0,
            normal_circle_size: 20.0,
            spacing: 50.0,
            date_vertical_offset: 25.0,
            event_vertical_offset: -5.0,
            animation_speed: 0.35,
            animation_bouncing: 0.75,
            popup_delay: 0.2,
            settle_duration: 0.35,
            bounce_scale: 1.3,
            jump_height: 15.0,
            fade_opacity: 0.3,
            popup_corner_radius: 25.0,
            popup_background: Color32::from_gray(128).gamma_multiply(0.1),
            popup_padding: 20.0,
            popup_description_max_height: 220.0,
            popup_title_font: FontId::proportional(28.0),
            popup_description_font: FontId::proportional(14.0),
        }
    }
}

impl TimelineStyle {
    /// Widest icon this style can produce
    pub fn max_circle_size(&self) -> f32 {
        self.important_circle_size.max(self.normal_circle_size)
    }

    /// Total length of a tap animation in seconds
    pub fn tap_animation_duration(&self) -> f32 {
        self.popup_delay + self.settle_duration
    }
}
