//! Painting helpers for event icons on the line.

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};

use crate::models::event::{EventIcon, TimelineEvent};
use crate::services::animation::CircleVisual;

const LIKED_BADGE_COLOR: Color32 = Color32::from_rgb(255, 59, 48);
const LIKED_BADGE_SIZE: f32 = 10.0;
/// Smallest clickable area around an icon
pub const MIN_HIT_SIZE: f32 = 24.0;

/// Paint `event`'s icon centered at `center` with the animation applied.
/// Returns the rect the icon occupies.
pub fn paint_event_icon(
    painter: &Painter,
    event: &TimelineEvent,
    center: Pos2,
    diameter: f32,
    visual: CircleVisual,
    hovered: bool,
) -> Rect {
    let center = center + Vec2::new(0.0, visual.offset_y);
    let diameter = (diameter * visual.scale).max(0.0);
    let color = event.color.gamma_multiply(visual.opacity.clamp(0.0, 1.0));
    let rect = Rect::from_center_size(center, Vec2::splat(diameter));

    match &event.icon {
        EventIcon::Circle => {
            painter.circle_filled(center, diameter / 2.0, color);
        }
        EventIcon::Glyph(glyph) => {
            painter.text(
                center,
                Align2::CENTER_CENTER,
                glyph,
                FontId::proportional(diameter),
                color,
            );
        }
        EventIcon::Custom(paint) => paint(painter, rect, color),
    }

    if hovered {
        painter.circle_stroke(
            center,
            diameter / 2.0 + 3.0,
            Stroke::new(1.5, color.gamma_multiply(0.5)),
        );
    }

    rect
}

/// Small red heart at the icon's top-right corner
pub fn paint_liked_badge(painter: &Painter, icon_rect: Rect) {
    painter.text(
        icon_rect.right_top() + Vec2::new(2.0, -2.0),
        Align2::CENTER_CENTER,
        "♥",
        FontId::proportional(LIKED_BADGE_SIZE),
        LIKED_BADGE_COLOR,
    );
}

/// Click target for an icon, never smaller than [`MIN_HIT_SIZE`]
pub fn hit_rect(center: Pos2, diameter: f32) -> Rect {
    Rect::from_center_size(center, Vec2::splat(diameter.max(MIN_HIT_SIZE)))
}
