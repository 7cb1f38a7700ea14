//! Horizontal layout of event icons along the timeline.
//!
//! The spacing rule distributes a fixed number of icons across the viewport.
//! Everything else (slot positions, line height, date placement) is derived
//! from it in [`RowMetrics`].

use egui::{Pos2, Rect, Vec2};

use crate::models::event::TimelineEvent;
use crate::models::style::TimelineStyle;

/// Horizontal padding on both ends of the row
pub const ROW_PADDING_H: f32 = 16.0;
/// Vertical padding above the icons and below the dates
pub const ROW_PADDING_V: f32 = 20.0;

/// Widest icon among `events`, never narrower than a regular circle
pub fn widest_circle(events: &[TimelineEvent], style: &TimelineStyle) -> f32 {
    events
        .iter()
        .map(|event| event.circle_diameter(style))
        .fold(style.normal_circle_size, f32::max)
}

/// Gap between neighbouring icons.
///
/// Without a visible count (or with nothing to show) the style's fixed
/// spacing is used. Otherwise the first `visible_count` events share the
/// viewport: each gets one widest-circle slot and an equal share of what is
/// left over.
pub fn compute_spacing(
    events: &[TimelineEvent],
    style: &TimelineStyle,
    visible_count: Option<usize>,
    viewport_width: f32,
) -> f32 {
    let Some(visible_count) = visible_count else {
        return style.spacing;
    };
    if events.is_empty() || visible_count == 0 {
        return style.spacing;
    }

    let limited = &events[..visible_count.min(events.len())];
    let widest = widest_circle(limited, style);
    let count = limited.len() as f32;

    let total_circle_width = count * widest;
    let left_space = (viewport_width - total_circle_width).max(0.0);
    left_space / count
}

/// Resolved geometry of one timeline row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowMetrics {
    pub count: usize,
    pub slot_width: f32,
    pub spacing: f32,
    pub icon_band: f32,
    pub date_offset: f32,
    pub date_height: f32,
}

impl RowMetrics {
    pub fn compute(
        events: &[TimelineEvent],
        style: &TimelineStyle,
        spacing: f32,
        date_height: f32,
    ) -> Self {
        Self {
            count: events.len(),
            slot_width: widest_circle(events, style),
            spacing,
            icon_band: style.max_circle_size(),
            date_offset: style.date_vertical_offset,
            date_height,
        }
    }

    pub fn content_width(&self) -> f32 {
        let gaps = self.count.saturating_sub(1) as f32;
        2.0 * ROW_PADDING_H + self.count as f32 * self.slot_width + gaps * self.spacing
    }

    pub fn height(&self) -> f32 {
        2.0 * ROW_PADDING_V + self.icon_band + self.date_offset + self.date_height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.content_width(), self.height())
    }

    /// Column occupied by the event at `index`, spanning the full row height
    pub fn slot_rect(&self, origin: Pos2, index: usize) -> Rect {
        let x = origin.x + ROW_PADDING_H + index as f32 * (self.slot_width + self.spacing);
        Rect::from_min_size(Pos2::new(x, origin.y), Vec2::new(self.slot_width, self.height()))
    }

    /// Vertical position of the line, through the middle of the icon band
    pub fn line_y(&self, origin: Pos2) -> f32 {
        origin.y + ROW_PADDING_V + self.icon_band / 2.0
    }

    /// Top edge of the date labels
    pub fn date_top(&self, origin: Pos2) -> f32 {
        origin.y + ROW_PADDING_V + self.icon_band + self.date_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn events(important: &[bool]) -> Vec<TimelineEvent> {
        important
            .iter()
            .enumerate()
            .map(|(i, &imp)| TimelineEvent::new(format!("Event {}", i), "2025").with_important(imp))
            .collect()
    }

    #[test]
    fn test_no_visible_count_uses_style_spacing() {
        let style = TimelineStyle::default();
        assert_eq!(compute_spacing(&events(&[false, true]), &style, None, 400.0), 50.0);
    }

    #[test]
    fn test_empty_events_use_style_spacing() {
        let style = TimelineStyle::default();
        assert_eq!(compute_spacing(&[], &style, Some(3), 400.0), 50.0);
    }

    #[test]
    fn test_zero_visible_count_uses_style_spacing() {
        let style = TimelineStyle::default();
        assert_eq!(compute_spacing(&events(&[false]), &style, Some(0), 400.0), 50.0);
    }

    #[test_case(&[false, false, false, false], 4, 400.0, 80.0 ; "four regular")]
    #[test_case(&[false, true, false, false], 4, 400.0, 65.0 ; "important widens every slot")]
    #[test_case(&[false, false, true], 2, 400.0, 180.0 ; "important outside the limit is ignored")]
    #[test_case(&[false, false], 5, 400.0, 180.0 ; "limit above event count")]
    #[test_case(&[true, true, true], 3, 90.0, 0.0 ; "viewport narrower than circles")]
    fn test_spacing(important: &[bool], visible: usize, viewport: f32, expected: f32) {
        let style = TimelineStyle::default();
        let spacing = compute_spacing(&events(important), &style, Some(visible), viewport);
        assert!((spacing - expected).abs() < 1e-4, "got {}", spacing);
    }

    #[test]
    fn test_row_metrics_geometry() {
        let style = TimelineStyle::default();
        let events = events(&[false, false, false]);
        let metrics = RowMetrics::compute(&events, &style, 10.0, 14.0);

        assert_eq!(metrics.slot_width, 20.0);
        assert_eq!(metrics.content_width(), 2.0 * ROW_PADDING_H + 3.0 * 20.0 + 2.0 * 10.0);
        assert_eq!(metrics.height(), 2.0 * ROW_PADDING_V + 35.0 + 25.0 + 14.0);

        let origin = Pos2::new(100.0, 50.0);
        let second = metrics.slot_rect(origin, 1);
        assert_eq!(second.left(), 100.0 + ROW_PADDING_H + 30.0);
        assert_eq!(second.width(), 20.0);
        assert_eq!(metrics.line_y(origin), 50.0 + ROW_PADDING_V + 17.5);
    }

    #[test]
    fn test_row_metrics_empty() {
        let style = TimelineStyle::default();
        let metrics = RowMetrics::compute(&[], &style, 50.0, 14.0);
        assert_eq!(metrics.content_width(), 2.0 * ROW_PADDING_H);
    }
}
