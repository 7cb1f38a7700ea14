// Event module
// A single entry on the timeline

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use egui::{Color32, Painter, Rect, Ui};

use crate::models::style::TimelineStyle;

static NEXT_EVENT_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for timeline events. Allocated from a monotonic counter
/// when the event is built; clones keep the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimelineEventId(pub u64);

impl TimelineEventId {
    fn next() -> Self {
        Self(NEXT_EVENT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Popup body for an event, built lazily every time the popup renders
#[derive(Clone)]
pub enum EventDescription {
    Text(String),
    Custom(Arc<dyn Fn(&mut Ui) + Send + Sync>),
}

impl EventDescription {
    pub fn show(&self, ui: &mut Ui, font: egui::FontId) {
        match self {
            EventDescription::Text(text) => {
                ui.label(egui::RichText::new(text).font(font));
            }
            EventDescription::Custom(build) => build(ui),
        }
    }
}

impl fmt::Debug for EventDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventDescription::Text(text) => f.debug_tuple("Text").field(text).finish(),
            EventDescription::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl Default for EventDescription {
    fn default() -> Self {
        EventDescription::Text(String::new())
    }
}

/// How an event is drawn on the line
#[derive(Clone, Default)]
pub enum EventIcon {
    /// Filled circle sized by importance
    #[default]
    Circle,
    /// Text or emoji glyph tinted with the event color
    Glyph(String),
    /// Caller-painted icon; receives the icon rect and the event color
    Custom(Arc<dyn Fn(&Painter, Rect, Color32) + Send + Sync>),
}

impl fmt::Debug for EventIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventIcon::Circle => f.write_str("Circle"),
            EventIcon::Glyph(glyph) => f.debug_tuple("Glyph").field(glyph).finish(),
            EventIcon::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A timeline entry
///
/// # Examples
/// ```
/// use egui_timeline::models::event::TimelineEvent;
///
/// let event = TimelineEvent::new("Launch", "12 Mar 2025")
///     .with_important(true)
///     .with_description("First public release");
/// assert_eq!(event.share_text(), "Launch - 12 Mar 2025");
/// ```
#[derive(Debug, Clone)]
pub struct TimelineEvent {
    pub id: TimelineEventId,
    pub title: String,
    pub date: String,
    pub color: Color32,
    pub title_color: Option<Color32>,
    pub is_important: bool,
    pub description: EventDescription,
    pub icon: EventIcon,
}

impl TimelineEvent {
    /// Create an event with the default blue color and an empty description
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: TimelineEventId::next(),
            title: title.into(),
            date: date.into(),
            color: Color32::from_rgb(0, 122, 255),
            title_color: None,
            is_important: false,
            description: EventDescription::default(),
            icon: EventIcon::Circle,
        }
    }

    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }

    pub fn with_title_color(mut self, color: Color32) -> Self {
        self.title_color = Some(color);
        self
    }

    pub fn with_important(mut self, is_important: bool) -> Self {
        self.is_important = is_important;
        self
    }

    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = EventDescription::Text(text.into());
        self
    }

    /// Use a custom popup body instead of plain text
    pub fn with_description_ui(mut self, build: impl Fn(&mut Ui) + Send + Sync + 'static) -> Self {
        self.description = EventDescription::Custom(Arc::new(build));
        self
    }

    pub fn with_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.icon = EventIcon::Glyph(glyph.into());
        self
    }

    pub fn with_icon(
        mut self,
        paint: impl Fn(&Painter, Rect, Color32) + Send + Sync + 'static,
    ) -> Self {
        self.icon = EventIcon::Custom(Arc::new(paint));
        self
    }

    /// Text handed to the share sink: `"<title> - <date>"`
    pub fn share_text(&self) -> String {
        format!("{} - {}", self.title, self.date)
    }

    /// Title color, falling back to the event color
    pub fn effective_title_color(&self) -> Color32 {
        self.title_color.unwrap_or(self.color)
    }

    /// Diameter of the icon on the line
    pub fn circle_diameter(&self, style: &TimelineStyle) -> f32 {
        if self.is_important {
            style.important_circle_size
        } else {
            style.normal_circle_size
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_text_format() {
        let event = TimelineEvent::new("Moon landing", "20 Jul 1969");
        assert_eq!(event.share_text(), "Moon landing - 20 Jul 1969");
    }

    #[test]
    fn test_share_text_keeps_separators_verbatim() {
        let event = TimelineEvent::new("A - B", "");
        assert_eq!(event.share_text(), "A - B - ");
    }

    #[test]
    fn test_ids_are_unique() {
        let a = TimelineEvent::new("A", "1");
        let b = TimelineEvent::new("B", "2");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_clone_keeps_id() {
        let a = TimelineEvent::new("A", "1");
        let b = a.clone();
        assert_eq!(a.id, b.id);
    }

    #[test]
    fn test_title_color_fallback() {
        let red = Color32::from_rgb(255, 0, 0);
        let green = Color32::from_rgb(0, 255, 0);

        let event = TimelineEvent::new("A", "1").with_color(red);
        assert_eq!(event.effective_title_color(), red);

        let event = event.with_title_color(green);
        assert_eq!(event.effective_title_color(), green);
    }

    #[test]
    fn test_circle_diameter_by_importance() {
        let style = TimelineStyle::default();
        let normal = TimelineEvent::new("A", "1");
        let important = TimelineEvent::new("B", "2").with_important(true);

        assert_eq!(normal.circle_diameter(&style), 20.0);
        assert_eq!(important.circle_diameter(&style), 35.0);
    }

    #[test]
    fn test_debug_hides_closures() {
        let event = TimelineEvent::new("A", "1")
            .with_description_ui(|ui| {
                ui.label("custom");
            })
            .with_icon(|_, _, _| {});
        let debug = format!("{:?}", event);
        assert!(debug.contains("Custom(..)"));
    }
}
