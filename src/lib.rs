// egui Timeline Library
// Exports all modules for testing and reuse

pub mod models;
pub mod services;
pub mod ui_egui;

/// Everything needed to put a timeline on screen
pub mod prelude {
    pub use crate::models::animation::TimelineAnimation;
    pub use crate::models::event::{EventDescription, EventIcon, TimelineEvent, TimelineEventId};
    pub use crate::models::style::TimelineStyle;
    pub use crate::services::config::TimelineConfig;
    pub use crate::ui_egui::{ClipboardShare, ShareSink, Timeline, TimelineResponse, TimelineState};
}
