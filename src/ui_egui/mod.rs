mod app;
mod event_rendering;
pub mod popup;
pub mod share;
pub mod state;
pub mod timeline;
pub mod toast;

pub use app::TimelineDemoApp;
pub use share::{ClipboardShare, ShareSink};
pub use state::TimelineState;
pub use timeline::{Timeline, TimelineResponse};
