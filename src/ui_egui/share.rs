//! Destination for an event's share text.

use egui::Context;

use crate::models::event::TimelineEvent;

/// Receives the text composed when the user presses "Share"
#[cfg_attr(test, mockall::automock)]
pub trait ShareSink {
    fn share(&mut self, ctx: &Context, text: &str);
}

/// Copies the share text to the system clipboard
#[derive(Debug, Default, Clone, Copy)]
pub struct ClipboardShare;

impl ShareSink for ClipboardShare {
    fn share(&mut self, ctx: &Context, text: &str) {
        ctx.output_mut(|o| o.copied_text = text.to_owned());
    }
}

/// Compose the share text for `event` and hand it to `sink`
pub fn share_event(ctx: &Context, event: &TimelineEvent, sink: &mut dyn ShareSink) -> String {
    let text = event.share_text();
    log::info!("Sharing event {:?}: {}", event.id, text);
    sink.share(ctx, &text);
    text
}
