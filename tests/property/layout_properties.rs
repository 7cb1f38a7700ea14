// Property-based tests for spacing, likes and share text
#[path = "../fixtures/mod.rs"]
mod fixtures;

use egui_timeline::prelude::*;
use egui_timeline::services::layout::{compute_spacing, widest_circle};
use egui_timeline::services::likes::LikedEvents;
use fixtures::events;
use proptest::prelude::*;

proptest! {
    /// Property: visible circles plus their gaps fill the viewport exactly
    #[test]
    fn prop_spacing_fills_viewport(
        flags in prop::collection::vec(any::<bool>(), 1..12),
        visible in 1usize..12,
        extra in 0.0f32..2000.0,
    ) {
        let style = TimelineStyle::default();
        let events = events::with_importance(&flags);
        let shown = visible.min(events.len());
        let widest = widest_circle(&events[..shown], &style);
        let viewport = shown as f32 * widest + extra;

        let spacing = compute_spacing(&events, &style, Some(visible), viewport);
        let filled = spacing * shown as f32 + shown as f32 * widest;

        prop_assert!((filled - viewport).abs() < 0.01 * viewport.max(1.0));
    }

    /// Property: spacing is never negative, however narrow the viewport
    #[test]
    fn prop_spacing_non_negative(
        flags in prop::collection::vec(any::<bool>(), 0..12),
        visible in prop::option::of(0usize..12),
        viewport in 0.0f32..500.0,
    ) {
        let style = TimelineStyle::default();
        let events = events::with_importance(&flags);
        prop_assert!(compute_spacing(&events, &style, visible, viewport) >= 0.0);
    }

    /// Property: liking then unliking any event restores the liked set
    #[test]
    fn prop_double_toggle_is_identity(
        initial in prop::collection::hash_set(0u64..50, 0..20),
        target in 0u64..50,
    ) {
        let mut liked = LikedEvents::new();
        for id in &initial {
            liked.toggle(TimelineEventId(*id));
        }
        let before = liked.clone();

        liked.toggle(TimelineEventId(target));
        liked.toggle(TimelineEventId(target));

        prop_assert_eq!(liked, before);
    }

    /// Property: share text is always "<title> - <date>"
    #[test]
    fn prop_share_text_format(title in ".*", date in ".*") {
        let event = TimelineEvent::new(title.clone(), date.clone());
        prop_assert_eq!(event.share_text(), format!("{} - {}", title, date));
    }
}
