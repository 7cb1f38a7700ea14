//! Per-timeline interaction state owned by the host application.

use std::collections::HashMap;

use crate::models::animation::TimelineAnimation;
use crate::models::event::TimelineEventId;
use crate::models::style::TimelineStyle;
use crate::services::animation::{CircleVisual, TapAnimation};
use crate::services::likes::LikedEvents;

#[derive(Debug, Clone, Copy)]
struct RunningTap {
    animation: TapAnimation,
    popup_opened: bool,
}

/// State that survives between frames for one timeline
#[derive(Debug, Default)]
pub struct TimelineState {
    pub liked: LikedEvents,
    /// Event whose popup is open
    pub selected: Option<TimelineEventId>,
    /// Event most recently shared from the open popup
    pub last_shared: Option<TimelineEventId>,
    taps: HashMap<TimelineEventId, RunningTap>,
}

impl TimelineState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a tap on `id` at input time `now`.
    ///
    /// Without an animation the popup opens immediately; otherwise it opens
    /// once the animation's delay has elapsed (see [`Self::advance`]).
    pub fn tap(&mut self, id: TimelineEventId, animation: Option<TimelineAnimation>, now: f64) {
        match animation {
            None => self.open_popup(id),
            Some(kind) => {
                self.taps.insert(
                    id,
                    RunningTap {
                        animation: TapAnimation::new(kind, now),
                        popup_opened: false,
                    },
                );
            }
        }
    }

    /// Step running animations to `now`.
    ///
    /// Opens the popup for every animation whose delay has passed, once per
    /// tap, and drops finished animations. Returns the ids whose popup opened.
    pub fn advance(&mut self, now: f64, style: &TimelineStyle) -> Vec<TimelineEventId> {
        let mut due: Vec<(f64, TimelineEventId)> = Vec::new();
        for (id, tap) in self.taps.iter_mut() {
            if !tap.popup_opened && tap.animation.popup_due(now, style) {
                tap.popup_opened = true;
                due.push((tap.animation.started_at, *id));
            }
        }
        self.taps
            .retain(|_, tap| !(tap.popup_opened && tap.animation.is_finished(now, style)));

        // the latest tap wins the popup
        due.sort_by(|a, b| a.0.total_cmp(&b.0));
        let opened: Vec<TimelineEventId> = due.into_iter().map(|(_, id)| id).collect();
        if let Some(&last) = opened.last() {
            self.open_popup(last);
        }
        opened
    }

    /// Current visual for `id`, `REST` when it is not animating
    pub fn visual(&self, id: TimelineEventId, style: &TimelineStyle, now: f64) -> CircleVisual {
        self.taps
            .get(&id)
            .map(|tap| tap.animation.sample(now, style))
            .unwrap_or(CircleVisual::REST)
    }

    pub fn is_animating(&self) -> bool {
        !self.taps.is_empty()
    }

    pub fn open_popup(&mut self, id: TimelineEventId) {
        if self.selected != Some(id) {
            self.last_shared = None;
        }
        self.selected = Some(id);
    }

    pub fn close_popup(&mut self) {
        self.selected = None;
        self.last_shared = None;
    }

    pub fn is_popup_open(&self) -> bool {
        self.selected.is_some()
    }
}
