//! The timeline widget.
//!
//! Events are laid out left to right along a horizontal line inside a
//! scroll area. Clicking an icon plays the configured tap animation and then
//! opens the detail popup; with no animation the popup opens right away.
//!
//! ```no_run
//! # use egui_timeline::prelude::*;
//! # fn ui(ui: &mut egui::Ui, events: &[TimelineEvent], state: &mut TimelineState) {
//! let style = TimelineStyle::default();
//! Timeline::new(events)
//!     .style(&style)
//!     .animation(Some(TimelineAnimation::Bounce))
//!     .visible_count(Some(4))
//!     .likes(true)
//!     .share(true)
//!     .show(ui, state);
//! # }
//! ```

use egui::scroll_area::ScrollBarVisibility;
use egui::{pos2, Color32, CursorIcon, FontId, Id, Rect, Sense, Stroke, Ui, Vec2};

use super::event_rendering::{hit_rect, paint_event_icon, paint_liked_badge};
use super::popup::{render_popup, PopupAction, PopupOptions};
use super::share::{share_event, ClipboardShare, ShareSink};
use super::state::TimelineState;
use crate::models::animation::TimelineAnimation;
use crate::models::event::{TimelineEvent, TimelineEventId};
use crate::models::style::TimelineStyle;
use crate::services::layout::{compute_spacing, RowMetrics};

const DATE_FONT_SIZE: f32 = 12.0;

/// What happened during one frame of the timeline
#[derive(Debug, Default, Clone)]
pub struct TimelineResponse {
    /// Event clicked this frame
    pub tapped: Option<TimelineEventId>,
    /// Events whose popup opened this frame after their tap animation
    pub popup_opened: Vec<TimelineEventId>,
    /// Like toggled in the popup, with the new liked state
    pub liked_changed: Option<(TimelineEventId, bool)>,
    /// Event shared from the popup, with the text handed to the share sink
    pub shared: Option<(TimelineEventId, String)>,
    /// Whether a popup is open at the end of the frame
    pub popup_open: bool,
    /// Click targets of every event, in screen space
    pub event_rects: Vec<(TimelineEventId, Rect)>,
}

/// Builder for a timeline; call [`Timeline::show`] every frame
pub struct Timeline<'a> {
    events: &'a [TimelineEvent],
    style: Option<&'a TimelineStyle>,
    animation: Option<TimelineAnimation>,
    visible_count: Option<usize>,
    likes: bool,
    share: bool,
    share_sink: Option<&'a mut dyn ShareSink>,
    id: Id,
}

impl<'a> Timeline<'a> {
    pub fn new(events: &'a [TimelineEvent]) -> Self {
        Self {
            events,
            style: None,
            animation: None,
            visible_count: None,
            likes: false,
            share: false,
            share_sink: None,
            id: Id::new("egui_timeline"),
        }
    }

    pub fn style(mut self, style: &'a TimelineStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Animation played on tap; `None` opens the popup immediately
    pub fn animation(mut self, animation: Option<TimelineAnimation>) -> Self {
        self.animation = animation;
        self
    }

    /// Fit this many events into the available width
    pub fn visible_count(mut self, visible_count: Option<usize>) -> Self {
        self.visible_count = visible_count;
        self
    }

    /// Offer a Like button in the popup
    pub fn likes(mut self, enabled: bool) -> Self {
        self.likes = enabled;
        self
    }

    /// Offer a Share button in the popup
    pub fn share(mut self, enabled: bool) -> Self {
        self.share = enabled;
        self
    }

    /// Where shared text goes; defaults to the clipboard
    pub fn share_sink(mut self, sink: &'a mut dyn ShareSink) -> Self {
        self.share_sink = Some(sink);
        self
    }

    /// Needed when several timelines are shown at once
    pub fn id_salt(mut self, salt: impl std::hash::Hash) -> Self {
        self.id = Id::new(salt);
        self
    }

    pub fn show(self, ui: &mut Ui, state: &mut TimelineState) -> TimelineResponse {
        let Timeline {
            events,
            style,
            animation,
            visible_count,
            likes,
            share,
            share_sink,
            id,
        } = self;

        let default_style;
        let style = match style {
            Some(style) => style,
            None => {
                default_style = TimelineStyle::default();
                &default_style
            }
        };

        let ctx = ui.ctx().clone();
        let now = ctx.input(|i| i.time);
        let mut response = TimelineResponse {
            popup_opened: state.advance(now, style),
            ..Default::default()
        };

        let viewport_width = ui.available_width();
        let spacing = compute_spacing(events, style, visible_count, viewport_width);

        let date_color = ui.visuals().text_color();
        let date_galleys: Vec<_> = events
            .iter()
            .map(|event| {
                ui.fonts(|fonts| {
                    fonts.layout_no_wrap(
                        event.date.clone(),
                        FontId::proportional(DATE_FONT_SIZE),
                        date_color,
                    )
                })
            })
            .collect();
        let date_height = date_galleys
            .iter()
            .map(|galley| galley.size().y)
            .fold(0.0, f32::max);
        let metrics = RowMetrics::compute(events, style, spacing, date_height);

        egui::ScrollArea::horizontal()
            .id_source(id.with("scroll"))
            .scroll_bar_visibility(ScrollBarVisibility::AlwaysHidden)
            .show(ui, |ui| {
                let size = metrics.size().max(Vec2::new(viewport_width, 0.0));
                let (row_rect, _) = ui.allocate_exact_size(size, Sense::hover());
                let origin = row_rect.min;
                let painter = ui.painter().clone();

                let line_y = metrics.line_y(origin);
                painter.line_segment(
                    [pos2(row_rect.left(), line_y), pos2(row_rect.right(), line_y)],
                    Stroke::new(style.line_thickness, style.line_color),
                );

                for (index, (event, galley)) in events.iter().zip(date_galleys).enumerate() {
                    let slot = metrics.slot_rect(origin, index);
                    let diameter = event.circle_diameter(style);
                    let center = pos2(slot.center().x, line_y + style.event_vertical_offset);

                    let hit = hit_rect(center, diameter);
                    let event_response = ui
                        .interact(hit, id.with(("event", event.id.0)), Sense::click())
                        .on_hover_cursor(CursorIcon::PointingHand)
                        .on_hover_text(&event.title);

                    if event_response.clicked() {
                        log::debug!("Timeline event tapped: {:?} ({})", event.id, event.title);
                        state.tap(event.id, animation, now);
                        response.tapped = Some(event.id);
                    }

                    let visual = state.visual(event.id, style, now);
                    let icon_rect = paint_event_icon(
                        &painter,
                        event,
                        center,
                        diameter,
                        visual,
                        event_response.hovered(),
                    );
                    if state.liked.is_liked(event.id) {
                        paint_liked_badge(&painter, icon_rect);
                    }

                    let date_pos = pos2(
                        slot.center().x - galley.size().x / 2.0,
                        metrics.date_top(origin),
                    );
                    painter.galley(date_pos, galley, Color32::PLACEHOLDER);

                    response.event_rects.push((event.id, hit));
                }
            });

        if state.is_animating() {
            ctx.request_repaint();
        }

        if let Some(selected) = state.selected {
            match events.iter().find(|event| event.id == selected) {
                Some(event) => {
                    let options = PopupOptions {
                        likes,
                        share,
                        liked: state.liked.is_liked(selected),
                        shared: state.last_shared == Some(selected),
                    };
                    match render_popup(&ctx, id.with("popup"), event, style, options) {
                        PopupAction::None => {}
                        PopupAction::Close => state.close_popup(),
                        PopupAction::ToggleLike => {
                            let liked = state.liked.toggle(selected);
                            log::info!(
                                "Event {:?} {}",
                                selected,
                                if liked { "liked" } else { "unliked" }
                            );
                            response.liked_changed = Some((selected, liked));
                        }
                        PopupAction::Share => {
                            let text = match share_sink {
                                Some(sink) => share_event(&ctx, event, sink),
                                None => share_event(&ctx, event, &mut ClipboardShare),
                            };
                            state.last_shared = Some(selected);
                            response.shared = Some((selected, text));
                        }
                    }
                }
                None => {
                    log::debug!("Selected event {:?} is no longer on the timeline", selected);
                    state.close_popup();
                }
            }
        }

        response.popup_open = state.is_popup_open();
        response
    }
}
