// Test fixtures - reusable test data
// Provides consistent timelines across all test files

#![allow(dead_code)]

use egui_timeline::prelude::*;

/// Sample events for testing
pub mod events {
    use super::*;

    /// Three regular events
    pub fn regular_row() -> Vec<TimelineEvent> {
        vec![
            TimelineEvent::new("Kick-off", "15 Jan 2024"),
            TimelineEvent::new("Prototype", "4 Mar 2024"),
            TimelineEvent::new("Beta", "10 Jun 2024"),
        ]
    }

    /// A mix of regular and important events
    pub fn mixed_row() -> Vec<TimelineEvent> {
        vec![
            TimelineEvent::new("Kick-off", "15 Jan 2024"),
            TimelineEvent::new("Launch", "2 Sep 2024")
                .with_important(true)
                .with_glyph("★")
                .with_description("Version 1.0"),
            TimelineEvent::new("Anniversary", "15 Jan 2025").with_description_ui(|ui| {
                ui.label("One year in");
            }),
        ]
    }

    /// Events with the given importance flags
    pub fn with_importance(flags: &[bool]) -> Vec<TimelineEvent> {
        flags
            .iter()
            .enumerate()
            .map(|(i, &important)| {
                TimelineEvent::new(format!("Event {}", i), format!("Day {}", i))
                    .with_important(important)
            })
            .collect()
    }
}

/// Headless egui frames
pub mod frames {
    use super::*;

    /// Raw input for a window of the given size at input time `time`
    pub fn input(width: f32, height: f32, time: f64) -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(width, height),
            )),
            time: Some(time),
            ..Default::default()
        }
    }

    /// Run one frame with the timeline inside a central panel
    pub fn run_timeline<'a>(
        ctx: &egui::Context,
        time: f64,
        events: &'a [TimelineEvent],
        state: &mut TimelineState,
        configure: impl FnOnce(Timeline<'a>) -> Timeline<'a>,
    ) -> (TimelineResponse, egui::FullOutput) {
        run_timeline_with_input(ctx, time, Vec::new(), events, state, configure)
    }

    /// Like [`run_timeline`], feeding `input_events` into the frame
    pub fn run_timeline_with_input<'a>(
        ctx: &egui::Context,
        time: f64,
        input_events: Vec<egui::Event>,
        events: &'a [TimelineEvent],
        state: &mut TimelineState,
        configure: impl FnOnce(Timeline<'a>) -> Timeline<'a>,
    ) -> (TimelineResponse, egui::FullOutput) {
        let mut raw = input(800.0, 600.0, time);
        raw.events = input_events;

        let mut response = None;
        let output = ctx.run(raw, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let timeline = configure(Timeline::new(events));
                response = Some(timeline.show(ui, state));
            });
        });
        (response.unwrap_or_default(), output)
    }

    /// Move the pointer to `pos` and press the primary button
    pub fn press(pos: egui::Pos2) -> Vec<egui::Event> {
        vec![
            egui::Event::PointerMoved(pos),
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed: true,
                modifiers: egui::Modifiers::NONE,
            },
        ]
    }

    /// Release the primary button at `pos`
    pub fn release(pos: egui::Pos2) -> Vec<egui::Event> {
        vec![egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: false,
            modifiers: egui::Modifiers::NONE,
        }]
    }

    pub fn key_press(key: egui::Key) -> Vec<egui::Event> {
        vec![egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }]
    }

    /// Screen rect of the first painted text exactly equal to `text`
    pub fn find_text(output: &egui::FullOutput, text: &str) -> Option<egui::Rect> {
        output
            .shapes
            .iter()
            .find_map(|clipped| find_text_in_shape(&clipped.shape, text))
    }

    fn find_text_in_shape(shape: &egui::Shape, text: &str) -> Option<egui::Rect> {
        match shape {
            egui::Shape::Text(text_shape) if text_shape.galley.text() == text => Some(
                egui::Rect::from_min_size(text_shape.pos, text_shape.galley.size()),
            ),
            egui::Shape::Vec(shapes) => shapes
                .iter()
                .find_map(|shape| find_text_in_shape(shape, text)),
            _ => None,
        }
    }
}
