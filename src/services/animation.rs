//! Tap animation timing.
//!
//! A tap runs in two phases. During the first `popup_delay` seconds the icon
//! moves toward its target (scale, lift or dim). Then the popup opens and the
//! icon eases back to rest over `settle_duration`. Time is the egui input
//! clock in seconds, so the whole sequence is advanced once per frame.

use std::f32::consts::TAU;

use crate::models::animation::TimelineAnimation;
use crate::models::style::TimelineStyle;

/// Step response of a damped spring, 0 at `t = 0` and settling at 1.
///
/// `response` is the period of the undamped oscillation in seconds and
/// `damping` the damping fraction; values below 1 overshoot.
pub fn spring_progress(t: f32, response: f32, damping: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if response <= 0.0 {
        return 1.0;
    }

    let omega = TAU / response;
    let zeta = damping.max(0.0);

    if zeta >= 1.0 {
        // critically damped
        return 1.0 - (-omega * t).exp() * (1.0 + omega * t);
    }

    let omega_d = omega * (1.0 - zeta * zeta).sqrt();
    let envelope = (-zeta * omega * t).exp();
    1.0 - envelope * ((omega_d * t).cos() + (zeta * omega / omega_d) * (omega_d * t).sin())
}

pub fn ease_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Visual properties of an icon at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleVisual {
    pub scale: f32,
    pub offset_y: f32,
    pub opacity: f32,
}

impl CircleVisual {
    pub const REST: CircleVisual = CircleVisual {
        scale: 1.0,
        offset_y: 0.0,
        opacity: 1.0,
    };
}

impl Default for CircleVisual {
    fn default() -> Self {
        Self::REST
    }
}

/// A running tap animation on one event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapAnimation {
    pub kind: TimelineAnimation,
    /// Input time of the tap, in seconds
    pub started_at: f64,
}

impl TapAnimation {
    pub fn new(kind: TimelineAnimation, started_at: f64) -> Self {
        Self { kind, started_at }
    }

    fn elapsed(&self, now: f64) -> f32 {
        (now - self.started_at).max(0.0) as f32
    }

    /// Whether the popup should be open by `now`
    pub fn popup_due(&self, now: f64, style: &TimelineStyle) -> bool {
        self.elapsed(now) >= style.popup_delay
    }

    pub fn is_finished(&self, now: f64, style: &TimelineStyle) -> bool {
        self.elapsed(now) >= style.tap_animation_duration()
    }

    /// Animated value of the driven property, before it is mapped onto a visual
    fn driven_value(&self, elapsed: f32, style: &TimelineStyle) -> f32 {
        let (rest, target) = self.endpoints(style);
        let delay = style.popup_delay.max(0.0);

        let approach = |t: f32| -> f32 {
            let progress = match self.kind {
                TimelineAnimation::Bounce | TimelineAnimation::Jump => {
                    spring_progress(t, style.animation_speed, style.animation_bouncing)
                }
                TimelineAnimation::Fade => {
                    if delay > 0.0 {
                        ease_in(t / delay)
                    } else {
                        1.0
                    }
                }
            };
            rest + (target - rest) * progress
        };

        if elapsed < delay {
            return approach(elapsed);
        }

        let peak = approach(delay);
        let settle = style.settle_duration;
        if settle <= 0.0 {
            return rest;
        }
        let t = ease_in_out((elapsed - delay) / settle);
        peak + (rest - peak) * t
    }

    fn endpoints(&self, style: &TimelineStyle) -> (f32, f32) {
        match self.kind {
            TimelineAnimation::Bounce => (1.0, style.bounce_scale),
            TimelineAnimation::Jump => (0.0, -style.jump_height),
            TimelineAnimation::Fade => (1.0, style.fade_opacity),
        }
    }

    /// Visual at `now`; `REST` once the animation is over
    pub fn sample(&self, now: f64, style: &TimelineStyle) -> CircleVisual {
        if self.is_finished(now, style) {
            return CircleVisual::REST;
        }

        let value = self.driven_value(self.elapsed(now), style);
        match self.kind {
            TimelineAnimation::Bounce => CircleVisual {
                scale: value,
                ..CircleVisual::REST
            },
            TimelineAnimation::Jump => CircleVisual {
                offset_y: value,
                ..CircleVisual::REST
            },
            TimelineAnimation::Fade => CircleVisual {
                opacity: value.clamp(0.0, 1.0),
                ..CircleVisual::REST
            },
        }
    }
}
