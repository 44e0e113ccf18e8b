//! Timing functions (easing curves) for morph animations.
//!
//! A timing function maps the normalized elapsed time of an animation onto
//! the interpolation fraction used for its properties.
//!
//! - [`TimingFunction::Linear`] - Constant speed (no easing)
//! - [`TimingFunction::EaseIn`] - Starts slow, ends fast (acceleration)
//! - [`TimingFunction::EaseOut`] - Starts fast, ends slow (deceleration)
//! - [`TimingFunction::EaseInOut`] - Slow start and end, fast middle
//! - [`TimingFunction::AccelerateDecelerate`] - Cosine curve, the default
//!   for grouped size and shape changes

use std::f32::consts::PI;

/// Timing function that controls the animation curve
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimingFunction {
    /// Linear interpolation (constant speed)
    Linear,
    /// Starts slow, ends fast
    EaseIn,
    /// Starts fast, ends slow
    EaseOut,
    /// Starts slow, speeds up, then slows down
    EaseInOut,
    /// Cosine-shaped acceleration then deceleration
    #[default]
    AccelerateDecelerate,
}

impl TimingFunction {
    /// Evaluate the timing function at time t (0.0 to 1.0).
    /// Input is clamped, so the result always lies in [0, 1].
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            TimingFunction::Linear => t,
            TimingFunction::EaseIn => ease_in(t),
            TimingFunction::EaseOut => ease_out(t),
            TimingFunction::EaseInOut => ease_in_out(t),
            TimingFunction::AccelerateDecelerate => accelerate_decelerate(t),
        }
    }
}

// Easing functions

fn ease_in(t: f32) -> f32 {
    t * t
}

fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

fn accelerate_decelerate(t: f32) -> f32 {
    ((t + 1.0) * PI).cos() / 2.0 + 0.5
}
