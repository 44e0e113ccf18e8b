mod animatable;
mod group;
mod orchestrator;
mod property;
mod timing;

pub use animatable::Animatable;
pub use group::{AnimationGroup, GroupHandle, GroupId, GroupStatus};
pub use orchestrator::Orchestrator;
pub use property::{AdvanceResult, MorphProperty, PropertyAnimation};
pub use timing::TimingFunction;

/// Duration of every morph group, in milliseconds
pub const MORPH_DURATION_MS: f32 = 300.0;

/// Configuration for how a group of properties animates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Duration of the animation in milliseconds
    pub duration_ms: f32,
    /// Timing function controlling the animation curve
    pub timing: TimingFunction,
}

impl Transition {
    /// Create a new transition with the given duration and timing function
    pub fn new(duration_ms: f32, timing: TimingFunction) -> Self {
        Self {
            duration_ms,
            timing,
        }
    }

    /// Set the duration of the animation
    pub fn duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the timing function
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    /// Normalized progress (0..=1) after `elapsed_ms`
    pub fn progress(&self, elapsed_ms: f32) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(MORPH_DURATION_MS, TimingFunction::default())
    }
}
