use thiserror::Error;

use crate::animation::{TimingFunction, Transition, MORPH_DURATION_MS};
use crate::background::{Background, ShapeDrawable};
use crate::geometry::Color;
use crate::indicator::IndicatorStyle;

/// Errors reported when a [`ButtonConfig`] cannot drive a button.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must not be negative (got {value})")]
    Negative { name: &'static str, value: f32 },

    #[error("{name} must be finite (got {value})")]
    NotFinite { name: &'static str, value: f32 },

    #[error("animation duration must be positive (got {0}ms)")]
    InvalidDuration(f32),

    #[error("progress palette needs at least one color")]
    EmptyPalette,
}

/// Construction-time configuration of a loading button.
///
/// A final width or height of `0.0` means unset: the button collapses to its
/// own height on that axis.
#[derive(Debug, Clone)]
pub struct ButtonConfig {
    pub running_text: Option<String>,
    pub final_text: Option<String>,
    pub final_background: Option<Background>,
    pub final_width: f32,
    pub final_height: f32,
    pub initial_corner_radius: f32,
    pub final_corner_radius: f32,
    pub progress_colors: Vec<Color>,
    pub duration_ms: f32,
    pub timing: TimingFunction,
    pub indicator_style: IndicatorStyle,
    /// Shape used when the host background cannot take a corner radius
    pub fallback_shape: ShapeDrawable,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            running_text: None,
            final_text: None,
            final_background: None,
            final_width: 0.0,
            final_height: 0.0,
            initial_corner_radius: 0.0,
            final_corner_radius: 1000.0,
            progress_colors: vec![Color::WHITE],
            duration_ms: MORPH_DURATION_MS,
            timing: TimingFunction::default(),
            indicator_style: IndicatorStyle::default(),
            fallback_shape: ShapeDrawable::default_button(),
        }
    }
}

impl ButtonConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn running_text(mut self, text: impl Into<String>) -> Self {
        self.running_text = Some(text.into());
        self
    }

    pub fn final_text(mut self, text: impl Into<String>) -> Self {
        self.final_text = Some(text.into());
        self
    }

    pub fn final_background(mut self, background: impl Into<Background>) -> Self {
        self.final_background = Some(background.into());
        self
    }

    pub fn final_width(mut self, width: f32) -> Self {
        self.final_width = width;
        self
    }

    pub fn final_height(mut self, height: f32) -> Self {
        self.final_height = height;
        self
    }

    pub fn initial_corner_radius(mut self, radius: f32) -> Self {
        self.initial_corner_radius = radius;
        self
    }

    pub fn final_corner_radius(mut self, radius: f32) -> Self {
        self.final_corner_radius = radius;
        self
    }

    pub fn progress_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.progress_colors = colors.into_iter().collect();
        self
    }

    pub fn duration_ms(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    pub fn indicator_style(mut self, style: IndicatorStyle) -> Self {
        self.indicator_style = style;
        self
    }

    pub fn fallback_shape(mut self, shape: ShapeDrawable) -> Self {
        self.fallback_shape = shape;
        self
    }

    /// Transition shared by every morph group
    pub fn transition(&self) -> Transition {
        Transition::new(self.duration_ms, self.timing)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let dimensions = [
            ("final width", self.final_width),
            ("final height", self.final_height),
            ("initial corner radius", self.initial_corner_radius),
            ("final corner radius", self.final_corner_radius),
        ];
        for (name, value) in dimensions {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }

        if !(self.duration_ms.is_finite() && self.duration_ms > 0.0) {
            return Err(ConfigError::InvalidDuration(self.duration_ms));
        }

        if self.progress_colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }

        Ok(())
    }
}
