//! A loading button that morphs between an idle label, a circular progress
//! state and a finished label.
//!
//! The button is toolkit-agnostic: it reads and writes the host view through
//! [`surface::HostSurface`], is driven frame by frame through
//! [`LoadingButton::on_frame`], and records its progress indicator into a
//! [`renderer::PaintContext`] that the host renders.

pub mod animation;
pub mod background;
pub mod button;
pub mod config;
pub mod dimensions;
pub mod geometry;
pub mod indicator;
pub mod invalidation;
pub mod presentation;
pub mod renderer;
pub mod state;
pub mod strategy;
pub mod surface;

#[cfg(test)]
pub(crate) mod testing;

pub use button::{LoadingButton, LoadingControl};
pub use config::{ButtonConfig, ConfigError};

pub mod prelude {
    pub use crate::animation::{TimingFunction, Transition};
    pub use crate::background::{Background, DrawableHandle, ShapeDrawable};
    pub use crate::geometry::{Color, Rect, Size};
    pub use crate::indicator::IndicatorStyle;
    pub use crate::invalidation::ChangeFlags;
    pub use crate::renderer::{DrawCommand, PaintContext};
    pub use crate::state::ButtonState;
    pub use crate::strategy::{FinishListener, MorphTransitions, PlainTransitions};
    pub use crate::surface::HostSurface;
    pub use crate::{ButtonConfig, ConfigError, LoadingButton, LoadingControl};
}
