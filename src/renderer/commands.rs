//! Draw command definitions for a button's paint pass.

use crate::geometry::Color;

/// A single draw operation in the button's local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Stroke a circular arc.
    Arc {
        /// Center point in local coordinates
        center: (f32, f32),
        /// Radius of the stroke's center line
        radius: f32,
        /// Start angle in degrees, clockwise from 3 o'clock
        start_angle: f32,
        /// Sweep in degrees, positive is clockwise
        sweep_angle: f32,
        /// Stroke width in logical pixels
        stroke_width: f32,
        /// Stroke color
        color: Color,
    },
}
