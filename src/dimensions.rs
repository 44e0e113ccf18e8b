//! Morph targets for the expand and shrink-back transitions.

use crate::animation::PropertyAnimation;
use crate::geometry::Size;

/// Start and end value of one morphing property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub from: f32,
    pub to: f32,
}

impl Span {
    pub fn new(from: f32, to: f32) -> Self {
        Self { from, to }
    }
}

/// The three spans a morph group animates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphTargets {
    pub corner_radius: Span,
    pub width: Span,
    pub height: Span,
}

impl MorphTargets {
    /// Corner radius, width and height animations, in that order.
    pub fn animations(&self) -> [PropertyAnimation; 3] {
        [
            PropertyAnimation::corner_radius(self.corner_radius.from, self.corner_radius.to),
            PropertyAnimation::width(self.width.from, self.width.to),
            PropertyAnimation::height(self.height.from, self.height.to),
        ]
    }
}

/// Initial and final size/corner configuration of a morphing button.
///
/// A configured final width or height of `0.0` means "unset" and resolves to
/// the initial height on the first expand, collapsing the button to a circle
/// (or a pill when only one axis is set). Resolution happens once; later
/// expands reuse the resolved values.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionModel {
    initial: Size,
    final_width: f32,
    final_height: f32,
    initial_corner_radius: f32,
    final_corner_radius: f32,
}

impl DimensionModel {
    pub fn new(
        final_width: f32,
        final_height: f32,
        initial_corner_radius: f32,
        final_corner_radius: f32,
    ) -> Self {
        Self {
            initial: Size::zero(),
            final_width,
            final_height,
            initial_corner_radius,
            final_corner_radius,
        }
    }

    /// Record `measured` as the initial size and compute the expand targets.
    pub fn expand(&mut self, measured: Size) -> MorphTargets {
        self.initial = measured;

        if self.final_width == 0.0 {
            self.final_width = measured.height;
        }
        if self.final_height == 0.0 {
            self.final_height = measured.height;
        }

        MorphTargets {
            corner_radius: Span::new(self.initial_corner_radius, self.final_corner_radius),
            width: Span::new(measured.width, self.final_width),
            height: Span::new(measured.height, self.final_height),
        }
    }

    /// Targets that take the button from `current` size and `current_radius`
    /// back to the recorded initial size and corner radius.
    pub fn shrink(&self, current: Size, current_radius: f32) -> MorphTargets {
        MorphTargets {
            corner_radius: Span::new(current_radius, self.initial_corner_radius),
            width: Span::new(current.width, self.initial.width),
            height: Span::new(current.height, self.initial.height),
        }
    }

    pub fn initial_size(&self) -> Size {
        self.initial
    }

    pub fn final_size(&self) -> Size {
        Size::new(self.final_width, self.final_height)
    }

    pub fn initial_corner_radius(&self) -> f32 {
        self.initial_corner_radius
    }

    pub fn final_corner_radius(&self) -> f32 {
        self.final_corner_radius
    }
}

impl Default for DimensionModel {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1000.0)
    }
}
