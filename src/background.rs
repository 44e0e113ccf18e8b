//! Background drawables as seen by the button.
//!
//! The button never looks inside a host drawable. It only needs to know
//! whether the active background can take a corner radius, which is what
//! [`Background::as_shape_mut`] answers.

use crate::geometry::Color;

/// Opaque reference to a drawable owned by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawableHandle(pub u64);

/// A solid shape whose corner radius can be animated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeDrawable {
    pub color: Color,
    pub corner_radius: f32,
}

impl ShapeDrawable {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            corner_radius: 0.0,
        }
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Shape substituted when the active background cannot be rounded.
    pub fn default_button() -> Self {
        Self::new(Color::from_hex(0x3F51B5))
    }

    /// Radius actually drawn for a given bounds, clamped to half of the
    /// smaller dimension so a large radius yields a pill or circle.
    pub fn effective_radius(&self, width: f32, height: f32) -> f32 {
        let max_radius = (width.min(height) / 2.0).max(0.0);
        self.corner_radius.clamp(0.0, max_radius)
    }
}

impl Default for ShapeDrawable {
    fn default() -> Self {
        Self::default_button()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    /// Shape-capable background with a mutable corner radius
    Shape(ShapeDrawable),
    /// Any other host drawable
    Drawable(DrawableHandle),
}

impl Background {
    pub fn as_shape(&self) -> Option<&ShapeDrawable> {
        match self {
            Background::Shape(shape) => Some(shape),
            Background::Drawable(_) => None,
        }
    }

    pub fn as_shape_mut(&mut self) -> Option<&mut ShapeDrawable> {
        match self {
            Background::Shape(shape) => Some(shape),
            Background::Drawable(_) => None,
        }
    }

    /// Set the corner radius if this background supports one.
    ///
    /// Returns false for backgrounds without a corner radius.
    pub fn set_corner_radius(&mut self, radius: f32) -> bool {
        match self.as_shape_mut() {
            Some(shape) => {
                shape.corner_radius = radius;
                true
            }
            None => false,
        }
    }
}

impl From<ShapeDrawable> for Background {
    fn from(shape: ShapeDrawable) -> Self {
        Background::Shape(shape)
    }
}

impl From<DrawableHandle> for Background {
    fn from(handle: DrawableHandle) -> Self {
        Background::Drawable(handle)
    }
}
