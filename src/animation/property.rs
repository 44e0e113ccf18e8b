use super::Animatable;

/// Result of advancing an animation, indicating whether the value changed
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceResult<T> {
    /// Value did not change since the previous sample
    NoChange,
    /// Value changed to a new value
    Changed(T),
}

impl<T> AdvanceResult<T> {
    /// Returns true if the value changed
    pub fn is_changed(&self) -> bool {
        matches!(self, AdvanceResult::Changed(_))
    }
}

/// The button property a morph animation writes on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MorphProperty {
    /// Corner radius of the shape-capable background
    CornerRadius,
    /// Layout width of the host view
    Width,
    /// Layout height of the host view
    Height,
}

/// A single property interpolated between two values.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyAnimation {
    property: MorphProperty,
    from: f32,
    to: f32,
    /// Last sampled value, `None` until the first sample
    current: Option<f32>,
}

impl PropertyAnimation {
    pub fn new(property: MorphProperty, from: f32, to: f32) -> Self {
        Self {
            property,
            from,
            to,
            current: None,
        }
    }

    pub fn corner_radius(from: f32, to: f32) -> Self {
        Self::new(MorphProperty::CornerRadius, from, to)
    }

    pub fn width(from: f32, to: f32) -> Self {
        Self::new(MorphProperty::Width, from, to)
    }

    pub fn height(from: f32, to: f32) -> Self {
        Self::new(MorphProperty::Height, from, to)
    }

    pub fn property(&self) -> MorphProperty {
        self.property
    }

    pub fn from(&self) -> f32 {
        self.from
    }

    pub fn to(&self) -> f32 {
        self.to
    }

    pub fn current(&self) -> Option<f32> {
        self.current
    }

    /// Sample the animation at an eased fraction.
    ///
    /// A fraction of 1.0 or more lands exactly on the target.
    pub fn sample(&mut self, fraction: f32) -> AdvanceResult<f32> {
        let value = if fraction >= 1.0 {
            self.to
        } else {
            f32::lerp(&self.from, &self.to, fraction)
        };

        let changed = self.current != Some(value);
        self.current = Some(value);

        if changed {
            AdvanceResult::Changed(value)
        } else {
            AdvanceResult::NoChange
        }
    }

    /// Whether the last sample reached the target value
    pub fn is_settled(&self) -> bool {
        self.current == Some(self.to)
    }
}
