//! Recorded draw lists.
//!
//! The button does not rasterize anything itself. A paint pass records
//! [`DrawCommand`]s into a [`PaintContext`] and the host renders them with
//! whatever backend it uses.

pub mod commands;

pub use commands::DrawCommand;

use crate::geometry::Color;

#[derive(Debug, Default)]
pub struct PaintContext {
    commands: Vec<DrawCommand>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new PaintContext with pre-allocated capacity to avoid per-frame allocations
    pub fn with_capacity(commands: usize) -> Self {
        Self {
            commands: Vec::with_capacity(commands),
        }
    }

    /// Clear all commands for reuse, preserving allocated capacity
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn draw_arc(
        &mut self,
        center: (f32, f32),
        radius: f32,
        start_angle: f32,
        sweep_angle: f32,
        stroke_width: f32,
        color: Color,
    ) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start_angle,
            sweep_angle,
            stroke_width,
            color,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
