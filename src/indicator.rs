//! Circular progress indicator and the per-paint lifecycle that owns it.
//!
//! The spinner animates on its own clock, independent of any morph group.
//! Its arc grows to [`MAX_ARC`] of the circle during the first half of each
//! cycle and shrinks back to [`MIN_ARC`] during the second half, while the
//! whole ring keeps rotating. In the last quarter of a cycle the stroke
//! color blends into the next palette entry.

use std::time::Instant;

use crate::animation::{Animatable, TimingFunction};
use crate::geometry::{Color, Rect, Size};
use crate::invalidation::RedrawHandle;
use crate::renderer::PaintContext;

/// Length of one grow/shrink cycle in milliseconds
pub const CYCLE_MS: f32 = 1332.0;
/// Largest arc, as a fraction of the full circle
pub const MAX_ARC: f32 = 0.8;
/// Smallest arc, as a fraction of the full circle
pub const MIN_ARC: f32 = 0.01;
/// Fraction of a cycle after which the color starts blending
const COLOR_CHANGE_OFFSET: f32 = 0.75;
/// Extra ring rotation per cycle, in degrees
const RING_ROTATION: f32 = 90.0;
const GROUP_ROTATION: f32 = 216.0;

/// Size presets for the spinner stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorStyle {
    Default,
    #[default]
    Large,
}

impl IndicatorStyle {
    /// Radius of the stroke's center line in logical pixels
    pub fn center_radius(&self) -> f32 {
        match self {
            IndicatorStyle::Default => 7.5,
            IndicatorStyle::Large => 11.0,
        }
    }

    pub fn stroke_width(&self) -> f32 {
        match self {
            IndicatorStyle::Default => 2.5,
            IndicatorStyle::Large => 3.0,
        }
    }
}

/// One sampled frame of the spinner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinnerFrame {
    /// Degrees, clockwise from 3 o'clock, in [0, 360)
    pub start_angle: f32,
    /// Degrees of arc drawn
    pub sweep_angle: f32,
    pub color: Color,
}

impl SpinnerFrame {
    /// Sample the spinner `elapsed_ms` after it started.
    pub fn at(elapsed_ms: f32, colors: &[Color]) -> Self {
        let elapsed_ms = elapsed_ms.max(0.0);
        let cycles = elapsed_ms / CYCLE_MS;
        let cycle = cycles.floor();
        let t = cycles - cycle;

        let travel = MAX_ARC - MIN_ARC;
        let ease = TimingFunction::EaseInOut;
        let (head, tail) = if t < 0.5 {
            (MIN_ARC + travel * ease.evaluate(t / 0.5), 0.0)
        } else {
            (MIN_ARC + travel, travel * ease.evaluate((t - 0.5) / 0.5))
        };

        let rotation = cycles * (RING_ROTATION + GROUP_ROTATION) + cycle * travel * 360.0;
        let start_angle = (rotation + tail * 360.0).rem_euclid(360.0);

        Self {
            start_angle,
            sweep_angle: (head - tail) * 360.0,
            color: blend_color(colors, cycle as usize, t),
        }
    }
}

fn blend_color(colors: &[Color], cycle: usize, t: f32) -> Color {
    if colors.is_empty() {
        return Color::WHITE;
    }
    let current = colors[cycle % colors.len()];
    if t <= COLOR_CHANGE_OFFSET {
        return current;
    }
    let next = colors[(cycle + 1) % colors.len()];
    let blend = (t - COLOR_CHANGE_OFFSET) / (1.0 - COLOR_CHANGE_OFFSET);
    Color::lerp(&current, &next, blend)
}

/// A self-animating circular spinner drawable.
#[derive(Debug, Clone)]
pub struct CircularProgress {
    style: IndicatorStyle,
    colors: Vec<Color>,
    bounds: Rect,
    callback: Option<RedrawHandle>,
    running: bool,
    started_at: Option<Instant>,
    frame: SpinnerFrame,
}

impl CircularProgress {
    pub fn new(style: IndicatorStyle) -> Self {
        let colors = vec![Color::WHITE];
        let frame = SpinnerFrame::at(0.0, &colors);
        Self {
            style,
            colors,
            bounds: Rect::default(),
            callback: None,
            running: false,
            started_at: None,
            frame,
        }
    }

    pub fn style(&self) -> IndicatorStyle {
        self.style
    }

    /// Set the palette the stroke cycles through. Empty palettes are ignored.
    pub fn set_color_scheme(&mut self, colors: &[Color]) {
        if colors.is_empty() {
            return;
        }
        self.colors = colors.to_vec();
        self.frame.color = self.colors[0];
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Register the handle notified whenever the spinner needs a redraw
    pub fn set_callback(&mut self, callback: RedrawHandle) {
        self.callback = Some(callback);
    }

    pub fn start(&mut self) {
        self.running = true;
        self.started_at = None;
        self.invalidate_self();
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.started_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frame(&self) -> SpinnerFrame {
        self.frame
    }

    /// Advance the spin to `now`. The first call after `start` pins the clock.
    ///
    /// Returns true if the frame changed, in which case a redraw was requested.
    pub fn advance(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }

        let started_at = *self.started_at.get_or_insert(now);
        let elapsed_ms = now.saturating_duration_since(started_at).as_micros() as f32 / 1000.0;
        let frame = SpinnerFrame::at(elapsed_ms, &self.colors);

        if frame == self.frame {
            return false;
        }
        self.frame = frame;
        self.invalidate_self();
        true
    }

    /// Record the current frame centered in the bounds.
    pub fn draw(&self, ctx: &mut PaintContext) {
        let stroke_width = self.style.stroke_width();
        let fit = (self.bounds.width.min(self.bounds.height) - stroke_width) / 2.0;
        let radius = self.style.center_radius().min(fit.max(0.0));

        ctx.draw_arc(
            self.bounds.center(),
            radius,
            self.frame.start_angle,
            self.frame.sweep_angle,
            stroke_width,
            self.frame.color,
        );
    }

    fn invalidate_self(&self) {
        if let Some(callback) = &self.callback {
            callback.request();
        }
    }
}

/// Square bounds for the indicator, horizontally centered in `size`.
pub fn indicator_bounds(size: Size) -> Rect {
    let offset = (size.width - size.height) / 2.0;
    Rect::from_edges(offset, 0.0, size.width - offset, size.height)
}

/// Creates, reuses and releases the button's spinner.
///
/// Driven from every paint pass: the spinner only exists while the button
/// is in progress and its shape has settled.
#[derive(Debug)]
pub struct IndicatorLifecycle {
    style: IndicatorStyle,
    indicator: Option<CircularProgress>,
    redraw: RedrawHandle,
    created: usize,
}

impl IndicatorLifecycle {
    pub fn new(style: IndicatorStyle, redraw: RedrawHandle) -> Self {
        Self {
            style,
            indicator: None,
            redraw,
            created: 0,
        }
    }

    /// Run one paint pass.
    ///
    /// Does nothing unless `in_progress` and not `morphing`. Creates and
    /// starts a spinner when none is running, otherwise draws the existing
    /// one at its existing bounds.
    pub fn on_paint(
        &mut self,
        in_progress: bool,
        morphing: bool,
        size: Size,
        colors: &[Color],
        ctx: &mut PaintContext,
    ) {
        if !in_progress || morphing {
            return;
        }

        if let Some(indicator) = self.indicator.as_ref().filter(|i| i.is_running()) {
            indicator.draw(ctx);
            return;
        }

        let mut indicator = CircularProgress::new(self.style);
        indicator.set_color_scheme(colors);
        indicator.set_bounds(indicator_bounds(size));
        indicator.set_callback(self.redraw.clone());
        indicator.start();

        self.created += 1;
        log::debug!(
            "Created progress indicator #{} at {:?}",
            self.created,
            indicator.bounds()
        );
        self.indicator = Some(indicator);
    }

    /// Advance the running spinner, if any
    pub fn advance(&mut self, now: Instant) -> bool {
        self.indicator
            .as_mut()
            .is_some_and(|indicator| indicator.advance(now))
    }

    /// Stop and drop the spinner
    pub fn release(&mut self) {
        if let Some(mut indicator) = self.indicator.take() {
            indicator.stop();
            log::debug!("Released progress indicator");
        }
    }

    pub fn indicator(&self) -> Option<&CircularProgress> {
        self.indicator.as_ref()
    }

    /// Number of spinners created over the lifetime of the button
    pub fn created(&self) -> usize {
        self.created
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawCommand;
    use std::time::Duration;

    const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

    #[test]
    fn test_bounds_centered_in_wide_rect() {
        assert_eq!(
            indicator_bounds(Size::new(200.0, 80.0)),
            Rect::new(60.0, 0.0, 80.0, 80.0)
        );
        assert_eq!(
            indicator_bounds(Size::new(80.0, 80.0)),
            Rect::new(0.0, 0.0, 80.0, 80.0)
        );
    }

    #[test]
    fn test_frame_arc_grows_then_shrinks() {
        let start = SpinnerFrame::at(0.0, &[RED]);
        let middle = SpinnerFrame::at(CYCLE_MS / 2.0, &[RED]);
        let end = SpinnerFrame::at(CYCLE_MS * 0.999, &[RED]);

        assert!((start.sweep_angle - MIN_ARC * 360.0).abs() < 1e-3);
        assert!((middle.sweep_angle - MAX_ARC * 360.0).abs() < 1e-3);
        assert!(end.sweep_angle < 10.0);
    }

    #[test]
    fn test_frame_is_continuous_across_cycles() {
        let before = SpinnerFrame::at(CYCLE_MS - 0.01, &[RED]);
        let after = SpinnerFrame::at(CYCLE_MS + 0.01, &[RED]);
        assert!((before.start_angle - after.start_angle).abs() < 0.5);
        assert!((before.sweep_angle - after.sweep_angle).abs() < 0.5);
    }

    #[test]
    fn test_color_blends_into_next_entry() {
        let colors = [RED, BLUE];
        assert_eq!(SpinnerFrame::at(CYCLE_MS * 0.5, &colors).color, RED);
        let blended = SpinnerFrame::at(CYCLE_MS * 0.875, &colors).color;
        assert!(blended.r > 0.0 && blended.b > 0.0);
        assert_eq!(SpinnerFrame::at(CYCLE_MS * 1.5, &colors).color, BLUE);
        assert_eq!(SpinnerFrame::at(CYCLE_MS * 2.5, &colors).color, RED);
    }

    #[test]
    fn test_advance_requests_redraw() {
        let redraw = RedrawHandle::new();
        let mut indicator = CircularProgress::new(IndicatorStyle::Large);
        indicator.set_callback(redraw.clone());

        let now = Instant::now();
        assert!(!indicator.advance(now));

        indicator.start();
        assert!(redraw.take());
        indicator.advance(now);
        assert!(indicator.advance(now + Duration::from_millis(16)));
        assert!(redraw.take());

        indicator.stop();
        assert!(!indicator.advance(now + Duration::from_millis(32)));
        assert!(!redraw.take());
    }

    #[test]
    fn test_draw_fits_radius_in_bounds() {
        let mut indicator = CircularProgress::new(IndicatorStyle::Large);
        indicator.set_bounds(Rect::new(0.0, 0.0, 10.0, 10.0));
        let mut ctx = PaintContext::new();
        indicator.draw(&mut ctx);

        let DrawCommand::Arc {
            center,
            radius,
            stroke_width,
            ..
        } = &ctx.commands()[0];
        assert_eq!(*center, (5.0, 5.0));
        assert_eq!(*radius, 3.5);
        assert_eq!(*stroke_width, 3.0);
    }

    #[test]
    fn test_lifecycle_skips_while_morphing() {
        let mut lifecycle = IndicatorLifecycle::new(IndicatorStyle::Large, RedrawHandle::new());
        let mut ctx = PaintContext::new();

        lifecycle.on_paint(true, true, Size::new(80.0, 80.0), &[RED], &mut ctx);
        lifecycle.on_paint(false, false, Size::new(80.0, 80.0), &[RED], &mut ctx);

        assert!(lifecycle.indicator().is_none());
        assert_eq!(lifecycle.created(), 0);
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_lifecycle_creates_then_reuses() {
        let redraw = RedrawHandle::new();
        let mut lifecycle = IndicatorLifecycle::new(IndicatorStyle::Large, redraw.clone());
        let mut ctx = PaintContext::new();
        let size = Size::new(200.0, 80.0);

        lifecycle.on_paint(true, false, size, &[RED, BLUE], &mut ctx);
        assert_eq!(lifecycle.created(), 1);
        assert!(ctx.is_empty());
        assert!(redraw.take());

        let indicator = lifecycle.indicator().expect("indicator created");
        assert!(indicator.is_running());
        assert_eq!(indicator.colors(), &[RED, BLUE]);
        assert_eq!(indicator.bounds(), Rect::new(60.0, 0.0, 80.0, 80.0));

        // Later passes only draw, even if the size changed
        lifecycle.on_paint(true, false, Size::new(300.0, 80.0), &[RED], &mut ctx);
        lifecycle.on_paint(true, false, Size::new(300.0, 80.0), &[RED], &mut ctx);
        assert_eq!(lifecycle.created(), 1);
        assert_eq!(ctx.commands().len(), 2);
        assert_eq!(
            lifecycle.indicator().map(CircularProgress::bounds),
            Some(Rect::new(60.0, 0.0, 80.0, 80.0))
        );
    }

    #[test]
    fn test_lifecycle_recreates_after_release() {
        let mut lifecycle = IndicatorLifecycle::new(IndicatorStyle::Default, RedrawHandle::new());
        let mut ctx = PaintContext::new();
        let size = Size::new(80.0, 80.0);

        lifecycle.on_paint(true, false, size, &[RED], &mut ctx);
        lifecycle.release();
        assert!(lifecycle.indicator().is_none());
        assert!(!lifecycle.advance(Instant::now()));

        lifecycle.on_paint(true, false, size, &[RED], &mut ctx);
        assert_eq!(lifecycle.created(), 2);
    }
}
