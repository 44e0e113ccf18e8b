//! The loading button widget.
//!
//! ```ignore
//! let mut button = LoadingButton::new(host, ButtonConfig::new().final_text("Sent"))?;
//!
//! button.start();
//! // every frame
//! button.on_frame(Instant::now());
//! button.paint(&mut paint_ctx);
//!
//! button.finish(Some(Box::new(|| println!("settled"))));
//! ```

use std::time::Instant;

use crate::config::{ButtonConfig, ConfigError};
use crate::geometry::Color;
use crate::indicator::IndicatorLifecycle;
use crate::invalidation::{ChangeFlags, RedrawHandle};
use crate::renderer::PaintContext;
use crate::state::{ButtonCore, ButtonState};
use crate::strategy::{FinishListener, MorphTransitions, PlainTransitions, TransitionStrategy};
use crate::surface::HostSurface;

/// The transitions every loading button exposes.
///
/// All three are silent no-ops outside their source state.
pub trait LoadingControl {
    /// `Idle -> Progress`
    fn start(&mut self);

    /// `Progress -> Idle`, restoring the initial text and background
    fn reset(&mut self);

    /// `Progress -> Idle`, showing the final text; `on_complete` fires once
    /// the button has settled
    fn finish(&mut self, on_complete: Option<FinishListener>);
}

pub struct LoadingButton<H, S = MorphTransitions> {
    host: H,
    core: ButtonCore,
    strategy: S,
    indicator: IndicatorLifecycle,
    redraw: RedrawHandle,
}

impl<H: HostSurface> LoadingButton<H, MorphTransitions> {
    /// Create a morphing loading button on top of `host`.
    pub fn new(host: H, config: ButtonConfig) -> Result<Self, ConfigError> {
        let strategy = MorphTransitions::new(&config);
        Self::with_strategy(host, config, strategy)
    }
}

impl<H: HostSurface> LoadingButton<H, PlainTransitions> {
    /// Create a loading button that swaps its presentation without morphing.
    pub fn plain(host: H, config: ButtonConfig) -> Result<Self, ConfigError> {
        Self::with_strategy(host, config, PlainTransitions)
    }
}

impl<H: HostSurface, S: TransitionStrategy> LoadingButton<H, S> {
    pub fn with_strategy(host: H, config: ButtonConfig, strategy: S) -> Result<Self, ConfigError> {
        config.validate()?;

        let redraw = RedrawHandle::new();
        let core = ButtonCore::new(&config, host.background().cloned());
        Ok(Self {
            host,
            core,
            strategy,
            indicator: IndicatorLifecycle::new(config.indicator_style, redraw.clone()),
            redraw,
        })
    }

    pub fn set_progress_colors(&mut self, colors: impl IntoIterator<Item = Color>) {
        self.core.set_progress_colors(colors);
    }

    /// Advance animations to `now` and forward redraw requests to the host.
    pub fn on_frame(&mut self, now: Instant) -> ChangeFlags {
        let mut flags = self.strategy.on_frame(now, &self.core, &mut self.host);

        if self.core.is_in_progress() {
            self.indicator.advance(now);
        }
        if self.redraw.take() {
            flags |= ChangeFlags::NEEDS_PAINT;
        }
        if !flags.is_empty() {
            self.host.invalidate();
        }

        flags
    }

    /// Record this render pass's drawing into `ctx`.
    ///
    /// The host draws text and background itself; the button only adds the
    /// progress indicator, once it is in progress and its shape has settled.
    pub fn paint(&mut self, ctx: &mut PaintContext) {
        self.indicator.on_paint(
            self.core.is_in_progress(),
            self.strategy.is_morphing(),
            self.host.size(),
            self.core.progress_colors(),
            ctx,
        );
    }

    pub fn state(&self) -> ButtonState {
        self.core.state()
    }

    pub fn is_morphing(&self) -> bool {
        self.strategy.is_morphing()
    }

    /// True while the host should keep scheduling frames
    pub fn is_animating(&self) -> bool {
        self.strategy.is_animating() || self.indicator.indicator().is_some()
    }

    pub fn core(&self) -> &ButtonCore {
        &self.core
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn indicator(&self) -> &IndicatorLifecycle {
        &self.indicator
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}

impl<H: HostSurface, S: TransitionStrategy> LoadingControl for LoadingButton<H, S> {
    fn start(&mut self) {
        if !self.core.begin_progress(&mut self.host) {
            return;
        }
        self.strategy.on_start(&mut self.core, &mut self.host);
    }

    fn reset(&mut self) {
        if !self.core.end_progress(&mut self.host) {
            return;
        }
        self.indicator.release();
        self.strategy.on_reset(&mut self.core, &mut self.host);
    }

    fn finish(&mut self, on_complete: Option<FinishListener>) {
        if !self.core.end_progress(&mut self.host) {
            return;
        }
        self.indicator.release();
        self.strategy
            .on_finish(&mut self.core, &mut self.host, on_complete);
    }
}
