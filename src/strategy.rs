//! How a button presents its transitions.
//!
//! The state machine in [`ButtonCore`] decides whether a transition happens;
//! a [`TransitionStrategy`] decides what it looks like. [`PlainTransitions`]
//! swaps text and background on the spot, [`MorphTransitions`] morphs the
//! button into a circle and back and defers the terminal presentation until
//! the shape has settled.

use std::time::Instant;

use crate::animation::{GroupHandle, MorphProperty, Orchestrator};
use crate::background::{Background, ShapeDrawable};
use crate::config::ButtonConfig;
use crate::dimensions::DimensionModel;
use crate::invalidation::ChangeFlags;
use crate::presentation::{show_final_background, Presentation};
use crate::state::ButtonCore;
use crate::surface::HostSurface;

/// Callback fired once a `finish` transition has settled
pub type FinishListener = Box<dyn FnOnce()>;

/// Presentation side of the `start`/`reset`/`finish` transitions.
///
/// Each hook runs right after [`ButtonCore`] accepted the matching edge, so
/// implementations never see an invalid transition.
pub trait TransitionStrategy {
    fn on_start(&mut self, core: &mut ButtonCore, surface: &mut dyn HostSurface);

    fn on_reset(&mut self, core: &mut ButtonCore, surface: &mut dyn HostSurface);

    fn on_finish(
        &mut self,
        core: &mut ButtonCore,
        surface: &mut dyn HostSurface,
        listener: Option<FinishListener>,
    );

    /// Advance any running animation by one frame
    fn on_frame(
        &mut self,
        _now: Instant,
        _core: &ButtonCore,
        _surface: &mut dyn HostSurface,
    ) -> ChangeFlags {
        ChangeFlags::empty()
    }

    /// True while the button's shape or size is still changing
    fn is_morphing(&self) -> bool {
        false
    }

    /// True while frames are needed to finish a transition
    fn is_animating(&self) -> bool {
        false
    }
}

/// Applies every transition immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTransitions;

impl TransitionStrategy for PlainTransitions {
    fn on_start(&mut self, _core: &mut ButtonCore, _surface: &mut dyn HostSurface) {}

    fn on_reset(&mut self, core: &mut ButtonCore, surface: &mut dyn HostSurface) {
        Presentation::Initial.apply(core, surface);
    }

    fn on_finish(
        &mut self,
        core: &mut ButtonCore,
        surface: &mut dyn HostSurface,
        listener: Option<FinishListener>,
    ) {
        show_final_background(core, surface);
        surface.set_text(Presentation::Final.text(core).map(str::to_owned));
        if let Some(listener) = listener {
            listener();
        }
    }
}

/// Completion payload of a morph group.
pub enum MorphCompletion {
    /// The button has collapsed into its progress shape
    Expanded,
    /// The button is back at its initial shape
    Shrunk {
        presentation: Presentation,
        listener: Option<FinishListener>,
    },
}

impl std::fmt::Debug for MorphCompletion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MorphCompletion::Expanded => write!(f, "Expanded"),
            MorphCompletion::Shrunk {
                presentation,
                listener,
            } => f
                .debug_struct("Shrunk")
                .field("presentation", presentation)
                .field("listener", &listener.is_some())
                .finish(),
        }
    }
}

/// Morphs the button between its initial shape and a circle.
pub struct MorphTransitions {
    dimensions: DimensionModel,
    orchestrator: Orchestrator<MorphCompletion>,
    fallback_shape: ShapeDrawable,
    morphing: bool,
    last_group: Option<GroupHandle>,
}

impl MorphTransitions {
    pub fn new(config: &ButtonConfig) -> Self {
        Self {
            dimensions: DimensionModel::new(
                config.final_width,
                config.final_height,
                config.initial_corner_radius,
                config.final_corner_radius,
            ),
            orchestrator: Orchestrator::new(config.transition()),
            fallback_shape: config.fallback_shape,
            morphing: false,
            last_group: None,
        }
    }

    pub fn dimensions(&self) -> &DimensionModel {
        &self.dimensions
    }

    pub fn orchestrator(&self) -> &Orchestrator<MorphCompletion> {
        &self.orchestrator
    }

    /// Handle of the most recently played group
    pub fn last_group(&self) -> Option<&GroupHandle> {
        self.last_group.as_ref()
    }

    /// Make sure the visible background can take a corner radius, and start
    /// it at the initial radius.
    fn prepare_background(&self, core: &mut ButtonCore, surface: &mut dyn HostSurface) {
        let radius = self.dimensions.initial_corner_radius();
        let rounded = surface
            .background_mut()
            .is_some_and(|background| background.set_corner_radius(radius));

        if !rounded {
            log::warn!("Background has no corner radius, substituting the default shape");
            let shape = self.fallback_shape.corner_radius(radius);
            surface.set_background(Some(Background::Shape(shape)));
        }
        core.sync_initial_corner_radius(radius);
    }

    /// Corner radius currently on screen, or the final radius when the
    /// background cannot be rounded.
    fn live_corner_radius(&self, surface: &dyn HostSurface) -> f32 {
        surface
            .background()
            .and_then(Background::as_shape)
            .map_or(self.dimensions.final_corner_radius(), |shape| {
                shape.corner_radius
            })
    }

    fn shrink(
        &mut self,
        surface: &mut dyn HostSurface,
        from_radius: f32,
        presentation: Presentation,
        listener: Option<FinishListener>,
    ) {
        self.morphing = true;
        let targets = self.dimensions.shrink(surface.size(), from_radius);
        log::debug!("Shrinking back: {:?}", targets);

        let completion = MorphCompletion::Shrunk {
            presentation,
            listener,
        };
        self.last_group = Some(self.orchestrator.play(completion, targets.animations()));
    }
}

impl TransitionStrategy for MorphTransitions {
    fn on_start(&mut self, core: &mut ButtonCore, surface: &mut dyn HostSurface) {
        self.morphing = true;
        let targets = self.dimensions.expand(surface.size());
        log::debug!("Expanding: {:?}", targets);

        self.prepare_background(core, surface);
        self.last_group = Some(
            self.orchestrator
                .play(MorphCompletion::Expanded, targets.animations()),
        );
    }

    fn on_reset(&mut self, _core: &mut ButtonCore, surface: &mut dyn HostSurface) {
        let radius = self.live_corner_radius(surface);
        self.shrink(surface, radius, Presentation::Initial, None);
    }

    fn on_finish(
        &mut self,
        core: &mut ButtonCore,
        surface: &mut dyn HostSurface,
        listener: Option<FinishListener>,
    ) {
        // Sample before the final background replaces the visible one
        let radius = self.live_corner_radius(surface);
        show_final_background(core, surface);
        self.shrink(surface, radius, Presentation::Final, listener);
    }

    fn on_frame(
        &mut self,
        now: Instant,
        core: &ButtonCore,
        surface: &mut dyn HostSurface,
    ) -> ChangeFlags {
        let mut flags = ChangeFlags::empty();

        let completion = self.orchestrator.tick(now, |property, value| match property {
            MorphProperty::Width => {
                surface.set_layout_width(value);
                flags |= ChangeFlags::NEEDS_LAYOUT;
            }
            MorphProperty::Height => {
                surface.set_layout_height(value);
                flags |= ChangeFlags::NEEDS_LAYOUT;
            }
            MorphProperty::CornerRadius => {
                let rounded = surface
                    .background_mut()
                    .is_some_and(|background| background.set_corner_radius(value));
                if rounded {
                    flags |= ChangeFlags::NEEDS_PAINT;
                }
            }
        });

        match completion {
            Some(MorphCompletion::Expanded) => {
                self.morphing = false;
                flags |= ChangeFlags::NEEDS_PAINT;
            }
            Some(MorphCompletion::Shrunk {
                presentation,
                listener,
            }) => {
                self.morphing = false;
                presentation.apply(core, surface);
                flags |= ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT;
                if let Some(listener) = listener {
                    listener();
                }
            }
            None => {}
        }

        flags
    }

    fn is_morphing(&self) -> bool {
        self.morphing
    }

    fn is_animating(&self) -> bool {
        self.orchestrator.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{GroupStatus, TimingFunction};
    use crate::background::DrawableHandle;
    use crate::geometry::{Color, Size};
    use crate::testing::FakeSurface;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    fn setup(config: ButtonConfig, surface: FakeSurface) -> (ButtonCore, FakeSurface) {
        let core = ButtonCore::new(&config, surface.background.clone());
        (core, surface)
    }

    #[test]
    fn test_plain_finish_applies_immediately() {
        let config = ButtonConfig::default()
            .final_text("Done")
            .final_background(DrawableHandle(2));
        let (mut core, mut surface) = setup(config, FakeSurface::new(200.0, 80.0).with_text("Go"));
        let mut plain = PlainTransitions;
        let fired = Rc::new(Cell::new(false));

        core.begin_progress(&mut surface);
        plain.on_start(&mut core, &mut surface);
        core.end_progress(&mut surface);
        let flag = Rc::clone(&fired);
        plain.on_finish(&mut core, &mut surface, Some(Box::new(move || flag.set(true))));

        assert!(fired.get());
        assert_eq!(surface.text.as_deref(), Some("Done"));
        assert_eq!(surface.background, Some(Background::from(DrawableHandle(2))));
        assert!(!plain.is_morphing());
    }

    #[test]
    fn test_morph_start_substitutes_fallback_shape() {
        let config = ButtonConfig::default().initial_corner_radius(6.0);
        let surface = FakeSurface::new(200.0, 80.0).with_background(DrawableHandle(1));
        let (mut core, mut surface) = setup(config.clone(), surface);
        let mut morph = MorphTransitions::new(&config);

        core.begin_progress(&mut surface);
        morph.on_start(&mut core, &mut surface);

        let shape = surface.background.as_ref().and_then(Background::as_shape);
        assert_eq!(
            shape.copied(),
            Some(ShapeDrawable::default_button().corner_radius(6.0))
        );
        // The stored initial background is untouched
        assert_eq!(
            core.initial_background(),
            Some(&Background::from(DrawableHandle(1)))
        );
        assert!(morph.is_morphing());
        assert!(morph.is_animating());
    }

    #[test]
    fn test_morph_start_rounds_existing_shape() {
        let config = ButtonConfig::default().initial_corner_radius(4.0);
        let surface =
            FakeSurface::new(200.0, 80.0).with_background(ShapeDrawable::new(Color::BLACK));
        let (mut core, mut surface) = setup(config.clone(), surface);
        let mut morph = MorphTransitions::new(&config);

        core.begin_progress(&mut surface);
        morph.on_start(&mut core, &mut surface);

        let expected = Background::from(ShapeDrawable::new(Color::BLACK).corner_radius(4.0));
        assert_eq!(surface.background.as_ref(), Some(&expected));
        assert_eq!(core.initial_background(), Some(&expected));
    }

    #[test]
    fn test_expand_settles_then_stops_morphing() {
        let config = ButtonConfig::default();
        let surface =
            FakeSurface::new(200.0, 80.0).with_background(ShapeDrawable::new(Color::BLACK));
        let (mut core, mut surface) = setup(config.clone(), surface);
        let mut morph = MorphTransitions::new(&config);
        let start = Instant::now();

        core.begin_progress(&mut surface);
        morph.on_start(&mut core, &mut surface);
        let first = morph.on_frame(start, &core, &mut surface);
        assert!(first.contains(ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT));
        morph.on_frame(start + Duration::from_millis(150), &core, &mut surface);
        assert!(morph.is_morphing());

        morph.on_frame(start + Duration::from_millis(300), &core, &mut surface);
        assert!(!morph.is_morphing());
        assert!(!morph.is_animating());
        assert_eq!(surface.size, Size::new(80.0, 80.0));
        assert_eq!(
            surface
                .background
                .as_ref()
                .and_then(Background::as_shape)
                .map(|s| s.corner_radius),
            Some(1000.0)
        );
        assert_eq!(
            morph.last_group().map(GroupHandle::status),
            Some(GroupStatus::Completed)
        );
    }

    #[test]
    fn test_finish_shows_final_background_during_shrink() {
        let config = ButtonConfig::default()
            .final_text("Sent")
            .final_background(ShapeDrawable::new(Color::WHITE).corner_radius(1000.0));
        let surface = FakeSurface::new(200.0, 80.0)
            .with_text("Send")
            .with_background(ShapeDrawable::new(Color::BLACK));
        let (mut core, mut surface) = setup(config.clone(), surface);
        let mut morph = MorphTransitions::new(&config);
        let start = Instant::now();

        core.begin_progress(&mut surface);
        morph.on_start(&mut core, &mut surface);
        morph.on_frame(start, &core, &mut surface);
        morph.on_frame(start + Duration::from_millis(300), &core, &mut surface);

        core.end_progress(&mut surface);
        morph.on_finish(&mut core, &mut surface, None);
        let during = surface.background.as_ref().and_then(Background::as_shape).copied();
        assert_eq!(during.map(|s| s.color), Some(Color::WHITE));
        assert_eq!(surface.text, None);

        let later = start + Duration::from_millis(400);
        morph.on_frame(later, &core, &mut surface);
        morph.on_frame(later + Duration::from_millis(300), &core, &mut surface);

        assert_eq!(surface.text.as_deref(), Some("Sent"));
        assert_eq!(surface.background.as_ref(), core.initial_background());
        assert_eq!(surface.size, Size::new(200.0, 80.0));
    }

    #[test]
    fn test_reset_during_expand_shrinks_from_live_radius() {
        let config = ButtonConfig::default().timing(TimingFunction::Linear);
        let surface =
            FakeSurface::new(200.0, 80.0).with_background(ShapeDrawable::new(Color::BLACK));
        let (mut core, mut surface) = setup(config.clone(), surface);
        let mut morph = MorphTransitions::new(&config);
        let start = Instant::now();
        let radius = |surface: &FakeSurface| {
            surface
                .background
                .as_ref()
                .and_then(Background::as_shape)
                .map(|s| s.corner_radius)
        };

        core.begin_progress(&mut surface);
        morph.on_start(&mut core, &mut surface);
        morph.on_frame(start, &core, &mut surface);
        morph.on_frame(start + Duration::from_millis(30), &core, &mut surface);
        let before = radius(&surface).unwrap_or_default();
        assert!((before - 100.0).abs() < 1e-3);

        core.end_progress(&mut surface);
        morph.on_reset(&mut core, &mut surface);
        morph.on_frame(start + Duration::from_millis(46), &core, &mut surface);

        let first = radius(&surface).unwrap_or_default();
        assert!((first - before).abs() < 1e-3);
        assert!((surface.size.width - 188.0).abs() < 1e-3);

        morph.on_frame(start + Duration::from_millis(346), &core, &mut surface);
        assert_eq!(radius(&surface), Some(0.0));
        assert_eq!(surface.size, Size::new(200.0, 80.0));
    }

    #[test]
    fn test_finish_moves_live_radius_onto_final_background() {
        let config = ButtonConfig::default()
            .timing(TimingFunction::Linear)
            .final_background(ShapeDrawable::new(Color::WHITE));
        let surface =
            FakeSurface::new(200.0, 80.0).with_background(ShapeDrawable::new(Color::BLACK));
        let (mut core, mut surface) = setup(config.clone(), surface);
        let mut morph = MorphTransitions::new(&config);
        let start = Instant::now();

        core.begin_progress(&mut surface);
        morph.on_start(&mut core, &mut surface);
        morph.on_frame(start, &core, &mut surface);
        morph.on_frame(start + Duration::from_millis(300), &core, &mut surface);

        core.end_progress(&mut surface);
        morph.on_finish(&mut core, &mut surface, None);
        morph.on_frame(start + Duration::from_millis(316), &core, &mut surface);

        let shape = surface.background.as_ref().and_then(Background::as_shape).copied();
        assert_eq!(shape.map(|s| s.color), Some(Color::WHITE));
        assert_eq!(shape.map(|s| s.corner_radius), Some(1000.0));
    }

    #[test]
    fn test_completion_debug_hides_listener() {
        let completion = MorphCompletion::Shrunk {
            presentation: Presentation::Final,
            listener: Some(Box::new(|| {})),
        };
        assert_eq!(
            format!("{completion:?}"),
            "Shrunk { presentation: Final, listener: true }"
        );
    }
}
