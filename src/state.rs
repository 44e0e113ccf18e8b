//! Button lifecycle state and content snapshots.

use crate::background::Background;
use crate::config::ButtonConfig;
use crate::geometry::Color;
use crate::surface::HostSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Idle,
    Progress,
}

/// The state machine shared by every transition strategy.
///
/// Only two edges exist: `Idle -> Progress` through [`ButtonCore::begin_progress`]
/// and `Progress -> Idle` through [`ButtonCore::end_progress`]. Calls from any
/// other state are ignored and report `false`.
#[derive(Debug, Clone)]
pub struct ButtonCore {
    state: ButtonState,
    initial_text: Option<String>,
    running_text: Option<String>,
    final_text: Option<String>,
    progress_colors: Vec<Color>,
    initial_background: Option<Background>,
    final_background: Option<Background>,
}

impl ButtonCore {
    /// `initial_background` is whatever the host view shows at construction.
    pub fn new(config: &ButtonConfig, initial_background: Option<Background>) -> Self {
        Self {
            state: ButtonState::Idle,
            initial_text: None,
            running_text: config.running_text.clone(),
            final_text: config.final_text.clone(),
            progress_colors: config.progress_colors.clone(),
            initial_background,
            final_background: config.final_background.clone(),
        }
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn is_in_progress(&self) -> bool {
        self.state == ButtonState::Progress
    }

    pub fn initial_text(&self) -> Option<&str> {
        self.initial_text.as_deref()
    }

    pub fn running_text(&self) -> Option<&str> {
        self.running_text.as_deref()
    }

    pub fn final_text(&self) -> Option<&str> {
        self.final_text.as_deref()
    }

    pub fn progress_colors(&self) -> &[Color] {
        &self.progress_colors
    }

    pub fn initial_background(&self) -> Option<&Background> {
        self.initial_background.as_ref()
    }

    pub fn final_background(&self) -> Option<&Background> {
        self.final_background.as_ref()
    }

    /// Replace the indicator palette. An empty palette is ignored.
    pub fn set_progress_colors(&mut self, colors: impl IntoIterator<Item = Color>) {
        let colors: Vec<Color> = colors.into_iter().collect();
        if colors.is_empty() {
            log::warn!("Ignoring empty progress palette");
            return;
        }
        self.progress_colors = colors;
    }

    /// Enter `Progress`: snapshot and clear the text, disable clicks and
    /// show the initial background.
    pub fn begin_progress(&mut self, surface: &mut dyn HostSurface) -> bool {
        if self.state != ButtonState::Idle {
            log::trace!("start() ignored in {:?}", self.state);
            return false;
        }

        self.state = ButtonState::Progress;
        self.initial_text = surface.text();
        surface.set_text(None);
        surface.set_clickable(false);

        if let Some(background) = &self.initial_background {
            surface.set_background(Some(background.clone()));
        }

        log::debug!("Button entered progress (text {:?})", self.initial_text);
        true
    }

    /// Leave `Progress` and re-enable clicks.
    pub fn end_progress(&mut self, surface: &mut dyn HostSurface) -> bool {
        if self.state != ButtonState::Progress {
            log::trace!("reset()/finish() ignored in {:?}", self.state);
            return false;
        }

        self.state = ButtonState::Idle;
        surface.set_clickable(true);

        log::debug!("Button returned to idle");
        true
    }

    /// Keep the stored initial background in step with the corner radius the
    /// morph starts from.
    pub(crate) fn sync_initial_corner_radius(&mut self, radius: f32) {
        if let Some(background) = self.initial_background.as_mut() {
            background.set_corner_radius(radius);
        }
    }
}
