//! Terminal text and background of a transition.

use crate::state::ButtonCore;
use crate::surface::HostSurface;

/// What the button shows once a transition back to idle has settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// The text and background the button had before `start`
    Initial,
    /// The final text over the initial background
    Final,
}

impl Presentation {
    /// Text shown by this presentation
    pub fn text(self, core: &ButtonCore) -> Option<&str> {
        match self {
            Presentation::Initial => core.initial_text(),
            Presentation::Final => core.final_text(),
        }
    }

    pub fn apply(self, core: &ButtonCore, surface: &mut dyn HostSurface) {
        let text = self.text(core);
        log::debug!("Applying {:?} presentation (text {:?})", self, text);

        surface.set_text(text.map(str::to_owned));
        surface.set_background(core.initial_background().cloned());
    }
}

/// Swap in the final background, if one is configured.
///
/// Returns false when there is none and the current background stays.
pub fn show_final_background(core: &ButtonCore, surface: &mut dyn HostSurface) -> bool {
    match core.final_background() {
        Some(background) => {
            surface.set_background(Some(background.clone()));
            true
        }
        None => false,
    }
}
