use std::cell::Cell;
use std::rc::Rc;

use bitflags::bitflags;

bitflags! {
    /// Flags indicating what the host needs to redo after a frame
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct ChangeFlags: u8 {
        /// Layout size changed
        const NEEDS_LAYOUT = 0b01;
        /// Visual appearance changed
        const NEEDS_PAINT  = 0b10;
    }
}

/// Shared redraw request flag.
///
/// Drawables hold a clone and call [`RedrawHandle::request`] whenever their
/// appearance changes; the owning widget drains it with
/// [`RedrawHandle::take`] once per frame and forwards it to the host.
#[derive(Clone, Debug, Default)]
pub struct RedrawHandle {
    requested: Rc<Cell<bool>>,
}

impl RedrawHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.requested.set(true);
    }

    /// Check if a redraw has been requested and clear the flag
    pub fn take(&self) -> bool {
        self.requested.replace(false)
    }

    pub fn is_requested(&self) -> bool {
        self.requested.get()
    }
}
