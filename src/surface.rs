//! The host view a button is mounted in.

use crate::background::Background;
use crate::geometry::Size;

/// Host-owned view state the button reads and writes.
///
/// Every call happens on the UI thread, from inside a transition method or
/// a frame callback. Implementations are expected to be thin wrappers over
/// the toolkit's own view.
pub trait HostSurface {
    /// Current measured size of the view
    fn size(&self) -> Size;

    /// Set the layout width; the host applies it on its next layout pass
    fn set_layout_width(&mut self, width: f32);

    /// Set the layout height; the host applies it on its next layout pass
    fn set_layout_height(&mut self, height: f32);

    fn text(&self) -> Option<String>;

    fn set_text(&mut self, text: Option<String>);

    fn background(&self) -> Option<&Background>;

    fn background_mut(&mut self) -> Option<&mut Background>;

    fn set_background(&mut self, background: Option<Background>);

    fn set_clickable(&mut self, clickable: bool);

    /// Request a redraw on the next frame
    fn invalidate(&mut self);
}
