//! In-memory host used by unit tests.

use crate::background::Background;
use crate::geometry::Size;
use crate::surface::HostSurface;

#[derive(Debug, Clone)]
pub(crate) struct FakeSurface {
    pub size: Size,
    pub text: Option<String>,
    pub background: Option<Background>,
    pub clickable: bool,
    pub invalidations: usize,
}

impl FakeSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            text: None,
            background: None,
            clickable: true,
            invalidations: 0,
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_background(mut self, background: impl Into<Background>) -> Self {
        self.background = Some(background.into());
        self
    }
}

impl HostSurface for FakeSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn set_layout_width(&mut self, width: f32) {
        self.size.width = width;
    }

    fn set_layout_height(&mut self, height: f32) {
        self.size.height = height;
    }

    fn text(&self) -> Option<String> {
        self.text.clone()
    }

    fn set_text(&mut self, text: Option<String>) {
        self.text = text;
    }

    fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    fn background_mut(&mut self) -> Option<&mut Background> {
        self.background.as_mut()
    }

    fn set_background(&mut self, background: Option<Background>) {
        self.background = background;
    }

    fn set_clickable(&mut self, clickable: bool) {
        self.clickable = clickable;
    }

    fn invalidate(&mut self) {
        self.invalidations += 1;
    }
}
