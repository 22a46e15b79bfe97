use super::{Color, Display};

/// Inline style attributes. `None` means "not set inline".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub display: Option<Display>,
    pub background: Option<Color>,
    pub border_color: Option<Color>,
    pub opacity: Option<f32>,
    /// Vertical `translateY` offset in pixels.
    pub translate_y: Option<f32>,
    pub transition: Option<String>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }

    pub fn hidden(self) -> Self {
        self.display(Display::None)
    }

    /// True when the inline display is `block`. Mirrors a `style*="block"`
    /// attribute selector.
    pub fn is_block(&self) -> bool {
        self.display == Some(Display::Block)
    }
}
