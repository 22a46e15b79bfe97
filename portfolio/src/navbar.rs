//! Navbar background that firms up once the page is scrolled.

use pagedom::{Color, EventKind, Surface, Target};

use crate::config::NavbarConfig;
use crate::page::{Context, Listener};

const DARK: (u8, u8, u8) = (10, 10, 10);
const LIGHT: (u8, u8, u8) = (248, 249, 250);

#[derive(Debug)]
pub struct NavbarScroll {
    navbar: Option<String>,
    threshold: u32,
}

impl NavbarScroll {
    pub fn new(config: NavbarConfig, navbar: Option<String>) -> Self {
        Self {
            navbar,
            threshold: config.threshold,
        }
    }

    pub fn navbar_id(&self) -> Option<&str> {
        self.navbar.as_deref()
    }

    pub fn mount<S: Surface>(&self, cx: &mut Context<'_, S>) {
        cx.listen(Target::Window, EventKind::Scroll, Listener::Navbar);
    }

    /// Background for a given scroll offset; light variant whenever the
    /// body carries any `data-theme`.
    pub fn background(&self, offset: u32, themed: bool) -> Color {
        let (r, g, b) = if themed { LIGHT } else { DARK };
        let alpha = if offset > self.threshold { 0.98 } else { 0.95 };
        Color::rgba(r, g, b, alpha)
    }

    pub fn handle_scroll<S: Surface>(&self, cx: &mut Context<'_, S>) {
        let Some(navbar) = &self.navbar else {
            return;
        };
        let surface = cx.surface();
        let themed = surface.has_attribute(&surface.body_id(), "data-theme");
        let color = self.background(surface.scroll_offset(), themed);
        let _ = cx.surface_mut().set_background(navbar, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        let navbar = NavbarScroll::new(NavbarConfig::default(), None);
        assert_eq!(navbar.background(100, false), Color::rgba(10, 10, 10, 0.95));
        assert_eq!(navbar.background(101, false), Color::rgba(10, 10, 10, 0.98));
        assert_eq!(navbar.background(0, true), Color::rgba(248, 249, 250, 0.95));
        assert_eq!(navbar.background(500, true), Color::rgba(248, 249, 250, 0.98));
    }
}
