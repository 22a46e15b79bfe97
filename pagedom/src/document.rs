//! In-memory document: an element tree plus a scrollable viewport.
//!
//! This is the surface the page runs against headlessly and in tests. It
//! records the last scroll request so callers can observe smooth scrolling
//! without a renderer.

use std::collections::VecDeque;

use log::trace;

use crate::element::{self, Element};
use crate::event::{Event, ScrollBehavior};
use crate::layout::Rect;
use crate::surface::Surface;

/// The most recent scroll the page asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRecord {
    pub top: u32,
    pub behavior: ScrollBehavior,
}

#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
    width: u32,
    height: u32,
    scroll_y: u32,
    last_scroll: Option<ScrollRecord>,
    pending: VecDeque<Event>,
}

impl Document {
    pub const DEFAULT_VIEWPORT: (u32, u32) = (1280, 720);

    pub fn new(root: Element) -> Self {
        let (width, height) = Self::DEFAULT_VIEWPORT;
        Self {
            root,
            width,
            height,
            scroll_y: 0,
            last_scroll: None,
            pending: VecDeque::new(),
        }
    }

    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Height of the laid-out content: the lowest element bottom edge.
    pub fn content_height(&self) -> u32 {
        fn lowest(el: &Element) -> u32 {
            el.content
                .children()
                .iter()
                .map(lowest)
                .fold(el.rect.bottom(), u32::max)
        }
        lowest(&self.root)
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> u32 {
        self.content_height().saturating_sub(self.height)
    }

    pub fn last_scroll(&self) -> Option<ScrollRecord> {
        self.last_scroll
    }

    /// Change the viewport size and raise a resize event.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pending.push_back(Event::Resize { width, height });
        let clamped = self.scroll_y.min(self.max_scroll());
        if clamped != self.scroll_y {
            self.scroll_y = clamped;
            self.pending.push_back(Event::Scroll { offset: clamped });
        }
    }
}

impl Surface for Document {
    fn root(&self) -> &Element {
        &self.root
    }

    fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        element::find_element_mut(&mut self.root, id)
    }

    fn viewport(&self) -> Rect {
        Rect::new(0, self.scroll_y, self.width, self.height)
    }

    fn scroll_to(&mut self, top: u32, behavior: ScrollBehavior) {
        let top = top.min(self.max_scroll());
        self.last_scroll = Some(ScrollRecord { top, behavior });
        if top != self.scroll_y {
            trace!("scroll {} -> {} ({:?})", self.scroll_y, top, behavior);
            self.scroll_y = top;
            self.pending.push_back(Event::Scroll { offset: top });
        }
    }

    fn take_events(&mut self) -> Vec<Event> {
        self.pending.drain(..).collect()
    }
}
