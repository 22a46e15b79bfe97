//! Type-and-delete animation cycling through the hero taglines.

use std::time::Duration;

use log::debug;
use pagedom::Surface;

use crate::config::TypingConfig;
use crate::page::{Context, Task};

#[derive(Debug)]
pub struct TypingAnimation {
    element_id: String,
    texts: Vec<String>,
    speed: Duration,
    end_pause: Duration,
    start_pause: Duration,
    text_index: usize,
    char_index: usize,
    deleting: bool,
}

impl TypingAnimation {
    /// Empty texts are dropped; they would never finish typing.
    pub fn new(element_id: impl Into<String>, config: TypingConfig) -> Self {
        Self {
            element_id: element_id.into(),
            texts: config.texts.into_iter().filter(|t| !t.is_empty()).collect(),
            speed: config.speed,
            end_pause: config.end_pause,
            start_pause: config.start_pause,
            text_index: 0,
            char_index: 0,
            deleting: false,
        }
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn text_index(&self) -> usize {
        self.text_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Type the first character right away. Does nothing without texts or
    /// without the target element.
    pub fn start<S: Surface>(&mut self, cx: &mut Context<'_, S>) {
        if self.texts.is_empty() || !cx.surface().exists(&self.element_id) {
            debug!("typing animation idle");
            return;
        }
        self.tick(cx);
    }

    /// Type or delete one character and schedule the next tick.
    pub fn tick<S: Surface>(&mut self, cx: &mut Context<'_, S>) {
        let Some(current) = self.texts.get(self.text_index) else {
            return;
        };
        let len = current.chars().count();

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index += 1;
        }
        let shown: String = current.chars().take(self.char_index).collect();
        let _ = cx.surface_mut().set_markup(&self.element_id, &shown);

        let mut delay = if self.deleting { self.speed / 2 } else { self.speed };

        if !self.deleting && self.char_index == len {
            delay = self.end_pause;
            self.deleting = true;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.text_index = (self.text_index + 1) % self.texts.len();
            delay = self.start_pause;
        }

        cx.schedule(delay, Task::Typing);
    }
}
