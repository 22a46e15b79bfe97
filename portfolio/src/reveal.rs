//! Fade-and-rise entrance for cards as they scroll into view.

use log::debug;
use pagedom::{EventKind, RootMargin, Surface, Target, is_intersecting};

use crate::config::RevealConfig;
use crate::page::{Context, Listener};

const HIDDEN_OFFSET: f32 = 20.0;
const TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

#[derive(Debug)]
pub struct RevealAnimation {
    config: RevealConfig,
    /// Elements still waiting to be revealed, in document order.
    observed: Vec<String>,
}

impl RevealAnimation {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            observed: Vec::new(),
        }
    }

    /// Elements not yet revealed.
    pub fn pending(&self) -> &[String] {
        &self.observed
    }

    /// Hide every matching element, then reveal whatever is already on
    /// screen.
    pub fn mount<S: Surface>(&mut self, cx: &mut Context<'_, S>) {
        let classes = &self.config.classes;
        let targets = cx
            .surface()
            .query_within(&cx.surface().body_id(), &|el| {
                classes.iter().any(|class| el.has_class(class))
            });

        for id in &targets {
            if let Some(el) = cx.surface_mut().element_mut(id) {
                el.style.opacity = Some(0.0);
                el.style.translate_y = Some(HIDDEN_OFFSET);
                el.style.transition = Some(TRANSITION.to_string());
            }
        }
        debug!("observing {} element(s) for reveal", targets.len());
        self.observed = targets;

        cx.listen(Target::Window, EventKind::Scroll, Listener::Reveal);
        cx.listen(Target::Window, EventKind::Resize, Listener::Reveal);
        self.check(cx);
    }

    /// Reveal every observed element touching the margin-shrunk viewport.
    /// Any overlap is enough, however small.
    pub fn check<S: Surface>(&mut self, cx: &mut Context<'_, S>) {
        let viewport = cx.surface().viewport();
        let margin = RootMargin::bottom(self.config.bottom_margin);

        let mut revealed = Vec::new();
        self.observed.retain(|id| {
            let Some(el) = cx.surface().element(id) else {
                return false;
            };
            if is_intersecting(el.rect, viewport, margin) {
                revealed.push(id.clone());
                false
            } else {
                true
            }
        });

        for id in revealed {
            if let Some(el) = cx.surface_mut().element_mut(&id) {
                el.style.opacity = Some(1.0);
                el.style.translate_y = Some(0.0);
            }
        }
    }
}
