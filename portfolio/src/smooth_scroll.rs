//! In-page navigation links that glide to their section instead of jumping.

use log::trace;
use pagedom::{Element, Event, EventKind, ScrollBehavior, Surface, Tag, Target};

use crate::config::NavigationConfig;
use crate::page::{Context, Listener};

fn is_hash_link(el: &Element) -> bool {
    el.tag == Tag::Anchor && el.attribute("href").is_some_and(|href| href.starts_with('#'))
}

#[derive(Debug)]
pub struct SmoothScroll {
    config: NavigationConfig,
}

impl SmoothScroll {
    pub fn new(config: NavigationConfig) -> Self {
        Self { config }
    }

    /// Subscribe to clicks on every `#`-link inside the navigation lists.
    pub fn mount<S: Surface>(&self, cx: &mut Context<'_, S>) {
        let lists = cx.surface().query_class(&self.config.links_class);
        for list in lists {
            let links = cx.surface().query_within(&list, &is_hash_link);
            for link in links {
                cx.listen(Target::element(&link), EventKind::Click, Listener::SmoothScroll);
            }
        }
    }

    /// `link` is the anchor the listener was registered on.
    pub fn handle_event<S: Surface>(&self, event: &Event, link: &Target, cx: &mut Context<'_, S>) {
        if !matches!(event, Event::Click { .. }) {
            return;
        }
        cx.prevent_default();

        let Some(href) = link.id().and_then(|id| cx.surface().attribute(id, "href")) else {
            return;
        };
        let target_id = href.trim_start_matches('#');
        let Some(target) = cx.surface().element(target_id) else {
            trace!("link target '{href}' not on page");
            return;
        };

        let top = target.rect.top().saturating_sub(self.config.offset);
        cx.surface_mut().scroll_to(top, ScrollBehavior::Smooth);
    }
}
