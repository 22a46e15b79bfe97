//! The rendering surface page behaviour runs against.
//!
//! Components never touch a global document. They receive something that
//! implements [`Surface`] and address elements by id. Only the required
//! methods touch storage; everything else is built on top of them, so a fake
//! surface for tests needs just a tree and a viewport.

use crate::element::{self, Element, Tag};
use crate::error::SurfaceError;
use crate::event::{Event, ScrollBehavior, ScrollBlock};
use crate::layout::Rect;
use crate::types::{Color, Display};

pub trait Surface {
    /// Root of the tree (the `<body>`).
    fn root(&self) -> &Element;

    fn element_mut(&mut self, id: &str) -> Option<&mut Element>;

    /// The visible part of the page in page coordinates.
    fn viewport(&self) -> Rect;

    /// Scroll the window so that its top edge sits at `top`.
    fn scroll_to(&mut self, top: u32, behavior: ScrollBehavior);

    /// Drain events the surface raised on its own (scrolls, resizes).
    fn take_events(&mut self) -> Vec<Event>;

    fn element(&self, id: &str) -> Option<&Element> {
        element::find_element(self.root(), id)
    }

    fn exists(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn body_id(&self) -> String {
        self.root().id.clone()
    }

    fn scroll_offset(&self) -> u32 {
        self.viewport().y
    }

    /// Scroll so that `id` is placed per `block`.
    fn scroll_into_view(
        &mut self,
        id: &str,
        behavior: ScrollBehavior,
        block: ScrollBlock,
    ) -> Result<(), SurfaceError> {
        let rect = self.try_element(id)?.rect;
        let height = self.viewport().height;
        let top = match block {
            ScrollBlock::Start => rect.y,
            ScrollBlock::Center => rect.center_y().saturating_sub(height / 2),
            ScrollBlock::End => rect.bottom().saturating_sub(height),
        };
        self.scroll_to(top, behavior);
        Ok(())
    }

    fn try_element(&self, id: &str) -> Result<&Element, SurfaceError> {
        self.element(id)
            .ok_or_else(|| SurfaceError::NotFound(id.to_string()))
    }

    fn try_element_mut(&mut self, id: &str) -> Result<&mut Element, SurfaceError> {
        self.element_mut(id)
            .ok_or_else(|| SurfaceError::NotFound(id.to_string()))
    }

    /// IDs of elements carrying `class`, in document order.
    fn query_class(&self, class: &str) -> Vec<String> {
        self.query_within(&self.body_id(), &|el| el.has_class(class))
    }

    /// First element carrying `class`.
    fn query_first_class(&self, class: &str) -> Option<String> {
        self.query_class(class).into_iter().next()
    }

    /// IDs of descendants of `root_id` matching `predicate`. Empty when
    /// `root_id` does not exist.
    fn query_within(&self, root_id: &str, predicate: &dyn Fn(&Element) -> bool) -> Vec<String> {
        match self.element(root_id) {
            Some(root) => element::descendants(root, predicate)
                .into_iter()
                .map(|el| el.id.clone())
                .collect(),
            None => Vec::new(),
        }
    }

    /// First direct or nested child of `parent_id` with the given tag.
    fn child_by_tag(&self, parent_id: &str, tag: Tag) -> Option<String> {
        self.query_within(parent_id, &|el| el.tag == tag)
            .into_iter()
            .next()
    }

    /// Event propagation path: target first, then ancestors up to the body.
    fn ancestry(&self, id: &str) -> Vec<String> {
        element::ancestry(self.root(), id).unwrap_or_default()
    }

    fn markup(&self, id: &str) -> Option<String> {
        self.element(id).map(|el| el.markup().to_string())
    }

    /// Replace the inner markup (`innerHTML` / `textContent`).
    fn set_markup(&mut self, id: &str, markup: &str) -> Result<(), SurfaceError> {
        let el = self.try_element_mut(id)?;
        el.content = element::Content::Text(markup.to_string());
        Ok(())
    }

    fn value(&self, id: &str) -> Option<String> {
        self.element(id).map(|el| el.value.clone())
    }

    fn set_value(&mut self, id: &str, value: &str) -> Result<(), SurfaceError> {
        let el = self.try_element_mut(id)?;
        if !el.tag.is_text_control() {
            return Err(SurfaceError::NotAControl {
                id: id.to_string(),
                tag: el.tag.as_str(),
            });
        }
        el.value = value.to_string();
        Ok(())
    }

    fn set_display(&mut self, id: &str, display: Display) -> Result<(), SurfaceError> {
        self.try_element_mut(id)?.style.display = Some(display);
        Ok(())
    }

    fn set_border_color(&mut self, id: &str, color: Color) -> Result<(), SurfaceError> {
        self.try_element_mut(id)?.style.border_color = Some(color);
        Ok(())
    }

    fn set_background(&mut self, id: &str, color: Color) -> Result<(), SurfaceError> {
        self.try_element_mut(id)?.style.background = Some(color);
        Ok(())
    }

    fn set_disabled(&mut self, id: &str, disabled: bool) -> Result<(), SurfaceError> {
        self.try_element_mut(id)?.disabled = disabled;
        Ok(())
    }

    fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.element(id)
            .and_then(|el| el.attribute(name))
            .map(str::to_owned)
    }

    fn has_attribute(&self, id: &str, name: &str) -> bool {
        self.attribute(id, name).is_some()
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> Result<(), SurfaceError> {
        self.try_element_mut(id)?
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove_attribute(&mut self, id: &str, name: &str) -> Result<(), SurfaceError> {
        self.try_element_mut(id)?.attributes.remove(name);
        Ok(())
    }

    fn set_class_name(&mut self, id: &str, class_name: &str) -> Result<(), SurfaceError> {
        self.try_element_mut(id)?.set_class_name(class_name);
        Ok(())
    }

    /// Change an element's id. Fails if `new_id` is already taken.
    fn set_id(&mut self, id: &str, new_id: &str) -> Result<(), SurfaceError> {
        if id != new_id && self.exists(new_id) {
            return Err(SurfaceError::DuplicateId(new_id.to_string()));
        }
        self.try_element_mut(id)?.id = new_id.to_string();
        Ok(())
    }
}
