use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::layout::Rect;
use crate::types::Style;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Element tag names the page uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Body,
    Nav,
    Section,
    Div,
    Heading,
    Paragraph,
    Anchor,
    Icon,
    Form,
    Input,
    TextArea,
    Button,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Body => "body",
            Tag::Nav => "nav",
            Tag::Section => "section",
            Tag::Div => "div",
            Tag::Heading => "h1",
            Tag::Paragraph => "p",
            Tag::Anchor => "a",
            Tag::Icon => "i",
            Tag::Form => "form",
            Tag::Input => "input",
            Tag::TextArea => "textarea",
            Tag::Button => "button",
        }
    }

    /// Controls that carry a user-editable value.
    pub fn is_text_control(self) -> bool {
        matches!(self, Tag::Input | Tag::TextArea)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,
    pub classes: Vec<String>,
    pub attributes: HashMap<String, String>,

    // Content
    pub content: Content,
    /// Current value of an input or textarea.
    pub value: String,

    // Layout
    pub rect: Rect,

    // Visual
    pub style: Style,

    // State
    pub disabled: bool,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            id: generate_id(tag.as_str()),
            tag,
            classes: Vec::new(),
            attributes: HashMap::new(),
            content: Content::None,
            value: String::new(),
            rect: Rect::default(),
            style: Style::default(),
            disabled: false,
        }
    }

    pub fn body() -> Self {
        Self::new(Tag::Body).id("body")
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn text(tag: Tag, markup: impl Into<String>) -> Self {
        Self {
            content: Content::Text(markup.into()),
            ..Self::new(tag)
        }
    }

    /// `<a href=...>` link.
    pub fn anchor(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self::text(Tag::Anchor, label).attr("href", href)
    }

    /// `<i class=...>` icon glyph.
    pub fn icon(class_name: &str) -> Self {
        Self::new(Tag::Icon).class_name(class_name)
    }

    /// `<input>` whose id and `name` attribute are both `name`.
    pub fn input(name: &str) -> Self {
        Self::new(Tag::Input).id(name).attr("name", name)
    }

    /// `<textarea>` whose id and `name` attribute are both `name`.
    pub fn textarea(name: &str) -> Self {
        Self::new(Tag::TextArea).id(name).attr("name", name)
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::text(Tag::Button, label).attr("type", "button")
    }

    pub fn submit_button(label: impl Into<String>) -> Self {
        Self::text(Tag::Button, label).attr("type", "submit")
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Replace the class list with a whitespace-separated `className` string.
    pub fn class_name(mut self, class_name: &str) -> Self {
        self.set_class_name(class_name);
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    // Content
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        for child in children {
            self = self.child(child);
        }
        self
    }

    // Layout
    pub fn rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    // Queries

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Inner markup for leaf elements; empty for containers.
    pub fn markup(&self) -> &str {
        match &self.content {
            Content::Text(markup) => markup,
            _ => "",
        }
    }

    pub fn set_class_name(&mut self, class_name: &str) {
        self.classes = class_name.split_whitespace().map(str::to_owned).collect();
    }

    pub fn class_list(&self) -> String {
        self.classes.join(" ")
    }

    /// Whether this element currently renders. Only an inline `display: none`
    /// hides it; the page stylesheet is not modelled.
    pub fn is_displayed(&self) -> bool {
        self.style.display != Some(crate::types::Display::None)
    }
}
