/// Events delivered to page listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Pointer activation of an element.
    Click { target: String },
    /// Form submission, targeted at the form element.
    Submit { target: String },
    /// The user edited a text control; `value` is its new content.
    Input { target: String, value: String },
    /// Element gained focus
    Focus { target: String },
    /// Element lost focus
    Blur { target: String },
    /// Window scrolled to a new vertical offset.
    Scroll { offset: u32 },
    /// Viewport resized
    Resize { width: u32, height: u32 },
}

/// Event type, used as the subscription key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Submit,
    Input,
    Focus,
    Blur,
    Scroll,
    Resize,
}

/// What a listener is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    Window,
    Element(String),
}

impl Target {
    pub fn element(id: impl Into<String>) -> Self {
        Self::Element(id.into())
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Window => None,
            Self::Element(id) => Some(id),
        }
    }
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: target.into(),
        }
    }

    pub fn submit(target: impl Into<String>) -> Self {
        Self::Submit {
            target: target.into(),
        }
    }

    pub fn input(target: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Input {
            target: target.into(),
            value: value.into(),
        }
    }

    pub fn blur(target: impl Into<String>) -> Self {
        Self::Blur {
            target: target.into(),
        }
    }

    pub fn focus(target: impl Into<String>) -> Self {
        Self::Focus {
            target: target.into(),
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::Click { .. } => EventKind::Click,
            Self::Submit { .. } => EventKind::Submit,
            Self::Input { .. } => EventKind::Input,
            Self::Focus { .. } => EventKind::Focus,
            Self::Blur { .. } => EventKind::Blur,
            Self::Scroll { .. } => EventKind::Scroll,
            Self::Resize { .. } => EventKind::Resize,
        }
    }

    pub fn target(&self) -> Target {
        match self {
            Self::Click { target }
            | Self::Submit { target }
            | Self::Input { target, .. }
            | Self::Focus { target }
            | Self::Blur { target } => Target::Element(target.clone()),
            Self::Scroll { .. } | Self::Resize { .. } => Target::Window,
        }
    }

    /// Whether the event propagates from its target to the ancestors.
    /// Focus and blur do not bubble.
    pub fn bubbles(&self) -> bool {
        matches!(
            self,
            Self::Click { .. } | Self::Submit { .. } | Self::Input { .. }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Smooth,
}

/// Vertical alignment for `scroll_into_view`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBlock {
    #[default]
    Start,
    Center,
    End,
}
