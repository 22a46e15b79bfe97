//! Interactive behaviour for the portfolio page.
//!
//! Every component runs against an injected [`pagedom::Surface`] and is
//! driven by a [`Page`], which routes surface events to subscribed
//! components and fires deferred tasks from a virtual clock.

pub mod config;
pub mod form;
pub mod navbar;
pub mod page;
pub mod prefs;
pub mod reveal;
pub mod runtime;
pub mod site;
pub mod smooth_scroll;
pub mod theme;
pub mod timers;
pub mod typing;
pub mod validation;

pub use config::{ConfigError, PageConfig};
pub use page::{Context, Listener, Page, PageSnapshot, Task};
pub use runtime::{Command, Runtime};

pub mod prelude {
    pub use crate::config::PageConfig;
    pub use crate::form::{FormState, FormValidator, SubmissionStatus};
    pub use crate::page::{Page, PageSnapshot};
    pub use crate::prefs::{JsonFileBackend, MemoryBackend, PreferenceBackend};
    pub use crate::runtime::{Command, Runtime};
    pub use crate::theme::Theme;
    pub use crate::validation::{Field, FieldError, ValidationErrorKind, ValidationResult};

    pub use pagedom::{Document, Event, Surface};
}
