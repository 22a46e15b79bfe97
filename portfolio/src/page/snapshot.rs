use std::fmt;
use std::time::Duration;

use pagedom::{Color, Surface};

use super::Page;
use crate::form::{SUCCESS_ID, SubmissionStatus};
use crate::theme::Theme;
use crate::validation::Field;

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSnapshot {
    pub field: Field,
    pub value: String,
    /// Inline error text, if its container is showing.
    pub error: Option<String>,
}

/// What a visitor would currently see.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSnapshot {
    pub now: Duration,
    pub theme: Option<Theme>,
    pub scroll_offset: u32,
    pub navbar_background: Option<Color>,
    pub fields: Vec<FieldSnapshot>,
    pub status: Option<SubmissionStatus>,
    pub submit_label: Option<String>,
    pub submit_disabled: bool,
    pub success: Option<String>,
    pub headline: Option<String>,
    pub pending_reveals: usize,
}

impl PageSnapshot {
    pub(super) fn capture<S: Surface>(page: &Page<S>) -> Self {
        let surface = page.surface();

        let shown_markup = |id: &str| {
            surface
                .element(id)
                .filter(|el| el.style.is_block())
                .map(|el| el.markup().to_string())
        };

        let fields = Field::ALL
            .into_iter()
            .map(|field| FieldSnapshot {
                field,
                value: surface.value(field.name()).unwrap_or_default(),
                error: shown_markup(&field.error_id()),
            })
            .collect();

        let submit = page.form().and_then(|form| form.submit_control(surface));

        Self {
            now: page.now(),
            theme: page.theme().map(|t| t.theme()),
            scroll_offset: surface.scroll_offset(),
            navbar_background: page
                .navbar()
                .and_then(|n| n.navbar_id())
                .and_then(|id| surface.element(id))
                .and_then(|el| el.style.background.clone()),
            fields,
            status: page.form().map(|f| f.state().status()),
            submit_label: submit.as_deref().and_then(|id| surface.markup(id)),
            submit_disabled: submit
                .as_deref()
                .and_then(|id| surface.element(id))
                .is_some_and(|el| el.disabled),
            success: shown_markup(SUCCESS_ID),
            headline: page
                .typing()
                .and_then(|t| surface.markup(t.element_id())),
            pending_reveals: page.reveal().map_or(0, |r| r.pending().len()),
        }
    }
}

impl fmt::Display for PageSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "t={}ms scroll={}", self.now.as_millis(), self.scroll_offset)?;
        if let Some(theme) = self.theme {
            writeln!(f, "  theme: {theme}")?;
        }
        if let Some(color) = &self.navbar_background {
            writeln!(f, "  navbar: {}", color.to_css())?;
        }
        if let Some(headline) = &self.headline {
            writeln!(f, "  headline: {headline:?}")?;
        }
        for field in &self.fields {
            write!(f, "  {}: {:?}", field.field, field.value)?;
            if let Some(error) = &field.error {
                write!(f, "  [{error}]")?;
            }
            writeln!(f)?;
        }
        if let Some(status) = self.status {
            writeln!(f, "  status: {status:?}")?;
        }
        if let Some(label) = &self.submit_label {
            let state = if self.submit_disabled { "disabled" } else { "enabled" };
            writeln!(f, "  submit: {label:?} ({state})")?;
        }
        if let Some(success) = &self.success {
            writeln!(f, "  success: {success}")?;
        }
        write!(f, "  unrevealed cards: {}", self.pending_reveals)
    }
}
