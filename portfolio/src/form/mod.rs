//! Contact form validation and simulated submission.
//!
//! The validator binds to a form by id. Blur re-validates one field, input
//! only hides that field's error, and submit validates all three fields
//! together before handing off to a timed, always-successful submission.

mod state;

pub use state::{FieldState, FormState, SubmissionStatus, Validity};

use log::{debug, info, trace, warn};
use pagedom::{Color, Display, Element, Event, EventKind, ScrollBehavior, ScrollBlock, Surface, Tag, Target};

use crate::config::FormConfig;
use crate::page::{Context, Listener, Task};
use crate::timers::TimerHandle;
use crate::validation::{Field, FieldError, ValidationResult};

/// Label shown on the submit control while a submission is in flight.
pub const LOADING_LABEL: &str = r#"<i class="fas fa-spinner fa-spin"></i> Sending..."#;

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

/// Id of the container the success message is written to.
pub const SUCCESS_ID: &str = "form-success";

const ERROR_BORDER: Color = Color::Rgb {
    r: 0xff,
    g: 0x3b,
    b: 0x30,
};

fn default_border() -> Color {
    Color::var("--border-color")
}

fn is_text_control(el: &Element) -> bool {
    el.tag.is_text_control()
}

fn is_error_container(el: &Element) -> bool {
    el.has_class("error-message")
}

/// The values handed to the simulated submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Deferred work the validator schedules on the page clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormTask {
    CompleteSubmission(Submission),
    HideSuccess,
}

#[derive(Debug)]
pub struct FormValidator {
    form_id: String,
    config: FormConfig,
    state: FormState,
    /// Submit control markup saved while the loading label is shown.
    original_label: Option<String>,
    pending: Option<TimerHandle>,
}

impl FormValidator {
    pub fn new(config: FormConfig) -> Self {
        Self {
            form_id: config.form_id.clone(),
            config,
            state: FormState::new(),
            original_label: None,
            pending: None,
        }
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Handle of the submission timer, while one is pending.
    pub fn pending_submission(&self) -> Option<TimerHandle> {
        self.pending
    }

    /// Subscribe to submit on the form and to blur/input on every text
    /// control inside it. A missing form leaves the validator inert.
    pub fn mount<S: Surface>(&mut self, cx: &mut Context<'_, S>) {
        if !cx.surface().exists(&self.form_id) {
            warn!("form '{}' not found, validation disabled", self.form_id);
            return;
        }

        cx.listen(Target::element(&self.form_id), EventKind::Submit, Listener::Form);

        let controls = cx.surface().query_within(&self.form_id, &is_text_control);
        for id in controls {
            cx.listen(Target::element(&id), EventKind::Blur, Listener::Form);
            cx.listen(Target::element(&id), EventKind::Input, Listener::Form);
        }
        debug!("form '{}' bound", self.form_id);
    }

    pub fn handle_event<S: Surface>(&mut self, event: &Event, cx: &mut Context<'_, S>) {
        match event {
            Event::Submit { .. } => {
                self.handle_submit(cx);
            }
            Event::Blur { target } => {
                self.validate_field(target, cx);
            }
            Event::Input { target, .. } => self.clear_error(target, cx),
            _ => {}
        }
    }

    pub fn handle_task<S: Surface>(&mut self, task: FormTask, cx: &mut Context<'_, S>) {
        match task {
            FormTask::CompleteSubmission(submission) => self.complete_submission(submission, cx),
            FormTask::HideSuccess => {
                if cx.surface_mut().set_display(SUCCESS_ID, Display::None).is_err() {
                    trace!("success container missing");
                }
            }
        }
    }

    /// Validate one control, updating its inline error. Returns validity.
    pub fn validate_field<S: Surface>(&mut self, field_id: &str, cx: &mut Context<'_, S>) -> bool {
        self.check_field(field_id, cx).is_ok()
    }

    fn check_field<S: Surface>(
        &mut self,
        field_id: &str,
        cx: &mut Context<'_, S>,
    ) -> Result<(), FieldError> {
        let name = field_name(cx.surface(), field_id);
        // A control that has gone missing reads as empty.
        let value = cx.surface().value(field_id).unwrap_or_default();

        self.clear_error(field_id, cx);

        let Some(field) = Field::from_name(&name) else {
            trace!("no rules for field '{name}'");
            return Ok(());
        };

        let result = field.validate(&value);
        if let Err(e) = &result {
            self.show_error(field_id, &name, &e.message, cx);
        }
        self.state.record(field, &value, &result);
        result
    }

    fn show_error<S: Surface>(
        &mut self,
        field_id: &str,
        name: &str,
        message: &str,
        cx: &mut Context<'_, S>,
    ) {
        let error_id = format!("{name}-error");
        let surface = cx.surface_mut();
        if surface.exists(&error_id) {
            let _ = surface.set_markup(&error_id, message);
            let _ = surface.set_display(&error_id, Display::Block);
        } else {
            debug!("no error container '{error_id}', dropping: {message}");
        }
        let _ = surface.set_border_color(field_id, ERROR_BORDER);
    }

    /// Hide a control's inline error without re-validating.
    pub fn clear_error<S: Surface>(&mut self, field_id: &str, cx: &mut Context<'_, S>) {
        let name = field_name(cx.surface(), field_id);
        let surface = cx.surface_mut();
        let _ = surface.set_display(&format!("{name}-error"), Display::None);
        let _ = surface.set_border_color(field_id, default_border());

        if let Some(field) = Field::from_name(&name) {
            self.state.hide_error(field);
        }
    }

    fn clear_all_errors<S: Surface>(&mut self, cx: &mut Context<'_, S>) {
        let containers = cx.surface().query_within(&self.form_id, &is_error_container);
        let controls = cx.surface().query_within(&self.form_id, &is_text_control);
        let surface = cx.surface_mut();
        for id in containers {
            let _ = surface.set_display(&id, Display::None);
        }
        for id in controls {
            let _ = surface.set_border_color(&id, default_border());
        }
        self.state.hide_all_errors();
    }

    /// Validate every field and submit if all pass; otherwise scroll the
    /// first visible error into view. Returns None when a submission is
    /// already in flight and the submit was ignored.
    pub fn handle_submit<S: Surface>(
        &mut self,
        cx: &mut Context<'_, S>,
    ) -> Option<ValidationResult> {
        cx.prevent_default();

        if self.state.status() != SubmissionStatus::Idle {
            debug!("submit ignored, submission already {:?}", self.state.status());
            return None;
        }

        self.clear_all_errors(cx);
        let _ = cx.surface_mut().set_display(SUCCESS_ID, Display::None);

        let read = |field: Field| cx.surface().value(field.name()).unwrap_or_default();
        let submission = Submission {
            name: read(Field::Name),
            email: read(Field::Email),
            message: read(Field::Message),
        };

        // Every field is checked so all errors show at once.
        let outcomes: Vec<_> = Field::ALL
            .iter()
            .map(|field| self.check_field(field.name(), cx))
            .collect();
        let result = ValidationResult::collect(outcomes);

        if result.is_valid() {
            self.simulate_submission(submission, cx);
        } else {
            debug!("submit rejected with {} error(s)", result.errors().len());
            self.scroll_to_first_error(cx);
        }
        Some(result)
    }

    fn scroll_to_first_error<S: Surface>(&self, cx: &mut Context<'_, S>) {
        let first = cx
            .surface()
            .query_within(&self.form_id, &|el| is_error_container(el) && el.style.is_block())
            .into_iter()
            .next();
        if let Some(id) = first {
            let _ = cx
                .surface_mut()
                .scroll_into_view(&id, ScrollBehavior::Smooth, ScrollBlock::Center);
        }
    }

    /// Id of the form's `type="submit"` button.
    pub fn submit_control<S: Surface>(&self, surface: &S) -> Option<String> {
        surface
            .query_within(&self.form_id, &|el| {
                el.tag == Tag::Button && el.attribute("type") == Some("submit")
            })
            .into_iter()
            .next()
    }

    /// Enter Submitting: lock the submit control and start the timer.
    /// Does nothing unless the form is Idle.
    pub fn simulate_submission<S: Surface>(
        &mut self,
        submission: Submission,
        cx: &mut Context<'_, S>,
    ) -> Option<TimerHandle> {
        if !self.state.transition(SubmissionStatus::Submitting) {
            return None;
        }

        if let Some(button) = self.submit_control(cx.surface()) {
            self.original_label = cx.surface().markup(&button);
            let surface = cx.surface_mut();
            let _ = surface.set_markup(&button, LOADING_LABEL);
            let _ = surface.set_disabled(&button, true);
        }

        let handle = cx.schedule(
            self.config.submission_delay,
            Task::Form(FormTask::CompleteSubmission(submission)),
        );
        self.pending = Some(handle);
        Some(handle)
    }

    fn complete_submission<S: Surface>(&mut self, submission: Submission, cx: &mut Context<'_, S>) {
        self.pending = None;

        if let Some(button) = self.submit_control(cx.surface()) {
            let surface = cx.surface_mut();
            if let Some(label) = self.original_label.take() {
                let _ = surface.set_markup(&button, &label);
            }
            let _ = surface.set_disabled(&button, false);
        }

        self.show_success(cx);
        self.reset(cx);

        info!(
            "form submitted: name={:?} email={:?} message={} chars",
            submission.name,
            submission.email,
            submission.message.chars().count()
        );

        self.state.transition(SubmissionStatus::Success);
        self.state.transition(SubmissionStatus::Idle);
    }

    fn show_success<S: Surface>(&mut self, cx: &mut Context<'_, S>) {
        let surface = cx.surface_mut();
        if !surface.exists(SUCCESS_ID) {
            debug!("no success container, message dropped");
            return;
        }
        let _ = surface.set_markup(SUCCESS_ID, SUCCESS_MESSAGE);
        let _ = surface.set_display(SUCCESS_ID, Display::Block);
        cx.schedule(self.config.success_display, Task::Form(FormTask::HideSuccess));
    }

    /// Empty every text control in the form.
    fn reset<S: Surface>(&mut self, cx: &mut Context<'_, S>) {
        let controls = cx.surface().query_within(&self.form_id, &is_text_control);
        for id in controls {
            let _ = cx.surface_mut().set_value(&id, "");
        }
        self.state.clear_fields();
    }
}

/// The control's `name` attribute, falling back to its id.
fn field_name<S: Surface>(surface: &S, field_id: &str) -> String {
    surface
        .attribute(field_id, "name")
        .unwrap_or_else(|| field_id.to_string())
}
