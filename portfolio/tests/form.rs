use std::time::Duration;

use pagedom::{
    Color, Document, Element, Event, Rect, ScrollBehavior, ScrollRecord, Surface, Tag,
};
use portfolio::form::{LOADING_LABEL, SUCCESS_ID, SUCCESS_MESSAGE, SubmissionStatus};
use portfolio::site::portfolio_document;
use portfolio::validation::Field;
use portfolio::{Page, PageConfig};

const SEND_LABEL: &str = r#"<i class="fas fa-paper-plane"></i> Send Message"#;

fn mounted() -> Page<Document> {
    let mut page = Page::new(portfolio_document(), PageConfig::default().without_typing());
    page.mount();
    page
}

fn fill(page: &mut Page<Document>, name: &str, email: &str, message: &str) {
    page.dispatch(Event::input("name", name));
    page.dispatch(Event::input("email", email));
    page.dispatch(Event::input("message", message));
}

fn submit_button(page: &Page<Document>) -> String {
    page.form()
        .and_then(|form| form.submit_control(page.surface()))
        .expect("site has a submit button")
}

/// Error text for `field`, if its container is showing.
fn shown_error(page: &Page<Document>, field: Field) -> Option<String> {
    page.surface()
        .element(&field.error_id())
        .filter(|el| el.style.is_block())
        .map(|el| el.markup().to_string())
}

fn border(page: &Page<Document>, id: &str) -> Option<Color> {
    page.surface()
        .element(id)
        .and_then(|el| el.style.border_color.clone())
}

fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

// ============================================================================
// Submission accepted
// ============================================================================

#[test]
fn test_valid_submit_enters_submitting() {
    let mut page = mounted();
    fill(&mut page, "Jane Doe", "jane@example.com", "Hello, this is a test message.");

    let prevented = page.dispatch(Event::submit("contact-form"));
    assert!(prevented);

    let button = submit_button(&page);
    let el = page.surface().element(&button).unwrap();
    assert!(el.disabled);
    assert_eq!(el.markup(), LOADING_LABEL);

    let form = page.form().unwrap();
    assert_eq!(form.state().status(), SubmissionStatus::Submitting);
    assert!(form.pending_submission().is_some());
    assert_eq!(page.next_deadline(), Some(ms(2000)));
    for field in Field::ALL {
        assert_eq!(shown_error(&page, field), None);
    }
}

#[test]
fn test_submission_completes_after_delay() {
    let mut page = mounted();
    fill(&mut page, "Jane Doe", "jane@example.com", "Hello, this is a test message.");
    page.dispatch(Event::submit("contact-form"));
    let button = submit_button(&page);

    page.advance(ms(1999));
    assert!(page.surface().element(&button).unwrap().disabled);
    assert_eq!(page.surface().value("name").as_deref(), Some("Jane Doe"));

    page.advance(ms(1));
    let el = page.surface().element(&button).unwrap();
    assert!(!el.disabled);
    assert_eq!(el.markup(), SEND_LABEL);

    let success = page.surface().element(SUCCESS_ID).unwrap();
    assert!(success.style.is_block());
    assert_eq!(success.markup(), SUCCESS_MESSAGE);

    for field in Field::ALL {
        assert_eq!(page.surface().value(field.name()).as_deref(), Some(""));
    }
    let form = page.form().unwrap();
    assert_eq!(form.state().status(), SubmissionStatus::Idle);
    assert!(form.pending_submission().is_none());
}

#[test]
fn test_success_message_hides_after_display_time() {
    let mut page = mounted();
    fill(&mut page, "Jane Doe", "jane@example.com", "Hello, this is a test message.");
    page.dispatch(Event::submit("contact-form"));

    page.advance(ms(2000));
    page.advance(ms(4999));
    assert!(page.surface().element(SUCCESS_ID).unwrap().style.is_block());

    page.advance(ms(1));
    assert!(!page.surface().element(SUCCESS_ID).unwrap().is_displayed());
    assert_eq!(page.pending_tasks(), 0);
}

#[test]
fn test_configured_delays() {
    let config = PageConfig::default()
        .without_typing()
        .submission_delay(ms(10))
        .success_display(ms(20));
    let mut page = Page::new(portfolio_document(), config);
    page.mount();
    fill(&mut page, "Jane Doe", "jane@example.com", "Hello, this is a test message.");
    page.dispatch(Event::submit("contact-form"));

    page.advance(ms(10));
    assert!(page.surface().element(SUCCESS_ID).unwrap().style.is_block());
    page.advance(ms(20));
    assert!(!page.surface().element(SUCCESS_ID).unwrap().is_displayed());
}

#[test]
fn test_submit_while_submitting_is_ignored() {
    let mut page = mounted();
    fill(&mut page, "Jane Doe", "jane@example.com", "Hello, this is a test message.");
    page.dispatch(Event::submit("contact-form"));
    let first = page.form().unwrap().pending_submission();

    // A second submit event still has its navigation suppressed.
    assert!(page.dispatch(Event::submit("contact-form")));
    assert_eq!(page.form().unwrap().pending_submission(), first);
    assert_eq!(page.pending_tasks(), 1);
}

#[test]
fn test_clicking_submit_button_submits_form() {
    let mut page = mounted();
    fill(&mut page, "Jane Doe", "jane@example.com", "Hello, this is a test message.");
    let button = submit_button(&page);

    page.dispatch(Event::click(&button));
    assert_eq!(page.form().unwrap().state().status(), SubmissionStatus::Submitting);

    // The disabled button swallows further clicks.
    page.dispatch(Event::click(&button));
    assert_eq!(page.pending_tasks(), 1);
}

#[test]
fn test_surrounding_whitespace_is_accepted() {
    let mut page = mounted();
    fill(&mut page, "  Jane Doe  ", " jane@example.com ", "   Hello, this is a test message.   ");
    page.dispatch(Event::submit("contact-form"));
    assert_eq!(page.form().unwrap().state().status(), SubmissionStatus::Submitting);
}

// ============================================================================
// Submission rejected
// ============================================================================

#[test]
fn test_invalid_submit_shows_every_error() {
    let mut page = mounted();
    fill(&mut page, "", "bad", "short");

    assert!(page.dispatch(Event::submit("contact-form")));

    assert_eq!(shown_error(&page, Field::Name).as_deref(), Some("Name is required"));
    assert_eq!(
        shown_error(&page, Field::Email).as_deref(),
        Some("Please enter a valid email address")
    );
    assert_eq!(
        shown_error(&page, Field::Message).as_deref(),
        Some("Message must be at least 10 characters long")
    );
    for field in Field::ALL {
        assert_eq!(border(&page, field.name()), Some(Color::rgb(0xff, 0x3b, 0x30)));
    }

    let button = submit_button(&page);
    let el = page.surface().element(&button).unwrap();
    assert!(!el.disabled);
    assert_eq!(el.markup(), SEND_LABEL);
    assert_eq!(page.form().unwrap().state().status(), SubmissionStatus::Idle);
    assert_eq!(page.pending_tasks(), 0);
}

#[test]
fn test_invalid_submit_scrolls_first_error_into_view() {
    let mut page = mounted();
    fill(&mut page, "Jane Doe", "bad", "Hello, this is a test message.");
    page.dispatch(Event::submit("contact-form"));

    // email-error sits at 3492..3512; centred in a 720px viewport
    assert_eq!(
        page.surface().last_scroll(),
        Some(ScrollRecord {
            top: 3142,
            behavior: ScrollBehavior::Smooth
        })
    );
    assert_eq!(page.surface().scroll_offset(), 3142);
}

#[test]
fn test_resubmit_clears_stale_errors() {
    let mut page = mounted();
    fill(&mut page, "", "bad", "short");
    page.dispatch(Event::submit("contact-form"));

    fill(&mut page, "Jane Doe", "jane@example.com", "short");
    page.dispatch(Event::submit("contact-form"));

    assert_eq!(shown_error(&page, Field::Name), None);
    assert_eq!(shown_error(&page, Field::Email), None);
    assert_eq!(
        shown_error(&page, Field::Message).as_deref(),
        Some("Message must be at least 10 characters long")
    );
    assert_eq!(border(&page, "name"), Some(Color::var("--border-color")));
}

#[test]
fn test_name_rules_in_order() {
    let mut page = mounted();
    let cases = [
        ("J", "Name must be at least 2 characters long"),
        ("Jane3", "Name can only contain letters and spaces"),
    ];
    for (value, message) in cases {
        page.dispatch(Event::input("name", value));
        page.dispatch(Event::blur("name"));
        assert_eq!(shown_error(&page, Field::Name).as_deref(), Some(message));
    }

    // No upper bound on names.
    page.dispatch(Event::input("name", "A".repeat(200)));
    page.dispatch(Event::blur("name"));
    assert_eq!(shown_error(&page, Field::Name), None);
}

#[test]
fn test_message_too_long() {
    let mut page = mounted();
    page.dispatch(Event::input("message", "x".repeat(1001)));
    page.dispatch(Event::blur("message"));
    assert_eq!(
        shown_error(&page, Field::Message).as_deref(),
        Some("Message must be less than 1000 characters")
    );

    page.dispatch(Event::input("message", "x".repeat(1000)));
    page.dispatch(Event::blur("message"));
    assert_eq!(shown_error(&page, Field::Message), None);
}

// ============================================================================
// Real-time feedback
// ============================================================================

#[test]
fn test_blur_validates_single_field() {
    let mut page = mounted();
    page.dispatch(Event::blur("email"));

    assert_eq!(shown_error(&page, Field::Email).as_deref(), Some("Email is required"));
    assert_eq!(shown_error(&page, Field::Name), None);
    assert_eq!(shown_error(&page, Field::Message), None);
}

#[test]
fn test_input_hides_error_without_revalidating() {
    let mut page = mounted();
    page.dispatch(Event::blur("name"));
    assert!(shown_error(&page, Field::Name).is_some());

    // Still invalid, but typing hides the message until the next blur.
    page.dispatch(Event::input("name", "J"));
    assert_eq!(shown_error(&page, Field::Name), None);
    assert_eq!(border(&page, "name"), Some(Color::var("--border-color")));
    assert!(!page.form().unwrap().state().is_error_visible(Field::Name));

    page.dispatch(Event::blur("name"));
    assert_eq!(
        shown_error(&page, Field::Name).as_deref(),
        Some("Name must be at least 2 characters long")
    );
}

#[test]
fn test_blur_is_idempotent() {
    let mut page = mounted();
    page.dispatch(Event::input("email", "jane@"));
    page.dispatch(Event::blur("email"));
    let first = (shown_error(&page, Field::Email), border(&page, "email"));
    page.dispatch(Event::blur("email"));
    let second = (shown_error(&page, Field::Email), border(&page, "email"));
    assert_eq!(first, second);
}

#[test]
fn test_valid_blur_clears_previous_error() {
    let mut page = mounted();
    page.dispatch(Event::blur("name"));
    page.dispatch(Event::input("name", "Jane"));
    page.dispatch(Event::blur("name"));

    assert_eq!(shown_error(&page, Field::Name), None);
    let state = page.form().unwrap().state();
    assert!(state.field(Field::Name).is_some_and(|f| f.validity.valid));
}

// ============================================================================
// Missing markup
// ============================================================================

fn bare_form() -> Document {
    let root = Element::body().rect(Rect::new(0, 0, 800, 1200)).child(
        Element::new(Tag::Form)
            .id("contact-form")
            .child(Element::input("name"))
            .child(Element::input("email"))
            .child(Element::textarea("message"))
            .child(Element::submit_button("Send")),
    );
    Document::new(root)
}

#[test]
fn test_missing_error_containers_are_tolerated() {
    let mut page = Page::new(bare_form(), PageConfig::default().without_typing());
    page.mount();

    page.dispatch(Event::blur("name"));
    assert_eq!(border(&page, "name"), Some(Color::rgb(0xff, 0x3b, 0x30)));

    page.dispatch(Event::submit("contact-form"));
    assert_eq!(page.form().unwrap().state().status(), SubmissionStatus::Idle);
}

#[test]
fn test_missing_success_container_still_resets() {
    let mut page = Page::new(bare_form(), PageConfig::default().without_typing());
    page.mount();
    fill(&mut page, "Jane Doe", "jane@example.com", "Hello, this is a test message.");
    page.dispatch(Event::submit("contact-form"));
    page.advance(ms(2000));

    assert_eq!(page.surface().value("name").as_deref(), Some(""));
    assert_eq!(page.form().unwrap().state().status(), SubmissionStatus::Idle);
    assert_eq!(page.pending_tasks(), 0);
}

#[test]
fn test_page_without_form_mounts() {
    let mut page = Page::new(
        Document::new(Element::body()),
        PageConfig::default().without_typing(),
    );
    page.mount();
    assert!(!page.dispatch(Event::submit("contact-form")));
    assert_eq!(page.form().unwrap().state().status(), SubmissionStatus::Idle);
}

#[test]
fn test_disabled_submit_button_does_not_submit() {
    let root = Element::body().child(
        Element::new(Tag::Form)
            .id("contact-form")
            .child(Element::input("name"))
            .child(Element::submit_button("Send").id("send").disabled(true)),
    );
    let mut page = Page::new(Document::new(root), PageConfig::default().without_typing());
    page.mount();

    assert!(!page.dispatch(Event::click("send")));
    assert_eq!(page.surface().markup("send").as_deref(), Some("Send"));
    assert_eq!(page.form().unwrap().state().status(), SubmissionStatus::Idle);
}
