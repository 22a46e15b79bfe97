use pagedom::{
    Color, Display, Document, Element, Event, Rect, ScrollBehavior, ScrollBlock, ScrollRecord,
    Surface, SurfaceError, Tag,
};

fn sample() -> Document {
    let root = Element::body()
        .rect(Rect::new(0, 0, 800, 2000))
        .child(
            Element::new(Tag::Nav)
                .id("nav")
                .class("nav")
                .rect(Rect::new(0, 0, 800, 60))
                .child(
                    Element::div()
                        .id("links")
                        .class("nav-links")
                        .child(Element::anchor("#about", "About").id("to-about")),
                ),
        )
        .child(
            Element::new(Tag::Form)
                .id("form")
                .child(Element::input("name"))
                .child(Element::div().id("name-error").class("error-message"))
                .child(Element::submit_button("Send").id("send")),
        )
        .child(
            Element::new(Tag::Section)
                .id("about")
                .class("card")
                .rect(Rect::new(0, 1000, 800, 400)),
        );
    Document::new(root).with_viewport(800, 600)
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_element_lookup_by_id() {
    let doc = sample();
    assert_eq!(doc.element("name").map(|el| el.tag), Some(Tag::Input));
    assert!(doc.exists("send"));
    assert!(!doc.exists("missing"));
    assert_eq!(doc.body_id(), "body");
}

#[test]
fn test_ancestry_is_innermost_first() {
    let doc = sample();
    assert_eq!(doc.ancestry("to-about"), vec!["to-about", "links", "nav", "body"]);
    assert!(doc.ancestry("missing").is_empty());
}

#[test]
fn test_query_class_and_within() {
    let doc = sample();
    assert_eq!(doc.query_class("card"), vec!["about".to_string()]);
    assert_eq!(doc.query_first_class("nav-links"), Some("links".to_string()));

    let controls = doc.query_within("form", &|el| el.tag.is_text_control());
    assert_eq!(controls, vec!["name".to_string()]);
    assert!(doc.query_within("missing", &|_| true).is_empty());
}

#[test]
fn test_child_by_tag() {
    let doc = sample();
    assert_eq!(doc.child_by_tag("nav", Tag::Anchor), Some("to-about".to_string()));
    assert_eq!(doc.child_by_tag("nav", Tag::Icon), None);
}

// ============================================================================
// Mutation
// ============================================================================

#[test]
fn test_set_value_only_on_text_controls() {
    let mut doc = sample();
    doc.set_value("name", "Jane").unwrap();
    assert_eq!(doc.value("name").as_deref(), Some("Jane"));

    assert_eq!(
        doc.set_value("send", "x"),
        Err(SurfaceError::NotAControl {
            id: "send".to_string(),
            tag: "button"
        })
    );
    assert_eq!(
        doc.set_value("missing", "x"),
        Err(SurfaceError::NotFound("missing".to_string()))
    );
}

#[test]
fn test_style_and_attribute_mutation() {
    let mut doc = sample();
    doc.set_display("name-error", Display::Block).unwrap();
    doc.set_border_color("name", Color::rgb(255, 59, 48)).unwrap();
    doc.set_attribute("body", "data-theme", "light").unwrap();

    assert!(doc.element("name-error").unwrap().style.is_block());
    assert_eq!(
        doc.element("name").unwrap().style.border_color,
        Some(Color::rgb(255, 59, 48))
    );
    assert!(doc.has_attribute("body", "data-theme"));

    doc.remove_attribute("body", "data-theme").unwrap();
    assert!(!doc.has_attribute("body", "data-theme"));

    doc.set_display("name-error", Display::None).unwrap();
    assert!(!doc.element("name-error").unwrap().is_displayed());
}

#[test]
fn test_markup_and_class_name() {
    let mut doc = sample();
    doc.set_markup("send", "<i></i> Sending...").unwrap();
    assert_eq!(doc.markup("send").as_deref(), Some("<i></i> Sending..."));

    doc.set_class_name("about", "card  visible").unwrap();
    let about = doc.element("about").unwrap();
    assert_eq!(about.class_list(), "card visible");
    assert!(about.has_class("visible"));
}

#[test]
fn test_set_id_rejects_duplicates() {
    let mut doc = sample();
    assert_eq!(
        doc.set_id("about", "nav"),
        Err(SurfaceError::DuplicateId("nav".to_string()))
    );
    doc.set_id("about", "about-me").unwrap();
    assert!(doc.exists("about-me"));
    assert!(!doc.exists("about"));
}

// ============================================================================
// Scrolling
// ============================================================================

#[test]
fn test_scroll_raises_event_and_clamps() {
    let mut doc = sample();
    assert_eq!(doc.max_scroll(), 1400);

    doc.scroll_to(5000, ScrollBehavior::Smooth);
    assert_eq!(doc.scroll_offset(), 1400);
    assert_eq!(
        doc.last_scroll(),
        Some(ScrollRecord {
            top: 1400,
            behavior: ScrollBehavior::Smooth
        })
    );
    assert_eq!(doc.take_events(), vec![Event::Scroll { offset: 1400 }]);
    assert!(doc.take_events().is_empty());
}

#[test]
fn test_scroll_to_same_offset_is_silent() {
    let mut doc = sample();
    doc.scroll_to(0, ScrollBehavior::Auto);
    assert!(doc.take_events().is_empty());
    assert!(doc.last_scroll().is_some());
}

#[test]
fn test_scroll_into_view_center() {
    let mut doc = sample();
    doc.scroll_into_view("about", ScrollBehavior::Smooth, ScrollBlock::Center)
        .unwrap();
    // center of 1000..1400 is 1200, minus half the 600px viewport
    assert_eq!(doc.scroll_offset(), 900);
    assert_eq!(doc.viewport(), Rect::new(0, 900, 800, 600));

    assert!(doc
        .scroll_into_view("missing", ScrollBehavior::Smooth, ScrollBlock::Start)
        .is_err());
}

#[test]
fn test_resize_reclamps_scroll() {
    let mut doc = sample();
    doc.scroll_to(1400, ScrollBehavior::Auto);
    doc.take_events();

    doc.resize(800, 1000);
    assert_eq!(doc.scroll_offset(), 1000);
    assert_eq!(
        doc.take_events(),
        vec![
            Event::Resize {
                width: 800,
                height: 1000
            },
            Event::Scroll { offset: 1000 }
        ]
    );
}
