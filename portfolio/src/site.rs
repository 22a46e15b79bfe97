//! The portfolio page's markup as an element tree, laid out for a 1280px
//! wide viewport.

use pagedom::{Document, Element, Rect, Style, Tag};

pub const PAGE_WIDTH: u32 = 1280;
pub const PAGE_HEIGHT: u32 = 4200;

const SUBMIT_LABEL: &str = r#"<i class="fas fa-paper-plane"></i> Send Message"#;

fn section(id: &str, y: u32, height: u32) -> Element {
    Element::new(Tag::Section)
        .id(id)
        .class("section")
        .rect(Rect::new(0, y, PAGE_WIDTH, height))
}

fn card(class: &str, title: &str, rect: Rect) -> Element {
    Element::div()
        .class(class)
        .rect(rect)
        .child(Element::text(Tag::Heading, title).rect(Rect::new(rect.x, rect.y, rect.width, 40)))
}

fn navigation() -> Element {
    let links = ["about", "projects", "skills", "education", "contact"]
        .into_iter()
        .enumerate()
        .map(|(i, section)| {
            let mut label = section.to_string();
            label[..1].make_ascii_uppercase();
            Element::anchor(format!("#{section}"), label)
                .rect(Rect::new(560 + i as u32 * 110, 28, 100, 24))
        });

    Element::new(Tag::Nav)
        .id("navbar")
        .class("nav")
        .rect(Rect::new(0, 0, PAGE_WIDTH, 80))
        .child(Element::anchor("#home", "Portfolio").class("logo").rect(Rect::new(40, 24, 160, 32)))
        .child(
            Element::div()
                .class("nav-links")
                .rect(Rect::new(560, 20, 560, 40))
                .children(links),
        )
        .child(
            Element::button("")
                .id("theme-toggle")
                .rect(Rect::new(1180, 20, 40, 40))
                .child(Element::icon("fas fa-moon")),
        )
}

fn field_row(control: Element, y: u32, height: u32) -> [Element; 2] {
    let error_id = format!("{}-error", control.id);
    [
        control.rect(Rect::new(240, y, 800, height)),
        Element::div()
            .id(error_id)
            .class("error-message")
            .style(Style::new().hidden())
            .rect(Rect::new(240, y + height + 4, 800, 20)),
    ]
}

fn contact_form() -> Element {
    Element::new(Tag::Form)
        .id("contact-form")
        .rect(Rect::new(240, 3300, 800, 700))
        .children(field_row(Element::input("name").attr("type", "text"), 3340, 48))
        .children(field_row(Element::input("email").attr("type", "email"), 3440, 48))
        .children(field_row(Element::textarea("message"), 3540, 200))
        .child(Element::submit_button(SUBMIT_LABEL).rect(Rect::new(240, 3800, 200, 48)))
        .child(
            Element::div()
                .id("form-success")
                .class("success-message")
                .style(Style::new().hidden())
                .rect(Rect::new(240, 3870, 800, 40)),
        )
}

/// The full page tree rooted at `<body>`.
pub fn portfolio_page() -> Element {
    let project_cards = ["Sentiment Analyzer", "Campus Navigator", "Expense Tracker"]
        .into_iter()
        .enumerate()
        .map(|(i, title)| card("project-card", title, Rect::new(40 + i as u32 * 420, 1500, 380, 400)));

    let skill_cards = ["Languages", "Machine Learning", "Tools"]
        .into_iter()
        .enumerate()
        .map(|(i, title)| card("skill-category", title, Rect::new(40 + i as u32 * 420, 2300, 380, 300)));

    Element::body()
        .rect(Rect::new(0, 0, PAGE_WIDTH, PAGE_HEIGHT))
        .child(navigation())
        .child(
            section("home", 80, 720)
                .child(
                    Element::text(Tag::Heading, "IT Student | Aspiring ML Engineer")
                        .class("hero-title")
                        .rect(Rect::new(160, 300, 960, 64)),
                )
                .child(
                    Element::text(Tag::Paragraph, "Building things with data.")
                        .class("hero-subtitle")
                        .rect(Rect::new(160, 380, 960, 32)),
                ),
        )
        .child(section("about", 800, 600).child(
            Element::text(Tag::Paragraph, "About me").rect(Rect::new(160, 880, 960, 400)),
        ))
        .child(section("projects", 1400, 800).children(project_cards))
        .child(section("skills", 2200, 500).children(skill_cards))
        .child(
            section("education", 2700, 500)
                .child(card("education-card", "BSc Information Technology", Rect::new(160, 2800, 960, 160)))
                .child(card("certification-card", "Machine Learning Specialization", Rect::new(160, 2990, 960, 160))),
        )
        .child(section("contact", 3200, 1000).child(contact_form()))
}

/// [`portfolio_page`] in a 1280x720 document.
pub fn portfolio_document() -> Document {
    Document::new(portfolio_page()).with_viewport(PAGE_WIDTH, 720)
}
