//! HTML rendering of the page.
//!
//! Produces the same fragments the browser page builds: flashcards inside
//! `#revision-container`, subject links inside `#course-index` and the
//! `nav-btn` buttons. Every clickable element carries a `data-control`
//! attribute holding its [`ControlId`].
//!
//! Topic text is inserted as-is unless [`RenderOptions::escape_html`] is set.

use crate::page::{MountContent, RevisionPage};

use models::{Card, ControlId, IndexEntry, NavBar, NavControl};

use std::borrow::Cow;

const ERROR_NOTICE_STYLE: &str = "color: red; padding: 20px; font-weight: bold;";
const INDEX_LINK_STYLE: &str = "display: block; margin: 4px 0;";
const HIDDEN_CARD_STYLE: &str = "display: none;";

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub escape_html: bool,
    pub stylesheet: String,
    pub title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            escape_html: false,
            stylesheet: String::from("style.css"),
            title: String::from("Revision"),
        }
    }
}

impl RenderOptions {
    fn text<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        if self.escape_html {
            html_escape::encode_text(raw)
        } else {
            Cow::Borrowed(raw)
        }
    }

    fn attribute<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        if self.escape_html {
            html_escape::encode_double_quoted_attribute(raw)
        } else {
            Cow::Borrowed(raw)
        }
    }
}

/// Render the whole page as a standalone document.
pub fn render_document(page: &RevisionPage, options: &RenderOptions) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="{stylesheet}">
</head>
<body>
    <nav class="subject-nav">
{nav}
    </nav>
    <aside id="course-index">
{index}
    </aside>
    <main id="revision-container">
{container}
    </main>
</body>
</html>
"#,
        title = html_escape::encode_text(&options.title),
        stylesheet = html_escape::encode_double_quoted_attribute(&options.stylesheet),
        nav = render_nav(page.nav(), options),
        index = render_index(page.index(), options),
        container = render_container(page.container(), options),
    )
}

/// Contents of `#revision-container`.
pub fn render_container(content: &MountContent, options: &RenderOptions) -> String {
    match content {
        MountContent::Empty => String::new(),
        MountContent::Cards(cards) => cards
            .iter()
            .map(|card| render_card(card, options))
            .collect::<Vec<_>>()
            .join("\n"),
        MountContent::ErrorNotice(notice) => render_error_notice(notice, options),
    }
}

pub fn render_card(card: &Card, options: &RenderOptions) -> String {
    let subject = options.text(card.subject());
    let style = if card.visible {
        String::new()
    } else {
        format!(r#" style="{HIDDEN_CARD_STYLE}""#)
    };
    let answer_class = if card.answer.is_hidden() {
        "answer hidden"
    } else {
        "answer"
    };

    format!(
        r#"        <div class="flashcard" data-subject="{data_subject}"{style}>
            <span class="subject-tag">{subject}</span>
            <div class="question">
                <h3>Q: {question}</h3>
            </div>
            <div class="{answer_class}">
                <p>A: {answer}</p>
            </div>
            <button class="toggle-answer-btn" data-control="{control}">{label}</button>
        </div>"#,
        data_subject = options.attribute(card.subject()),
        question = options.text(&card.topic.question),
        answer = options.text(&card.topic.answer),
        control = ControlId::Toggle(card.id),
        label = card.answer.button_label(),
    )
}

/// Contents of `#course-index`. Empty when the deck has no subjects.
pub fn render_index(entries: &[IndexEntry], options: &RenderOptions) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            format!(
                r##"        <a href="#" class="index-link" data-control="{control}" data-filter="{filter}" style="{INDEX_LINK_STYLE}">{label}</a>"##,
                control = ControlId::IndexLink(position),
                filter = options.attribute(&entry.subject),
                label = options.text(&entry.label()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_nav(nav: &NavBar, options: &RenderOptions) -> String {
    nav.controls()
        .iter()
        .map(|control| render_nav_control(control, options))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_nav_control(control: &NavControl, options: &RenderOptions) -> String {
    let class = if control.active {
        "nav-btn active"
    } else {
        "nav-btn"
    };

    format!(
        r#"        <button class="{class}" data-filter="{filter}" data-control="{id}">{label}</button>"#,
        filter = options.attribute(control.target.as_str()),
        id = ControlId::Nav(control.id),
        label = options.text(&control.label),
    )
}

pub fn render_error_notice(notice: &str, options: &RenderOptions) -> String {
    format!(
        r#"        <p style="{ERROR_NOTICE_STYLE}">{notice}</p>"#,
        notice = options.text(notice),
    )
}
