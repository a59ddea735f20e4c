use crate::loader::error_notice;
use crate::page::RevisionPage;
use crate::render::html::{RenderOptions, render_card, render_document, render_index};
use crate::tests::sample_topics;

use models::{Card, CardId, Filter, NavBarBuilder, Topic};

fn booted_page() -> RevisionPage {
    let nav = NavBarBuilder::default()
        .with_subjects(["Math", "Art"])
        .build()
        .unwrap();
    let mut page = RevisionPage::new(nav);
    let topics = sample_topics();
    page.render_cards(&topics);
    page.render_index(&topics);
    page.wire();
    page.activate_default();
    page
}

#[test]
fn given_fresh_card_when_rendered_then_answer_hidden_and_button_says_show() {
    let card = Card::new(CardId(4), Topic::new("Math", "2+2?", "4"));

    let html = render_card(&card, &RenderOptions::default());

    assert!(html.contains(r#"<div class="flashcard" data-subject="Math">"#));
    assert!(html.contains(r#"<span class="subject-tag">Math</span>"#));
    assert!(html.contains("<h3>Q: 2+2?</h3>"));
    assert!(html.contains(r#"<div class="answer hidden">"#));
    assert!(html.contains("<p>A: 4</p>"));
    assert!(html.contains(r#"data-control="toggle-4">Show Answer</button>"#));
}

#[test]
fn given_toggled_and_filtered_out_card_when_rendered_then_markup_reflects_state() {
    let mut card = Card::new(CardId(0), Topic::new("Art", "q", "a"));
    card.answer = card.answer.toggled();
    card.visible = false;

    let html = render_card(&card, &RenderOptions::default());

    assert!(html.contains(r#"data-subject="Art" style="display: none;">"#));
    assert!(html.contains(r#"<div class="answer">"#));
    assert!(html.contains(">Hide Answer</button>"));
}

#[test]
fn given_booted_page_when_document_rendered_then_all_mount_points_are_filled() {
    let page = booted_page();

    let html = render_document(&page, &RenderOptions::default());

    assert!(html.contains(r#"<main id="revision-container">"#));
    assert!(html.contains(r#"<aside id="course-index">"#));
    assert_eq!(html.matches(r#"class="flashcard""#).count(), 3);
    assert!(html.contains(
        r#"<button class="nav-btn active" data-filter="all" data-control="nav-0">All Subjects</button>"#
    ));
    assert!(html.contains(r#"<button class="nav-btn" data-filter="Math" data-control="nav-1">Math</button>"#));
    assert!(html.contains(">Math (2 topics)</a>"));
    assert!(html.contains(">Art (1 topics)</a>"));
    assert!(html.contains(r#"<link rel="stylesheet" href="style.css">"#));
}

#[test]
fn given_index_entries_when_rendered_then_links_carry_layout_style_and_control() {
    let page = booted_page();

    let html = render_index(page.index(), &RenderOptions::default());

    assert_eq!(
        html.lines().next().map(str::trim),
        Some(
            r##"<a href="#" class="index-link" data-control="index-0" data-filter="Math" style="display: block; margin: 4px 0;">Math (2 topics)</a>"##
        )
    );
}

/// **VALUE**: A failed load leaves only the error notice in the container.
///
/// **BUG THIS CATCHES**: A partially rendered deck next to the notice.
#[test]
fn given_error_page_when_rendered_then_container_holds_only_the_notice() {
    let mut page = RevisionPage::new(NavBarBuilder::default().build().unwrap());
    page.show_error(error_notice("data.json"));

    let html = render_document(&page, &RenderOptions::default());

    assert!(!html.contains("flashcard"));
    assert!(!html.contains("index-link"));
    assert!(html.contains(
        r#"<p style="color: red; padding: 20px; font-weight: bold;">Error loading content. Please check the `data.json` file name, path, and syntax (no comments allowed!).</p>"#
    ));
}

/// **VALUE**: Topic text goes into the page untouched by default and escaped on request.
#[test]
fn given_markup_in_topic_when_rendered_then_escaping_follows_option() {
    let card = Card::new(CardId(0), Topic::new("Code", "What is <b>?", "Bold & loud"));

    let raw = render_card(&card, &RenderOptions::default());
    let escaped = render_card(
        &card,
        &RenderOptions {
            escape_html: true,
            ..RenderOptions::default()
        },
    );

    assert!(raw.contains("Q: What is <b>?"));
    assert!(raw.contains("A: Bold & loud"));
    assert!(escaped.contains("Q: What is &lt;b&gt;?"));
    assert!(escaped.contains("A: Bold &amp; loud"));
}

#[test]
fn given_filter_applied_when_rendered_then_active_button_moves() {
    let mut page = booted_page();
    page.apply_filter(&Filter::from("Art"));

    let html = render_document(&page, &RenderOptions::default());

    assert!(html.contains(r#"<button class="nav-btn" data-filter="all" data-control="nav-0">"#));
    assert!(html.contains(r#"<button class="nav-btn active" data-filter="Art" data-control="nav-2">"#));
    assert_eq!(html.matches(r#"style="display: none;""#).count(), 2);
}
