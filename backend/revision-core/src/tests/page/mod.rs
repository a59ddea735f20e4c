mod bindings;
mod dispatch;
mod interaction;

use crate::page::RevisionPage;
use crate::tests::sample_topics;

use models::NavBarBuilder;

/// Page built the way a successful load builds it.
pub(crate) fn booted_page() -> RevisionPage {
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
