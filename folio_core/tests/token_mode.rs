mod common;

use common::{fixture, init_tracing, page_with, type_text};
use folio_core::dom::DocumentModel;
use folio_core::memory::MemoryDocument;
use folio_core::storage::MemoryFlagStore;
use folio_core::token_mode::Transition;
use pretty_assertions::assert_eq;

/// Serialized body with empty class attributes dropped, so a marker class
/// added and removed again compares equal to never having been there.
fn normalized_body(doc: &MemoryDocument) -> String {
    doc.inner_html(doc.body_id()).replace(" class=\"\"", "")
}

#[test]
fn typing_token_toggles() {
    init_tracing();
    let f = fixture();
    let mut page = page_with(f.doc, MemoryFlagStore::default());
    page.content_ready();

    type_text(&mut page, "toke");
    assert!(!page.is_token_mode_active());
    assert_eq!(page.on_key("n"), Some(Transition::Enabled));
    assert!(page.is_token_mode_active());

    type_text(&mut page, "TOKEN");
    assert!(!page.is_token_mode_active());
}

#[test]
fn only_the_last_five_characters_count() {
    let f = fixture();
    let mut page = page_with(f.doc, MemoryFlagStore::default());

    type_text(&mut page, "tokxen");
    assert!(!page.is_token_mode_active());
    type_text(&mut page, "my tokens");
    assert!(page.is_token_mode_active());
    // The buffer was cleared by the match, so the trailing "s" starts fresh.
    type_text(&mut page, "oken");
    assert!(page.is_token_mode_active());
}

#[test]
fn enable_then_disable_restores_page() {
    let f = fixture();
    let before = normalized_body(&f.doc);
    let text_before = f.doc.text_content(f.doc.body_id());
    let mut page = page_with(f.doc, MemoryFlagStore::default());

    type_text(&mut page, "token");
    assert!(page.document().text_content(page.document().body_id()).contains("TOKEN COUNT"));
    type_text(&mut page, "token");

    let doc = page.document();
    assert_eq!(normalized_body(doc), before);
    assert_eq!(doc.text_content(doc.body_id()), text_before);
    assert!(doc.query_all(".tokenized").is_empty());
    assert!(doc.query_all(".token").is_empty());
    assert_eq!(doc.element_by_id("token-counter"), None);
    assert!(!doc.has_class(&doc.body_id(), "token-mode"));
    assert_eq!(page.token_snapshot_len(), 0);
}

#[test]
fn snapshot_matches_eligible_elements() {
    let f = fixture();
    let eligible = f.eligible;
    let mut page = page_with(f.doc, MemoryFlagStore::default());

    page.toggle_token_mode();
    assert_eq!(page.token_snapshot_len(), eligible);
    assert_eq!(page.document().query_all(".tokenized").len(), eligible);
}

#[test]
fn enabling_twice_equals_enabling_once() {
    let once = {
        let f = fixture();
        let mut page = page_with(f.doc, MemoryFlagStore::default());
        page.toggle_token_mode();
        normalized_body(page.document())
    };

    let f = fixture();
    let eligible = f.eligible;
    let mut page = page_with(f.doc, MemoryFlagStore::with_entry("tokenMode", "enabled"));
    page.content_ready();
    // A second enable through the post-parse path on the same instance.
    page.content_ready();

    assert_eq!(normalized_body(page.document()), once);
    assert_eq!(page.token_snapshot_len(), eligible);
    assert_eq!(page.document().query_all("#token-counter").len(), 1);
}

#[test]
fn token_count_equals_word_runs() {
    let f = fixture();
    let mut page = page_with(f.doc, MemoryFlagStore::default());
    page.toggle_token_mode();

    let doc = page.document();
    let tokens = doc.query_all(".token");
    assert_eq!(tokens.len(), 33);

    let counter = doc.element_by_id("token-counter").expect("counter overlay");
    let count = doc.query_all(".token-count-num")[0];
    let cost = doc.query_all(".token-cost-num")[0];
    assert!(doc.contains(&counter, &count));
    assert_eq!(doc.text_content(count), "33");
    assert_eq!(doc.text_content(cost), "$0.000004");
    assert_eq!(
        doc.text_content(counter),
        "TOKEN COUNT: 33EST. COST: $0.000004Press ESC to exit"
    );
}

#[test]
fn colors_restart_per_text_node() {
    let f = fixture();
    let about = f.sections[1];
    let mut page = page_with(f.doc, MemoryFlagStore::default());
    page.toggle_token_mode();

    let doc = page.document();
    let p = doc.query_all("#about p")[0];
    let classes: Vec<String> = doc
        .query_all("#about p .token")
        .iter()
        .map(|span| doc.attribute(span, "class").unwrap_or_default())
        .collect();
    assert_eq!(
        classes,
        vec![
            "token token-1",
            "token token-2",
            "token token-3",
            "token token-4",
            "token token-5",
            "token token-1",
            "token token-1",
            "token token-2",
        ]
    );
    assert!(doc.contains(&about, &p));
    assert_eq!(
        doc.inner_html(p),
        "<span class=\"token token-1\">I</span> <span class=\"token token-2\">build</span>  \
         <span class=\"token token-3\">calm,</span> <span class=\"token token-4\">fast</span>\n\
         <span class=\"token token-5\">interfaces.</span> \
         <em><span class=\"token token-1\">Mostly</span></em> \
         <span class=\"token token-1\">in</span> <span class=\"token token-2\">Rust.</span>"
    );
}

#[test]
fn nested_eligible_elements_are_wrapped_once() {
    let f = fixture();
    let mut page = page_with(f.doc, MemoryFlagStore::default());
    page.toggle_token_mode();

    let doc = page.document();
    assert!(doc.query_all(".token .token").is_empty());
    assert_eq!(doc.query_all(".token").len(), 33);
    let link = doc.query_all(".nav-menu a")[0];
    assert!(doc.has_class(&link, "tokenized"));
    assert_eq!(doc.inner_html(link), "<span class=\"token token-1\">Home</span>");
}

#[test]
fn counter_overlay_is_never_tokenized() {
    let f = fixture();
    let mut page = page_with(f.doc, MemoryFlagStore::default());
    page.toggle_token_mode();
    // Enable again while active: the overlay's own spans stay untouched.
    page.content_ready();
    page.toggle_token_mode();
    page.toggle_token_mode();

    let doc = page.document();
    let counter = doc.element_by_id("token-counter").expect("counter overlay");
    assert!(!doc.has_class(&counter, "tokenized"));
    for span in doc.query_all("#token-counter span") {
        assert!(!doc.has_class(&span, "tokenized"));
        assert!(!doc.has_class(&span, "token"));
    }
    assert_eq!(doc.query_all("#token-counter").len(), 1);
}

#[test]
fn flag_survives_reload() {
    let f = fixture();
    let mut page = page_with(f.doc, MemoryFlagStore::default());
    type_text(&mut page, "token");
    let (_, store) = page.into_parts();
    assert_eq!(store.entry("tokenMode"), Some("enabled"));

    // Reload: fresh document, same storage.
    let mut reloaded = page_with(fixture().doc, store);
    assert!(reloaded.prepare());
    assert!(reloaded
        .document()
        .has_class(&reloaded.document().root_id(), "token-mode-loading"));
    reloaded.content_ready();
    assert!(reloaded.is_token_mode_active());
    assert!(!reloaded
        .document()
        .has_class(&reloaded.document().root_id(), "token-mode-loading"));

    reloaded.on_key("Escape");
    let (_, store) = reloaded.into_parts();
    assert_eq!(store.entry("tokenMode"), None);

    let mut reloaded = page_with(fixture().doc, store);
    assert!(!reloaded.prepare());
    reloaded.content_ready();
    assert!(!reloaded.is_token_mode_active());
}

#[test]
fn prepare_then_restore_tokenizes_once() {
    let f = fixture();
    let eligible = f.eligible;
    let mut page = page_with(f.doc, MemoryFlagStore::with_entry("tokenMode", "enabled"));

    assert!(page.prepare());
    assert!(!page.is_token_mode_active());
    assert!(page.document().query_all(".token").is_empty());

    page.content_ready();
    assert_eq!(page.token_snapshot_len(), eligible);
    assert_eq!(page.document().query_all(".token").len(), 33);
}

#[test]
fn unknown_flag_value_starts_inactive() {
    let f = fixture();
    let mut page = page_with(f.doc, MemoryFlagStore::with_entry("tokenMode", "on"));
    assert!(!page.prepare());
    page.content_ready();
    assert!(!page.is_token_mode_active());
}

#[test]
fn teardown_restores_page_but_keeps_flag() {
    let f = fixture();
    let before = normalized_body(&f.doc);
    let mut page = page_with(f.doc, MemoryFlagStore::default());
    page.content_ready();
    type_text(&mut page, "token");

    page.teardown();
    assert!(!page.is_token_mode_active());
    assert_eq!(normalized_body(page.document()), before);
    assert_eq!(page.store().entry("tokenMode"), Some("enabled"));
}
