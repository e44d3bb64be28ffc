//! Search behavior: thresholds, ordering, and result selection.

use codefolio::{
    MemoryPrefStore, NavigationController, RecordingSurface, SearchIndex, SearchOutcome,
    SectionId, SidebarView, ViewContent,
};

fn controller() -> NavigationController<RecordingSurface, MemoryPrefStore> {
    let mut c = NavigationController::new(RecordingSurface::new(), MemoryPrefStore::new());
    c.surface_mut().clear();
    c
}

#[test]
fn short_queries_yield_the_prompt_state() {
    let index = SearchIndex::new();
    assert_eq!(index.query(""), SearchOutcome::Prompt);
    assert_eq!(index.query("a"), SearchOutcome::Prompt);
    // Whitespace does not count toward the threshold.
    assert_eq!(index.query(" r "), SearchOutcome::Prompt);
}

#[test]
fn react_matches_expected_sections_in_order() {
    let index = SearchIndex::new();
    let SearchOutcome::Matches(ids) = index.query("react") else {
        panic!("expected matches");
    };
    // "React" appears in the about blurb, the project list, and the
    // skills manifest — in declaration order, nowhere else.
    assert_eq!(
        ids,
        vec![SectionId::About, SectionId::Projects, SectionId::Skills]
    );
}

#[test]
fn search_is_case_insensitive() {
    let index = SearchIndex::new();
    assert_eq!(index.query("REACT"), index.query("react"));
    assert_eq!(index.query("MongoDB"), index.query("mongodb"));
}

#[test]
fn unmatched_query_is_empty_not_prompt() {
    let index = SearchIndex::new();
    let outcome = index.query("quantum blockchain");
    assert_eq!(outcome, SearchOutcome::Matches(Vec::new()));
    assert_ne!(outcome, SearchOutcome::Prompt);
}

#[test]
fn searching_updates_the_open_search_panel() {
    let mut c = controller();
    c.set_sidebar_view(SidebarView::Search);
    c.search("skills");

    let ViewContent::Search { query, outcome } = c.surface_mut().last_sidebar().cloned().unwrap()
    else {
        panic!("expected search content");
    };
    assert_eq!(query, "skills");
    assert_eq!(outcome, SearchOutcome::Matches(vec![SectionId::Skills]));
}

#[test]
fn searching_from_another_view_does_not_redraw_sidebar() {
    let mut c = controller();
    c.set_sidebar_view(SidebarView::Extensions);
    c.surface_mut().clear();

    let outcome = c.search("react");

    assert!(!outcome.sections().is_empty());
    assert!(c.surface_mut().last_sidebar().is_none());
}

#[test]
fn selecting_a_result_lands_in_explorer() {
    let mut c = controller();
    c.set_sidebar_view(SidebarView::Search);
    let outcome = c.search("skills");
    let target = outcome.sections()[0];

    c.navigate_to_section(target);

    assert_eq!(c.state().active_section, SectionId::Skills);
    assert_eq!(c.state().active_view, SidebarView::Explorer);
}

#[test]
fn reopening_search_discards_the_previous_query() {
    let mut c = controller();
    c.set_sidebar_view(SidebarView::Search);
    c.search("react");
    c.set_sidebar_view(SidebarView::Explorer);
    c.set_sidebar_view(SidebarView::Search);

    assert_eq!(c.search_query(), "");
    let ViewContent::Search { query, outcome } = c.surface_mut().last_sidebar().cloned().unwrap()
    else {
        panic!("expected search content");
    };
    assert_eq!(query, "");
    assert_eq!(outcome, SearchOutcome::Prompt);
}
