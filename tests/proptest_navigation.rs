//! Property tests for the navigation model.

use codefolio::{
    MemoryPrefStore, NavigationController, RecordingSurface, SearchIndex, SearchOutcome,
    SectionId, SidebarView, Theme, ViewContent,
};
use proptest::prelude::*;

fn controller() -> NavigationController<RecordingSurface, MemoryPrefStore> {
    let mut c = NavigationController::new(RecordingSurface::new(), MemoryPrefStore::new());
    c.surface_mut().clear();
    c
}

fn section_strategy() -> impl Strategy<Value = SectionId> {
    (0..SectionId::COUNT).prop_map(|i| SectionId::from_index(i).unwrap())
}

fn view_strategy() -> impl Strategy<Value = SidebarView> {
    (0..SidebarView::ALL.len()).prop_map(|i| SidebarView::ALL[i])
}

proptest! {
    #[test]
    fn select_section_is_idempotent(id in section_strategy()) {
        let mut c = controller();
        c.select_section(id);
        let state = *c.state();
        let calls = c.surface_mut().calls().len();

        c.select_section(id);

        prop_assert_eq!(*c.state(), state);
        prop_assert_eq!(c.surface_mut().calls().len(), calls);
    }

    #[test]
    fn view_switch_sets_view_and_preserves_section(
        id in section_strategy(),
        view in view_strategy(),
    ) {
        let mut c = controller();
        c.select_section(id);
        c.set_sidebar_view(view);

        prop_assert_eq!(c.state().active_view, view);
        prop_assert_eq!(c.state().active_section, id);
    }

    #[test]
    fn theme_toggle_is_an_involution(toggles in 0usize..8) {
        let prefs = MemoryPrefStore::new();
        let observer = prefs.clone();
        let mut c = NavigationController::new(RecordingSurface::new(), prefs);

        for _ in 0..toggles {
            c.toggle_theme();
            // Persisted value always matches in-memory state.
            let persisted = observer.persisted();
            prop_assert_eq!(
                persisted.as_deref(),
                Some(c.state().theme.as_str())
            );
        }
        let expected = if toggles % 2 == 0 { Theme::Dark } else { Theme::Light };
        prop_assert_eq!(c.state().theme, expected);
    }

    #[test]
    fn search_results_follow_declaration_order(query in ".{0,12}") {
        let index = SearchIndex::new();
        if let SearchOutcome::Matches(ids) = index.query(&query) {
            let indices: Vec<usize> = ids.iter().map(|id| id.index()).collect();
            let mut sorted = indices.clone();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(indices, sorted);
        }
    }

    #[test]
    fn short_queries_always_prompt(query in ".{0,1}") {
        let index = SearchIndex::new();
        prop_assert_eq!(index.query(&query), SearchOutcome::Prompt);
    }

    #[test]
    fn matched_sections_really_contain_the_query(query in "[a-z]{2,6}") {
        let index = SearchIndex::new();
        if let SearchOutcome::Matches(ids) = index.query(&query) {
            for id in ids {
                let haystack = id.section().content.join("\n").to_lowercase();
                prop_assert!(haystack.contains(&query));
            }
        }
    }

    #[test]
    fn random_walk_keeps_explorer_highlight_unique(
        ops in prop::collection::vec((section_strategy(), view_strategy()), 1..20),
    ) {
        let mut c = controller();
        for (id, view) in ops {
            c.select_section(id);
            c.set_sidebar_view(view);

            let sidebar = c.surface_mut().last_sidebar().cloned();
            if let Some(ViewContent::Explorer { entries }) = sidebar {
                let active: Vec<_> = entries.iter().filter(|e| e.active).collect();
                prop_assert_eq!(active.len(), 1);
                prop_assert_eq!(active[0].id, c.state().active_section);
            }
        }
    }

    #[test]
    fn navigate_to_section_always_lands_in_explorer(
        id in section_strategy(),
        view in view_strategy(),
    ) {
        let mut c = controller();
        c.set_sidebar_view(view);
        c.navigate_to_section(id);

        prop_assert_eq!(c.state().active_section, id);
        prop_assert_eq!(c.state().active_view, SidebarView::Explorer);
    }
}
