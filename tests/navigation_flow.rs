//! End-to-end navigation scenarios against a recording surface.

use codefolio::{
    MemoryPrefStore, NavigationController, RecordingSurface, SectionId, SidebarView, SurfaceCall,
    Theme, ViewContent,
};

fn controller() -> NavigationController<RecordingSurface, MemoryPrefStore> {
    let mut c = NavigationController::new(RecordingSurface::new(), MemoryPrefStore::new());
    c.surface_mut().clear();
    c
}

#[test]
fn startup_state_is_seeded() {
    let c = controller();
    assert_eq!(c.state().active_section, SectionId::About);
    assert_eq!(c.state().active_view, SidebarView::Explorer);
    assert_eq!(c.state().theme, Theme::Dark);
}

#[test]
fn startup_projects_full_state_onto_surface() {
    let mut c = NavigationController::new(RecordingSurface::new(), MemoryPrefStore::new());
    let calls = c.surface_mut().calls();
    assert!(calls.contains(&SurfaceCall::ActivateSection(SectionId::About)));
    assert!(calls.contains(&SurfaceCall::UpdateThemeIndicator(Theme::Dark)));
    assert!(c.surface_mut().last_sidebar().is_some());
    assert_eq!(c.surface_mut().last_tab(), Some(("about.html", "📄")));
}

#[test]
fn selecting_projects_updates_tab_and_keeps_explorer() {
    let mut c = controller();
    c.select_section(SectionId::Projects);

    assert_eq!(c.state().active_section, SectionId::Projects);
    assert_eq!(c.state().active_view, SidebarView::Explorer);
    assert_eq!(c.surface_mut().last_tab(), Some(("projects.js", "🚀")));
    assert!(
        c.surface_mut()
            .calls()
            .contains(&SurfaceCall::ScrollContentToTop)
    );
}

#[test]
fn reselecting_is_a_silent_noop() {
    let mut c = controller();
    c.select_section(SectionId::Projects);
    let snapshot = c.surface_mut().calls().to_vec();
    let state = *c.state();

    c.select_section(SectionId::Projects);

    assert_eq!(*c.state(), state);
    assert_eq!(c.surface_mut().calls(), snapshot.as_slice());
}

#[test]
fn every_view_switch_leaves_sections_untouched() {
    let mut c = controller();
    c.select_section(SectionId::Internships);
    for view in SidebarView::ALL {
        c.set_sidebar_view(view);
        assert_eq!(c.state().active_view, view);
        assert_eq!(c.state().active_section, SectionId::Internships);
    }
}

#[test]
fn theme_toggle_from_dark_persists_light_and_shows_moon() {
    let prefs = MemoryPrefStore::new();
    let observer = prefs.clone();
    let mut c = NavigationController::new(RecordingSurface::new(), prefs);
    c.surface_mut().clear();

    c.toggle_theme();

    assert_eq!(c.state().theme, Theme::Light);
    assert_eq!(observer.persisted().as_deref(), Some("light"));
    assert_eq!(Theme::Light.indicator_glyph(), "🌙");
    assert!(
        c.surface_mut()
            .calls()
            .contains(&SurfaceCall::UpdateThemeIndicator(Theme::Light))
    );
}

#[test]
fn theme_toggle_twice_returns_to_start() {
    let prefs = MemoryPrefStore::new();
    let observer = prefs.clone();
    let mut c = NavigationController::new(RecordingSurface::new(), prefs);

    c.toggle_theme();
    c.toggle_theme();

    assert_eq!(c.state().theme, Theme::Dark);
    assert_eq!(observer.persisted().as_deref(), Some("dark"));
}

#[test]
fn theme_survives_a_restart() {
    let prefs = MemoryPrefStore::new();
    {
        let mut c = NavigationController::new(RecordingSurface::new(), prefs.clone());
        c.toggle_theme();
    }
    // A fresh controller over the same store wakes up in light mode.
    let c = NavigationController::new(RecordingSurface::new(), prefs);
    assert_eq!(c.state().theme, Theme::Light);
}

#[test]
fn cross_view_jump_rebuilds_explorer_with_highlight() {
    let mut c = controller();
    c.set_sidebar_view(SidebarView::SourceControl);
    c.navigate_to_section(SectionId::Experience);

    assert_eq!(c.state().active_section, SectionId::Experience);
    assert_eq!(c.state().active_view, SidebarView::Explorer);

    let ViewContent::Explorer { entries } = c.surface_mut().last_sidebar().cloned().unwrap()
    else {
        panic!("expected explorer content after jump");
    };
    let active: Vec<_> = entries.iter().filter(|e| e.active).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, SectionId::Experience);
}

#[test]
fn full_tour_reaches_every_section_and_view() {
    // The transition graph is fully connected; walk a long arbitrary path.
    let mut c = controller();
    for id in SectionId::ALL {
        c.select_section(id);
        assert_eq!(c.state().active_section, id);
    }
    for view in SidebarView::ALL {
        c.set_sidebar_view(view);
        assert_eq!(c.state().active_view, view);
    }
    c.navigate_to_section(SectionId::About);
    assert_eq!(c.state().active_section, SectionId::About);
    assert_eq!(c.state().active_view, SidebarView::Explorer);
}
