//! Navigation state and the controller that owns it.
//!
//! [`NavigationState`] is the single source of truth for what is active:
//! one section, one sidebar view, one theme. All transitions go through
//! [`NavigationController`] operations, which mutate the state and then
//! project the change onto a [`RenderSurface`]. The surface is never
//! consulted for current status.
//!
//! Inputs are drawn from closed sets, so there is no error taxonomy here:
//! unknown identifiers are ignored and every operation is total.

use crate::event::{Feature, LogLevel, Notice, emit_log, emit_notice};
use crate::input::{ClickTarget, Event, KeyCode, KeyEvent};
use crate::prefs::PrefStore;
use crate::search::{SearchIndex, SearchOutcome};
use crate::section::SectionId;
use crate::surface::RenderSurface;
use crate::theme::Theme;
use crate::view::{ActivityAction, SidebarView, ViewContent};

/// The controller's owned state. Created once at startup, mutated only by
/// controller operations, discarded on exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationState {
    /// The single active content section.
    pub active_section: SectionId,
    /// The single active sidebar view.
    pub active_view: SidebarView,
    /// Current theme.
    pub theme: Theme,
}

impl NavigationState {
    /// Initial state: fixed default section and view, theme from the
    /// persisted preference.
    #[must_use]
    pub fn seeded(theme: Theme) -> Self {
        Self {
            active_section: SectionId::About,
            active_view: SidebarView::Explorer,
            theme,
        }
    }
}

/// Mediates all user-triggered transitions over sections, sidebar views,
/// and the theme.
pub struct NavigationController<R: RenderSurface, P: PrefStore> {
    state: NavigationState,
    index: SearchIndex,
    surface: R,
    prefs: P,
    /// Display hint only; deliberately outside [`NavigationState`].
    sidebar_visible: bool,
    /// Transient query text while the Search view is open.
    search_query: String,
}

impl<R: RenderSurface, P: PrefStore> NavigationController<R, P> {
    /// Create the controller, seed state from the preference store, and
    /// project the initial frame onto the surface.
    pub fn new(surface: R, prefs: P) -> Self {
        let theme = prefs.load_theme();
        let mut controller = Self {
            state: NavigationState::seeded(theme),
            index: SearchIndex::new(),
            surface,
            prefs,
            sidebar_visible: true,
            search_query: String::new(),
        };
        controller.project_all();
        controller
    }

    /// Current navigation state.
    #[must_use]
    pub const fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Current sidebar visibility hint.
    #[must_use]
    pub const fn sidebar_visible(&self) -> bool {
        self.sidebar_visible
    }

    /// Current search query text.
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Borrow the render surface (e.g., to present a frame).
    pub fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }

    /// Consume the controller, returning the surface and preference store.
    pub fn into_parts(self) -> (R, P) {
        (self.surface, self.prefs)
    }

    /// Activate a section.
    ///
    /// Re-selecting the already-active section is a no-op: no state change
    /// and no surface traffic, so nothing re-renders redundantly.
    pub fn select_section(&mut self, id: SectionId) {
        if id == self.state.active_section {
            return;
        }
        self.state.active_section = id;
        let section = id.section();
        self.surface.activate_section(id);
        self.surface.update_tab(section.file_name, section.icon);
        self.surface.scroll_content_to_top();
        // Keep the explorer highlight in step when it is showing.
        if self.state.active_view == SidebarView::Explorer {
            self.surface.replace_sidebar(&ViewContent::explorer(id));
        }
    }

    /// Activate a section by its string id. Unknown ids are ignored.
    pub fn select_section_by_id(&mut self, id: &str) {
        if let Some(section) = SectionId::from_id(id) {
            self.select_section(section);
        } else {
            emit_log(LogLevel::Debug, &format!("ignoring unknown section id {id:?}"));
        }
    }

    /// Switch the sidebar to a view, replacing its content model.
    pub fn set_sidebar_view(&mut self, view: SidebarView) {
        self.state.active_view = view;
        if view == SidebarView::Search {
            // Search is a transient lookup; it opens fresh each time.
            self.search_query.clear();
        }
        let content = self.content_for(view);
        self.surface.replace_sidebar(&content);
    }

    /// Dispatch an activity-bar press. The settings gear toggles the theme
    /// and leaves the active view untouched.
    pub fn activity(&mut self, action: ActivityAction) {
        match action {
            ActivityAction::View(view) => self.set_sidebar_view(view),
            ActivityAction::ToggleTheme => self.toggle_theme(),
        }
    }

    /// Flip the theme, persist it, and update the indicator glyph.
    pub fn toggle_theme(&mut self) {
        self.state.theme = self.state.theme.toggled();
        if let Err(e) = self.prefs.store_theme(self.state.theme) {
            emit_log(LogLevel::Error, &format!("failed to persist theme: {e}"));
        }
        self.surface.update_theme_indicator(self.state.theme);
    }

    /// Run a search query and refresh the Search panel when it is showing.
    pub fn search(&mut self, query: &str) -> SearchOutcome {
        self.search_query = query.to_string();
        let outcome = self.index.query(query);
        if self.state.active_view == SidebarView::Search {
            self.surface
                .replace_sidebar(&ViewContent::search(query, outcome.clone()));
        }
        outcome
    }

    /// Jump to a section from a non-Explorer view (search result,
    /// commit, or extension entry): select it, then land back in the
    /// Explorer with the highlight re-applied to the rebuilt listing.
    pub fn navigate_to_section(&mut self, id: SectionId) {
        self.select_section(id);
        self.set_sidebar_view(SidebarView::Explorer);
    }

    /// Toggle the presentation-only sidebar visibility hint.
    pub fn toggle_sidebar_visibility(&mut self) {
        self.sidebar_visible = !self.sidebar_visible;
        self.surface.set_sidebar_visible(self.sidebar_visible);
    }

    /// Handle a resolved input event.
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Click(target) => self.handle_click(*target),
        }
    }

    /// Keyboard mapping: chords first, then (in the Search view) query
    /// editing, then positional digit navigation.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.ctrl() {
            match key.code {
                KeyCode::Char('t') => self.toggle_theme(),
                KeyCode::Char('k') => self.set_sidebar_view(SidebarView::Search),
                KeyCode::Char('b') => self.toggle_sidebar_visibility(),
                _ => {}
            }
            return;
        }

        if self.state.active_view == SidebarView::Search {
            match key.code {
                KeyCode::Char(c) => {
                    let mut query = self.search_query.clone();
                    query.push(c);
                    self.search(&query);
                }
                KeyCode::Backspace => {
                    let mut query = self.search_query.clone();
                    query.pop();
                    self.search(&query);
                }
                KeyCode::Enter => {
                    let outcome = self.index.query(&self.search_query);
                    if let Some(first) = outcome.sections().first() {
                        self.navigate_to_section(*first);
                    }
                }
                _ => {}
            }
            return;
        }

        if let KeyCode::Char(c) = key.code {
            if let Some(digit) = c.to_digit(10) {
                if digit >= 1 {
                    // Digits map positionally; out-of-range digits are ignored.
                    if let Some(id) = SectionId::from_index(digit as usize - 1) {
                        self.select_section(id);
                    }
                }
            }
        }
    }

    /// Click mapping. Clicks arrive already resolved to identifiers.
    pub fn handle_click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::File(id) => self.select_section(id),
            ClickTarget::Activity(action) => self.activity(action),
            ClickTarget::SearchResult(id) | ClickTarget::Jump(id) => self.navigate_to_section(id),
            ClickTarget::TabClose => {
                emit_notice(Notice::UnimplementedFeature(Feature::CloseTab));
            }
            ClickTarget::WindowClose => {
                emit_notice(Notice::UnimplementedFeature(Feature::CloseWindow));
            }
        }
    }

    /// Content model for a view, built from current state.
    fn content_for(&self, view: SidebarView) -> ViewContent {
        match view {
            SidebarView::Explorer => ViewContent::explorer(self.state.active_section),
            SidebarView::Search => ViewContent::search(
                self.search_query.clone(),
                self.index.query(&self.search_query),
            ),
            SidebarView::SourceControl => ViewContent::source_control(),
            SidebarView::Extensions => ViewContent::extensions(),
        }
    }

    /// Project the whole state onto the surface (startup).
    fn project_all(&mut self) {
        let section = self.state.active_section.section();
        self.surface.activate_section(self.state.active_section);
        self.surface.update_tab(section.file_name, section.icon);
        self.surface.update_theme_indicator(self.state.theme);
        self.surface.set_sidebar_visible(self.sidebar_visible);
        let content = self.content_for(self.state.active_view);
        self.surface.replace_sidebar(&content);
    }
}
