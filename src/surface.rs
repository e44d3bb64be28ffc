//! The controller↔renderer seam.
//!
//! [`RenderSurface`] is everything the navigation controller knows about
//! presentation. The surface is a pure projection of navigation state:
//! the controller pushes changes through these methods and never asks the
//! surface what is currently displayed. Bindings on the renderer side are
//! keyed by stable section/view ids, so replacing panel content does not
//! shed highlight state — the controller re-sends it from state instead.

use crate::section::SectionId;
use crate::theme::Theme;
use crate::view::ViewContent;

/// Rendering surface driven by the navigation controller.
pub trait RenderSurface {
    /// Mark exactly one section active; all others become inactive.
    fn activate_section(&mut self, id: SectionId);

    /// Replace the sidebar's displayed content with a view's content model.
    fn replace_sidebar(&mut self, content: &ViewContent);

    /// Update the current-tab label/icon pair.
    fn update_tab(&mut self, file_name: &str, icon: &str);

    /// Request that the content viewport scroll to its origin.
    fn scroll_content_to_top(&mut self);

    /// Update the displayed theme indicator glyph.
    fn update_theme_indicator(&mut self, theme: Theme);

    /// Presentation-only sidebar visibility hint (Ctrl+B). Not part of
    /// navigation state; hiding the sidebar changes nothing semantic.
    fn set_sidebar_visible(&mut self, visible: bool);
}

/// One recorded surface invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceCall {
    ActivateSection(SectionId),
    ReplaceSidebar(ViewContent),
    UpdateTab { file_name: String, icon: String },
    ScrollContentToTop,
    UpdateThemeIndicator(Theme),
    SetSidebarVisible(bool),
}

/// Surface double that records every call for assertions.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls in order.
    #[must_use]
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Forget recorded calls (e.g., after controller construction).
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// The most recent tab update, if any.
    #[must_use]
    pub fn last_tab(&self) -> Option<(&str, &str)> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::UpdateTab { file_name, icon } => {
                Some((file_name.as_str(), icon.as_str()))
            }
            _ => None,
        })
    }

    /// The most recent sidebar content, if any.
    #[must_use]
    pub fn last_sidebar(&self) -> Option<&ViewContent> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::ReplaceSidebar(content) => Some(content),
            _ => None,
        })
    }
}

impl RenderSurface for RecordingSurface {
    fn activate_section(&mut self, id: SectionId) {
        self.calls.push(SurfaceCall::ActivateSection(id));
    }

    fn replace_sidebar(&mut self, content: &ViewContent) {
        self.calls.push(SurfaceCall::ReplaceSidebar(content.clone()));
    }

    fn update_tab(&mut self, file_name: &str, icon: &str) {
        self.calls.push(SurfaceCall::UpdateTab {
            file_name: file_name.to_string(),
            icon: icon.to_string(),
        });
    }

    fn scroll_content_to_top(&mut self) {
        self.calls.push(SurfaceCall::ScrollContentToTop);
    }

    fn update_theme_indicator(&mut self, theme: Theme) {
        self.calls.push(SurfaceCall::UpdateThemeIndicator(theme));
    }

    fn set_sidebar_visible(&mut self, visible: bool) {
        self.calls.push(SurfaceCall::SetSidebarVisible(visible));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_order() {
        let mut surface = RecordingSurface::new();
        surface.activate_section(SectionId::Projects);
        surface.scroll_content_to_top();

        assert_eq!(
            surface.calls(),
            &[
                SurfaceCall::ActivateSection(SectionId::Projects),
                SurfaceCall::ScrollContentToTop,
            ]
        );
    }

    #[test]
    fn test_last_tab() {
        let mut surface = RecordingSurface::new();
        assert!(surface.last_tab().is_none());
        surface.update_tab("about.html", "📄");
        surface.update_tab("skills.json", "⚡");
        assert_eq!(surface.last_tab(), Some(("skills.json", "⚡")));
    }
}
