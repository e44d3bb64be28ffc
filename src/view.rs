//! Sidebar views and their content models.
//!
//! The sidebar shows exactly one of four views at a time; switching views
//! replaces the whole panel content (views never compose). A view's
//! content is modeled as data handed to the render surface, so highlight
//! state always comes from [`crate::nav::NavigationState`] and is never
//! scraped back out of whatever was last drawn.

use crate::search::SearchOutcome;
use crate::section::{SECTIONS, SectionId};

/// One of the four sidebar panels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SidebarView {
    #[default]
    Explorer,
    Search,
    SourceControl,
    Extensions,
}

impl SidebarView {
    /// All views, in activity-bar order.
    pub const ALL: [Self; 4] = [
        Self::Explorer,
        Self::Search,
        Self::SourceControl,
        Self::Extensions,
    ];

    /// Panel title shown in the sidebar header.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Explorer => "EXPLORER",
            Self::Search => "SEARCH",
            Self::SourceControl => "SOURCE CONTROL",
            Self::Extensions => "EXTENSIONS",
        }
    }

    /// Activity-bar icon glyph.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Explorer => "📁",
            Self::Search => "🔍",
            Self::SourceControl => "🌿",
            Self::Extensions => "🧩",
        }
    }
}

/// What an activity-bar press means.
///
/// The settings gear sits in the activity bar next to the four view icons,
/// but it is an alias for the theme toggle, not a fifth view: pressing it
/// never changes the active view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityAction {
    /// Switch the sidebar to a view.
    View(SidebarView),
    /// Toggle the theme (the settings gear).
    ToggleTheme,
}

/// One row in the explorer file listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExplorerEntry {
    pub id: SectionId,
    /// Whether this row carries the active-file highlight.
    pub active: bool,
}

/// A sidebar row that jumps to a section when selected
/// (source-control and extensions entries).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JumpEntry {
    pub label: &'static str,
    pub detail: &'static str,
    pub target: SectionId,
}

/// Simulated commit log shown in the Source Control view.
pub static COMMITS: [JumpEntry; 5] = [
    JumpEntry {
        label: "feat: ship realtime board",
        detail: "projects.js · 2 days ago",
        target: SectionId::Projects,
    },
    JumpEntry {
        label: "chore: refresh stack list",
        detail: "skills.json · 1 week ago",
        target: SectionId::Skills,
    },
    JumpEntry {
        label: "docs: freelance write-up",
        detail: "experience.md · 2 weeks ago",
        target: SectionId::Experience,
    },
    JumpEntry {
        label: "feat: add summer 2024 entry",
        detail: "internships.ts · 1 month ago",
        target: SectionId::Internships,
    },
    JumpEntry {
        label: "style: cert badge colors",
        detail: "certifications.css · 2 months ago",
        target: SectionId::Certifications,
    },
];

/// Simulated installed extensions shown in the Extensions view.
pub static EXTENSIONS: [JumpEntry; 4] = [
    JumpEntry {
        label: "Who Am I",
        detail: "bio at a glance",
        target: SectionId::About,
    },
    JumpEntry {
        label: "Project Lens",
        detail: "browse shipped work",
        target: SectionId::Projects,
    },
    JumpEntry {
        label: "Badge Case",
        detail: "certification shelf",
        target: SectionId::Certifications,
    },
    JumpEntry {
        label: "Mail Drop",
        detail: "get in touch",
        target: SectionId::Contact,
    },
];

/// Rendered content model for the active sidebar view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewContent {
    Explorer { entries: Vec<ExplorerEntry> },
    Search { query: String, outcome: SearchOutcome },
    SourceControl { commits: Vec<JumpEntry> },
    Extensions { extensions: Vec<JumpEntry> },
}

impl ViewContent {
    /// Explorer listing with the highlight on the active section.
    #[must_use]
    pub fn explorer(active: SectionId) -> Self {
        let entries = SECTIONS
            .iter()
            .map(|section| ExplorerEntry {
                id: section.id,
                active: section.id == active,
            })
            .collect();
        Self::Explorer { entries }
    }

    /// Search panel with the current query and its outcome.
    #[must_use]
    pub fn search(query: impl Into<String>, outcome: SearchOutcome) -> Self {
        Self::Search {
            query: query.into(),
            outcome,
        }
    }

    /// Source-control panel over the static commit log.
    #[must_use]
    pub fn source_control() -> Self {
        Self::SourceControl {
            commits: COMMITS.to_vec(),
        }
    }

    /// Extensions panel over the static extension list.
    #[must_use]
    pub fn extensions() -> Self {
        Self::Extensions {
            extensions: EXTENSIONS.to_vec(),
        }
    }

    /// Which view this content belongs to.
    #[must_use]
    pub const fn view(&self) -> SidebarView {
        match self {
            Self::Explorer { .. } => SidebarView::Explorer,
            Self::Search { .. } => SidebarView::Search,
            Self::SourceControl { .. } => SidebarView::SourceControl,
            Self::Extensions { .. } => SidebarView::Extensions,
        }
    }
}
