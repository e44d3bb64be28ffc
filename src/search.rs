//! Sidebar search over section content.
//!
//! A deliberately small lookup: case-insensitive substring matching over
//! each section's content lines, with results in section declaration order
//! (stable, not relevance-ranked). Queries shorter than
//! [`MIN_QUERY_LEN`] characters produce a distinct prompt outcome so the
//! panel can say "type to search" instead of "no matches".

use crate::section::{SECTIONS, SectionId};

/// Minimum normalized query length before matching runs.
pub const MIN_QUERY_LEN: usize = 2;

/// Result of a search query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Query too short to search; show the prompt state.
    Prompt,
    /// Sections whose content contains the query, in declaration order.
    /// May be empty ("no matches"), which is distinct from `Prompt`.
    Matches(Vec<SectionId>),
}

impl SearchOutcome {
    /// Matched sections, empty for the prompt state.
    #[must_use]
    pub fn sections(&self) -> &[SectionId] {
        match self {
            Self::Prompt => &[],
            Self::Matches(ids) => ids,
        }
    }
}

/// Pre-lowered content corpus, built once at startup.
#[derive(Debug)]
pub struct SearchIndex {
    haystacks: Vec<(SectionId, String)>,
}

impl SearchIndex {
    /// Build the index over the static section registry.
    #[must_use]
    pub fn new() -> Self {
        let haystacks = SECTIONS
            .iter()
            .map(|section| (section.id, section.content.join("\n").to_lowercase()))
            .collect();
        Self { haystacks }
    }

    /// Run a query against the index.
    ///
    /// The query is trimmed and lowercased before matching; the length
    /// threshold applies to the normalized form.
    #[must_use]
    pub fn query(&self, raw: &str) -> SearchOutcome {
        let needle = raw.trim().to_lowercase();
        if needle.chars().count() < MIN_QUERY_LEN {
            return SearchOutcome::Prompt;
        }
        let matches = self
            .haystacks
            .iter()
            .filter(|(_, haystack)| haystack.contains(&needle))
            .map(|(id, _)| *id)
            .collect();
        SearchOutcome::Matches(matches)
    }
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self::new()
    }
}
