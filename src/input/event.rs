//! Resolved input events.
//!
//! Clicks reach the controller already mapped to the identifier of the
//! element they landed on. Hit testing (turning coordinates into a
//! [`ClickTarget`]) is the embedder's concern; the navigation model only
//! ever sees identifiers drawn from its own closed sets.

use crate::section::SectionId;
use crate::view::ActivityAction;

use super::keyboard::KeyEvent;

/// A click resolved to the interactive element it hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// A file row in the explorer listing.
    File(SectionId),
    /// An activity-bar icon (view switch or the settings gear).
    Activity(ActivityAction),
    /// A result row in the search panel.
    SearchResult(SectionId),
    /// A commit or extension entry that jumps to a section.
    Jump(SectionId),
    /// The close button on the editor tab.
    TabClose,
    /// The red traffic light on the window chrome.
    WindowClose,
}

/// An input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),
    /// A resolved click event.
    Click(ClickTarget),
}
