//! `codefolio` - a personal portfolio rendered as a code-editor shell in
//! the terminal.
//!
//! The heart of the crate is the navigation model: a set of static
//! portfolio [`section`]s, four switchable sidebar [`view`]s, and a
//! persisted dark/light [`theme`], all owned by a single
//! [`nav::NavigationController`] that projects every transition onto a
//! [`surface::RenderSurface`]. The bundled [`render::ScreenRenderer`]
//! draws the familiar chrome: activity bar, sidebar, tabs, status bar,
//! and a terminal panel playing a scripted [`typing`] animation.

// Crate-level lint configuration
#![warn(unsafe_code)] // Unsafe code needs justification (required for termios FFI)
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::module_name_repetitions)] // Allow SectionId, SidebarView etc
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod ansi;
pub mod color;
pub mod error;
pub mod event;
pub mod input;
pub mod nav;
pub mod prefs;
pub mod render;
pub mod search;
pub mod section;
pub mod style;
pub mod surface;
pub mod terminal;
pub mod theme;
pub mod typing;
pub mod view;

// Re-export core types at crate root
pub use color::Rgba;
pub use error::{Error, Result};
pub use event::{Feature, LogLevel, Notice, emit_log, emit_notice, set_log_callback, set_notice_callback};
pub use nav::{NavigationController, NavigationState};
pub use prefs::{FilePrefStore, MemoryPrefStore, PrefStore};
pub use search::{MIN_QUERY_LEN, SearchIndex, SearchOutcome};
pub use section::{SECTIONS, Section, SectionId};
pub use style::{Style, TextAttributes};
pub use surface::{RecordingSurface, RenderSurface, SurfaceCall};
pub use theme::{Palette, Theme};
pub use typing::TypingEffect;
pub use view::{ActivityAction, SidebarView, ViewContent};

// Re-export input types
pub use input::{ClickTarget, Event, InputParser, KeyCode, KeyEvent, KeyModifiers};

// Re-export renderer and terminal plumbing
pub use render::{Frame, ScreenRenderer};
pub use terminal::{RawModeGuard, enable_raw_mode, is_tty, terminal_size};
