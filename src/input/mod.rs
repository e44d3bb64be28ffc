//! Input event types and parsing.

mod event;
mod keyboard;
mod parser;

pub use event::{ClickTarget, Event};
pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
pub use parser::{InputParser, ParseError};
