//! ANSI escape sequences used by the renderer.

use crate::style::{Style, TextAttributes};
use std::fmt::Write as _;

/// Reset all attributes to default.
pub const RESET: &str = "\x1b[0m";

/// Clear entire screen.
pub const CLEAR_SCREEN: &str = "\x1b[2J";

/// Hide cursor.
pub const CURSOR_HIDE: &str = "\x1b[?25l";

/// Show cursor.
pub const CURSOR_SHOW: &str = "\x1b[?25h";

/// Move cursor to home position (1,1).
pub const CURSOR_HOME: &str = "\x1b[H";

/// Enable alternative screen buffer.
pub const ALT_SCREEN_ON: &str = "\x1b[?1049h";

/// Disable alternative screen buffer.
pub const ALT_SCREEN_OFF: &str = "\x1b[?1049l";

/// Cursor positioning sequence for zero-based cell coordinates.
#[must_use]
pub fn cursor_to(x: u16, y: u16) -> String {
    format!("\x1b[{};{}H", y + 1, x + 1)
}

/// Append the SGR sequence for `style` to `out` (always starts from reset).
pub fn push_sgr(out: &mut String, style: Style) {
    out.push_str(RESET);
    if style.attributes.contains(TextAttributes::BOLD) {
        out.push_str("\x1b[1m");
    }
    if style.attributes.contains(TextAttributes::DIM) {
        out.push_str("\x1b[2m");
    }
    if style.attributes.contains(TextAttributes::ITALIC) {
        out.push_str("\x1b[3m");
    }
    if style.attributes.contains(TextAttributes::UNDERLINE) {
        out.push_str("\x1b[4m");
    }
    if style.attributes.contains(TextAttributes::INVERSE) {
        out.push_str("\x1b[7m");
    }
    if let Some(fg) = style.fg {
        let _ = write!(out, "\x1b[38;2;{};{};{}m", fg.r, fg.g, fg.b);
    }
    if let Some(bg) = style.bg {
        let _ = write!(out, "\x1b[48;2;{};{};{}m", bg.r, bg.g, bg.b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_cursor_to_is_one_based() {
        assert_eq!(cursor_to(0, 0), "\x1b[1;1H");
        assert_eq!(cursor_to(9, 4), "\x1b[5;10H");
    }

    #[test]
    fn test_sgr_truecolor() {
        let mut out = String::new();
        push_sgr(&mut out, Style::fg(Rgba::rgb(0, 122, 204)).with_bold());
        assert!(out.starts_with(RESET));
        assert!(out.contains("\x1b[1m"));
        assert!(out.contains("\x1b[38;2;0;122;204m"));
    }

    #[test]
    fn test_sgr_empty_style_is_reset() {
        let mut out = String::new();
        push_sgr(&mut out, Style::NONE);
        assert_eq!(out, RESET);
    }
}
