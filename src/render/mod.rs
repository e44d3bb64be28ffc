//! Terminal renderer for the editor shell.
//!
//! [`ScreenRenderer`] is the concrete [`RenderSurface`]: it keeps the
//! last-projected navigation facts (active section, sidebar content, tab,
//! theme, visibility hint) and composes them into a [`Frame`] per present.
//! It never feeds state back to the controller; everything drawn here is
//! a projection.
//!
//! Layout, top to bottom: title bar with traffic lights, tab bar,
//! activity bar + sidebar + content columns, terminal panel, status bar.

mod frame;

pub use frame::Frame;

use std::io::{self, Write};

use crate::search::SearchOutcome;
use crate::section::SectionId;
use crate::style::Style;
use crate::surface::RenderSurface;
use crate::theme::Theme;
use crate::view::{SidebarView, ViewContent};

/// Activity bar width in columns.
const ACTIVITY_W: u16 = 3;
/// Sidebar width in columns (when visible).
const SIDEBAR_W: u16 = 26;
/// Terminal panel height in rows (header + script lines).
const TERMINAL_H: u16 = 6;

/// Concrete render surface drawing the code-editor shell.
#[derive(Debug)]
pub struct ScreenRenderer {
    width: u16,
    height: u16,
    active_section: SectionId,
    sidebar: ViewContent,
    tab_name: String,
    tab_icon: String,
    theme: Theme,
    sidebar_visible: bool,
    terminal_lines: Vec<(String, bool)>,
    scroll: u16,
}

impl ScreenRenderer {
    /// Create a renderer for the given terminal size.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let initial = SectionId::About;
        Self {
            width,
            height,
            active_section: initial,
            sidebar: ViewContent::explorer(initial),
            tab_name: initial.section().file_name.to_string(),
            tab_icon: initial.section().icon.to_string(),
            theme: Theme::default(),
            sidebar_visible: true,
            terminal_lines: Vec::new(),
            scroll: 0,
        }
    }

    /// Adopt a new terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Replace the terminal-panel lines (from the typing effect).
    pub fn set_terminal_lines(&mut self, lines: Vec<(String, bool)>) {
        self.terminal_lines = lines;
    }

    /// Scroll the content viewport by a signed number of lines.
    /// Presentation-only; clamped at the top.
    pub fn scroll_lines(&mut self, delta: i16) {
        let max = self.active_section.section().content.len() as u16;
        self.scroll = self
            .scroll
            .saturating_add_signed(delta)
            .min(max.saturating_sub(1));
    }

    /// Current scroll offset (rows hidden above the viewport).
    #[must_use]
    pub const fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Compose the current projection into a frame.
    #[must_use]
    pub fn compose(&self) -> Frame {
        let palette = self.theme.palette();
        let mut frame = Frame::new(self.width, self.height);
        frame.clear(palette.background);

        let status_y = self.height.saturating_sub(1);
        let term_top = status_y.saturating_sub(TERMINAL_H);

        self.draw_title_bar(&mut frame);
        self.draw_tab_bar(&mut frame);
        self.draw_activity_bar(&mut frame, term_top);
        let content_x = if self.sidebar_visible {
            self.draw_sidebar(&mut frame, term_top);
            ACTIVITY_W + SIDEBAR_W
        } else {
            ACTIVITY_W
        };
        self.draw_content(&mut frame, content_x, term_top);
        self.draw_terminal_panel(&mut frame, term_top, status_y);
        self.draw_status_bar(&mut frame, status_y);
        frame
    }

    /// Compose and write the frame to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn present(&self, out: &mut impl Write) -> io::Result<()> {
        out.write_all(self.compose().to_ansi().as_bytes())?;
        out.flush()
    }

    fn draw_title_bar(&self, frame: &mut Frame) {
        let palette = self.theme.palette();
        frame.fill_rect(0, 0, self.width, 1, palette.chrome);
        // Traffic lights. Decorative; the red one maps to WindowClose.
        frame.draw_text(1, 0, "●", Style::fg(crate::Rgba::rgb(0xff, 0x5f, 0x57)));
        frame.draw_text(3, 0, "●", Style::fg(crate::Rgba::rgb(0xfe, 0xbc, 0x2e)));
        frame.draw_text(5, 0, "●", Style::fg(crate::Rgba::rgb(0x28, 0xc8, 0x40)));

        let title = "rishit — codefolio";
        let x = (self.width.saturating_sub(title.len() as u16)) / 2;
        frame.draw_text(x, 0, title, Style::fg(palette.dim));
    }

    fn draw_tab_bar(&self, frame: &mut Frame) {
        let palette = self.theme.palette();
        frame.fill_rect(0, 1, self.width, 1, palette.panel);
        let label = format!("{} {}", self.tab_icon, self.tab_name);
        frame.draw_text(
            ACTIVITY_W + 1,
            1,
            &label,
            Style::fg(palette.foreground).with_bg(palette.background),
        );
        let close_x = ACTIVITY_W + 2 + label.len() as u16;
        frame.draw_text(
            close_x,
            1,
            "×",
            Style::fg(palette.dim).with_bg(palette.background),
        );
    }

    fn draw_activity_bar(&self, frame: &mut Frame, term_top: u16) {
        let palette = self.theme.palette();
        frame.fill_rect(0, 2, ACTIVITY_W, term_top.saturating_sub(2), palette.chrome);
        let active_view = self.sidebar.view();
        for (i, view) in SidebarView::ALL.iter().enumerate() {
            let y = 2 + (i as u16) * 2;
            let style = if *view == active_view {
                Style::fg(palette.accent).with_bg(palette.highlight)
            } else {
                Style::fg(palette.dim).with_bg(palette.chrome)
            };
            frame.draw_text(0, y, view.icon(), style);
        }
        // Settings gear: theme toggle alias, never rendered as active.
        let gear_y = 2 + (SidebarView::ALL.len() as u16) * 2;
        frame.draw_text(0, gear_y, "⚙", Style::fg(palette.dim).with_bg(palette.chrome));
    }

    fn draw_sidebar(&self, frame: &mut Frame, term_top: u16) {
        let palette = self.theme.palette();
        let x = ACTIVITY_W;
        frame.fill_rect(x, 2, SIDEBAR_W, term_top.saturating_sub(2), palette.panel);
        frame.draw_text(
            x + 1,
            2,
            self.sidebar.view().title(),
            Style::fg(palette.dim).with_bg(palette.panel).with_bold(),
        );

        match &self.sidebar {
            ViewContent::Explorer { entries } => {
                for (i, entry) in entries.iter().enumerate() {
                    let y = 4 + i as u16;
                    let section = entry.id.section();
                    // Highlight comes from the content model, which the
                    // controller rebuilds from state on every change.
                    let style = if entry.active {
                        Style::fg(palette.foreground).with_bg(palette.highlight)
                    } else {
                        Style::fg(palette.dim).with_bg(palette.panel)
                    };
                    if entry.active {
                        frame.fill_rect(x, y, SIDEBAR_W, 1, palette.highlight);
                    }
                    let label = format!("{} {}", section.icon, section.file_name);
                    frame.draw_text(x + 1, y, &label, style);
                }
            }
            ViewContent::Search { query, outcome } => {
                let prompt = format!("> {query}_");
                frame.draw_text(
                    x + 1,
                    4,
                    &prompt,
                    Style::fg(palette.foreground).with_bg(palette.panel),
                );
                match outcome {
                    SearchOutcome::Prompt => {
                        frame.draw_text(
                            x + 1,
                            6,
                            "Type 2+ characters to search",
                            Style::fg(palette.dim).with_bg(palette.panel).with_italic(),
                        );
                    }
                    SearchOutcome::Matches(ids) if ids.is_empty() => {
                        frame.draw_text(
                            x + 1,
                            6,
                            "No results found",
                            Style::fg(palette.dim).with_bg(palette.panel),
                        );
                    }
                    SearchOutcome::Matches(ids) => {
                        for (i, id) in ids.iter().enumerate() {
                            let section = id.section();
                            let label = format!("{} {}", section.icon, section.file_name);
                            frame.draw_text(
                                x + 1,
                                6 + i as u16,
                                &label,
                                Style::fg(palette.foreground).with_bg(palette.panel),
                            );
                        }
                    }
                }
            }
            ViewContent::SourceControl { commits } => {
                for (i, entry) in commits.iter().enumerate() {
                    let y = 4 + (i as u16) * 2;
                    frame.draw_text(
                        x + 1,
                        y,
                        entry.label,
                        Style::fg(palette.foreground).with_bg(palette.panel),
                    );
                    frame.draw_text(
                        x + 2,
                        y + 1,
                        entry.detail,
                        Style::fg(palette.dim).with_bg(palette.panel),
                    );
                }
            }
            ViewContent::Extensions { extensions } => {
                for (i, entry) in extensions.iter().enumerate() {
                    let y = 4 + (i as u16) * 2;
                    frame.draw_text(
                        x + 1,
                        y,
                        entry.label,
                        Style::fg(palette.foreground).with_bg(palette.panel).with_bold(),
                    );
                    frame.draw_text(
                        x + 2,
                        y + 1,
                        entry.detail,
                        Style::fg(palette.dim).with_bg(palette.panel),
                    );
                }
            }
        }
    }

    fn draw_content(&self, frame: &mut Frame, content_x: u16, term_top: u16) {
        let palette = self.theme.palette();
        let section = self.active_section.section();
        let first = usize::from(self.scroll);
        for (row, (number, line)) in section
            .content
            .iter()
            .enumerate()
            .skip(first)
            .map(|(i, line)| (i + 1, line))
            .enumerate()
        {
            let y = 2 + row as u16;
            if y >= term_top {
                break;
            }
            frame.draw_text(
                content_x + 1,
                y,
                &format!("{number:>3}"),
                Style::fg(palette.dim),
            );
            frame.draw_text(content_x + 6, y, line, Style::fg(palette.foreground));
        }
    }

    fn draw_terminal_panel(&self, frame: &mut Frame, term_top: u16, status_y: u16) {
        let palette = self.theme.palette();
        frame.fill_rect(0, term_top, self.width, status_y.saturating_sub(term_top), palette.panel);
        frame.draw_text(
            1,
            term_top,
            "TERMINAL",
            Style::fg(palette.dim).with_bg(palette.panel).with_bold(),
        );
        for (i, (line, success)) in self.terminal_lines.iter().enumerate() {
            let y = term_top + 1 + i as u16;
            if y >= status_y {
                break;
            }
            let style = if *success {
                Style::fg(palette.success).with_bg(palette.panel)
            } else {
                Style::fg(palette.foreground).with_bg(palette.panel)
            };
            frame.draw_text(1, y, line, style);
        }
    }

    fn draw_status_bar(&self, frame: &mut Frame, status_y: u16) {
        let palette = self.theme.palette();
        frame.fill_rect(0, status_y, self.width, 1, palette.accent);
        let style = Style::fg(crate::Rgba::WHITE).with_bg(palette.accent);
        let left = format!("⎇ main  {}", self.active_section.id());
        frame.draw_text(1, status_y, &left, style);

        let right = format!("{}  Ln 1, Col 1  Ctrl+Q Quit", self.theme.indicator_glyph());
        let x = self.width.saturating_sub(right.len() as u16 + 3);
        frame.draw_text(x, status_y, &right, style);
    }
}

impl RenderSurface for ScreenRenderer {
    fn activate_section(&mut self, id: SectionId) {
        self.active_section = id;
    }

    fn replace_sidebar(&mut self, content: &ViewContent) {
        self.sidebar = content.clone();
    }

    fn update_tab(&mut self, file_name: &str, icon: &str) {
        self.tab_name = file_name.to_string();
        self.tab_icon = icon.to_string();
    }

    fn scroll_content_to_top(&mut self) {
        self.scroll = 0;
    }

    fn update_theme_indicator(&mut self, theme: Theme) {
        self.theme = theme;
    }

    fn set_sidebar_visible(&mut self, visible: bool) {
        self.sidebar_visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> ScreenRenderer {
        ScreenRenderer::new(100, 30)
    }

    fn frame_text(frame: &Frame) -> String {
        (0..frame.height())
            .map(|y| frame.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_initial_frame_shows_default_section() {
        let frame = renderer().compose();
        let text = frame_text(&frame);
        assert!(text.contains("about.html"));
        assert!(text.contains("EXPLORER"));
        assert!(text.contains("TERMINAL"));
    }

    #[test]
    fn test_activation_changes_tab_and_content() {
        let mut r = renderer();
        r.activate_section(SectionId::Skills);
        r.update_tab("skills.json", "⚡");
        let text = frame_text(&r.compose());
        assert!(text.contains("skills.json"));
        assert!(text.contains("frontend"));
    }

    #[test]
    fn test_sidebar_hidden_moves_content_left() {
        let mut r = renderer();
        r.set_sidebar_visible(false);
        let text = frame_text(&r.compose());
        assert!(!text.contains("EXPLORER"));
        // Content still drawn.
        assert!(text.contains("about.html"));
    }

    #[test]
    fn test_search_prompt_state_renders_hint() {
        let mut r = renderer();
        r.replace_sidebar(&ViewContent::search("a", SearchOutcome::Prompt));
        let text = frame_text(&r.compose());
        assert!(text.contains("Type 2+ characters"));
    }

    #[test]
    fn test_no_results_state_is_distinct() {
        let mut r = renderer();
        r.replace_sidebar(&ViewContent::search("zzz", SearchOutcome::Matches(Vec::new())));
        let text = frame_text(&r.compose());
        assert!(text.contains("No results found"));
        assert!(!text.contains("Type 2+ characters"));
    }

    #[test]
    fn test_theme_indicator_glyph() {
        let mut r = renderer();
        r.update_theme_indicator(Theme::Light);
        let text = frame_text(&r.compose());
        assert!(text.contains("🌙"));
    }

    #[test]
    fn test_scroll_clamps_at_top() {
        let mut r = renderer();
        r.scroll_lines(3);
        assert!(r.scroll() > 0);
        r.scroll_lines(-10);
        assert_eq!(r.scroll(), 0);
        r.scroll_lines(2);
        r.scroll_content_to_top();
        assert_eq!(r.scroll(), 0);
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut r = ScreenRenderer::new(10, 3);
        r.set_terminal_lines(vec![("$ ls".to_string(), false)]);
        let _ = r.compose().to_ansi();
    }
}
