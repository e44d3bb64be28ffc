//! `codefolio` — the portfolio shell binary.
//!
//! Renders the portfolio as an interactive code-editor shell in the
//! current terminal.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin codefolio
//! cargo run --bin codefolio -- --help
//! cargo run --bin codefolio -- --fps 30 --no-typing
//! cargo run --bin codefolio -- --headless-smoke
//! ```
//!
//! Press Ctrl+Q or Esc to quit. Number keys 1-7 jump between sections,
//! Ctrl+K opens search, Ctrl+T toggles the theme, Ctrl+B hides the
//! sidebar.

use codefolio::input::Event;
use codefolio::prefs::{FilePrefStore, MemoryPrefStore};
use codefolio::render::ScreenRenderer;
use codefolio::terminal::{enable_raw_mode, is_tty, set_stdin_nonblocking, terminal_size};
use codefolio::typing::TypingEffect;
use codefolio::{InputParser, LogLevel, NavigationController, ansi, emit_log, set_log_callback};
use std::ffi::OsString;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "codefolio - portfolio as a code-editor shell

USAGE:
    codefolio [OPTIONS]

OPTIONS:
    -h, --help              Print this help message and exit
    --fps <N>               Cap frames per second (default: 30)

    --no-alt-screen         Don't enter alternate screen
    --no-typing             Skip the terminal typing animation

    --prefs <PATH>          Theme preference file
                            (default: $XDG_CONFIG_HOME/codefolio/prefs.json)

    --max-frames <N>        Exit after presenting N frames
    --headless-smoke        Run headless smoke test (no TTY required)
    --headless-size <WxH>   Force headless buffer size (default: 80x24)

KEYS:
    1-7                     Jump to a section
    Ctrl+K                  Open search
    Ctrl+T                  Toggle dark/light theme
    Ctrl+B                  Hide/show the sidebar
    Up/Down                 Scroll section content
    Ctrl+Q, Esc             Quit
";

/// Application configuration parsed from command-line arguments.
#[derive(Clone, Debug)]
pub struct Config {
    pub fps_cap: u32,
    pub use_alt_screen: bool,
    pub typing_enabled: bool,
    pub prefs_path: Option<PathBuf>,
    pub max_frames: Option<u64>,
    pub headless_smoke: bool,
    pub headless_size: (u16, u16),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps_cap: 30,
            use_alt_screen: true,
            typing_enabled: true,
            prefs_path: None,
            max_frames: None,
            headless_smoke: false,
            headless_size: (80, 24),
        }
    }
}

/// Result of CLI parsing.
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// Parse error with message.
    Error(String),
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy();

            match arg_str.as_ref() {
                "-h" | "--help" => return ParseResult::Help,

                "--fps" => {
                    let value = match args.next() {
                        Some(v) => v.to_string_lossy().to_string(),
                        None => return ParseResult::Error("--fps requires a value".to_string()),
                    };
                    match value.parse::<u32>() {
                        Ok(n) if n > 0 => config.fps_cap = n,
                        _ => {
                            return ParseResult::Error(format!(
                                "Invalid --fps value: {value} (must be positive integer)"
                            ));
                        }
                    }
                }

                "--no-alt-screen" => config.use_alt_screen = false,
                "--no-typing" => config.typing_enabled = false,

                "--prefs" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--prefs requires a path".to_string());
                    };
                    config.prefs_path = Some(PathBuf::from(value));
                }

                "--max-frames" => {
                    let value = match args.next() {
                        Some(v) => v.to_string_lossy().to_string(),
                        None => {
                            return ParseResult::Error("--max-frames requires a value".to_string());
                        }
                    };
                    match value.parse::<u64>() {
                        Ok(n) => config.max_frames = Some(n),
                        Err(_) => {
                            return ParseResult::Error(format!(
                                "Invalid --max-frames value: {value}"
                            ));
                        }
                    }
                }

                "--headless-smoke" => config.headless_smoke = true,

                "--headless-size" => {
                    let value = match args.next() {
                        Some(v) => v.to_string_lossy().to_string(),
                        None => {
                            return ParseResult::Error(
                                "--headless-size requires a value (e.g., 80x24)".to_string(),
                            );
                        }
                    };
                    match parse_size(&value) {
                        Some((w, h)) => config.headless_size = (w, h),
                        None => {
                            return ParseResult::Error(format!(
                                "Invalid --headless-size: {value} (use WxH format, e.g., 80x24)"
                            ));
                        }
                    }
                }

                other => {
                    if other.starts_with('-') {
                        return ParseResult::Error(format!("Unknown option: {other}"));
                    }
                    // Ignore positional arguments for now
                }
            }
        }

        ParseResult::Config(config)
    }

    /// Get target frame duration.
    #[must_use]
    pub fn frame_duration(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.fps_cap))
    }
}

/// Parse a size string like "80x24" into (width, height).
fn parse_size(s: &str) -> Option<(u16, u16)> {
    let parts: Vec<&str> = s.split('x').collect();
    if parts.len() != 2 {
        return None;
    }
    let w = parts[0].parse::<u16>().ok()?;
    let h = parts[1].parse::<u16>().ok()?;
    if w == 0 || h == 0 {
        return None;
    }
    Some((w, h))
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() -> io::Result<()> {
    set_log_callback(|level, msg| {
        if matches!(level, LogLevel::Warn | LogLevel::Error) {
            eprintln!("[{level:?}] {msg}");
        }
    });
    codefolio::set_notice_callback(|notice| {
        emit_log(LogLevel::Info, &notice.to_string());
    });

    match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => {
            if config.headless_smoke {
                run_headless_smoke(&config)
            } else {
                run_interactive(&config)
            }
        }
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            Ok(())
        }
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage information.");
            std::process::exit(1);
        }
    }
}

// ============================================================================
// Headless Smoke Test
// ============================================================================

/// Run headless smoke test (no TTY required).
fn run_headless_smoke(config: &Config) -> io::Result<()> {
    let (width, height) = config.headless_size;
    eprintln!("Running headless smoke test ({width}x{height})...");

    let renderer = ScreenRenderer::new(width, height);
    let mut controller = NavigationController::new(renderer, MemoryPrefStore::new());

    // Exercise the main transitions without a terminal.
    controller.select_section(codefolio::SectionId::Projects);
    controller.set_sidebar_view(codefolio::SidebarView::Search);
    let outcome = controller.search("react");
    controller.toggle_theme();
    controller.navigate_to_section(codefolio::SectionId::Contact);

    let mut typing = TypingEffect::new();
    typing.tick(Duration::from_secs(30));
    assert!(typing.is_done());

    controller
        .surface_mut()
        .set_terminal_lines(typing.visible_lines());
    let frame = controller.surface_mut().compose();
    assert_eq!(frame.width(), width);
    assert_eq!(frame.height(), height);
    let ansi = frame.to_ansi();
    assert!(!ansi.is_empty());

    eprintln!("Headless smoke test PASSED");
    eprintln!("  Buffer size: {}x{}", frame.width(), frame.height());
    eprintln!("  Search matches for 'react': {}", outcome.sections().len());
    Ok(())
}

// ============================================================================
// Interactive Mode
// ============================================================================

/// Run interactive mode with terminal.
fn run_interactive(config: &Config) -> io::Result<()> {
    if !is_tty() {
        eprintln!("Error: stdout is not a terminal");
        eprintln!();
        eprintln!("codefolio requires an interactive terminal to run.");
        eprintln!("For non-interactive use, try: codefolio --headless-smoke");
        std::process::exit(1);
    }

    emit_log(LogLevel::Info, "Welcome to Rishit's portfolio!");
    emit_log(LogLevel::Info, "Hint: press Ctrl+K to search, 1-7 to jump.");

    let (width, height) = terminal_size().unwrap_or((80, 24));

    let prefs_path = config
        .prefs_path
        .clone()
        .or_else(FilePrefStore::default_path);
    let renderer = ScreenRenderer::new(width, height);
    let mut controller = match prefs_path {
        Some(path) => {
            Controller::File(NavigationController::new(renderer, FilePrefStore::new(path)))
        }
        None => Controller::Memory(NavigationController::new(renderer, MemoryPrefStore::new())),
    };

    let _raw_guard = enable_raw_mode()?;
    set_stdin_nonblocking()?;

    let mut stdout = io::stdout();
    if config.use_alt_screen {
        stdout.write_all(ansi::ALT_SCREEN_ON.as_bytes())?;
    }
    stdout.write_all(ansi::CURSOR_HIDE.as_bytes())?;
    stdout.write_all(ansi::CLEAR_SCREEN.as_bytes())?;
    stdout.flush()?;

    let result = event_loop(config, &mut controller);

    stdout.write_all(ansi::CURSOR_SHOW.as_bytes())?;
    if config.use_alt_screen {
        stdout.write_all(ansi::ALT_SCREEN_OFF.as_bytes())?;
    }
    stdout.flush()?;

    result
}

/// Controller over either preference backend, depending on whether a
/// config directory was resolvable.
enum Controller {
    File(NavigationController<ScreenRenderer, FilePrefStore>),
    Memory(NavigationController<ScreenRenderer, MemoryPrefStore>),
}

impl Controller {
    fn handle_event(&mut self, event: &Event) {
        match self {
            Self::File(c) => c.handle_event(event),
            Self::Memory(c) => c.handle_event(event),
        }
    }

    fn renderer(&mut self) -> &mut ScreenRenderer {
        match self {
            Self::File(c) => c.surface_mut(),
            Self::Memory(c) => c.surface_mut(),
        }
    }
}

fn event_loop(config: &Config, controller: &mut Controller) -> io::Result<()> {
    let mut parser = InputParser::new();
    let mut input_buf = [0u8; 256];
    let mut pending: Vec<u8> = Vec::new();

    let mut typing = TypingEffect::new();
    if !config.typing_enabled {
        typing.skip();
    }

    let frame_duration = config.frame_duration();
    let mut frame_count: u64 = 0;
    let mut last_tick = Instant::now();
    let mut should_quit = false;

    while !should_quit {
        let frame_start = Instant::now();

        // --- Input phase ---
        if let Ok(n) = io::stdin().read(&mut input_buf) {
            pending.extend_from_slice(&input_buf[..n]);
        }
        let mut offset = 0;
        while offset < pending.len() {
            match parser.parse(&pending[offset..]) {
                Ok((consumed, event)) => {
                    offset += consumed;
                    if let Some(event) = event {
                        if handle_app_event(&event, controller) {
                            should_quit = true;
                        }
                    }
                }
                Err(_) => break, // incomplete sequence, wait for more bytes
            }
        }
        pending.drain(..offset);

        // --- Update phase ---
        let now = Instant::now();
        typing.tick(now - last_tick);
        last_tick = now;

        // --- Render phase ---
        if let Ok(size) = terminal_size() {
            controller.renderer().resize(size.0, size.1);
        }
        controller.renderer().set_terminal_lines(typing.visible_lines());
        controller.renderer().present(&mut io::stdout())?;

        // --- Frame pacing ---
        frame_count += 1;
        if let Some(max) = config.max_frames {
            if frame_count >= max {
                break;
            }
        }
        let elapsed = frame_start.elapsed();
        if let Some(remaining) = frame_duration.checked_sub(elapsed) {
            std::thread::sleep(remaining);
        }
    }

    Ok(())
}

/// Handle app-level keys; everything else goes to the controller.
/// Returns true when the app should quit.
fn handle_app_event(event: &Event, controller: &mut Controller) -> bool {
    if let Event::Key(key) = event {
        if key.is_ctrl_q() || key.is_esc() {
            return true;
        }
        // Content scrolling is a presentation concern; it bypasses the
        // navigation model entirely.
        match key.code {
            codefolio::KeyCode::Up => {
                controller.renderer().scroll_lines(-1);
                return false;
            }
            codefolio::KeyCode::Down => {
                controller.renderer().scroll_lines(1);
                return false;
            }
            _ => {}
        }
    }
    controller.handle_event(event);
    false
}

// ============================================================================
// Tests
// ============================================================================
