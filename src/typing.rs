//! Cosmetic typing animation for the terminal panel.
//!
//! Reveals a fixed script of shell lines grapheme-by-grapheme, with a
//! start delay, per-line typing speeds, and a pause between lines. The
//! effect is fully isolated from navigation state: it can be skipped or
//! cancelled at any time without affecting anything else, and it is
//! driven by elapsed-time ticks so tests can run it deterministically.

use std::time::Duration;

use unicode_segmentation::UnicodeSegmentation;

/// One line of the scripted terminal session.
#[derive(Clone, Copy, Debug)]
pub struct ScriptLine {
    /// Text revealed for this line (including any prompt).
    pub text: &'static str,
    /// Delay between revealed graphemes.
    pub char_delay: Duration,
    /// Success lines render in the palette's success color, without a prompt.
    pub success: bool,
}

/// The fixed script played after load.
pub static SCRIPT: [ScriptLine; 4] = [
    ScriptLine {
        text: "$ git clone https://github.com/rizzit17/awesome-project.git",
        char_delay: Duration::from_millis(50),
        success: false,
    },
    ScriptLine {
        text: "$ cd awesome-project",
        char_delay: Duration::from_millis(30),
        success: false,
    },
    ScriptLine {
        text: "$ npm install && npm start",
        char_delay: Duration::from_millis(40),
        success: false,
    },
    ScriptLine {
        text: "✓ Ready to collaborate!",
        char_delay: Duration::from_millis(20),
        success: true,
    },
];

/// Delay before the first line starts typing.
pub const START_DELAY: Duration = Duration::from_millis(1000);

/// Pause after a line completes before the next begins.
pub const LINE_PAUSE: Duration = Duration::from_millis(500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Waiting (start delay or inter-line pause) before typing `line`.
    Waiting { remaining: Duration },
    /// Actively revealing graphemes of `line`.
    Typing { until_next: Duration },
    /// Script fully revealed.
    Done,
}

/// Tick-driven typing animation state.
#[derive(Debug)]
pub struct TypingEffect {
    lines: &'static [ScriptLine],
    line: usize,
    revealed: usize,
    phase: Phase,
}

impl TypingEffect {
    /// Start the default script, including the initial start delay.
    #[must_use]
    pub fn new() -> Self {
        Self::with_script(&SCRIPT)
    }

    /// Start a specific script (tests use shorter ones).
    #[must_use]
    pub fn with_script(lines: &'static [ScriptLine]) -> Self {
        let phase = if lines.is_empty() {
            Phase::Done
        } else {
            Phase::Waiting {
                remaining: START_DELAY,
            }
        };
        Self {
            lines,
            line: 0,
            revealed: 0,
            phase,
        }
    }

    /// Whether the whole script has been revealed.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Reveal everything immediately.
    pub fn skip(&mut self) {
        self.line = self.lines.len();
        self.revealed = 0;
        self.phase = Phase::Done;
    }

    /// Advance the animation by an elapsed duration.
    pub fn tick(&mut self, mut dt: Duration) {
        loop {
            match self.phase {
                Phase::Done => return,
                Phase::Waiting { remaining } => {
                    if dt < remaining {
                        self.phase = Phase::Waiting {
                            remaining: remaining - dt,
                        };
                        return;
                    }
                    dt -= remaining;
                    self.phase = Phase::Typing {
                        until_next: Duration::ZERO,
                    };
                }
                Phase::Typing { until_next } => {
                    if dt < until_next {
                        self.phase = Phase::Typing {
                            until_next: until_next - dt,
                        };
                        return;
                    }
                    dt -= until_next;
                    self.reveal_one();
                    if self.phase == Phase::Done {
                        return;
                    }
                }
            }
        }
    }

    /// Lines currently visible: fully revealed ones plus the partial line
    /// being typed, each paired with its success flag.
    #[must_use]
    pub fn visible_lines(&self) -> Vec<(String, bool)> {
        let mut out = Vec::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i < self.line {
                out.push((line.text.to_string(), line.success));
            } else if i == self.line && self.revealed > 0 {
                let partial: String = line.text.graphemes(true).take(self.revealed).collect();
                out.push((partial, line.success));
            }
        }
        out
    }

    fn reveal_one(&mut self) {
        let line = &self.lines[self.line];
        let total = line.text.graphemes(true).count();
        self.revealed += 1;
        if self.revealed >= total {
            self.line += 1;
            self.revealed = 0;
            if self.line >= self.lines.len() {
                self.phase = Phase::Done;
            } else {
                self.phase = Phase::Waiting {
                    remaining: LINE_PAUSE,
                };
            }
        } else {
            self.phase = Phase::Typing {
                until_next: line.char_delay,
            };
        }
    }
}

impl Default for TypingEffect {
    fn default() -> Self {
        Self::new()
    }
}
