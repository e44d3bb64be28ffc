//! Incremental byte-stream parser for terminal input.
//!
//! Turns raw bytes read from stdin into [`Event`]s. The parser handles
//! the subset this application binds: UTF-8 character keys, C0 control
//! bytes as Ctrl chords, Escape, and the CSI cursor/edit keys. Unknown
//! but well-formed sequences are consumed and dropped so a stray report
//! from the terminal cannot wedge the stream.

use super::event::Event;
use super::keyboard::{KeyCode, KeyEvent, KeyModifiers};

/// Parse failure modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// More bytes are needed to finish the pending sequence.
    Incomplete,
}

/// Streaming input parser.
///
/// Call [`InputParser::parse`] with the unconsumed tail of the input
/// buffer; it returns how many bytes it consumed and the event those
/// bytes produced, if any.
#[derive(Debug, Default)]
pub struct InputParser {
    _private: (),
}

impl InputParser {
    /// Create a new parser.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the next event from `bytes`.
    ///
    /// Returns `(consumed, event)`; `event` is `None` when the consumed
    /// bytes do not map to anything this application handles.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Incomplete`] when `bytes` ends in the middle
    /// of a sequence; call again once more bytes arrive.
    pub fn parse(&mut self, bytes: &[u8]) -> Result<(usize, Option<Event>), ParseError> {
        let Some(&first) = bytes.first() else {
            return Err(ParseError::Incomplete);
        };

        match first {
            b'\r' | b'\n' => Ok((1, Some(key(KeyCode::Enter)))),
            b'\t' => Ok((1, Some(key(KeyCode::Tab)))),
            0x7f | 0x08 => Ok((1, Some(key(KeyCode::Backspace)))),
            0x1b => Self::parse_escape(bytes),
            // Remaining C0 bytes arrive as Ctrl chords (Ctrl+A = 0x01 ...).
            0x01..=0x1a => {
                let c = char::from(b'a' + first - 1);
                Ok((
                    1,
                    Some(Event::Key(KeyEvent::new(
                        KeyCode::Char(c),
                        KeyModifiers::CTRL,
                    ))),
                ))
            }
            0x00 | 0x1c..=0x1f => Ok((1, None)),
            _ => Self::parse_utf8(bytes),
        }
    }

    /// Parse an escape-prefixed sequence.
    fn parse_escape(bytes: &[u8]) -> Result<(usize, Option<Event>), ParseError> {
        // A lone ESC is the Escape key: raw-mode reads deliver complete
        // sequences in one burst, so a trailing 0x1b is not a prefix.
        if bytes.len() == 1 {
            return Ok((1, Some(key(KeyCode::Esc))));
        }
        if bytes[1] != b'[' {
            // ESC+char (alt chords, SS3) — not bound here; drop the pair.
            return Ok((2, None));
        }
        if bytes.len() < 3 {
            return Err(ParseError::Incomplete);
        }
        match bytes[2] {
            b'A' => Ok((3, Some(key(KeyCode::Up)))),
            b'B' => Ok((3, Some(key(KeyCode::Down)))),
            b'C' => Ok((3, Some(key(KeyCode::Right)))),
            b'D' => Ok((3, Some(key(KeyCode::Left)))),
            b'H' => Ok((3, Some(key(KeyCode::Home)))),
            b'F' => Ok((3, Some(key(KeyCode::End)))),
            b'3' if bytes.get(3) == Some(&b'~') => Ok((4, Some(key(KeyCode::Delete)))),
            _ => {
                // Unrecognized CSI: consume through its final byte.
                for (i, &b) in bytes.iter().enumerate().skip(2) {
                    if (0x40..=0x7e).contains(&b) {
                        return Ok((i + 1, None));
                    }
                }
                Err(ParseError::Incomplete)
            }
        }
    }

    /// Parse a UTF-8 character key.
    fn parse_utf8(bytes: &[u8]) -> Result<(usize, Option<Event>), ParseError> {
        let len = match bytes[0] {
            0x00..=0x7f => 1,
            0xc0..=0xdf => 2,
            0xe0..=0xef => 3,
            0xf0..=0xf7 => 4,
            // Continuation or invalid lead byte: drop it and resync.
            _ => return Ok((1, None)),
        };
        if bytes.len() < len {
            return Err(ParseError::Incomplete);
        }
        match std::str::from_utf8(&bytes[..len]) {
            Ok(s) => {
                let c = s.chars().next().map(KeyCode::Char).map(key);
                Ok((len, c))
            }
            Err(_) => Ok((1, None)),
        }
    }
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::key(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(bytes: &[u8]) -> (usize, Option<Event>) {
        InputParser::new().parse(bytes).unwrap()
    }

    #[test]
    fn test_ascii_char() {
        let (consumed, event) = parse_one(b"a");
        assert_eq!(consumed, 1);
        assert_eq!(event, Some(Event::Key(KeyEvent::char('a'))));
    }

    #[test]
    fn test_utf8_char() {
        let (consumed, event) = parse_one("é".as_bytes());
        assert_eq!(consumed, 2);
        assert_eq!(event, Some(Event::Key(KeyEvent::char('é'))));
    }

    #[test]
    fn test_incomplete_utf8() {
        let bytes = "é".as_bytes();
        let result = InputParser::new().parse(&bytes[..1]);
        assert_eq!(result, Err(ParseError::Incomplete));
    }

    #[test]
    fn test_ctrl_chords() {
        let (_, event) = parse_one(&[0x11]);
        assert_eq!(
            event,
            Some(Event::Key(KeyEvent::with_ctrl(KeyCode::Char('q'))))
        );

        let (_, event) = parse_one(&[0x02]);
        assert_eq!(
            event,
            Some(Event::Key(KeyEvent::with_ctrl(KeyCode::Char('b'))))
        );
    }

    #[test]
    fn test_enter_tab_backspace() {
        assert_eq!(parse_one(b"\r").1, Some(Event::Key(KeyEvent::key(KeyCode::Enter))));
        assert_eq!(parse_one(b"\t").1, Some(Event::Key(KeyEvent::key(KeyCode::Tab))));
        assert_eq!(
            parse_one(&[0x7f]).1,
            Some(Event::Key(KeyEvent::key(KeyCode::Backspace)))
        );
    }

    #[test]
    fn test_lone_escape() {
        let (consumed, event) = parse_one(&[0x1b]);
        assert_eq!(consumed, 1);
        assert_eq!(event, Some(Event::Key(KeyEvent::key(KeyCode::Esc))));
    }

    #[test]
    fn test_arrow_keys() {
        let (consumed, event) = parse_one(b"\x1b[A");
        assert_eq!(consumed, 3);
        assert_eq!(event, Some(Event::Key(KeyEvent::key(KeyCode::Up))));

        let (_, event) = parse_one(b"\x1b[D");
        assert_eq!(event, Some(Event::Key(KeyEvent::key(KeyCode::Left))));
    }

    #[test]
    fn test_delete_key() {
        let (consumed, event) = parse_one(b"\x1b[3~");
        assert_eq!(consumed, 4);
        assert_eq!(event, Some(Event::Key(KeyEvent::key(KeyCode::Delete))));
    }

    #[test]
    fn test_unknown_csi_is_skipped() {
        // Cursor position report: consumed whole, no event.
        let (consumed, event) = parse_one(b"\x1b[12;40R");
        assert_eq!(consumed, 8);
        assert_eq!(event, None);
    }

    #[test]
    fn test_stream_of_events() {
        let bytes = b"ab\x1b[B";
        let mut parser = InputParser::new();
        let mut offset = 0;
        let mut events = Vec::new();
        while offset < bytes.len() {
            let (consumed, event) = parser.parse(&bytes[offset..]).unwrap();
            offset += consumed;
            if let Some(event) = event {
                events.push(event);
            }
        }
        assert_eq!(
            events,
            vec![
                Event::Key(KeyEvent::char('a')),
                Event::Key(KeyEvent::char('b')),
                Event::Key(KeyEvent::key(KeyCode::Down)),
            ]
        );
    }
}
