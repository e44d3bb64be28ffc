//! RGB color type for terminal chrome styling.
//!
//! Colors are stored as 8-bit channels and emitted as true-color SGR
//! sequences. Theme palettes are defined from hex literals, so the main
//! entry point is [`Rgba::from_hex`].
//!
//! # Examples
//!
//! ```
//! use codefolio::Rgba;
//!
//! let accent = Rgba::from_hex("#007acc").unwrap();
//! assert_eq!((accent.r, accent.g, accent.b), (0x00, 0x7a, 0xcc));
//! ```

use crate::error::{Error, Result};

/// RGBA color with 8-bit components.
///
/// Alpha is carried for completeness but the renderer treats colors as
/// opaque; there is no compositing stage in this crate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque red.
    pub const RED: Self = Self::rgb(255, 0, 0);

    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0, 255, 0);

    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a hex color string (`#rrggbb` or `rrggbb`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if the string is not six hex digits
    /// after an optional leading `#`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(s.to_string()));
        }
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| Error::InvalidColor(s.to_string()))
        };
        Ok(Self::rgb(parse(0..2)?, parse(2..4)?, parse(4..6)?))
    }

    /// Hex representation (`#rrggbb`), alpha not included.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let c = Rgba::from_hex("#1e1e1e").unwrap();
        assert_eq!((c.r, c.g, c.b, c.a), (0x1e, 0x1e, 0x1e, 255));

        let no_hash = Rgba::from_hex("007acc").unwrap();
        assert_eq!(no_hash, Rgba::rgb(0x00, 0x7a, 0xcc));
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        assert!(Rgba::from_hex("#fff").is_err());
        assert!(Rgba::from_hex("#gggggg").is_err());
        assert!(Rgba::from_hex("").is_err());
        assert!(Rgba::from_hex("#1234567").is_err());
    }

    #[test]
    fn test_hex_round_trip() {
        let c = Rgba::rgb(0x4e, 0xc9, 0xb0);
        assert_eq!(Rgba::from_hex(&c.to_hex()).unwrap(), c);
    }

    #[test]
    fn test_constants() {
        assert_eq!(Rgba::BLACK, Rgba::rgb(0, 0, 0));
        assert_eq!(Rgba::WHITE.a, 255);
    }
}
