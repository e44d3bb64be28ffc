//! Text styling with attributes and colors.
//!
//! [`Style`] pairs optional foreground/background colors with
//! [`TextAttributes`] bitflags. Styles are immutable and cheap to copy;
//! the `with_*` methods return modified copies.
//!
//! # Examples
//!
//! ```
//! use codefolio::{Rgba, Style};
//!
//! let title = Style::fg(Rgba::WHITE).with_bold();
//! let hint = Style::fg(Rgba::from_hex("#858585").unwrap()).with_dim();
//! assert!(title.attributes.contains(codefolio::TextAttributes::BOLD));
//! # let _ = hint;
//! ```

use crate::color::Rgba;
use bitflags::bitflags;

bitflags! {
    /// Text rendering attributes (bold, italic, underline, etc.).
    ///
    /// Attributes are represented as bitflags and can be combined using
    /// bitwise OR. Not all terminals support all attributes.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold/increased intensity.
        const BOLD      = 0x01;
        /// Dim/decreased intensity.
        const DIM       = 0x02;
        /// Italic (not widely supported).
        const ITALIC    = 0x04;
        /// Underlined text.
        const UNDERLINE = 0x08;
        /// Swapped foreground/background.
        const INVERSE   = 0x10;
    }
}

/// Complete text style: colors plus attributes.
///
/// `None` for a color means "use terminal default" rather than a specific
/// color, so styled text respects the user's terminal theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    /// Foreground color (None = terminal default).
    pub fg: Option<Rgba>,
    /// Background color (None = terminal default).
    pub bg: Option<Rgba>,
    /// Text rendering attributes.
    pub attributes: TextAttributes,
}

impl Style {
    /// Empty style with no colors or attributes.
    pub const NONE: Self = Self {
        fg: None,
        bg: None,
        attributes: TextAttributes::empty(),
    };

    /// Create a style with only a foreground color.
    #[must_use]
    pub const fn fg(color: Rgba) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            attributes: TextAttributes::empty(),
        }
    }

    /// Create a style with only a background color.
    #[must_use]
    pub const fn bg(color: Rgba) -> Self {
        Self {
            fg: None,
            bg: Some(color),
            attributes: TextAttributes::empty(),
        }
    }

    /// Return a new style with the specified foreground color.
    #[must_use]
    pub const fn with_fg(self, color: Rgba) -> Self {
        Self {
            fg: Some(color),
            ..self
        }
    }

    /// Return a new style with the specified background color.
    #[must_use]
    pub const fn with_bg(self, color: Rgba) -> Self {
        Self {
            bg: Some(color),
            ..self
        }
    }

    /// Return a new style with the given attributes added.
    #[must_use]
    pub const fn with_attributes(self, attrs: TextAttributes) -> Self {
        Self {
            attributes: self.attributes.union(attrs),
            ..self
        }
    }

    /// Return a new style with the bold attribute added.
    #[must_use]
    pub const fn with_bold(self) -> Self {
        self.with_attributes(TextAttributes::BOLD)
    }

    /// Return a new style with the dim attribute added.
    #[must_use]
    pub const fn with_dim(self) -> Self {
        self.with_attributes(TextAttributes::DIM)
    }

    /// Return a new style with the italic attribute added.
    #[must_use]
    pub const fn with_italic(self) -> Self {
        self.with_attributes(TextAttributes::ITALIC)
    }

    /// Return a new style with the underline attribute added.
    #[must_use]
    pub const fn with_underline(self) -> Self {
        self.with_attributes(TextAttributes::UNDERLINE)
    }

    /// Return a new style with the inverse attribute added.
    #[must_use]
    pub const fn with_inverse(self) -> Self {
        self.with_attributes(TextAttributes::INVERSE)
    }

    /// Check if this style has any non-default properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attributes.is_empty()
    }

    /// Merge two styles, with `other` taking precedence for set values.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attributes: self.attributes | other.attributes,
        }
    }
}
