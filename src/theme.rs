//! Dark/light theme state and the chrome palettes projected from it.
//!
//! The theme is the only piece of navigation state that survives a
//! session. It is persisted as a single string value (see
//! [`crate::prefs`]) and defaults to [`Theme::Dark`] when nothing is
//! stored.

use crate::color::Rgba;

/// Binary display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Persisted string form (`"dark"` / `"light"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse a persisted string form. Anything unrecognized is `None`;
    /// the preference layer substitutes the default.
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Status-bar indicator glyph for this theme.
    ///
    /// The glyph names the state you would switch *to*: dark mode shows a
    /// sun, light mode shows a moon.
    #[must_use]
    pub const fn indicator_glyph(self) -> &'static str {
        match self {
            Self::Dark => "☀",
            Self::Light => "🌙",
        }
    }

    /// Chrome palette for this theme.
    #[must_use]
    pub const fn palette(self) -> &'static Palette {
        match self {
            Self::Dark => &Palette::DARK,
            Self::Light => &Palette::LIGHT,
        }
    }
}

/// Editor-chrome colors for one theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Editor content background.
    pub background: Rgba,
    /// Sidebar / activity bar / panel background.
    pub panel: Rgba,
    /// Title and status bar background.
    pub chrome: Rgba,
    /// Default text.
    pub foreground: Rgba,
    /// Secondary text (hints, line numbers, inactive entries).
    pub dim: Rgba,
    /// Accent (active tab underline, status bar fill, links).
    pub accent: Rgba,
    /// Active-row highlight behind the selected explorer entry.
    pub highlight: Rgba,
    /// Terminal-panel success text.
    pub success: Rgba,
}

impl Palette {
    /// VS Code-ish dark chrome.
    pub const DARK: Self = Self {
        background: Rgba::rgb(0x1e, 0x1e, 0x1e),
        panel: Rgba::rgb(0x25, 0x26, 0x26),
        chrome: Rgba::rgb(0x32, 0x33, 0x33),
        foreground: Rgba::rgb(0xcc, 0xcc, 0xcc),
        dim: Rgba::rgb(0x85, 0x85, 0x85),
        accent: Rgba::rgb(0x00, 0x7a, 0xcc),
        highlight: Rgba::rgb(0x37, 0x37, 0x3d),
        success: Rgba::rgb(0x28, 0xc8, 0x40),
    };

    /// Light counterpart with the same accent.
    pub const LIGHT: Self = Self {
        background: Rgba::rgb(0xff, 0xff, 0xff),
        panel: Rgba::rgb(0xf3, 0xf3, 0xf3),
        chrome: Rgba::rgb(0xdd, 0xdd, 0xdd),
        foreground: Rgba::rgb(0x33, 0x33, 0x33),
        dim: Rgba::rgb(0x6e, 0x6e, 0x6e),
        accent: Rgba::rgb(0x00, 0x7a, 0xcc),
        highlight: Rgba::rgb(0xe4, 0xe6, 0xf1),
        success: Rgba::rgb(0x14, 0x8f, 0x2e),
    };
}
