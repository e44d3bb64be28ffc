//! Portfolio sections: the "files" of the editor shell.
//!
//! Sections are static and closed: the set is fixed at compile time, one is
//! always active, and navigation only ever moves between members of this
//! set. [`SectionId`] declaration order is load-bearing — the explorer
//! listing, numeric shortcuts, and search result ordering all follow it.

/// Identifier for one portfolio section, in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Projects,
    Skills,
    Experience,
    Internships,
    Certifications,
    Contact,
}

impl SectionId {
    /// Number of sections.
    pub const COUNT: usize = 7;

    /// All sections in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::About,
        Self::Projects,
        Self::Skills,
        Self::Experience,
        Self::Internships,
        Self::Certifications,
        Self::Contact,
    ];

    /// Stable string id, as used by click targets and the preference layer.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Internships => "internships",
            Self::Certifications => "certifications",
            Self::Contact => "contact",
        }
    }

    /// Position in declaration order.
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Look up a section by string id. Unknown ids resolve to `None`;
    /// callers treat that as a no-op rather than an error.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.id() == id)
    }

    /// Look up a section by declaration-order position.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The full static record for this section.
    #[must_use]
    pub fn section(self) -> &'static Section {
        &SECTIONS[self.index()]
    }
}

/// One titled block of portfolio content.
#[derive(Debug)]
pub struct Section {
    /// Section identifier.
    pub id: SectionId,
    /// Display file name shown in the explorer and tab bar.
    pub file_name: &'static str,
    /// Icon glyph paired with the file name.
    pub icon: &'static str,
    /// Content lines; also the corpus for sidebar search.
    pub content: &'static [&'static str],
}

/// Static section registry in declaration order.
pub static SECTIONS: [Section; SectionId::COUNT] = [
    Section {
        id: SectionId::About,
        file_name: "about.html",
        icon: "📄",
        content: &[
            "const developer = {",
            "  name: 'Rishit Saxena',",
            "  role: 'Full-Stack Developer',",
            "  stack: ['React', 'Node.js', 'MongoDB'],",
            "  loves: 'building things that feel alive',",
            "};",
        ],
    },
    Section {
        id: SectionId::Projects,
        file_name: "projects.js",
        icon: "🚀",
        content: &[
            "// awesome-project — realtime collaboration board",
            "//   React frontend, Node.js backend, MongoDB storage",
            "// portfolio-terminal — this very site, as a code editor",
            "//   vanilla everything, zero frameworks",
            "// pixel-weather — glanceable forecasts",
            "//   Express API with an animated canvas front",
        ],
    },
    Section {
        id: SectionId::Skills,
        file_name: "skills.json",
        icon: "⚡",
        content: &[
            "{",
            "  \"skills\": {",
            "    \"frontend\": [\"React\", \"JavaScript\", \"TypeScript\", \"CSS\"],",
            "    \"backend\": [\"Node.js\", \"Express\", \"MongoDB\"],",
            "    \"tools\": [\"Git\", \"Docker\", \"Figma\"]",
            "  }",
            "}",
        ],
    },
    Section {
        id: SectionId::Experience,
        file_name: "experience.md",
        icon: "💼",
        content: &[
            "# Experience",
            "## Freelance Web Developer — 2023-present",
            "Shipped client dashboards and storefronts end to end.",
            "## Open source",
            "Maintainer of two small Node.js utility libraries.",
        ],
    },
    Section {
        id: SectionId::Internships,
        file_name: "internships.ts",
        icon: "🎓",
        content: &[
            "export const internships = [",
            "  { company: 'Webly Labs', summer: 2024, focus: 'frontend' },",
            "  { company: 'DataNest', summer: 2023, focus: 'API design' },",
            "];",
        ],
    },
    Section {
        id: SectionId::Certifications,
        file_name: "certifications.css",
        icon: "🏆",
        content: &[
            ".certs {",
            "  --aws-cloud-practitioner: 2024;",
            "  --meta-frontend-developer: 2023;",
            "  --freecodecamp-fullstack: 2023;",
            "}",
        ],
    },
    Section {
        id: SectionId::Contact,
        file_name: "contact.html",
        icon: "📧",
        content: &[
            "<address>",
            "  <a href=\"mailto:rishitwork28@gmail.com\">rishitwork28@gmail.com</a>",
            "  <a href=\"https://github.com/rizzit17\">github.com/rizzit17</a>",
            "  <a href=\"https://linkedin.com/in/rishitsaxena\">linkedin</a>",
            "</address>",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_matches_declaration_order() {
        for (i, section) in SECTIONS.iter().enumerate() {
            assert_eq!(section.id, SectionId::ALL[i]);
            assert_eq!(section.id.index(), i);
        }
    }

    #[test]
    fn test_id_round_trip() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::from_id(id.id()), Some(id));
        }
        assert_eq!(SectionId::from_id("nonexistent"), None);
        assert_eq!(SectionId::from_id(""), None);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(SectionId::from_index(0), Some(SectionId::About));
        assert_eq!(
            SectionId::from_index(SectionId::COUNT - 1),
            Some(SectionId::Contact)
        );
        assert_eq!(SectionId::from_index(SectionId::COUNT), None);
    }

    #[test]
    fn test_sections_have_content() {
        for section in &SECTIONS {
            assert!(!section.file_name.is_empty());
            assert!(!section.icon.is_empty());
            assert!(!section.content.is_empty());
        }
    }
}
