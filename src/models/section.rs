use serde::{Deserialize, Serialize};

/// The logical section a feature-map block belongs to.
///
/// Five headers name their own section; `TECH REPLACEMENTS` and
/// `BEHAVIOR CHANGES TO CONSIDER` fold into the `MigrationNotes` bucket;
/// anything else lands in `Unknown`. Variants are declared in report display
/// order, so the derived `Ord` drives `BTreeMap` iteration directly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Editor,
    Player,
    PublicPages,
    StateApi,
    UiCore,
    MigrationNotes,
    Unknown,
}

impl Section {
    /// The five headers that name their own section.
    pub const TOP_LEVEL_HEADERS: [&'static str; 5] =
        ["EDITOR", "PLAYER", "PUBLIC PAGES", "STATE & API", "UI CORE"];

    /// The two headers folded into [`Section::MigrationNotes`].
    pub const MIGRATION_NOTE_HEADERS: [&'static str; 2] =
        ["TECH REPLACEMENTS", "BEHAVIOR CHANGES TO CONSIDER"];

    /// Map a block header to its section bucket.
    pub fn from_header(header: &str) -> Self {
        match header {
            "EDITOR" => Self::Editor,
            "PLAYER" => Self::Player,
            "PUBLIC PAGES" => Self::PublicPages,
            "STATE & API" => Self::StateApi,
            "UI CORE" => Self::UiCore,
            "TECH REPLACEMENTS" | "BEHAVIOR CHANGES TO CONSIDER" => Self::MigrationNotes,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Editor => "EDITOR",
            Self::Player => "PLAYER",
            Self::PublicPages => "PUBLIC PAGES",
            Self::StateApi => "STATE & API",
            Self::UiCore => "UI CORE",
            Self::MigrationNotes => "MIGRATION NOTES",
            Self::Unknown => "UNKNOWN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_headers_map_to_themselves() {
        for header in Section::TOP_LEVEL_HEADERS {
            assert_eq!(Section::from_header(header).as_str(), header);
        }
    }

    #[test]
    fn test_notes_headers_merge() {
        assert_eq!(
            Section::from_header("TECH REPLACEMENTS"),
            Section::MigrationNotes
        );
        assert_eq!(
            Section::from_header("BEHAVIOR CHANGES TO CONSIDER"),
            Section::MigrationNotes
        );
    }

    #[test]
    fn test_anything_else_is_unknown() {
        assert_eq!(Section::from_header("ROADMAP"), Section::Unknown);
        assert_eq!(Section::from_header("editor"), Section::Unknown);
    }
}
