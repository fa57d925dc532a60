use serde::{Deserialize, Serialize};

/// A bracketed status marker attached to a feature line.
///
/// - `Must`: `[x]`, required for the migration
/// - `Nice`: `[~]`, nice to have
/// - `Unclear`: `[?]`, needs a decision
/// - `Excluded`: `[-]`, explicitly rejected
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Must,
    Nice,
    Unclear,
    Excluded,
}

impl Status {
    pub const ALL: [Status; 4] = [Self::Must, Self::Nice, Self::Unclear, Self::Excluded];

    /// The literal bracketed marker, e.g. `[x]`.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Must => "[x]",
            Self::Nice => "[~]",
            Self::Unclear => "[?]",
            Self::Excluded => "[-]",
        }
    }

    /// Find the first status marker anywhere in a line.
    ///
    /// Only one status is ever recorded per line; when several markers
    /// appear, the leftmost occurrence wins.
    pub fn first_in(line: &str) -> Option<Status> {
        Self::ALL
            .iter()
            .filter_map(|status| line.find(status.marker()).map(|pos| (pos, *status)))
            .min_by_key(|(pos, _)| *pos)
            .map(|(_, status)| status)
    }
}
