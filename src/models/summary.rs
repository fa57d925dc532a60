use serde::{Deserialize, Serialize};

use super::Status;

/// Per-section tallies of feature lines and their status markers.
///
/// `line_total` counts every non-blank, non-header line of the section's
/// blocks. `unmarked_total` counts only the unmarked lines the summarizer
/// singles out (arrow lines under TECH REPLACEMENTS, or any unmarked line in
/// an unrecognized section).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionSummary {
    pub line_total: u32,
    pub must: u32,
    pub nice: u32,
    pub unclear: u32,
    pub excluded: u32,
    pub status_total: u32,
    pub unmarked_total: u32,
}

impl SectionSummary {
    /// Record one status-tagged line.
    pub fn record_status(&mut self, status: Status) {
        match status {
            Status::Must => self.must += 1,
            Status::Nice => self.nice += 1,
            Status::Unclear => self.unclear += 1,
            Status::Excluded => self.excluded += 1,
        }
        self.status_total += 1;
    }
}
