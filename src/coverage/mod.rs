//! Line collection, plan filtering, and section summarization.

use std::collections::{BTreeMap, BTreeSet};

use crate::markdown::extract_code_blocks;
use crate::models::{Section, SectionSummary, Status};

/// Collect the distinct non-blank lines of every non-legend code block in the
/// feature map. A block's header line is collected like any other line.
pub fn feature_map_lines(feature_map_text: &str) -> BTreeSet<String> {
    let mut lines = BTreeSet::new();
    for block in extract_code_blocks(feature_map_text) {
        if block.is_legend() {
            continue;
        }
        for line in block.lines {
            if !line.is_empty() {
                lines.insert(line);
            }
        }
    }
    tracing::debug!(lines = lines.len(), "collected feature map lines");
    lines
}

/// Tree-drawing glyphs that mark a copied feature-map line in the plan.
const TREE_GLYPHS: [&str; 3] = ["├──", "└──", "│"];

/// Heuristic for "looks like a feature-map line".
///
/// Deliberately approximate: tree glyphs, bracketed status markers, or an
/// exact section/notes header all pass. The plan may reproduce feature lines
/// outside code fences, so the caller scans the whole document.
fn looks_like_feature_map_line(line: &str) -> bool {
    if line.is_empty() {
        return false;
    }
    if TREE_GLYPHS.iter().any(|glyph| line.contains(glyph)) {
        return true;
    }
    if Status::ALL.iter().any(|status| line.contains(status.marker())) {
        return true;
    }
    Section::TOP_LEVEL_HEADERS.iter().any(|header| *header == line)
        || Section::MIGRATION_NOTE_HEADERS.iter().any(|header| *header == line)
}

/// Collect the distinct plan lines that pass the feature-line heuristic.
/// Every raw line of the document is tested, right-trimmed.
pub fn plan_feature_like_lines(plan_text: &str) -> BTreeSet<String> {
    let lines: BTreeSet<String> = plan_text
        .lines()
        .map(str::trim_end)
        .filter(|line| looks_like_feature_map_line(line))
        .map(str::to_string)
        .collect();
    tracing::debug!(lines = lines.len(), "collected plan feature-like lines");
    lines
}

/// Bucket feature-map lines by section and tally status markers.
///
/// Returns the per-section summaries and the grand total of status-tagged
/// lines. Blocks with no non-blank line are skipped; lines equal to the
/// block's header are never counted. An unmarked line bumps
/// `unmarked_total` only when it sits under the literal `TECH REPLACEMENTS`
/// header and contains an arrow, or when its section is unrecognized.
pub fn section_summaries(feature_map_text: &str) -> (BTreeMap<Section, SectionSummary>, u32) {
    let mut summaries: BTreeMap<Section, SectionSummary> = BTreeMap::new();
    let mut status_total = 0;

    for block in extract_code_blocks(feature_map_text) {
        if block.is_legend() {
            continue;
        }
        let Some(header) = block.header() else {
            continue;
        };
        let section = Section::from_header(header);
        let summary = summaries.entry(section).or_default();

        for line in &block.lines {
            if line.is_empty() || *line == header {
                continue;
            }
            summary.line_total += 1;

            if let Some(status) = Status::first_in(line) {
                summary.record_status(status);
                status_total += 1;
            } else if section == Section::Unknown
                || (section == Section::MigrationNotes
                    && header == "TECH REPLACEMENTS"
                    && line.contains('→'))
            {
                summary.unmarked_total += 1;
            }
        }
    }

    (summaries, status_total)
}
