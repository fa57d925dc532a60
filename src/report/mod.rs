//! Report assembly and rendering.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::Result;

use crate::coverage;
use crate::models::{Section, SectionSummary};

/// The outcome of one coverage check, ready to render.
#[derive(Debug, Clone)]
pub struct CoverageReport {
    pub feature_lines: BTreeSet<String>,
    pub plan_lines: BTreeSet<String>,
    /// Present in the feature map, absent from the plan. Sorted.
    pub missing: Vec<String>,
    /// Present in the plan, absent from the feature map. Sorted.
    pub extra: Vec<String>,
    pub summaries: BTreeMap<Section, SectionSummary>,
    pub status_total: u32,
}

impl CoverageReport {
    /// Build the report from both document texts.
    pub fn from_documents(feature_map_text: &str, plan_text: &str) -> Self {
        let feature_lines = coverage::feature_map_lines(feature_map_text);
        let plan_lines = coverage::plan_feature_like_lines(plan_text);
        let (summaries, status_total) = coverage::section_summaries(feature_map_text);

        // BTreeSet difference is already lexicographically sorted.
        let missing = feature_lines.difference(&plan_lines).cloned().collect();
        let extra = plan_lines.difference(&feature_lines).cloned().collect();

        Self {
            feature_lines,
            plan_lines,
            missing,
            extra,
            summaries,
            status_total,
        }
    }

    /// Whether every feature-map line is in the plan and vice versa.
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }

    /// Process exit code: 0 on full coverage, 1 on any discrepancy.
    pub fn exit_code(&self) -> i32 {
        if self.is_clean() {
            0
        } else {
            1
        }
    }

    /// Render the plain-text report.
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "FEATURE_MAP feature lines: {}\n",
            self.feature_lines.len()
        ));
        out.push_str(&format!(
            "Plan feature-like lines:   {}\n",
            self.plan_lines.len()
        ));
        out.push_str(&format!("Missing lines:             {}\n", self.missing.len()));
        out.push_str(&format!("Extra lines:               {}\n", self.extra.len()));

        out.push_str("\n--- Feature Counts (status-tagged items) ---\n");
        out.push_str(&format!(
            "Total status-tagged items: {}\n",
            self.status_total
        ));
        for (section, summary) in &self.summaries {
            out.push_str(&format!(
                "{}: lines={}, status={} (x={}, ~={}, ?={}, -={})",
                section.as_str(),
                summary.line_total,
                summary.status_total,
                summary.must,
                summary.nice,
                summary.unclear,
                summary.excluded,
            ));
            if summary.unmarked_total > 0 {
                out.push_str(&format!(", unmarked={}", summary.unmarked_total));
            }
            out.push('\n');
        }

        if !self.missing.is_empty() {
            out.push_str("\n--- Missing (present in FEATURE_MAP, absent in plan) ---\n");
            for line in &self.missing {
                out.push_str(line);
                out.push('\n');
            }
        }

        if !self.extra.is_empty() {
            out.push_str("\n--- Extra (present in plan, absent in FEATURE_MAP) ---\n");
            for line in &self.extra {
                out.push_str(line);
                out.push('\n');
            }
        }

        out
    }
}

/// Read both documents and run the full check.
///
/// A missing or non-UTF-8 file propagates untranslated and aborts the run.
pub fn check_files(feature_map: &Path, plan: &Path) -> Result<CoverageReport> {
    let feature_map_text = std::fs::read_to_string(feature_map)?;
    let plan_text = std::fs::read_to_string(plan)?;
    Ok(CoverageReport::from_documents(&feature_map_text, &plan_text))
}
