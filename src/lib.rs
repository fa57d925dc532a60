//! Cross-checks a Markdown feature map against a migration plan.
//!
//! The feature map keeps its feature lines inside fenced code blocks, each
//! line usually tagged with a bracketed status marker; the migration plan is
//! expected to restate every one of those lines verbatim. This crate extracts
//! both sides, diffs them as exact-text line sets, and tallies status markers
//! per section.

pub mod coverage;
pub mod markdown;
pub mod models;
pub mod report;
