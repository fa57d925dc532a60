//! Domain models for the coverage check.
//!
//! - [`CodeBlock`]: one fenced code block of a Markdown document.
//! - [`Status`]: a bracketed status marker (`[x]`, `[~]`, `[?]`, `[-]`).
//! - [`Section`]: the logical section a feature-map block belongs to.
//! - [`SectionSummary`]: per-section line and status tallies.

mod block;
mod section;
mod status;
mod summary;

pub use block::*;
pub use section::*;
pub use status::*;
pub use summary::*;
