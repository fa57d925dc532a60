use serde::{Deserialize, Serialize};

/// One fenced code block: the right-trimmed lines between a matched pair of
/// triple-backtick fences.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeBlock {
    pub lines: Vec<String>,
}

impl CodeBlock {
    /// The block's header: its first non-blank line, if any.
    pub fn header(&self) -> Option<&str> {
        self.lines
            .iter()
            .map(String::as_str)
            .find(|line| !line.trim().is_empty())
    }

    /// Legend blocks define the marker key and carry no feature lines.
    ///
    /// A block is a legend iff its joined text contains both key substrings
    /// verbatim.
    pub fn is_legend(&self) -> bool {
        let joined = self.lines.join("\n");
        joined.contains("[x] = Must have") && joined.contains("[~] = Nice to have")
    }
}
