//! Fenced code block extraction from Markdown text.

use crate::models::CodeBlock;

/// A fence line starts with three backticks, optionally followed by a
/// language tag.
const FENCE: &str = "```";

/// Split a document into its fenced code blocks, in document order.
///
/// The fence toggle is purely binary: content outside fences is dropped, and
/// a trailing unterminated block is never emitted. Lines inside a block keep
/// leading whitespace but lose trailing whitespace. Closing a fence emits the
/// accumulated block even when it is empty.
pub fn extract_code_blocks(text: &str) -> Vec<CodeBlock> {
    let mut blocks = Vec::new();
    let mut in_block = false;
    let mut current: Vec<String> = Vec::new();

    for line in text.lines() {
        if line.starts_with(FENCE) {
            if in_block {
                blocks.push(CodeBlock {
                    lines: std::mem::take(&mut current),
                });
                in_block = false;
            } else {
                in_block = true;
            }
            continue;
        }

        if in_block {
            current.push(line.trim_end().to_string());
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_fences_emit_half_as_many_blocks() {
        let text = "```\na\n```\nprose\n```text\nb\nc\n```\n";
        let blocks = extract_code_blocks(text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].lines, vec!["a"]);
        assert_eq!(blocks[1].lines, vec!["b", "c"]);
    }

    #[test]
    fn test_content_outside_fences_is_dropped() {
        let text = "# Title\n\nsome prose\n```\ninside\n```\ntrailing prose\n";
        let blocks = extract_code_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].lines, vec!["inside"]);
    }

    #[test]
    fn test_unterminated_trailing_block_is_discarded() {
        let text = "```\nkept\n```\n```\nlost\n";
        let blocks = extract_code_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].lines, vec!["kept"]);
    }

    #[test]
    fn test_empty_block_is_still_emitted() {
        let blocks = extract_code_blocks("```\n```\n");
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].lines.is_empty());
    }

    #[test]
    fn test_lines_are_right_trimmed_only() {
        let blocks = extract_code_blocks("```\n  indented   \n```\n");
        assert_eq!(blocks[0].lines, vec!["  indented"]);
    }

    #[test]
    fn test_language_tag_still_toggles() {
        let blocks = extract_code_blocks("```markdown\nEDITOR\n```\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].lines, vec!["EDITOR"]);
    }
}
