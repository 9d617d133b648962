//! Flattening an [`EditScript`] into display lines and export text.

use serde::{Deserialize, Serialize};

use crate::script::{ChangeKind, EditScript};

/// One display line of a diff. `content` never contains a line break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedLine {
    pub kind: ChangeKind,
    pub content: String,
}

impl RenderedLine {
    /// The two-character prefix used in textual export.
    pub fn prefix(&self) -> &'static str {
        match self.kind {
            ChangeKind::Unchanged => "  ",
            ChangeKind::Added => "+ ",
            ChangeKind::Removed => "- ",
        }
    }
}

impl EditScript {
    /// Splits every hunk into per-line entries.
    ///
    /// Each hunk's text is split on `\n`; the single empty fragment produced
    /// by a trailing newline is dropped so a final line break does not show
    /// up as a spurious blank line.
    pub fn to_lines(&self) -> Vec<RenderedLine> {
        let mut lines = Vec::new();
        for hunk in &self.hunks {
            let mut fragments: Vec<&str> = hunk.text.split('\n').collect();
            if fragments.last() == Some(&"") {
                fragments.pop();
            }
            lines.extend(fragments.into_iter().map(|fragment| RenderedLine {
                kind: hunk.kind,
                content: fragment.to_owned(),
            }));
        }
        lines
    }

    /// Renders the script as prefixed text, one rendered line per output
    /// line, joined with `\n`.
    ///
    /// Defined in terms of [`to_lines`](Self::to_lines), so the two views
    /// agree on line boundaries by construction.
    pub fn to_text(&self) -> String {
        let lines = self.to_lines();
        let mut out = String::with_capacity(lines.iter().map(|l| l.content.len() + 3).sum());
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(line.prefix());
            out.push_str(&line.content);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::{diff_lines, Hunk};

    #[test]
    fn trailing_newline_does_not_produce_a_blank_line() {
        let script = diff_lines("a\nb\n", "a\nb\n");
        let lines = script.to_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].content, "a");
        assert_eq!(lines[1].content, "b");
    }

    #[test]
    fn missing_final_newline_still_renders_the_last_line() {
        let script = diff_lines("a\nb", "a\nb");
        let lines = script.to_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].content, "b");
    }

    #[test]
    fn genuinely_blank_lines_survive() {
        let script = EditScript {
            hunks: vec![Hunk {
                kind: ChangeKind::Unchanged,
                text: "a\n\nb\n".to_owned(),
            }],
        };
        let lines = script.to_lines();
        let contents: Vec<&str> = lines
            .iter()
            .map(|l| l.content.as_str())
            .collect();
        assert_eq!(contents, ["a", "", "b"]);
    }

    #[test]
    fn prefixes_match_kinds() {
        let script = diff_lines("keep\nold\n", "keep\nnew\n");
        let text = script.to_text();
        assert_eq!(text, "  keep\n- old\n+ new");
    }

    #[test]
    fn text_and_lines_agree_on_boundaries() {
        let script = diff_lines("a\nb\nc", "a\nx\nc\nd");
        let lines = script.to_lines();
        let text = script.to_text();
        let text_lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(text_lines.len(), lines.len());
        for (rendered, raw) in lines.iter().zip(text_lines) {
            assert_eq!(raw, format!("{}{}", rendered.prefix(), rendered.content));
        }
    }

    #[test]
    fn empty_script_renders_empty_text() {
        let script = diff_lines("", "");
        assert!(script.to_lines().is_empty());
        assert_eq!(script.to_text(), "");
    }
}
