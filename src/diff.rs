//! Diff rendering for dry-run previews.

use similar::{ChangeTag, TextDiff};
use std::fmt::Write;

use crate::rewrite::FileRewrite;

// ANSI color codes
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// Generates a unified diff of a pending rewrite.
pub fn unified_diff(rewrite: &FileRewrite) -> String {
    render(rewrite, false)
}

/// Generates a colorized diff for terminal display.
pub fn colorized_diff(rewrite: &FileRewrite) -> String {
    render(rewrite, true)
}

fn render(rewrite: &FileRewrite, color: bool) -> String {
    let diff = TextDiff::from_lines(&rewrite.original, &rewrite.transformed);
    let mut output = String::new();

    let (header_color, header_reset) = if color { (CYAN, RESET) } else { ("", "") };
    writeln!(
        &mut output,
        "{}--- a/{}{}",
        header_color,
        rewrite.path.display(),
        header_reset
    )
    .unwrap();
    writeln!(
        &mut output,
        "{}+++ b/{}{}",
        header_color,
        rewrite.path.display(),
        header_reset
    )
    .unwrap();

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            writeln!(&mut output).unwrap();
        }

        for op in group {
            for change in diff.iter_changes(op) {
                let (sign, line_color) = match change.tag() {
                    ChangeTag::Delete => ("-", RED),
                    ChangeTag::Insert => ("+", GREEN),
                    ChangeTag::Equal => (" ", ""),
                };

                if color && !line_color.is_empty() {
                    write!(&mut output, "{}{}{}{}", line_color, sign, change.value(), RESET)
                        .unwrap();
                } else {
                    write!(&mut output, "{}{}", sign, change.value()).unwrap();
                }
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample() -> FileRewrite {
        FileRewrite {
            path: PathBuf::from("src/components/FeaturesV1.js"),
            original: "const x = row.paramDesc;\n".to_string(),
            transformed: "const x = row.description;\n".to_string(),
        }
    }

    #[test]
    fn test_unified_diff_shows_change() {
        let diff = unified_diff(&sample());
        assert!(diff.contains("--- a/src/components/FeaturesV1.js"));
        assert!(diff.contains("-const x = row.paramDesc;"));
        assert!(diff.contains("+const x = row.description;"));
    }

    #[test]
    fn test_colorized_diff_wraps_changed_lines() {
        let diff = colorized_diff(&sample());
        assert!(diff.contains("\x1b[31m-const x = row.paramDesc;"));
        assert!(diff.contains("\x1b[32m+const x = row.description;"));
    }
}
