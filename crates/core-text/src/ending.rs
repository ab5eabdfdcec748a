//! Line terminator detection and splitting.

/// Line terminator style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    Cr,
    Crlf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Cr => "\r",
            LineEnding::Crlf => "\r\n",
        }
    }
}

/// Text split into terminator-free lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    pub lines: Vec<String>,
    /// Majority terminator style (ties resolved CRLF > LF > CR; LF when none).
    pub original: LineEnding,
    /// More than one terminator style was present.
    pub mixed: bool,
}

/// Split `input` on CRLF, LF, or lone CR.
///
/// A terminator ends the line before it, so a final terminator yields no
/// trailing empty line and empty input yields no lines at all.
pub fn normalize_line_endings(input: &str) -> NormalizedText {
    let (mut crlf, mut lf, mut cr) = (0usize, 0usize, 0usize);
    let mut lines = Vec::new();
    let bytes = input.as_bytes();
    let mut start = 0usize;
    let mut i = 0usize;
    // Only split at ASCII terminator bytes so multi-byte sequences stay intact.
    while i < bytes.len() {
        let width = match bytes[i] {
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                crlf += 1;
                2
            }
            b'\r' => {
                cr += 1;
                1
            }
            b'\n' => {
                lf += 1;
                1
            }
            _ => {
                i += 1;
                continue;
            }
        };
        lines.push(input[start..i].to_string());
        i += width;
        start = i;
    }
    if start < input.len() {
        lines.push(input[start..].to_string());
    }

    let mut original = LineEnding::Lf;
    let mut max = 0usize;
    for (style, count) in [
        (LineEnding::Crlf, crlf),
        (LineEnding::Lf, lf),
        (LineEnding::Cr, cr),
    ] {
        if count > max {
            max = count;
            original = style;
        }
    }
    let mixed = [crlf, lf, cr].iter().filter(|c| **c > 0).count() > 1;
    NormalizedText {
        lines,
        original,
        mixed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn crlf_with_trailing_terminator() {
        let n = normalize_line_endings("a\r\nb\r\n");
        assert_eq!(n.lines, vec!["a", "b"]);
        assert_eq!(n.original, LineEnding::Crlf);
        assert!(!n.mixed);
    }

    #[test]
    fn lone_cr() {
        let n = normalize_line_endings("a\rb\r");
        assert_eq!(n.lines, vec!["a", "b"]);
        assert_eq!(n.original, LineEnding::Cr);
    }

    #[test]
    fn mixed_picks_majority() {
        let n = normalize_line_endings("a\r\nb\nc\r\n");
        assert_eq!(n.lines, vec!["a", "b", "c"]);
        assert_eq!(n.original, LineEnding::Crlf);
        assert!(n.mixed);
    }

    #[test]
    fn no_trailing_terminator_keeps_last_line() {
        let n = normalize_line_endings("a\nb");
        assert_eq!(n.lines, vec!["a", "b"]);
    }

    #[test]
    fn blank_lines_survive() {
        let n = normalize_line_endings("\n\nx\n");
        assert_eq!(n.lines, vec!["", "", "x"]);
    }

    #[test]
    fn empty_input_has_no_lines() {
        let n = normalize_line_endings("");
        assert!(n.lines.is_empty());
        assert_eq!(n.original, LineEnding::Lf);
        assert!(!n.mixed);
    }

    #[test]
    fn multibyte_content_untouched() {
        let n = normalize_line_endings("caf\u{e9}\r\n\u{1F680}");
        assert_eq!(n.lines, vec!["caf\u{e9}", "\u{1F680}"]);
    }
}
