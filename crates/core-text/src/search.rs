//! Substring scanning over lines.

use crate::Position;

/// Find the first line at or after `start` containing `target`.
///
/// Strictly forward: lines before `start` are never visited. Byte offsets
/// are reported within the matching line.
pub fn find_forward(lines: &[String], start: usize, target: &str) -> Option<Position> {
    lines
        .iter()
        .enumerate()
        .skip(start)
        .find_map(|(idx, line)| line.find(target).map(|byte| Position::new(idx, byte)))
}

/// Replace occurrences of `target` in `line`, scanning left to right.
///
/// After each replacement the scan resumes at `p + replacement.len()` within
/// the already rewritten line, so text following a shorter replacement can be
/// re-matched while a replacement that starts with `target` is never replaced
/// again. An empty `target` matches nothing. Returns the number of
/// replacements made.
pub fn replace_resuming(line: &mut String, target: &str, replacement: &str) -> usize {
    if target.is_empty() {
        return 0;
    }
    let mut count = 0usize;
    let mut from = 0usize;
    while let Some(rel) = line.get(from..).and_then(|tail| tail.find(target)) {
        let p = from + rel;
        line.replace_range(p..p + target.len(), replacement);
        count += 1;
        from = p + replacement.len();
    }
    count
}
