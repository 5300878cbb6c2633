use anchored_regex::Captures;

const COLOR_START: &str = "\x1b[01;31m";
const COLOR_RESET: &str = "\x1b[m";

pub fn maybe_colorize(s: &str, use_color: bool) -> String {
    if use_color && !s.is_empty() {
        format!("{COLOR_START}{s}{COLOR_RESET}")
    } else {
        s.to_string()
    }
}

/// `line` with its first `matched_len` bytes highlighted.
pub fn highlight_prefix(line: &str, matched_len: usize, use_color: bool) -> String {
    let (matched, rest) = line.split_at(matched_len);
    format!("{}{rest}", maybe_colorize(matched, use_color))
}

/// One line per capture slot, e.g. `  $1: ["8588"]`.
pub fn capture_lines(captures: &Captures<'_>) -> Vec<String> {
    captures
        .iter()
        .map(|(id, entries)| format!("  ${id}: {entries:?}"))
        .collect()
}
