//! Low-level line helpers.
//!
//! These operate on single lines of text and make no stripping decisions;
//! the scanner owns that logic.

/// Columns of leading whitespace in a line. A tab counts as 8.
pub fn leading_space(line: &str) -> usize {
    let mut count = 0;
    for c in line.chars() {
        match c {
            ' ' => count += 1,
            '\t' => count += 8,
            _ => break,
        }
    }
    count
}

/// The last non-blank character of a line, or `None` for a blank line.
pub fn last_non_blank(line: &str) -> Option<char> {
    line.trim_end().chars().last()
}

/// Remove the last `{` in a line together with the run of spaces before it.
/// A line without a `{` is returned unchanged.
pub fn remove_open(line: &str) -> String {
    match line.rfind('{') {
        None => line.to_string(),
        Some(i) => {
            let head = line[..i].trim_end_matches(' ');
            format!("{}{}", head, &line[i + 1..])
        }
    }
}

/// Remove the last `}` in a line together with the run of spaces after it.
/// A line without a `}` is returned unchanged.
pub fn remove_close(line: &str) -> String {
    match line.rfind('}') {
        None => line.to_string(),
        Some(i) => {
            let tail = line[i + 1..].trim_start_matches(' ');
            format!("{}{}", &line[..i], tail)
        }
    }
}

/// Split a trimmed line into the part outside any `/* ... */` comment,
/// assuming at most one comment region per line. `in_comment` says whether
/// the line begins inside an unterminated comment; the returned flag says
/// whether the next line does.
pub fn split_comment(pline: &str, in_comment: bool) -> (String, bool) {
    let cstart = pline.find("/*");
    let cend = pline.find("*/");
    match (cstart, cend) {
        (Some(s), Some(e)) => {
            let joined = format!("{}{}", &pline[..s], &pline[e + 2..]);
            (joined.trim().to_string(), false)
        }
        (Some(s), None) => (pline[..s].trim().to_string(), true),
        (None, Some(e)) => (pline[e + 2..].trim().to_string(), false),
        (None, None) if in_comment => (String::new(), true),
        (None, None) => (pline.to_string(), false),
    }
}
