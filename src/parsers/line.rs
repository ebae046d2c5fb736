//! Checklist line grammar.
//!
//! ```text
//! line          := "- [" marker "] " raw
//! marker        := "x" | "X" | " "
//! raw           := title rating_suffix? | title dangling_sep?
//! rating_suffix := ws* (sep ws*)? digits ("." digits)? "/10"      (end of line)
//! dangling_sep  := ws* sep ws*                                    (end of line)
//! sep           := "-" | "–" | "—" | ":"
//! ```
//!
//! Both suffixes are matched at their earliest possible start, so every bit of
//! whitespace and the separator in front of a rating is removed from the title.

use crate::models::MovieEntry;

const CHECKBOX_OPEN: &str = "- [";
const CHECKBOX_CLOSE: &str = "] ";
const RATING_SCALE: &str = "/10";

/// Hyphen, en dash, em dash, colon
pub(crate) fn is_separator(c: char) -> bool {
    matches!(c, '-' | '\u{2013}' | '\u{2014}' | ':')
}

/// Whitespace as trimmed from lines and titles: Unicode spaces, line terminators
/// and the BOM, but not NEL (U+0085), which stays part of the title
pub(crate) fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Parse one trimmed line into a [`MovieEntry`]
///
/// Returns `None` for anything that is not a checklist line: headers, prose,
/// malformed checkboxes, or markers other than `x`, `X` and a single space.
/// Never fails otherwise; the rating is not range-checked.
///
/// # Examples
///
/// ```
/// use movie_log::parsers::parse_line;
///
/// let entry = parse_line("- [x] Inception - 8.8/10").unwrap();
/// assert_eq!(entry.title, "Inception");
/// assert_eq!(entry.rating, Some(8.8));
/// assert!(entry.watched);
///
/// assert!(parse_line("## 2024").is_none());
/// ```
pub fn parse_line(line: &str) -> Option<MovieEntry> {
    let (watched, raw) = split_checkbox(line)?;
    let raw = raw.trim_matches(is_space);

    let entry = match split_rating_suffix(raw) {
        Some((title, rating)) => MovieEntry::new(title.trim_matches(is_space), Some(rating), watched),
        None => MovieEntry::new(strip_dangling_separator(raw).trim_matches(is_space), None, watched),
    };
    Some(entry)
}

/// Split `- [m] rest` into the watched flag and the free text after the checkbox
fn split_checkbox(line: &str) -> Option<(bool, &str)> {
    let mut rest = line.strip_prefix(CHECKBOX_OPEN)?.chars();
    let watched = match rest.next()? {
        'x' | 'X' => true,
        ' ' => false,
        _ => return None,
    };

    let raw = rest.as_str().strip_prefix(CHECKBOX_CLOSE)?;
    if raw.is_empty() || raw.contains(is_line_terminator) {
        return None;
    }
    Some((watched, raw))
}

/// Find a trailing `<sep>? <number>/10` and return the text before it plus the rating
fn split_rating_suffix(raw: &str) -> Option<(&str, f64)> {
    let body = raw.strip_suffix(RATING_SCALE)?;
    let number_start = number_start(body)?;
    let rating = body[number_start..].parse::<f64>().ok()?;

    let suffix_start = separator_start(&body[..number_start]);
    Some((&raw[..suffix_start], rating))
}

/// Byte offset where the decimal number ending `body` begins, if `body` ends in one
fn number_start(body: &str) -> Option<usize> {
    let digits_start = trailing_digits_start(body);
    if digits_start == body.len() {
        return None;
    }

    // A fraction needs digits on both sides of the dot.
    if let Some(int_part) = body[..digits_start].strip_suffix('.') {
        let int_start = trailing_digits_start(int_part);
        if int_start < int_part.len() {
            return Some(int_start);
        }
    }
    Some(digits_start)
}

fn trailing_digits_start(s: &str) -> usize {
    s.trim_end_matches(|c: char| c.is_ascii_digit()).len()
}

/// Offset of the earliest `ws* (sep ws*)?` run that ends `prefix`
fn separator_start(prefix: &str) -> usize {
    let trimmed = prefix.trim_end_matches(is_space);
    match trimmed.strip_suffix(is_separator) {
        Some(before) => before.trim_end_matches(is_space).len(),
        None => trimmed.len(),
    }
}

/// Drop one trailing `ws* sep ws*` left behind by an entry without a rating
fn strip_dangling_separator(raw: &str) -> &str {
    let trimmed = raw.trim_end_matches(is_space);
    match trimmed.strip_suffix(is_separator) {
        Some(before) => before.trim_end_matches(is_space),
        None => raw,
    }
}
