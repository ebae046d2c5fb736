use super::line::{is_space, parse_line};
use crate::models::{MovieEntry, Section};

const YEAR_HEADER_PREFIX: &str = "##";
const YEAR_DIGITS: usize = 4;

/// Non-blank lines of `text`, trimmed, for both LF and CRLF endings
fn content_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(|line| line.trim_matches(is_space)).filter(|line| !line.is_empty())
}

/// Parse every checklist line of the document, in document order
///
/// Headers, prose and malformed lines are skipped without error.
pub fn parse_entries(text: &str) -> Vec<MovieEntry> {
    content_lines(text).filter_map(parse_line).collect()
}

/// Year of a `## YYYY` header line (exactly four ASCII digits)
pub fn parse_year_header(line: &str) -> Option<&str> {
    let year = line.strip_prefix(YEAR_HEADER_PREFIX)?.trim_matches(is_space);
    let is_year = year.len() == YEAR_DIGITS && year.bytes().all(|b| b.is_ascii_digit());
    is_year.then_some(year)
}

/// Parse the document into year sections
///
/// Entries before the first header form a leading section without a year; it is
/// only emitted when it has entries. A header always produces a section, even
/// when no entries follow it. Sections come out in document order.
///
/// # Examples
///
/// ```
/// use movie_log::parsers::parse_sections;
///
/// let sections = parse_sections("- [x] A\n## 2024\n- [ ] B");
/// assert_eq!(sections.len(), 2);
/// assert_eq!(sections[0].year, None);
/// assert_eq!(sections[1].year.as_deref(), Some("2024"));
/// ```
pub fn parse_sections(text: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current = Section::new(None);

    for line in content_lines(text) {
        if let Some(year) = parse_year_header(line) {
            let finished = std::mem::replace(&mut current, Section::new(Some(year.to_string())));
            if finished.is_emittable() {
                sections.push(finished);
            }
            continue;
        }

        if let Some(entry) = parse_line(line) {
            current.items.push(entry);
        }
    }

    if current.is_emittable() {
        sections.push(current);
    }

    sections
}
