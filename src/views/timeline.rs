use serde::Serialize;

use crate::models::{MovieEntry, Section};

/// One row of the newest-first timeline
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineRow<'a> {
    /// Top marker: everything below it up to the first year divider is the current run
    CurrentMarker,
    /// Closes the items of a year section
    YearDivider(&'a str),
    Entry(&'a MovieEntry),
}

/// Newest-first rendering order of a sectioned log
///
/// Sections are reversed, and so are the items inside each section: the line
/// appended last to the file comes first. Each section with a year is followed by
/// a [`TimelineRow::YearDivider`]; the headerless leading section gets none. With
/// `include_current`, a [`TimelineRow::CurrentMarker`] opens the timeline.
pub fn timeline(sections: &[Section], include_current: bool) -> Vec<TimelineRow<'_>> {
    let item_count: usize = sections.iter().map(|s| s.items.len()).sum();
    let mut rows = Vec::with_capacity(item_count + sections.len() + 1);

    if include_current {
        rows.push(TimelineRow::CurrentMarker);
    }

    for section in sections.iter().rev() {
        rows.extend(section.items.iter().rev().map(TimelineRow::Entry));
        if let Some(year) = section.year.as_deref() {
            rows.push(TimelineRow::YearDivider(year));
        }
    }

    rows
}
