//! JSON shapes of the views: entries carry their rating band next to the parsed fields

use serde::Serialize;

use super::rating::RatingBand;
use crate::models::MovieEntry;
use crate::views::TimelineRow;

/// A [`MovieEntry`] plus the band of its rating; `band` is `null` unless the entry
/// is watched and rated
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EntryJson<'a> {
    #[serde(flatten)]
    pub entry: &'a MovieEntry,
    pub band: Option<RatingBand>,
}

impl<'a> From<&'a MovieEntry> for EntryJson<'a> {
    fn from(entry: &'a MovieEntry) -> Self {
        Self { entry, band: entry.watched_rating().map(RatingBand::for_rating) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineRowJson<'a> {
    CurrentMarker,
    YearDivider(&'a str),
    Entry(EntryJson<'a>),
}

impl<'a> From<TimelineRow<'a>> for TimelineRowJson<'a> {
    fn from(row: TimelineRow<'a>) -> Self {
        match row {
            TimelineRow::CurrentMarker => TimelineRowJson::CurrentMarker,
            TimelineRow::YearDivider(year) => TimelineRowJson::YearDivider(year),
            TimelineRow::Entry(entry) => TimelineRowJson::Entry(entry.into()),
        }
    }
}

pub fn entries_json<'a>(entries: &[&'a MovieEntry]) -> Vec<EntryJson<'a>> {
    entries.iter().map(|&entry| entry.into()).collect()
}

pub fn timeline_json<'a>(rows: &[TimelineRow<'a>]) -> Vec<TimelineRowJson<'a>> {
    rows.iter().map(|&row| row.into()).collect()
}
