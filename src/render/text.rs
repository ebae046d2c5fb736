//! Plain-text rendering of the views for the CLI

use super::rating::{RatingBand, format_rating};
use crate::models::MovieEntry;
use crate::stats::{Distribution, Stats};
use crate::utils::terminal::sanitize_for_terminal;
use crate::views::TimelineRow;

const BAR_WIDTH: usize = 20;
const BAR_CELL: char = '█';
const CURRENT_LABEL: &str = "CURRENT";

/// `[x] Title  8.5/10 (great)`; ratings only show for watched entries
pub fn render_entry(entry: &MovieEntry) -> String {
    let checkbox = if entry.watched { "[x]" } else { "[ ]" };
    let title = sanitize_for_terminal(&entry.title);

    match entry.watched_rating() {
        Some(rating) => format!(
            "{} {}  {} ({})",
            checkbox,
            title,
            format_rating(rating),
            RatingBand::for_rating(rating).label()
        ),
        None => format!("{} {}", checkbox, title),
    }
}

fn render_divider(label: &str) -> String {
    format!("── {} ──", sanitize_for_terminal(label))
}

pub fn render_timeline(rows: &[TimelineRow<'_>]) -> String {
    let mut out = String::new();
    for row in rows {
        let line = match row {
            TimelineRow::CurrentMarker => render_divider(CURRENT_LABEL),
            TimelineRow::YearDivider(year) => render_divider(year),
            TimelineRow::Entry(entry) => render_entry(entry),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Numbered list, one entry per line
pub fn render_list(entries: &[&MovieEntry]) -> String {
    let width = entries.len().to_string().len();
    let mut out = String::new();
    for (rank, entry) in entries.iter().enumerate() {
        out.push_str(&format!("{:>width$}. {}\n", rank + 1, render_entry(entry), width = width));
    }
    out
}

/// Bar length proportional to the largest bucket
fn bar_cells(count: usize, max_count: usize) -> usize {
    if max_count == 0 {
        return 0;
    }
    ((count as f64 / max_count as f64) * BAR_WIDTH as f64).round() as usize
}

pub fn render_distribution(distribution: &Distribution) -> String {
    let max_count = distribution.max_count();
    let mut out = String::new();
    for bucket in distribution.buckets() {
        let bar: String = std::iter::repeat_n(BAR_CELL, bar_cells(bucket.count, max_count)).collect();
        out.push_str(&format!(
            "{:<8} {:<width$} {}\n",
            bucket.bucket.label(),
            bar,
            bucket.count,
            width = BAR_WIDTH
        ));
    }
    out
}

pub fn render_stats(stats: &Stats<'_>, top_n: usize) -> String {
    let top = stats.top(top_n);
    let top_list = if top.is_empty() { "No rated movies yet\n".to_string() } else { render_list(&top) };

    format!(
        "Movie Log Statistics\n\
         ====================\n\
         Watched: {}\n\
         Unwatched: {}\n\
         Average rating: {:.1}\n\
         \n\
         Top {}\n\
         {}\n\
         Rating distribution\n\
         {}",
        stats.watched_count,
        stats.unwatched_count,
        stats.average_rating,
        top_n,
        top_list,
        render_distribution(&stats.distribution)
    )
}
