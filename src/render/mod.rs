//! Text and JSON presentation of entries, timelines and statistics

pub mod json;
pub mod rating;
pub mod text;

pub use json::{EntryJson, TimelineRowJson, entries_json, timeline_json};
pub use rating::{RatingBand, format_rating};
pub use text::{render_distribution, render_entry, render_list, render_stats, render_timeline};
