//! Aggregate statistics over the flat entry list
//!
//! Only watched entries with a rating count towards the average, the top list and
//! the histogram; an unwatched entry's rating is ignored here.

pub mod distribution;

use serde::Serialize;

pub use distribution::{BucketCount, Distribution, RatingBucket};

use crate::models::MovieEntry;
use crate::views::sort_by_rating_desc;

/// Size of the top list shown by default
pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats<'a> {
    pub watched_count: usize,
    pub unwatched_count: usize,
    /// Mean of the rated entries, rounded to one decimal; `0.0` when nothing is rated
    pub average_rating: f64,
    /// Watched entries with a rating, in input order
    pub rated: Vec<&'a MovieEntry>,
    pub distribution: Distribution,
}

impl<'a> Stats<'a> {
    /// The `n` highest-rated entries; ties keep their input order
    pub fn top(&self, n: usize) -> Vec<&'a MovieEntry> {
        let mut ranked = self.rated.clone();
        sort_by_rating_desc(&mut ranked);
        ranked.truncate(n);
        ranked
    }

    pub fn top_default(&self) -> Vec<&'a MovieEntry> {
        self.top(DEFAULT_TOP_N)
    }
}

/// Compute counts, average rating and rating histogram for a list of entries
///
/// # Examples
///
/// ```
/// use movie_log::{compute_stats, parse_entries};
///
/// let entries = parse_entries("- [x] A - 9/10\n- [x] B - 8/10\n- [ ] C");
/// let stats = compute_stats(&entries);
/// assert_eq!(stats.watched_count, 2);
/// assert_eq!(stats.unwatched_count, 1);
/// assert_eq!(stats.average_rating, 8.5);
/// ```
pub fn compute_stats(entries: &[MovieEntry]) -> Stats<'_> {
    let watched_count = entries.iter().filter(|e| e.watched).count();
    let unwatched_count = entries.len() - watched_count;

    let rated: Vec<&MovieEntry> = entries.iter().filter(|e| e.watched_rating().is_some()).collect();
    let ratings = rated.iter().filter_map(|e| e.rating);

    let average_rating = average_to_one_decimal(ratings.clone());
    let distribution = Distribution::from_ratings(ratings);

    Stats { watched_count, unwatched_count, average_rating, rated, distribution }
}

fn average_to_one_decimal(ratings: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = ratings.fold((0.0, 0usize), |(sum, count), r| (sum + r, count + 1));
    if count == 0 {
        return 0.0;
    }
    round_to_tenth(sum / count as f64)
}

/// Round the stored binary value to the nearest tenth
///
/// Scaling by ten before rounding would round twice (`8.35` is stored just below the
/// half, but `8.35 * 10.0` is exactly `83.5`), so the decimal formatter does the
/// rounding. Only exact binary halves (`x.25`, `x.75`) are ties; those go away from zero.
fn round_to_tenth(value: f64) -> f64 {
    let is_exact_half = (value * 4.0).fract() == 0.0 && (value * 2.0).fract() != 0.0;
    if is_exact_half {
        return (value * 10.0).round() / 10.0;
    }
    format!("{:.1}", value).parse().unwrap_or(value)
}
