use serde::Serialize;

/// Rating histogram buckets, highest first
///
/// A rating falls into the first bucket whose lower bound it reaches; `<6.0`
/// takes everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RatingBucket {
    #[serde(rename = "9.0+")]
    NinePlus,
    #[serde(rename = "8.0-8.9")]
    Eights,
    #[serde(rename = "7.0-7.9")]
    Sevens,
    #[serde(rename = "6.0-6.9")]
    Sixes,
    #[serde(rename = "<6.0")]
    BelowSix,
}

impl RatingBucket {
    pub const ALL: [RatingBucket; 5] = [
        RatingBucket::NinePlus,
        RatingBucket::Eights,
        RatingBucket::Sevens,
        RatingBucket::Sixes,
        RatingBucket::BelowSix,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RatingBucket::NinePlus => "9.0+",
            RatingBucket::Eights => "8.0-8.9",
            RatingBucket::Sevens => "7.0-7.9",
            RatingBucket::Sixes => "6.0-6.9",
            RatingBucket::BelowSix => "<6.0",
        }
    }

    /// Inclusive lower bound, `None` for the open-ended bottom bucket
    pub fn lower_bound(self) -> Option<f64> {
        match self {
            RatingBucket::NinePlus => Some(9.0),
            RatingBucket::Eights => Some(8.0),
            RatingBucket::Sevens => Some(7.0),
            RatingBucket::Sixes => Some(6.0),
            RatingBucket::BelowSix => None,
        }
    }

    pub fn for_rating(rating: f64) -> Self {
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.lower_bound().is_none_or(|bound| rating >= bound))
            .unwrap_or(RatingBucket::BelowSix)
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BucketCount {
    pub bucket: RatingBucket,
    pub count: usize,
}

/// Fixed five-bucket histogram of ratings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Distribution {
    counts: [usize; 5],
}

impl Distribution {
    pub fn from_ratings(ratings: impl IntoIterator<Item = f64>) -> Self {
        let mut distribution = Self::default();
        for rating in ratings {
            distribution.counts[RatingBucket::for_rating(rating).index()] += 1;
        }
        distribution
    }

    pub fn count(&self, bucket: RatingBucket) -> usize {
        self.counts[bucket.index()]
    }

    /// Count by display label (`"9.0+"`, `"8.0-8.9"`, ...), `None` for unknown labels
    pub fn count_for_label(&self, label: &str) -> Option<usize> {
        RatingBucket::ALL.into_iter().find(|b| b.label() == label).map(|b| self.count(b))
    }

    /// Buckets with their counts, highest bucket first
    pub fn buckets(&self) -> impl Iterator<Item = BucketCount> + '_ {
        RatingBucket::ALL.into_iter().map(|bucket| BucketCount { bucket, count: self.count(bucket) })
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

impl Serialize for Distribution {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.buckets())
    }
}
