use serde::Serialize;

/// Color band of a rating, coarser at the top than the histogram buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingBand {
    Masterpiece,
    Excellent,
    Great,
    Good,
    Fair,
    Poor,
}

impl RatingBand {
    pub fn for_rating(rating: f64) -> Self {
        if rating >= 9.7 {
            RatingBand::Masterpiece
        } else if rating >= 9.0 {
            RatingBand::Excellent
        } else if rating >= 8.0 {
            RatingBand::Great
        } else if rating >= 7.0 {
            RatingBand::Good
        } else if rating >= 6.0 {
            RatingBand::Fair
        } else {
            RatingBand::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RatingBand::Masterpiece => "masterpiece",
            RatingBand::Excellent => "excellent",
            RatingBand::Great => "great",
            RatingBand::Good => "good",
            RatingBand::Fair => "fair",
            RatingBand::Poor => "poor",
        }
    }
}

/// `8` -> `8.0/10`, `8.76` -> `8.8/10`
pub fn format_rating(rating: f64) -> String {
    format!("{:.1}/10", rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_band_thresholds() {
        assert_eq!(RatingBand::for_rating(10.0), RatingBand::Masterpiece);
        assert_eq!(RatingBand::for_rating(9.7), RatingBand::Masterpiece);
        assert_eq!(RatingBand::for_rating(9.6), RatingBand::Excellent);
        assert_eq!(RatingBand::for_rating(9.0), RatingBand::Excellent);
        assert_eq!(RatingBand::for_rating(8.0), RatingBand::Great);
        assert_eq!(RatingBand::for_rating(7.9), RatingBand::Good);
        assert_eq!(RatingBand::for_rating(6.0), RatingBand::Fair);
        assert_eq!(RatingBand::for_rating(5.9), RatingBand::Poor);
    }

    #[test]
    fn test_format_rating_one_decimal() {
        assert_eq!(format_rating(8.0), "8.0/10");
        assert_eq!(format_rating(9.5), "9.5/10");
        assert_eq!(format_rating(8.76), "8.8/10");
        assert_eq!(format_rating(11.0), "11.0/10");
    }
}
