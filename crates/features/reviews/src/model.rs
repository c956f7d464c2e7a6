use serde::{Deserialize, Serialize};

/// Highest star rating a review can carry.
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub author_name: String,
    pub rating: u8,
    pub content: String,
    pub status: ReviewStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewInput {
    pub id: String,
    pub author_name: String,
    pub rating: u8,
    pub content: String,
}

impl Review {
    /// `★★★☆☆` for a rating of 3; ratings above [`MAX_RATING`] are capped.
    #[must_use]
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(MAX_RATING));
        let empty = usize::from(MAX_RATING) - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

/// Mean rating of approved reviews, `None` when there are none.
#[must_use]
pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    let (total, count) = reviews
        .iter()
        .filter(|r| r.status == ReviewStatus::Approved)
        .fold((0_u32, 0_u32), |(total, count), r| (total + u32::from(r.rating), count + 1));
    (count > 0).then(|| f64::from(total) / f64::from(count))
}
