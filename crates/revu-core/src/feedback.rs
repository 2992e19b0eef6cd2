use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rating::Rating;

/// One persisted feedback submission together with its generated AI
/// artifacts. Records are created fully formed and never mutated;
/// the store only ever appends them.
///
/// Field names follow the persisted column layout:
/// `timestamp,user_rating,user_review,ai_response,ai_summary,ai_action`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "user_rating")]
    pub rating: Rating,
    #[serde(rename = "user_review")]
    pub review: String,
    pub ai_response: String,
    pub ai_summary: String,
    pub ai_action: String,
}

impl FeedbackRecord {
    /// Assemble a record at the current UTC instant.
    pub fn new(
        rating: Rating,
        review: impl Into<String>,
        ai_response: impl Into<String>,
        ai_summary: impl Into<String>,
        ai_action: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            rating,
            review: review.into(),
            ai_response: ai_response.into(),
            ai_summary: ai_summary.into(),
            ai_action: ai_action.into(),
        }
    }
}
