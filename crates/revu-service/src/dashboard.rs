use revu_core::{FeedbackRecord, Rating};

/// Everything the admin view renders, computed in one stateless pass over
/// the store contents.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    records: Vec<FeedbackRecord>,
    total: usize,
    average_rating: Option<f64>,
    histogram: [u64; 5],
}

impl DashboardSnapshot {
    /// Build from records in insertion order (oldest first, as stored).
    pub fn from_records(mut records: Vec<FeedbackRecord>) -> Self {
        let total = records.len();
        let mut histogram = [0u64; 5];
        let mut sum = 0u64;
        for record in &records {
            let value = record.rating.as_u8();
            histogram[usize::from(value) - 1] += 1;
            sum += u64::from(value);
        }

        // Mean rounded to two decimals, half away from zero. Never
        // computed over an empty store.
        let average_rating =
            (total > 0).then(|| (sum as f64 / total as f64 * 100.0).round() / 100.0);

        records.reverse();
        Self {
            records,
            total,
            average_rating,
            histogram,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn average_rating(&self) -> Option<f64> {
        self.average_rating
    }

    /// Count per rating value, ordered 1→5, absent ratings zero-filled.
    pub fn histogram(&self) -> [(Rating, u64); 5] {
        let mut out = [(Rating::One, 0); 5];
        for (slot, (&rating, &count)) in out
            .iter_mut()
            .zip(Rating::ALL.iter().zip(self.histogram.iter()))
        {
            *slot = (rating, count);
        }
        out
    }

    /// Records newest first, for the table.
    pub fn records(&self) -> &[FeedbackRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(rating: Rating, review: &str) -> FeedbackRecord {
        FeedbackRecord::new(rating, review, "r", "s", "a")
    }

    fn snapshot_of(ratings: &[u8]) -> DashboardSnapshot {
        let records = ratings
            .iter()
            .map(|&value| record(Rating::from_u8(value).unwrap(), "text"))
            .collect();
        DashboardSnapshot::from_records(records)
    }

    #[test]
    fn empty_store_reports_no_average() {
        let snapshot = DashboardSnapshot::from_records(Vec::new());
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.total(), 0);
        assert_eq!(snapshot.average_rating(), None);
        assert!(snapshot.histogram().iter().all(|&(_, count)| count == 0));
    }

    #[test]
    fn average_of_full_spread_is_three() {
        let snapshot = snapshot_of(&[5, 4, 3, 2, 1]);
        assert_eq!(snapshot.total(), 5);
        assert_eq!(snapshot.average_rating(), Some(3.00));
    }

    #[test]
    fn average_rounds_to_two_decimals() {
        // 4 / 3 = 1.333... → 1.33
        assert_eq!(snapshot_of(&[1, 1, 2]).average_rating(), Some(1.33));
        // 5 / 3 = 1.666... → 1.67
        assert_eq!(snapshot_of(&[1, 2, 2]).average_rating(), Some(1.67));
        // 13 / 8 = 1.625 → half away from zero → 1.63
        assert_eq!(
            snapshot_of(&[1, 1, 1, 2, 2, 2, 2, 2]).average_rating(),
            Some(1.63)
        );
    }

    #[test]
    fn histogram_counts_ordered_ascending_and_zero_filled() {
        let snapshot = snapshot_of(&[5, 5, 3, 1, 1, 1]);
        let expected = [
            (Rating::One, 3),
            (Rating::Two, 0),
            (Rating::Three, 1),
            (Rating::Four, 0),
            (Rating::Five, 2),
        ];
        assert_eq!(snapshot.histogram(), expected);
    }

    #[test]
    fn records_are_newest_first() {
        let records = vec![
            record(Rating::One, "oldest"),
            record(Rating::Two, "middle"),
            record(Rating::Three, "newest"),
        ];
        let snapshot = DashboardSnapshot::from_records(records);
        let reviews: Vec<&str> = snapshot.records().iter().map(|r| r.review.as_str()).collect();
        assert_eq!(reviews, ["newest", "middle", "oldest"]);
    }
}
