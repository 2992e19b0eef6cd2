pub mod feedback;
pub mod rating;

pub use feedback::FeedbackRecord;
pub use rating::Rating;
