pub mod dashboard;
pub mod pipeline;

pub use dashboard::DashboardSnapshot;
pub use pipeline::{SubmissionPipeline, SubmitError};
