use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use revu_core::{FeedbackRecord, Rating};
use revu_llm::{CompletionClient, LlmError};
use revu_prompts::{assemble_prompt, PromptContext, PromptKind};
use revu_store::{FeedbackStore, StoreError};

#[derive(Debug, Error)]
pub enum SubmitError {
    /// Recovered locally: shown as a warning, the user may retry.
    #[error("review must not be empty")]
    EmptyReview,

    #[error("generation failed: {0}")]
    Generation(#[from] LlmError),

    #[error("persistence failed: {0}")]
    Persistence(#[from] StoreError),
}

/// Runs one submission through validate → generate → persist.
///
/// The three generation calls are sequential and all-or-nothing: if any
/// fails, nothing is stored. There are no retries; a failed submission
/// must be re-triggered by the user.
pub struct SubmissionPipeline {
    client: Arc<dyn CompletionClient>,
    store: FeedbackStore,
}

impl SubmissionPipeline {
    pub fn new(client: Arc<dyn CompletionClient>, store: FeedbackStore) -> Self {
        Self { client, store }
    }

    pub fn store(&self) -> &FeedbackStore {
        &self.store
    }

    /// Process one submission, returning the finished record.
    ///
    /// Validation runs on the trimmed text; the record keeps the review
    /// exactly as typed.
    pub fn submit(&self, rating: Rating, review: &str) -> Result<FeedbackRecord, SubmitError> {
        if review.trim().is_empty() {
            return Err(SubmitError::EmptyReview);
        }

        let ctx = PromptContext {
            rating,
            review: review.to_string(),
        };

        let ai_response = self.complete(&ctx, PromptKind::Response)?;
        let ai_summary = self.complete(&ctx, PromptKind::Summary)?;
        let ai_action = self.complete(&ctx, PromptKind::Action)?;

        let record = FeedbackRecord::new(rating, review, ai_response, ai_summary, ai_action);
        self.store.append(&record)?;

        info!(rating = rating.as_u8(), "feedback submission stored");
        Ok(record)
    }

    fn complete(&self, ctx: &PromptContext, kind: PromptKind) -> Result<String, LlmError> {
        let prompt = assemble_prompt(ctx, kind);
        self.client.complete(&prompt).map_err(|e| {
            warn!(?kind, error = %e, "generation call failed");
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use revu_llm::FakeCompletionClient;

    fn store_in(dir: &std::path::Path) -> FeedbackStore {
        let store = FeedbackStore::new(dir.join("feedback_data.csv"));
        store.ensure_exists().unwrap();
        store
    }

    fn happy_client() -> Arc<FakeCompletionClient> {
        Arc::new(FakeCompletionClient::new(vec![
            Ok("a kind reply".into()),
            Ok("a short summary".into()),
            Ok("one action".into()),
        ]))
    }

    #[test]
    fn successful_submission_appends_one_full_record() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path());
        let client = happy_client();
        let pipeline = SubmissionPipeline::new(client.clone(), store.clone());

        let record = pipeline.submit(Rating::Four, "solid product").unwrap();
        assert_eq!(record.rating, Rating::Four);
        assert_eq!(record.review, "solid product");
        assert_eq!(record.ai_response, "a kind reply");
        assert_eq!(record.ai_summary, "a short summary");
        assert_eq!(record.ai_action, "one action");
        assert_eq!(client.call_count(), 3);

        let stored = store.read_all().unwrap();
        assert_eq!(stored, vec![record]);
    }

    #[test]
    fn empty_review_is_rejected_without_any_calls() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path());
        let client = happy_client();
        let pipeline = SubmissionPipeline::new(client.clone(), store.clone());

        for review in ["", " ", "\t\n"] {
            assert!(matches!(
                pipeline.submit(Rating::Five, review),
                Err(SubmitError::EmptyReview)
            ));
        }
        assert_eq!(client.call_count(), 0);
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn any_failed_generation_call_stores_nothing() {
        let scripts: [Vec<Result<String, LlmError>>; 3] = [
            vec![Err(LlmError::EmptyCompletion)],
            vec![Ok("reply".into()), Err(LlmError::EmptyCompletion)],
            vec![
                Ok("reply".into()),
                Ok("summary".into()),
                Err(LlmError::EmptyCompletion),
            ],
        ];

        for script in scripts {
            let tmp = tempfile::tempdir().unwrap();
            let store = store_in(tmp.path());
            let client = Arc::new(FakeCompletionClient::new(script));
            let pipeline = SubmissionPipeline::new(client, store.clone());

            assert!(matches!(
                pipeline.submit(Rating::Two, "broken on arrival"),
                Err(SubmitError::Generation(_))
            ));
            assert!(store.read_all().unwrap().is_empty());
        }
    }

    #[test]
    fn persistence_failure_is_an_error_even_after_generation() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FeedbackStore::new(tmp.path().join("no/such/dir/feedback.csv"));
        let client = happy_client();
        let pipeline = SubmissionPipeline::new(client.clone(), store);

        assert!(matches!(
            pipeline.submit(Rating::Three, "fine"),
            Err(SubmitError::Persistence(_))
        ));
        assert_eq!(client.call_count(), 3);
    }

    #[test]
    fn review_is_stored_exactly_as_typed() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path());
        let pipeline = SubmissionPipeline::new(Arc::new(FakeCompletionClient::always("ok")), store.clone());

        pipeline.submit(Rating::One, "  padded review  ").unwrap();
        assert_eq!(store.read_all().unwrap()[0].review, "  padded review  ");
    }
}
