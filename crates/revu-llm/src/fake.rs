use std::sync::Mutex;

use crate::{CompletionClient, LlmError};

/// Scripted stand-in for the hosted service, used to test callers
/// without a network.
pub struct FakeCompletionClient {
    responses: Mutex<Vec<Result<String, LlmError>>>,
    call_count: Mutex<usize>,
}

impl FakeCompletionClient {
    /// Replies are consumed in order; the last one repeats once the
    /// script runs out.
    pub fn new(responses: Vec<Result<String, LlmError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            call_count: Mutex::new(0),
        }
    }

    /// Always reply with the same text.
    pub fn always(reply: impl Into<String>) -> Self {
        Self::new(vec![Ok(reply.into())])
    }

    /// Always fail with the same error.
    pub fn always_error(error: LlmError) -> Self {
        Self::new(vec![Err(error)])
    }

    /// How many times `complete` has been called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl CompletionClient for FakeCompletionClient {
    fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        *self.call_count.lock().unwrap() += 1;

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(LlmError::EmptyCompletion);
        }
        if responses.len() == 1 {
            responses[0].clone()
        } else {
            responses.remove(0)
        }
    }
}
