use revu_core::Rating;

/// Everything a template needs: the submitted review and its rating.
#[derive(Debug, Clone)]
pub struct PromptContext {
    pub rating: Rating,
    pub review: String,
}
