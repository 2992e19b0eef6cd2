use crate::PromptContext;

/// Append the summarization instructions: one short sentence.
/// The rating is deliberately not part of this template.
pub fn append_instructions(prompt: &mut String, ctx: &PromptContext) {
    prompt.push_str("Summarize the following customer review in ONE short sentence.\n\n");
    prompt.push_str(&format!("Review:\n\"{}\"\n", ctx.review));
}

#[cfg(test)]
mod tests {
    use super::*;
    use revu_core::Rating;

    #[test]
    fn summary_instructions_content() {
        let ctx = PromptContext {
            rating: Rating::Two,
            review: "Checkout kept failing on mobile.".into(),
        };
        let mut out = String::new();
        append_instructions(&mut out, &ctx);
        assert!(out.contains("ONE short sentence"));
        assert!(out.contains("Checkout kept failing on mobile."));
        assert!(!out.contains("Rating"));
    }
}
