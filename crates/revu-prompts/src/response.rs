use crate::PromptContext;

/// Append the reply-generation instructions: an empathetic, professional
/// response addressed to the reviewer.
pub fn append_instructions(prompt: &mut String, ctx: &PromptContext) {
    prompt.push_str("You are a polite and empathetic customer support assistant.\n\n");
    prompt.push_str(&format!("User Rating: {} stars\n", ctx.rating));
    prompt.push_str(&format!("User Review: \"{}\"\n\n", ctx.review));
    prompt.push_str("Write a friendly, professional response to the user.\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use revu_core::Rating;

    #[test]
    fn response_instructions_content() {
        let ctx = PromptContext {
            rating: Rating::Four,
            review: "Great service, slow delivery.".into(),
        };
        let mut out = String::new();
        append_instructions(&mut out, &ctx);
        assert!(out.contains("customer support assistant"));
        assert!(out.contains("User Rating: 4 stars"));
        assert!(out.contains("Great service, slow delivery."));
        assert!(out.contains("friendly, professional response"));
    }
}
