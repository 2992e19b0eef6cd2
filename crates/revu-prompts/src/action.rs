use crate::PromptContext;

/// Append the action-suggestion instructions: exactly one recommended
/// action for the business team.
pub fn append_instructions(prompt: &mut String, ctx: &PromptContext) {
    prompt.push_str("Based on the customer review and rating below,\n");
    prompt.push_str("suggest ONE clear recommended action for the business team.\n\n");
    prompt.push_str(&format!("Rating: {}\n", ctx.rating));
    prompt.push_str(&format!("Review: \"{}\"\n", ctx.review));
}
