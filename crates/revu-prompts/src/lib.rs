pub mod action;
pub mod context;
pub mod response;
pub mod summary;

pub use context::PromptContext;

/// Which of the three fixed templates to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Response,
    Summary,
    Action,
}

impl PromptKind {
    pub const ALL: &[PromptKind] = &[PromptKind::Response, PromptKind::Summary, PromptKind::Action];
}

/// Assemble the full instruction string for a given template and context.
///
/// Review text is interpolated verbatim, without escaping: the model only
/// ever produces advisory text, never executed code.
pub fn assemble_prompt(ctx: &PromptContext, kind: PromptKind) -> String {
    let mut prompt = String::new();
    match kind {
        PromptKind::Response => response::append_instructions(&mut prompt, ctx),
        PromptKind::Summary => summary::append_instructions(&mut prompt, ctx),
        PromptKind::Action => action::append_instructions(&mut prompt, ctx),
    }
    prompt
}
