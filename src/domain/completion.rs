/// Fail-soft result of one completion call: generated text or a
/// human-readable error message, never both and never a panic. Transport and
/// service faults from the client are folded into `Failed` so the caller
/// always receives a value it can display.
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionOutcome {
    Generated(String),
    Failed(String),
}

impl CompletionOutcome {
    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }

    /// Text to show in place of the result: the generated body on success,
    /// the literal error message on failure.
    pub fn display_text(&self) -> &str {
        match self {
            Self::Generated(text) | Self::Failed(text) => text,
        }
    }
}
