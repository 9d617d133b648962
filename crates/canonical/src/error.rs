use thiserror::Error;

/// The single failure mode of the canonical stage: the input text is not a
/// valid JSON document. The decoder's message (with line/column) is carried
/// verbatim for display.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ParseError(#[from] serde_json::Error);

impl ParseError {
    /// One-based line of the failure as reported by the decoder.
    pub fn line(&self) -> usize {
        self.0.line()
    }

    /// One-based column of the failure as reported by the decoder.
    pub fn column(&self) -> usize {
        self.0.column()
    }
}
