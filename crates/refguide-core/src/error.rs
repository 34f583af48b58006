//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuideError {
    /// The output stream rejected a write. Fatal.
    #[error("OUTPUT/{0}")]
    OutputError(#[from] std::io::Error),

    #[error("TOPIC/{id}: {message}")]
    TopicError { id: String, message: String },

    #[error("RENDER/{0}")]
    RenderError(String),

    #[error("TEMPLATE/{0}")]
    TemplateError(String),
}

impl GuideError {
    /// True when the failure came from the output stream itself
    pub fn is_output(&self) -> bool {
        matches!(self, Self::OutputError(_))
    }
}
