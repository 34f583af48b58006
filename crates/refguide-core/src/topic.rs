//! Topic Trait: the single contract every reference topic implements
use crate::context::EmitContext;
use crate::data_model::Section;

/// One printed section of a reference guide
pub trait Topic: Send + Sync {
    /// Unique topic id (ex: "datatypes.signed_integers")
    fn id(&self) -> &'static str;

    /// Heading printed above the section
    fn title(&self) -> &'static str;

    /// Whether the rendered text is identical on every run (default: true).
    /// Topics that print a `HashMap` in iteration order return false.
    fn deterministic(&self) -> bool {
        true
    }

    /// Computes the examples and lays them out as a section
    fn build(&self, ctx: &EmitContext) -> Result<Section, TopicError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum TopicError {
    ExampleFailed(String),
    Mismatch { expected: String, got: String },
}

impl TopicError {
    pub fn example(msg: impl Into<String>) -> Self {
        Self::ExampleFailed(msg.into())
    }
}

impl std::fmt::Display for TopicError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::ExampleFailed(msg) => write!(f, "TOPIC/EXAMPLE: {}", msg),
            Self::Mismatch { expected, got } => {
                write!(f, "TOPIC/MISMATCH: expected {}, got {}", expected, got)
            }
        }
    }
}

impl std::error::Error for TopicError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_forms() {
        assert_eq!(
            TopicError::example("no match").to_string(),
            "TOPIC/EXAMPLE: no match"
        );
        let err = TopicError::Mismatch {
            expected: "8".to_string(),
            got: "9".to_string(),
        };
        assert_eq!(err.to_string(), "TOPIC/MISMATCH: expected 8, got 9");
    }
}
