//! Emit Context: run configuration shared by every topic of a guide

/// Default width of horizontal rules, in columns
pub const DEFAULT_RULE_WIDTH: usize = 77;

#[derive(Debug, Clone)]
pub struct EmitContext {
    /// Guide title printed in the banner
    pub guide: String,
    /// Width of horizontal rules
    pub rule_width: usize,
    /// Pointer width of the target, in bits. Sizes of references,
    /// `usize`, `String`, `Vec` and `HashMap` depend on it.
    pub pointer_width: u32,
}

impl EmitContext {
    pub fn new(guide: impl Into<String>) -> Self {
        Self {
            guide: guide.into(),
            rule_width: DEFAULT_RULE_WIDTH,
            pointer_width: usize::BITS,
        }
    }

    pub fn with_rule_width(mut self, width: usize) -> Self {
        self.rule_width = width;
        self
    }

    /// Short note attached to platform-dependent size reports
    pub fn platform_note(&self) -> String {
        format!("sizes assume {}-bit pointers", self.pointer_width)
    }
}
