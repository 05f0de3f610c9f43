/// Default maximum number of nested blocks
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;

/// ParserConfig holds the configuration for the parser
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserConfig {
    /// Optional source filename or url, only used for logging
    pub source: Option<String>,
    /// Blocks nested deeper than this fail the parse instead of exhausting the stack
    pub max_nesting_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            source: None,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}
