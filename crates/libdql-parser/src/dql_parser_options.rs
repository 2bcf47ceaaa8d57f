/// Limits applied while parsing a mutation.
///
/// ```rust
/// use libdql_parser::DqlParserOptions;
///
/// let options = DqlParserOptions::default()
///     .max_recursion_depth(16)
///     .max_input_bytes(Some(1 << 20));
/// assert_eq!(options.recursion_limit(), 16);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DqlParserOptions {
    max_recursion_depth: usize,
    max_input_bytes: Option<usize>,
}

impl DqlParserOptions {
    /// Default maximum nesting depth for selection sets, argument lists and
    /// list values.
    pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 64;

    /// Sets the maximum nesting depth of selection sets and values.
    pub fn max_recursion_depth(mut self, depth: usize) -> Self {
        self.max_recursion_depth = depth;
        self
    }

    /// Sets the maximum input size in bytes. `None` disables the check.
    pub fn max_input_bytes(mut self, limit: Option<usize>) -> Self {
        self.max_input_bytes = limit;
        self
    }

    pub fn recursion_limit(&self) -> usize {
        self.max_recursion_depth
    }

    pub fn input_byte_limit(&self) -> Option<usize> {
        self.max_input_bytes
    }
}

impl Default for DqlParserOptions {
    fn default() -> Self {
        Self {
            max_recursion_depth: Self::DEFAULT_MAX_RECURSION_DEPTH,
            max_input_bytes: None,
        }
    }
}
