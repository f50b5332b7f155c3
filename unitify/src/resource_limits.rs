/// Resource limits for processing measurement files.
///
/// These limits protect against accidental or malicious resource exhaustion
/// when processing untrusted input files. The defaults are generous enough
/// for ordinary measurement batches.
#[derive(Debug, Clone)]
pub struct ResourceLimits {
    /// Maximum size of a measurement file in bytes (default: 5 MB)
    pub max_file_size_bytes: usize,

    /// Maximum length of a single line in bytes (default: 4096)
    pub max_line_length_bytes: usize,

    /// Maximum number of operands in one expression (default: 256)
    pub max_expression_operands: usize,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_file_size_bytes: 5 * 1024 * 1024,
            max_line_length_bytes: 4096,
            max_expression_operands: 256,
        }
    }
}

impl ResourceLimits {
    pub fn new() -> Self {
        Self::default()
    }
}
