//! Configuration for paragraph extraction.
//!
//! Only the surrounding plumbing is configurable. The header/footer and
//! page-number thresholds live in [`crate::layout::artifacts`] as constants.

/// Default maximum decoded PDF payload (10 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 10 * 1024 * 1024;

/// Paragraph extraction configuration.
///
/// # Example
///
/// ```
/// use pdf_paragraphs::config::ExtractionConfig;
///
/// let config = ExtractionConfig::new()
///     .with_max_input_bytes(1024 * 1024)
///     .with_parallel(false);
/// assert_eq!(config.max_input_bytes, 1024 * 1024);
/// assert!(!config.parallel);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// Largest accepted PDF payload in bytes (0 = unlimited).
    pub max_input_bytes: usize,

    /// Process pages on the rayon thread pool.
    pub parallel: bool,

    /// Pretty-print JSON output.
    pub pretty_json: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            parallel: true,
            pretty_json: false,
        }
    }

    /// Set the payload size limit.
    pub fn with_max_input_bytes(mut self, bytes: usize) -> Self {
        self.max_input_bytes = bytes;
        self
    }

    /// Enable or disable parallel page processing.
    pub fn with_parallel(mut self, enable: bool) -> Self {
        self.parallel = enable;
        self
    }

    /// Enable pretty-printed JSON.
    pub fn with_pretty_json(mut self, enable: bool) -> Self {
        self.pretty_json = enable;
        self
    }

    /// Whether a payload of `size` bytes is within the limit.
    pub fn accepts_size(&self, size: usize) -> bool {
        self.max_input_bytes == 0 || size <= self.max_input_bytes
    }
}
