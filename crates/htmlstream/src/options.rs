/// Buffer capacity used by [`TokenizerOptions::default`].
pub const DEFAULT_BUFFER_CAPACITY: usize = 100;

/// Configuration options for the tokenizer.
///
/// # Examples
///
/// ```rust
/// use htmlstream::{Tokenizer, TokenizerOptions};
///
/// let tokenizer = Tokenizer::with_options(
///     (),
///     TokenizerOptions {
///         buffer_capacity: 4096,
///     },
/// );
/// assert_eq!(tokenizer.options().buffer_capacity, 4096);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Maximum number of bytes held for a single tag name, attribute key,
    /// attribute value or text run.
    ///
    /// Bytes arriving once a buffer is full are dropped. The truncated content
    /// is still reported, preceded by a [`Sink::on_truncated`] call naming the
    /// affected field and the number of bytes lost.
    ///
    /// Buffers grow on demand up to this bound, so a large value costs nothing
    /// until input actually needs it. `usize::MAX` effectively disables
    /// truncation.
    ///
    /// # Default
    ///
    /// [`DEFAULT_BUFFER_CAPACITY`] (100 bytes)
    ///
    /// [`Sink::on_truncated`]: crate::Sink::on_truncated
    pub buffer_capacity: usize,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}
