use core::fmt;

use thiserror::Error;

/// The piece of markup a truncated buffer belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// An opening or closing tag name.
    TagName,
    /// An attribute key.
    AttributeKey,
    /// An attribute value.
    AttributeValue,
    /// A text run between tags.
    Text,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::TagName => "tag name",
            Field::AttributeKey => "attribute key",
            Field::AttributeValue => "attribute value",
            Field::Text => "text",
        })
    }
}

/// Bytes were dropped because a buffer reached its capacity.
///
/// Tokenizing never fails; a `Truncation` is a diagnostic delivered through
/// [`Sink::on_truncated`](crate::Sink::on_truncated) right before the
/// truncated content itself is reported.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{field} exceeded buffer capacity of {capacity} bytes, {dropped} bytes dropped")]
pub struct Truncation {
    /// Which kind of content was truncated.
    pub field: Field,
    /// The configured buffer capacity.
    pub capacity: usize,
    /// How many bytes were lost.
    pub dropped: usize,
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn display_names_field_and_loss() {
        let truncation = Truncation {
            field: Field::AttributeValue,
            capacity: 8,
            dropped: 3,
        };
        assert_eq!(
            truncation.to_string(),
            "attribute value exceeded buffer capacity of 8 bytes, 3 bytes dropped"
        );
    }
}
