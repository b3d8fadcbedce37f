use alloc::vec::Vec;
use core::fmt;

use bstr::BString;

use crate::Tokenizer;

/// An owned record of one [`Sink`](crate::Sink) callback.
///
/// `Vec<Event>` implements [`Sink`](crate::Sink), which makes it the easiest
/// way to collect the output of a [`Tokenizer`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Event {
    /// A start tag name.
    Open(BString),
    /// An end tag name.
    Close(BString),
    /// An attribute; `value` is `None` when the key had no value.
    Attribute {
        /// The attribute key.
        key: BString,
        /// The attribute value, if one was given.
        value: Option<BString>,
    },
    /// A trimmed, non-empty text run.
    Text(BString),
}

impl Event {
    /// Shorthand for [`Event::Open`].
    pub fn open(name: impl Into<BString>) -> Self {
        Event::Open(name.into())
    }

    /// Shorthand for [`Event::Close`].
    pub fn close(name: impl Into<BString>) -> Self {
        Event::Close(name.into())
    }

    /// Shorthand for an [`Event::Attribute`] with a value.
    pub fn attribute(key: impl Into<BString>, value: impl Into<BString>) -> Self {
        Event::Attribute {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// Shorthand for an [`Event::Attribute`] without a value.
    pub fn bare_attribute(key: impl Into<BString>) -> Self {
        Event::Attribute {
            key: key.into(),
            value: None,
        }
    }

    /// Shorthand for [`Event::Text`].
    pub fn text(text: impl Into<BString>) -> Self {
        Event::Text(text.into())
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Open(name) => write!(f, "<{name}>"),
            Event::Close(name) => write!(f, "</{name}>"),
            Event::Attribute { key, value: None } => write!(f, "@{key}"),
            Event::Attribute {
                key,
                value: Some(value),
            } => write!(f, "@{key}={value:?}"),
            Event::Text(text) => write!(f, "{text:?}"),
        }
    }
}

/// Tokenizes a complete document with default options.
///
/// Equivalent to feeding `input` to a [`Tokenizer`] collecting into a
/// `Vec<Event>` and calling [`Tokenizer::finish`].
///
/// ```rust
/// use htmlstream::{Event, tokenize};
///
/// assert_eq!(
///     tokenize("<p class=Lead>Hi</p>"),
///     vec![
///         Event::open("p"),
///         Event::attribute("class", "lead"),
///         Event::text("Hi"),
///         Event::close("p"),
///     ]
/// );
/// ```
#[must_use]
pub fn tokenize(input: impl AsRef<[u8]>) -> Vec<Event> {
    let mut tokenizer = Tokenizer::new(Vec::new());
    tokenizer.feed(input);
    tokenizer.finish()
}
