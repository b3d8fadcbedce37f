use alloc::{borrow::ToOwned, vec::Vec};

use bstr::BStr;

use crate::{Event, Truncation};

/// Receives what the [`Tokenizer`](crate::Tokenizer) finds.
///
/// Every method has an empty default body, so an implementation only
/// overrides the hooks it cares about. All byte-string arguments borrow the
/// tokenizer's internal buffers and are valid only for the duration of the
/// call; copy them (e.g. with `to_owned()`) to keep them.
///
/// Tag names, attribute keys and attribute values arrive ASCII-lowercased.
/// Text arrives verbatim apart from edge whitespace trimming.
///
/// # Examples
///
/// ```rust
/// use htmlstream::{BStr, Sink, Tokenizer};
///
/// #[derive(Default)]
/// struct Depth {
///     current: usize,
///     max: usize,
/// }
///
/// impl Sink for Depth {
///     fn on_open(&mut self, _name: &BStr) {
///         self.current += 1;
///         self.max = self.max.max(self.current);
///     }
///
///     fn on_close(&mut self, _name: &BStr) {
///         self.current = self.current.saturating_sub(1);
///     }
/// }
///
/// let mut tokenizer = Tokenizer::new(Depth::default());
/// tokenizer.feed("<ul><li><b>x</b></li></ul>");
/// assert_eq!(tokenizer.finish().max, 3);
/// ```
pub trait Sink {
    /// A start tag name was read (`<name` followed by `>` or whitespace).
    fn on_open(&mut self, name: &BStr) {
        let _ = name;
    }

    /// An end tag name was read (`</name`).
    fn on_close(&mut self, name: &BStr) {
        let _ = name;
    }

    /// An attribute was read. `value` is `None` when no value followed the
    /// key.
    fn on_attribute(&mut self, key: &BStr, value: Option<&BStr>) {
        let _ = (key, value);
    }

    /// A text run ended. Never called with an empty or all-whitespace run.
    fn on_text(&mut self, text: &BStr) {
        let _ = text;
    }

    /// The content about to be reported lost bytes to the buffer capacity.
    fn on_truncated(&mut self, truncation: &Truncation) {
        let _ = truncation;
    }
}

/// Every hook absent.
impl Sink for () {}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn on_open(&mut self, name: &BStr) {
        (**self).on_open(name);
    }

    fn on_close(&mut self, name: &BStr) {
        (**self).on_close(name);
    }

    fn on_attribute(&mut self, key: &BStr, value: Option<&BStr>) {
        (**self).on_attribute(key, value);
    }

    fn on_text(&mut self, text: &BStr) {
        (**self).on_text(text);
    }

    fn on_truncated(&mut self, truncation: &Truncation) {
        (**self).on_truncated(truncation);
    }
}

/// Records owned copies of every event, in order.
impl Sink for Vec<Event> {
    fn on_open(&mut self, name: &BStr) {
        self.push(Event::Open(name.to_owned()));
    }

    fn on_close(&mut self, name: &BStr) {
        self.push(Event::Close(name.to_owned()));
    }

    fn on_attribute(&mut self, key: &BStr, value: Option<&BStr>) {
        self.push(Event::Attribute {
            key: key.to_owned(),
            value: value.map(ToOwned::to_owned),
        });
    }

    fn on_text(&mut self, text: &BStr) {
        self.push(Event::Text(text.to_owned()));
    }
}
