use alloc::boxed::Box;
use core::fmt;

use bstr::BStr;

use crate::{Sink, Truncation};

type NameFn<'a> = Box<dyn FnMut(&BStr) + 'a>;
type AttributeFn<'a> = Box<dyn FnMut(&BStr, Option<&BStr>) + 'a>;
type TruncatedFn<'a> = Box<dyn FnMut(&Truncation) + 'a>;

/// A [`Sink`] built from independent, optional closures.
///
/// Empty slots are no-ops. Closures may borrow from the caller's scope for
/// `'a`.
///
/// ```rust
/// use htmlstream::{Callbacks, Tokenizer};
///
/// let mut links = Vec::new();
/// let mut tokenizer = Tokenizer::new(Callbacks::new().attribute(|key, value| {
///     if key == "href" {
///         links.extend(value.map(|v| v.to_string()));
///     }
/// }));
/// tokenizer.feed("<a href=/one>1</a><a href='/two'>2</a>");
/// drop(tokenizer.finish());
///
/// assert_eq!(links, ["/one", "/two"]);
/// ```
#[derive(Default)]
pub struct Callbacks<'a> {
    open: Option<NameFn<'a>>,
    close: Option<NameFn<'a>>,
    attribute: Option<AttributeFn<'a>>,
    text: Option<NameFn<'a>>,
    truncated: Option<TruncatedFn<'a>>,
}

impl<'a> Callbacks<'a> {
    /// Creates a set with every slot empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills the open-tag slot.
    #[must_use]
    pub fn open(mut self, f: impl FnMut(&BStr) + 'a) -> Self {
        self.open = Some(Box::new(f));
        self
    }

    /// Fills the close-tag slot.
    #[must_use]
    pub fn close(mut self, f: impl FnMut(&BStr) + 'a) -> Self {
        self.close = Some(Box::new(f));
        self
    }

    /// Fills the attribute slot.
    #[must_use]
    pub fn attribute(mut self, f: impl FnMut(&BStr, Option<&BStr>) + 'a) -> Self {
        self.attribute = Some(Box::new(f));
        self
    }

    /// Fills the text slot.
    #[must_use]
    pub fn text(mut self, f: impl FnMut(&BStr) + 'a) -> Self {
        self.text = Some(Box::new(f));
        self
    }

    /// Fills the truncation diagnostic slot.
    #[must_use]
    pub fn truncated(mut self, f: impl FnMut(&Truncation) + 'a) -> Self {
        self.truncated = Some(Box::new(f));
        self
    }
}

impl Sink for Callbacks<'_> {
    fn on_open(&mut self, name: &BStr) {
        if let Some(f) = &mut self.open {
            f(name);
        }
    }

    fn on_close(&mut self, name: &BStr) {
        if let Some(f) = &mut self.close {
            f(name);
        }
    }

    fn on_attribute(&mut self, key: &BStr, value: Option<&BStr>) {
        if let Some(f) = &mut self.attribute {
            f(key, value);
        }
    }

    fn on_text(&mut self, text: &BStr) {
        if let Some(f) = &mut self.text {
            f(text);
        }
    }

    fn on_truncated(&mut self, truncation: &Truncation) {
        if let Some(f) = &mut self.truncated {
            f(truncation);
        }
    }
}

impl fmt::Debug for Callbacks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("open", &self.open.is_some())
            .field("close", &self.close.is_some())
            .field("attribute", &self.attribute.is_some())
            .field("text", &self.text.is_some())
            .field("truncated", &self.truncated.is_some())
            .finish()
    }
}
