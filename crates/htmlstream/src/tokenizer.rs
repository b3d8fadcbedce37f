//! The tag/attribute/text automaton.
//!
//! Every byte that survives the comment filter is classified and drives
//! exactly one transition of [`State`]. Callbacks fire on transitions; between
//! them the automaton accumulates into one of two bounded buffers:
//!
//! - `tag`: the current tag name or attribute key;
//! - `val`: the current attribute value, or the pending text run.
//!
//! Nothing here can fail. Bytes that cannot form markup (stray `<`, `>` and
//! `/`) are dropped, and a `<` where a `>` was expected ends the current tag
//! as if the `>` had been there.
#![allow(clippy::match_same_arms)]

use crate::{
    Sink, TokenizerOptions,
    buffer::BoundedBuffer,
    comment::{CommentFilter, Filtered},
    error::Field,
};

/// An open quote inside an attribute key or value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    /// The byte that opened the quote, `'` or `"`.
    pub delimiter: u8,
    /// Whether the previous byte was a backslash, so the next byte is taken
    /// literally even if it is the delimiter.
    pub escaped: bool,
}

impl Quote {
    fn new(delimiter: u8) -> Self {
        Self {
            delimiter,
            escaped: false,
        }
    }
}

/// Automaton state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// Between tags, accumulating text. Initial and resting state.
    #[default]
    Text,
    /// Just read `<`.
    TagStart,
    /// Reading a start tag name.
    OpeningTag,
    /// Inside a tag after its name, looking for attributes or `>`.
    OpeningTagEnd,
    /// Just read `</`.
    TagStartSlash,
    /// Reading an end tag name.
    ClosingTag,
    /// Reading an attribute key.
    AttrKey,
    /// Inside a quoted part of an attribute key.
    AttrKeyQuote(Quote),
    /// Whitespace after an attribute key; a value may still follow.
    AttrKeyEnd,
    /// Read `=`, waiting for the value.
    AttrEq,
    /// Reading an unquoted part of an attribute value.
    AttrVal,
    /// Inside a quoted part of an attribute value.
    AttrValQuote(Quote),
}

/// Byte classes the transition function distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Lt,
    Gt,
    Slash,
    Quote(u8),
    Eq,
    Space,
    Other,
}

#[inline]
fn classify(byte: u8) -> Class {
    match byte {
        b'<' => Class::Lt,
        b'>' => Class::Gt,
        b'/' => Class::Slash,
        b'\'' | b'"' => Class::Quote(byte),
        b'=' => Class::Eq,
        b if is_space(b) => Class::Space,
        _ => Class::Other,
    }
}

/// The C `isspace` set: space, `\t`, `\n`, `\v`, `\f`, `\r`.
#[inline]
pub(crate) fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Strips leading and trailing [`is_space`] bytes.
pub(crate) fn trim(bytes: &[u8]) -> &[u8] {
    let Some(start) = bytes.iter().position(|&b| !is_space(b)) else {
        return &[];
    };
    // `start` found a non-space byte, so `rposition` does too.
    let end = bytes.iter().rposition(|&b| !is_space(b)).unwrap_or(start);
    &bytes[start..=end]
}

/// A streaming tag-soup HTML tokenizer delivering callbacks to `S`.
///
/// Feed input with [`feed`](Self::feed) in chunks of any size, then call
/// [`finish`](Self::finish) to flush trailing text and get the sink back.
///
/// The tokenizer owns its sink; use [`sink_mut`](Self::sink_mut) to inspect
/// or drain it between feeds, or pass `&mut sink` to keep ownership outside.
#[derive(Debug, Clone)]
pub struct Tokenizer<S> {
    sink: S,
    options: TokenizerOptions,
    state: State,
    tag: BoundedBuffer,
    val: BoundedBuffer,
    comment: CommentFilter,
}

impl<S: Sink> Tokenizer<S> {
    /// Creates a tokenizer with default options.
    pub fn new(sink: S) -> Self {
        Self::with_options(sink, TokenizerOptions::default())
    }

    /// Creates a tokenizer with the given options.
    pub fn with_options(sink: S, options: TokenizerOptions) -> Self {
        Self {
            sink,
            options,
            state: State::Text,
            tag: BoundedBuffer::new(options.buffer_capacity),
            val: BoundedBuffer::new(options.buffer_capacity),
            comment: CommentFilter::default(),
        }
    }

    /// Processes a chunk of input, invoking the sink as markup completes.
    ///
    /// State carries over between calls, so a chunk may end anywhere: inside
    /// a tag name, a quoted value, or a comment.
    pub fn feed(&mut self, chunk: impl AsRef<[u8]>) {
        for &byte in chunk.as_ref() {
            if let Filtered::Pass { pending, byte } = self.comment.step(byte) {
                for &replayed in pending {
                    self.step(replayed);
                }
                self.step(byte);
            }
        }
    }

    /// Ends the stream and returns the sink.
    ///
    /// A comment opener still being matched is replayed, and pending text is
    /// reported. A tag, attribute or comment left open is discarded.
    pub fn finish(mut self) -> S {
        self.flush();
        self.sink
    }

    /// Returns to the initial state, dropping any partial input. The sink
    /// and options are kept.
    pub fn reset(&mut self) {
        self.state = State::Text;
        self.tag.clear();
        self.val.clear();
        self.comment = CommentFilter::default();
    }

    fn flush(&mut self) {
        for &replayed in self.comment.flush() {
            self.step(replayed);
        }
        if self.state == State::Text {
            self.emit_text();
        } else {
            log::trace!(
                target: "htmlstream::tokenizer",
                "end of input in {:?}, partial markup discarded",
                self.state
            );
        }
        self.reset();
    }

    /// Current automaton state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Whether the input so far ends inside an `<!-- ... -->` comment.
    pub fn in_comment(&self) -> bool {
        self.comment.in_comment()
    }

    /// The options this tokenizer was created with.
    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// Borrows the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutably borrows the sink, e.g. to drain collected events between
    /// feeds.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Returns the sink without flushing pending text.
    pub fn into_sink(self) -> S {
        self.sink
    }

    // --------------------------------------------------------------------------------------------
    // Emission
    // --------------------------------------------------------------------------------------------

    fn emit_open(&mut self) {
        if let Some(t) = self.tag.truncation(Field::TagName) {
            log::debug!(target: "htmlstream::tokenizer", "{t}");
            self.sink.on_truncated(&t);
        }
        self.sink.on_open(self.tag.as_bstr());
    }

    fn emit_close(&mut self) {
        if let Some(t) = self.tag.truncation(Field::TagName) {
            log::debug!(target: "htmlstream::tokenizer", "{t}");
            self.sink.on_truncated(&t);
        }
        self.sink.on_close(self.tag.as_bstr());
    }

    fn emit_attribute(&mut self, with_value: bool) {
        let value_truncation = if with_value {
            self.val.truncation(Field::AttributeValue)
        } else {
            None
        };
        for t in [self.tag.truncation(Field::AttributeKey), value_truncation]
            .into_iter()
            .flatten()
        {
            log::debug!(target: "htmlstream::tokenizer", "{t}");
            self.sink.on_truncated(&t);
        }
        let value = with_value.then(|| self.val.as_bstr());
        self.sink.on_attribute(self.tag.as_bstr(), value);
    }

    fn emit_text(&mut self) {
        let text = trim(self.val.as_bstr());
        if text.is_empty() {
            return;
        }
        if let Some(t) = self.val.truncation(Field::Text) {
            log::debug!(target: "htmlstream::tokenizer", "{t}");
            self.sink.on_truncated(&t);
        }
        self.sink.on_text(text.into());
    }

    /// Reports the pending attribute, clears both buffers and moves on.
    fn end_attribute(&mut self, with_value: bool, next: State) {
        self.emit_attribute(with_value);
        self.goto_clean(next);
    }

    /// Clears both buffers and moves to `next`.
    fn goto_clean(&mut self, next: State) {
        self.tag.clear();
        self.val.clear();
        self.state = next;
    }

    // --------------------------------------------------------------------------------------------
    // Transitions
    // --------------------------------------------------------------------------------------------

    /// Appends `byte` to a quoted segment. Returns `None` when the byte closes
    /// the quote.
    fn quoted(mut quote: Quote, byte: u8, buf: &mut BoundedBuffer) -> Option<Quote> {
        if byte == b'\\' {
            quote.escaped = true;
            return Some(quote);
        }
        if byte == quote.delimiter && !quote.escaped {
            return None;
        }
        buf.push(byte.to_ascii_lowercase());
        quote.escaped = false;
        Some(quote)
    }

    #[allow(clippy::too_many_lines)]
    fn step(&mut self, byte: u8) {
        #[cfg(any(test, feature = "fuzzing"))]
        assert!(
            self.state != State::Text || self.tag.as_bstr().is_empty(),
            "Internal error: tag buffer not empty between tags"
        );

        let lower = byte.to_ascii_lowercase();
        let class = classify(byte);

        match self.state {
            State::Text => match class {
                Class::Lt => {
                    self.emit_text();
                    self.goto_clean(State::TagStart);
                }
                _ => self.val.push(byte),
            },

            State::TagStart => match class {
                Class::Lt | Class::Space => {}
                Class::Gt => {
                    log::trace!(target: "htmlstream::tokenizer", "empty tag `<>` dropped");
                    self.goto_clean(State::Text);
                }
                Class::Slash => self.state = State::TagStartSlash,
                _ => {
                    self.tag.start(lower);
                    self.state = State::OpeningTag;
                }
            },

            State::OpeningTag => match class {
                Class::Gt => {
                    self.emit_open();
                    self.goto_clean(State::Text);
                }
                Class::Space => {
                    self.emit_open();
                    self.goto_clean(State::OpeningTagEnd);
                }
                _ => self.tag.push(lower),
            },

            State::TagStartSlash => match class {
                Class::Gt => {
                    log::trace!(target: "htmlstream::tokenizer", "empty end tag `</>` dropped");
                    self.goto_clean(State::Text);
                }
                Class::Lt => self.state = State::TagStart,
                Class::Space => {}
                _ => {
                    self.tag.start(lower);
                    self.state = State::ClosingTag;
                }
            },

            State::ClosingTag => match class {
                Class::Gt => {
                    self.emit_close();
                    self.goto_clean(State::Text);
                }
                Class::Lt => {
                    log::trace!(target: "htmlstream::tokenizer", "`<` ends end tag missing `>`");
                    self.emit_close();
                    self.goto_clean(State::TagStart);
                }
                Class::Space => {
                    self.emit_close();
                    self.goto_clean(State::OpeningTagEnd);
                }
                _ => self.tag.push(lower),
            },

            State::OpeningTagEnd => match class {
                Class::Lt => {
                    log::trace!(target: "htmlstream::tokenizer", "`<` ends tag missing `>`");
                    self.goto_clean(State::TagStart);
                }
                Class::Gt => self.goto_clean(State::Text),
                Class::Space | Class::Slash => {}
                Class::Quote(delimiter) => {
                    self.tag.clear();
                    self.state = State::AttrKeyQuote(Quote::new(delimiter));
                }
                Class::Eq | Class::Other => {
                    self.tag.start(lower);
                    self.state = State::AttrKey;
                }
            },

            State::AttrKey => match class {
                Class::Lt => self.end_attribute(false, State::TagStart),
                Class::Gt => self.end_attribute(false, State::Text),
                Class::Space => self.state = State::AttrKeyEnd,
                Class::Quote(delimiter) => self.state = State::AttrKeyQuote(Quote::new(delimiter)),
                Class::Eq => self.state = State::AttrEq,
                Class::Slash | Class::Other => self.tag.push(lower),
            },

            State::AttrKeyQuote(quote) => {
                self.state = match Self::quoted(quote, byte, &mut self.tag) {
                    Some(quote) => State::AttrKeyQuote(quote),
                    None => State::AttrKey,
                };
            }

            State::AttrKeyEnd => match class {
                Class::Lt => self.end_attribute(false, State::TagStart),
                Class::Gt => self.end_attribute(false, State::Text),
                Class::Space => {}
                Class::Eq => self.state = State::AttrEq,
                Class::Quote(delimiter) => {
                    self.end_attribute(false, State::AttrKeyQuote(Quote::new(delimiter)));
                }
                Class::Slash | Class::Other => {
                    self.emit_attribute(false);
                    self.val.clear();
                    self.tag.start(lower);
                    self.state = State::AttrKey;
                }
            },

            State::AttrEq => match class {
                Class::Lt => self.end_attribute(false, State::TagStart),
                Class::Gt => self.end_attribute(false, State::Text),
                Class::Eq | Class::Space => {}
                Class::Quote(delimiter) => {
                    self.val.clear();
                    self.state = State::AttrValQuote(Quote::new(delimiter));
                }
                Class::Slash | Class::Other => {
                    self.val.start(lower);
                    self.state = State::AttrVal;
                }
            },

            State::AttrVal => match class {
                Class::Lt => self.end_attribute(true, State::TagStart),
                Class::Gt => self.end_attribute(true, State::Text),
                Class::Slash => {}
                Class::Space => self.end_attribute(true, State::OpeningTagEnd),
                Class::Quote(delimiter) => self.state = State::AttrValQuote(Quote::new(delimiter)),
                Class::Eq | Class::Other => self.val.push(lower),
            },

            State::AttrValQuote(quote) => {
                self.state = match Self::quoted(quote, byte, &mut self.val) {
                    Some(quote) => State::AttrValQuote(quote),
                    None => State::AttrVal,
                };
            }
        }
    }
}
