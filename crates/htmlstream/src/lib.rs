//! A streaming, callback-driven tokenizer for tag-soup HTML.
//!
//! Input is handed to a [`Tokenizer`] in chunks of any size; chunk boundaries
//! may fall anywhere, including in the middle of a tag name, a quoted
//! attribute value or an HTML comment. The tokenizer reports what it finds
//! through a [`Sink`]: tag opens, tag closes, attribute key/value pairs and
//! trimmed text runs. No tree is built and malformed markup never produces an
//! error; stray brackets are dropped and missing closers are inferred.
//!
//! # Examples
//!
//! ```rust
//! use htmlstream::{Event, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::new(Vec::<Event>::new());
//! tokenizer.feed("<A HREF='/Home'>Go <!-- not here -->ho");
//! tokenizer.feed("me</a>");
//! let events = tokenizer.finish();
//!
//! assert_eq!(
//!     events,
//!     vec![
//!         Event::open("a"),
//!         Event::attribute("href", "/home"),
//!         Event::text("Go home"),
//!         Event::close("a"),
//!     ]
//! );
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod callbacks;
mod comment;
mod error;
mod event;
mod options;
mod sink;
mod tokenizer;

#[cfg(test)]
mod tests;

pub use callbacks::Callbacks;
pub use error::{Field, Truncation};
pub use event::{Event, tokenize};
pub use options::{DEFAULT_BUFFER_CAPACITY, TokenizerOptions};
pub use sink::Sink;
pub use tokenizer::{Quote, State, Tokenizer};

pub use bstr::{BStr, BString};
