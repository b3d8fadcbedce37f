//! Sinks that write tokenizer output to an [`io::Write`].
//!
//! `Sink` callbacks cannot fail, so both printers park the first write error
//! and skip all output after it. The driver polls [`WriteSink::take_error`]
//! between chunks.

use std::io::{self, Write};

use htmlstream::{BStr, Event, Sink, Truncation};

/// A [`Sink`] that writes somewhere fallible.
pub trait WriteSink {
    /// The wrapped writer.
    type Writer: Write;

    /// Takes the first write error, if any happened since the last call.
    fn take_error(&mut self) -> Option<io::Error>;

    /// Writes anything still pending and returns the writer.
    fn into_writer(self) -> io::Result<Self::Writer>;
}

/// Tracks the first error from a sequence of writes.
#[derive(Debug)]
struct Guarded<W> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> Guarded<W> {
    fn new(out: W) -> Self {
        Self { out, error: None }
    }

    fn write(&mut self, f: impl FnOnce(&mut W) -> io::Result<()>) {
        if self.error.is_none() {
            if let Err(e) = f(&mut self.out) {
                self.error = Some(e);
            }
        }
    }
}

fn warn_truncated(truncation: &Truncation) {
    tracing::warn!(
        field = %truncation.field,
        capacity = truncation.capacity,
        dropped = truncation.dropped,
        "input truncated"
    );
}

// ─────────────────────────────────────────────────────────────────────
// Indented outline
// ─────────────────────────────────────────────────────────────────────

/// Prints an indented outline, two spaces per nesting level.
///
/// ```text
/// <a href='/x'>
///   go
/// </a>
/// ```
///
/// The `>` of an open tag is written lazily, once it is known that no more
/// attributes follow.
#[derive(Debug)]
pub struct PrettyPrinter<W> {
    out: Guarded<W>,
    depth: usize,
    tag_open: bool,
}

impl<W: Write> PrettyPrinter<W> {
    /// Wraps `out`.
    pub fn new(out: W) -> Self {
        Self {
            out: Guarded::new(out),
            depth: 0,
            tag_open: false,
        }
    }

    fn end_tag_line(&mut self) {
        if self.tag_open {
            self.tag_open = false;
            self.out.write(|w| w.write_all(b">\n"));
        }
    }

    fn line(&mut self, parts: &[&[u8]]) {
        let indent = self.depth * 2;
        self.out.write(|w| {
            write!(w, "{:indent$}", "")?;
            for part in parts {
                w.write_all(part)?;
            }
            Ok(())
        });
    }
}

impl<W: Write> Sink for PrettyPrinter<W> {
    fn on_open(&mut self, name: &BStr) {
        self.end_tag_line();
        self.line(&[b"<", name]);
        self.depth += 1;
        self.tag_open = true;
    }

    fn on_close(&mut self, name: &BStr) {
        self.end_tag_line();
        self.depth = self.depth.saturating_sub(1);
        self.line(&[b"</", name, b">\n"]);
    }

    fn on_attribute(&mut self, key: &BStr, value: Option<&BStr>) {
        if !self.tag_open {
            tracing::trace!(%key, "attribute outside an open tag skipped");
            return;
        }
        self.out.write(|w| {
            w.write_all(b" ")?;
            w.write_all(key)?;
            if let Some(value) = value {
                w.write_all(b"='")?;
                w.write_all(value)?;
                w.write_all(b"'")?;
            }
            Ok(())
        });
    }

    fn on_text(&mut self, text: &BStr) {
        self.end_tag_line();
        self.line(&[text, b"\n"]);
    }

    fn on_truncated(&mut self, truncation: &Truncation) {
        warn_truncated(truncation);
    }
}

impl<W: Write> WriteSink for PrettyPrinter<W> {
    type Writer = W;

    fn take_error(&mut self) -> Option<io::Error> {
        self.out.error.take()
    }

    fn into_writer(mut self) -> io::Result<W> {
        self.end_tag_line();
        match self.out.error {
            Some(e) => Err(e),
            None => Ok(self.out.out),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Event lines
// ─────────────────────────────────────────────────────────────────────

/// Prints each callback as the `Debug` form of its [`Event`].
#[derive(Debug)]
pub struct EventPrinter<W> {
    out: Guarded<W>,
}

impl<W: Write> EventPrinter<W> {
    /// Wraps `out`.
    pub fn new(out: W) -> Self {
        Self {
            out: Guarded::new(out),
        }
    }

    fn print(&mut self, event: &Event) {
        self.out.write(|w| writeln!(w, "{event:?}"));
    }
}

impl<W: Write> Sink for EventPrinter<W> {
    fn on_open(&mut self, name: &BStr) {
        self.print(&Event::open(name));
    }

    fn on_close(&mut self, name: &BStr) {
        self.print(&Event::close(name));
    }

    fn on_attribute(&mut self, key: &BStr, value: Option<&BStr>) {
        self.print(&Event::Attribute {
            key: key.to_owned(),
            value: value.map(ToOwned::to_owned),
        });
    }

    fn on_text(&mut self, text: &BStr) {
        self.print(&Event::text(text));
    }

    fn on_truncated(&mut self, truncation: &Truncation) {
        warn_truncated(truncation);
    }
}

impl<W: Write> WriteSink for EventPrinter<W> {
    type Writer = W;

    fn take_error(&mut self) -> Option<io::Error> {
        self.out.error.take()
    }

    fn into_writer(self) -> io::Result<W> {
        match self.out.error {
            Some(e) => Err(e),
            None => Ok(self.out.out),
        }
    }
}
