use alloc::{boxed::Box, vec::Vec};

use quickcheck::{Arbitrary, Gen, QuickCheck};

use crate::{Event, Tokenizer, TokenizerOptions};

/// Markup-ish fragments: every byte class plus the comment delimiters.
const PIECES: &[&[u8]] = &[
    b"<", b">", b"/", b"'", b"\"", b"=", b" ", b"\t", b"\\", b"!", b"-", b"a", b"B", b"xyz",
    b"<!--", b"-->", b"<p>", b"</p>", b"\xc3\xa9",
];

#[derive(Debug, Clone)]
struct Soup(Vec<u8>);

impl Arbitrary for Soup {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % (g.size() + 1);
        let mut bytes = Vec::new();
        for _ in 0..len {
            if let Some(piece) = g.choose(PIECES) {
                bytes.extend_from_slice(piece);
            }
        }
        Soup(bytes)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Soup))
    }
}

fn run_chunked(input: &[u8], splits: &[usize], options: TokenizerOptions) -> Vec<Event> {
    let mut tokenizer = Tokenizer::with_options(Vec::new(), options);
    let mut rest = input;
    for split in splits {
        if rest.is_empty() {
            break;
        }
        let size = 1 + split % rest.len();
        let (chunk, tail) = rest.split_at(size);
        tokenizer.feed(chunk);
        rest = tail;
    }
    tokenizer.feed(rest);
    tokenizer.finish()
}

/// Property: splitting the input into arbitrary chunks never changes the
/// emitted events.
#[test]
fn partition_invariance_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(soup: Soup, splits: Vec<usize>, small: bool) -> bool {
        let options = TokenizerOptions {
            buffer_capacity: if small { 3 } else { 100 },
        };
        let whole = run_chunked(&soup.0, &[], options);
        let chunked = run_chunked(&soup.0, &splits, options);
        whole == chunked
    }

    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(Soup, Vec<usize>, bool) -> bool);
}

/// Property: nothing emitted is longer than the buffer capacity, and text
/// events are never empty.
#[test]
fn events_respect_capacity_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(soup: Soup, capacity: u8) -> bool {
        let capacity = usize::from(capacity % 16);
        let events = run_chunked(
            &soup.0,
            &[],
            TokenizerOptions {
                buffer_capacity: capacity,
            },
        );
        events.iter().all(|event| match event {
            Event::Open(name) | Event::Close(name) => name.len() <= capacity,
            Event::Attribute { key, value } => {
                key.len() <= capacity && value.as_ref().is_none_or(|v| v.len() <= capacity)
            }
            Event::Text(text) => !text.is_empty() && text.len() <= capacity,
        })
    }

    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(Soup, u8) -> bool);
}
