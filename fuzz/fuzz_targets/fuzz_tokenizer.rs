#![no_main]

use arbitrary::Arbitrary;
use htmlstream::{Event, Tokenizer, TokenizerOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    /// Kept small so truncation paths are hit often.
    capacity: u8,
    /// Chunk lengths, cycled until the document is consumed.
    splits: Vec<u8>,
    document: &'a [u8],
}

fn run(input: &Input<'_>, chunked: bool) -> Vec<Event> {
    let mut tokenizer = Tokenizer::with_options(
        Vec::new(),
        TokenizerOptions {
            buffer_capacity: usize::from(input.capacity),
        },
    );

    let mut rest = input.document;
    if chunked && !input.splits.is_empty() {
        for &split in input.splits.iter().cycle() {
            if rest.is_empty() {
                break;
            }
            let size = usize::from(split).clamp(1, rest.len());
            let (chunk, tail) = rest.split_at(size);
            tokenizer.feed(chunk);
            rest = tail;
        }
    }
    tokenizer.feed(rest);
    tokenizer.finish()
}

fuzz_target!(|input: Input<'_>| {
    let whole = run(&input, false);
    let chunked = run(&input, true);
    assert_eq!(whole, chunked, "chunking changed the event stream");

    let capacity = usize::from(input.capacity);
    for event in &whole {
        match event {
            Event::Open(name) | Event::Close(name) => assert!(name.len() <= capacity),
            Event::Attribute { key, value } => {
                assert!(key.len() <= capacity);
                assert!(value.as_ref().is_none_or(|v| v.len() <= capacity));
            }
            Event::Text(text) => assert!(!text.is_empty() && text.len() <= capacity),
        }
    }
});
