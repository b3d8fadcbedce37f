//! Prints the target of every `<a href>` in a document read from stdin.
//!
//! ```text
//! curl -s https://example.com | cargo run --example link_extractor
//! ```
#![allow(missing_docs)]

use std::{
    cell::Cell,
    io::{self, Read, Write},
};

use htmlstream::{Callbacks, Tokenizer};

fn main() -> io::Result<()> {
    let mut links = Vec::new();
    let in_anchor = Cell::new(false);

    {
        let callbacks = Callbacks::new()
            .open(|name| in_anchor.set(name == "a"))
            .attribute(|key, value| {
                if in_anchor.get() && key == "href" {
                    if let Some(value) = value {
                        links.push(value.to_owned());
                    }
                }
            });
        let mut tokenizer = Tokenizer::new(callbacks);

        let mut stdin = io::stdin().lock();
        let mut buf = [0u8; 4096];
        loop {
            let n = stdin.read(&mut buf)?;
            if n == 0 {
                break;
            }
            tokenizer.feed(&buf[..n]);
        }
        drop(tokenizer.finish());
    }

    let mut stdout = io::stdout().lock();
    for link in links {
        writeln!(stdout, "{link}")?;
    }
    Ok(())
}
