//! `htmlstream`: reads HTML from standard input and prints its structure.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`, e.g.
//! `RUST_LOG=htmlstream=trace` shows every recovery the tokenizer makes.

use std::io::{self, BufWriter, Read, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use htmlstream::{DEFAULT_BUFFER_CAPACITY, Sink, Tokenizer, TokenizerOptions};
use tracing_subscriber::EnvFilter;

mod pretty;

use pretty::{EventPrinter, PrettyPrinter, WriteSink};

const MAX_CHUNK_SIZE: u64 = 1 << 20;

#[derive(Parser, Debug)]
#[command(name = "htmlstream", version, about)]
struct Args {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Pretty)]
    format: Format,

    /// Bytes read from stdin per chunk, at most 1 MiB
    #[arg(long, default_value_t = 1024, value_parser = clap::value_parser!(u64).range(1..=MAX_CHUNK_SIZE))]
    chunk_size: u64,

    /// Maximum bytes kept per tag name, attribute key, value or text run
    #[arg(long, default_value_t = DEFAULT_BUFFER_CAPACITY)]
    buffer_capacity: usize,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    /// Indented outline of tags, attributes and text
    Pretty,
    /// One event per line
    Events,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let options = TokenizerOptions {
        buffer_capacity: args.buffer_capacity,
    };
    let chunk_size = usize::try_from(args.chunk_size).context("chunk size does not fit in memory")?;
    let stdout = BufWriter::new(io::stdout().lock());
    let stdin = io::stdin().lock();

    let mut out = match args.format {
        Format::Pretty => run(stdin, PrettyPrinter::new(stdout), options, chunk_size)?,
        Format::Events => run(stdin, EventPrinter::new(stdout), options, chunk_size)?,
    };
    out.flush().context("failed to write to stdout")?;
    Ok(())
}

/// Feeds `input` to a tokenizer driving `sink`, stopping at the first read
/// or write error. Returns the underlying writer.
fn run<R, S>(mut input: R, sink: S, options: TokenizerOptions, chunk_size: usize) -> Result<S::Writer>
where
    R: Read,
    S: Sink + WriteSink,
{
    let mut tokenizer = Tokenizer::with_options(sink, options);
    let mut buf = vec![0u8; chunk_size];
    let mut total = 0usize;

    loop {
        let n = match input.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e).context("failed to read from stdin"),
        };
        total += n;
        tokenizer.feed(&buf[..n]);
        if let Some(e) = tokenizer.sink_mut().take_error() {
            return Err(e).context("failed to write to stdout");
        }
    }

    tracing::debug!(bytes = total, "end of input");
    let mut sink = tokenizer.finish();
    if let Some(e) = sink.take_error() {
        return Err(e).context("failed to write to stdout");
    }
    sink.into_writer().context("failed to write to stdout")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(format: Format, input: &str, chunk_size: usize) -> String {
        let options = TokenizerOptions::default();
        let bytes = match format {
            Format::Pretty => run(input.as_bytes(), PrettyPrinter::new(Vec::new()), options, chunk_size),
            Format::Events => run(input.as_bytes(), EventPrinter::new(Vec::new()), options, chunk_size),
        }
        .unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn chunk_size_does_not_change_output() {
        let input = "<ul class=nav><li><a href='/a'>A</a></li><!-- x --><li>B</li></ul>";
        let whole = render(Format::Pretty, input, 4096);
        for chunk_size in [1, 2, 3, 7] {
            assert_eq!(render(Format::Pretty, input, chunk_size), whole);
        }
    }

    #[test]
    fn events_format_is_one_line_per_event() {
        insta::assert_snapshot!(render(Format::Events, "<a href=x>go</a>", 3), @r#"
        Open("a")
        Attribute { key: "href", value: Some("x") }
        Text("go")
        Close("a")
        "#);
    }

    #[test]
    fn args_parse_defaults() {
        let args = Args::try_parse_from(["htmlstream"]).unwrap();
        assert_eq!(args.format, Format::Pretty);
        assert_eq!(args.chunk_size, 1024);
        assert_eq!(args.buffer_capacity, DEFAULT_BUFFER_CAPACITY);
    }

    #[test]
    fn chunk_size_is_bounded() {
        assert!(Args::try_parse_from(["htmlstream", "--chunk-size", "0"]).is_err());
        assert!(Args::try_parse_from(["htmlstream", "--chunk-size", "1048577"]).is_err());
        assert!(
            Args::try_parse_from(["htmlstream", "--chunk-size", "18446744073709551615"]).is_err()
        );
        let args = Args::try_parse_from(["htmlstream", "--chunk-size", "1048576"]).unwrap();
        assert_eq!(args.chunk_size, MAX_CHUNK_SIZE);
    }
}
