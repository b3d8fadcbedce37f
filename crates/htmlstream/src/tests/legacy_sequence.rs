//! Long-running regression sequence.
//!
//! One tokenizer instance is fed every step in order, so each step starts in
//! whatever state the previous one left behind. A step asserts on the single
//! event of its kind produced while its own chunk was being fed; events of
//! other kinds are expected and ignored.

use alloc::vec::Vec;

use crate::{Event, Tokenizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Open,
    Close,
    Attribute,
    Text,
}

impl Kind {
    fn of(event: &Event) -> Self {
        match event {
            Event::Open(_) => Kind::Open,
            Event::Close(_) => Kind::Close,
            Event::Attribute { .. } => Kind::Attribute,
            Event::Text(_) => Kind::Text,
        }
    }
}

fn step(tokenizer: &mut Tokenizer<Vec<Event>>, kind: Kind, chunk: &str) -> Vec<Event> {
    tokenizer.sink_mut().clear();
    tokenizer.feed(chunk);
    tokenizer
        .sink_mut()
        .drain(..)
        .filter(|event| Kind::of(event) == kind)
        .collect()
}

#[test]
#[allow(clippy::too_many_lines)]
fn legacy_sequence() {
    use Kind::*;

    let steps: &[(Kind, &str, Event)] = &[
        (Open, "< dErp kacka=wuast  > ", Event::open("derp")),
        (Open, "< Com-Plete string> ", Event::open("com-plete")),
        (Open, "<><<foo>", Event::open("foo")),
        (Open, "<> < <bar c >derp>>", Event::open("bar")),
        (Open, "<> << dd>", Event::open("dd")),
        (Close, "</joP>", Event::close("jop")),
        (Close, "< /  closed not=true>", Event::close("closed")),
        (Open, "< / < not closed not=true>", Event::open("not")),
        (Close, "< / closed < new", Event::close("closed")),
        (Open, " words on the block", Event::open("new")),
        (Open, "<html works>", Event::open("html")),
        (Attribute, "<derp color=red/>", Event::attribute("color", "red")),
        (Attribute, "<derp color=green />", Event::attribute("color", "green")),
        (Attribute, "<derp you = awe<some >", Event::attribute("you", "awe")),
        (Attribute, "<ok google google =", Event::bare_attribute("google")),
        (Attribute, "that/>", Event::attribute("google", "that")),
        (Attribute, "<me you = knorke </me>", Event::attribute("you", "knorke")),
        (
            Attribute,
            r"<omg escape=hel'l \' <3' ",
            Event::attribute("escape", "hell ' <3"),
        ),
        (Attribute, r#"schnitzel "oh god""#, Event::bare_attribute("schnitzel")),
        (Attribute, ">", Event::bare_attribute("oh god")),
        (
            Open,
            r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.0 Transitional//EN">"#,
            Event::open("!doctype"),
        ),
        (Open, "<!-- <stuff> --><comments>", Event::open("comments")),
        (
            Attribute,
            r#"<meta  http-equiv="Content-Type" "#,
            Event::attribute("http-equiv", "content-type"),
        ),
        (
            Attribute,
            r#"content="text/html; charset=utf8">"#,
            Event::attribute("content", "text/html; charset=utf8"),
        ),
        (
            Attribute,
            r#"<a complete" tag" = 'is<!-- not--> complete'>"#,
            Event::attribute("complete tag", "is complete"),
        ),
        (
            Attribute,
            "<a 'complete <!' = ' <!-- not-->complete d' >",
            Event::attribute("complete <!", " complete d"),
        ),
        (Text, "<lazer makes> pew pew </lazer>", Event::text("pew pew")),
        (Text, "<lazer>pew pew</lazer>", Event::text("pew pew")),
        (Text, "<yoo lo>yo<!--yo -->lo< / lo >", Event::text("yolo")),
        (Text, "<ok >    turbo 'swag  </d>", Event::text("turbo 'swag")),
    ];

    let mut tokenizer = Tokenizer::new(Vec::new());
    for (index, (kind, chunk, expected)) in steps.iter().enumerate() {
        let got = step(&mut tokenizer, *kind, chunk);
        assert_eq!(
            got,
            [expected.clone()],
            "step {} ({kind:?}) fed {chunk:?}",
            index + 1
        );
    }
}
