//! Comment pre-filter.
//!
//! Sits in front of the automaton and hides `<!-- ... -->` regions. Matching
//! is one byte at a time with no lookahead, so the opener `<!--` is withheld
//! while it is being recognized; if it turns out not to be a comment, the
//! withheld prefix is handed back to the caller for replay.

/// The longest prefix of the opener that can be withheld before the filter
/// commits to a comment.
const OPENER: &[u8] = b"<!-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum CommentState {
    #[default]
    Outside,
    /// Withholding `<`.
    Lt,
    /// Withholding `<!`.
    LtBang,
    /// Withholding `<!-`.
    LtBangDash,
    Body,
    BodyDash,
    BodyDashDash,
}

impl CommentState {
    /// The withheld bytes to replay when the opener fails to match.
    fn pending(self) -> &'static [u8] {
        match self {
            CommentState::Lt => &OPENER[..1],
            CommentState::LtBang => &OPENER[..2],
            CommentState::LtBangDash => OPENER,
            _ => &[],
        }
    }
}

/// What the automaton should see after the filter has looked at one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Filtered {
    /// The byte is withheld or belongs to a comment.
    Hidden,
    /// Feed `pending` (a previously withheld prefix, often empty), then
    /// `byte`.
    Pass { pending: &'static [u8], byte: u8 },
}

#[derive(Debug, Clone, Default)]
pub(crate) struct CommentFilter {
    state: CommentState,
}

impl CommentFilter {
    pub(crate) fn step(&mut self, byte: u8) -> Filtered {
        use CommentState::*;

        let next = match (self.state, byte) {
            (Outside, b'<') => Lt,
            (Lt, b'!') => LtBang,
            (LtBang, b'-') => LtBangDash,
            (LtBangDash, b'-') => {
                log::trace!(target: "htmlstream::comment", "comment opened");
                Body
            }
            (Body, b'-') => BodyDash,
            (BodyDash, b'-') => BodyDashDash,
            (BodyDashDash, b'>') => {
                log::trace!(target: "htmlstream::comment", "comment closed");
                Outside
            }
            (Body | BodyDash | BodyDashDash, _) => Body,
            (state, byte) => {
                self.state = Outside;
                return Filtered::Pass {
                    pending: state.pending(),
                    byte,
                };
            }
        };
        self.state = next;
        Filtered::Hidden
    }

    /// Ends the stream: returns any withheld prefix for replay and resets.
    ///
    /// An unterminated comment body is dropped.
    pub(crate) fn flush(&mut self) -> &'static [u8] {
        let pending = self.state.pending();
        if self.in_comment() {
            log::trace!(target: "htmlstream::comment", "unterminated comment discarded");
        }
        self.state = CommentState::Outside;
        pending
    }

    pub(crate) fn in_comment(&self) -> bool {
        matches!(
            self.state,
            CommentState::Body | CommentState::BodyDash | CommentState::BodyDashDash
        )
    }
}
