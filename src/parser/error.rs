/// Malformed pattern, reported by [`Parser::parse_strict`](super::Parser::parse_strict).
///
/// Offsets are byte positions in the pattern. The lenient parser never
/// produces these; it keeps whatever partial structure the scan reached.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unmatched opening parenthesis at {0}")]
    UnclosedGroup(usize),

    #[error("unmatched closing parenthesis at {0}")]
    UnmatchedClose(usize),

    #[error("unmatched opening curly bracket at {0}")]
    UnclosedRepeat(usize),

    #[error("repeat count is empty at {0}")]
    MissingRepeatCount(usize),

    #[error("repeat count at {0} does not fit in 32 bits")]
    RepeatCountOverflow(usize),

    #[error("out of repeat order {{{min},{max}}} at {at}")]
    RepeatOutOfOrder { at: usize, min: u32, max: u32 },
}
