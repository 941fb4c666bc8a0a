use thiserror::Error;

/// Why a probability table was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MalformedInput {
    #[error("line {line}: expected `<letter> <probability>`, got {content:?}")]
    UnparsedLine { line: usize, content: String },
    #[error("{0:?} is not an uppercase letter")]
    NotALetter(char),
    #[error("letter {0} appears more than once")]
    DuplicateLetter(char),
    #[error("letter {letter} has negative probability {probability}")]
    NegativeProbability { letter: char, probability: f64 },
    #[error("expected {expected} letters, got {actual}")]
    WrongLetterCount { expected: usize, actual: usize },
}

/// Encode met a character that has no code.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no code for {0:?}, expected an uppercase letter or a space")]
pub struct UnknownSymbol(pub char);

/// Decode met a sequence that does not resolve against the tree.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidCode {
    #[error("unexpected {0:?} in code, expected '0', '1' or ' '")]
    UnexpectedSymbol(char),
    #[error("code continues past a leaf")]
    LeafOverrun,
    #[error("code ends in the middle of a letter")]
    Truncated,
}
