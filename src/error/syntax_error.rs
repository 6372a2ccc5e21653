#[derive(Debug)]
/// Represents all errors that can occur while tokenizing or parsing a
/// propositional-logic sentence.
///
/// Every variant records the byte position of the cursor at the point of
/// failure, so diagnostics can point at the offending character or token.
pub enum SyntaxError {
    /// Found a character the language has no token for.
    InvalidCharacter {
        /// The offending source text.
        character: String,
        /// The byte position where the error occurred.
        position:  usize,
    },
    /// A `-` was not followed by the `>` required to form `->`.
    UnterminatedImply {
        /// The byte position where the error occurred.
        position: usize,
    },
    /// The lookahead token fits no production at the current point.
    UnexpectedToken {
        /// The token set the active production would have accepted.
        expected: &'static str,
        /// The token actually observed.
        received: String,
        /// The byte position where the error occurred.
        position: usize,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, position } => write!(f,
                                                                     "Error at position {position}: The character '{character}' is an invalid character."),

            Self::UnterminatedImply { position } => write!(f,
                                                           "Error at position {position}: The character '-' must be followed by a '>'."),

            Self::UnexpectedToken { expected, received, position } => write!(f,
                                                                             "Error at position {position}: Expected {expected}; received '{received}'."),
        }
    }
}

impl std::error::Error for SyntaxError {}
