use logos::Logos;

use crate::error::SyntaxError;

/// Raw tokens as matched by logos.
///
/// End of input is not a lexed token: the iterator simply runs dry, and the
/// [`Tokenizer`] turns that into the `EndOfInput` kind.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    /// `T` or `F`
    #[token("T")]
    #[token("F")]
    Bool,
    /// `->`
    #[token("->")]
    Imply,
    /// `v`
    #[token("v")]
    Or,
    /// `^`
    #[token("^")]
    And,
    /// `~`
    #[token("~")]
    Not,
    /// `.`
    #[token(".")]
    Period,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    ClosedParen,
}

/// The kind of a lexical token.
///
/// This enum is the closed set of token kinds the parser matches on. It
/// extends the lexed token set with `EndOfInput`, which the tokenizer
/// produces forever once the cursor passes the end of the source. No
/// whitespace kind exists; whitespace is skipped, never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// The source text is exhausted.
    EndOfInput,
    /// A boolean atom, `T` or `F`.
    Bool,
    /// The implication operator `->`.
    Imply,
    /// The disjunction operator `v`.
    Or,
    /// The conjunction operator `^`.
    And,
    /// The negation operator `~`.
    Not,
    /// The sentence terminator `.`.
    Period,
    /// An opening parenthesis `(`.
    OpenParen,
    /// A closing parenthesis `)`.
    ClosedParen,
}

impl From<RawToken> for TokenKind {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::Bool => Self::Bool,
            RawToken::Imply => Self::Imply,
            RawToken::Or => Self::Or,
            RawToken::And => Self::And,
            RawToken::Not => Self::Not,
            RawToken::Period => Self::Period,
            RawToken::OpenParen => Self::OpenParen,
            RawToken::ClosedParen => Self::ClosedParen,
        }
    }
}

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the
/// tokenizer: its kind paired with the literal slice it was matched from.
/// `EndOfInput` is the only kind that carries no text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// The kind of the token.
    pub kind: TokenKind,
    /// The literal text the token was matched from, such as `"T"` or `"->"`.
    pub text: Option<&'src str>,
}

impl Token<'_> {
    const fn end_of_input() -> Self {
        Self { kind: TokenKind::EndOfInput, text: None }
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.text {
            Some(text) => write!(f, "{text}"),
            None => write!(f, "end of input"),
        }
    }
}

/// Breaks the source text into tokens, one at a time.
///
/// The tokenizer wraps a logos lexer and owns the cursor into the source.
/// The cursor is monotone: every produced token advances it, and once it
/// passes the end of input the tokenizer keeps producing `EndOfInput`, so
/// callers may ask for tokens indefinitely.
pub struct Tokenizer<'src> {
    lexer: logos::Lexer<'src, RawToken>,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer over `source` with the cursor at the start.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer: RawToken::lexer(source) }
    }

    /// Produces the next token, skipping any whitespace before it.
    ///
    /// # Errors
    /// Returns a [`SyntaxError`] when the cursor sits on text that forms no
    /// token: either a `-` with no following `>`, or a character outside
    /// the language alphabet.
    pub fn next_token(&mut self) -> Result<Token<'src>, SyntaxError> {
        match self.lexer.next() {
            Some(Ok(raw)) => Ok(Token { kind: TokenKind::from(raw),
                                        text: Some(self.lexer.slice()) }),
            Some(Err(())) => Err(self.invalid_character()),
            None => Ok(Token::end_of_input()),
        }
    }

    /// The cursor position, in bytes from the start of the source.
    #[must_use]
    pub fn position(&self) -> usize {
        self.lexer.span().end
    }

    fn invalid_character(&self) -> SyntaxError {
        let position = self.lexer.span().start;
        let slice = self.lexer.slice();

        // A failed match starting with '-' is an attempt at '->'.
        if slice.starts_with('-') {
            SyntaxError::UnterminatedImply { position }
        } else {
            SyntaxError::InvalidCharacter { character: slice.to_string(),
                                            position }
        }
    }
}
