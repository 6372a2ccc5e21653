use crate::{
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind, Tokenizer},
        stack::EvalStack,
    },
};

/// Result type used by the grammar productions.
///
/// A production either succeeds, leaving its value on the stack, or fails
/// with a [`SyntaxError`] naming the token set it would have accepted.
pub type ParseResult = Result<(), SyntaxError>;

/// Parses a sentence, evaluating it as it is recognized.
///
/// The parser implements an LL(1) grammar with a single token of lookahead.
/// Each non-terminal is a method that validates its production and, on
/// success, leaves the production's truth value on the stack; no syntax
/// tree is built and the cursor only ever moves forward.
///
/// Precedence, tightest first: `~`, `^`, `v`, `->`. All binary operators
/// are left-associative: the left operand is already on the stack when the
/// right operand is parsed, and the two are combined immediately. The right
/// operand is pushed last, so it is popped first.
pub struct Parser<'a, 'src> {
    tokenizer: Tokenizer<'src>,
    lookahead: Token<'src>,
    stack:     &'a mut EvalStack,
}

impl<'a, 'src> Parser<'a, 'src> {
    /// Creates a parser over `source` and fetches the first token.
    ///
    /// # Errors
    /// Fails when the source starts with text that forms no token.
    pub fn new(source: &'src str, stack: &'a mut EvalStack) -> Result<Self, SyntaxError> {
        let mut tokenizer = Tokenizer::new(source);
        let lookahead = tokenizer.next_token()?;
        Ok(Self { tokenizer, lookahead, stack })
    }

    /// Parses the start symbol.
    ///
    /// The rule is: `sentence := implication "."`
    ///
    /// The terminating period is not consumed: the sentence is complete
    /// once the period has been seen, so anything after it is never read.
    pub fn sentence(&mut self) -> ParseResult {
        self.implication()?;

        match self.lookahead.kind {
            TokenKind::Period => Ok(()),
            _ => Err(self.unexpected("a '.'")),
        }
    }

    /// The rule is: `implication := disjunction implication_tail`
    fn implication(&mut self) -> ParseResult {
        self.disjunction()?;
        self.implication_tail()
    }

    /// The rule is: `implication_tail := "->" disjunction implication_tail | ε`
    ///
    /// The empty production is only legal when the lookahead may follow an
    /// implication: `.` or `)`. Material implication is false exactly when
    /// the left operand is true and the right operand is false.
    fn implication_tail(&mut self) -> ParseResult {
        match self.lookahead.kind {
            TokenKind::Imply => {
                self.advance()?;
                self.disjunction()?;

                let right = self.stack.pop();
                let left = self.stack.pop();
                self.stack.push(!left || right);

                self.implication_tail()
            },
            TokenKind::Period | TokenKind::ClosedParen => Ok(()),
            _ => Err(self.unexpected("a '->', '.', or ')'")),
        }
    }

    /// The rule is: `disjunction := conjunction disjunction_tail`
    fn disjunction(&mut self) -> ParseResult {
        self.conjunction()?;
        self.disjunction_tail()
    }

    /// The rule is: `disjunction_tail := "v" conjunction disjunction_tail | ε`
    ///
    /// The empty production is only legal when the lookahead may follow a
    /// disjunction: `->`, `.`, or `)`.
    fn disjunction_tail(&mut self) -> ParseResult {
        match self.lookahead.kind {
            TokenKind::Or => {
                self.advance()?;
                self.conjunction()?;

                let right = self.stack.pop();
                let left = self.stack.pop();
                self.stack.push(left || right);

                self.disjunction_tail()
            },
            TokenKind::Imply | TokenKind::Period | TokenKind::ClosedParen => Ok(()),
            _ => Err(self.unexpected("a 'v', '->', '.', or ')'")),
        }
    }

    /// The rule is: `conjunction := literal conjunction_tail`
    fn conjunction(&mut self) -> ParseResult {
        self.literal()?;
        self.conjunction_tail()
    }

    /// The rule is: `conjunction_tail := "^" literal conjunction_tail | ε`
    ///
    /// The empty production is only legal when the lookahead may follow a
    /// conjunction: `v`, `->`, `.`, or `)`. Anything else, a stray atom
    /// included, is a syntax error rather than a silent empty match.
    fn conjunction_tail(&mut self) -> ParseResult {
        match self.lookahead.kind {
            TokenKind::And => {
                self.advance()?;
                self.literal()?;

                let right = self.stack.pop();
                let left = self.stack.pop();
                self.stack.push(left && right);

                self.conjunction_tail()
            },
            TokenKind::Or | TokenKind::Imply | TokenKind::Period | TokenKind::ClosedParen => Ok(()),
            _ => Err(self.unexpected("a '^', 'v', '->', '.', or ')'")),
        }
    }

    /// The rule is: `literal := "~" literal | atom`
    fn literal(&mut self) -> ParseResult {
        if self.lookahead.kind == TokenKind::Not {
            self.advance()?;
            self.literal()?;

            let value = self.stack.pop();
            self.stack.push(!value);

            return Ok(());
        }

        self.atom()
    }

    /// The rule is: `atom := bool | "(" implication ")"`
    ///
    /// A boolean atom pushes its truth value onto the stack directly.
    fn atom(&mut self) -> ParseResult {
        match self.lookahead.kind {
            TokenKind::Bool => {
                self.stack.push(self.lookahead.text == Some("T"));
                self.advance()
            },
            TokenKind::OpenParen => {
                self.advance()?;
                self.implication()?;

                match self.lookahead.kind {
                    TokenKind::ClosedParen => self.advance(),
                    _ => Err(self.unexpected("a ')'")),
                }
            },
            _ => Err(self.unexpected("a '~', 'T', 'F', or '('")),
        }
    }

    /// Replaces the lookahead with the next token from the tokenizer.
    fn advance(&mut self) -> ParseResult {
        self.lookahead = self.tokenizer.next_token()?;
        Ok(())
    }

    fn unexpected(&self, expected: &'static str) -> SyntaxError {
        SyntaxError::UnexpectedToken { expected,
                                       received: self.lookahead.to_string(),
                                       position: self.tokenizer.position() }
    }
}
