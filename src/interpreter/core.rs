use std::{fs, io, path::Path};

use crate::{
    error::SyntaxError,
    interpreter::{parser::Parser, stack::EvalStack},
};

/// Checks and evaluates one propositional-logic sentence.
///
/// The interpreter owns the source text and the evaluation stack. Both
/// [`Interpreter::is_valid`] and [`Interpreter::evaluate`] reset the stack
/// on entry and parse from the start of the source, so they may be called
/// any number of times on the same instance with the same outcome.
///
/// # Examples
/// ```
/// use logica::Interpreter;
///
/// let mut interpreter = Interpreter::new("T v F ^ F.");
/// assert!(interpreter.is_valid());
/// assert_eq!(interpreter.evaluate(), Some(true));
/// ```
pub struct Interpreter {
    source: String,
    stack:  EvalStack,
}

impl Interpreter {
    /// Creates an interpreter over an in-memory sentence.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self { source: source.to_string(),
               stack:  EvalStack::new() }
    }

    /// Creates an interpreter over the contents of the file at `path`.
    ///
    /// # Errors
    /// Fails when the file does not exist or cannot be read. No parse is
    /// attempted in that case.
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let source = fs::read_to_string(path)?;
        Ok(Self { source, stack: EvalStack::new() })
    }

    /// Checks whether the source holds one syntactically valid sentence.
    ///
    /// Any syntax error raised by the tokenizer or a production is caught
    /// here: the diagnostic, including the position of the failure, is
    /// printed to stderr and the check reports `false`. On success the
    /// sentence's truth value is the single value left on the stack.
    pub fn is_valid(&mut self) -> bool {
        self.stack.clear();

        match Self::parse(&self.source, &mut self.stack) {
            Ok(()) => {
                debug_assert_eq!(self.stack.len(),
                                 1,
                                 "a successful parse must leave exactly one value");
                true
            },
            Err(error) => {
                eprintln!("{error}");
                false
            },
        }
    }

    /// Evaluates the sentence.
    ///
    /// # Returns
    /// `Some(value)` holding the sentence's truth value when it is valid,
    /// or `None` when it is not.
    pub fn evaluate(&mut self) -> Option<bool> {
        if self.is_valid() {
            Some(self.stack.pop())
        } else {
            None
        }
    }

    fn parse(source: &str, stack: &mut EvalStack) -> Result<(), SyntaxError> {
        let mut parser = Parser::new(source, stack)?;
        parser.sentence()
    }
}
