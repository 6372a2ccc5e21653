/// Syntax errors.
///
/// Defines the error type raised while tokenizing or parsing a sentence.
/// Syntax errors cover invalid characters, a dangling `-`, and tokens that
/// appear where the grammar does not allow them.
pub mod syntax_error;

pub use syntax_error::SyntaxError;
