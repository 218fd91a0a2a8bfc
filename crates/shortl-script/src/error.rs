//! Error types for shortl-script

/// Result type for script compilation and evaluation
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while compiling or evaluating a provider script
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Character the lexer cannot start a token with
    #[error("unexpected character '{ch}' at byte {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    /// String literal with no closing quote
    #[error("unterminated string literal starting at byte {pos}")]
    UnterminatedString { pos: usize },

    /// Unsupported escape sequence inside a string literal
    #[error("invalid escape '\\{ch}' at byte {pos}")]
    InvalidEscape { ch: char, pos: usize },

    /// Integer literal that does not fit in an i64
    #[error("integer literal out of range at byte {pos}")]
    IntOutOfRange { pos: usize },

    /// Source text with no function definition at all
    #[error("source text does not define a provider function")]
    NoFunction,

    /// Source text defining more than one function
    #[error("source text defines more than one function; exactly one is allowed")]
    MultipleFunctions,

    /// Any other parse failure
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
    },

    /// Identifier that is neither the parameter nor a builtin call
    #[error("unknown identifier '{name}'; only the parameter is in scope")]
    UnknownIdent { name: String },

    /// Call to a function that is not a builtin
    #[error("unknown function '{name}'")]
    UnknownFunction { name: String },

    /// `+` applied to a string and an integer
    #[error("cannot apply '+' to {left} and {right}")]
    AddMismatch {
        left: &'static str,
        right: &'static str,
    },

    /// Builtin applied to the wrong value type
    #[error("{builtin}() expects a {expected}, got {got}")]
    BuiltinType {
        builtin: &'static str,
        expected: &'static str,
        got: &'static str,
    },

    /// Integer addition overflowed
    #[error("integer overflow in '+'")]
    Overflow,
}
