//! Restricted interpreter for user-supplied provider scripts
//!
//! Custom shortening providers can be registered from source text. That text
//! is untrusted, so it is never handed to an embedded runtime; instead it is
//! compiled by this crate's own lexer/parser and evaluated over a closed
//! expression language. A script can read its single parameter, build
//! strings and integers, and nothing else: no I/O, no ambient state, no
//! loops, no recursion.
//!
//! # Language
//!
//! A script defines exactly one function of one parameter:
//!
//! ```text
//! fn tag(url) { "x-" + url }
//! ```
//!
//! Grammar:
//!
//! ```text
//! program := "fn" ident "(" ident ")" "{" expr "}"
//! expr    := atom ( "+" atom )*
//! atom    := string | integer | ident | builtin "(" expr ")" | "(" expr ")"
//! builtin := "upper" | "lower" | "trim" | "len"
//! ```
//!
//! `+` concatenates two strings or adds two integers; mixing the two is an
//! evaluation error. The only identifier in scope is the parameter; anything
//! else is rejected at compile time, which is what keeps the scope isolated
//! from the host process.
//!
//! # Example
//!
//! ```
//! use shortl_script::{Program, Value};
//!
//! let program = Program::compile("fn f(url) { \"x-\" + url }")?;
//! assert_eq!(program.name(), "f");
//! assert_eq!(program.eval("abc")?, Value::Str("x-abc".to_string()));
//! # Ok::<(), shortl_script::Error>(())
//! ```

pub mod error;
mod lexer;
mod parser;
pub mod program;
pub mod value;

pub use error::{Error, Result};
pub use program::Program;
pub use value::Value;
