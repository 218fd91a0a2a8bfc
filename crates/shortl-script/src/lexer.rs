//! Tokenizer for provider scripts

use crate::error::{Error, Result};

/// A single lexical token, tagged with its starting byte offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Fn,
    Ident(String),
    Str(String),
    Int(i64),
    Plus,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Eof,
}

impl Token {
    /// Human-readable rendering for error messages.
    pub(crate) fn describe(&self) -> String {
        match self {
            Token::Fn => "'fn'".to_string(),
            Token::Ident(name) => format!("identifier '{name}'"),
            Token::Str(_) => "string literal".to_string(),
            Token::Int(n) => format!("integer {n}"),
            Token::Plus => "'+'".to_string(),
            Token::LParen => "'('".to_string(),
            Token::RParen => "')'".to_string(),
            Token::LBrace => "'{'".to_string(),
            Token::RBrace => "'}'".to_string(),
            Token::Eof => "end of input".to_string(),
        }
    }
}

/// Tokenize the whole source up front. Scripts are tiny, so there is no
/// value in lexing lazily.
pub(crate) fn tokenize(source: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = source.char_indices().peekable();

    while let Some(&(pos, ch)) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }

        match ch {
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            '{' => {
                chars.next();
                tokens.push(Token::LBrace);
            }
            '}' => {
                chars.next();
                tokens.push(Token::RBrace);
            }
            '"' => {
                chars.next();
                tokens.push(lex_string(pos, &mut chars)?);
            }
            _ if ch.is_ascii_digit() => {
                let mut literal = String::new();
                while let Some(&(_, d)) = chars.peek() {
                    if !d.is_ascii_digit() {
                        break;
                    }
                    literal.push(d);
                    chars.next();
                }
                let value: i64 = literal
                    .parse()
                    .map_err(|_| Error::IntOutOfRange { pos })?;
                tokens.push(Token::Int(value));
            }
            _ if ch.is_alphabetic() || ch == '_' => {
                let mut ident = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if !c.is_alphanumeric() && c != '_' {
                        break;
                    }
                    ident.push(c);
                    chars.next();
                }
                tokens.push(match ident.as_str() {
                    "fn" => Token::Fn,
                    _ => Token::Ident(ident),
                });
            }
            _ => return Err(Error::UnexpectedChar { ch, pos }),
        }
    }

    tokens.push(Token::Eof);
    Ok(tokens)
}

fn lex_string(
    start: usize,
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
) -> Result<Token> {
    let mut value = String::new();
    loop {
        match chars.next() {
            Some((_, '"')) => return Ok(Token::Str(value)),
            Some((pos, '\\')) => match chars.next() {
                Some((_, '"')) => value.push('"'),
                Some((_, '\\')) => value.push('\\'),
                Some((_, 'n')) => value.push('\n'),
                Some((_, 't')) => value.push('\t'),
                Some((_, other)) => {
                    return Err(Error::InvalidEscape { ch: other, pos });
                }
                None => return Err(Error::UnterminatedString { pos: start }),
            },
            Some((_, ch)) => value.push(ch),
            None => return Err(Error::UnterminatedString { pos: start }),
        }
    }
}
