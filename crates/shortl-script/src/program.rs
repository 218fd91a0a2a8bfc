//! Compiled provider scripts

use crate::error::{Error, Result};
use crate::lexer::tokenize;
use crate::parser::{parse, Builtin, Expr};
use crate::value::Value;

/// A compiled provider script, ready to evaluate against URLs.
///
/// Compilation resolves every identifier, so evaluation can only fail on
/// type mismatches and overflow, never on missing bindings.
#[derive(Debug, Clone)]
pub struct Program {
    name: String,
    body: Expr,
}

impl Program {
    /// Compile source text into a program.
    ///
    /// The source must define exactly one function of one parameter;
    /// anything else is rejected.
    pub fn compile(source: &str) -> Result<Self> {
        let tokens = tokenize(source)?;
        let function = parse(&tokens)?;
        Ok(Self {
            name: function.name,
            body: function.body,
        })
    }

    /// The name of the function the source defined.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluate the script with `url` bound to its parameter.
    pub fn eval(&self, url: &str) -> Result<Value> {
        eval_expr(&self.body, url)
    }
}

fn eval_expr(expr: &Expr, url: &str) -> Result<Value> {
    match expr {
        Expr::Str(value) => Ok(Value::Str(value.clone())),
        Expr::Int(value) => Ok(Value::Int(*value)),
        Expr::Param => Ok(Value::Str(url.to_string())),
        Expr::Add(left, right) => {
            let left = eval_expr(left, url)?;
            let right = eval_expr(right, url)?;
            match (left, right) {
                (Value::Str(mut a), Value::Str(b)) => {
                    a.push_str(&b);
                    Ok(Value::Str(a))
                }
                (Value::Int(a), Value::Int(b)) => {
                    a.checked_add(b).map(Value::Int).ok_or(Error::Overflow)
                }
                (left, right) => Err(Error::AddMismatch {
                    left: left.type_name(),
                    right: right.type_name(),
                }),
            }
        }
        Expr::Call(builtin, argument) => {
            let argument = eval_expr(argument, url)?;
            apply_builtin(*builtin, argument)
        }
    }
}

fn apply_builtin(builtin: Builtin, argument: Value) -> Result<Value> {
    let text = match argument {
        Value::Str(text) => text,
        Value::Int(_) => {
            return Err(Error::BuiltinType {
                builtin: builtin.name(),
                expected: "string",
                got: "integer",
            });
        }
    };
    Ok(match builtin {
        Builtin::Upper => Value::Str(text.to_uppercase()),
        Builtin::Lower => Value::Str(text.to_lowercase()),
        Builtin::Trim => Value::Str(text.trim().to_string()),
        Builtin::Len => Value::Int(text.chars().count() as i64),
    })
}
