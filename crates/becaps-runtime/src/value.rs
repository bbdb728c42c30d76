//! Argument and return values for dynamic dispatch.
//!
//! Bundle field types implement [`FromValue`]; routine return types
//! implement [`IntoReturn`]. Both carry a [`ValueKind`] so type metadata can
//! describe a signature without an instance.

use std::fmt;

use crate::error::{ObjectError, Result};
use crate::sink::Sink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Unit,
    Float,
    Text,
    Sink,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Unit => "unit",
            ValueKind::Float => "float",
            ValueKind::Text => "text",
            ValueKind::Sink => "sink",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub enum Value {
    Unit,
    Float(f64),
    Text(String),
    Sink(Sink),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Unit => ValueKind::Unit,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
            Value::Sink(_) => ValueKind::Sink,
        }
    }

    /// Parse a command-line literal as a value of `kind`.
    ///
    /// Sink literals are `stdout`, `stderr` and `none` (unbound). Text
    /// literals accept `\n` and `\t` escapes. No parameter takes a unit
    /// value, so unit literals are always rejected.
    pub fn parse(kind: ValueKind, literal: &str) -> Result<Value> {
        let invalid = || ObjectError::InvalidLiteral {
            kind,
            literal: literal.to_string(),
        };
        match kind {
            ValueKind::Unit => Err(invalid()),
            ValueKind::Float => literal.parse().map(Value::Float).map_err(|_| invalid()),
            ValueKind::Text => Ok(Value::Text(unescape(literal))),
            ValueKind::Sink => match literal {
                "stdout" => Ok(Value::Sink(Sink::stdout())),
                "stderr" => Ok(Value::Sink(Sink::stderr())),
                "none" => Ok(Value::Unit),
                _ => Err(invalid()),
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => f.write_str("()"),
            Value::Float(v) => write!(f, "{:.6}", v),
            Value::Text(s) => f.write_str(s),
            Value::Sink(s) => write!(f, "<sink {}>", s.label()),
        }
    }
}

fn unescape(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len());
    let mut chars = literal.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

// =============================================================================
// Conversions
// =============================================================================

/// A parameter-bundle field type.
pub trait FromValue: Sized {
    const KIND: ValueKind;

    /// Returns None when `value` has the wrong kind.
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for f64 {
    const KIND: ValueKind = ValueKind::Float;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromValue for String {
    const KIND: ValueKind = ValueKind::Text;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(s) => Some(s.clone()),
            _ => None,
        }
    }
}

/// Unbound handles travel as `Value::Unit`.
impl FromValue for Option<Sink> {
    const KIND: ValueKind = ValueKind::Sink;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Sink(s) => Some(Some(s.clone())),
            Value::Unit => Some(None),
            _ => None,
        }
    }
}

/// A routine return type.
pub trait IntoReturn {
    const KIND: ValueKind;

    fn into_return(self) -> Result<Value>;
}

impl IntoReturn for () {
    const KIND: ValueKind = ValueKind::Unit;

    fn into_return(self) -> Result<Value> {
        Ok(Value::Unit)
    }
}

impl IntoReturn for f64 {
    const KIND: ValueKind = ValueKind::Float;

    fn into_return(self) -> Result<Value> {
        Ok(Value::Float(self))
    }
}

impl IntoReturn for String {
    const KIND: ValueKind = ValueKind::Text;

    fn into_return(self) -> Result<Value> {
        Ok(Value::Text(self))
    }
}

impl<R: IntoReturn> IntoReturn for Result<R> {
    const KIND: ValueKind = R::KIND;

    fn into_return(self) -> Result<Value> {
        self.and_then(R::into_return)
    }
}
