//! Runtime errors.

use std::io;

use thiserror::Error;

use crate::value::ValueKind;

pub type Result<T> = std::result::Result<T, ObjectError>;

#[derive(Debug, Error)]
pub enum ObjectError {
    /// No object type registered under this name
    #[error("unknown object type `{0}`")]
    UnknownType(String),

    /// Operation name not in the type's table
    #[error("{type_name} has no operation `{op}`")]
    UnknownOperation { type_name: &'static str, op: String },

    /// Wrong number of arguments for a parameter bundle
    #[error("{type_name}.{op} takes {expected} argument(s), got {found}")]
    Arity {
        type_name: &'static str,
        op: &'static str,
        expected: usize,
        found: usize,
    },

    /// Argument kind does not match the bundle field
    #[error("{type_name}.{op}: parameter `{param}` expects {expected}, got {found}")]
    TypeMismatch {
        type_name: &'static str,
        op: &'static str,
        param: &'static str,
        expected: ValueKind,
        found: ValueKind,
    },

    /// Operation needs a destination handle that was never bound
    #[error("{type_name}.{op}: destination handle is unbound")]
    UnboundHandle { type_name: &'static str, op: &'static str },

    /// Literal could not be parsed as the requested kind
    #[error("invalid {kind} literal `{literal}`")]
    InvalidLiteral { kind: ValueKind, literal: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}
