//! `becaps call` command - invoke operations by name.
//!
//! Each invocation is `op arg...`. Arguments are parsed with the kind of the
//! matching parameter; the last parameter takes the rest of the line, so
//! `write Hello world\n` passes a single text argument.

use anyhow::Context;
use becaps_runtime::{registry, Result, TypeMeta, Value, ValueKind};

/// Construct one instance of `type_name` and run `invocations` on it in order.
pub fn run(type_name: &str, invocations: &[String]) -> anyhow::Result<()> {
    let mut obj = registry::construct(type_name)?;
    let meta = obj.meta();
    for invocation in invocations {
        let (op, args) = parse_invocation(meta, invocation)?;
        let ret = obj
            .invoke(op, &args)
            .with_context(|| format!("invoking `{}`", invocation.trim()))?;
        if !matches!(ret, Value::Unit) {
            println!("{}", ret);
        }
    }
    Ok(())
}

/// Split an invocation into its operation name and typed arguments.
///
/// Unknown operations parse with no arguments; dispatch reports them.
pub fn parse_invocation<'a>(meta: &TypeMeta, invocation: &'a str) -> Result<(&'a str, Vec<Value>)> {
    let invocation = invocation.trim();
    let (op, rest) = invocation
        .split_once(char::is_whitespace)
        .unwrap_or((invocation, ""));
    let rest = rest.trim_start();

    let Some(op_meta) = meta.op(op) else {
        return Ok((op, Vec::new()));
    };
    if rest.is_empty() {
        return Ok((op, Vec::new()));
    }

    let tokens = match op_meta.params.len() {
        0 => rest.split_whitespace().collect(),
        n => split_args(rest, n),
    };
    let args = tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let kind = op_meta.params.get(i).map_or(ValueKind::Text, |p| p.kind);
            Value::parse(kind, token)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok((op, args))
}

/// Split `rest` into at most `n` arguments separated by runs of whitespace.
/// The last argument keeps the remainder of the line.
fn split_args(mut rest: &str, n: usize) -> Vec<&str> {
    let mut tokens = Vec::with_capacity(n);
    while tokens.len() + 1 < n {
        let Some((token, tail)) = rest.split_once(char::is_whitespace) else {
            break;
        };
        tokens.push(token);
        rest = tail.trim_start();
    }
    if !rest.is_empty() {
        tokens.push(rest);
    }
    tokens
}
