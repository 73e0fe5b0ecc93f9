//! Leaf nodes: identifiers, literals and the `this` / `super` keywords.

use super::expect_shape;
use crate::context::EmitContext;
use crate::error::PrintError;
use crate::printer::PrintCallback;
use esprint_ast::{LiteralValue, Node};

pub fn emit_identifier(
    ctx: &mut EmitContext,
    node: &Node,
    _print: &mut dyn PrintCallback,
) -> Result<(), PrintError> {
    let ident = expect_shape("Identifier", node, node.as_identifier())?;
    ctx.push(&ident.name);
    Ok(())
}

/// Prefer the producer's raw text; rebuild it from the value otherwise.
pub fn emit_literal(
    ctx: &mut EmitContext,
    node: &Node,
    _print: &mut dyn PrintCallback,
) -> Result<(), PrintError> {
    let literal = expect_shape("Literal", node, node.as_literal())?;

    if let Some(raw) = literal.raw.as_deref() {
        ctx.push(raw);
        return Ok(());
    }

    match &literal.value {
        LiteralValue::Null => ctx.push("null"),
        LiteralValue::Boolean(true) => ctx.push("true"),
        LiteralValue::Boolean(false) => ctx.push("false"),
        LiteralValue::Number(value) => ctx.push(&format_number(*value)),
        LiteralValue::String(value) => ctx.push(&quote_string(value)),
    }
    Ok(())
}

pub fn emit_this(
    ctx: &mut EmitContext,
    _node: &Node,
    _print: &mut dyn PrintCallback,
) -> Result<(), PrintError> {
    ctx.push("this");
    Ok(())
}

pub fn emit_super(
    ctx: &mut EmitContext,
    _node: &Node,
    _print: &mut dyn PrintCallback,
) -> Result<(), PrintError> {
    ctx.push("super");
    Ok(())
}

/// Number text as JavaScript's `String(value)` would give it for the common
/// range: integral values carry no fraction and `-0` prints as `0`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}
