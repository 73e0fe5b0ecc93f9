//! The few statement forms an expression tree can contain.

use super::expect_shape;
use crate::context::EmitContext;
use crate::error::PrintError;
use crate::printer::PrintCallback;
use esprint_ast::Node;

pub fn emit_empty_statement(
    ctx: &mut EmitContext,
    _node: &Node,
    _print: &mut dyn PrintCallback,
) -> Result<(), PrintError> {
    ctx.semicolon();
    Ok(())
}

pub fn emit_expression_statement(
    ctx: &mut EmitContext,
    node: &Node,
    print: &mut dyn PrintCallback,
) -> Result<(), PrintError> {
    let stmt = expect_shape("ExpressionStatement", node, node.as_expression_statement())?;

    print.print(ctx, &stmt.expression)?;
    ctx.semicolon();
    Ok(())
}

/// `{}` when empty, otherwise one statement per line, indented.
pub fn emit_block_statement(
    ctx: &mut EmitContext,
    node: &Node,
    print: &mut dyn PrintCallback,
) -> Result<(), PrintError> {
    let block = expect_shape("BlockStatement", node, node.as_block())?;

    if block.body.is_empty() {
        ctx.push("{}");
        return Ok(());
    }

    ctx.push("{");
    ctx.newline();
    ctx.indent();
    for stmt in &block.body {
        print.print(ctx, stmt)?;
        ctx.newline();
    }
    ctx.dedent();
    ctx.push("}");
    Ok(())
}
