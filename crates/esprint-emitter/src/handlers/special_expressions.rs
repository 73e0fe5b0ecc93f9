//! Yield/await, decorators and do-expressions.

use super::expect_shape;
use crate::context::EmitContext;
use crate::dispatch::Handler;
use crate::error::PrintError;
use crate::printer::PrintCallback;
use esprint_ast::Node;
use std::sync::Arc;

// =========================================================================
// Yield and Await
// =========================================================================

/// Build the handler for a yield-like keyword.
///
/// The handler writes `keyword`, a `*` when the node delegates, and a space
/// plus the argument when there is one: `yield`, `yield* gen()`, `await x`.
pub fn keyword_handler(keyword: &'static str) -> Handler {
    Arc::new(
        move |ctx: &mut EmitContext,
              node: &Node,
              print: &mut dyn PrintCallback|
              -> Result<(), PrintError> {
            let expr = expect_shape(keyword, node, node.as_yield_like())?;

            ctx.push(keyword);
            if expr.is_delegating() {
                ctx.push("*");
            }

            if let Some(argument) = expr.argument.as_deref() {
                ctx.space();
                print.print(ctx, argument)?;
            }
            Ok(())
        },
    )
}

// =========================================================================
// Decorators
// =========================================================================

/// `@expression`, then a line break.
pub fn emit_decorator(
    ctx: &mut EmitContext,
    node: &Node,
    print: &mut dyn PrintCallback,
) -> Result<(), PrintError> {
    let decorator = expect_shape("Decorator", node, node.as_decorator())?;

    ctx.push("@");
    print.print(ctx, &decorator.expression)?;
    ctx.newline();
    Ok(())
}

pub fn emit_do_expression(
    ctx: &mut EmitContext,
    node: &Node,
    print: &mut dyn PrintCallback,
) -> Result<(), PrintError> {
    let do_expr = expect_shape("DoExpression", node, node.as_do())?;

    ctx.push("do");
    ctx.space();
    print.print(ctx, &do_expr.body)
}
