use super::expect_shape;
use crate::context::EmitContext;
use crate::error::PrintError;
use crate::printer::{ListSeparator, PrintCallback};
use esprint_ast::Node;

// =========================================================================
// Unary and update
// =========================================================================

/// Whether a space separates a unary operator from its argument.
///
/// Word operators (`typeof`, `void`, `delete`) always take one. A nested
/// unary or update argument takes one too so `- -x` and `- ++x` do not fuse
/// into `--x` / `-++x`, except a nested `!`, which cannot fuse.
pub fn unary_needs_space(operator: &str, argument: &Node) -> bool {
    let mut has_space = operator
        .chars()
        .next_back()
        .is_some_and(|ch| ch.is_ascii_lowercase());

    if matches!(
        argument,
        Node::UpdateExpression(_) | Node::UnaryExpression(_)
    ) {
        has_space = true;
    }

    if argument.as_unary().is_some_and(|inner| inner.operator == "!") {
        has_space = false;
    }

    has_space
}

pub fn emit_unary_expression(
    ctx: &mut EmitContext,
    node: &Node,
    print: &mut dyn PrintCallback,
) -> Result<(), PrintError> {
    let unary = expect_shape("UnaryExpression", node, node.as_unary())?;

    ctx.push(&unary.operator);
    if unary_needs_space(&unary.operator, &unary.argument) {
        ctx.space();
    }
    print.print(ctx, &unary.argument)
}

pub fn emit_update_expression(
    ctx: &mut EmitContext,
    node: &Node,
    print: &mut dyn PrintCallback,
) -> Result<(), PrintError> {
    let update = expect_shape("UpdateExpression", node, node.as_update())?;

    if update.prefix {
        ctx.push(&update.operator);
        print.print(ctx, &update.argument)
    } else {
        print.print(ctx, &update.argument)?;
        ctx.push(&update.operator);
        Ok(())
    }
}

// =========================================================================
// Conditional and operator expressions
// =========================================================================

pub fn emit_conditional_expression(
    ctx: &mut EmitContext,
    node: &Node,
    print: &mut dyn PrintCallback,
) -> Result<(), PrintError> {
    let cond = expect_shape("ConditionalExpression", node, node.as_conditional())?;

    print.print(ctx, &cond.test)?;
    ctx.space();
    ctx.push("?");
    ctx.space();
    print.print(ctx, &cond.consequent)?;
    ctx.space();
    ctx.push(":");
    ctx.space();
    print.print(ctx, &cond.alternate)
}

/// `left op right` for assignment, binary, logical and assignment-pattern
/// nodes. Always spaced, compact or not.
pub fn emit_operator_expression(
    ctx: &mut EmitContext,
    node: &Node,
    print: &mut dyn PrintCallback,
) -> Result<(), PrintError> {
    let expr = expect_shape("operator expression", node, node.as_operator_expression())?;

    print.print(ctx, &expr.left)?;
    ctx.space();
    ctx.push(&expr.operator);
    ctx.space();
    print.print(ctx, &expr.right)
}

// =========================================================================
// Calls
// =========================================================================

pub fn emit_new_expression(
    ctx: &mut EmitContext,
    node: &Node,
    print: &mut dyn PrintCallback,
) -> Result<(), PrintError> {
    let new_expr = expect_shape("NewExpression", node, node.as_new())?;

    ctx.push("new ");
    print.print(ctx, &new_expr.callee)?;
    ctx.push("(");
    print.print_list(ctx, &new_expr.arguments, ListSeparator::CommaSpace)?;
    ctx.push(")");
    Ok(())
}

/// Arguments go one per line, one level deeper, when the producer marked the
/// call pretty and line retention is off. Otherwise they stay inline.
pub fn emit_call_expression(
    ctx: &mut EmitContext,
    node: &Node,
    print: &mut dyn PrintCallback,
) -> Result<(), PrintError> {
    let call = expect_shape("CallExpression", node, node.as_call())?;

    print.print(ctx, &call.callee)?;
    ctx.push("(");

    let is_pretty_call = call.pretty_call && !ctx.retain_lines();
    let separator = if is_pretty_call {
        ctx.newline();
        ctx.indent();
        ListSeparator::CommaNewline
    } else {
        ListSeparator::CommaSpace
    };

    print.print_list(ctx, &call.arguments, separator)?;

    if is_pretty_call {
        ctx.newline();
        ctx.dedent();
    }

    ctx.push(")");
    Ok(())
}

// =========================================================================
// Member access
// =========================================================================

pub fn emit_member_expression(
    ctx: &mut EmitContext,
    node: &Node,
    print: &mut dyn PrintCallback,
) -> Result<(), PrintError> {
    let member = expect_shape("MemberExpression", node, node.as_member())?;

    print.print(ctx, &member.object)?;

    if !member.computed && member.property.as_member().is_some() {
        return Err(PrintError::MemberExpressionProperty);
    }

    // `foo.0` is not valid source; numeric keys always go in brackets.
    let computed = member.computed || member.property.is_numeric_literal();

    if computed {
        ctx.push("[");
        print.print(ctx, &member.property)?;
        ctx.push("]");
    } else {
        ctx.push(".");
        print.print(ctx, &member.property)?;
    }
    Ok(())
}

pub fn emit_meta_property(
    ctx: &mut EmitContext,
    node: &Node,
    print: &mut dyn PrintCallback,
) -> Result<(), PrintError> {
    let meta = expect_shape("MetaProperty", node, node.as_meta_property())?;

    print.print(ctx, &meta.meta)?;
    ctx.push(".");
    print.print(ctx, &meta.property)
}

// =========================================================================
// Lists and wrappers
// =========================================================================

pub fn emit_sequence_expression(
    ctx: &mut EmitContext,
    node: &Node,
    print: &mut dyn PrintCallback,
) -> Result<(), PrintError> {
    let seq = expect_shape("SequenceExpression", node, node.as_sequence())?;
    print.print_list(ctx, &seq.expressions, ListSeparator::CommaSpace)
}

pub fn emit_bind_expression(
    ctx: &mut EmitContext,
    node: &Node,
    print: &mut dyn PrintCallback,
) -> Result<(), PrintError> {
    let bind = expect_shape("BindExpression", node, node.as_bind())?;

    print.print_optional(ctx, bind.object.as_deref())?;
    ctx.push("::");
    print.print(ctx, &bind.callee)
}

pub fn emit_parenthesized_expression(
    ctx: &mut EmitContext,
    node: &Node,
    print: &mut dyn PrintCallback,
) -> Result<(), PrintError> {
    let paren = expect_shape("ParenthesizedExpression", node, node.as_parenthesized())?;

    ctx.push("(");
    print.print(ctx, &paren.expression)?;
    ctx.push(")");
    Ok(())
}
