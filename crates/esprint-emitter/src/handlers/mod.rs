//! Per-kind handlers and their registration.
//!
//! Every handler has the `Handler` signature: it writes its own tokens through
//! the `EmitContext` and renders children through the `PrintCallback`. None of
//! them keeps state between calls.

use crate::dispatch::{DispatchTable, Handler};
use crate::error::PrintError;
use esprint_ast::{Node, NodeKind};
use std::sync::Arc;

mod expressions;
mod literals;
mod special_expressions;
mod statements;

pub use expressions::{
    emit_bind_expression, emit_call_expression, emit_conditional_expression,
    emit_member_expression, emit_meta_property, emit_new_expression, emit_operator_expression,
    emit_parenthesized_expression, emit_sequence_expression, emit_unary_expression,
    emit_update_expression, unary_needs_space,
};
pub use literals::{emit_identifier, emit_literal, emit_super, emit_this, format_number};
pub use special_expressions::{emit_decorator, emit_do_expression, keyword_handler};
pub use statements::{emit_block_statement, emit_empty_statement, emit_expression_statement};

/// Populate `table` with the handler for every `NodeKind`.
pub fn register_defaults(table: &mut DispatchTable) {
    // Leaves
    table.register(NodeKind::Identifier, emit_identifier);
    table.register(NodeKind::Literal, emit_literal);
    table.register(NodeKind::ThisExpression, emit_this);
    table.register(NodeKind::Super, emit_super);

    // Expressions
    table.register(NodeKind::UnaryExpression, emit_unary_expression);
    table.register(NodeKind::UpdateExpression, emit_update_expression);
    table.register_shared(NodeKind::YieldExpression, keyword_handler("yield"));
    table.register_shared(NodeKind::AwaitExpression, keyword_handler("await"));
    table.register(NodeKind::ConditionalExpression, emit_conditional_expression);
    table.register(NodeKind::NewExpression, emit_new_expression);
    table.register(NodeKind::CallExpression, emit_call_expression);

    let operator_expression: Handler = Arc::new(emit_operator_expression);
    table.register_aliases(
        &[
            NodeKind::AssignmentExpression,
            NodeKind::BinaryExpression,
            NodeKind::LogicalExpression,
            NodeKind::AssignmentPattern,
        ],
        &operator_expression,
    );

    table.register(NodeKind::MemberExpression, emit_member_expression);
    table.register(NodeKind::MetaProperty, emit_meta_property);
    table.register(NodeKind::SequenceExpression, emit_sequence_expression);
    table.register(NodeKind::DoExpression, emit_do_expression);
    table.register(NodeKind::BindExpression, emit_bind_expression);
    table.register(NodeKind::ParenthesizedExpression, emit_parenthesized_expression);
    table.register(NodeKind::Decorator, emit_decorator);

    // Statements
    table.register(NodeKind::EmptyStatement, emit_empty_statement);
    table.register(NodeKind::ExpressionStatement, emit_expression_statement);
    table.register(NodeKind::BlockStatement, emit_block_statement);
}

/// Unwrap the payload a handler expects, or report the mismatched tag.
pub(crate) fn expect_shape<'n, T>(
    handler: &'static str,
    node: &Node,
    shape: Option<&'n T>,
) -> Result<&'n T, PrintError> {
    shape.ok_or(PrintError::UnexpectedNode {
        handler,
        found: node.kind(),
    })
}

#[cfg(test)]
#[path = "../../tests/handlers.rs"]
mod tests;
