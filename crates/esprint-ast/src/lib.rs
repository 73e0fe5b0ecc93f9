//! Syntax-tree node model for the esprint expression printer.
//!
//! This crate provides the typed input the printer consumes:
//! - `Node`: a tagged variant, one per ESTree/Babel node type
//! - `NodeKind`: the bare type tag used as a dispatch key
//! - builder helpers (`Node::id`, `Node::call`, ...) for constructing trees in
//!   code and tests
//!
//! Nodes deserialize from ESTree-shaped JSON, where the `type` field is the
//! tag and unknown fields (`start`, `end`, `loc`, ...) are ignored.

pub mod kind;
pub use kind::NodeKind;

pub mod node;
pub use node::{
    BindExpression, BlockStatement, CallExpression, ConditionalExpression, Decorator,
    DoExpression, ExpressionStatement, Identifier, Literal, LiteralValue, MemberExpression,
    MetaProperty, NewExpression, Node, OperatorExpression, ParenthesizedExpression,
    SequenceExpression, UnaryExpression, UpdateExpression, YieldLikeExpression,
};
