use serde::{Deserialize, Serialize};
use std::fmt;

/// Type tag of a syntax-tree node.
///
/// Names match the `type` strings of ESTree/Babel JSON documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeKind {
    // Leaves
    Identifier,
    Literal,
    ThisExpression,
    Super,

    // Expressions
    UnaryExpression,
    UpdateExpression,
    YieldExpression,
    AwaitExpression,
    ConditionalExpression,
    NewExpression,
    CallExpression,
    AssignmentExpression,
    BinaryExpression,
    LogicalExpression,
    AssignmentPattern,
    MemberExpression,
    MetaProperty,
    SequenceExpression,
    DoExpression,
    BindExpression,
    ParenthesizedExpression,
    Decorator,

    // Statements
    EmptyStatement,
    ExpressionStatement,
    BlockStatement,
}

impl NodeKind {
    /// Every tag, in declaration order.
    pub const ALL: [Self; 25] = [
        Self::Identifier,
        Self::Literal,
        Self::ThisExpression,
        Self::Super,
        Self::UnaryExpression,
        Self::UpdateExpression,
        Self::YieldExpression,
        Self::AwaitExpression,
        Self::ConditionalExpression,
        Self::NewExpression,
        Self::CallExpression,
        Self::AssignmentExpression,
        Self::BinaryExpression,
        Self::LogicalExpression,
        Self::AssignmentPattern,
        Self::MemberExpression,
        Self::MetaProperty,
        Self::SequenceExpression,
        Self::DoExpression,
        Self::BindExpression,
        Self::ParenthesizedExpression,
        Self::Decorator,
        Self::EmptyStatement,
        Self::ExpressionStatement,
        Self::BlockStatement,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Identifier => "Identifier",
            Self::Literal => "Literal",
            Self::ThisExpression => "ThisExpression",
            Self::Super => "Super",
            Self::UnaryExpression => "UnaryExpression",
            Self::UpdateExpression => "UpdateExpression",
            Self::YieldExpression => "YieldExpression",
            Self::AwaitExpression => "AwaitExpression",
            Self::ConditionalExpression => "ConditionalExpression",
            Self::NewExpression => "NewExpression",
            Self::CallExpression => "CallExpression",
            Self::AssignmentExpression => "AssignmentExpression",
            Self::BinaryExpression => "BinaryExpression",
            Self::LogicalExpression => "LogicalExpression",
            Self::AssignmentPattern => "AssignmentPattern",
            Self::MemberExpression => "MemberExpression",
            Self::MetaProperty => "MetaProperty",
            Self::SequenceExpression => "SequenceExpression",
            Self::DoExpression => "DoExpression",
            Self::BindExpression => "BindExpression",
            Self::ParenthesizedExpression => "ParenthesizedExpression",
            Self::Decorator => "Decorator",
            Self::EmptyStatement => "EmptyStatement",
            Self::ExpressionStatement => "ExpressionStatement",
            Self::BlockStatement => "BlockStatement",
        }
    }

    /// Whether nodes of this kind share the `{ left, operator, right }` shape.
    pub const fn is_operator_expression(self) -> bool {
        matches!(
            self,
            Self::AssignmentExpression
                | Self::BinaryExpression
                | Self::LogicalExpression
                | Self::AssignmentPattern
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
