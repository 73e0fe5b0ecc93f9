//! Syntax-tree nodes.
//!
//! # Architecture
//!
//! `Node` is an internally tagged enum: each variant wraps a plain struct with
//! the fields its tag carries. The four operator-shaped tags (assignment,
//! binary, logical, assignment pattern) share `OperatorExpression`, and yield
//! and await share `YieldLikeExpression`, so printers can treat them as one
//! shape.
//!
//! Nodes are immutable once built. The printer only reads them.

use crate::kind::NodeKind;
use serde::{Deserialize, Serialize};

/// A syntax-tree node, keyed by its `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    // =========================================================================
    // Leaves
    // =========================================================================
    Identifier(Identifier),
    Literal(Literal),
    ThisExpression {},
    Super {},

    // =========================================================================
    // Expressions
    // =========================================================================
    UnaryExpression(UnaryExpression),
    UpdateExpression(UpdateExpression),
    YieldExpression(YieldLikeExpression),
    AwaitExpression(YieldLikeExpression),
    ConditionalExpression(ConditionalExpression),
    NewExpression(NewExpression),
    CallExpression(CallExpression),
    AssignmentExpression(OperatorExpression),
    BinaryExpression(OperatorExpression),
    LogicalExpression(OperatorExpression),
    AssignmentPattern(OperatorExpression),
    MemberExpression(MemberExpression),
    MetaProperty(MetaProperty),
    SequenceExpression(SequenceExpression),
    DoExpression(DoExpression),
    BindExpression(BindExpression),
    ParenthesizedExpression(ParenthesizedExpression),
    Decorator(Decorator),

    // =========================================================================
    // Statements
    // =========================================================================
    EmptyStatement {},
    ExpressionStatement(ExpressionStatement),
    BlockStatement(BlockStatement),
}

/// Identifier: `foo`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
}

/// Literal value as it appears in ESTree JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    #[default]
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
}

/// Literal: `42`, `"hello"`, `true`, `null`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Literal {
    #[serde(default)]
    pub value: LiteralValue,
    /// Source text of the literal, when the producer kept it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

/// Unary expression: `!x`, `typeof x`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpression {
    pub operator: String,
    pub argument: Box<Node>,
}

/// Update expression: `++x`, `x--`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateExpression {
    pub operator: String,
    pub argument: Box<Node>,
    #[serde(default)]
    pub prefix: bool,
}

/// Yield or await expression.
///
/// `delegate` is the ESTree yield flag, `all` is the `await*` flag; either one
/// marks delegation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct YieldLikeExpression {
    #[serde(default)]
    pub argument: Option<Box<Node>>,
    #[serde(default)]
    pub delegate: bool,
    #[serde(default)]
    pub all: bool,
}

impl YieldLikeExpression {
    pub const fn is_delegating(&self) -> bool {
        self.delegate || self.all
    }
}

/// Conditional expression: `test ? consequent : alternate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalExpression {
    pub test: Box<Node>,
    pub consequent: Box<Node>,
    pub alternate: Box<Node>,
}

/// New expression: `new Callee(args)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpression {
    pub callee: Box<Node>,
    #[serde(default)]
    pub arguments: Vec<Node>,
}

/// Call expression: `callee(args)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpression {
    pub callee: Box<Node>,
    #[serde(default)]
    pub arguments: Vec<Node>,
    /// Producer hint: lay the arguments out one per line.
    #[serde(default, rename = "_prettyCall", skip_serializing_if = "std::ops::Not::not")]
    pub pretty_call: bool,
}

fn default_operator() -> String {
    "=".to_string()
}

/// `{ left, operator, right }`, shared by assignment, binary, logical and
/// assignment-pattern nodes.
///
/// A missing `operator` (assignment patterns carry none in ESTree) reads as `=`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorExpression {
    pub left: Box<Node>,
    #[serde(default = "default_operator")]
    pub operator: String,
    pub right: Box<Node>,
}

/// Member expression: `object.property` or `object[property]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberExpression {
    pub object: Box<Node>,
    pub property: Box<Node>,
    #[serde(default)]
    pub computed: bool,
}

/// Meta property: `new.target`, `import.meta`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaProperty {
    pub meta: Box<Node>,
    pub property: Box<Node>,
}

/// Sequence expression: `a, b, c`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceExpression {
    pub expressions: Vec<Node>,
}

/// Do expression: `do { ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoExpression {
    pub body: Box<Node>,
}

/// Bind expression: `object::callee` or `::callee`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindExpression {
    #[serde(default)]
    pub object: Option<Box<Node>>,
    pub callee: Box<Node>,
}

/// Parenthesized expression: `(expression)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParenthesizedExpression {
    pub expression: Box<Node>,
}

/// Decorator: `@expression`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decorator {
    pub expression: Box<Node>,
}

/// Expression statement: `expression;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionStatement {
    pub expression: Box<Node>,
}

/// Block statement: `{ body }`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BlockStatement {
    #[serde(default)]
    pub body: Vec<Node>,
}

// =========================================================================
// Tag and shape accessors
// =========================================================================

macro_rules! shape_accessor {
    ($(#[$meta:meta])* $name:ident, $variant:ident, $ty:ty) => {
        $(#[$meta])*
        pub const fn $name(&self) -> Option<&$ty> {
            match self {
                Self::$variant(data) => Some(data),
                _ => None,
            }
        }
    };
}

impl Node {
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Identifier(_) => NodeKind::Identifier,
            Self::Literal(_) => NodeKind::Literal,
            Self::ThisExpression {} => NodeKind::ThisExpression,
            Self::Super {} => NodeKind::Super,
            Self::UnaryExpression(_) => NodeKind::UnaryExpression,
            Self::UpdateExpression(_) => NodeKind::UpdateExpression,
            Self::YieldExpression(_) => NodeKind::YieldExpression,
            Self::AwaitExpression(_) => NodeKind::AwaitExpression,
            Self::ConditionalExpression(_) => NodeKind::ConditionalExpression,
            Self::NewExpression(_) => NodeKind::NewExpression,
            Self::CallExpression(_) => NodeKind::CallExpression,
            Self::AssignmentExpression(_) => NodeKind::AssignmentExpression,
            Self::BinaryExpression(_) => NodeKind::BinaryExpression,
            Self::LogicalExpression(_) => NodeKind::LogicalExpression,
            Self::AssignmentPattern(_) => NodeKind::AssignmentPattern,
            Self::MemberExpression(_) => NodeKind::MemberExpression,
            Self::MetaProperty(_) => NodeKind::MetaProperty,
            Self::SequenceExpression(_) => NodeKind::SequenceExpression,
            Self::DoExpression(_) => NodeKind::DoExpression,
            Self::BindExpression(_) => NodeKind::BindExpression,
            Self::ParenthesizedExpression(_) => NodeKind::ParenthesizedExpression,
            Self::Decorator(_) => NodeKind::Decorator,
            Self::EmptyStatement {} => NodeKind::EmptyStatement,
            Self::ExpressionStatement(_) => NodeKind::ExpressionStatement,
            Self::BlockStatement(_) => NodeKind::BlockStatement,
        }
    }

    shape_accessor!(as_identifier, Identifier, Identifier);
    shape_accessor!(as_literal, Literal, Literal);
    shape_accessor!(as_unary, UnaryExpression, UnaryExpression);
    shape_accessor!(as_update, UpdateExpression, UpdateExpression);
    shape_accessor!(as_conditional, ConditionalExpression, ConditionalExpression);
    shape_accessor!(as_new, NewExpression, NewExpression);
    shape_accessor!(as_call, CallExpression, CallExpression);
    shape_accessor!(as_member, MemberExpression, MemberExpression);
    shape_accessor!(as_meta_property, MetaProperty, MetaProperty);
    shape_accessor!(as_sequence, SequenceExpression, SequenceExpression);
    shape_accessor!(as_do, DoExpression, DoExpression);
    shape_accessor!(as_bind, BindExpression, BindExpression);
    shape_accessor!(as_parenthesized, ParenthesizedExpression, ParenthesizedExpression);
    shape_accessor!(as_decorator, Decorator, Decorator);
    shape_accessor!(as_expression_statement, ExpressionStatement, ExpressionStatement);
    shape_accessor!(as_block, BlockStatement, BlockStatement);

    /// Yield or await payload.
    pub const fn as_yield_like(&self) -> Option<&YieldLikeExpression> {
        match self {
            Self::YieldExpression(data) | Self::AwaitExpression(data) => Some(data),
            _ => None,
        }
    }

    /// `{ left, operator, right }` payload of any operator-shaped node.
    pub const fn as_operator_expression(&self) -> Option<&OperatorExpression> {
        match self {
            Self::AssignmentExpression(data)
            | Self::BinaryExpression(data)
            | Self::LogicalExpression(data)
            | Self::AssignmentPattern(data) => Some(data),
            _ => None,
        }
    }

    /// Whether this is a literal holding a numeric value.
    pub const fn is_numeric_literal(&self) -> bool {
        matches!(
            self,
            Self::Literal(Literal {
                value: LiteralValue::Number(_),
                ..
            })
        )
    }
}

// =========================================================================
// Builder helpers for tree construction
// =========================================================================

impl Node {
    /// Create an identifier node
    pub fn id(name: impl Into<String>) -> Self {
        Self::Identifier(Identifier { name: name.into() })
    }

    /// Create a numeric literal
    pub const fn number(value: f64) -> Self {
        Self::Literal(Literal {
            value: LiteralValue::Number(value),
            raw: None,
        })
    }

    /// Create a string literal
    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal(Literal {
            value: LiteralValue::String(value.into()),
            raw: None,
        })
    }

    /// Create a boolean literal
    pub const fn boolean(value: bool) -> Self {
        Self::Literal(Literal {
            value: LiteralValue::Boolean(value),
            raw: None,
        })
    }

    /// Create `null`
    pub const fn null() -> Self {
        Self::Literal(Literal {
            value: LiteralValue::Null,
            raw: None,
        })
    }

    /// Create `this`
    pub const fn this() -> Self {
        Self::ThisExpression {}
    }

    /// Create `super`
    pub const fn super_keyword() -> Self {
        Self::Super {}
    }

    /// Create a unary expression: `op argument`
    pub fn unary(operator: impl Into<String>, argument: Self) -> Self {
        Self::UnaryExpression(UnaryExpression {
            operator: operator.into(),
            argument: Box::new(argument),
        })
    }

    /// Create an update expression: `++x` when `prefix`, else `x++`
    pub fn update(operator: impl Into<String>, argument: Self, prefix: bool) -> Self {
        Self::UpdateExpression(UpdateExpression {
            operator: operator.into(),
            argument: Box::new(argument),
            prefix,
        })
    }

    /// Create a yield expression
    pub fn yield_expr(argument: Option<Self>, delegate: bool) -> Self {
        Self::YieldExpression(YieldLikeExpression {
            argument: argument.map(Box::new),
            delegate,
            all: false,
        })
    }

    /// Create an await expression
    pub fn await_expr(argument: Option<Self>, all: bool) -> Self {
        Self::AwaitExpression(YieldLikeExpression {
            argument: argument.map(Box::new),
            delegate: false,
            all,
        })
    }

    /// Create a conditional expression
    pub fn conditional(test: Self, consequent: Self, alternate: Self) -> Self {
        Self::ConditionalExpression(ConditionalExpression {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        })
    }

    /// Create a new expression: `new Callee(args)`
    pub fn new_expr(callee: Self, args: Vec<Self>) -> Self {
        Self::NewExpression(NewExpression {
            callee: Box::new(callee),
            arguments: args,
        })
    }

    /// Create a call expression
    pub fn call(callee: Self, args: Vec<Self>) -> Self {
        Self::CallExpression(CallExpression {
            callee: Box::new(callee),
            arguments: args,
            pretty_call: false,
        })
    }

    /// Create a call expression carrying the pretty-call marker
    pub fn pretty_call(callee: Self, args: Vec<Self>) -> Self {
        Self::CallExpression(CallExpression {
            callee: Box::new(callee),
            arguments: args,
            pretty_call: true,
        })
    }

    fn operator_parts(left: Self, operator: impl Into<String>, right: Self) -> OperatorExpression {
        OperatorExpression {
            left: Box::new(left),
            operator: operator.into(),
            right: Box::new(right),
        }
    }

    /// Create an assignment expression with an explicit operator (`=`, `+=`, ...)
    pub fn assign_with(left: Self, operator: impl Into<String>, right: Self) -> Self {
        Self::AssignmentExpression(Self::operator_parts(left, operator, right))
    }

    /// Create a plain assignment: `left = right`
    pub fn assign(left: Self, right: Self) -> Self {
        Self::assign_with(left, "=", right)
    }

    /// Create a binary expression
    pub fn binary(left: Self, operator: impl Into<String>, right: Self) -> Self {
        Self::BinaryExpression(Self::operator_parts(left, operator, right))
    }

    /// Create a logical expression
    pub fn logical(left: Self, operator: impl Into<String>, right: Self) -> Self {
        Self::LogicalExpression(Self::operator_parts(left, operator, right))
    }

    /// Create an assignment pattern (default value in a binding position)
    pub fn assignment_pattern(left: Self, right: Self) -> Self {
        Self::AssignmentPattern(Self::operator_parts(left, "=", right))
    }

    /// Create a member expression
    pub fn member(object: Self, property: Self, computed: bool) -> Self {
        Self::MemberExpression(MemberExpression {
            object: Box::new(object),
            property: Box::new(property),
            computed,
        })
    }

    /// Create a dotted property access: `object.name`
    pub fn prop(object: Self, name: impl Into<String>) -> Self {
        Self::member(object, Self::id(name), false)
    }

    /// Create a meta property: `meta.property`
    pub fn meta_property(meta: impl Into<String>, property: impl Into<String>) -> Self {
        Self::MetaProperty(MetaProperty {
            meta: Box::new(Self::id(meta)),
            property: Box::new(Self::id(property)),
        })
    }

    /// Create a sequence expression
    pub const fn sequence(expressions: Vec<Self>) -> Self {
        Self::SequenceExpression(SequenceExpression { expressions })
    }

    /// Create a do expression around a block
    pub fn do_expr(body: Self) -> Self {
        Self::DoExpression(DoExpression {
            body: Box::new(body),
        })
    }

    /// Create a bind expression
    pub fn bind(object: Option<Self>, callee: Self) -> Self {
        Self::BindExpression(BindExpression {
            object: object.map(Box::new),
            callee: Box::new(callee),
        })
    }

    /// Wrap in parentheses
    pub fn paren(self) -> Self {
        Self::ParenthesizedExpression(ParenthesizedExpression {
            expression: Box::new(self),
        })
    }

    /// Create a decorator
    pub fn decorator(expression: Self) -> Self {
        Self::Decorator(Decorator {
            expression: Box::new(expression),
        })
    }

    /// Create an empty statement
    pub const fn empty_stmt() -> Self {
        Self::EmptyStatement {}
    }

    /// Create an expression statement
    pub fn expr_stmt(expression: Self) -> Self {
        Self::ExpressionStatement(ExpressionStatement {
            expression: Box::new(expression),
        })
    }

    /// Create a block
    pub const fn block(body: Vec<Self>) -> Self {
        Self::BlockStatement(BlockStatement { body })
    }
}

#[cfg(test)]
#[path = "../tests/node.rs"]
mod tests;
