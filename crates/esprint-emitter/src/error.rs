use esprint_ast::NodeKind;
use thiserror::Error;

/// Fatal printing errors. Any of them aborts the pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrintError {
    /// A dotted member access whose property is itself a member expression.
    /// The producer should have marked the access as computed.
    #[error("got a MemberExpression for MemberExpression property")]
    MemberExpressionProperty,

    #[error("no handler registered for node type `{kind}`")]
    UnsupportedNode { kind: NodeKind },

    #[error("{handler} handler invoked with a `{found}` node")]
    UnexpectedNode {
        handler: &'static str,
        found: NodeKind,
    },

    #[error("expression nesting exceeds the limit of {limit} levels")]
    DepthExceeded { limit: u32 },
}
