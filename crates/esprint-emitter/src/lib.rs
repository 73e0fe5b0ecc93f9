//! Expression printer for ESTree-shaped syntax trees.
//!
//! The printer turns an already-parsed `Node` into source text:
//! - `EmitContext` owns the output buffer, indentation and `FormatOptions`
//! - `DispatchTable` maps each `NodeKind` to a handler
//! - handlers render one node kind, recursing through a `PrintCallback`
//! - `Printer` is the default callback: it re-enters the dispatch table
//!
//! Parenthesization is never decided here. A tree that needs parentheses
//! carries `ParenthesizedExpression` nodes where they belong.
//!
//! ```
//! use esprint_ast::Node;
//! use esprint_emitter::{FormatOptions, print_node};
//!
//! let node = Node::unary("typeof", Node::id("x"));
//! assert_eq!(print_node(&node, FormatOptions::default()).unwrap(), "typeof x");
//! ```

pub mod context;
pub use context::EmitContext;

pub mod dispatch;
pub use dispatch::{DispatchTable, Handler};

pub mod error;
pub use error::PrintError;

pub mod handlers;

pub mod limits;

pub mod options;
pub use options::FormatOptions;

pub mod printer;
pub use printer::{ListSeparator, PrintCallback, Printer, print_node, print_node_with};

pub mod source_writer;
pub use source_writer::SourceWriter;
