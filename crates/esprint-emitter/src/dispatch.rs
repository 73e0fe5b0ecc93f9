//! Node-type dispatch table.
//!
//! Maps every `NodeKind` to the handler that renders it. Handlers are
//! reference-counted so several tags can point at the same function: the
//! assignment family registers one handler under four tags, and the
//! yield/await handlers come out of one keyword factory.

use crate::context::EmitContext;
use crate::error::PrintError;
use crate::handlers;
use crate::printer::PrintCallback;
use esprint_ast::{Node, NodeKind};
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

/// Renders one node. Recurses into children through the callback.
pub type Handler = Arc<
    dyn Fn(&mut EmitContext, &Node, &mut dyn PrintCallback) -> Result<(), PrintError>
        + Send
        + Sync,
>;

static DEFAULT_TABLE: Lazy<DispatchTable> = Lazy::new(DispatchTable::new);

#[derive(Clone, Default)]
pub struct DispatchTable {
    handlers: FxHashMap<NodeKind, Handler>,
}

impl DispatchTable {
    /// Table with a handler for every `NodeKind`.
    pub fn new() -> Self {
        let mut table = Self::empty();
        handlers::register_defaults(&mut table);
        table
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Shared instance of `DispatchTable::new()`.
    pub fn default_table() -> &'static Self {
        &DEFAULT_TABLE
    }

    /// Register a handler function for one tag, returning the one it replaces.
    pub fn register<F>(&mut self, kind: NodeKind, handler: F) -> Option<Handler>
    where
        F: Fn(&mut EmitContext, &Node, &mut dyn PrintCallback) -> Result<(), PrintError>
            + Send
            + Sync
            + 'static,
    {
        self.register_shared(kind, Arc::new(handler))
    }

    /// Register an existing handler reference for one tag.
    pub fn register_shared(&mut self, kind: NodeKind, handler: Handler) -> Option<Handler> {
        self.handlers.insert(kind, handler)
    }

    /// Register one handler reference under several tags.
    pub fn register_aliases(&mut self, kinds: &[NodeKind], handler: &Handler) {
        for &kind in kinds {
            self.register_shared(kind, Arc::clone(handler));
        }
    }

    pub fn lookup(&self, kind: NodeKind) -> Result<&Handler, PrintError> {
        self.handlers
            .get(&kind)
            .ok_or(PrintError::UnsupportedNode { kind })
    }

    pub fn contains(&self, kind: NodeKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Whether two tags resolve to the same handler reference.
    pub fn shares_handler(&self, a: NodeKind, b: NodeKind) -> bool {
        match (self.handlers.get(&a), self.handlers.get(&b)) {
            (Some(left), Some(right)) => Arc::ptr_eq(left, right),
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<NodeKind> = self.handlers.keys().copied().collect();
        kinds.sort_unstable();
        f.debug_struct("DispatchTable")
            .field("kinds", &kinds)
            .finish()
    }
}

#[cfg(test)]
#[path = "../tests/dispatch.rs"]
mod tests;
