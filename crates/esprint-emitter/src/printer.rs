//! Recursive print callback and the default driver.

use crate::context::EmitContext;
use crate::dispatch::DispatchTable;
use crate::error::PrintError;
use crate::limits;
use crate::options::FormatOptions;
use esprint_ast::Node;

/// Separator placed between the elements of a printed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSeparator {
    /// `a, b`
    CommaSpace,
    /// `a,` then a line break before `b`
    CommaNewline,
}

impl ListSeparator {
    pub fn emit(self, ctx: &mut EmitContext) {
        match self {
            Self::CommaSpace => ctx.push(", "),
            Self::CommaNewline => {
                ctx.push(",");
                ctx.newline();
            }
        }
    }
}

/// How handlers render child nodes.
///
/// Implementations are responsible for anything that wraps a child, such as
/// parentheses; handlers only decide the tokens of their own node.
pub trait PrintCallback {
    /// Render one node.
    fn print(&mut self, ctx: &mut EmitContext, node: &Node) -> Result<(), PrintError>;

    /// Render each node, joined by `separator`.
    fn print_list(
        &mut self,
        ctx: &mut EmitContext,
        nodes: &[Node],
        separator: ListSeparator,
    ) -> Result<(), PrintError> {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                separator.emit(ctx);
            }
            self.print(ctx, node)?;
        }
        Ok(())
    }

    /// Render an optional node; an absent one emits nothing.
    fn print_optional(
        &mut self,
        ctx: &mut EmitContext,
        node: Option<&Node>,
    ) -> Result<(), PrintError> {
        match node {
            Some(node) => self.print(ctx, node),
            None => Ok(()),
        }
    }
}

/// Default callback: looks each node up in a dispatch table.
///
/// Grows the stack on demand and bails out past `max_depth` nesting levels.
#[derive(Debug)]
pub struct Printer<'t> {
    table: &'t DispatchTable,
    depth: u32,
    max_depth: u32,
}

impl<'t> Printer<'t> {
    pub const fn new(table: &'t DispatchTable) -> Self {
        Self {
            table,
            depth: 0,
            max_depth: limits::MAX_PRINT_DEPTH,
        }
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub const fn depth(&self) -> u32 {
        self.depth
    }
}

impl PrintCallback for Printer<'_> {
    fn print(&mut self, ctx: &mut EmitContext, node: &Node) -> Result<(), PrintError> {
        if self.depth >= self.max_depth {
            return Err(PrintError::DepthExceeded {
                limit: self.max_depth,
            });
        }

        let table = self.table;
        let kind = node.kind();
        let handler = table.lookup(kind)?;
        tracing::trace!(%kind, depth = self.depth, "dispatch");

        self.depth += 1;
        let result = stacker::maybe_grow(limits::STACK_RED_ZONE, limits::STACK_GROWTH, || {
            handler(ctx, node, self)
        });
        self.depth -= 1;
        result
    }
}

/// Print `node` with the default dispatch table.
///
/// On error the partial output is discarded.
pub fn print_node(node: &Node, options: FormatOptions) -> Result<String, PrintError> {
    print_node_with(DispatchTable::default_table(), node, options)
}

/// Print `node` with a caller-provided dispatch table.
pub fn print_node_with(
    table: &DispatchTable,
    node: &Node,
    options: FormatOptions,
) -> Result<String, PrintError> {
    tracing::debug!(
        kind = %node.kind(),
        compact = options.compact,
        retain_lines = options.retain_lines,
        "printing pass"
    );

    let mut ctx = EmitContext::new(options);
    let mut printer = Printer::new(table);
    if let Err(err) = printer.print(&mut ctx, node) {
        tracing::debug!(error = %err, "printing pass failed");
        return Err(err);
    }

    let output = ctx.finish();
    tracing::debug!(len = output.len(), "printing pass finished");
    Ok(output)
}

#[cfg(test)]
#[path = "../tests/printer.rs"]
mod tests;
