//! Recursion limits for the printer.
//!
//! Printing recurses once per tree level. The driver grows the stack on demand
//! (`stacker`) and refuses trees nested deeper than `MAX_PRINT_DEPTH`.

/// Maximum node nesting the default driver will print.
///
/// ```javascript
/// // Deeply nested unary / call / member chains:
/// !!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!x;
/// f(f(f(f(f(f(f(f(f(f(f(f(/* ... */))))))))))));
/// a.b.c.d.e.f.g.h.i.j.k.l.m.n /* ... thousands of levels ... */;
/// ```
pub const MAX_PRINT_DEPTH: u32 = 10_000;

/// Remaining stack below which the driver switches to a fresh segment.
pub const STACK_RED_ZONE: usize = 64 * 1024;

/// Size of each stack segment allocated when the red zone is hit.
pub const STACK_GROWTH: usize = 1024 * 1024;
