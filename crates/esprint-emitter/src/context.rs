use crate::options::FormatOptions;
use crate::source_writer::SourceWriter;

/// Emitter state for one printing pass.
///
/// Handlers receive it by `&mut` and use the primitives below; nothing else
/// writes to the buffer. A context is not shared between passes.
#[derive(Debug)]
pub struct EmitContext {
    writer: SourceWriter,
    options: FormatOptions,
}

impl EmitContext {
    pub fn new(options: FormatOptions) -> Self {
        Self {
            writer: SourceWriter::new(options.indent.clone(), options.compact),
            options,
        }
    }

    // =========================================================================
    // Output primitives (delegate to SourceWriter)
    // =========================================================================

    /// Append literal text.
    pub fn push(&mut self, text: &str) {
        self.writer.write(text);
    }

    /// Append exactly one space.
    pub fn space(&mut self) {
        self.writer.write_space();
    }

    /// Append a line break; the next write starts at the current indentation.
    pub fn newline(&mut self) {
        self.writer.write_line();
    }

    pub fn indent(&mut self) {
        self.writer.increase_indent();
    }

    pub fn dedent(&mut self) {
        self.writer.decrease_indent();
    }

    /// Append a statement terminator.
    pub fn semicolon(&mut self) {
        self.writer.write_char(';');
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    pub const fn options(&self) -> &FormatOptions {
        &self.options
    }

    pub const fn compact(&self) -> bool {
        self.options.compact
    }

    pub const fn retain_lines(&self) -> bool {
        self.options.retain_lines
    }

    pub const fn indent_level(&self) -> u32 {
        self.writer.indent_level()
    }

    /// Text written so far.
    pub fn output(&self) -> &str {
        self.writer.as_str()
    }

    pub fn finish(self) -> String {
        self.writer.finish()
    }
}

impl Default for EmitContext {
    fn default() -> Self {
        Self::new(FormatOptions::default())
    }
}
