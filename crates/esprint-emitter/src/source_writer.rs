//! Append-only text sink with lazy indentation.
//!
//! A line break only records that the next write starts a line; the
//! indentation prefix is emitted together with that write. This keeps
//! trailing whitespace out of the output and lets `decrease_indent` placed
//! after a `write_line` affect the closing token on the next line.

#[derive(Debug, Clone)]
pub struct SourceWriter {
    output: String,
    indent_level: u32,
    indent_unit: String,
    at_line_start: bool,
    compact: bool,
}

impl SourceWriter {
    pub fn new(indent_unit: impl Into<String>, compact: bool) -> Self {
        Self {
            output: String::with_capacity(256),
            indent_level: 0,
            indent_unit: indent_unit.into(),
            at_line_start: false,
            compact,
        }
    }

    /// Write text to output, prefixed by indentation when it opens a line.
    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.at_line_start {
            self.write_indent();
            self.at_line_start = false;
        }
        self.output.push_str(text);
    }

    /// Write a single character.
    pub fn write_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.write(ch.encode_utf8(&mut buf));
    }

    /// Write a space.
    pub fn write_space(&mut self) {
        self.write_char(' ');
    }

    /// Write a newline. Compact output has none.
    pub fn write_line(&mut self) {
        if self.compact {
            return;
        }
        self.output.push('\n');
        self.at_line_start = true;
    }

    fn write_indent(&mut self) {
        if self.compact {
            return;
        }
        for _ in 0..self.indent_level {
            self.output.push_str(&self.indent_unit);
        }
    }

    pub fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn decrease_indent(&mut self) {
        debug_assert!(self.indent_level > 0, "unbalanced decrease_indent");
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub const fn indent_level(&self) -> u32 {
        self.indent_level
    }

    pub fn len(&self) -> usize {
        self.output.len()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn finish(self) -> String {
        self.output
    }
}

#[cfg(test)]
#[path = "../tests/source_writer.rs"]
mod tests;
