use super::*;

#[test]
fn test_write_and_space() {
    let mut writer = SourceWriter::new("  ", false);
    writer.write("a");
    writer.write_space();
    writer.write("b");
    assert_eq!(writer.as_str(), "a b");
    assert_eq!(writer.len(), 3);
}

#[test]
fn test_indentation_is_written_lazily() {
    let mut writer = SourceWriter::new("  ", false);
    writer.write("{");
    writer.write_line();
    writer.increase_indent();
    writer.write("x");
    writer.write_line();
    writer.decrease_indent();
    writer.write("}");
    assert_eq!(writer.finish(), "{\n  x\n}");
}

#[test]
fn test_blank_lines_carry_no_trailing_whitespace() {
    let mut writer = SourceWriter::new("    ", false);
    writer.increase_indent();
    writer.write_line();
    writer.write_line();
    writer.write("x");
    assert_eq!(writer.finish(), "\n\n    x");
}

#[test]
fn test_compact_drops_newlines_and_indent() {
    let mut writer = SourceWriter::new("  ", true);
    writer.write("f(");
    writer.write_line();
    writer.increase_indent();
    writer.write("a");
    writer.write_line();
    writer.decrease_indent();
    writer.write(")");
    assert_eq!(writer.finish(), "f(a)");
}

#[test]
fn test_empty_write_does_not_consume_indent() {
    let mut writer = SourceWriter::new("\t", false);
    writer.increase_indent();
    writer.write_line();
    writer.write("");
    writer.write_char('x');
    assert_eq!(writer.finish(), "\n\tx");
}

#[test]
fn test_indent_level_tracking() {
    let mut writer = SourceWriter::new("  ", false);
    assert_eq!(writer.indent_level(), 0);
    writer.increase_indent();
    writer.increase_indent();
    assert_eq!(writer.indent_level(), 2);
    writer.decrease_indent();
    assert_eq!(writer.indent_level(), 1);
    assert!(writer.is_empty());
}
