//! Structural pretty-printing of message values, the debugging side-channel
//! of the codec.

use alloc::string::String;
use core::fmt::{Display, Write};

/// Indented line-oriented sink for [`Pretty`] implementations.
///
/// Nesting indents by two spaces per level.
#[derive(Debug, Default)]
pub struct Printer {
    out: String,
    depth: usize,
}

impl Printer {
    /// Create an empty printer at depth zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit one `name: value` line at the current indent.
    pub fn field<V: Display>(&mut self, name: &str, value: V) {
        self.pad();
        let _ = writeln!(self.out, "{name}: {value}");
    }

    /// Open a nested block: a `name {` line, then one more level of indent.
    pub fn open(&mut self, name: &str) {
        self.pad();
        let _ = writeln!(self.out, "{name} {{");
        self.depth += 1;
    }

    /// Close the innermost block with a `}` line at the opening indent.
    pub fn close(&mut self) {
        self.depth -= 1;
        self.pad();
        self.out.push_str("}\n");
    }

    /// The accumulated text.
    pub fn finish(self) -> String {
        self.out
    }

    fn pad(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
    }
}

/// Field-level rendering: the line(s) of one value labelled with its field
/// name. Array elements repeat the field name, one rendering per element.
pub trait Pretty {
    /// Append the rendering of `self` labelled `name` to the printer.
    fn pretty(&self, name: &str, out: &mut Printer);
}

/// Message-level rendering. Implemented by generated message types; the
/// derive emits [`print_fields`](Self::print_fields) walking the fields in
/// declaration order.
pub trait Print {
    /// Append every field of the message at the current indent.
    fn print_fields(&self, out: &mut Printer);

    /// Render the message as indented text, without enclosing braces.
    fn print(&self) -> String {
        let mut out = Printer::new();
        self.print_fields(&mut out);
        out.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_and_blocks_indent_by_two_spaces() {
        let mut out = Printer::new();
        out.field("a", 1);
        out.open("b");
        out.field("c", -2);
        out.open("d");
        out.field("e", 3);
        out.close();
        out.close();
        out.field("f", 4);

        assert_eq!(
            out.finish(),
            "a: 1\nb {\n  c: -2\n  d {\n    e: 3\n  }\n}\nf: 4\n"
        );
    }

    #[test]
    fn scalar_pretty_repeats_field_name() {
        use crate::Pretty as _;

        let mut out = Printer::new();
        7u8.pretty("x", &mut out);
        (-1i64).pretty("x", &mut out);
        assert_eq!(out.finish(), "x: 7\nx: -1\n");
    }
}
