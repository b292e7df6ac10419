//! Output writer with indentation tracking
//!
//! Builds declaration text line by line, indenting members of `enum` and `class` bodies.

use super::profile::IndentStyle;

/// Writer that tracks indentation and builds declaration text
pub struct DeclWriter {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
    /// One level of indentation
    indent_unit: String,
    /// Whether we're at the start of a line
    at_line_start: bool,
}

impl DeclWriter {
    /// Create a new writer with the given indentation unit
    pub fn new(indent: IndentStyle) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_unit: indent.unit(),
            at_line_start: true,
        }
    }

    /// Get the written text
    pub fn finish(self) -> String {
        self.output
    }

    /// Increase indentation level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    fn write_indent(&mut self) {
        if self.at_line_start {
            for _ in 0..self.indent_level {
                self.output.push_str(&self.indent_unit);
            }
            self.at_line_start = false;
        }
    }

    /// Write a string (with auto-indent)
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.write_indent();
        self.output.push_str(s);
    }

    /// Write a string and newline
    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    /// Write just a newline
    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Write each item on its own line, separated by `separator` and terminated by `last`
    pub fn write_list<S: AsRef<str>>(&mut self, items: &[S], separator: &str, last: &str) {
        for (i, item) in items.iter().enumerate() {
            self.write(item.as_ref());
            self.write(if i + 1 < items.len() { separator } else { last });
            self.newline();
        }
    }

    #[cfg(test)]
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }
}
