//! Block-structured text emission.
//!
//! The renderer never formats indentation or braces by itself. It talks to a
//! [`CodeWriter`], which offers exactly four capabilities:
//!
//! - append a literal line ([`CodeWriter::line`])
//! - conditionally insert a blank line ([`CodeWriter::blank`])
//! - open a named block and close it again, indenting the body
//!   ([`CodeWriter::start_block`] / [`CodeWriter::end_block`])
//! - iterate an ordered collection with the item index
//!   ([`CodeWriter::repeat`]), so blank-line-between-items logic can look at
//!   the index
//!
//! [`BlockWriter`] is the brace-delimited implementation used for proto3.
//!
//! # Example
//!
//! ```
//! # use protogen_core::code::{BlockWriter, CodeWriter};
//! let mut writer = BlockWriter::new();
//! writer
//!     .start_block("enum Color")
//!     .repeat(["RED", "GREEN"], |w, value, i| {
//!         w.line(format!("{value} = {i};"));
//!     })
//!     .end_block();
//!
//! assert_eq!(writer.finish(), "enum Color {\n    RED = 0;\n    GREEN = 1;\n}\n");
//! ```

/// Default number of spaces per indentation level.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Minimal interface of a block-structured text emitter.
pub trait CodeWriter {
    /// Appends one line at the current indentation.
    fn line(&mut self, text: impl AsRef<str>) -> &mut Self;

    /// Appends an empty line when `condition` holds.
    fn blank(&mut self, condition: bool) -> &mut Self;

    /// Appends `header` followed by the block opener and indents subsequent lines.
    fn start_block(&mut self, header: impl AsRef<str>) -> &mut Self;

    /// Closes the innermost open block.
    fn end_block(&mut self) -> &mut Self;

    /// Calls `emit` for every item together with its zero-based index.
    fn repeat<I, F>(&mut self, items: I, mut emit: F) -> &mut Self
    where
        I: IntoIterator,
        F: FnMut(&mut Self, I::Item, usize),
    {
        for (index, item) in items.into_iter().enumerate() {
            emit(self, item, index);
        }
        self
    }
}

/// A [`CodeWriter`] producing brace-delimited blocks.
///
/// Lines are buffered and only joined when [`BlockWriter::finish`] consumes
/// the writer. Empty lines are never indented.
#[derive(Debug, Clone)]
pub struct BlockWriter {
    lines: Vec<String>,
    depth: usize,
    indent: String,
}

impl BlockWriter {
    /// Creates a writer indenting with [`DEFAULT_INDENT_WIDTH`] spaces.
    pub fn new() -> Self {
        Self::with_indent_width(DEFAULT_INDENT_WIDTH)
    }

    /// Creates a writer indenting with `width` spaces per level.
    pub fn with_indent_width(width: usize) -> Self {
        Self {
            lines: Vec::new(),
            depth: 0,
            indent: " ".repeat(width),
        }
    }

    /// Returns the current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Consumes the writer and returns the text, one `\n` after every line.
    pub fn finish(self) -> String {
        let mut code = self.lines.join("\n");
        if !self.lines.is_empty() {
            code.push('\n');
        }
        code
    }

    fn push(&mut self, text: &str) {
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines
                .push(format!("{}{}", self.indent.repeat(self.depth), text));
        }
    }
}

impl Default for BlockWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeWriter for BlockWriter {
    fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.push(text.as_ref());
        self
    }

    fn blank(&mut self, condition: bool) -> &mut Self {
        if condition {
            self.push("");
        }
        self
    }

    fn start_block(&mut self, header: impl AsRef<str>) -> &mut Self {
        self.push(&format!("{} {{", header.as_ref()));
        self.depth += 1;
        self
    }

    fn end_block(&mut self) -> &mut Self {
        // Unbalanced closes stay at column zero.
        self.depth = self.depth.saturating_sub(1);
        self.push("}");
        self
    }
}
