//! Line-oriented text emission with placeholder substitution.
//!
//! [`CodeWriter`] is the only component that touches the output sink. It
//! knows nothing about the language it writes: it substitutes `@N`
//! placeholders, tracks brace depth from line endings, and indents with tabs.
//!
//! ## Indentation Rules
//!
//! - A line whose trimmed text is exactly `}` closes a level *before* it is
//!   written.
//! - A line whose trimmed text ends with `{` opens a level *after* it is
//!   written.
//! - Empty lines are never indented.
//!
//! ## Examples
//!
//! ```
//! use fluent_gen::writer::CodeWriter;
//!
//! let mut writer = CodeWriter::new(Vec::new());
//! writer
//!     .emit_line("class @0 {", &[&"Demo"])
//!     .and_then(|w| w.emit_line("int @0 = @1;", &[&"x", &42]))
//!     .and_then(|w| w.line("}"))
//!     .unwrap();
//!
//! let text = String::from_utf8(writer.finish().unwrap()).unwrap();
//! assert_eq!(text, "class Demo {\n\tint x = 42;\n}\n");
//! ```

use std::fmt::Display;
use std::io::{self, Write};

const INDENT: &[u8] = b"\t";

/// Replaces each `@N` in `template` with `args[N]`.
///
/// Digits after `@` are read greedily, so `@10` is argument ten. An `@` with
/// no digits, or with an index past the end of `args`, is copied through
/// unchanged. Substituted text is never rescanned.
///
/// ## Examples
///
/// ```
/// use fluent_gen::writer::substitute;
///
/// assert_eq!(substitute("@0 + @1", &[&1, &"two"]), "1 + two");
/// assert_eq!(substitute("user@host @5", &[&"x"]), "user@host @5");
/// ```
pub fn substitute(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(at) = rest.find('@') {
        out.push_str(&rest[..at]);
        let after = &rest[at + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        let arg = after[..digits]
            .parse::<usize>()
            .ok()
            .and_then(|index| args.get(index));

        match arg {
            Some(arg) => {
                out.push_str(&arg.to_string());
                rest = &after[digits..];
            }
            None => {
                out.push('@');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Writes templated, auto-indented lines to a sink.
///
/// Every method returns `&mut Self` on success so calls chain with `?`.
/// I/O errors from the sink are returned unchanged. Call [`finish`] to flush
/// and recover the sink.
///
/// [`finish`]: CodeWriter::finish
#[derive(Debug)]
pub struct CodeWriter<W: Write> {
    out: W,
    depth: usize,
    lines: usize,
    bytes: u64,
}

impl<W: Write> CodeWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            depth: 0,
            lines: 0,
            bytes: 0,
        }
    }

    /// Substitutes `args` into `template` and writes it as one indented line.
    pub fn emit_line(&mut self, template: &str, args: &[&dyn Display]) -> io::Result<&mut Self> {
        let line = substitute(template, args);
        let trimmed = line.trim();

        if trimmed == "}" {
            self.depth = self.depth.saturating_sub(1);
        }

        if !trimmed.is_empty() {
            for _ in 0..self.depth {
                self.out.write_all(INDENT)?;
            }
            self.bytes += (INDENT.len() * self.depth) as u64;
        }
        self.out.write_all(line.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.bytes += line.len() as u64 + 1;
        self.lines += 1;

        if trimmed.ends_with('{') {
            self.depth += 1;
        }

        Ok(self)
    }

    /// Writes a line with no arguments.
    pub fn line(&mut self, text: &str) -> io::Result<&mut Self> {
        self.emit_line(text, &[])
    }

    pub fn blank_line(&mut self) -> io::Result<&mut Self> {
        self.emit_line("", &[])
    }

    /// Current brace nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn lines_written(&self) -> usize {
        self.lines
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes
    }

    /// Flushes all buffered output and returns the sink.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
