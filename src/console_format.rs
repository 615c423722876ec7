/// Console formatting module - Pure rendering concerns
///
/// This module handles the text layout of the plain report:
/// - Section headings and bulleted items
/// - Word wrapping with hanging indents
/// - Display width of Unicode text
///
/// It accepts pre-classified data from the report module and only decides
/// where characters go.
///
/// ## Output Flexibility
///
/// `ReportWriter` writes to any `std::io::Write` destination: stdout, files,
/// in-memory buffers for tests, or a discarding sink in quiet mode.
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Column width used for wrapped paragraphs
pub const WRAP_WIDTH: usize = 80;

/// Writer for plain report output
pub struct ReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReportWriter<W> {
    /// Create a new report writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write a `# TITLE` heading followed by an empty line
    pub fn write_heading(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.writer, "# {}", title)?;
        writeln!(self.writer)
    }

    /// Write a `* item` line
    pub fn write_bullet(&mut self, item: &str) -> io::Result<()> {
        writeln!(self.writer, "* {}", item)
    }

    /// Write a label and value as a bullet, omitting the value when empty
    pub fn write_labeled_bullet(&mut self, label: &str, value: &str) -> io::Result<()> {
        if value.is_empty() { self.write_bullet(label) } else { writeln!(self.writer, "* {} {}", label, value) }
    }

    /// Write a plain line
    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)
    }

    /// Write an empty line
    pub fn write_blank(&mut self) -> io::Result<()> {
        writeln!(self.writer)
    }

    /// Write a paragraph as a wrapped bullet with a two-space hanging indent
    pub fn write_wrapped_bullet(&mut self, text: &str) -> io::Result<()> {
        for line in wrap_paragraph(text, WRAP_WIDTH, "* ", "  ") {
            writeln!(self.writer, "{}", line)?;
        }
        Ok(())
    }

    /// Flush the underlying writer
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

//
// Text Formatting Utilities
//

/// Count the display width of a string, accounting for wide Unicode characters
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Greedily fill words into lines of at most `width` display columns.
///
/// `initial` prefixes the first line and `subsequent` every following line;
/// both count toward the width. Runs of whitespace collapse to one space. A
/// word that cannot fit on a line of its own (a long URL, say) is broken at
/// the column limit, starting in the room left on the current line.
pub fn wrap_paragraph(text: &str, width: usize, initial: &str, subsequent: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::from(initial);
    let mut current_width = display_width(initial);
    let subsequent_width = display_width(subsequent);
    let mut has_word = false;

    for word in text.split_whitespace() {
        let word_width = display_width(word);

        if has_word && current_width + 1 + word_width > width && subsequent_width + word_width <= width {
            lines.push(current);
            current = String::from(subsequent);
            current_width = subsequent_width;
            has_word = false;
        }

        let separator = usize::from(has_word);
        if current_width + separator + word_width <= width {
            if has_word {
                current.push(' ');
            }
            current.push_str(word);
            current_width += separator + word_width;
            has_word = true;
            continue;
        }

        // Too long for any line: split it across lines
        if has_word {
            if current_width + 1 < width {
                current.push(' ');
                current_width += 1;
            } else {
                lines.push(current);
                current = String::from(subsequent);
                current_width = subsequent_width;
                has_word = false;
            }
        }
        for ch in word.chars() {
            let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
            // At least one character per line, even when the prefix fills it
            if has_word && current_width + ch_width > width {
                lines.push(current);
                current = String::from(subsequent);
                current_width = subsequent_width;
            }
            current.push(ch);
            current_width += ch_width;
            has_word = true;
        }
    }

    if has_word || lines.is_empty() {
        lines.push(current.trim_end().to_string());
    }

    lines
}

#[cfg(test)]
#[path = "console_format_test.rs"]
mod console_format_test;
