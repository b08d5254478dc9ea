use std::io::{self, Write};

use unicode_segmentation::UnicodeSegmentation;

use super::Diagnostic;

pub trait Emitter {
    /// # Errors
    /// if writing the diagnostic failed
    fn emit_error(&mut self, error: Diagnostic) -> io::Result<()>;
}

/// Renders `name:line:col: error: msg`, followed by the offending line and
/// a caret under the offending bytes.
#[allow(clippy::module_name_repetitions)]
pub struct DefaultEmitter<W: Write> {
    pub stream: W,
    pub color: bool,
}

impl<W: Write> DefaultEmitter<W> {
    fn paint(&self, code: &'static str) -> &'static str {
        if self.color {
            code
        } else {
            ""
        }
    }
}

const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[91m";
const RESET: &str = "\x1b[0m";

impl<W: Write> Emitter for DefaultEmitter<W> {
    fn emit_error(&mut self, error: Diagnostic) -> io::Result<()> {
        let src = error.source;
        let start_pos = error.span.start;
        let end_pos = error.span.end;

        assert!(
            start_pos < end_pos,
            "{} - {} / {}",
            start_pos,
            end_pos,
            error.msg
        );

        let pos = src.line_col(start_pos);
        let text = src.src();
        let line = text[pos.start_of_line..pos.end_of_line].trim_end();

        // keep tabs so the caret lines up
        let spaces = text[pos.start_of_line..start_pos]
            .graphemes(true)
            .map(|g| if g == "\t" { '\t' } else { ' ' })
            .collect::<String>();
        let width = text[start_pos..end_pos.min(pos.end_of_line)]
            .graphemes(true)
            .count();

        let (bold, red, reset) = (self.paint(BOLD), self.paint(RED), self.paint(RESET));
        writeln!(
            self.stream,
            "{}{}:{}:{}: {}error:{} {}",
            bold, src.name, pos.line, pos.col, red, reset, error.msg
        )?;
        writeln!(self.stream, "{}", line)?;
        writeln!(
            self.stream,
            "{}{}{}{}{}",
            spaces,
            red,
            bold,
            "^".repeat(width.max(1)),
            reset
        )
    }
}
