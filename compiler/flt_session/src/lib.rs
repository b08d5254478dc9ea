#![allow(clippy::must_use_candidate)]

pub mod diag;
pub mod output;
pub mod source_map;

use std::io;

use dec2flt::{Literal, ParseError};
use diag::emitter::Emitter;
use diag::{Diagnostic, Diagnostics};
use flt_utils::Span;
use source_map::{loader::Loader, source::Source, SourceMap};
use tracing::{debug, trace};

/// What the numerals of a source are read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Float,
    /// `base` 0 infers the radix from the prefix.
    Integer { base: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Float(Literal),
    Integer(i64),
}

/// One successfully converted line.
#[derive(Clone, Copy)]
pub struct Conversion<'a> {
    pub source: &'a Source,
    /// 1-based.
    pub line: usize,
    /// The numeral as written, without surrounding whitespace.
    pub text: &'a str,
    pub value: Value,
}

pub struct Session<L: Loader, E: Emitter> {
    source_map: SourceMap<L>,
    diags: Diagnostics<E>,
    mode: Mode,
}

fn is_skipped(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

impl<L: Loader, E: Emitter> Session<L, E> {
    pub fn new(loader: L, emitter: E, mode: Mode) -> Self {
        Session {
            source_map: SourceMap::new(loader),
            diags: Diagnostics::new(emitter),
            mode,
        }
    }

    pub fn source_map(&self) -> &SourceMap<L> {
        &self.source_map
    }

    fn parse(&self, text: &str) -> Result<Value, ParseError> {
        match self.mode {
            Mode::Float => dec2flt::parse_number(text).map(Value::Float),
            Mode::Integer { base } => dec2flt::parse_int(text, base).map(Value::Integer),
        }
    }

    /// Converts every numeral of `src`, one per line, reporting the lines
    /// that fail to the emitter.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    ///
    /// # Errors
    /// if a diagnostic could not be written
    pub fn convert<'a>(&self, src: &'a Source) -> io::Result<Vec<Conversion<'a>>> {
        let mut out = Vec::new();
        for (n, (offset, line)) in src.lines().enumerate() {
            if is_skipped(line) {
                continue;
            }

            match self.parse(line) {
                Ok(value) => {
                    trace!(source = %src.name, line = n + 1, ?value, "converted");
                    out.push(Conversion {
                        source: src,
                        line: n + 1,
                        text: line.trim(),
                        value,
                    });
                }
                Err(err) => {
                    debug!(source = %src.name, line = n + 1, %err, "conversion failed");
                    let span = match err.span {
                        Some(span) => span.move_by(offset),
                        None => {
                            let lead = line.len() - line.trim_start().len();
                            let start = offset + lead;
                            Span::new(start, start + line.trim().len())
                        }
                    };
                    self.diags.error(Diagnostic {
                        source: src,
                        span,
                        msg: err.msg,
                    })?;
                }
            }
        }
        debug!(
            source = %src.name,
            converted = out.len(),
            errors = self.diags.error_count(),
            "source done"
        );
        Ok(out)
    }

    pub fn error_count(&self) -> usize {
        self.diags.error_count()
    }

    pub fn into_emitter(self) -> E {
        self.diags.into_emitter()
    }
}
