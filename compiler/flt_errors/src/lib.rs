use flt_utils::Span;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    #[error("cannot parse a number from an empty string")]
    EmptyInput,
    #[error("malformed numeral")]
    MalformedNumeral,
    #[error("number too large to fit in 64 bits")]
    Overflow,
    #[error("invalid digit")]
    InvalidDigitCharacter,
    #[error("radix must be 0 or between 2 and 36")]
    InvalidRadix,
}

/// A failed conversion, located in the input it was raised for.
///
/// Produced by the lower layers without allocating; the entry points turn
/// it into a [`ParseError`] once the original input is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fault {
    pub msg: Message,
    pub span: Option<Span>,
}

impl Fault {
    pub fn new(msg: Message, span: Span) -> Self {
        Fault {
            msg,
            span: Some(span),
        }
    }

    pub fn bare(msg: Message) -> Self {
        Fault { msg, span: None }
    }

    #[must_use]
    pub fn move_by(self, n: usize) -> Self {
        Fault {
            span: self.span.map(|s| s.move_by(n)),
            ..self
        }
    }

    pub fn into_error(self, input: &str) -> ParseError {
        ParseError {
            msg: self.msg,
            input: input.to_owned(),
            span: self.span,
        }
    }
}

/// Error returned by every public parsing entry point.
///
/// The message always carries the original input verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{msg}: {input:?}")]
pub struct ParseError {
    pub msg: Message,
    pub input: String,
    /// Offending bytes of `input`, when a single location is to blame.
    pub span: Option<Span>,
}

impl ParseError {
    pub fn offending(&self) -> Option<&str> {
        self.span.and_then(|s| self.input.get(s.start..s.end))
    }
}

#[cfg(test)]
mod tests {
    use super::{Fault, Message};
    use flt_utils::Span;

    #[test]
    fn display_names_input() {
        let err = Fault::new(Message::MalformedNumeral, Span::at(3))
            .move_by(1)
            .into_error("-1.2.3");
        assert_eq!(err.to_string(), "malformed numeral: \"-1.2.3\"");
        assert_eq!(err.offending(), Some("."));
    }

    #[test]
    fn bare_fault_has_no_span() {
        let err = Fault::bare(Message::EmptyInput).move_by(4).into_error("");
        assert_eq!(err.span, None);
        assert_eq!(err.offending(), None);
    }
}
