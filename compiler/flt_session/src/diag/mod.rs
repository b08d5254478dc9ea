use std::cell::{Cell, RefCell};
use std::io;

use flt_errors::Message;
use flt_utils::Span;

use crate::source_map::source::Source;

pub mod emitter;

pub struct Diagnostic<'a> {
    pub source: &'a Source,
    /// Byte range into `source`, within a single line.
    pub span: Span,
    pub msg: Message,
}

pub struct Diagnostics<E: emitter::Emitter> {
    emitter: RefCell<E>,
    errors: Cell<usize>,
}

impl<E: emitter::Emitter> Diagnostics<E> {
    pub fn new(emitter: E) -> Self {
        Self {
            emitter: RefCell::new(emitter),
            errors: Cell::new(0),
        }
    }

    /// # Errors
    /// if the emitter could not write the diagnostic
    pub fn error(&self, diagnostic: Diagnostic) -> io::Result<()> {
        self.errors.set(self.errors.get() + 1);
        self.emitter.borrow_mut().emit_error(diagnostic)
    }

    pub fn error_count(&self) -> usize {
        self.errors.get()
    }

    pub fn into_emitter(self) -> E {
        self.emitter.into_inner()
    }
}
