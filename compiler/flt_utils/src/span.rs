/// A byte range into an input, start inclusive and end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// # Panics
    /// `start >= end`
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start < end, "{} .. {}", start, end);
        Span { start, end }
    }

    /// Span of the single byte at `i`.
    #[must_use]
    pub fn at(i: usize) -> Self {
        Span { start: i, end: i + 1 }
    }

    #[must_use]
    pub fn move_by(mut self, n: usize) -> Self {
        self.start += n;
        self.end += n;
        self
    }
}
