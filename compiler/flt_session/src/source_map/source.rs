use flt_utils::{LineCol, LineColResult};

/// A named text holding one numeral per line.
#[derive(Clone)]
pub struct Source {
    pub name: String,
    lines: LineCol,
}

impl Source {
    pub fn new(name: String, src: String) -> Self {
        Source {
            name,
            lines: LineCol::new(src),
        }
    }

    pub fn src(&self) -> &str {
        &self.lines.src
    }

    /// Lines with their byte offsets, terminators removed.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.lines.lines()
    }

    /// # Panics
    /// if i > size of source
    pub fn line_col(&self, i: usize) -> LineColResult {
        self.lines.line_col(i)
    }
}
