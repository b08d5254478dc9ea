pub mod span;

use unicode_segmentation::UnicodeSegmentation;

pub use span::Span;

/// Byte offset to line/column lookup over an owned source text.
#[derive(Clone)]
pub struct LineCol {
    pub src: String,

    // byte offset of the first character of every line
    line_pos: Vec<usize>,
}

impl LineCol {
    pub fn new(src: String) -> Self {
        let mut line_pos: Vec<usize> = vec![0];
        for (i, c) in src.char_indices() {
            if c == '\n' {
                line_pos.push(i + 1);
            }
        }

        LineCol { src, line_pos }
    }

    pub fn line_count(&self) -> usize {
        self.line_pos.len()
    }

    /// Returns the 0-based `n`th line with its byte offset, without the
    /// line terminator.
    pub fn line(&self, n: usize) -> Option<(usize, &str)> {
        let start = *self.line_pos.get(n)?;
        let end = self.line_pos.get(n + 1).map_or(self.src.len(), |&e| e - 1);
        let line = &self.src[start..end];
        Some((start, line.strip_suffix('\r').unwrap_or(line)))
    }

    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        (0..self.line_count()).filter_map(move |n| self.line(n))
    }

    /// # Panics
    /// if i > size of source
    pub fn line_col(&self, i: usize) -> LineColResult {
        assert!(i <= self.src.len());

        // index of the last line starting at or before `i`
        let lo = self.line_pos.partition_point(|&p| p <= i) - 1;
        let start_of_line = self.line_pos[lo];
        let end_of_line = self
            .line_pos
            .get(lo + 1)
            .map_or(self.src.len(), |&next| next - 1);

        // numerals may sit next to arbitrary text, count what a terminal shows
        let col = UnicodeSegmentation::graphemes(&self.src[start_of_line..i], true).count();
        LineColResult {
            line: lo + 1,
            col: col + 1,
            start_of_line,
            end_of_line,
        }
    }
}

pub struct LineColResult {
    pub line: usize,
    pub col: usize,
    pub start_of_line: usize,
    pub end_of_line: usize,
}

#[cfg(test)]
mod tests {
    use super::LineCol;

    #[test]
    fn line_col() {
        let lc = LineCol::new("1.5\n2e3\r\nnan".to_owned());
        assert_eq!(lc.line_count(), 3);

        let r = lc.line_col(5);
        assert_eq!((r.line, r.col), (2, 2));
        assert_eq!(&lc.src[r.start_of_line..r.end_of_line], "2e3\r");

        let r = lc.line_col(0);
        assert_eq!((r.line, r.col), (1, 1));

        let r = lc.line_col(lc.src.len());
        assert_eq!((r.line, r.col), (3, 4));
    }

    #[test]
    fn lines_strip_terminators() {
        let lc = LineCol::new("1.5\n2e3\r\n".to_owned());
        let lines: Vec<_> = lc.lines().collect();
        assert_eq!(lines, vec![(0, "1.5"), (4, "2e3"), (9, "")]);
    }

    #[test]
    fn graphemes_count_as_one_column() {
        let lc = LineCol::new("1\u{0065}\u{0301}5".to_owned());
        let r = lc.line_col(lc.src.len() - 1);
        assert_eq!(r.col, 3);
    }
}
