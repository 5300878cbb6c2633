/// Position tracker over an immutable pattern string.
///
/// Positions are byte offsets and always sit on a `char` boundary, so
/// `0 <= position <= source.len()` holds at all times.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Cursor {
            source,
            position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn rest(&self) -> &'a str {
        &self.source[self.position..]
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the next `n` characters without advancing, or `None` if fewer
    /// than `n` remain.
    pub fn peek(&self, n: usize) -> Option<&'a str> {
        let rest = self.rest();
        if n == 0 {
            return Some("");
        }
        match rest.char_indices().nth(n) {
            Some((end, _)) => Some(&rest[..end]),
            None if rest.chars().count() == n => Some(rest),
            None => None,
        }
    }

    pub fn peek_char(&self) -> Option<char> {
        self.peek(1).and_then(|s| s.chars().next())
    }

    pub fn is_at(&self, literal: &str) -> bool {
        self.rest().starts_with(literal)
    }

    /// Moves forward by `n` characters. The caller must have checked with
    /// `peek`/`is_at` that they are available.
    pub fn advance(&mut self, n: usize) {
        let rest = self.rest();
        let step = match rest.char_indices().nth(n) {
            Some((end, _)) => end,
            None => rest.len(),
        };
        debug_assert!(
            n == 0 || rest.chars().count() >= n,
            "advanced past the end of the pattern"
        );
        self.position += step;
    }
}

#[cfg(test)]
mod tests {
    use super::Cursor;

    #[test]
    fn peek_does_not_advance() {
        let c = Cursor::new("abc");
        assert_eq!(c.peek(1), Some("a"));
        assert_eq!(c.peek(3), Some("abc"));
        assert_eq!(c.peek(4), None);
        assert_eq!(c.position(), 0);
    }

    #[test]
    fn is_at_is_false_out_of_bounds() {
        let mut c = Cursor::new("ab");
        assert!(c.is_at("ab"));
        assert!(!c.is_at("abc"));
        c.advance(2);
        assert!(c.is_exhausted());
        assert!(!c.is_at(")"));
        assert_eq!(c.peek_char(), None);
    }

    #[test]
    fn advances_by_chars_not_bytes() {
        let mut c = Cursor::new("éx€y");
        assert_eq!(c.peek(2), Some("éx"));
        c.advance(2);
        assert_eq!(c.position(), 3);
        assert_eq!(c.peek_char(), Some('€'));
        c.advance(1);
        assert_eq!(c.rest(), "y");
    }
}
