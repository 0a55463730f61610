/// A byte cursor over one line of inline text.
///
/// All delimiters the inline grammar cares about are ASCII, so byte positions
/// reached by [`Cursor::skip_to_delimiter`] are always char boundaries.
#[derive(Clone)]
pub struct Cursor<'a> {
    s: &'a str,
    i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Current byte index into the text.
    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// The unconsumed remainder.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }

    /// Advances by `n` bytes, clamped to the end of input.
    pub fn bump_n(&mut self, n: usize) {
        self.i = (self.i + n).min(self.s.len());
    }

    /// Consumes at least one char, then everything up to the next byte in
    /// `delimiters`. Returns the consumed text.
    pub fn skip_to_delimiter(&mut self, delimiters: &[u8]) -> &'a str {
        let start = self.i;
        let first_len = self.rest().chars().next().map_or(0, char::len_utf8);
        self.i += first_len;
        let bytes = self.s.as_bytes();
        while self.i < bytes.len() && !delimiters.contains(&bytes[self.i]) {
            self.i += 1;
        }
        &self.s[start..self.i]
    }
}
