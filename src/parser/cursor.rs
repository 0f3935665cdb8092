//! Backtrackable input cursor
//!
//! A character scanner over one immutable chunk. In addition to plain
//! iteration it supports saving positions ("waypoints") and rewinding to
//! them, which is what lets the escape scanner speculatively consume a
//! sequence and give the bytes back when it turns out not to be one.

/// The chunk ended before the current construct did.
///
/// Exhaustion is a signal rather than a definite failure: whether it means
/// "wait for more input" or "malformed" is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("input exhausted")]
pub struct Exhausted;

/// Character scanner over one immutable string chunk.
///
/// Slices handed out by [`take`](Cursor::take),
/// [`take_while_greedy`](Cursor::take_while_greedy) and
/// [`rest`](Cursor::rest) borrow the underlying buffer, not the cursor, so
/// they stay valid while scanning continues.
#[derive(Debug)]
pub struct Cursor<'a> {
    buf: &'a str,
    /// Byte offset of the next unread character
    pos: usize,
    /// Byte offset of the most recently returned character
    last: usize,
    waypoints: Vec<usize>,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `buf`
    pub fn new(buf: &'a str) -> Self {
        Self {
            buf,
            pos: 0,
            last: 0,
            waypoints: Vec::new(),
        }
    }

    /// Consume and return the next character
    pub fn next_char(&mut self) -> Result<char, Exhausted> {
        match self.buf[self.pos..].chars().next() {
            Some(ch) => {
                self.last = self.pos;
                self.pos += ch.len_utf8();
                Ok(ch)
            }
            None => Err(Exhausted),
        }
    }

    /// Whether no characters remain
    pub fn is_empty(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Byte offset of the next unread character
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Unconsumed remainder of the buffer
    pub fn rest(&self) -> &'a str {
        &self.buf[self.pos..]
    }

    /// Save the position of the most recently returned character.
    ///
    /// After a later [`backtrack`](Cursor::backtrack), that same character
    /// is the next one returned, so a caller can inspect a character, save,
    /// scan ahead, and restore without losing it.
    pub fn waypoint(&mut self) {
        self.waypoints.push(self.last);
    }

    /// Rewind to the most recently saved waypoint, removing it
    pub fn backtrack(&mut self) {
        debug_assert!(!self.waypoints.is_empty(), "backtrack without waypoint");
        if let Some(pos) = self.waypoints.pop() {
            self.pos = pos;
            self.last = pos;
        }
    }

    /// Drop the most recently saved waypoint without moving
    pub fn commit(&mut self) {
        debug_assert!(!self.waypoints.is_empty(), "commit without waypoint");
        self.waypoints.pop();
    }

    /// Consume exactly `n` characters and return them as one slice
    pub fn take(&mut self, n: usize) -> Result<&'a str, Exhausted> {
        let start = self.pos;
        for _ in 0..n {
            self.next_char()?;
        }
        Ok(&self.buf[start..self.pos])
    }

    /// Consume characters while `pred` holds and return them as one slice.
    ///
    /// The predicate must fail on some character before the input runs out;
    /// otherwise the whole call fails with [`Exhausted`]. The terminating
    /// character is not part of the slice and stays unread, so it is the
    /// next character returned.
    pub fn take_while_greedy<F>(&mut self, mut pred: F) -> Result<&'a str, Exhausted>
    where
        F: FnMut(char) -> bool,
    {
        let start = self.pos;
        loop {
            let ch = self.next_char()?;
            if !pred(ch) {
                self.pos = self.last;
                return Ok(&self.buf[start..self.pos]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_STRING: &str = "foo;bar";

    #[test]
    fn test_lossless() {
        let mut cursor = Cursor::new(TEST_STRING);
        let mut collected = String::new();

        while let Ok(ch) = cursor.next_char() {
            collected.push(ch);
        }

        assert_eq!(collected, TEST_STRING);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_offsets() {
        let mut cursor = Cursor::new(TEST_STRING);
        assert_eq!(cursor.offset(), 0);

        loop {
            let at = cursor.offset();
            let ch = cursor.next_char().unwrap();
            assert_eq!(TEST_STRING[at..].chars().next(), Some(ch));

            if ch == ';' {
                break;
            }
        }

        // ';' sits at byte 3, so the next unread character is at 4
        assert_eq!(cursor.offset(), 4);
        assert_eq!(cursor.rest(), "bar");
    }

    #[test]
    fn test_backtracking() {
        let mut cursor = Cursor::new(TEST_STRING);
        let mut semicolon_at = None;

        loop {
            let at = cursor.offset();
            match cursor.next_char() {
                Ok(';') => {
                    cursor.waypoint();
                    semicolon_at = Some(at);
                }
                Ok(_) => {}
                Err(Exhausted) => break,
            }
        }

        assert_eq!(semicolon_at, TEST_STRING.find(';'));
        assert!(cursor.is_empty());
        assert_eq!(cursor.next_char(), Err(Exhausted));

        cursor.backtrack();

        // the waypointed character is returned again
        assert_eq!(cursor.next_char(), Ok(';'));
        assert_eq!(cursor.rest(), "bar");
    }

    #[test]
    fn test_nested_waypoints() {
        let mut cursor = Cursor::new(TEST_STRING);

        cursor.next_char().unwrap(); // 'f'
        cursor.waypoint();
        cursor.next_char().unwrap(); // 'o'
        cursor.next_char().unwrap(); // 'o'
        cursor.waypoint();
        cursor.next_char().unwrap(); // ';'

        cursor.backtrack();
        assert_eq!(cursor.next_char(), Ok('o'));

        cursor.backtrack();
        assert_eq!(cursor.next_char(), Ok('f'));
    }

    #[test]
    fn test_commit_discards_waypoint() {
        let mut cursor = Cursor::new(TEST_STRING);

        cursor.next_char().unwrap(); // 'f'
        cursor.waypoint();
        cursor.next_char().unwrap(); // 'o'
        cursor.waypoint();
        cursor.next_char().unwrap(); // 'o'
        cursor.commit();

        // the committed inner waypoint is gone; backtrack reaches the outer one
        cursor.backtrack();
        assert_eq!(cursor.next_char(), Ok('f'));
    }

    #[test]
    fn test_take_while_greedy() {
        let mut cursor = Cursor::new(TEST_STRING);

        let taken = cursor.take_while_greedy(|c| c != ';').unwrap();

        assert_eq!(taken, "foo");
        // the terminator was not consumed
        assert_eq!(cursor.next_char(), Ok(';'));
        assert_eq!(cursor.rest(), "bar");
    }

    #[test]
    fn test_take_while_greedy_needs_terminator() {
        let mut cursor = Cursor::new("foo");
        assert_eq!(cursor.take_while_greedy(|c| c != ';'), Err(Exhausted));
    }

    #[test]
    fn test_take_while_greedy_empty_match() {
        let mut cursor = Cursor::new(TEST_STRING);
        let taken = cursor.take_while_greedy(|c| c.is_ascii_digit()).unwrap();

        assert_eq!(taken, "");
        assert_eq!(cursor.next_char(), Ok('f'));
    }

    #[test]
    fn test_empty() {
        let mut cursor = Cursor::new(TEST_STRING);
        assert!(!cursor.is_empty());

        while cursor.next_char().is_ok() {}

        assert!(cursor.is_empty());
        assert_eq!(cursor.next_char(), Err(Exhausted));
        assert_eq!(cursor.rest(), "");
    }

    #[test]
    fn test_take() {
        let mut cursor = Cursor::new(TEST_STRING);

        let taken = cursor.take(3).unwrap();
        assert_eq!(taken, &TEST_STRING[..3]);

        // take does not consume the following character
        assert_eq!(cursor.next_char(), Ok(';'));
    }

    #[test]
    fn test_take_past_end() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.take(3), Err(Exhausted));
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_multibyte() {
        let mut cursor = Cursor::new("aä☃;x");

        assert_eq!(cursor.next_char(), Ok('a'));
        assert_eq!(cursor.offset(), 1);
        assert_eq!(cursor.next_char(), Ok('ä'));
        assert_eq!(cursor.offset(), 3);
        cursor.waypoint();
        assert_eq!(cursor.next_char(), Ok('☃'));
        assert_eq!(cursor.offset(), 6);

        cursor.backtrack();
        assert_eq!(cursor.next_char(), Ok('ä'));

        let taken = cursor.take_while_greedy(|c| c != ';').unwrap();
        assert_eq!(taken, "☃");
        assert_eq!(cursor.next_char(), Ok(';'));
        assert_eq!(cursor.rest(), "x");
    }
}
