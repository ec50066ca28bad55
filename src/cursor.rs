use crate::token::Position;

/// Opaque scan position returned by [`Cursor::mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

/// Code-point cursor over the input text.
///
/// A leading byte-order mark is not part of the text and is skipped. Tracks
/// line and column as it goes. `\n`, `\r\n` and a bare `\r` each count
/// as one line break; in `\r\n` the `\r` only advances the column.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    offset: usize,
    position: Position,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        let input = input.strip_prefix('\u{feff}').unwrap_or(input);
        Self {
            input,
            offset: 0,
            position: Position::new(),
        }
    }

    /// The code point under the cursor, `None` once the input is exhausted.
    pub fn current(&self) -> Option<char> {
        self.input[self.offset..].chars().next()
    }

    /// The code point after the current one. Never moves the cursor.
    pub fn peek(&self) -> Option<char> {
        let mut rest = self.input[self.offset..].chars();
        rest.next();
        rest.next()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Moves past the current code point and returns it. At end of input this
    /// is a no-op returning `None`.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.current()?;
        let before = self.offset;
        self.offset += ch.len_utf8();
        debug_assert!(self.offset > before, "cursor must move forward");

        let line_break = match ch {
            '\n' => true,
            '\r' => self.current() != Some('\n'),
            _ => false,
        };
        if line_break {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        Some(ch)
    }

    pub fn mark(&self) -> Mark {
        Mark(self.offset)
    }

    /// Text consumed since `mark` was taken.
    pub fn since(&self, mark: Mark) -> &'a str {
        debug_assert!(mark.0 <= self.offset, "mark is ahead of the cursor");
        &self.input[mark.0..self.offset]
    }
}
