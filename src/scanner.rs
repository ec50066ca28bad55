use crate::cursor::{Cursor, Mark};
use crate::error::{Construct, ScanFault};
use crate::token::{Position, Token, TokenKind};
use std::iter::FusedIterator;

/// Prefixes that make an uppercase run a scene heading.
pub const SCENE_HEADING_PREFIXES: [&str; 2] = ["EXT.", "INT."];
/// A leading period forces a scene heading when followed by anything.
pub const FORCED_HEADING_PREFIX: char = '.';
pub const TRANSITION_SUFFIX: &str = "TO:";
pub const CENTER_OPEN: char = '>';
pub const CENTER_CLOSE: char = '<';

#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Skip tabs found where a token would start.
    pub skip_tabs: bool,
    /// Emit a synthetic closing marker for every boneyard or note still open
    /// at end of input.
    pub close_unterminated: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            skip_tabs: true,
            close_unterminated: true,
        }
    }
}

/// True when no letter in `s` is lowercase. Runs without letters count.
pub fn is_all_uppercase(s: &str) -> bool {
    s.chars().all(|c| !c.is_alphabetic() || c.is_uppercase())
}

/// Classifies a text run by its content alone.
pub fn classify_run(run: &str) -> TokenKind {
    if !is_all_uppercase(run) {
        return TokenKind::Text;
    }

    let forced_heading = run.starts_with(FORCED_HEADING_PREFIX) && run.chars().count() > 1;
    if forced_heading || SCENE_HEADING_PREFIXES.iter().any(|p| run.starts_with(p)) {
        return TokenKind::Slugline;
    }

    if run.starts_with(CENTER_OPEN) {
        if run.ends_with(CENTER_CLOSE) {
            return TokenKind::CenteredText;
        }
        return TokenKind::Transition;
    }

    if run.ends_with(TRANSITION_SUFFIX) {
        return TokenKind::Transition;
    }

    TokenKind::Dialogue
}

/// Single-pass scanner turning screenplay text into tokens.
///
/// [`Scanner::next_token`] keeps returning `end_of_file` once the input is
/// exhausted. The [`Iterator`] impl yields the same stream but stops before
/// `end_of_file`.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    options: ScanOptions,
    open: Vec<(Construct, Position)>,
    faults: Vec<ScanFault>,
    drained: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ScanOptions::default())
    }

    pub fn with_options(input: &'a str, options: ScanOptions) -> Self {
        Self {
            cursor: Cursor::new(input),
            options,
            open: Vec::new(),
            faults: Vec::new(),
            drained: false,
        }
    }

    pub fn faults(&self) -> &[ScanFault] {
        &self.faults
    }

    pub fn into_faults(self) -> Vec<ScanFault> {
        self.faults
    }

    pub fn next_token(&mut self) -> Token<'a> {
        loop {
            let start = self.cursor.position();
            let mark = self.cursor.mark();

            let Some(ch) = self.cursor.current() else {
                return self.end_of_input(start);
            };

            match ch {
                '\n' | '\r' => {
                    self.cursor.advance();
                }
                '\t' if self.options.skip_tabs => {
                    self.cursor.advance();
                }
                '_' => return self.single(TokenKind::Underscore, start),
                '~' => return self.single(TokenKind::Tilde, start),
                '(' => return self.single(TokenKind::ParenOpen, start),
                ')' => return self.single(TokenKind::ParenClose, start),
                '=' => return self.single(TokenKind::Equals, start),
                '*' if self.cursor.peek() == Some('/') => {
                    self.close(Construct::Boneyard);
                    return self.double(TokenKind::BoneyardClose, start);
                }
                '*' => return self.single(TokenKind::Asterisk, start),
                '/' if self.cursor.peek() == Some('*') => {
                    self.open.push((Construct::Boneyard, start));
                    return self.double(TokenKind::BoneyardOpen, start);
                }
                '[' if self.cursor.peek() == Some('[') => {
                    self.open.push((Construct::Note, start));
                    return self.double(TokenKind::NoteOpen, start);
                }
                ']' if self.cursor.peek() == Some(']') => {
                    self.close(Construct::Note);
                    return self.double(TokenKind::NoteClose, start);
                }
                '/' | '[' | ']' => {
                    self.faults.push(ScanFault::LexProgress {
                        found: ch,
                        position: start,
                    });
                    return self.text_run(mark, start);
                }
                _ => return self.text_run(mark, start),
            }
        }
    }

    fn single(&mut self, kind: TokenKind, start: Position) -> Token<'a> {
        self.cursor.advance();
        Token::marker(kind, start)
    }

    fn double(&mut self, kind: TokenKind, start: Position) -> Token<'a> {
        self.cursor.advance();
        self.cursor.advance();
        Token::marker(kind, start)
    }

    fn text_run(&mut self, mark: Mark, start: Position) -> Token<'a> {
        // The first code point always belongs to the run, even if it is a
        // marker character that failed confirmation.
        self.cursor.advance();
        while !self.at_run_boundary() {
            self.cursor.advance();
        }

        let run = self.cursor.since(mark);
        Token::new(classify_run(run), run, start)
    }

    fn at_run_boundary(&self) -> bool {
        match self.cursor.current() {
            None => true,
            Some('\n' | '\r' | '_' | '~' | '(' | ')' | '=' | '*') => true,
            Some('/') => self.cursor.peek() == Some('*'),
            Some('[') => self.cursor.peek() == Some('['),
            Some(']') => self.cursor.peek() == Some(']'),
            Some(_) => false,
        }
    }

    fn close(&mut self, construct: Construct) {
        if let Some(idx) = self.open.iter().rposition(|(c, _)| *c == construct) {
            self.open.remove(idx);
        }
    }

    fn end_of_input(&mut self, at: Position) -> Token<'a> {
        if self.options.close_unterminated {
            if let Some((construct, opened_at)) = self.open.pop() {
                self.faults.push(ScanFault::Unterminated {
                    construct,
                    opened_at,
                });
                let kind = match construct {
                    Construct::Boneyard => TokenKind::BoneyardClose,
                    Construct::Note => TokenKind::NoteClose,
                };
                return Token::marker(kind, at);
            }
        } else if !self.drained {
            self.drained = true;
            let unclosed = self.open.drain(..).rev();
            self.faults
                .extend(unclosed.map(|(construct, opened_at)| ScanFault::Unterminated {
                    construct,
                    opened_at,
                }));
        }
        Token::marker(TokenKind::EndOfFile, at)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl FusedIterator for Scanner<'_> {}

/// Scans `input` with default options, without the trailing `end_of_file`.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Scanner::new(input).collect()
}
