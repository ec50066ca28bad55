use serde::{Deserialize, Serialize};
use std::fmt;

/// Location of a token's first code point. Both fields are 1-based and the
/// column counts code points, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    EndOfFile,
    Text,
    Equals,
    BoneyardOpen,
    BoneyardClose,
    Underscore,
    Asterisk,
    ParenOpen,
    ParenClose,
    NoteOpen,
    NoteClose,
    Tilde,
    Slugline,
    Dialogue,
    Transition,
    CenteredText,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::EndOfFile => "end_of_file",
            TokenKind::Text => "text",
            TokenKind::Equals => "equals",
            TokenKind::BoneyardOpen => "boneyard_open",
            TokenKind::BoneyardClose => "boneyard_close",
            TokenKind::Underscore => "underscore",
            TokenKind::Asterisk => "asterisk",
            TokenKind::ParenOpen => "paren_open",
            TokenKind::ParenClose => "paren_close",
            TokenKind::NoteOpen => "note_open",
            TokenKind::NoteClose => "note_close",
            TokenKind::Tilde => "tilde",
            TokenKind::Slugline => "slugline",
            TokenKind::Dialogue => "dialogue",
            TokenKind::Transition => "transition",
            TokenKind::CenteredText => "centered_text",
        }
    }

    /// Kinds a dialogue block absorbs after its character cue.
    pub fn is_inline(self) -> bool {
        matches!(
            self,
            TokenKind::Text
                | TokenKind::Asterisk
                | TokenKind::Underscore
                | TokenKind::ParenOpen
                | TokenKind::ParenClose
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single scanned token. `value` borrows from the scanned input and is
/// empty for structural markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub value: &'a str,
    pub position: Position,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, value: &'a str, position: Position) -> Self {
        Self {
            kind,
            value,
            position,
        }
    }

    pub fn marker(kind: TokenKind, position: Position) -> Self {
        Self::new(kind, "", position)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "<{}>", self.kind)
        } else {
            write!(f, "<{} value=\"{}\">", self.kind, self.value)
        }
    }
}
