use crate::token::Position;
use std::fmt;
use thiserror::Error;

/// Delimited constructs the scanner keeps track of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    Boneyard,
    Note,
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Construct::Boneyard => f.write_str("boneyard"),
            Construct::Note => f.write_str("note"),
        }
    }
}

/// Recoverable problems noticed while scanning. These are recorded, not
/// raised: the scanner always reaches end of file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanFault {
    #[error("{position}: '{found}' does not start a marker, scanned as text")]
    LexProgress { found: char, position: Position },

    #[error("{opened_at}: {construct} never closed, closed at end of input")]
    Unterminated {
        construct: Construct,
        opened_at: Position,
    },
}

impl ScanFault {
    pub fn position(&self) -> Position {
        match self {
            ScanFault::LexProgress { position, .. } => *position,
            ScanFault::Unterminated { opened_at, .. } => *opened_at,
        }
    }
}

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to serialize document: {0}")]
    Json(#[from] serde_json::Error),
}
