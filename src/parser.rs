use crate::ast::*;
use crate::error::ScanFault;
use crate::scanner::{ScanOptions, Scanner};
use crate::token::{Token, TokenKind};
use std::iter::Peekable;

/// A document together with the faults the scanner recovered from.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub document: Document,
    pub faults: Vec<ScanFault>,
}

pub fn parse(input: &str) -> Document {
    assemble(Scanner::new(input))
}

pub fn parse_with_options(input: &str, options: &ScanOptions) -> Parsed {
    let mut scanner = Scanner::with_options(input, options.clone());
    let document = assemble(&mut scanner);
    Parsed {
        document,
        faults: scanner.into_faults(),
    }
}

/// Builds the document tree from a token stream in one forward pass.
///
/// The stream ends at the first `end_of_file` token or when the iterator is
/// exhausted, whichever comes first. A character cue swallows the inline
/// tokens that follow it; everything else lands directly under the root.
pub fn assemble<'a, I>(tokens: I) -> Document
where
    I: IntoIterator<Item = Token<'a>>,
{
    let mut tokens = tokens.into_iter().take_while(|t| !t.is_eof()).peekable();
    let mut root = Composite::new(CompositeKind::Root, None);

    while let Some(token) = tokens.next() {
        let node = match token.kind {
            TokenKind::Dialogue => Node::Composite(assemble_dialogue(token, &mut tokens)),
            _ => Node::Leaf(token.into()),
        };
        root.push(node);
    }

    Document::from_root(root)
}

fn assemble_dialogue<'a, I>(cue: Token<'a>, tokens: &mut Peekable<I>) -> Composite
where
    I: Iterator<Item = Token<'a>>,
{
    let mut node = Composite::new(CompositeKind::Dialogue, Some(cue.value.to_string()));
    // The first non-inline token stays in the stream for the caller.
    while let Some(token) = tokens.next_if(|t| t.kind.is_inline()) {
        node.push(Node::Leaf(token.into()));
    }
    node
}
