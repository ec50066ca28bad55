use crate::token::{Token, TokenKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositeKind {
    Root,
    Dialogue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaf {
    #[serde(rename = "elementType")]
    pub element_type: TokenKind,
    pub value: String,
}

impl Leaf {
    pub fn new(element_type: TokenKind, value: impl Into<String>) -> Self {
        Self {
            element_type,
            value: value.into(),
        }
    }
}

impl From<Token<'_>> for Leaf {
    fn from(token: Token<'_>) -> Self {
        Leaf::new(token.kind, token.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Composite {
    #[serde(rename = "elementType")]
    pub element_type: CompositeKind,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub value: Option<String>, // character name for dialogue
    pub children: Vec<Node>,
}

impl Composite {
    pub fn new(element_type: CompositeKind, value: Option<String>) -> Self {
        Self {
            element_type,
            value,
            children: Vec::new(),
        }
    }

    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }
}

// Composite is listed first so untagged deserialization does not read a
// composite as a leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Composite(Composite),
    Leaf(Leaf),
}

impl Node {
    pub fn leaf(element_type: TokenKind, value: impl Into<String>) -> Self {
        Node::Leaf(Leaf::new(element_type, value))
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Node::Leaf(l) => Some(l),
            Node::Composite(_) => None,
        }
    }

    pub fn as_composite(&self) -> Option<&Composite> {
        match self {
            Node::Composite(c) => Some(c),
            Node::Leaf(_) => None,
        }
    }

    /// The export name of this node's type.
    pub fn element_type(&self) -> &'static str {
        match self {
            Node::Leaf(l) => l.element_type.as_str(),
            Node::Composite(c) => match c.element_type {
                CompositeKind::Root => "root",
                CompositeKind::Dialogue => "dialogue",
            },
        }
    }
}

/// A parsed screenplay: a single `root` composite whose children are in
/// source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    root: Composite,
}

impl Document {
    pub(crate) fn from_root(root: Composite) -> Self {
        debug_assert_eq!(root.element_type, CompositeKind::Root);
        Self { root }
    }

    pub fn root(&self) -> &Composite {
        &self.root
    }

    pub fn children(&self) -> &[Node] {
        &self.root.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Document {
        let mut dialogue = Composite::new(CompositeKind::Dialogue, Some("STEEL".into()));
        dialogue.push(Node::leaf(TokenKind::ParenOpen, ""));
        dialogue.push(Node::leaf(TokenKind::Text, "beer raised"));
        dialogue.push(Node::leaf(TokenKind::ParenClose, ""));

        let mut root = Composite::new(CompositeKind::Root, None);
        root.push(Node::leaf(TokenKind::Slugline, "EXT. PATIO - DAY"));
        root.push(Node::Composite(dialogue));
        Document::from_root(root)
    }

    #[test]
    fn serializes_to_export_contract() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "elementType": "root",
                "children": [
                    { "elementType": "slugline", "value": "EXT. PATIO - DAY" },
                    {
                        "elementType": "dialogue",
                        "value": "STEEL",
                        "children": [
                            { "elementType": "paren_open", "value": "" },
                            { "elementType": "text", "value": "beer raised" },
                            { "elementType": "paren_close", "value": "" }
                        ]
                    }
                ]
            })
        );
    }

    #[test]
    fn deserializes_exported_tree() {
        let doc = sample();
        let text = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&text).unwrap();
        assert_eq!(back, doc);
        assert_eq!(back.children()[1].element_type(), "dialogue");
        assert!(back.children()[0].as_leaf().is_some());
    }
}
