use crate::ast::Document;
use crate::error::EmitError;

/// Serializes a finished document tree.
pub trait Emitter {
    type Error;

    fn emit(&self, document: &Document) -> Result<Vec<u8>, Self::Error>;
}

#[derive(Debug, Clone)]
pub struct JsonEmitter {
    pub pretty: bool,
}

impl Default for JsonEmitter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl JsonEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }

    pub fn emit_string(&self, document: &Document) -> Result<String, EmitError> {
        let out = if self.pretty {
            serde_json::to_string_pretty(document)?
        } else {
            serde_json::to_string(document)?
        };
        Ok(out)
    }
}

impl Emitter for JsonEmitter {
    type Error = EmitError;

    fn emit(&self, document: &Document) -> Result<Vec<u8>, Self::Error> {
        self.emit_string(document).map(String::into_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn compact_output() {
        let doc = parse("CUT TO:");
        let bytes = JsonEmitter::compact().emit(&doc).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"elementType":"root","children":[{"elementType":"transition","value":"CUT TO:"}]}"#
        );
    }

    #[test]
    fn pretty_output_parses_back() {
        let doc = parse("STEEL\n(beer raised)\nTo retirement.");
        let text = JsonEmitter::new().emit_string(&doc).unwrap();
        assert!(text.contains('\n'));
        let back: Document = serde_json::from_str(&text).unwrap();
        assert_eq!(back, doc);
    }
}
