#[cfg(all(feature = "python", not(target_arch = "wasm32")))]
use pyo3::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod ast;
pub mod cursor;
pub mod emitter;
pub mod error;
pub mod parser;
pub mod scanner;
pub mod token;

pub use ast::{Composite, CompositeKind, Document, Leaf, Node};
pub use emitter::{Emitter, JsonEmitter};
pub use error::{Construct, EmitError, ScanFault};
pub use parser::{assemble, parse, parse_with_options, Parsed};
pub use scanner::{classify_run, tokenize, ScanOptions, Scanner};
pub use token::{Position, Token, TokenKind};

/// Parses screenplay text and renders the tree as pretty JSON.
pub fn to_json(text: &str) -> Result<String, EmitError> {
    let document = parser::parse(text);
    JsonEmitter::new().emit_string(&document)
}

#[cfg(all(feature = "python", not(target_arch = "wasm32")))]
#[pyfunction]
fn parse_text(text: String) -> PyResult<String> {
    to_json(&text).map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn parse_text_wasm(text: &str) -> Result<String, JsValue> {
    to_json(text).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn parse_text_with_options_wasm(
    text: &str,
    skip_tabs: bool,
    close_unterminated: bool,
    pretty: bool,
) -> Result<String, JsValue> {
    let parsed = parser::parse_with_options(
        text,
        &ScanOptions {
            skip_tabs,
            close_unterminated,
        },
    );
    JsonEmitter { pretty }
        .emit_string(&parsed.document)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(all(feature = "python", not(target_arch = "wasm32")))]
#[pymodule]
fn fountain_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(parse_text, m)?)?;
    Ok(())
}
