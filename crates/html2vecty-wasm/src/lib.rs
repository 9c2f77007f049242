//! WebAssembly bindings for the html2vecty translator.
//!
//! ## Example
//!
//! ```js
//! import { Html2VectyEditor, transcode } from 'html2vecty';
//!
//! const editor = new Html2VectyEditor();
//! editor.setMarkup('<p class="lead">Hello</p>');
//! console.log(editor.code);
//!
//! // One-shot translation; throws on invalid markup
//! const source = transcode('<a href="/">Home</a>');
//! ```

use html2vecty_codegen::{parse_markup, translate, translate_with_options, TranslateOptions};
use wasm_bindgen::prelude::*;

mod editor;

pub use editor::{EditorState, DEFAULT_MARKUP};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

/// Live editor: markup in, Go source out.
#[wasm_bindgen]
pub struct Html2VectyEditor {
    state: EditorState,
}

#[wasm_bindgen]
impl Html2VectyEditor {
    /// Create an editor seeded with the sample markup.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            state: EditorState::new(),
        }
    }

    #[wasm_bindgen(js_name = version)]
    pub fn version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn markup(&self) -> String {
        self.state.markup().to_string()
    }

    /// Code from the last successful translation.
    #[wasm_bindgen(getter)]
    pub fn code(&self) -> String {
        self.state.code().to_string()
    }

    /// Error text from the last failed translation, if any.
    #[wasm_bindgen(getter)]
    pub fn diagnostic(&self) -> Option<String> {
        self.state.diagnostic().map(str::to_string)
    }

    /// Replace the markup. Returns false when translation failed.
    #[wasm_bindgen(js_name = setMarkup)]
    pub fn set_markup(&mut self, markup: &str) -> bool {
        self.state.set_markup(markup)
    }

    /// Set translation options from a JS object.
    #[wasm_bindgen(js_name = setOptions)]
    pub fn set_options(&mut self, options: JsValue) -> Result<bool, JsError> {
        let options: TranslateOptions = serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))?;
        Ok(self.state.set_options(options))
    }

    /// Current translation options as a plain object.
    #[wasm_bindgen(js_name = getOptions)]
    pub fn get_options(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(self.state.options())
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// Set translation options from a JSON string.
    #[wasm_bindgen(js_name = setOptionsFromString)]
    pub fn set_options_from_string(&mut self, json: &str) -> Result<bool, JsError> {
        let options: TranslateOptions = serde_json::from_str(json)
            .map_err(|e| JsError::new(&format!("Invalid JSON: {}", e)))?;
        Ok(self.state.set_options(options))
    }

    /// Snapshot of markup, code and diagnostic as a plain object.
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.state)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }
}

impl Default for Html2VectyEditor {
    fn default() -> Self {
        Self::new()
    }
}

/// Translate markup with default options.
#[wasm_bindgen]
pub fn transcode(markup: &str) -> Result<String, JsError> {
    translate(markup).map_err(|e| JsError::new(&e.to_string()))
}

/// Translate markup with options given as a JS object.
#[wasm_bindgen(js_name = transcodeWithOptions)]
pub fn transcode_with_options(markup: &str, options: JsValue) -> Result<String, JsError> {
    let options: TranslateOptions = serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))?;
    translate_with_options(markup, &options).map_err(|e| JsError::new(&e.to_string()))
}

/// Parse markup into the call-expression tree (for inspection).
#[wasm_bindgen(js_name = parseMarkup)]
pub fn parse_markup_standalone(markup: &str) -> Result<JsValue, JsError> {
    let doc = parse_markup(markup).map_err(|e| JsError::new(&format!("Parse error: {}", e)))?;

    serde_wasm_bindgen::to_value(&doc)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Get the translator version.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
