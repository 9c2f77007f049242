//! Editor state: the markup being edited and its latest translation.

use html2vecty_codegen::{translate_with_options, TranslateOptions};
use serde::Serialize;
use tracing::{debug, warn};

/// Sample markup shown when the editor opens.
pub const DEFAULT_MARKUP: &str = r#"
<h1>html2vecty</h1>
<p>
	Enter HTML here and the vecty syntax will appear opposite.
</p>

<h2>Class attributes</h2>
<p class="foo bar baz"></p>

<h2>Style attributes</h2>
<p style="border: 2px; color: red!important;"></p>

<h2>Special properties</h2>
<input type="checkbox" checked="true" autofocus="true" />
<a href="href" id="id" data-foo="bar">Props</a>

<h2>An example</h2>
<div class="modal" tabindex="-1" role="dialog">
  <div class="modal-dialog" role="document">
    <div class="modal-content">
      <div class="modal-header">
        <h5 class="modal-title">Modal title</h5>
        <button type="button" class="close" data-dismiss="modal" aria-label="Close">
          <span aria-hidden="true">x</span>
        </button>
      </div>
      <div class="modal-body">
        <p>Modal body text goes here.</p>
      </div>
      <div class="modal-footer">
        <button type="button" class="btn btn-primary">Save changes</button>
        <button type="button" class="btn btn-secondary" data-dismiss="modal">Close</button>
      </div>
    </div>
  </div>
</div>
"#;

/// Markup text, the last successful translation, and the last failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorState {
    markup: String,
    code: String,
    diagnostic: Option<String>,
    #[serde(skip)]
    options: TranslateOptions,
}

impl EditorState {
    /// Open the editor on the sample document.
    pub fn new() -> Self {
        Self::with_options(TranslateOptions::default())
    }

    pub fn with_options(options: TranslateOptions) -> Self {
        let mut state = Self {
            markup: String::new(),
            code: String::new(),
            diagnostic: None,
            options,
        };
        state.set_markup(DEFAULT_MARKUP.trim());
        state
    }

    /// Replace the markup and retranslate.
    ///
    /// On failure the previous code is kept and the error text is stored as
    /// the diagnostic. Returns whether the translation succeeded.
    pub fn set_markup(&mut self, markup: impl Into<String>) -> bool {
        self.markup = markup.into();
        self.retranslate()
    }

    /// Swap the translation options and retranslate the current markup.
    pub fn set_options(&mut self, options: TranslateOptions) -> bool {
        self.options = options;
        self.retranslate()
    }

    fn retranslate(&mut self) -> bool {
        match translate_with_options(&self.markup, &self.options) {
            Ok(code) => {
                debug!(bytes = code.len(), "editor translation updated");
                self.code = code;
                self.diagnostic = None;
                true
            }
            Err(err) => {
                warn!(kind = ?err.kind(), error = %err, "editor translation failed");
                self.diagnostic = Some(err.to_string());
                false
            }
        }
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }

    pub fn options(&self) -> &TranslateOptions {
        &self.options
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
