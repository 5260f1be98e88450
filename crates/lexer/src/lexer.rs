use crate::classify::{classify, KeywordClass, TokenContext};
use crate::index::{CompletionIndex, PrepareError, PreparedIndex};

use qssedit_keywords as catalog;

/// The two keyword-set slots the host highlighter reads from a lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordSet {
    /// Style properties plus the standard-icon identifiers.
    Properties,
    /// Pseudo-states and sub-controls combined.
    StatesAndParts,
}

/// Font styling hint the host queries per classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontHint {
    pub bold: bool,
    pub italic: bool,
}

/// QSS-aware lexer extension: owns the prepared completion index and
/// answers per-token classification queries from the host editor widget.
/// （QSS 語法的詞法擴充：持有已備妥的補全索引並回應逐詞分類查詢。）
#[derive(Debug)]
pub struct QssLexer {
    prepared: PreparedIndex,
}

impl QssLexer {
    /// Builds and prepares the completion index. The index lives and dies
    /// with this lexer instance.
    pub fn new() -> Result<Self, PrepareError> {
        let prepared = CompletionIndex::build().prepare()?;
        Ok(Self { prepared })
    }

    /// Space-delimited keyword string for the requested slot, in the form
    /// the host highlighter splits itself.
    pub fn keywords(&self, set: KeywordSet) -> String {
        match set {
            KeywordSet::Properties => catalog::PROPERTIES.to_string(),
            KeywordSet::StatesAndParts => {
                format!("{}{}", catalog::PSEUDO_STATES, catalog::SUB_CONTROLS)
            }
        }
    }

    /// See [`classify`].
    pub fn classify(&self, token: &str, context: TokenContext) -> Option<KeywordClass> {
        classify(token, context)
    }

    /// Autocomplete suggestions for the given prefix.
    pub fn completions(&self, prefix: &str) -> Vec<&str> {
        self.prepared.complete(prefix)
    }

    pub fn prepared_index(&self) -> &PreparedIndex {
        &self.prepared
    }

    /// Font hint for a classified token. The base CSS lexer renders
    /// keywords bold; QSS styles every class with normal weight instead.
    pub fn font_hint(&self, _class: Option<KeywordClass>) -> FontHint {
        FontHint {
            bold: false,
            italic: false,
        }
    }
}
