use std::collections::HashSet;

use once_cell::sync::Lazy;

use qssedit_keywords as catalog;

/// Enclosing syntactic construct of the token being classified.
/// （被分類詞元所處的語法位置。）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenContext {
    /// Type-selector position, e.g. `QPushButton { ... }`.
    Selector,
    /// After a single colon, e.g. `QPushButton:hover`.
    PseudoState,
    /// After a double colon, e.g. `QScrollBar::handle`.
    SubControl,
    /// Declaration key position, before the `:`.
    Property,
    /// Declaration value position, after the `:`.
    Value,
}

/// Catalog group a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordClass {
    WidgetType,
    Property,
    PseudoState,
    SubControl,
    EnumValue,
}

static WIDGET_TYPES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| catalog::WIDGET_TYPES.iter().copied().collect());

static PROPERTIES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| catalog::PROPERTIES.split_whitespace().collect());

static PSEUDO_STATES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| catalog::PSEUDO_STATES.split_whitespace().collect());

static SUB_CONTROLS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| catalog::SUB_CONTROLS.split_whitespace().collect());

static ENUM_VALUES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    catalog::ENUM_VALUE_GROUPS
        .iter()
        .flat_map(|group| group.iter().copied())
        .collect()
});

/// Maps (context, literal) to a catalog group.
/// （由（語法位置，字面值）映射至詞彙分組。）
///
/// Many literals are members of several groups, so the context is what
/// disambiguates; a token that is not domain vocabulary in the given
/// position yields `None` and the caller falls back to the host lexer's
/// generic CSS classification. An ambiguous token is never forced into
/// an arbitrary group.
pub fn classify(token: &str, context: TokenContext) -> Option<KeywordClass> {
    let class = match context {
        TokenContext::Selector => KeywordClass::WidgetType,
        TokenContext::PseudoState => KeywordClass::PseudoState,
        TokenContext::SubControl => KeywordClass::SubControl,
        TokenContext::Property => KeywordClass::Property,
        TokenContext::Value => KeywordClass::EnumValue,
    };
    let members: &HashSet<&str> = match class {
        KeywordClass::WidgetType => &WIDGET_TYPES,
        KeywordClass::PseudoState => &PSEUDO_STATES,
        KeywordClass::SubControl => &SUB_CONTROLS,
        KeywordClass::Property => &PROPERTIES,
        KeywordClass::EnumValue => &ENUM_VALUES,
    };
    members.contains(token).then_some(class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_literal_resolves_by_context() {
        // "left" is an alignment value, a pseudo-state and a property.
        assert_eq!(
            classify("left", TokenContext::Value),
            Some(KeywordClass::EnumValue)
        );
        assert_eq!(
            classify("left", TokenContext::PseudoState),
            Some(KeywordClass::PseudoState)
        );
        assert_eq!(
            classify("left", TokenContext::Property),
            Some(KeywordClass::Property)
        );

        // "window" is both a palette role and a pseudo-state.
        assert_eq!(
            classify("window", TokenContext::Value),
            Some(KeywordClass::EnumValue)
        );
        assert_eq!(
            classify("window", TokenContext::PseudoState),
            Some(KeywordClass::PseudoState)
        );

        // "text" is both a sub-control and a palette role.
        assert_eq!(
            classify("text", TokenContext::SubControl),
            Some(KeywordClass::SubControl)
        );
        assert_eq!(
            classify("text", TokenContext::Value),
            Some(KeywordClass::EnumValue)
        );
    }

    #[test]
    fn widget_types_only_match_selector_position() {
        assert_eq!(
            classify("QPushButton", TokenContext::Selector),
            Some(KeywordClass::WidgetType)
        );
        assert_eq!(classify("QPushButton", TokenContext::Value), None);
        assert_eq!(classify("QPushButton", TokenContext::Property), None);
    }

    #[test]
    fn unknown_tokens_stay_unclassified() {
        assert_eq!(classify("frobnicate", TokenContext::Selector), None);
        assert_eq!(classify("frobnicate", TokenContext::Value), None);
        // Valid vocabulary in the wrong position is also unclassified.
        assert_eq!(classify("hover", TokenContext::Selector), None);
        assert_eq!(classify("border-style", TokenContext::Value), None);
    }
}
