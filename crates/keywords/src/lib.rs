//! Static vocabulary of the Qt Style Sheet language.
//! （Qt 樣式表語言的靜態詞彙表。）
//!
//! Every table here is fixed at build time. Several literals deliberately
//! appear in more than one group (`none`, `top`, `left`, `repeat`, ...):
//! the same word is valid in different syntactic positions, and the lexer
//! resolves the group from the surrounding context.

/// Skinnable widget class names, valid in selector position.
pub const WIDGET_TYPES: &[&str] = &[
    "QAbstractScrollArea",
    "QCheckBox",
    "QColumnView",
    "QComboBox",
    "QDateEdit",
    "QDateTimeEdit",
    "QDialog",
    "QDialogButtonBox",
    "QDockWidget",
    "QDoubleSpinBox",
    "QFrame",
    "QGroupBox",
    "QHeaderView",
    "QLabel",
    "QLineEdit",
    "QListView",
    "QListWidget",
    "QMainWindow",
    "QMenu",
    "QMenuBar",
    "QMessageBox",
    "QProgressBar",
    "QPushButton",
    "QRadioButton",
    "QScrollBar",
    "QSizeGrip",
    "QSlider",
    "QSpinBox",
    "QSplitter",
    "QStatusBar",
    "QTabBar",
    "QTabWidget",
    "QTableView",
    "QTableWidget",
    "QTextEdit",
    "QTimeEdit",
    "QToolBar",
    "QToolButton",
    "QToolBox",
    "QToolTip",
    "QTreeView",
    "QTreeWidget",
    "QWidget",
];

/// Alignment keywords.
pub const ALIGNMENTS: &[&str] = &["top", "bottom", "left", "right", "center"];

/// Background attachment keywords.
pub const ATTACHMENTS: &[&str] = &["scroll", "fixed"];

/// Border image stretch modes.
pub const BORDER_IMAGE_MODES: &[&str] = &["none", "stretch", "repeat"];

/// Border line styles.
pub const BORDER_STYLES: &[&str] = &[
    "dashed",
    "dot-dash",
    "dot-dot-dash",
    "dotted",
    "double",
    "inset",
    "outset",
    "ridge",
    "solid",
    "none",
];

/// Font style and weight keywords.
pub const FONT_STYLES: &[&str] = &["normal", "italic", "oblique", "bold"];

/// Gradient function names.
pub const GRADIENT_TYPES: &[&str] =
    &["qlineargradient", "qradialgradient", "qconicalgradient"];

/// Box-model origin keywords.
pub const ORIGIN_TYPES: &[&str] = &["margin", "border", "padding", "content"];

/// Palette role names usable in `palette(...)` references.
pub const PALETTE_ROLES: &[&str] = &[
    "alternate-base",
    "base",
    "bright-text",
    "button",
    "button-text",
    "dark",
    "highlight",
    "highlighted-text",
    "light",
    "link",
    "link-visited",
    "mid",
    "midlight",
    "shadow",
    "text",
    "window",
    "window-text",
];

/// Background repeat modes.
pub const REPEAT_MODES: &[&str] = &["repeat", "repeat-x", "repeat-y", "no-repeat"];

/// Enumerated value groups in declaration order, for uniform iteration.
pub const ENUM_VALUE_GROUPS: &[&[&str]] = &[
    ALIGNMENTS,
    ATTACHMENTS,
    BORDER_IMAGE_MODES,
    BORDER_STYLES,
    FONT_STYLES,
    GRADIENT_TYPES,
    ORIGIN_TYPES,
    PALETTE_ROLES,
    REPEAT_MODES,
];

/// Style property names plus the standard-icon identifiers, stored as a
/// single space-delimited string the way the host lexer consumes its
/// keyword-set slots.
pub const PROPERTIES: &str = concat!(
    " alternate-background-color",
    " background",
    " background-color",
    " background-image",
    " background-repeat",
    " background-position",
    " background-attachment",
    " background-clip",
    " background-origin",
    " border",
    " border-top",
    " border-right",
    " border-bottom",
    " border-left",
    " border-color",
    " border-top-color",
    " border-right-color",
    " border-bottom-color",
    " border-left-color",
    " border-image",
    " border-radius",
    " border-top-left-radius",
    " border-top-right-radius",
    " border-bottom-right-radius",
    " border-bottom-left-radius",
    " border-style",
    " border-top-style",
    " border-right-style",
    " border-bottom-style",
    " border-left-style",
    " border-width",
    " border-top-width",
    " border-right-width",
    " border-bottom-width",
    " border-left-width",
    " bottom",
    " button-layout",
    " color",
    " dialogbuttonbox-buttons-have-icons",
    " font",
    " font-family",
    " font-size",
    " font-style",
    " font-weight",
    " gridline-color",
    " height",
    " icon-size",
    " image",
    " image-position",
    " left",
    " lineedit-password-character",
    " margin",
    " margin-top",
    " margin-right",
    " margin-bottom",
    " margin-left",
    " max-height",
    " max-width",
    " messagebox-text-interaction-flags",
    " min-height",
    " min-width",
    " opacity",
    " outline",
    " padding",
    " padding-top",
    " padding-right",
    " padding-bottom",
    " padding-left",
    " paint-alternating-row-colors-for-empty-area",
    " position",
    " right",
    " selection-background-color",
    " selection-color",
    " show-decoration-selected",
    " spacing",
    " subcontrol-origin",
    " subcontrol-position",
    " text-align",
    " text-decoration",
    " top",
    " width",
    " backward-icon",
    " cd-icon",
    " computer-icon",
    " desktop-icon",
    " dialog-apply-icon",
    " dialog-cancel-icon",
    " dialog-close-icon",
    " dialog-discard-icon",
    " dialog-help-icon",
    " dialog-no-icon",
    " dialog-ok-icon",
    " dialog-open-icon",
    " dialog-reset-icon",
    " dialog-save-icon",
    " dialog-yes-icon",
    " directory-closed-icon",
    " directory-icon",
    " directory-link-icon",
    " directory-open-icon",
    " dockwidget-close-icon",
    " downarrow-icon",
    " dvd-icon",
    " file-icon",
    " file-link-icon",
    " filedialog-contentsview-icon",
    " filedialog-detailedview-icon",
    " filedialog-end-icon",
    " filedialog-infoview-icon",
    " filedialog-listview-icon",
    " filedialog-new-directory-icon",
    " filedialog-parent-directory-icon",
    " filedialog-start-icon",
    " floppy-icon",
    " forward-icon",
    " harddisk-icon",
    " home-icon",
    " leftarrow-icon",
    " messagebox-critical-icon",
    " messagebox-information-icon",
    " messagebox-question-icon",
    " messagebox-warning-icon",
    " network-icon",
    " rightarrow-icon",
    " titlebar-contexthelp-icon",
    " titlebar-maximize-icon",
    " titlebar-menu-icon",
    " titlebar-minimize-icon",
    " titlebar-normal-icon",
    " titlebar-shade-icon",
    " titlebar-unshade-icon",
    " trash-icon",
    " uparrow-icon",
);

/// Pseudo-state selector names (`:hover`, `:checked`, ...), space-delimited.
pub const PSEUDO_STATES: &str = concat!(
    " active",
    " adjoins-item",
    " alternate",
    " bottom",
    " checked",
    " closable",
    " closed",
    " default",
    " disabled",
    " editable",
    " edit-focus",
    " enabled",
    " exclusive",
    " first",
    " flat",
    " floatable",
    " focus",
    " has-children",
    " has-siblings",
    " horizontal",
    " hover",
    " indeterminate",
    " last",
    " left",
    " maximized",
    " middle",
    " minimized",
    " movable",
    " no-frame",
    " non-exclusive",
    " off",
    " on",
    " only-one",
    " open",
    " next-selected",
    " pressed",
    " previous-selected",
    " read-only",
    " right",
    " selected",
    " top",
    " unchecked",
    " vertical",
    " window",
);

/// Sub-control selector names (`::handle`, `::drop-down`, ...), space-delimited.
pub const SUB_CONTROLS: &str = concat!(
    " add-line",
    " add-page",
    " branch",
    " chunk",
    " close-button",
    " corner",
    " down-arrow",
    " down-button",
    " drop-down",
    " float-button",
    " groove",
    " indicator",
    " handle",
    " icon",
    " item",
    " left-arrow",
    " left-corner",
    " menu-arrow",
    " menu-button",
    " menu-indicator",
    " right-arrow",
    " pane",
    " right-corner",
    " scroller",
    " section",
    " separator",
    " sub-line",
    " sub-page",
    " tab",
    " tab-bar",
    " tear",
    " tearoff",
    " text",
    " title",
    " up-arrow",
    " up-button",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_are_non_empty() {
        assert!(!WIDGET_TYPES.is_empty());
        assert!(!PROPERTIES.trim().is_empty());
        assert!(!PSEUDO_STATES.trim().is_empty());
        assert!(!SUB_CONTROLS.trim().is_empty());
        for group in ENUM_VALUE_GROUPS {
            assert!(!group.is_empty());
        }
    }

    #[test]
    fn delimited_sets_tokenize_cleanly() {
        for word in PROPERTIES.split_whitespace() {
            assert!(word.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'));
        }
        for word in PSEUDO_STATES
            .split_whitespace()
            .chain(SUB_CONTROLS.split_whitespace())
        {
            assert!(word.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'));
        }
    }

    #[test]
    fn overlapping_literals_are_preserved() {
        // The same word is legal in several syntactic positions.
        assert!(ALIGNMENTS.contains(&"left"));
        assert!(PSEUDO_STATES.split_whitespace().any(|w| w == "left"));
        assert!(BORDER_STYLES.contains(&"none"));
        assert!(BORDER_IMAGE_MODES.contains(&"none"));
        assert!(PALETTE_ROLES.contains(&"window"));
        assert!(PSEUDO_STATES.split_whitespace().any(|w| w == "window"));
    }
}
