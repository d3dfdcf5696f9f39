//! Fixed rule templates, one per surface.
//!
//! The content template styles the host's HTML content view broadly. The
//! chrome template uses widget-stylesheet selectors and covers every
//! structural widget category. The restricted template is limited to
//! container backgrounds plus explicitly named controls so it can be injected
//! next to foreign content without overwriting it.

use crate::derive::template::Rule;

pub const CONTENT_RULES: &[Rule] = &[
    Rule::new(
        "html, body",
        &[
            ("background-color", "{editor.background}"),
            ("color", "{editor.foreground}"),
        ],
    ),
    Rule::new(
        ".card, .card.night_mode",
        &[
            ("background-color", "{editor.background}"),
            ("color", "{editor.foreground}"),
        ],
    ),
    Rule::new(
        "h1, h2, h3, h4, h5, h6",
        &[
            ("color", "{editor.foreground}"),
            ("border-bottom-color", "{editorGroup.border}"),
        ],
    ),
    Rule::new(
        "a",
        &[
            ("color", "{textLink.foreground}"),
            ("text-decoration", "none"),
        ],
    ),
    Rule::new(
        "a:hover",
        &[
            ("color", "{textLink.activeForeground}"),
            ("text-decoration", "underline"),
        ],
    ),
    Rule::new(
        "pre, code, tt",
        &[
            ("background-color", "{editor.lineHighlightBackground}"),
            ("color", "{editor.foreground}"),
            ("border", "1px solid {editorGroup.border}"),
            ("border-radius", "3px"),
        ],
    ),
    Rule::new(
        "table",
        &[("border-collapse", "collapse")],
    ),
    Rule::new(
        "th, td",
        &[
            ("background-color", "{editor.background}"),
            ("color", "{editor.foreground}"),
            ("border", "1px solid {editorGroup.border}"),
            ("padding", "8px"),
        ],
    ),
    Rule::new(
        "th, tr:hover td",
        &[("background-color", "{editor.lineHighlightBackground}")],
    ),
    Rule::new(
        "blockquote",
        &[
            ("border-left", "4px solid {editorGroup.border}"),
            ("background-color", "{editor.lineHighlightBackground}"),
            ("color", "{editor.foreground}"),
            ("padding", "0.5em 1em"),
        ],
    ),
    Rule::new(
        "hr",
        &[
            ("border", "none"),
            ("border-top", "1px solid {editorGroup.border}"),
        ],
    ),
    Rule::new(
        "::selection",
        &[
            ("background-color", "{editor.selectionBackground}"),
            ("color", "{editor.selectionForeground}"),
        ],
    ),
    Rule::new(
        ".cloze",
        &[
            ("color", "{terminal.ansiCyan}"),
            ("background-color", "{editor.lineHighlightBackground}"),
            ("font-weight", "bold"),
        ],
    ),
    Rule::new(
        "#typeans, input[type=\"text\"], input[type=\"number\"], textarea",
        &[
            ("background-color", "{input.background}"),
            ("color", "{input.foreground}"),
            ("border", "1px solid {input.border}"),
            ("border-radius", "3px"),
        ],
    ),
    Rule::new(
        "#typeans:focus, input:focus, textarea:focus",
        &[
            ("outline", "none"),
            ("border-color", "{focusBorder}"),
        ],
    ),
    Rule::new(
        "button",
        &[
            ("background-color", "{button.background}"),
            ("color", "{button.foreground}"),
            ("border", "1px solid {editorGroup.border}"),
            ("border-radius", "3px"),
        ],
    ),
    Rule::new(
        "button:hover",
        &[("background-color", "{button.hoverBackground}")],
    ),
    Rule::new(
        "::-webkit-scrollbar",
        &[
            ("width", "12px"),
            ("height", "12px"),
            ("background-color", "{editor.background}"),
        ],
    ),
    Rule::new(
        "::-webkit-scrollbar-thumb",
        &[
            ("background-color", "{scrollbarSlider.background}"),
            ("border-radius", "6px"),
        ],
    ),
    Rule::new(
        "::-webkit-scrollbar-thumb:hover",
        &[("background-color", "{scrollbarSlider.hoverBackground}")],
    ),
];

pub const CHROME_RULES: &[Rule] = &[
    Rule::new(
        "QWidget",
        &[
            ("background-color", "{editor.background}"),
            ("color", "{editor.foreground}"),
            ("selection-background-color", "{editor.selectionBackground}"),
            ("selection-color", "{editor.selectionForeground}"),
        ],
    ),
    Rule::new(
        "QMainWindow, QDialog",
        &[
            ("background-color", "{editor.background}"),
            ("color", "{editor.foreground}"),
            ("border", "none"),
        ],
    ),
    Rule::new(
        "QFrame[frameShape=\"4\"], QFrame[frameShape=\"5\"]",
        &[("color", "{editorGroup.border}")],
    ),
    Rule::new(
        "QPushButton, QToolButton",
        &[
            ("background-color", "{button.background}"),
            ("color", "{button.foreground}"),
            ("border", "1px solid {editorGroup.border}"),
            ("border-radius", "3px"),
            ("padding", "4px 12px"),
        ],
    ),
    Rule::new(
        "QPushButton:hover, QToolButton:hover",
        &[("background-color", "{button.hoverBackground}")],
    ),
    Rule::new(
        "QPushButton:pressed, QToolButton:pressed",
        &[("background-color", "{editor.selectionBackground}")],
    ),
    Rule::new(
        "QPushButton:default",
        &[("border", "1px solid {focusBorder}")],
    ),
    Rule::new(
        "QPushButton:disabled, QToolButton:disabled, QLabel:disabled",
        &[("color", "{disabledForeground}")],
    ),
    Rule::new(
        "QLineEdit, QTextEdit, QPlainTextEdit, QSpinBox, QComboBox",
        &[
            ("background-color", "{input.background}"),
            ("color", "{input.foreground}"),
            ("border", "1px solid {input.border}"),
            ("border-radius", "3px"),
            ("padding", "2px 4px"),
        ],
    ),
    Rule::new(
        "QLineEdit:focus, QTextEdit:focus, QPlainTextEdit:focus, QSpinBox:focus, QComboBox:focus",
        &[("border", "1px solid {focusBorder}")],
    ),
    Rule::new(
        "QComboBox QAbstractItemView",
        &[
            ("background-color", "{menu.background}"),
            ("color", "{menu.foreground}"),
            ("selection-background-color", "{menu.selectionBackground}"),
        ],
    ),
    Rule::new(
        "QListView, QTreeView, QTableView",
        &[
            ("background-color", "{sideBar.background}"),
            ("color", "{sideBar.foreground}"),
            ("alternate-background-color", "{editor.background}"),
            ("border", "1px solid {editorGroup.border}"),
        ],
    ),
    Rule::new(
        "QListView::item:hover, QTreeView::item:hover, QTableView::item:hover",
        &[("background-color", "{list.hoverBackground}")],
    ),
    Rule::new(
        "QListView::item:selected, QTreeView::item:selected, QTableView::item:selected",
        &[
            ("background-color", "{list.activeSelectionBackground}"),
            ("color", "{list.activeSelectionForeground}"),
        ],
    ),
    Rule::new(
        "QHeaderView::section",
        &[
            ("background-color", "{sideBar.background}"),
            ("color", "{sideBar.foreground}"),
            ("border", "none"),
            ("border-bottom", "1px solid {editorGroup.border}"),
            ("padding", "4px"),
        ],
    ),
    Rule::new(
        "QTabWidget::pane",
        &[("border", "1px solid {tab.border}")],
    ),
    Rule::new(
        "QTabBar::tab",
        &[
            ("background-color", "{tab.inactiveBackground}"),
            ("color", "{tab.inactiveForeground}"),
            ("border", "1px solid {tab.border}"),
            ("padding", "6px 12px"),
        ],
    ),
    Rule::new(
        "QTabBar::tab:selected",
        &[
            ("background-color", "{tab.activeBackground}"),
            ("color", "{tab.activeForeground}"),
        ],
    ),
    Rule::new(
        "QMenuBar",
        &[
            ("background-color", "{titleBar.activeBackground}"),
            ("color", "{titleBar.activeForeground}"),
        ],
    ),
    Rule::new(
        "QMenuBar::item:selected",
        &[("background-color", "{menu.selectionBackground}")],
    ),
    Rule::new(
        "QMenu",
        &[
            ("background-color", "{menu.background}"),
            ("color", "{menu.foreground}"),
            ("border", "1px solid {editorGroup.border}"),
        ],
    ),
    Rule::new(
        "QMenu::item:selected",
        &[
            ("background-color", "{menu.selectionBackground}"),
            ("color", "{list.activeSelectionForeground}"),
        ],
    ),
    Rule::new(
        "QToolTip",
        &[
            ("background-color", "{editorWidget.background}"),
            ("color", "{editor.foreground}"),
            ("border", "1px solid {editorGroup.border}"),
        ],
    ),
    Rule::new(
        "QStatusBar",
        &[
            ("background-color", "{statusBar.background}"),
            ("color", "{statusBar.foreground}"),
        ],
    ),
    Rule::new(
        "QScrollBar:vertical, QScrollBar:horizontal",
        &[
            ("background-color", "{editor.background}"),
            ("border", "none"),
            ("width", "12px"),
            ("height", "12px"),
        ],
    ),
    Rule::new(
        "QScrollBar::handle",
        &[
            ("background-color", "{scrollbarSlider.background}"),
            ("border-radius", "4px"),
            ("min-height", "20px"),
        ],
    ),
    Rule::new(
        "QScrollBar::handle:hover",
        &[("background-color", "{scrollbarSlider.hoverBackground}")],
    ),
    Rule::new(
        "QScrollBar::add-line, QScrollBar::sub-line",
        &[("width", "0px"), ("height", "0px")],
    ),
    Rule::new(
        "QCheckBox::indicator:checked, QRadioButton::indicator:checked",
        &[
            ("background-color", "{checkbox.background}"),
            ("border", "1px solid {focusBorder}"),
        ],
    ),
    Rule::new(
        "QProgressBar",
        &[
            ("background-color", "{input.background}"),
            ("color", "{editor.foreground}"),
            ("border", "1px solid {editorGroup.border}"),
            ("text-align", "center"),
        ],
    ),
    Rule::new(
        "QProgressBar::chunk",
        &[("background-color", "{progressBar.background}")],
    ),
    Rule::new(
        "QGroupBox",
        &[
            ("border", "1px solid {editorGroup.border}"),
            ("margin-top", "8px"),
        ],
    ),
    Rule::new(
        "QSplitter::handle",
        &[("background-color", "{editorGroup.border}")],
    ),
];

/// Selectors the restricted template may target.
pub const RESTRICTED_SELECTORS: &[&str] = &[
    "html:root > body",
    "body > .card",
    "body > #qa",
    "input#typeans",
    "input#typeans:focus",
    "button#ansbut",
    "button.chromaport-control",
];

pub const RESTRICTED_RULES: &[Rule] = &[
    Rule::new(
        "html:root > body",
        &[
            ("background-color", "{editor.background}"),
            ("color", "{editor.foreground}"),
        ],
    ),
    Rule::new(
        "body > .card, body > #qa",
        &[
            ("background-color", "{editor.background}"),
            ("color", "{editor.foreground}"),
        ],
    ),
    Rule::new(
        "input#typeans",
        &[
            ("background-color", "{input.background}"),
            ("color", "{input.foreground}"),
            ("border-color", "{input.border}"),
        ],
    ),
    Rule::new(
        "input#typeans:focus",
        &[("border-color", "{focusBorder}")],
    ),
    Rule::new(
        "button#ansbut, button.chromaport-control",
        &[
            ("background-color", "{button.background}"),
            ("color", "{button.foreground}"),
        ],
    ),
];
