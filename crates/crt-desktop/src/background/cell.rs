use serde::{Deserialize, Serialize};

/// Menubar entries drawn at the start of the first grid row
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Menu {
    File,
    Edit,
    View,
}

impl Menu {
    pub fn all() -> &'static [Menu] {
        &[Menu::File, Menu::Edit, Menu::View]
    }

    /// Caret-prefixed label, one glyph per cell
    pub fn label(&self) -> &'static str {
        match self {
            Menu::File => "^File",
            Menu::Edit => "^Edit",
            Menu::View => "^View",
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Menu::File => "file",
            Menu::Edit => "edit",
            Menu::View => "view",
        }
    }
}

/// Role of a grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", content = "menu", rename_all = "lowercase")]
pub enum CellKind {
    /// Plain `•` filler
    Dot,
    /// One glyph of a menubar label
    Menubar(Menu),
    /// The `G` in the bottom-right corner
    Bottom,
}

impl CellKind {
    /// CSS class of the span, if any
    pub fn class(&self) -> Option<&'static str> {
        match self {
            CellKind::Dot => None,
            CellKind::Menubar(Menu::File) => Some("menubar file"),
            CellKind::Menubar(Menu::Edit) => Some("menubar edit"),
            CellKind::Menubar(Menu::View) => Some("menubar view"),
            CellKind::Bottom => Some("bottom"),
        }
    }
}

/// One glyph of the background grid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub glyph: char,
    pub kind: CellKind,
    /// Time at which a running blink ends
    pub(crate) blink_until: Option<f64>,
}

impl Cell {
    pub(crate) fn new(glyph: char, kind: CellKind) -> Self {
        Self {
            glyph,
            kind,
            blink_until: None,
        }
    }

    pub fn is_blinking(&self) -> bool {
        self.blink_until.is_some()
    }

    /// Glyph currently on screen
    pub fn shown(&self) -> char {
        if self.is_blinking() {
            '*'
        } else {
            self.glyph
        }
    }
}
