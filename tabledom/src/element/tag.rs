use std::fmt;

/// Element kind. Table structure gets dedicated variants, anything else
/// is carried by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    Table,
    THead,
    TBody,
    TFoot,
    Tr,
    Th,
    Td,
    Div,
    Span,
    Other(String),
}

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "meta", "param",
    "source", "track", "wbr",
];

impl Tag {
    /// Parse a tag name, case-insensitively.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "table" => Self::Table,
            "thead" => Self::THead,
            "tbody" => Self::TBody,
            "tfoot" => Self::TFoot,
            "tr" => Self::Tr,
            "th" => Self::Th,
            "td" => Self::Td,
            "div" => Self::Div,
            "span" => Self::Span,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Table => "table",
            Self::THead => "thead",
            Self::TBody => "tbody",
            Self::TFoot => "tfoot",
            Self::Tr => "tr",
            Self::Th => "th",
            Self::Td => "td",
            Self::Div => "div",
            Self::Span => "span",
            Self::Other(name) => name,
        }
    }

    /// Elements that never have content and serialize as `<name />`.
    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.name())
    }

    /// Table cells (`th` and `td`).
    pub fn is_cell(&self) -> bool {
        matches!(self, Self::Th | Self::Td)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
