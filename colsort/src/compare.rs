//! The row comparator.

use std::cmp::Ordering;

use tabledom::{Element, inner_text};

use crate::config::BinderConfig;
use crate::error::SortError;
use crate::value::parse_number;

/// The comparable value of one row's cell, extracted once per sort.
#[derive(Debug, Clone, PartialEq)]
pub struct SortKey {
    pub text: String,
    pub number: Option<f64>,
}

impl SortKey {
    pub fn new(text: impl Into<String>, config: &BinderConfig) -> Self {
        let text = text.into();
        let number = parse_number(&text, config.digit_fallback);
        Self { text, number }
    }

    /// Key for the `index`-th `th`/`td` of `row`.
    pub fn from_row(row: &Element, index: usize, config: &BinderConfig) -> Result<Self, SortError> {
        let cells: Vec<&Element> = row
            .child_nodes()
            .iter()
            .filter(|child| child.tag.is_cell())
            .collect();
        let cell = cells.get(index).ok_or_else(|| SortError::ColumnOutOfRange {
            row: row.id.clone(),
            index,
            cells: cells.len(),
        })?;
        Ok(Self::new(inner_text(cell), config))
    }
}

/// Ascending order: numerically when both keys are numbers, otherwise by
/// the raw text, compared by UTF-16 code unit.
pub fn compare_keys(a: &SortKey, b: &SortKey) -> Ordering {
    match (a.number, b.number) {
        (Some(l), Some(r)) => l.partial_cmp(&r).unwrap_or(Ordering::Equal),
        _ => a.text.encode_utf16().cmp(b.text.encode_utf16()),
    }
}
