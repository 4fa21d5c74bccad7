//! Wiring header clicks to row sorts.

use std::collections::HashSet;

use tabledom::{Document, Element, Tag, element_at, element_at_mut, path_to, query_all, sibling_index};

use crate::config::BinderConfig;
use crate::error::SortError;
use crate::order::sort_rows;

/// A header cell bound to the column it sorts by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub header_id: String,
    pub index: usize,
}

/// Click-to-sort for every header cell present at initialization.
///
/// Headers added to the document afterwards are not bound. Listeners are
/// keyed by id, so only the first header with a given id is bound.
#[derive(Debug, Clone)]
pub struct ColumnSortBinder {
    config: BinderConfig,
    bindings: Vec<Binding>,
}

impl ColumnSortBinder {
    pub fn initialize(document: &mut Document) -> Self {
        Self::with_config(document, BinderConfig::default())
    }

    /// Attach a click listener to every `config.header_tag` element. Each
    /// listener sorts by the header's column, as computed now.
    pub fn with_config(document: &mut Document, config: BinderConfig) -> Self {
        let root = document.root();
        let mut seen = HashSet::new();
        let bindings: Vec<Binding> = query_all(root, &config.header_tag)
            .into_iter()
            .filter_map(|header| {
                if !seen.insert(header.id.as_str()) {
                    log::warn!("skipping header with duplicate id '{}'", header.id);
                    return None;
                }
                let index = column_index(root, header)?;
                Some(Binding {
                    header_id: header.id.clone(),
                    index,
                })
            })
            .collect();

        for binding in &bindings {
            let header_id = binding.header_id.clone();
            let index = binding.index;
            let config = config.clone();
            document.on_click(binding.header_id.clone(), move |root| {
                on_header_click(root, &header_id, index, &config)?;
                Ok(())
            });
        }

        log::debug!("bound {} header cells", bindings.len());

        Self { config, bindings }
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn config(&self) -> &BinderConfig {
        &self.config
    }

    /// The column index bound to `header_id`, if it was bound.
    pub fn index_of(&self, header_id: &str) -> Option<usize> {
        self.bindings
            .iter()
            .find(|b| b.header_id == header_id)
            .map(|b| b.index)
    }
}

/// Position of `header` among the `th`/`td` children of its row, matching
/// how row cells are counted. Non-cell headers use their plain sibling
/// position.
fn column_index(root: &Element, header: &Element) -> Option<usize> {
    if !header.tag.is_cell() {
        return sibling_index(root, &header.id);
    }
    let path = path_to(root, &header.id)?;
    let (_, row_path) = path.split_last()?;
    element_at(root, row_path)?
        .child_nodes()
        .iter()
        .filter(|child| child.tag.is_cell())
        .position(|child| child.id == header.id)
}

/// Sort the body of the table containing `header_id` by column `index`.
///
/// The body is the first `tbody` child of the nearest enclosing `table`.
/// Returns the number of rows sorted.
pub fn on_header_click(
    root: &mut Element,
    header_id: &str,
    index: usize,
    config: &BinderConfig,
) -> Result<usize, SortError> {
    log::debug!("clicked: {index} {header_id}");

    let header_path = path_to(root, header_id).ok_or_else(|| SortError::HeaderNotFound {
        header: header_id.to_string(),
    })?;

    let table_path = (0..header_path.len())
        .rev()
        .map(|depth| &header_path[..depth])
        .find(|path| element_at(root, path).is_some_and(|el| el.is(&Tag::Table)))
        .ok_or_else(|| SortError::NoTable {
            header: header_id.to_string(),
        })?;

    let table = element_at_mut(root, table_path).ok_or_else(|| SortError::NoTable {
        header: header_id.to_string(),
    })?;
    let table_id = table.id.clone();

    let body = table
        .child_nodes_mut()
        .and_then(|children| children.iter_mut().find(|child| child.is(&Tag::TBody)))
        .ok_or(SortError::NoTableBody { table: table_id })?;

    let count = sort_rows(body, index, config)?;
    log::debug!("sorted {count} rows by column {index}");
    Ok(count)
}
