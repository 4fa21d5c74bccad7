//! Click-to-sort for tables in a [`tabledom::Document`].
//!
//! [`ColumnSortBinder::initialize`] attaches a click listener to every header
//! cell. Clicking a header reorders the rows of its table body, ascending, by
//! the text of the matching cell in each row. Cells that read as numbers
//! (`"12"`, `"12 items"`, `"$12"`) compare numerically; any pair where one
//! side is not a number compares as text.

pub mod binder;
pub mod compare;
pub mod config;
pub mod error;
pub mod logging;
pub mod order;
pub mod value;

pub use binder::{Binding, ColumnSortBinder, on_header_click};
pub use compare::{SortKey, compare_keys};
pub use config::BinderConfig;
pub use error::SortError;
pub use order::{sort_rows, stable_sort_by};
pub use value::{parse_digits, parse_leading_number, parse_number};
