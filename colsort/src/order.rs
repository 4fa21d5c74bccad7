//! Reordering rows in place.

use std::cmp::Ordering;

use tabledom::{Element, Tag};

use crate::compare::{SortKey, compare_keys};
use crate::config::BinderConfig;
use crate::error::SortError;

/// Stable insertion sort over owned items.
///
/// Each item walks left only while its predecessor compares `Greater`, so
/// only neighbours are ever compared. With an antisymmetric comparator that
/// holds even when the order is not transitive (the mixed number/text rule):
/// every adjacent pair of the result is in order, input whose adjacent pairs
/// are already in order comes back unchanged, and nothing panics.
pub fn stable_sort_by<T, F>(mut items: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
    items
}

/// Sort the `tr` children of `body` ascending by the cell at `index`.
///
/// Row elements are moved, not copied. Other children of the body stay in
/// their positions. Keys are extracted before anything moves, so an
/// out-of-range index leaves the body untouched. Returns the row count.
pub fn sort_rows(body: &mut Element, index: usize, config: &BinderConfig) -> Result<usize, SortError> {
    let Some(children) = body.child_nodes_mut() else {
        return Ok(0);
    };

    let keys = children
        .iter()
        .filter(|child| child.is(&Tag::Tr))
        .map(|row| SortKey::from_row(row, index, config))
        .collect::<Result<Vec<_>, _>>()?;
    let count = keys.len();

    let mut slots = Vec::with_capacity(children.len());
    let mut rows = Vec::with_capacity(count);
    for child in children.drain(..) {
        if child.is(&Tag::Tr) {
            rows.push(child);
            slots.push(None);
        } else {
            slots.push(Some(child));
        }
    }

    let keyed: Vec<(SortKey, Element)> = keys.into_iter().zip(rows).collect();
    let mut sorted = stable_sort_by(keyed, |a, b| compare_keys(&a.0, &b.0))
        .into_iter()
        .map(|(_, row)| row);

    children.extend(slots.into_iter().filter_map(|slot| slot.or_else(|| sorted.next())));

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_integers() {
        let sorted = stable_sort_by(vec![5, 3, 9, 1, 3, 0], |a, b| a.cmp(b));
        assert_eq!(sorted, [0, 1, 3, 3, 5, 9]);
    }

    #[test]
    fn test_is_stable() {
        let items = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        let sorted = stable_sort_by(items, |a, b| a.0.cmp(&b.0));
        assert_eq!(sorted, [(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]);
    }

    #[test]
    fn test_inconsistent_comparator_keeps_every_item() {
        let mut calls = 0u32;
        let sorted = stable_sort_by((0..50).collect(), |a: &i32, b: &i32| {
            calls += 1;
            if (a + b + calls as i32) % 3 == 0 {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        });
        let mut check = sorted.clone();
        check.sort();
        assert_eq!(check, (0..50).collect::<Vec<_>>());
    }

    /// Every ordering of `items`, by Heap's algorithm.
    fn permutations(items: &mut [SortKey], k: usize, out: &mut Vec<Vec<SortKey>>) {
        if k <= 1 {
            out.push(items.to_vec());
            return;
        }
        for i in 0..k {
            permutations(items, k - 1, out);
            let swap_with = if k % 2 == 0 { i } else { 0 };
            items.swap(swap_with, k - 1);
        }
    }

    #[test]
    fn test_cyclic_mixed_column_is_idempotent() {
        // "$50" < "%" < "10" < "$50": text, text, then numeric
        let config = BinderConfig::default();
        let mut keys: Vec<SortKey> = ["$50", "%", "10", "a", "9", "#"]
            .into_iter()
            .map(|text| SortKey::new(text, &config))
            .collect();
        let mut all = Vec::new();
        let len = keys.len();
        permutations(&mut keys, len, &mut all);
        assert_eq!(all.len(), 720);

        for input in all {
            let once = stable_sort_by(input, compare_keys);
            for pair in once.windows(2) {
                assert_ne!(compare_keys(&pair[0], &pair[1]), Ordering::Greater);
            }
            let twice = stable_sort_by(once.clone(), compare_keys);
            assert_eq!(twice, once);
        }
    }

    #[test]
    fn test_empty_and_single() {
        assert!(stable_sort_by(Vec::<u8>::new(), |a, b| a.cmp(b)).is_empty());
        assert_eq!(stable_sort_by(vec![7], |a, b| a.cmp(b)), [7]);
    }
}
