//! Small collection helpers used by hit testing and data preparation.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::error::{GraphError, GraphResult};

/// Extension methods for slices.
pub trait SliceExt<T> {
    /// Index of the minimum element under a strict "less than" comparator.
    ///
    /// The first minimal element wins when several compare equal. Returns
    /// `None` for an empty slice.
    fn min_index_by(&self, less: impl FnMut(&T, &T) -> bool) -> Option<usize>;

    /// Clone the elements at `indices`, in the order given.
    ///
    /// Panics if an index is out of bounds.
    fn pick(&self, indices: &[usize]) -> Vec<T>
    where
        T: Clone;

    /// Sort with a priority override.
    ///
    /// Elements for which `priority` returns an index come first, ordered by
    /// that index. The remaining elements follow, ordered by `less`.
    fn sorted_with_priority(
        &self,
        less: impl FnMut(&T, &T) -> bool,
        priority: impl FnMut(&T) -> Option<usize>,
    ) -> Vec<T>
    where
        T: Clone;
}

impl<T> SliceExt<T> for [T] {
    fn min_index_by(&self, mut less: impl FnMut(&T, &T) -> bool) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let mut min_index = 0;
        for index in 1..self.len() {
            if less(&self[index], &self[min_index]) {
                min_index = index;
            }
        }
        Some(min_index)
    }

    fn pick(&self, indices: &[usize]) -> Vec<T>
    where
        T: Clone,
    {
        indices.iter().map(|&index| self[index].clone()).collect()
    }

    fn sorted_with_priority(
        &self,
        mut less: impl FnMut(&T, &T) -> bool,
        mut priority: impl FnMut(&T) -> Option<usize>,
    ) -> Vec<T>
    where
        T: Clone,
    {
        let mut keyed: Vec<(Option<usize>, &T)> =
            self.iter().map(|item| (priority(item), item)).collect();
        keyed.sort_by(|(lp, lhs), (rp, rhs)| match (lp, rp) {
            (Some(l), Some(r)) => l.cmp(r),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => {
                if less(lhs, rhs) {
                    Ordering::Less
                } else if less(rhs, lhs) {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            }
        });
        keyed.into_iter().map(|(_, item)| item.clone()).collect()
    }
}

/// Set of elements present in both sequences.
pub fn intersection<T, A, B>(a: A, b: B) -> HashSet<T>
where
    T: Eq + Hash,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let right: HashSet<T> = b.into_iter().collect();
    a.into_iter().filter(|item| right.contains(item)).collect()
}

/// Set of elements present in either sequence.
pub fn union<T, A, B>(a: A, b: B) -> HashSet<T>
where
    T: Eq + Hash,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    a.into_iter().chain(b).collect()
}

/// Sub-map holding only the requested keys that exist in `map`.
pub fn pick_keys<K, V>(map: &HashMap<K, V>, keys: &[K]) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    keys.iter()
        .filter_map(|key| map.get(key).map(|value| (key.clone(), value.clone())))
        .collect()
}

/// Parse a floating point number, reporting the offending text on failure.
pub fn parse_number(text: &str) -> GraphResult<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| GraphError::InvalidNumber(text.to_string()))
}
