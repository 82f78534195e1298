//! Ordered collection of parsed records.

use std::ops::{Deref, DerefMut};

use super::Identified;

/// An ordered list of records produced by [`Model::parse_list`](super::Model::parse_list).
///
/// Dereferences to `Vec<T>`, so indexing, iteration and `len` work as they
/// do on a vector.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet<T>(Vec<T>);

impl<T> ResultSet<T> {
    /// Create an empty result set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create an empty result set with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Consume and return the underlying vector.
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T: Identified> ResultSet<T> {
    /// The identifiers of the members that have one, in member order.
    ///
    /// Members without an `id` are omitted.
    pub fn ids(&self) -> Vec<i64> {
        self.0.iter().filter_map(Identified::id).collect()
    }
}

impl<T> Default for ResultSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for ResultSet<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ResultSet<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> From<Vec<T>> for ResultSet<T> {
    fn from(records: Vec<T>) -> Self {
        Self(records)
    }
}

impl<T> FromIterator<T> for ResultSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for ResultSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ResultSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(Option<i64>);

    impl Identified for Item {
        fn id(&self) -> Option<i64> {
            self.0
        }
    }

    #[test]
    fn ids_skip_members_without_id() {
        let results: ResultSet<Item> = vec![Item(Some(5)), Item(None), Item(Some(9))].into();
        assert_eq!(results.len(), 3);
        assert_eq!(results.ids(), vec![5, 9]);
    }

    #[test]
    fn ids_of_empty_set() {
        let results: ResultSet<Item> = ResultSet::default();
        assert!(results.ids().is_empty());
    }

    #[test]
    fn behaves_like_a_vec() {
        let mut results: ResultSet<i32> = (1..=3).collect();
        results.push(4);

        assert_eq!(results[0], 1);
        assert_eq!(results.iter().sum::<i32>(), 10);
        assert_eq!(results.last(), Some(&4));

        let doubled: Vec<i32> = (&results).into_iter().map(|n| n * 2).collect();
        assert_eq!(doubled, vec![2, 4, 6, 8]);
        assert_eq!(results.into_inner(), vec![1, 2, 3, 4]);
    }
}
