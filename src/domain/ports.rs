use crate::utils::error::Result;
use std::cmp::Ordering;

/// A growable, index-addressable sequence.
///
/// Implementations keep elements in insertion order unless reordered by
/// [`CustomList::sort_by`]. Every index-taking operation validates its index
/// against the current length and reports
/// [`ListError::IndexOutOfBounds`](crate::ListError::IndexOutOfBounds) without
/// touching the list when it is out of range.
pub trait CustomList<T> {
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Appends `element` to the end of the list.
    fn add(&mut self, element: T);

    /// Inserts `element` at `index`, shifting later elements right.
    /// `index == len()` appends.
    fn insert(&mut self, index: usize, element: T) -> Result<()>;

    fn get(&self, index: usize) -> Result<&T>;

    /// Removes and returns the element at `index`, shifting later elements left.
    fn remove(&mut self, index: usize) -> Result<T>;

    fn clear(&mut self);

    fn len(&self) -> usize;

    fn iter(&self) -> Self::Iter<'_>;

    /// Stable sort: elements comparing equal keep their relative order.
    fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp);
    }

    fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|candidate| candidate == element)
    }

    fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(element).is_some()
    }

    /// Removes the first element equal to `element`. Returns whether one was found.
    fn remove_item(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(element) {
            Some(index) => self.remove(index).is_ok(),
            None => false,
        }
    }

    /// Copies the elements out in list order.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Element-wise equality against any other list implementation.
    fn content_eq<L>(&self, other: &L) -> bool
    where
        L: CustomList<T> + ?Sized,
        T: PartialEq,
    {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    /// Writes `data` and returns the full path written.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}
