use crate::domain::ports::CustomList;
use crate::utils::error::{ListError, Result};
use std::cmp::Ordering;
use std::fmt;

pub const DEFAULT_CAPACITY: usize = 7;

/// A list backed by a fixed-size slot buffer that doubles when full.
///
/// Slots `[0, size)` are always occupied; every slot past `size` is empty.
#[derive(Clone)]
pub struct CustomArrayList<T> {
    elements: Box<[Option<T>]>,
    size: usize,
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> CustomArrayList<T> {
    /// Creates an empty list with room for [`DEFAULT_CAPACITY`] elements.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty list with room for `capacity` elements (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: empty_slots(capacity.max(1)),
            size: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.elements.len()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            inner: self.elements[..self.size].iter_mut(),
        }
    }

    fn check_element_index(&self, index: usize) -> Result<()> {
        if index >= self.size {
            return Err(ListError::index_out_of_bounds(index, self.size));
        }
        Ok(())
    }

    fn increase_capacity(&mut self) {
        let new_capacity = self.elements.len() * 2;
        let mut grown = empty_slots(new_capacity);
        for (target, source) in grown.iter_mut().zip(self.elements.iter_mut()) {
            *target = source.take();
        }
        self.elements = grown;
        tracing::trace!(new_capacity, "grew array list buffer");
    }

    /// Takes the element at `index` and shifts the tail left over the hole.
    fn remove_at_index(&mut self, index: usize) -> Option<T> {
        let removed = self.elements[index].take();
        self.elements[index..self.size].rotate_left(1);
        self.size -= 1;
        removed
    }
}

/// Merges the sorted runs `source[start..mid]` and `source[mid..end]` into
/// `target[start..end]`. Ties take from the left run.
fn merge_runs<T, F>(
    source: &mut [Option<T>],
    target: &mut [Option<T>],
    start: usize,
    mid: usize,
    end: usize,
    compare: &mut F,
) where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut i = start;
    let mut j = mid;

    for slot in &mut target[start..end] {
        let take_left = if i >= mid {
            false
        } else if j >= end {
            true
        } else {
            match (&source[i], &source[j]) {
                (Some(left), Some(right)) => compare(left, right) != Ordering::Greater,
                _ => true,
            }
        };

        if take_left {
            *slot = source[i].take();
            i += 1;
        } else {
            *slot = source[j].take();
            j += 1;
        }
    }
}

impl<T> CustomList<T> for CustomArrayList<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn add(&mut self, element: T) {
        if self.size == self.elements.len() {
            self.increase_capacity();
        }
        self.elements[self.size] = Some(element);
        self.size += 1;
    }

    fn insert(&mut self, index: usize, element: T) -> Result<()> {
        if index > self.size {
            return Err(ListError::index_out_of_bounds(index, self.size));
        }
        if self.size == self.elements.len() {
            self.increase_capacity();
        }
        self.elements[self.size] = Some(element);
        self.elements[index..=self.size].rotate_right(1);
        self.size += 1;
        Ok(())
    }

    fn get(&self, index: usize) -> Result<&T> {
        self.check_element_index(index)?;
        self.elements[index]
            .as_ref()
            .ok_or_else(|| ListError::index_out_of_bounds(index, self.size))
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        self.check_element_index(index)?;
        let size = self.size;
        self.remove_at_index(index)
            .ok_or_else(|| ListError::index_out_of_bounds(index, size))
    }

    fn clear(&mut self) {
        for slot in &mut self.elements[..self.size] {
            *slot = None;
        }
        self.size = 0;
    }

    fn len(&self) -> usize {
        self.size
    }

    fn iter(&self) -> Self::Iter<'_> {
        Iter {
            inner: self.elements[..self.size].iter(),
        }
    }

    /// Bottom-up merge sort: runs of width 1, 2, 4, ... are merged between
    /// the live elements and a scratch buffer until one run covers the list.
    fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let size = self.size;
        if size <= 1 {
            return;
        }

        let mut source: Vec<Option<T>> = self.elements[..size]
            .iter_mut()
            .map(Option::take)
            .collect();
        let mut target: Vec<Option<T>> = std::iter::repeat_with(|| None).take(size).collect();
        let mut block_size = 1;

        while block_size < size {
            let mut start = 0;
            while start < size {
                let mid = (start + block_size).min(size);
                let end = (start + 2 * block_size).min(size);
                merge_runs(&mut source, &mut target, start, mid, end, &mut compare);
                start += 2 * block_size;
            }

            std::mem::swap(&mut source, &mut target);
            block_size *= 2;
        }

        for (slot, element) in self.elements.iter_mut().zip(source) {
            *slot = element;
        }
    }
}

impl<T> Default for CustomArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for CustomArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for CustomArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.content_eq(other)
    }
}

impl<T: Eq> Eq for CustomArrayList<T> {}

impl<T> Extend<T> for CustomArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T> FromIterator<T> for CustomArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

pub struct IterMut<'a, T> {
    inner: std::slice::IterMut<'a, Option<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().and_then(Option::as_mut)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

pub struct IntoIter<T> {
    inner: std::vec::IntoIter<Option<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for CustomArrayList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut elements = self.elements.into_vec();
        elements.truncate(self.size);
        IntoIter {
            inner: elements.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a CustomArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut CustomArrayList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
