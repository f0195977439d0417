use crate::domain::ports::CustomList;
use crate::utils::error::{ListError, Result};
use std::cmp::Ordering;
use std::fmt;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    data: T,
    next: Link<T>,
}

/// A singly linked list with a cached length.
pub struct CustomLinkedList<T> {
    head: Link<T>,
    size: usize,
}

impl<T> CustomLinkedList<T> {
    pub fn new() -> Self {
        Self {
            head: None,
            size: 0,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
            remaining: self.size,
        }
    }

    /// The link that holds the node at `index`, or the trailing `None` when
    /// `index == size`.
    fn link_at(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }

    /// Keeps the first `count` nodes of `head` and detaches the rest.
    fn split_after(head: &mut Link<T>, count: usize) -> Link<T> {
        let mut link = head;
        for _ in 0..count {
            link = &mut link.as_mut()?.next;
        }
        link.take()
    }

    /// Appends `node` at `tail` and returns the new tail link.
    fn push_at(tail: &mut Link<T>, mut node: Box<Node<T>>) -> &mut Link<T> {
        node.next = None;
        &mut tail.insert(node).next
    }

    /// Stably merges two sorted chains onto `tail`, returning the last link.
    fn merge_onto<'a, F>(
        mut tail: &'a mut Link<T>,
        mut left: Link<T>,
        mut right: Link<T>,
        compare: &mut F,
    ) -> &'a mut Link<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        loop {
            let take_left = match (&left, &right) {
                (Some(l), Some(r)) => compare(&l.data, &r.data) != Ordering::Greater,
                _ => break,
            };
            let source = if take_left { &mut left } else { &mut right };
            if let Some(mut node) = source.take() {
                *source = node.next.take();
                tail = Self::push_at(tail, node);
            }
        }

        let mut remaining = left.or(right);
        while let Some(mut node) = remaining {
            remaining = node.next.take();
            tail = Self::push_at(tail, node);
        }
        tail
    }
}

impl<T> CustomList<T> for CustomLinkedList<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn add(&mut self, element: T) {
        let size = self.size;
        if let Some(link) = self.link_at(size) {
            *link = Some(Box::new(Node {
                data: element,
                next: None,
            }));
            self.size += 1;
        }
    }

    fn insert(&mut self, index: usize, element: T) -> Result<()> {
        let size = self.size;
        if index > size {
            return Err(ListError::index_out_of_bounds(index, size));
        }
        let link = self
            .link_at(index)
            .ok_or_else(|| ListError::index_out_of_bounds(index, size))?;
        let next = link.take();
        *link = Some(Box::new(Node {
            data: element,
            next,
        }));
        self.size += 1;
        Ok(())
    }

    fn get(&self, index: usize) -> Result<&T> {
        if index >= self.size {
            return Err(ListError::index_out_of_bounds(index, self.size));
        }
        self.iter()
            .nth(index)
            .ok_or_else(|| ListError::index_out_of_bounds(index, self.size))
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        let size = self.size;
        if index >= size {
            return Err(ListError::index_out_of_bounds(index, size));
        }
        let link = self
            .link_at(index)
            .ok_or_else(|| ListError::index_out_of_bounds(index, size))?;
        let node = link
            .take()
            .ok_or_else(|| ListError::index_out_of_bounds(index, size))?;
        let Node { data, next } = *node;
        *link = next;
        self.size -= 1;
        Ok(data)
    }

    fn clear(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        self.size = 0;
    }

    fn len(&self) -> usize {
        self.size
    }

    fn iter(&self) -> Self::Iter<'_> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.size,
        }
    }

    /// Bottom-up merge sort over the node chain: each pass cuts runs of
    /// `block_size` nodes, merges neighbouring pairs and relinks them, doubling
    /// `block_size` until a single run remains. Nodes are relinked, never moved.
    fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut block_size = 1;

        while block_size < self.size {
            let mut rest = self.head.take();
            let mut tail = &mut self.head;

            while rest.is_some() {
                let mut left = rest;
                let mut right = Self::split_after(&mut left, block_size);
                rest = Self::split_after(&mut right, block_size);
                tail = Self::merge_onto(tail, left, right, &mut compare);
            }

            block_size *= 2;
        }
    }
}

impl<T> Drop for CustomLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for CustomLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for CustomLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for CustomLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for CustomLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.content_eq(other)
    }
}

impl<T: Eq> Eq for CustomLinkedList<T> {}

impl<T> Extend<T> for CustomLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let size = self.size;
        let Some(mut tail) = self.link_at(size) else {
            return;
        };
        let mut added = 0;
        for element in iter {
            tail = Self::push_at(
                tail,
                Box::new(Node {
                    data: element,
                    next: None,
                }),
            );
            added += 1;
        }
        self.size += added;
    }
}

impl<T> FromIterator<T> for CustomLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining = self.remaining.saturating_sub(1);
            &node.data
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            self.remaining = self.remaining.saturating_sub(1);
            &mut node.data
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

pub struct IntoIter<T>(CustomLinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.head.take().map(|node| {
            let Node { data, next } = *node;
            self.0.head = next;
            self.0.size -= 1;
            data
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.size, Some(self.0.size))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for CustomLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a CustomLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut CustomLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::array_list::CustomArrayList;

    #[test]
    fn test_add_and_get() {
        let mut list = CustomLinkedList::new();
        list.add("Apple");
        list.add("Banana");
        list.insert(0, "Cucumber").unwrap();
        assert_eq!(*list.get(0).unwrap(), "Cucumber");
        assert_eq!(*list.get(1).unwrap(), "Apple");
        assert_eq!(*list.get(2).unwrap(), "Banana");
    }

    #[test]
    fn test_size() {
        let mut list = CustomLinkedList::new();
        assert_eq!(list.len(), 0);
        list.add("A");
        list.add("B");
        assert_eq!(list.len(), 2);
        list.remove(0).unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut list = CustomLinkedList::new();
        list.add("A");
        list.add("B");
        list.add("C");
        list.add("D");
        assert!(list.remove_item(&"B"));
        assert_eq!(list.remove(2).unwrap(), "D");
        assert_eq!(*list.get(0).unwrap(), "A");
        assert_eq!(*list.get(1).unwrap(), "C");
        assert!(!list.remove_item(&"D"));
    }

    #[test]
    fn test_remove_head_and_tail() {
        let mut list: CustomLinkedList<i32> = (1..=3).collect();
        assert_eq!(list.remove(0).unwrap(), 1);
        assert_eq!(list.remove(1).unwrap(), 3);
        assert_eq!(list.to_vec(), vec![2]);
        assert!(list.remove_item(&2));
        assert!(list.is_empty());
        assert!(!list.remove_item(&2));
    }

    #[test]
    fn test_out_of_range() {
        let mut list: CustomLinkedList<i32> = (1..=2).collect();
        assert_eq!(
            list.get(2).unwrap_err().to_string(),
            "Requested index: 2, but size: 2"
        );
        assert!(list.insert(3, 0).is_err());
        assert!(list.remove(5).is_err());
        assert_eq!(list.to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_clear() {
        let mut list = CustomLinkedList::new();
        list.add("A");
        list.add("B");
        list.add("C");
        list.clear();
        assert_eq!(list.len(), 0);
        assert!(list.iter().next().is_none());
    }

    #[test]
    fn test_equals() {
        let list1: CustomLinkedList<&str> = ["apple", "banana", "cherry"].into_iter().collect();
        let list2: CustomLinkedList<&str> = ["apple", "banana", "cherry"].into_iter().collect();
        let list3: CustomLinkedList<&str> = ["apple", "cherry"].into_iter().collect();

        assert_eq!(list1, list2);
        assert_ne!(list1, list3);
    }

    #[test]
    fn test_content_eq_across_implementations() {
        let linked: CustomLinkedList<i32> = (0..5).collect();
        let array: CustomArrayList<i32> = (0..5).collect();
        let shorter: CustomArrayList<i32> = (0..4).collect();

        assert!(linked.content_eq(&array));
        assert!(array.content_eq(&linked));
        assert!(!linked.content_eq(&shorter));
    }

    #[test]
    fn test_to_vec() {
        let mut list = CustomLinkedList::new();
        list.add("One");
        list.add("Two");
        let array = list.to_vec();
        assert_eq!(array[0], "One");
        assert_eq!(array[1], "Two");
    }

    #[test]
    fn test_sort() {
        let mut list = CustomLinkedList::new();
        for value in [20, 19, 17, 15, 14, 12, 21, 0] {
            list.add(value);
        }
        list.sort_by(|a: &i32, b: &i32| a.cmp(b));
        assert_eq!(*list.get(0).unwrap(), 0);
        assert_eq!(*list.get(2).unwrap(), 14);
        assert_eq!(*list.get(7).unwrap(), 21);
        assert_eq!(list.len(), 8);
    }

    #[test]
    fn test_sort_lengths_that_are_not_powers_of_two() {
        for len in 0..40 {
            let mut list: CustomLinkedList<i64> = (0..len).map(|v| (v * 7919) % 31).collect();
            let mut expected = list.to_vec();
            expected.sort();
            list.sort();
            assert_eq!(list.to_vec(), expected, "length {}", len);
            assert_eq!(list.len(), expected.len());
        }
    }

    #[test]
    fn test_sort_is_stable() {
        let mut list: CustomLinkedList<(i32, char)> =
            [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')].into_iter().collect();
        list.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(
            list.to_vec(),
            vec![(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]
        );
    }

    #[test]
    fn test_sort_descending_then_append() {
        let mut list: CustomLinkedList<i32> = [3, 1, 2].into_iter().collect();
        list.sort_by(|a, b| b.cmp(a));
        list.add(0);
        assert_eq!(list.to_vec(), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_iterators() {
        let mut list: CustomLinkedList<i32> = (1..=3).collect();
        assert_eq!(list.iter().len(), 3);
        for value in &mut list {
            *value += 1;
        }
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn test_iterators_report_exact_length() {
        let mut list: CustomLinkedList<i32> = (1..=4).collect();

        let mut iter_mut = list.iter_mut();
        assert_eq!(iter_mut.len(), 4);
        iter_mut.next();
        assert_eq!(iter_mut.len(), 3);
        assert_eq!(iter_mut.size_hint(), (3, Some(3)));

        let mut into_iter = list.into_iter();
        assert_eq!(into_iter.len(), 4);
        into_iter.next();
        assert_eq!(into_iter.len(), 3);
    }

    #[test]
    fn test_clone_is_independent() {
        let original: CustomLinkedList<String> =
            ["a", "b"].iter().map(|s| s.to_string()).collect();
        let mut copy = original.clone();
        copy.add("c".to_string());
        assert_eq!(original.len(), 2);
        assert_eq!(copy.len(), 3);
    }

    #[test]
    fn test_dropping_long_list_does_not_overflow() {
        let list: CustomLinkedList<u32> = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
        drop(list);
    }
}
