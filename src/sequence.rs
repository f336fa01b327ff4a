//! The read-only integer sequence every strategy traverses.

use std::ops::Index;

/// Integers generated for one input size. Never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSequence {
    items: Vec<i32>,
}

impl InputSequence {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Forward cursor over the sequence.
    pub fn iter(&self) -> Cursor<'_> {
        Cursor {
            sequence: self,
            position: 0,
        }
    }

    /// Invokes `visit` once per element, in order.
    pub fn for_each<F: FnMut(i32)>(&self, mut visit: F) {
        let mut position = 0;
        while let Some(&item) = self.items.get(position) {
            visit(item);
            position += 1;
        }
    }

    /// Borrowed view of the backing storage. No copy is made.
    pub fn as_slice(&self) -> &[i32] {
        &self.items
    }
}

impl From<Vec<i32>> for InputSequence {
    fn from(items: Vec<i32>) -> Self {
        Self { items }
    }
}

impl Index<usize> for InputSequence {
    type Output = i32;

    fn index(&self, position: usize) -> &i32 {
        &self.items[position]
    }
}

impl<'a> IntoIterator for &'a InputSequence {
    type Item = i32;
    type IntoIter = Cursor<'a>;

    fn into_iter(self) -> Cursor<'a> {
        self.iter()
    }
}

/// Position-tracking cursor that fetches through the owning sequence.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    sequence: &'a InputSequence,
    position: usize,
}

impl Iterator for Cursor<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let item = self.sequence.items.get(self.position).copied()?;
        self.position += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sequence.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cursor<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_yields_elements_in_order() {
        let sequence = InputSequence::from(vec![3, -1, 7]);
        let mut cursor = sequence.iter();
        assert_eq!(cursor.len(), 3);
        assert_eq!(cursor.next(), Some(3));
        assert_eq!(cursor.len(), 2);
        assert_eq!(cursor.collect::<Vec<_>>(), vec![-1, 7]);
    }

    #[test]
    fn view_aliases_backing_storage() {
        let sequence = InputSequence::from(vec![1, 2, 3]);
        let view = sequence.as_slice();
        assert_eq!(view.as_ptr(), sequence.items.as_ptr());
        assert_eq!(view, &[1, 2, 3]);
    }

    #[test]
    fn empty_sequence_visits_nothing() {
        let sequence = InputSequence::default();
        let mut visits = 0;
        sequence.for_each(|_| visits += 1);
        assert_eq!(visits, 0);
        assert!(sequence.is_empty());
        assert_eq!(sequence.iter().next(), None);
    }
}
