use crate::Reflect;

// -----------------------------------------------------------------------------
// List

/// A growable, ordered sequence.
///
/// ```
/// use jp_reflect::ops::List;
///
/// let list: &dyn List = &vec![10_u16, 20];
/// assert_eq!(list.get(1).unwrap().downcast_ref::<u16>(), Some(&20));
/// assert!(list.get(2).is_none());
/// ```
pub trait List: Reflect {
    /// Returns the element at `index`, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl dyn List {
    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// Array

/// A fixed-size, ordered sequence.
pub trait Array: Reflect {
    /// Returns the element at `index`, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// -----------------------------------------------------------------------------
// ListItemIter

/// An iterator over the elements of a [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> ListItemIter<'a> {
    #[inline(always)]
    pub const fn new(list: &'a dyn List) -> Self {
        Self { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index)?;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ListItemIter<'_> {}
