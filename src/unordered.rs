//! Fixed-capacity vector whose element order carries no meaning.

/// Bounded collection with O(1) removal by swapping the last element into
/// the hole.  Never rely on the iteration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnorderedVec<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> UnorderedVec<T> {
    /// `capacity` is a logical cap only; storage grows on demand.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { items: Vec::new(), capacity }
    }

    /// Hands the item back when the collection is already full.
    pub fn push(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            return Err(item);
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove and return the element at `index`; the last element takes its
    /// slot.
    ///
    /// # Panics
    /// If `index` is out of range.
    pub fn swap_remove(&mut self, index: usize) -> T {
        self.items.swap_remove(index)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<'a, T> IntoIterator for &'a UnorderedVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
