//! Cyclic navigation over an ordered sequence.

/// Owns an ordered sequence and a current position within it.
///
/// Navigation wraps in both directions and never fails. With no items, there
/// is no current position and every transition is a no-op.
///
/// # Examples
///
/// ```
/// use wayfarer_gallery::SlideNavigator;
///
/// let mut nav = SlideNavigator::new(vec!['a', 'b', 'c']);
/// assert_eq!(nav.current(), Some(&'a'));
///
/// nav.previous();
/// assert_eq!(nav.current(), Some(&'c'));
/// nav.next();
/// nav.next();
/// assert_eq!(nav.current_index(), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideNavigator<T> {
    items: Vec<T>,
    current: usize,
}

impl<T> SlideNavigator<T> {
    /// Creates a navigator positioned at the first item.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self { items, current: 0 }
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the current position, or `None` if empty.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.current)
    }

    /// Returns the current item, or `None` if empty.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.current)
    }

    /// Returns all items in order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Advances to the next item, wrapping to the first after the last.
    pub fn next(&mut self) {
        if !self.items.is_empty() {
            self.current = (self.current + 1) % self.items.len();
        }
    }

    /// Steps back to the previous item, wrapping to the last before the first.
    pub fn previous(&mut self) {
        let len = self.items.len();
        if len != 0 {
            self.current = (self.current + len - 1) % len;
        }
    }

    /// Jumps to `index`. Returns `false` and stays put if it is out of range.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.current = index;
            true
        } else {
            false
        }
    }
}
