use crate::capacity::{self, DEFAULT_CAPACITY};
use crate::error::{ContainerError, Result};
use crate::iterators::{EntryIntoIterator, EntryIterator, EntryMutIterator};
use std::borrow::Borrow;
use std::fmt::{self, Display};
use std::ops::{Index, IndexMut};

/// The search result reported by [`Container::find`] when no element matches.
pub const NOT_FOUND: isize = -1;

/// A growable, order-preserving container with swap-based removal.
///
/// Elements are appended at the end and keep their insertion order until
/// an element is removed; removal moves the last live element into the
/// vacated slot. Equal elements may be stored any number of times, and all
/// lookups are linear scans over the live elements.
#[derive(Debug)]
pub struct Container<TEntry> {
    /// The live elements. The allocation always holds at least `capacity` slots.
    storage: Vec<TEntry>,
    capacity: usize,
}

impl<TEntry> Container<TEntry> {
    /// Initializes a new, empty container with a capacity of one element.
    ///
    /// ## Examples
    /// ```
    /// use swap_container::Container;
    ///
    /// let mut c = Container::new();
    /// assert_eq!(c.capacity(), 1);
    ///
    /// c.add(42);
    /// assert_eq!(c.len(), 1);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Constructs a new, empty container with exactly `capacity` slots.
    ///
    /// It is important to note that although the returned container has the
    /// *capacity* specified, the container will have a zero *length*.
    ///
    /// ## Panics
    /// Will panic if the storage cannot be allocated. Use
    /// [`try_with_capacity`](Self::try_with_capacity) to get an error instead.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Constructs a new, empty container from a capacity of any primitive
    /// numeric type.
    ///
    /// ## Returns
    /// `ContainerError::InvalidCapacity` if the requested capacity is negative
    /// or not a whole number, and `ContainerError::AllocationFailed` if the
    /// storage cannot be allocated.
    ///
    /// ## Examples
    /// ```
    /// use swap_container::{Container, ContainerError};
    ///
    /// let c = Container::<&str>::try_with_capacity(8i32).unwrap();
    /// assert_eq!(c.capacity(), 8);
    ///
    /// let err = Container::<&str>::try_with_capacity(-1i32).unwrap_err();
    /// assert_eq!(err, ContainerError::InvalidCapacity("-1".to_string()));
    /// ```
    pub fn try_with_capacity<C>(capacity: C) -> Result<Self>
    where
        C: num_traits::ToPrimitive + Display,
    {
        let slots = capacity::slots_from(capacity)?;

        let mut storage = Vec::new();
        storage.try_reserve_exact(slots).map_err(|err| {
            tracing::debug!(slots, %err, "failed to allocate container storage");
            ContainerError::AllocationFailed(slots)
        })?;

        Ok(Self {
            storage,
            capacity: slots,
        })
    }

    /// Returns the number of live elements, also referred to as the
    /// container's 'length'.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the container holds no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the number of slots allocated for elements.
    ///
    /// The capacity is always at least the length and never shrinks,
    /// not even through [`clear`](Self::clear).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Grows the storage to exactly `min_capacity` slots if it is currently
    /// smaller. Live elements keep their indices.
    ///
    /// # Examples
    ///
    /// ```
    /// use swap_container::Container;
    ///
    /// let mut c = Container::<u32>::with_capacity(2);
    /// c.ensure_capacity(5);
    /// assert_eq!(c.capacity(), 5);
    ///
    /// // Never shrinks.
    /// c.ensure_capacity(3);
    /// assert_eq!(c.capacity(), 5);
    /// ```
    pub fn ensure_capacity(&mut self, min_capacity: usize) {
        if min_capacity <= self.capacity {
            return;
        }

        tracing::trace!(
            from = self.capacity,
            to = min_capacity,
            len = self.len(),
            "reallocating container storage"
        );

        let mut storage = Vec::with_capacity(min_capacity);
        storage.append(&mut self.storage);
        self.storage = storage;
        self.capacity = min_capacity;
    }

    /// Appends an element, doubling the capacity if the container is full.
    ///
    /// ## Returns
    /// The index the element was written to.
    ///
    /// # Examples
    ///
    /// ```
    /// use swap_container::Container;
    ///
    /// let mut c = Container::new();
    /// assert_eq!(c.add("a"), 0);
    /// assert_eq!(c.add("b"), 1);
    /// assert_eq!(c.add("c"), 2);
    /// assert_eq!(c.len(), 3);
    /// assert_eq!(c.capacity(), 4);
    /// ```
    pub fn add(&mut self, value: TEntry) -> usize {
        if self.len() == self.capacity {
            self.ensure_capacity(capacity::doubled(self.capacity));
        }

        let index = self.len();
        self.storage.push(value);
        index
    }

    /// Appends all elements in order, growing the storage at most once to
    /// exactly fit the new length.
    ///
    /// ## Returns
    /// `true` if at least one element was appended.
    ///
    /// # Examples
    ///
    /// ```
    /// use swap_container::Container;
    ///
    /// let mut c = Container::new();
    /// assert!(c.add_all(["a", "b", "c"]));
    /// assert_eq!(c.capacity(), 3);
    /// assert_eq!(c.as_slice(), &["a", "b", "c"]);
    /// ```
    pub fn add_all<I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = TEntry>,
        I::IntoIter: ExactSizeIterator,
    {
        let elements = elements.into_iter();
        let count = elements.len();
        let new_len = capacity::exact_fit(self.len(), count);
        if new_len >= self.capacity {
            self.ensure_capacity(new_len);
        }

        self.storage.extend(elements);

        // An iterator may under-report its length.
        self.capacity = self.capacity.max(self.storage.len());
        count > 0
    }

    /// Retrieves the element at the specified index.
    ///
    /// ## Returns
    /// `ContainerError::IndexOutOfBounds` unless `index < len()`, even if
    /// the capacity would allow it.
    ///
    /// # Examples
    ///
    /// ```
    /// use swap_container::Container;
    ///
    /// let mut c = Container::with_capacity(4);
    /// c.add("a");
    ///
    /// assert_eq!(c.at(0), Ok(&"a"));
    /// assert!(c.at(1).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<&TEntry> {
        self.storage
            .get(index)
            .ok_or(ContainerError::IndexOutOfBounds {
                index,
                len: self.len(),
            })
    }

    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&TEntry> {
        self.storage.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut TEntry> {
        self.storage.get_mut(index)
    }

    /// Returns the index of the most recently appended element.
    ///
    /// This is `len() - 1`, and `-1` for an empty container. After a removal
    /// the slot may hold a different element than the one last added.
    #[inline]
    pub fn last_added_index(&self) -> isize {
        self.len() as isize - 1
    }

    /// Removes the element at `index` by moving the last live element into
    /// its slot.
    ///
    /// ## Returns
    /// `true` if an element was removed; `false` if `index` is out of bounds,
    /// in which case the container is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use swap_container::Container;
    ///
    /// let mut c: Container<_> = vec!["a", "b", "c", "d"].into();
    ///
    /// assert!(c.remove_at(0));
    /// assert_eq!(c.as_slice(), &["d", "b", "c"]);
    ///
    /// assert!(!c.remove_at(3));
    /// assert_eq!(c.len(), 3);
    /// ```
    pub fn remove_at(&mut self, index: usize) -> bool {
        self.take_at(index).is_some()
    }

    /// Like [`remove_at`](Self::remove_at), but hands the removed element back.
    pub fn take_at(&mut self, index: usize) -> Option<TEntry> {
        if index >= self.len() {
            return None;
        }

        Some(self.storage.swap_remove(index))
    }

    /// Removes every element for which `keep` returns `false`.
    ///
    /// Removal uses the same swap strategy as [`remove_at`](Self::remove_at);
    /// a slot refilled by a swap is tested again, so every element is
    /// visited exactly once.
    ///
    /// ## Returns
    /// `true` if any element was removed.
    pub fn retain<F>(&mut self, mut keep: F) -> bool
    where
        F: FnMut(&TEntry) -> bool,
    {
        let before = self.len();
        let mut index = 0;
        while index < self.storage.len() {
            if keep(&self.storage[index]) {
                index += 1;
            } else {
                self.storage.swap_remove(index);
            }
        }

        self.len() != before
    }

    /// Drops all live elements. The allocated capacity is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use swap_container::Container;
    ///
    /// let mut c = Container::new();
    /// c.add_all([1, 2, 3, 4, 5]);
    /// c.clear();
    ///
    /// assert!(c.is_empty());
    /// assert_eq!(c.capacity(), 5);
    /// ```
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// Returns the live elements as a slice of exactly `len()` elements.
    #[inline]
    pub fn as_slice(&self) -> &[TEntry] {
        &self.storage
    }

    /// Produces an immutable enumerator over the live elements in index order.
    ///
    /// The container cannot be modified while the iterator is alive:
    ///
    /// ```compile_fail
    /// use swap_container::Container;
    ///
    /// let mut c: Container<_> = vec![1, 2, 3].into();
    /// for value in c.iter() {
    ///     c.remove_element(value);
    /// }
    /// ```
    ///
    /// ## Examples
    /// ```
    /// use swap_container::Container;
    ///
    /// let c: Container<_> = vec![20, 30, 40, 50].into();
    /// let vec: Vec<_> = c
    ///     .iter()
    ///     .filter(|&x| *x > 20 && *x < 50)
    ///     .map(|x| x * 2)
    ///     .collect();
    ///
    /// assert_eq!(vec, [60, 80]);
    ///```
    pub fn iter(&self) -> EntryIterator<'_, TEntry> {
        self.into_iter()
    }

    /// Produces a mutable enumerator over the live elements in index order.
    ///
    /// ## Examples
    /// ```
    /// use swap_container::Container;
    ///
    /// let mut c: Container<_> = vec![20, 30, 40, 50].into();
    /// for value in c.iter_mut().filter(|&&mut x| x > 20 && x < 50) {
    ///     *value *= 2;
    /// }
    ///
    /// assert_eq!(c.as_slice(), &[20, 60, 80, 50]);
    ///```
    pub fn iter_mut(&mut self) -> EntryMutIterator<'_, TEntry> {
        self.into_iter()
    }
}

impl<TEntry> Container<TEntry>
where
    TEntry: PartialEq,
{
    /// Returns the lowest index holding an element equal to `element`.
    ///
    /// # Examples
    ///
    /// ```
    /// use swap_container::Container;
    ///
    /// let c: Container<String> = vec!["a".to_string(), "b".to_string()].into();
    /// assert_eq!(c.position("b"), Some(1));
    /// assert_eq!(c.position("z"), None);
    /// ```
    pub fn position<Q>(&self, element: &Q) -> Option<usize>
    where
        TEntry: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.storage
            .iter()
            .position(|entry| Borrow::<Q>::borrow(entry) == element)
    }

    /// Returns the lowest index holding an element equal to `element`, or
    /// [`NOT_FOUND`] if there is none.
    pub fn find<Q>(&self, element: &Q) -> isize
    where
        TEntry: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(element)
            .map_or(NOT_FOUND, |index| index as isize)
    }

    /// Returns `true` if any live element equals `element`.
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        TEntry: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(element).is_some()
    }

    /// Returns `true` if every given element is contained. An empty input is
    /// trivially contained.
    pub fn contains_all<I>(&self, elements: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<TEntry>,
    {
        elements
            .into_iter()
            .all(|element| self.contains(Borrow::<TEntry>::borrow(&element)))
    }

    /// Removes the first (lowest-index) occurrence of `element` using swap
    /// removal.
    ///
    /// ## Returns
    /// `true` if an element was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use swap_container::Container;
    ///
    /// let mut c: Container<_> = vec!["a", "b", "a", "c"].into();
    ///
    /// assert!(c.remove_element("a"));
    /// assert_eq!(c.as_slice(), &["c", "b", "a"]);
    ///
    /// assert!(!c.remove_element("z"));
    /// ```
    pub fn remove_element<Q>(&mut self, element: &Q) -> bool
    where
        TEntry: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        match self.position(element) {
            Some(index) => self.remove_at(index),
            None => false,
        }
    }

    /// Removes one occurrence per given element. An element listed twice
    /// removes up to two occurrences; elements that are not contained are
    /// skipped.
    ///
    /// ## Returns
    /// `true` if any element was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use swap_container::Container;
    ///
    /// let mut c: Container<_> = vec![1, 1, 1, 2].into();
    ///
    /// assert!(c.remove_all([1, 1, 3]));
    /// assert_eq!(c.len(), 2);
    /// assert!(c.contains(&1));
    /// ```
    pub fn remove_all<I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<TEntry>,
    {
        let mut changed = false;
        for element in elements {
            changed |= self.remove_element(Borrow::<TEntry>::borrow(&element));
        }

        changed
    }

    /// Removes every live element that is not among the given elements.
    ///
    /// ## Returns
    /// `true` if any element was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use swap_container::Container;
    ///
    /// let mut c: Container<_> = vec!["a", "b", "c", "b", "d"].into();
    ///
    /// assert!(c.retain_all(["b", "d"]));
    /// assert_eq!(c.len(), 3);
    /// assert!(!c.contains("a"));
    /// assert!(!c.contains("c"));
    /// ```
    pub fn retain_all<I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<TEntry>,
    {
        let retained: Vec<I::Item> = elements.into_iter().collect();
        self.retain(|entry| {
            retained
                .iter()
                .any(|element| Borrow::<TEntry>::borrow(element) == entry)
        })
    }
}

impl<TEntry> Container<TEntry>
where
    TEntry: Clone,
{
    /// Copies the live elements into a new `Vec`.
    pub fn to_vec(&self) -> Vec<TEntry> {
        self.storage.clone()
    }
}

impl<TEntry> Default for Container<TEntry> {
    fn default() -> Self {
        Container::new()
    }
}

impl<TEntry> Clone for Container<TEntry>
where
    TEntry: Clone,
{
    fn clone(&self) -> Self {
        let mut storage = Vec::with_capacity(self.capacity);
        storage.extend_from_slice(&self.storage);
        Self {
            storage,
            capacity: self.capacity,
        }
    }
}

/// Containers are equal if they have the same capacity and equal live
/// elements in the same order.
impl<TEntry, TOther> PartialEq<Container<TOther>> for Container<TEntry>
where
    TEntry: PartialEq<TOther>,
{
    fn eq(&self, other: &Container<TOther>) -> bool {
        self.capacity == other.capacity && self.storage == other.storage
    }
}

impl<TEntry> Eq for Container<TEntry> where TEntry: Eq {}

/// Renders the live elements as `[e0, e1, ..., en]`.
impl<TEntry> Display for Container<TEntry>
where
    TEntry: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, entry) in self.storage.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{entry}")?;
        }
        f.write_str("]")
    }
}

impl<TEntry> Index<usize> for Container<TEntry> {
    type Output = TEntry;

    /// ## Panics
    /// Will panic if `index` is not below `len()`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.storage[index]
    }
}

impl<TEntry> IndexMut<usize> for Container<TEntry> {
    /// ## Panics
    /// Will panic if `index` is not below `len()`.
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.storage[index]
    }
}

impl<TEntry> AsRef<[TEntry]> for Container<TEntry> {
    fn as_ref(&self) -> &[TEntry] {
        self.as_slice()
    }
}

/// The capacity of the new container equals the length of the vector.
impl<TEntry> From<Vec<TEntry>> for Container<TEntry> {
    fn from(vec: Vec<TEntry>) -> Self {
        let capacity = vec.len();
        Self {
            storage: vec,
            capacity,
        }
    }
}

impl<TEntry> FromIterator<TEntry> for Container<TEntry> {
    fn from_iter<TIter: IntoIterator<Item = TEntry>>(iter: TIter) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

/// Appends element by element, following the growth policy of [`Container::add`].
impl<TEntry> Extend<TEntry> for Container<TEntry> {
    fn extend<TIter: IntoIterator<Item = TEntry>>(&mut self, iter: TIter) {
        for entry in iter {
            self.add(entry);
        }
    }
}

impl<TEntry> IntoIterator for Container<TEntry> {
    type Item = TEntry;
    type IntoIter = EntryIntoIterator<TEntry>;

    fn into_iter(self) -> Self::IntoIter {
        EntryIntoIterator {
            entries: self.storage.into_iter(),
        }
    }
}

impl<'a, TEntry> IntoIterator for &'a Container<TEntry> {
    type Item = &'a TEntry;
    type IntoIter = EntryIterator<'a, TEntry>;

    fn into_iter(self) -> Self::IntoIter {
        EntryIterator {
            current: 0,
            entries: &self.storage,
        }
    }
}

impl<'a, TEntry> IntoIterator for &'a mut Container<TEntry> {
    type Item = &'a mut TEntry;
    type IntoIter = EntryMutIterator<'a, TEntry>;

    fn into_iter(self) -> Self::IntoIter {
        EntryMutIterator {
            entries: self.storage.iter_mut(),
        }
    }
}
