//! Fixed-capacity tabu list.

/// Circular buffer of the `capacity` most recent entries.
///
/// Each [`record`](Self::record) overwrites the oldest slot. Slots that
/// have never been written are empty and match nothing.
///
/// # Examples
///
/// ```
/// use u_tsp::tabu::TabuMemory;
///
/// let mut memory = TabuMemory::new(2);
/// memory.record(1);
/// memory.record(2);
/// memory.record(3); // evicts 1
/// assert!(!memory.contains(&1));
/// assert!(memory.contains(&2) && memory.contains(&3));
/// ```
#[derive(Debug, Clone)]
pub struct TabuMemory<T> {
    slots: Vec<Option<T>>,
    cursor: usize,
}

impl<T> TabuMemory<T> {
    /// Creates an empty memory.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "tabu memory capacity must be positive");
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots, cursor: 0 }
    }

    /// Stores `entry` in the slot at the write cursor and advances it.
    pub fn record(&mut self, entry: T) {
        self.slots[self.cursor] = Some(entry);
        self.cursor = (self.cursor + 1) % self.slots.len();
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of filled slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Filled slots in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().flatten()
    }
}

impl<T: PartialEq> TabuMemory<T> {
    /// Whether any filled slot equals `entry`.
    pub fn contains(&self, entry: &T) -> bool {
        self.iter().any(|e| e == entry)
    }
}
