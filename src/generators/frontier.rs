use std::collections::HashMap;
use std::hash::Hash;

use rand::Rng;

/// A set supporting O(1) insertion, membership, removal and uniform random sampling.
///
/// Items live in a dense vector for sampling; a map from item to its vector slot handles
/// membership and removal. Removing swaps the last item into the freed slot.
#[derive(Debug, Clone)]
pub struct FrontierSet<T> {
    items: Vec<T>,
    slots: HashMap<T, usize>,
}

impl<T: Copy + Eq + Hash> FrontierSet<T> {
    pub fn new() -> Self {
        FrontierSet {
            items: Vec::new(),
            slots: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.slots.contains_key(item)
    }

    /// Adds an item. Returns `false` if it was already present.
    pub fn insert(&mut self, item: T) -> bool {
        if self.slots.contains_key(&item) {
            return false;
        }
        self.slots.insert(item, self.items.len());
        self.items.push(item);
        true
    }

    /// Removes an item. Returns `false` if it was not present.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.slots.remove(item) {
            Some(slot) => {
                self.items.swap_remove(slot);
                if let Some(&moved) = self.items.get(slot) {
                    self.slots.insert(moved, slot);
                }
                true
            }
            None => false,
        }
    }

    /// Removes and returns a uniformly chosen item, or `None` if the set is empty.
    ///
    /// Draws exactly one value from `rng` when the set is non-empty and none otherwise.
    pub fn take_random<R: Rng>(&mut self, rng: &mut R) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let item = self.items[rng.random_range(0..self.items.len())];
        self.remove(&item);
        Some(item)
    }
}

impl<T: Copy + Eq + Hash> Default for FrontierSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Eq + Hash> FromIterator<T> for FrontierSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = FrontierSet::new();
        iter.into_iter().for_each(|item| {
            set.insert(item);
        });
        set
    }
}
