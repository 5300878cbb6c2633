use std::fmt;

/// Capture table filled in while matching.
///
/// Slot `i` belongs to group id `i` and holds one entry per successful match
/// of that group, in match order. Slots are created the first time their
/// group matches; a slot that was never created reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures<'t> {
    slots: Vec<Vec<&'t str>>,
}

impl<'t> Captures<'t> {
    pub fn new() -> Self {
        Captures { slots: Vec::new() }
    }

    pub(crate) fn record(&mut self, id: usize, matched: &'t str) {
        if self.slots.len() <= id {
            self.slots.resize(id + 1, Vec::new());
        }
        self.slots[id].push(matched);
    }

    pub fn get(&self, id: usize) -> Option<&[&'t str]> {
        match self.slots.get(id) {
            Some(entries) if !entries.is_empty() => Some(entries),
            _ => None,
        }
    }

    /// Number of slots, i.e. one past the highest group id that matched.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[&'t str])> {
        self.slots
            .iter()
            .enumerate()
            .map(|(id, entries)| (id, entries.as_slice()))
    }

    pub fn to_vec(&self) -> Vec<Vec<&'t str>> {
        self.slots.clone()
    }
}

impl fmt::Display for Captures<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.slots)
    }
}
