//! Ordered chunk sequence that shrinks as fields are extracted.
//!
//! Slots are never reallocated: removing a chunk only clears its slot, so
//! indices handed out by the traversal helpers stay valid while the
//! classifier removes or rewrites chunks.

/// An index-based chunk sequence with a per-slot active marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkList {
    slots: Vec<Option<String>>,
}

impl ChunkList {
    pub fn new(chunks: impl IntoIterator<Item = String>) -> Self {
        Self {
            slots: chunks.into_iter().map(Some).collect(),
        }
    }

    /// Number of active chunks.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Payload of the chunk in slot `idx`, if still active.
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.slots.get(idx)?.as_deref()
    }

    /// Deactivate the chunk in slot `idx`.
    pub fn remove(&mut self, idx: usize) -> Option<String> {
        self.slots.get_mut(idx)?.take()
    }

    /// Replace the payload of an active chunk in place.
    pub fn replace(&mut self, idx: usize, payload: String) {
        if let Some(slot) = self.slots.get_mut(idx).filter(|slot| slot.is_some()) {
            *slot = Some(payload);
        }
    }

    /// Slot index of the leftmost active chunk.
    pub fn front(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_some)
    }

    /// Active slot indices, rightmost first.
    ///
    /// The result is a snapshot: removing a chunk while walking it is safe,
    /// and [`ChunkList::get`] skips anything removed in the meantime.
    pub fn indices_rev(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .rev()
            .filter_map(|(idx, slot)| slot.as_ref().map(|_| idx))
            .collect()
    }

    /// Active payloads, left to right.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().flatten().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(chunks: &[&str]) -> ChunkList {
        ChunkList::new(chunks.iter().map(|c| (*c).to_string()))
    }

    #[test]
    fn removal_keeps_indices_stable() {
        let mut chunks = list(&["[FFF]", "Working!!! - 01", "[720p]", "[348B33FB]"]);
        assert_eq!(chunks.remove(3).as_deref(), Some("[348B33FB]"));
        assert_eq!(chunks.remove(3), None);
        assert_eq!(chunks.get(2), Some("[720p]"));
        assert_eq!(chunks.get(3), None);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks.indices_rev(), [2, 1, 0]);
    }

    #[test]
    fn front_skips_removed_chunks() {
        let mut chunks = list(&["[FFF]", "Title"]);
        assert_eq!(chunks.front(), Some(0));
        chunks.remove(0);
        assert_eq!(chunks.front(), Some(1));
        chunks.remove(1);
        assert_eq!(chunks.front(), None);
        assert!(chunks.is_empty());
    }

    #[test]
    fn replace_only_touches_active_slots() {
        let mut chunks = list(&["Title - 01.mkv", "[GB]"]);
        chunks.replace(0, "Title - 01".into());
        chunks.remove(1);
        chunks.replace(1, "ghost".into());
        chunks.replace(7, "ghost".into());
        assert_eq!(chunks.iter().collect::<Vec<_>>(), ["Title - 01"]);
    }

    #[test]
    fn removal_during_reverse_walk() {
        let mut chunks = list(&["a", "b", "c"]);
        for idx in chunks.indices_rev() {
            if idx == 2 {
                chunks.remove(1);
            }
            if idx == 1 {
                assert_eq!(chunks.get(idx), None);
            }
        }
        assert_eq!(chunks.iter().collect::<Vec<_>>(), ["a", "c"]);
    }
}
