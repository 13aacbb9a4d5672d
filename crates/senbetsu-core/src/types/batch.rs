use std::fmt;

use serde::{Deserialize, Serialize};

/// An inclusive episode range covered by a batch release: "01-12".
///
/// The bounds are kept exactly as written in the name; a reversed range
/// such as "12-01" is not normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Batch {
    /// First episode of the range.
    pub start: u32,
    /// Last episode of the range.
    pub end: u32,
}

impl Batch {
    #[must_use]
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Returns `true` if `episode` falls inside the range.
    #[must_use]
    pub fn contains(&self, episode: u32) -> bool {
        (self.start..=self.end).contains(&episode)
    }

    /// Number of episodes covered, zero for a reversed range.
    #[must_use]
    pub fn episode_count(&self) -> u32 {
        if self.end < self.start {
            0
        } else {
            self.end - self.start + 1
        }
    }
}

impl fmt::Display for Batch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.start, self.end)
    }
}
