use std::fmt;

use serde::{Deserialize, Serialize};

use super::batch::Batch;

/// The output of the release-name parser.
///
/// Every field except `title` is optional or a flag; a field is only set
/// when a heuristic recognized it in the name. Episode `Some(0)` is a real
/// episode number, distinct from `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRelease {
    /// Series title. May be empty when nothing title-like was found.
    pub title: String,

    /// Release year, e.g. `2015` in "Unlimited Blade Works (2015)".
    pub year: Option<u16>,

    /// Episode number.
    pub episode: Option<u32>,

    /// Season number, e.g. `2` in "Nisekoi S2".
    pub season: Option<u32>,

    /// Volume number, e.g. `1` in "Vol.01".
    pub volume: Option<u32>,

    /// Episode range of a batch release.
    pub batch: Option<Batch>,

    /// Release group (fansub team).
    pub group: Option<String>,

    /// CRC32 checksum tag, case preserved.
    pub checksum: Option<String>,

    pub is_ova: bool,
    pub is_blu_ray: bool,
    pub has_specials: bool,
}

impl ParsedRelease {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the name describes an episode range.
    #[must_use]
    pub fn is_batch(&self) -> bool {
        self.batch.is_some()
    }

    /// Returns `true` if anything beyond the title was extracted.
    #[must_use]
    pub fn has_metadata(&self) -> bool {
        self.year.is_some()
            || self.episode.is_some()
            || self.season.is_some()
            || self.volume.is_some()
            || self.batch.is_some()
            || self.group.is_some()
            || self.checksum.is_some()
            || self.is_ova
            || self.is_blu_ray
            || self.has_specials
    }
}

impl fmt::Display for ParsedRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParsedRelease(title={:?}", self.title)?;
        if let Some(ref group) = self.group {
            write!(f, ", group={group:?}")?;
        }
        if let Some(season) = self.season {
            write!(f, ", season={season}")?;
        }
        if let Some(episode) = self.episode {
            write!(f, ", ep={episode:02}")?;
        }
        if let Some(ref batch) = self.batch {
            write!(f, ", batch={batch}")?;
        }
        if let Some(volume) = self.volume {
            write!(f, ", vol={volume}")?;
        }
        if let Some(year) = self.year {
            write!(f, ", year={year}")?;
        }
        if let Some(ref checksum) = self.checksum {
            write!(f, ", crc32={checksum}")?;
        }
        if self.is_ova {
            write!(f, ", ova")?;
        }
        if self.is_blu_ray {
            write!(f, ", bd")?;
        }
        if self.has_specials {
            write!(f, ", specials")?;
        }
        write!(f, ")")
    }
}
