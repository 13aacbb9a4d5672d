//! # Title Extractor
//!
//! Reduces one free-text chunk to a series title plus structural fields.
//!
//! Release names put the title on the left and metadata on the right, so
//! tokens are scanned right to left. Each token either feeds a structural
//! field (episode, batch, season, volume, flag) or is prepended to the title
//! accumulator. A structural token breaks title contiguity: whatever was
//! accumulated before it is discarded, so only the leftmost run of plain
//! tokens survives as the title.

use tracing::trace;

use crate::error::Result;
use crate::parser::patterns::Patterns;
use crate::parser::tokenizer::{Token, Tokenizer};
use crate::types::ParsedRelease;

/// Markers that flag a Blu-ray source.
const BLU_RAY_FLAGS: &[&str] = &["bd", "bdrip", "blu-ray", "bluray"];

/// Markers that flag bundled specials, e.g. "Title + SPs".
const SPECIALS_FLAGS: &[&str] = &["sp", "sps", "special", "specials"];

/// Set `is_blu_ray` if any word of `text` is a Blu-ray marker
/// (case-insensitive). Nothing else is touched.
pub fn mark_blu_ray(text: &str, release: &mut ParsedRelease) {
    if Tokenizer::new()
        .words(text)
        .any(|word| BLU_RAY_FLAGS.contains(&word.to_lowercase().as_str()))
    {
        release.is_blu_ray = true;
    }
}

/// Flags carried by the fragment following a `+` separator.
fn mark_fragment_flags(text: &str, release: &mut ParsedRelease) {
    for word in Tokenizer::new().words(text) {
        let word = word.to_lowercase();
        if BLU_RAY_FLAGS.contains(&word.as_str()) {
            release.is_blu_ray = true;
        } else if SPECIALS_FLAGS.contains(&word.as_str()) {
            release.has_specials = true;
        }
    }
}

/// What the previous token turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    /// Plain title material.
    #[default]
    ScanningTitle,
    SawEpisode,
    SawSeason,
    SawVolume,
    /// `OVA` or `BD`.
    SawFlag,
    /// `+`.
    SawSeparator,
}

/// Per-chunk latches: each field is taken at most once per scan.
#[derive(Debug, Default)]
struct Latches {
    episode: bool,
    season: bool,
    volume: bool,
}

/// Right-to-left title scanner over one chunk.
#[derive(Debug, Clone, Copy)]
pub struct TitleExtractor<'a> {
    patterns: &'a Patterns,
}

impl<'a> TitleExtractor<'a> {
    pub fn new(patterns: &'a Patterns) -> Self {
        Self { patterns }
    }

    /// Scan `chunk`, updating `release` with every field found and
    /// assigning the cleaned title.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEpisode`/`InvalidSeason`/`InvalidVolume` when a
    /// matched number does not fit the field type.
    pub fn extract(&self, chunk: &str, release: &mut ParsedRelease) -> Result<()> {
        let mut tokens = Tokenizer::new().tokenize(chunk);

        if let Some(split) = self.split_season_episode(&tokens, release)? {
            tokens.truncate(split);
        }

        // A single token is never read as an episode: "86" is a title.
        let lone = tokens.len() == 1;

        let mut latches = Latches::default();
        let mut state = ScanState::ScanningTitle;
        let mut title = String::new();

        for token in tokens.iter().rev() {
            if state != ScanState::ScanningTitle {
                title.clear();
            }

            state = self.step(token.text, lone, &mut latches, &title, release)?;
            trace!(token = token.text, index = token.index, ?state, "title scan");

            if state == ScanState::ScanningTitle {
                title.insert(0, ' ');
                title.insert_str(0, token.text);
            }
        }

        release.title = clean_title(&title).to_string();
        Ok(())
    }

    /// Find the first `S##E##` token, record it and return its index.
    fn split_season_episode(
        &self,
        tokens: &[Token<'_>],
        release: &mut ParsedRelease,
    ) -> Result<Option<usize>> {
        for token in tokens {
            if let Some((season, episode)) = self.patterns.season_episode(token.text)? {
                release.season = Some(season);
                release.episode = Some(episode);
                return Ok(Some(token.index));
            }
        }
        Ok(None)
    }

    /// Classify one token and apply its effect.
    fn step(
        &self,
        word: &str,
        lone: bool,
        latches: &mut Latches,
        title: &str,
        release: &mut ParsedRelease,
    ) -> Result<ScanState> {
        if !latches.episode {
            if !lone {
                if let Some(episode) = self.patterns.episode(word)? {
                    release.episode = Some(episode);
                    latches.episode = true;
                    return Ok(ScanState::SawEpisode);
                }
            }
            if let Some(batch) = self.patterns.batch(word)? {
                release.batch = Some(batch);
                latches.episode = true;
                return Ok(ScanState::SawEpisode);
            }
        }

        if !latches.season {
            if let Some(season) = self.patterns.season(word)? {
                release.season = Some(season);
                latches.season = true;
                return Ok(ScanState::SawSeason);
            }
        } else if release.season.is_some() && self.patterns.is_season(word) {
            // "S1 & S2": more than one season, so none of them applies.
            release.season = None;
            return Ok(ScanState::SawSeason);
        }

        if !latches.volume {
            if let Some(volume) = self.patterns.volume(word)? {
                release.volume = Some(volume);
                latches.volume = true;
                return Ok(ScanState::SawVolume);
            }
        }

        match word {
            "OVA" => {
                release.is_ova = true;
                Ok(ScanState::SawFlag)
            }
            "BD" => {
                release.is_blu_ray = true;
                Ok(ScanState::SawFlag)
            }
            "+" => {
                mark_fragment_flags(title, release);
                Ok(ScanState::SawSeparator)
            }
            _ => Ok(ScanState::ScanningTitle),
        }
    }
}

/// Trim the title and drop trailing separator runs (`-`, `&`, whitespace).
fn clean_title(title: &str) -> &str {
    title
        .trim()
        .trim_end_matches(|c: char| c.is_whitespace() || c == '&' || c == '-')
}
