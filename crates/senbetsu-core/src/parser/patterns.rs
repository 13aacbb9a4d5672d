//! # Pattern Matchers
//!
//! Regex recognizers for single tokens: season+episode, episode, batch,
//! season, volume, year and checksum.

use std::num::ParseIntError;

use regex::Regex;

use crate::error::{ParseError, Result};
use crate::types::Batch;

/// Token-level recognizers.
///
/// Every matcher looks at a single word. A match whose digits fail integer
/// conversion (overflow) is an error rather than a non-match.
#[derive(Debug, Clone)]
pub struct Patterns {
    re_season_episode: Regex,
    re_episode: Regex,
    re_batch: Regex,
    re_season: Regex,
    re_volume: Regex,
    re_year: Regex,
    re_checksum: Regex,
}

fn parse_num<T>(
    value: &str,
    make_error: fn(String, ParseIntError) -> ParseError,
) -> Result<T>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    value
        .parse()
        .map_err(|source| make_error(value.to_string(), source))
}

fn invalid_year(value: String, source: ParseIntError) -> ParseError {
    ParseError::InvalidYear { value, source }
}

fn invalid_episode(value: String, source: ParseIntError) -> ParseError {
    ParseError::InvalidEpisode { value, source }
}

fn invalid_season(value: String, source: ParseIntError) -> ParseError {
    ParseError::InvalidSeason { value, source }
}

fn invalid_volume(value: String, source: ParseIntError) -> ParseError {
    ParseError::InvalidVolume { value, source }
}

impl Patterns {
    /// Compiles the token patterns.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Regex` if any pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_season_episode: Regex::new(r"^S([0-9]+)E([0-9]+)$")?,
            re_episode: Regex::new(r"^([0-9]+)(?:v[0-9]+)?$")?,
            re_batch: Regex::new(r"([0-9]+)-([0-9]+)")?,
            re_season: Regex::new(r"^S([0-9]+)$")?,
            re_volume: Regex::new(r"^(?i:vol)\.?([0-9]{1,2})$")?,
            re_year: Regex::new(r"^[0-9]{4}$")?,
            re_checksum: Regex::new(r"^[0-9A-Fa-f]{8}$")?,
        })
    }

    /// `S03E12` -> `(3, 12)`.
    pub fn season_episode(&self, word: &str) -> Result<Option<(u32, u32)>> {
        let Some(caps) = self.re_season_episode.captures(word) else {
            return Ok(None);
        };
        let season = parse_num(&caps[1], invalid_season)?;
        let episode = parse_num(&caps[2], invalid_episode)?;
        Ok(Some((season, episode)))
    }

    /// `01`, `003v3` -> episode number; the revision suffix is dropped.
    pub fn episode(&self, word: &str) -> Result<Option<u32>> {
        self.re_episode
            .captures(word)
            .map(|caps| parse_num(&caps[1], invalid_episode))
            .transpose()
    }

    /// First `<digits>-<digits>` anywhere in the word, as written.
    pub fn batch(&self, word: &str) -> Result<Option<Batch>> {
        let Some(caps) = self.re_batch.captures(word) else {
            return Ok(None);
        };
        let start = parse_num(&caps[1], invalid_episode)?;
        let end = parse_num(&caps[2], invalid_episode)?;
        Ok(Some(Batch::new(start, end)))
    }

    /// `S2` -> season number. The leading `S` is case-sensitive.
    pub fn season(&self, word: &str) -> Result<Option<u32>> {
        self.re_season
            .captures(word)
            .map(|caps| parse_num(&caps[1], invalid_season))
            .transpose()
    }

    /// Returns `true` if the word has the season shape, without converting it.
    #[must_use]
    pub fn is_season(&self, word: &str) -> bool {
        self.re_season.is_match(word)
    }

    /// `Vol.01`, `vol1` -> volume number.
    pub fn volume(&self, word: &str) -> Result<Option<u32>> {
        self.re_volume
            .captures(word)
            .map(|caps| parse_num(&caps[1], invalid_volume))
            .transpose()
    }

    /// Exactly four digits -> year.
    pub fn year(&self, word: &str) -> Result<Option<u16>> {
        if !self.re_year.is_match(word) {
            return Ok(None);
        }
        parse_num(word, invalid_year).map(Some)
    }

    /// Exactly eight hexadecimal characters.
    #[must_use]
    pub fn is_checksum(&self, word: &str) -> bool {
        self.re_checksum.is_match(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> Patterns {
        Patterns::new().unwrap()
    }

    #[test]
    fn season_episode_matches_whole_token() {
        let p = patterns();
        assert_eq!(p.season_episode("S03E12").unwrap(), Some((3, 12)));
        assert_eq!(p.season_episode("S1E0").unwrap(), Some((1, 0)));
        assert_eq!(p.season_episode("s03e12").unwrap(), None);
        assert_eq!(p.season_episode("S03E12v2").unwrap(), None);
        assert_eq!(p.season_episode("S03").unwrap(), None);
    }

    #[test]
    fn episode_with_revision_suffix() {
        let p = patterns();
        assert_eq!(p.episode("01").unwrap(), Some(1));
        assert_eq!(p.episode("003v3").unwrap(), Some(3));
        assert_eq!(p.episode("00v2").unwrap(), Some(0));
        assert_eq!(p.episode("00").unwrap(), Some(0));
        assert_eq!(p.episode("01v").unwrap(), None);
        assert_eq!(p.episode("E01").unwrap(), None);
        assert_eq!(p.episode("1-12").unwrap(), None);
    }

    #[test]
    fn batch_found_anywhere() {
        let p = patterns();
        assert_eq!(p.batch("1-12").unwrap(), Some(Batch::new(1, 12)));
        assert_eq!(p.batch("01-12").unwrap(), Some(Batch::new(1, 12)));
        assert_eq!(p.batch("[01-13]").unwrap(), Some(Batch::new(1, 13)));
        assert_eq!(p.batch("Umaru-chan").unwrap(), None);
    }

    #[test]
    fn reversed_batch_is_not_normalized() {
        let p = patterns();
        assert_eq!(p.batch("12-01").unwrap(), Some(Batch::new(12, 1)));
    }

    #[test]
    fn season_is_case_sensitive() {
        let p = patterns();
        assert_eq!(p.season("S2").unwrap(), Some(2));
        assert_eq!(p.season("S02").unwrap(), Some(2));
        assert_eq!(p.season("s2").unwrap(), None);
        assert_eq!(p.season("S").unwrap(), None);
        assert!(p.is_season("S1"));
        assert!(!p.is_season("SPs"));
    }

    #[test]
    fn volume_variants() {
        let p = patterns();
        assert_eq!(p.volume("Vol.01").unwrap(), Some(1));
        assert_eq!(p.volume("Vol.1").unwrap(), Some(1));
        assert_eq!(p.volume("vol2").unwrap(), Some(2));
        assert_eq!(p.volume("VOL.12").unwrap(), Some(12));
        assert_eq!(p.volume("Vol.123").unwrap(), None);
        assert_eq!(p.volume("Volume.1").unwrap(), None);
    }

    #[test]
    fn year_is_four_digits() {
        let p = patterns();
        assert_eq!(p.year("2015").unwrap(), Some(2015));
        assert_eq!(p.year("201").unwrap(), None);
        assert_eq!(p.year("20150").unwrap(), None);
        assert_eq!(p.year("(2015)").unwrap(), None);
    }

    #[test]
    fn checksum_is_eight_hex_chars() {
        let p = patterns();
        assert!(p.is_checksum("ABCDEF12"));
        assert!(p.is_checksum("9e89d1ac"));
        assert!(p.is_checksum("9E89d1ac"));
        assert!(!p.is_checksum("ABCDEF1"));
        assert!(!p.is_checksum("ABCDEF123"));
        assert!(!p.is_checksum("ABCDEFG1"));
    }

    #[test]
    fn overflow_is_reported_not_panicked() {
        let p = patterns();
        assert!(matches!(
            p.episode("99999999999999999999"),
            Err(ParseError::InvalidEpisode { .. })
        ));
        assert!(matches!(
            p.season("S99999999999"),
            Err(ParseError::InvalidSeason { .. })
        ));
        assert!(matches!(
            p.season_episode("S1E99999999999"),
            Err(ParseError::InvalidEpisode { .. })
        ));
        assert!(matches!(
            p.batch("1-99999999999"),
            Err(ParseError::InvalidEpisode { .. })
        ));
    }
}
