use std::sync::LazyLock;

use tracing::{debug, trace};

use crate::error::{ParseError, Result};
use crate::keywords::Keywords;
use crate::parser::chunks::ChunkList;
use crate::parser::parens::{is_round_wrapped, is_wrapped, segment, strip_parens};
use crate::parser::patterns::Patterns;
use crate::parser::title::{mark_blu_ray, TitleExtractor};
use crate::parser::tokenizer::Tokenizer;
use crate::types::ParsedRelease;

/// Heuristic release-name parser.
///
/// Splits the name into bracketed and free-text chunks, reads the
/// well-known fields from their conventional positions (checksum and
/// extension on the right, group on the left) and hands the remaining
/// free text to the [`TitleExtractor`].
///
/// The parser is immutable once built and can be shared across threads.
#[derive(Debug, Clone)]
pub struct HeuristicParser {
    patterns: Patterns,
    keywords: Keywords,
}

impl HeuristicParser {
    /// Constructs a parser with the built-in keyword tables.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Regex` if any pattern fails to compile
    /// (should never happen with the static patterns).
    pub fn new() -> Result<Self> {
        Self::with_keywords(Keywords::default())
    }

    /// Constructs a parser with alternate keyword tables.
    pub fn with_keywords(keywords: Keywords) -> Result<Self> {
        Ok(Self {
            patterns: Patterns::new()?,
            keywords,
        })
    }

    /// Keyword tables this parser was built with.
    pub fn keywords(&self) -> &Keywords {
        &self.keywords
    }

    /// Parses a release name.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::CouldNotParseName` if nothing is left once the
    /// extension is stripped, and `ParseError::ParseChunkFailed` when a
    /// free-text chunk holds a number that does not fit its field.
    pub fn parse(&self, name: &str) -> Result<ParsedRelease> {
        let stem = self.keywords.strip_extension(name);

        let chunks = segment(stem);
        let release = match chunks.len() {
            0 => {
                return Err(ParseError::CouldNotParseName {
                    name: stem.to_string(),
                });
            }
            1 => self.parse_single(&chunks[0])?,
            _ => self.parse_chunks(ChunkList::new(chunks))?,
        };

        debug!(name, %release, "parsed release name");
        Ok(release)
    }

    /// The whole name is one blob, possibly wrapped in parens. Only the
    /// title scan applies: there is no positional context for group,
    /// checksum or year.
    fn parse_single(&self, chunk: &str) -> Result<ParsedRelease> {
        let inner = strip_parens(chunk.trim()).trim();
        let text = self.keywords.remove_keywords(inner).join(" ");

        let mut release = ParsedRelease::default();
        self.title_extractor()
            .extract(&text, &mut release)
            .map_err(|err| err.in_chunk(chunk))?;
        Ok(release)
    }

    fn parse_chunks(&self, mut chunks: ChunkList) -> Result<ParsedRelease> {
        let mut release = ParsedRelease::default();

        self.take_checksum(&mut chunks, &mut release);
        self.strip_chunk_extension(&mut chunks);
        self.take_group(&mut chunks, &mut release);

        // From here on the guesswork gets harder. Metadata mostly sits on
        // the right, so walking right to left keeps numbers inside titles
        // from being mistaken for episodes.
        let mut title_suffix: Option<String> = None;
        let mut keep_suffix = false;

        for idx in chunks.indices_rev() {
            if keep_suffix {
                keep_suffix = false;
            } else {
                title_suffix = None;
            }

            let Some(chunk) = chunks.get(idx) else {
                continue;
            };
            let chunk = chunk.trim();
            if chunk.is_empty() {
                continue;
            }

            let inner = strip_parens(chunk);
            let wrapped = inner.len() != chunk.len();
            if wrapped {
                mark_blu_ray(inner, &mut release);
            }

            let words = self.keywords.remove_keywords(inner);
            if words.is_empty() {
                trace!(chunk, "only keywords");
                continue;
            }

            // One known keyword in a bracketed chunk is enough to treat the
            // rest of it as unknown keywords too.
            if wrapped && Tokenizer::new().words(inner).count() > words.len() {
                trace!(chunk, "keyword chunk");
                continue;
            }

            if let [word] = words.as_slice() {
                if release.year.is_none() {
                    if let Some(year) = self.patterns.year(word)? {
                        debug!(year, chunk, "year");
                        release.year = Some(year);
                        continue;
                    }
                }

                if release.episode.is_none() {
                    if let Some(episode) = self.patterns.episode(word)? {
                        debug!(episode, chunk, "episode");
                        release.episode = Some(episode);
                        continue;
                    }
                }

                if release.group.is_none() {
                    debug!(group = word, chunk, "group");
                    release.group = Some((*word).to_string());
                    continue;
                }
            }

            if wrapped {
                // Unknown bracketed text. Round parens may still belong to
                // the title on their left: "Kaguya-sama (Love Is War) S2 - 01".
                if is_round_wrapped(chunk) {
                    title_suffix = Some(chunk.to_string());
                    keep_suffix = true;
                }
                trace!(chunk, "skipped bracketed chunk");
                continue;
            }

            let text = match title_suffix.as_deref() {
                Some(suffix) => format!("{chunk} {suffix}"),
                None => chunk.to_string(),
            };
            trace!(chunk = text.as_str(), "title chunk");
            self.title_extractor()
                .extract(&text, &mut release)
                .map_err(|err| err.in_chunk(text.as_str()))?;
        }

        Ok(release)
    }

    /// Rightmost bracketed chunk holding exactly one checksum-shaped word.
    fn take_checksum(&self, chunks: &mut ChunkList, release: &mut ParsedRelease) {
        for idx in chunks.indices_rev() {
            let checksum = {
                let Some(chunk) = chunks.get(idx) else {
                    continue;
                };
                if !is_wrapped(chunk) {
                    continue;
                }

                let words: Vec<&str> = Tokenizer::new().words(strip_parens(chunk)).collect();
                let [word] = words.as_slice() else {
                    continue;
                };
                if !self.patterns.is_checksum(word) {
                    continue;
                }
                (*word).to_string()
            };

            debug!(checksum = checksum.as_str(), "checksum");
            release.checksum = Some(checksum);
            chunks.remove(idx);
            break;
        }
    }

    /// The extension can only trail the rightmost free-text chunk. That
    /// chunk stays in the list: it may carry the title too.
    fn strip_chunk_extension(&self, chunks: &mut ChunkList) {
        for idx in chunks.indices_rev() {
            let Some(chunk) = chunks.get(idx) else {
                continue;
            };
            if is_wrapped(chunk) {
                continue;
            }

            let stripped = self.keywords.strip_extension(chunk.trim()).to_string();
            chunks.replace(idx, stripped);
            break;
        }
    }

    /// A bracketed leftmost chunk is the release group.
    fn take_group(&self, chunks: &mut ChunkList, release: &mut ParsedRelease) {
        let Some(idx) = chunks.front() else {
            return;
        };
        let Some(chunk) = chunks.get(idx) else {
            return;
        };
        if !is_wrapped(chunk) {
            return;
        }

        let group = strip_parens(chunk).trim().to_string();
        debug!(group = group.as_str(), "group");
        release.group = Some(group);
        chunks.remove(idx);
    }

    fn title_extractor(&self) -> TitleExtractor<'_> {
        TitleExtractor::new(&self.patterns)
    }
}

static DEFAULT_PARSER: LazyLock<Result<HeuristicParser>> = LazyLock::new(HeuristicParser::new);

/// Convenience function to parse a release name with the built-in tables.
///
/// The default parser is built once and shared.
///
/// ```
/// let release = senbetsu_core::parse("[FFF] Nisekoi S2 - 01 [E0D0C713].mkv").unwrap();
///
/// assert_eq!(release.title, "Nisekoi");
/// assert_eq!(release.season, Some(2));
/// assert_eq!(release.episode, Some(1));
/// assert_eq!(release.group.as_deref(), Some("FFF"));
/// assert_eq!(release.checksum.as_deref(), Some("E0D0C713"));
/// ```
pub fn parse(name: &str) -> Result<ParsedRelease> {
    match &*DEFAULT_PARSER {
        Ok(parser) => parser.parse(name),
        // Construction failed once; rebuild to hand the caller an owned error.
        Err(_) => HeuristicParser::new()?.parse(name),
    }
}
