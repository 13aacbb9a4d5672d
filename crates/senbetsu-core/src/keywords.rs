//! # Keyword Classifier
//!
//! Static keyword tables consumed as a set-membership oracle. A token is a
//! keyword when its lowercased form is listed in one of the categories or
//! in the alias table.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::parser::tokenizer::Tokenizer;

/// Category a known keyword belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordCategory {
    Resolution,
    Quality,
    VideoCodec,
    AudioCodec,
    Extension,
    Other,
}

impl fmt::Display for KeywordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolution => write!(f, "resolution"),
            Self::Quality => write!(f, "quality"),
            Self::VideoCodec => write!(f, "video codec"),
            Self::AudioCodec => write!(f, "audio codec"),
            Self::Extension => write!(f, "extension"),
            Self::Other => write!(f, "other"),
        }
    }
}

const ALIASES: &[(&str, &str)] = &[
    ("blu-ray", "bd"),
    ("bluray", "bd"),
    ("h.264", "h264"),
    ("x264", "h264"),
];

const RESOLUTIONS: &[&str] = &["1080p", "360p", "480p", "720p"];
const QUALITY: &[&str] = &["10bit", "8bit", "bd", "dvd", "tv"];
const VIDEO_CODECS: &[&str] = &["h264", "hevc"];
const AUDIO_CODECS: &[&str] = &["aac", "ac3", "flac", "opus"];
const EXTENSIONS: &[&str] = &["ass", "mkv", "mp4"];
const OTHER_PROPERTIES: &[&str] = &[
    "censored",
    "complete",
    "dual",
    "dub",
    "english",
    "simuldub",
    "uncensored",
];

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

/// Serializable keyword tables.
///
/// `Default` yields the built-in tables. Fields missing from a JSON
/// document decode as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default = "KeywordConfig::empty")]
pub struct KeywordConfig {
    /// Variant spelling -> canonical keyword.
    pub aliases: BTreeMap<String, String>,
    pub resolutions: Vec<String>,
    pub quality: Vec<String>,
    pub video_codecs: Vec<String>,
    pub audio_codecs: Vec<String>,
    /// Container extensions, without the leading dot. Also used to strip
    /// the file extension from a name, in listed order.
    pub extensions: Vec<String>,
    pub other_properties: Vec<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            aliases: ALIASES
                .iter()
                .map(|(alias, canonical)| ((*alias).to_string(), (*canonical).to_string()))
                .collect(),
            resolutions: owned(RESOLUTIONS),
            quality: owned(QUALITY),
            video_codecs: owned(VIDEO_CODECS),
            audio_codecs: owned(AUDIO_CODECS),
            extensions: owned(EXTENSIONS),
            other_properties: owned(OTHER_PROPERTIES),
        }
    }
}

impl KeywordConfig {
    /// An empty table: no token is a keyword.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            aliases: BTreeMap::new(),
            resolutions: Vec::new(),
            quality: Vec::new(),
            video_codecs: Vec::new(),
            audio_codecs: Vec::new(),
            extensions: Vec::new(),
            other_properties: Vec::new(),
        }
    }

    /// Decode a table from JSON.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::KeywordConfig` if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Compiled, immutable keyword lookup.
#[derive(Debug, Clone)]
pub struct Keywords {
    categories: HashMap<String, KeywordCategory>,
    aliases: HashMap<String, String>,
    extensions: Vec<String>,
}

impl Default for Keywords {
    fn default() -> Self {
        Self::new(&KeywordConfig::default())
    }
}

impl Keywords {
    /// Compile the lookup tables from `config`. Entries are lowercased.
    #[must_use]
    pub fn new(config: &KeywordConfig) -> Self {
        let lists = [
            (KeywordCategory::Resolution, &config.resolutions),
            (KeywordCategory::Quality, &config.quality),
            (KeywordCategory::VideoCodec, &config.video_codecs),
            (KeywordCategory::AudioCodec, &config.audio_codecs),
            (KeywordCategory::Extension, &config.extensions),
            (KeywordCategory::Other, &config.other_properties),
        ];

        let mut categories = HashMap::new();
        for (category, list) in lists {
            for keyword in list {
                categories.entry(keyword.to_lowercase()).or_insert(category);
            }
        }

        let aliases = config
            .aliases
            .iter()
            .map(|(alias, canonical)| (alias.to_lowercase(), canonical.to_lowercase()))
            .collect();

        Self {
            categories,
            aliases,
            extensions: config.extensions.clone(),
        }
    }

    /// Returns `true` when `word` (already lowercased) is a known keyword
    /// or alias.
    #[must_use]
    pub fn is_keyword(&self, word: &str) -> bool {
        self.aliases.contains_key(word) || self.categories.contains_key(word)
    }

    /// Canonical spelling of `word` (already lowercased): the alias target,
    /// the word itself for a listed keyword, `None` otherwise.
    #[must_use]
    pub fn canonical<'a>(&'a self, word: &'a str) -> Option<&'a str> {
        if let Some(canonical) = self.aliases.get(word) {
            return Some(canonical.as_str());
        }
        self.categories.contains_key(word).then_some(word)
    }

    /// Category of `word` (already lowercased), resolving aliases first.
    ///
    /// An alias whose canonical form is not listed in any category is still
    /// a keyword, but has no category.
    #[must_use]
    pub fn category(&self, word: &str) -> Option<KeywordCategory> {
        let canonical = self.aliases.get(word).map_or(word, String::as_str);
        self.categories.get(canonical).copied()
    }

    /// Words of `text` with every keyword removed, order preserved.
    #[must_use]
    pub fn remove_keywords<'a>(&self, text: &'a str) -> Vec<&'a str> {
        Tokenizer::new()
            .words(text)
            .filter(|word| !self.is_keyword(&word.to_lowercase()))
            .collect()
    }

    /// Known container extensions, in configured order.
    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Strip one trailing `.<extension>` from `name`. Matching is
    /// case-sensitive and the first listed extension that matches wins.
    #[must_use]
    pub fn strip_extension<'a>(&self, name: &'a str) -> &'a str {
        for ext in &self.extensions {
            if let Some(stem) = name.strip_suffix(ext.as_str()) {
                if let Some(stem) = stem.strip_suffix('.') {
                    return stem;
                }
            }
        }
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listed_keywords_are_recognized() {
        let keywords = Keywords::default();
        for word in ["1080p", "10bit", "bd", "hevc", "flac", "mkv", "dual", "simuldub"] {
            assert!(keywords.is_keyword(word), "expected keyword: {word}");
        }
        assert!(!keywords.is_keyword("nisekoi"));
        assert!(!keywords.is_keyword("1920x1080"));
    }

    #[test]
    fn lookup_expects_lowercase() {
        let keywords = Keywords::default();
        assert!(!keywords.is_keyword("BD"));
        assert!(keywords.is_keyword(&"BD".to_lowercase()));
    }

    #[test]
    fn aliases_resolve_to_canonical() {
        let keywords = Keywords::default();
        assert!(keywords.is_keyword("blu-ray"));
        assert_eq!(keywords.canonical("bluray"), Some("bd"));
        assert_eq!(keywords.canonical("x264"), Some("h264"));
        assert_eq!(keywords.canonical("aac"), Some("aac"));
        assert_eq!(keywords.canonical("nisekoi"), None);
        assert_eq!(keywords.category("h.264"), Some(KeywordCategory::VideoCodec));
        assert_eq!(keywords.category("720p"), Some(KeywordCategory::Resolution));
        assert_eq!(keywords.category("mp4"), Some(KeywordCategory::Extension));
    }

    #[test]
    fn alias_alone_makes_a_keyword() {
        let mut config = KeywordConfig::empty();
        config.aliases.insert("hi10p".into(), "10bit".into());
        let keywords = Keywords::new(&config);

        assert!(keywords.is_keyword("hi10p"));
        assert_eq!(keywords.category("hi10p"), None);
        assert!(!keywords.is_keyword("10bit"));
    }

    #[test]
    fn remove_keywords_preserves_order() {
        let keywords = Keywords::default();
        assert_eq!(
            keywords.remove_keywords("BD 1920x1080 x264 FLAC"),
            ["1920x1080"]
        );
        assert_eq!(
            keywords.remove_keywords("High School DxD Born English Dub Uncensored 1-12 720p Complete"),
            ["High", "School", "DxD", "Born", "1-12"]
        );
        assert!(keywords.remove_keywords("10bit_BD_1080p").is_empty());
    }

    #[test]
    fn remove_keywords_is_idempotent() {
        let keywords = Keywords::default();
        for text in [
            "Hibike! Euphonium Vol.1 BD 1080p 10bit FLAC",
            "1280x720 HEVC BD AAC",
            "Flying Witch + SPs",
            "",
        ] {
            let once = keywords.remove_keywords(text).join(" ");
            let twice = keywords.remove_keywords(&once).join(" ");
            assert_eq!(once, twice, "not stable for {text:?}");
        }
    }

    #[test]
    fn strip_extension_is_case_sensitive() {
        let keywords = Keywords::default();
        assert_eq!(keywords.strip_extension("Nisekoi - 01.mkv"), "Nisekoi - 01");
        assert_eq!(keywords.strip_extension("Hetalia - 03.ass"), "Hetalia - 03");
        assert_eq!(keywords.strip_extension("Nisekoi - 01.MKV"), "Nisekoi - 01.MKV");
        assert_eq!(keywords.strip_extension("Nisekoi - 01mkv"), "Nisekoi - 01mkv");
        assert_eq!(keywords.strip_extension("Nisekoi - 01.mkv.mp4"), "Nisekoi - 01.mkv");
    }

    #[test]
    fn config_from_json() {
        let config = KeywordConfig::from_json(
            r#"{ "extensions": ["avi"], "aliases": { "Blu-Ray": "BD" } }"#,
        )
        .unwrap();
        assert!(config.resolutions.is_empty());

        let keywords = Keywords::new(&config);
        assert!(keywords.is_keyword("avi"));
        assert!(keywords.is_keyword("blu-ray"));
        assert!(!keywords.is_keyword("mkv"));
        assert_eq!(keywords.strip_extension("Title.avi"), "Title");
    }

    #[test]
    fn config_from_bad_json_errors() {
        let err = KeywordConfig::from_json("{ \"extensions\": 3 }").unwrap_err();
        assert!(matches!(err, crate::error::ParseError::KeywordConfig(_)));
    }

    #[test]
    fn default_config_roundtrips_through_json() {
        let config = KeywordConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(KeywordConfig::from_json(&json).unwrap(), config);
    }
}
