//! # Senbetsu Core
//!
//! Heuristic metadata extraction from fansub and scene release names:
//! series title, season, episode, volume, batch range, release group,
//! CRC32 checksum and Blu-ray/OVA/specials flags.
//!
//! ## Quick Start
//!
//! ```rust
//! use senbetsu_core::parser::HeuristicParser;
//!
//! let parser = HeuristicParser::new().unwrap();
//! let release = parser.parse("[FFF] Working!!! - 01 [720p][348B33FB].mkv").unwrap();
//!
//! assert_eq!(release.title, "Working!!!");
//! assert_eq!(release.episode, Some(1));
//! assert_eq!(release.group.as_deref(), Some("FFF"));
//! assert_eq!(release.checksum.as_deref(), Some("348B33FB"));
//! ```
pub mod error;
pub mod keywords;
pub mod parser;
pub mod types;

// Re-export primary API
pub use error::{ParseError, Result};
pub use keywords::{KeywordCategory, KeywordConfig, Keywords};
pub use parser::{parse, HeuristicParser};
pub use types::{Batch, ParsedRelease};
