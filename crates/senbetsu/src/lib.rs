//! # Senbetsu
//!
//! Metadata extraction from anime fansub release names.
//!
//! This crate re-exports the parser from [`senbetsu_core`].
//!
//! ```rust
//! let release = senbetsu::parse("[HorribleSubs] Haiyore! Nyaruko-san W - 01-12 [1080p]").unwrap();
//!
//! assert_eq!(release.title, "Haiyore! Nyaruko-san W");
//! assert_eq!(release.group.as_deref(), Some("HorribleSubs"));
//! assert!(release.is_batch());
//! ```

pub use senbetsu_core::*;
