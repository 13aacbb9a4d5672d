pub mod chunks;
pub mod heuristic;
pub mod parens;
pub mod patterns;
pub mod title;
pub mod tokenizer;

pub use chunks::ChunkList;
pub use heuristic::{parse, HeuristicParser};
pub use parens::{segment, strip_parens};
pub use patterns::Patterns;
pub use title::{ScanState, TitleExtractor};
pub use tokenizer::{Token, Tokenizer};
