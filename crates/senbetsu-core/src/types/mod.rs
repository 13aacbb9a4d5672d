pub mod batch;
pub mod release;

pub use batch::Batch;
pub use release::ParsedRelease;
