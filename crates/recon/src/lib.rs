pub mod engine;
pub mod normalize;
pub(crate) mod score;

pub use engine::{MatchResult, ReconEngine, Strategy};
pub use normalize::{normalize_key, ReferenceEntry, ReferenceList};
