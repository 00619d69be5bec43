//! Similarity search over the fixed answer pool
//!
//! Cosine similarity plus the in-memory [`AnswerIndex`] built at startup

mod index;
mod similarity;

pub use index::{AnswerIndex, DEFAULT_ANSWERS};
pub use similarity::{best_match, cosine_similarity};
