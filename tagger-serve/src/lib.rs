//! Core of the image tagging service: fixed label vocabulary, one-time
//! model fetch and load, inference over uploaded images, and the
//! probability-threshold rule that turns a score vector into tags.

pub mod classify;
pub mod error;
pub mod fetch;
pub mod model;
pub mod timer;
pub mod vocabulary;

pub use classify::{classify, top_tag, Tagging, DEFAULT_THRESHOLD};
pub use error::TaggerError;
pub use fetch::download_file;
pub use model::{decode_image, Predictor};
pub use timer::Timer;
pub use vocabulary::LABELS;
