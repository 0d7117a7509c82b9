pub mod cli;
pub mod domain;
pub mod utils;

pub use domain::{stem::Stem, DecodingError, StemError};
pub use utils::normalizations::{is_normalized, normalize, normalize_bytes, normalize_with, WordClass};
