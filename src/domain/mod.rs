pub mod stem;

use std::str::Utf8Error;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Input is not valid UTF-8 (valid up to byte {valid_up_to}).")]
pub struct DecodingError {
    valid_up_to: usize
}

impl DecodingError {
    pub fn valid_up_to(&self) -> usize {
        self.valid_up_to
    }
}

impl From<Utf8Error> for DecodingError {
    fn from(err: Utf8Error) -> Self {
        Self { valid_up_to: err.valid_up_to() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StemError {
    #[error("Stem cannot be an empty string.")]
    Empty,

    #[error("'{value}' is not a normalized stem. Expected '{expected}'.")]
    NotNormalized { value: String, expected: String }
}
