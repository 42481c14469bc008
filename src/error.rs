use std::{io, path::PathBuf};

use thiserror::Error;

use crate::complex::Complex;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid image size `{0}`, expected WIDTHxHEIGHT with positive integers")]
    InvalidSize(String),

    #[error("invalid complex number `{0}`, expected e.g. `-1.2+0.35j` or `-1.2,0.35`")]
    InvalidComplex(String),

    #[error("invalid viewport: upper left {upper_left} must lie above and left of lower right {lower_right}")]
    InvalidViewport {
        upper_left: Complex,
        lower_right: Complex,
    },

    #[error("intensity buffer holds {actual} pixels, image needs {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("no encoder available for `{0}`")]
    UnsupportedFormat(String),

    #[error("could not write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not encode image: {0}")]
    Encode(#[from] image::ImageError),
}

impl Error {
    /// Whether this error stems from malformed user input rather than output.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::InvalidSize(_)
                | Error::InvalidComplex(_)
                | Error::InvalidViewport { .. }
                | Error::UnsupportedFormat(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
