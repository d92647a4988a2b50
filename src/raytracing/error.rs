use std::fmt;
use std::io;

use thiserror::Error;

/// Degenerate geometry (zero length directions, zero radius spheres, division
/// by zero) is never rejected up front: the arithmetic keeps going and the
/// pixel color ends up NaN or infinite. The render driver classifies those
/// pixels with this kind and reports them, the image is still written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DegenerateInputKind {
    /// Some channel is NaN, typically a zero length vector got normalized.
    NanColor,
    /// Some channel is infinite, typically a division by zero.
    InfiniteColor,
}

impl fmt::Display for DegenerateInputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegenerateInputKind::NanColor => write!(f, "NaN color"),
            DegenerateInputKind::InfiniteColor => write!(f, "infinite color"),
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("expected {expected} pixels, got {actual}")]
    PixelCount { expected: usize, actual: usize },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type RenderResult<T> = Result<T, RenderError>;
