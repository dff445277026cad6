//! Dataset access errors.

use image::ImageError;
use std::{fmt, io, path::PathBuf};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A registered dataset entry that can be looked up by ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entry {
    Pcb(usize),
    Recording(usize),
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pcb(id) => write!(f, "PCB {}", id),
            Self::Recording(id) => write!(f, "recording {}", id),
        }
    }
}

/// Errors reported by the dataset accessor.
///
/// All errors are fatal to the requested operation. Nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("'{}' is not a directory or ends with a path separator", .path.display())]
    InvalidRoot { path: PathBuf },

    #[error("scale must be > 0 and <= 2, but get {scale}")]
    InvalidScale { scale: f64 },

    #[error("'{}' contains no PCB directories", .path.display())]
    EmptyDataset { path: PathBuf },

    #[error("{0} does not exist")]
    NotFound(Entry),

    #[error("mask file '{}' does not exist", .path.display())]
    MissingMask { path: PathBuf },

    #[error("annotation file '{}' does not exist", .path.display())]
    MissingAnnotationFile { path: PathBuf },

    #[error("unable to decode '{}'", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("malformed annotation at '{}' line {line}: {reason}", .path.display())]
    MalformedAnnotation {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("'{}' does not name a PCB directory", .path.display())]
    MalformedPath { path: PathBuf },

    #[error("the mask of recording {rec} has no foreground region")]
    NoContours { rec: usize },

    #[error(
        "the image of recording {rec} has size {}x{} but its mask has size {}x{}",
        .image[0], .image[1], .mask[0], .mask[1]
    )]
    SizeMismatch {
        rec: usize,
        /// `[width, height]` of the image.
        image: [u32; 2],
        /// `[width, height]` of the mask.
        mask: [u32; 2],
    },

    #[error("I/O error on '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }

    pub(crate) fn decode(path: impl Into<PathBuf>) -> impl FnOnce(ImageError) -> Self {
        let path = path.into();
        move |source| Self::Decode { path, source }
    }
}
