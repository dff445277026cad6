//! Axis-aligned and rotated box types for image annotations.

mod common;

pub use transform::*;
mod transform;

pub use rect::*;
pub mod rect;

pub use tlbr::*;
pub mod tlbr;

pub use cycxhw::*;
pub mod cycxhw;

pub use rotated::*;
pub mod rotated;

#[cfg(feature = "imageproc")]
pub use with_imageproc::*;
#[cfg(feature = "imageproc")]
mod with_imageproc;

pub mod prelude {
    pub use crate::rect::{Rect, RectNum};
}
