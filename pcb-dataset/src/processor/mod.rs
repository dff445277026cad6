//! Image processing steps applied to decoded recordings.

mod mask;
mod resize;

pub use mask::*;
pub use resize::*;
