//! Annotated board components.

use anyhow::{ensure, Result};
use bbox::{RotatedRect, Transform};
use noisy_float::prelude::*;
use std::{fmt, ops::Mul};

/// Image resolution of unscaled recordings.
pub const PIXELS_PER_CM: f64 = 87.4;

/// A labeled component region.
///
/// `scale` records the scaling the rectangle went through since it was
/// read from the annotation file, so that unscaled measurements can be
/// recovered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Annotation {
    rect: RotatedRect<R64>,
    scale: R64,
    text: String,
}

impl Annotation {
    pub fn try_new(rect: RotatedRect<R64>, scale: R64, text: impl Into<String>) -> Result<Self> {
        ensure!(scale > 0.0, "scale must be positive, but get {}", scale);
        Ok(Self {
            rect,
            scale,
            text: text.into(),
        })
    }

    pub fn rect(&self) -> &RotatedRect<R64> {
        &self.rect
    }

    pub fn scale(&self) -> R64 {
        self.scale
    }

    /// The free-text label, possibly empty.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Area in pixels.
    ///
    /// If `scaled` is false, the area is converted back to the resolution
    /// of the unscaled recording.
    pub fn size_pixels(&self, scaled: bool) -> R64 {
        let area = self.rect.area();
        if scaled {
            area
        } else {
            area / (self.scale * self.scale)
        }
    }

    /// Area in square centimeters, see [size_pixels](Self::size_pixels).
    pub fn size_cm2(&self, scaled: bool) -> R64 {
        self.size_pixels(scaled) / (PIXELS_PER_CM * PIXELS_PER_CM)
    }

    /// Longer side divided by shorter side.
    pub fn aspect(&self) -> R64 {
        self.rect.aspect()
    }

    /// Corner points as `[y, x]` pairs for drawing.
    pub fn corners(&self) -> [[R64; 2]; 4] {
        self.rect.corners()
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rect = &self.rect;
        write!(
            f,
            "Annotation (({:?}, {:?}), ({:?}, {:?}), {:?}) \"{}\"",
            rect.cx().raw(),
            rect.cy().raw(),
            rect.w().raw(),
            rect.h().raw(),
            rect.angle().raw(),
            self.text
        )
    }
}

/// Uniform transforms move the rectangle and accumulate their scaling
/// factor into the annotation scale.
impl<'a> Mul<&'a Annotation> for &'a Transform<R64> {
    type Output = Annotation;

    fn mul(self, rhs: &'a Annotation) -> Self::Output {
        Annotation {
            rect: self * &rhs.rect,
            scale: rhs.scale * self.sx,
            text: rhs.text.clone(),
        }
    }
}
