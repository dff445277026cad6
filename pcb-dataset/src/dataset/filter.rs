use crate::common::*;

/// A closed `[min, max]` range where a zero bound leaves that side open.
///
/// Deserialized from a `[min, max]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const UNBOUNDED: Self = Self { min: 0.0, max: 0.0 };

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min <= 0.0 && self.max <= 0.0
    }

    pub fn admits(&self, value: f64) -> bool {
        let Self { min, max } = *self;
        !(min > 0.0 && value < min) && !(max > 0.0 && value > max)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl From<(f64, f64)> for Bounds {
    fn from((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }
}

impl From<[f64; 2]> for Bounds {
    fn from([min, max]: [f64; 2]) -> Self {
        Self { min, max }
    }
}

impl From<Bounds> for [f64; 2] {
    fn from(from: Bounds) -> Self {
        [from.min, from.max]
    }
}

/// Size and aspect-ratio criteria on annotations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IcFilter {
    /// Area range in cm², measured at the unscaled resolution.
    pub size: Bounds,
    /// Range of longer side over shorter side.
    pub aspect: Bounds,
}

impl IcFilter {
    pub fn admits(&self, annotation: &Annotation) -> bool {
        self.size.admits(annotation.size_cm2(false).raw())
            && self.aspect.admits(annotation.aspect().raw())
    }
}
