use crate::common::*;

/// Edges of an axis-aligned box in pixel coordinates.
pub trait Rect {
    type Type;

    fn t(&self) -> Self::Type;
    fn l(&self) -> Self::Type;
    fn b(&self) -> Self::Type;
    fn r(&self) -> Self::Type;
}

/// Size and layout measurements derived from the edges.
pub trait RectNum: Rect
where
    Self::Type: Num + PartialOrd,
{
    fn h(&self) -> Self::Type {
        self.b() - self.t()
    }

    fn w(&self) -> Self::Type {
        self.r() - self.l()
    }

    fn tlbr(&self) -> [Self::Type; 4] {
        [self.t(), self.l(), self.b(), self.r()]
    }

    /// The `[top, left, height, width]` layout used for image cropping.
    fn tlhw(&self) -> [Self::Type; 4] {
        [self.t(), self.l(), self.h(), self.w()]
    }

    fn area(&self) -> Self::Type {
        self.h() * self.w()
    }

    /// Check whether the box lies within an image of size `h` x `w`.
    fn fits_within(&self, h: Self::Type, w: Self::Type) -> bool {
        let zero = Self::Type::zero();
        self.t() >= zero && self.l() >= zero && self.b() <= h && self.r() <= w
    }
}

impl<T> RectNum for T
where
    T: Rect,
    T::Type: Num + PartialOrd,
{
}
