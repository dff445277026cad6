use super::CyCxHW;
use crate::{common::*, Transform};

/// A rectangle rotated about its center, angle in degrees.
///
/// Width and height are always strictly positive. The layout follows the
/// OpenCV rotated rectangle: `w` runs along the rotated x-axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RotatedRect<T> {
    pub(crate) cycxhw: CyCxHW<T>,
    pub(crate) angle: T,
}

impl<T> RotatedRect<T>
where
    T: Copy + Num + PartialOrd,
{
    pub fn try_from_cycxhw_angle(cycxhw: [T; 4], angle: T) -> Result<Self> {
        let [_, _, h, w] = cycxhw;
        let zero = T::zero();
        ensure!(
            h > zero && w > zero,
            "rotated box height and width must be positive"
        );
        let cycxhw = CyCxHW::try_from_cycxhw(cycxhw)?;
        Ok(Self { cycxhw, angle })
    }

    pub fn cy(&self) -> T {
        self.cycxhw.cy()
    }

    pub fn cx(&self) -> T {
        self.cycxhw.cx()
    }

    pub fn h(&self) -> T {
        self.cycxhw.h()
    }

    pub fn w(&self) -> T {
        self.cycxhw.w()
    }

    pub fn angle(&self) -> T {
        self.angle
    }

    pub fn area(&self) -> T {
        self.h() * self.w()
    }

    /// Longer side divided by shorter side, at least one.
    pub fn aspect(&self) -> T {
        let (h, w) = (self.h(), self.w());
        if h > w {
            h / w
        } else {
            w / h
        }
    }

    /// Apply the transform to the center and size.
    ///
    /// The angle is kept as is, which is only meaningful for uniform transforms.
    pub fn transform(&self, transform: &Transform<T>) -> Self {
        debug_assert!(transform.is_uniform());
        Self {
            cycxhw: self.cycxhw.transform(transform),
            angle: self.angle,
        }
    }
}

impl<T> RotatedRect<T>
where
    T: Float,
{
    /// The corner points as `[y, x]` pairs, in the order of OpenCV `boxPoints`.
    pub fn corners(&self) -> [[T; 2]; 4] {
        let two = T::one() + T::one();
        let (cy, cx, h, w) = (self.cy(), self.cx(), self.h(), self.w());
        let radians = self.angle.to_radians();
        let b = radians.cos() / two;
        let a = radians.sin() / two;

        let y0 = cy + b * h - a * w;
        let x0 = cx - a * h - b * w;
        let y1 = cy - b * h - a * w;
        let x1 = cx + a * h - b * w;

        [
            [y0, x0],
            [y1, x1],
            [two * cy - y0, two * cx - x0],
            [two * cy - y1, two * cx - x1],
        ]
    }
}

impl<T> Mul<&RotatedRect<T>> for &Transform<T>
where
    T: Copy + Num + PartialOrd,
{
    type Output = RotatedRect<T>;

    fn mul(self, rhs: &RotatedRect<T>) -> Self::Output {
        rhs.transform(self)
    }
}
