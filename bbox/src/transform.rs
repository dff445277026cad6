use crate::common::*;

/// Per-axis scaling followed by translation, `y' = y * sy + ty` and `x' = x * sx + tx`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transform<T> {
    pub sy: T,
    pub sx: T,
    pub ty: T,
    pub tx: T,
}

impl<T> Transform<T>
where
    T: Copy + Num,
{
    /// Uniform scaling about the origin.
    pub fn scale(scale: T) -> Self {
        Self {
            sy: scale,
            sx: scale,
            ty: T::zero(),
            tx: T::zero(),
        }
    }

    pub fn translate(ty: T, tx: T) -> Self {
        Self {
            sy: T::one(),
            sx: T::one(),
            ty,
            tx,
        }
    }

    /// Both axes are scaled by the same factor, so rotation angles survive the transform.
    pub fn is_uniform(&self) -> bool
    where
        T: PartialEq,
    {
        self.sy == self.sx
    }
}

/// `&a * &b` applies `b` first, then `a`.
impl<T> Mul<&Transform<T>> for &Transform<T>
where
    T: Copy + Num,
{
    type Output = Transform<T>;

    fn mul(self, rhs: &Transform<T>) -> Self::Output {
        Transform {
            sx: self.sx * rhs.sx,
            sy: self.sy * rhs.sy,
            tx: rhs.tx * self.sx + self.tx,
            ty: rhs.ty * self.sy + self.ty,
        }
    }
}
