use crate::{common::*, TLBR};
use imageproc::point::Point;

impl<T> TLBR<T>
where
    T: Copy + Num + Ord,
{
    /// The pixel-inclusive bounding box of a point set.
    ///
    /// A point covers the whole pixel at its coordinate, so the box spans
    /// `max - min + 1` pixels along each axis, like `cv::boundingRect`.
    pub fn try_bounding_pixels(points: &[Point<T>]) -> Result<Self> {
        let (first, rest) = points
            .split_first()
            .ok_or_else(|| format_err!("cannot bound an empty point set"))?;

        let (t, l, b, r) = rest.iter().fold(
            (first.y, first.x, first.y, first.x),
            |(t, l, b, r), point| {
                (
                    t.min(point.y),
                    l.min(point.x),
                    b.max(point.y),
                    r.max(point.x),
                )
            },
        );

        Self::try_from_tlbr([t, l, b + T::one(), r + T::one()])
    }
}

/// Area of a quadrilateral given as consecutive corners, such as the output
/// of `imageproc::geometry::min_area_rect`.
pub fn quad_area<T>(quad: &[Point<T>; 4]) -> f64
where
    T: Copy + Into<f64>,
{
    let side = |lhs: &Point<T>, rhs: &Point<T>| {
        let dy = rhs.y.into() - lhs.y.into();
        let dx = rhs.x.into() - lhs.x.into();
        dy.hypot(dx)
    };
    side(&quad[0], &quad[1]) * side(&quad[1], &quad[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RectNum;
    use approx::assert_abs_diff_eq;

    #[test]
    fn bounding_pixels_inclusive() {
        let points = [Point::new(3, 4), Point::new(7, 4), Point::new(5, 9)];
        let rect = TLBR::try_bounding_pixels(&points).unwrap();
        assert_eq!(rect.tlhw(), [4, 3, 6, 5]);
    }

    #[test]
    fn bounding_single_pixel() {
        let rect = TLBR::try_bounding_pixels(&[Point::new(2, 2)]).unwrap();
        assert_eq!(rect.area(), 1);
    }

    #[test]
    fn bounding_empty_fails() {
        assert!(TLBR::<i32>::try_bounding_pixels(&[]).is_err());
    }

    #[test]
    fn quad_area_of_rotated_square() {
        let quad = [
            Point::new(0, 2),
            Point::new(2, 0),
            Point::new(4, 2),
            Point::new(2, 4),
        ];
        assert_abs_diff_eq!(quad_area(&quad), 8.0, epsilon = 1e-9);
    }

    #[test]
    fn quad_area_degenerate() {
        let quad = [Point::new(1, 1); 4];
        assert_abs_diff_eq!(quad_area(&quad), 0.0);
    }
}
