use crate::common::*;
use bbox::quad_area;
use image::imageops;
use imageproc::{
    contours::{find_contours, BorderType, Contour},
    geometry::min_area_rect,
    point::Point,
};

/// Locate the board within a mask.
///
/// Among the external contours of the non-zero regions, the one with the
/// largest minimum-area rotated rectangle is selected, and its axis-aligned
/// pixel bounding box is returned. On equal areas the contour found first
/// in raster order wins. Returns `None` if the mask has no foreground.
pub fn crop_box(mask: &GrayImage) -> Option<TLBR<u32>> {
    // contours are only traced on regions that do not touch the image border
    let padded = pad_mask(mask);
    let contours: Vec<Contour<i32>> = find_contours(&padded);

    let (largest, _) = contours
        .into_iter()
        .filter(|contour| {
            matches!(contour.border_type, BorderType::Outer)
                && contour.parent.is_none()
                && !contour.points.is_empty()
        })
        .map(|contour| {
            let points: Vec<Point<i32>> = contour
                .points
                .iter()
                .map(|point| Point::new(point.x - 1, point.y - 1))
                .collect();
            let area = quad_area(&min_area_rect(&points));
            (points, area)
        })
        .fold(None, |largest: Option<(Vec<_>, f64)>, (points, area)| match largest {
            Some(prev) if area <= prev.1 => Some(prev),
            _ => Some((points, area)),
        })?;

    TLBR::try_bounding_pixels(&largest).ok()?.try_cast()
}

/// Surround the mask with a one-pixel background border.
fn pad_mask(mask: &GrayImage) -> GrayImage {
    let (width, height) = mask.dimensions();
    let mut padded = GrayImage::new(width + 2, height + 2);
    imageops::replace(&mut padded, mask, 1, 1);
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_with_blobs(width: u32, height: u32, blobs: &[[u32; 4]]) -> GrayImage {
        GrayImage::from_fn(width, height, |x, y| {
            let inside = blobs
                .iter()
                .any(|&[t, l, h, w]| (t..t + h).contains(&y) && (l..l + w).contains(&x));
            Luma([if inside { 255 } else { 0 }])
        })
    }

    #[test]
    fn select_largest_blob() {
        // 10x10 = 100 px² and 20x25 = 500 px²
        let mask = mask_with_blobs(80, 60, &[[5, 5, 10, 10], [20, 40, 20, 25]]);
        let rect = crop_box(&mask).unwrap();
        assert_eq!(rect.tlhw(), [20, 40, 20, 25]);
    }

    #[test]
    fn select_largest_blob_regardless_of_order() {
        let mask = mask_with_blobs(80, 60, &[[2, 2, 20, 25], [40, 60, 10, 10]]);
        let rect = crop_box(&mask).unwrap();
        assert_eq!(rect.tlhw(), [2, 2, 20, 25]);
    }

    #[test]
    fn tie_keeps_first_in_raster_order() {
        let mask = mask_with_blobs(60, 60, &[[30, 5, 10, 10], [5, 40, 10, 10]]);
        let rect = crop_box(&mask).unwrap();
        assert_eq!(rect.tlhw(), [5, 40, 10, 10]);
    }

    #[test]
    fn holes_are_ignored() {
        let mut mask = mask_with_blobs(50, 50, &[[5, 5, 40, 40]]);
        (15..35).for_each(|y| (15..35).for_each(|x| mask.put_pixel(x, y, Luma([0]))));
        // an island inside the hole is not an external contour
        (20..30).for_each(|y| (20..30).for_each(|x| mask.put_pixel(x, y, Luma([255]))));

        let rect = crop_box(&mask).unwrap();
        assert_eq!(rect.tlhw(), [5, 5, 40, 40]);
    }

    #[test]
    fn full_mask() {
        let mask = GrayImage::from_pixel(16, 8, Luma([1]));
        let rect = crop_box(&mask).unwrap();
        assert_eq!(rect.tlhw(), [0, 0, 8, 16]);
    }

    #[test]
    fn blob_touching_edges() {
        // touches the left, top and bottom borders
        let mask = mask_with_blobs(40, 40, &[[0, 0, 40, 20], [10, 30, 5, 5]]);
        let rect = crop_box(&mask).unwrap();
        assert_eq!(rect.tlhw(), [0, 0, 40, 20]);

        let mask = mask_with_blobs(40, 30, &[[5, 25, 20, 15]]);
        let rect = crop_box(&mask).unwrap();
        assert_eq!(rect.tlhw(), [5, 25, 20, 15]);
    }

    #[test]
    fn empty_mask() {
        let mask = GrayImage::new(16, 16);
        assert!(crop_box(&mask).is_none());
    }
}
