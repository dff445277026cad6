use crate::common::*;
use image::imageops::{self, FilterType};

/// Compute the `[width, height]` of an image rescaled by `scale`.
///
/// Each side is rounded to the nearest integer and kept at least one pixel.
pub fn scaled_size(width: u32, height: u32, scale: R64) -> [u32; 2] {
    let scale_side = |side: u32| -> u32 {
        let side = (side as f64 * scale.raw()).round();
        side.max(1.0) as u32
    };
    [scale_side(width), scale_side(height)]
}

/// Rescale a decoded recording image with bilinear resampling.
pub fn rescale_image(image: DynamicImage, scale: R64) -> DynamicImage {
    if scale == 1.0 {
        return image;
    }
    let [width, height] = scaled_size(image.width(), image.height(), scale);
    image.resize_exact(width, height, FilterType::Triangle)
}

/// Rescale a single-channel mask, see [rescale_image].
pub fn rescale_mask(mask: GrayImage, scale: R64) -> GrayImage {
    if scale == 1.0 {
        return mask;
    }
    let [width, height] = scaled_size(mask.width(), mask.height(), scale);
    imageops::resize(&mask, width, height, FilterType::Triangle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_size_rounding() {
        assert_eq!(scaled_size(100, 50, r64(0.5)), [50, 25]);
        assert_eq!(scaled_size(101, 51, r64(0.5)), [51, 26]);
        assert_eq!(scaled_size(3, 3, r64(0.1)), [1, 1]);
        assert_eq!(scaled_size(10, 20, r64(2.0)), [20, 40]);
    }

    #[test]
    fn unit_scale_is_noop() {
        let mask = GrayImage::from_fn(7, 5, |x, y| Luma([(x * y) as u8]));
        let rescaled = rescale_mask(mask.clone(), r64(1.0));
        assert_eq!(rescaled, mask);
    }

    #[test]
    fn rescale_image_dimensions() {
        let image = DynamicImage::new_rgb8(40, 30);
        let rescaled = rescale_image(image, r64(1.5));
        assert_eq!((rescaled.width(), rescaled.height()), (60, 45));
    }
}
