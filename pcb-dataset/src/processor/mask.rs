use crate::common::*;
use num_traits::Zero;

/// Set every pixel to black where the mask is zero.
///
/// Gray, RGB and RGBA images keep their layout, other layouts are
/// converted to RGB first. The mask must have the same size as the image.
pub fn apply_mask(image: DynamicImage, mask: &GrayImage) -> DynamicImage {
    debug_assert_eq!(image.width(), mask.width());
    debug_assert_eq!(image.height(), mask.height());

    match image {
        DynamicImage::ImageLuma8(mut image) => {
            zero_masked_pixels(&mut image, mask);
            DynamicImage::ImageLuma8(image)
        }
        DynamicImage::ImageRgba8(mut image) => {
            zero_masked_pixels(&mut image, mask);
            DynamicImage::ImageRgba8(image)
        }
        image => {
            let mut image = image.into_rgb8();
            zero_masked_pixels(&mut image, mask);
            DynamicImage::ImageRgb8(image)
        }
    }
}

fn zero_masked_pixels<P>(image: &mut ImageBuffer<P, Vec<P::Subpixel>>, mask: &GrayImage)
where
    P: Pixel,
{
    image
        .pixels_mut()
        .zip(mask.pixels())
        .filter(|(_, Luma([value]))| *value == 0)
        .for_each(|(pixel, _)| {
            pixel
                .channels_mut()
                .iter_mut()
                .for_each(|channel| *channel = P::Subpixel::zero());
        });
}
