//! Exact-size resampling of decoded images.

use crate::utils::{ConverterError, ConverterResult};
use fast_image_resize as fr;
use image::{ImageBuffer, Rgb, RgbImage, imageops};
use tracing::warn;

/// Resize an RGB image to exactly `width x height` with Lanczos3 resampling.
///
/// No aspect-ratio correction is applied. Uses `fast_image_resize` and falls
/// back to `image::imageops::resize` if the fast path rejects the buffer.
pub fn resize_exact(src: &RgbImage, width: u32, height: u32) -> ConverterResult<RgbImage> {
    match resize_fast(src, width, height) {
        Ok(resized) => Ok(resized),
        Err(err) => {
            warn!("fast_image_resize failed, falling back to imageops: {}", err);
            Ok(imageops::resize(
                src,
                width,
                height,
                imageops::FilterType::Lanczos3,
            ))
        }
    }
}

fn resize_fast(src: &RgbImage, width: u32, height: u32) -> ConverterResult<RgbImage> {
    let (src_width, src_height) = src.dimensions();

    let src_image = fr::images::Image::from_vec_u8(
        src_width,
        src_height,
        src.as_raw().clone(),
        fr::PixelType::U8x3,
    )
    .map_err(|e| ConverterError::image(format!("Failed to build source buffer: {}", e)))?;

    let mut dst_image = fr::images::Image::new(width, height, fr::PixelType::U8x3);

    let mut resizer = fr::Resizer::new();
    let options = fr::ResizeOptions::new()
        .resize_alg(fr::ResizeAlg::Convolution(fr::FilterType::Lanczos3));

    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| ConverterError::image(format!("Resize failed: {}", e)))?;

    ImageBuffer::<Rgb<u8>, Vec<u8>>::from_raw(width, height, dst_image.into_vec())
        .ok_or_else(|| ConverterError::image("Resized buffer has unexpected length"))
}
