use num_traits::{Bounded, Unsigned};

use greymorph_image::{Image, ImageError};

use super::MorphologyError;
use crate::parallel::{self, ExecutionStrategy};

/// Invert an image, replacing every sample `v` with `T::max_value() - v`.
///
/// For 8-bit images this is `255 - v`. The operation is a pure pointwise map:
/// each output sample depends only on the input sample at the same position.
/// Inverting twice gives back the original image.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image, same size as `src`.
/// * `strategy` - How the rows are scheduled.
///
/// # Examples
///
/// ```
/// use greymorph_image::{GrayImage, ImageSize};
/// use greymorph_imgproc::morphology::invert;
/// use greymorph_imgproc::parallel::ExecutionStrategy;
///
/// let src = GrayImage::new(ImageSize { width: 3, height: 1 }, vec![0, 100, 255]).unwrap();
/// let mut dst = GrayImage::from_size_val(src.size(), 0).unwrap();
///
/// invert(&src, &mut dst, ExecutionStrategy::Serial).unwrap();
/// assert_eq!(dst.as_slice(), &[255, 155, 0]);
/// ```
pub fn invert<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    strategy: ExecutionStrategy,
) -> Result<(), MorphologyError>
where
    T: Copy + Bounded + Unsigned + Send + Sync,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        )
        .into());
    }

    parallel::par_iter_rows_val(src, dst, strategy, |src_pixel, dst_pixel| {
        *dst_pixel = T::max_value() - *src_pixel;
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use greymorph_image::{GrayImage, ImageSize};

    #[test]
    fn test_invert_u8() -> Result<(), Box<dyn std::error::Error>> {
        let src = GrayImage::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0, 1, 128, 255],
        )?;
        let mut dst = GrayImage::from_size_val(src.size(), 0)?;
        invert(&src, &mut dst, ExecutionStrategy::Serial)?;
        assert_eq!(dst.as_slice(), &[255, 254, 127, 0]);
        Ok(())
    }

    #[test]
    fn test_invert_u16() -> Result<(), Box<dyn std::error::Error>> {
        let src = Image::<u16, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0, 1000],
        )?;
        let mut dst = Image::<u16, 1>::from_size_val(src.size(), 0)?;
        invert(&src, &mut dst, ExecutionStrategy::ParallelRows)?;
        assert_eq!(dst.as_slice(), &[u16::MAX, u16::MAX - 1000]);
        Ok(())
    }

    #[test]
    fn test_invert_twice_is_identity() -> Result<(), Box<dyn std::error::Error>> {
        let src = GrayImage::new(
            ImageSize {
                width: 3,
                height: 2,
            },
            vec![3, 14, 15, 92, 65, 35],
        )?;
        let mut once = GrayImage::from_size_val(src.size(), 0)?;
        let mut twice = GrayImage::from_size_val(src.size(), 0)?;
        invert(&src, &mut once, ExecutionStrategy::Serial)?;
        invert(&once, &mut twice, ExecutionStrategy::Serial)?;
        assert_eq!(twice, src);
        Ok(())
    }

    #[test]
    fn test_invert_size_mismatch() -> Result<(), ImageError> {
        let src = GrayImage::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0,
        )?;
        let mut dst = GrayImage::from_size_val(
            ImageSize {
                width: 3,
                height: 2,
            },
            0,
        )?;
        assert_eq!(
            invert(&src, &mut dst, ExecutionStrategy::Serial),
            Err(MorphologyError::Image(ImageError::InvalidImageSize(
                2, 2, 3, 2
            )))
        );
        Ok(())
    }
}
