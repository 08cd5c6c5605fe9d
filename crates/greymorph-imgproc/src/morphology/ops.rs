use num_traits::{Bounded, Unsigned};

use greymorph_image::{Image, ImageError};

use super::invert::invert;
use super::neighborhood::{window_extremum, KERNEL_RADIUS};
use super::MorphologyError;
use crate::parallel::{self, ExecutionStrategy};

fn check_src_dst<T>(src: &Image<T, 1>, dst: &Image<T, 1>) -> Result<(), MorphologyError> {
    if src.is_empty() {
        return Err(MorphologyError::EmptyImage);
    }

    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        )
        .into());
    }

    Ok(())
}

// writes `pick` over every 5x5 window of `src` into `dst`
fn sliding_extremum<T>(
    src: &Image<T, 1>,
    dst: &mut Image<T, 1>,
    strategy: ExecutionStrategy,
    pick: impl Fn(T, T) -> T + Send + Sync,
) -> Result<(), MorphologyError>
where
    T: Copy + Send + Sync,
{
    parallel::for_each_row(dst, strategy, |y, row| {
        row.iter_mut().enumerate().for_each(|(x, out)| {
            *out = window_extremum(src, x, y, KERNEL_RADIUS, &pick);
        });
    })?;

    Ok(())
}

/// Erode an image with the 5x5 square structuring element.
///
/// Each pixel is replaced by the minimum over its in-bounds 5x5 neighborhood,
/// which shrinks bright regions and grows dark ones.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image (will be overwritten).
/// * `strategy` - How the output rows are scheduled.
///
/// # Returns
///
/// Ok(()) on success, [`MorphologyError::EmptyImage`] for a zero-sized image,
/// or an image error if the shapes don't match.
///
/// # Examples
///
/// ```
/// use greymorph_image::{GrayImage, ImageSize};
/// use greymorph_imgproc::morphology::erode;
/// use greymorph_imgproc::parallel::ExecutionStrategy;
///
/// let mut data = vec![100u8; 25];
/// data[12] = 0;
/// let src = GrayImage::new(ImageSize { width: 5, height: 5 }, data).unwrap();
/// let mut dst = GrayImage::from_size_val(src.size(), 0).unwrap();
///
/// erode(&src, &mut dst, ExecutionStrategy::Serial).unwrap();
/// assert!(dst.as_slice().iter().all(|&v| v == 0));
/// ```
pub fn erode<T>(
    src: &Image<T, 1>,
    dst: &mut Image<T, 1>,
    strategy: ExecutionStrategy,
) -> Result<(), MorphologyError>
where
    T: Copy + Ord + Send + Sync,
{
    check_src_dst(src, dst)?;
    log::debug!("erode {} with {:?}", src.size(), strategy);

    sliding_extremum(src, dst, strategy, std::cmp::min)
}

/// Dilate an image with the 5x5 square structuring element.
///
/// Computed through the erosion/dilation duality as `invert(erode(invert(src)))`,
/// which equals replacing each pixel with the maximum over its in-bounds 5x5
/// neighborhood (see [`dilate_direct`]).
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image (will be overwritten).
/// * `strategy` - How the output rows are scheduled.
///
/// # Returns
///
/// Ok(()) on success, [`MorphologyError::EmptyImage`] for a zero-sized image,
/// or an image error if the shapes don't match.
pub fn dilate<T>(
    src: &Image<T, 1>,
    dst: &mut Image<T, 1>,
    strategy: ExecutionStrategy,
) -> Result<(), MorphologyError>
where
    T: Copy + Ord + Bounded + Unsigned + Send + Sync,
{
    check_src_dst(src, dst)?;
    log::debug!("dilate {} with {:?}", src.size(), strategy);

    let mut inverted = src.clone();
    invert(src, &mut inverted, strategy)?;

    let mut eroded = src.clone();
    erode(&inverted, &mut eroded, strategy)?;

    invert(&eroded, dst, strategy)
}

/// Dilate an image by taking the maximum over each 5x5 neighborhood directly.
///
/// Bit-identical to [`dilate`]; useful as an independent reference.
pub fn dilate_direct<T>(
    src: &Image<T, 1>,
    dst: &mut Image<T, 1>,
    strategy: ExecutionStrategy,
) -> Result<(), MorphologyError>
where
    T: Copy + Ord + Send + Sync,
{
    check_src_dst(src, dst)?;
    log::debug!("dilate_direct {} with {:?}", src.size(), strategy);

    sliding_extremum(src, dst, strategy, std::cmp::max)
}

/// Opening: erosion followed by dilation.
///
/// Removes bright details smaller than the structuring element while keeping
/// the overall shape.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image (will be overwritten).
/// * `strategy` - How the output rows are scheduled.
pub fn open<T>(
    src: &Image<T, 1>,
    dst: &mut Image<T, 1>,
    strategy: ExecutionStrategy,
) -> Result<(), MorphologyError>
where
    T: Copy + Ord + Bounded + Unsigned + Send + Sync,
{
    check_src_dst(src, dst)?;

    let mut temp_img = src.clone();
    erode(src, &mut temp_img, strategy)?;
    dilate(&temp_img, dst, strategy)?;
    Ok(())
}

/// Closing: dilation followed by erosion.
///
/// Fills dark gaps smaller than the structuring element.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image (will be overwritten).
/// * `strategy` - How the output rows are scheduled.
pub fn close<T>(
    src: &Image<T, 1>,
    dst: &mut Image<T, 1>,
    strategy: ExecutionStrategy,
) -> Result<(), MorphologyError>
where
    T: Copy + Ord + Bounded + Unsigned + Send + Sync,
{
    check_src_dst(src, dst)?;

    let mut temp_img = src.clone();
    dilate(src, &mut temp_img, strategy)?;
    erode(&temp_img, dst, strategy)?;
    Ok(())
}
