use greymorph_image::{Image, ImageError};

use super::MorphologyError;

/// Radius of the square structuring element, giving a 5x5 window.
pub const KERNEL_RADIUS: usize = 2;

/// Clipped window bounds `[lo, hi]` of `center ± radius` inside `[0, len)`.
#[inline]
fn window_bounds(center: usize, radius: usize, len: usize) -> (usize, usize) {
    (
        center.saturating_sub(radius),
        center.saturating_add(radius).min(len - 1),
    )
}

/// Folds `pick` over the in-bounds samples of the window centered at `(x, y)`.
///
/// The caller guarantees that `(x, y)` lies inside a non-empty image, so the
/// center sample seeds the fold and the window is never empty.
#[inline]
pub(crate) fn window_extremum<T: Copy>(
    src: &Image<T, 1>,
    x: usize,
    y: usize,
    radius: usize,
    pick: impl Fn(T, T) -> T,
) -> T {
    let width = src.width();
    let data = src.as_slice();
    let (x0, x1) = window_bounds(x, radius, width);
    let (y0, y1) = window_bounds(y, radius, src.height());

    (y0..=y1)
        .flat_map(|wy| &data[wy * width + x0..=wy * width + x1])
        .fold(data[y * width + x], |acc, &v| pick(acc, v))
}

fn check_coordinates<T>(src: &Image<T, 1>, x: usize, y: usize) -> Result<(), MorphologyError> {
    if src.is_empty() {
        return Err(MorphologyError::EmptyImage);
    }
    if x >= src.width() || y >= src.height() {
        return Err(ImageError::PixelIndexOutOfBounds(x, y, src.width(), src.height()).into());
    }
    Ok(())
}

/// Minimum sample over the square window of `radius` centered at `(x, y)`.
///
/// Only coordinates inside the image take part; near the borders the window is
/// clipped, so a corner pixel with radius 2 sees 9 samples. The center pixel is
/// always included.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `x` - Column of the center pixel.
/// * `y` - Row of the center pixel.
/// * `radius` - Half size of the window; `2` gives the 5x5 structuring element.
///
/// # Errors
///
/// [`MorphologyError::EmptyImage`] for a zero-sized image, and an out of bounds
/// error if `(x, y)` is not inside the image.
///
/// # Examples
///
/// ```
/// use greymorph_image::{GrayImage, ImageSize};
/// use greymorph_imgproc::morphology::neighborhood_min;
///
/// let image = GrayImage::new(
///     ImageSize { width: 3, height: 3 },
///     vec![9, 8, 7, 6, 5, 4, 3, 2, 1],
/// ).unwrap();
///
/// assert_eq!(neighborhood_min(&image, 0, 0, 1).unwrap(), 5);
/// assert_eq!(neighborhood_min(&image, 1, 1, 1).unwrap(), 1);
/// ```
pub fn neighborhood_min<T>(
    src: &Image<T, 1>,
    x: usize,
    y: usize,
    radius: usize,
) -> Result<T, MorphologyError>
where
    T: Copy + Ord,
{
    check_coordinates(src, x, y)?;
    Ok(window_extremum(src, x, y, radius, std::cmp::min))
}

/// Maximum sample over the square window of `radius` centered at `(x, y)`.
///
/// Same window semantics as [`neighborhood_min`].
pub fn neighborhood_max<T>(
    src: &Image<T, 1>,
    x: usize,
    y: usize,
    radius: usize,
) -> Result<T, MorphologyError>
where
    T: Copy + Ord,
{
    check_coordinates(src, x, y)?;
    Ok(window_extremum(src, x, y, radius, std::cmp::max))
}
