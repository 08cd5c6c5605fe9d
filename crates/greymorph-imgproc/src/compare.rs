use greymorph_image::{GrayImage, ImageError};

/// Summary of a pixelwise comparison between two images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareReport {
    /// True when every pixel is equal.
    pub identical: bool,
    /// Number of positions holding different values.
    pub differing_pixels: usize,
    /// Largest absolute difference found.
    pub max_abs_difference: u8,
}

fn check_sizes(a: &GrayImage, b: &GrayImage) -> Result<(), ImageError> {
    if a.size() != b.size() {
        return Err(ImageError::InvalidImageSize(
            a.width(),
            a.height(),
            b.width(),
            b.height(),
        ));
    }
    Ok(())
}

/// Saturating pixelwise difference `dst = max(a - b, 0)`.
///
/// # Arguments
///
/// * `a` - The minuend image.
/// * `b` - The subtrahend image.
/// * `dst` - The destination image, same size as the inputs.
///
/// # Examples
///
/// ```
/// use greymorph_image::{GrayImage, ImageSize};
/// use greymorph_imgproc::compare::subtract_saturating;
///
/// let size = ImageSize { width: 3, height: 1 };
/// let a = GrayImage::new(size, vec![10, 20, 30]).unwrap();
/// let b = GrayImage::new(size, vec![5, 25, 30]).unwrap();
/// let mut diff = GrayImage::from_size_val(size, 0).unwrap();
///
/// subtract_saturating(&a, &b, &mut diff).unwrap();
/// assert_eq!(diff.as_slice(), &[5, 0, 0]);
/// ```
pub fn subtract_saturating(
    a: &GrayImage,
    b: &GrayImage,
    dst: &mut GrayImage,
) -> Result<(), ImageError> {
    check_sizes(a, b)?;
    check_sizes(a, dst)?;

    dst.as_slice_mut()
        .iter_mut()
        .zip(a.as_slice().iter().zip(b.as_slice()))
        .for_each(|(out, (&va, &vb))| *out = va.saturating_sub(vb));

    Ok(())
}

/// Compare two images pixel by pixel.
///
/// Differences in either direction count, so an image darker than its
/// reference is reported as different as well.
pub fn compare(a: &GrayImage, b: &GrayImage) -> Result<CompareReport, ImageError> {
    check_sizes(a, b)?;

    let (differing_pixels, max_abs_difference) = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&va, &vb)| va.abs_diff(vb))
        .filter(|&d| d > 0)
        .fold((0usize, 0u8), |(count, max), d| (count + 1, max.max(d)));

    Ok(CompareReport {
        identical: differing_pixels == 0,
        differing_pixels,
        max_abs_difference,
    })
}
