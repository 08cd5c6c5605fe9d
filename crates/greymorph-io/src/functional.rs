use std::path::Path;

use greymorph_image::{GrayImage, ImageSize};

use crate::error::IoError;

/// Reads an image from the given file path as 8-bit greyscale.
///
/// The method tries to read from any image format supported by the image crate.
/// Colour images are converted to luma, so every readable file yields a single
/// channel image.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A greyscale image containing the image data.
pub fn read_image_any_gray8(file_path: impl AsRef<Path>) -> Result<GrayImage, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let img = image::ImageReader::open(file_path)?
        .with_guessed_format()?
        .decode()?;

    log::debug!(
        "decoded {} as {:?} ({}x{})",
        file_path.display(),
        img.color(),
        img.width(),
        img.height()
    );

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    Ok(GrayImage::new(size, img.into_luma8().into_raw())?)
}

/// Writes a greyscale image to the given file path.
///
/// The output format is chosen from the file extension.
///
/// # Arguments
///
/// * `file_path` - The path to the output image.
/// * `image` - The greyscale image to write.
pub fn write_image_gray8(file_path: impl AsRef<Path>, image: &GrayImage) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    let format = image::ImageFormat::from_path(file_path)
        .map_err(|_| IoError::InvalidFileExtension(file_path.to_path_buf()))?;

    if format == image::ImageFormat::Png {
        return crate::png::write_image_png_gray8(file_path, image);
    }

    let [width, height]: [u32; 2] = image.size().into();
    image::save_buffer_with_format(
        file_path,
        image.as_slice(),
        width,
        height,
        image::ColorType::L8,
        format,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use greymorph_image::ImageSize;

    fn gradient() -> Result<GrayImage, IoError> {
        let data = (0..6 * 4).map(|i| (i * 10) as u8).collect();
        Ok(GrayImage::new(
            ImageSize {
                width: 6,
                height: 4,
            },
            data,
        )?)
    }

    #[test]
    fn read_write_any_lossless() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let image = gradient()?;

        for name in ["out.png", "out.pgm", "out.tiff"] {
            let file_path = tmp_dir.path().join(name);
            write_image_gray8(&file_path, &image)?;
            let back = read_image_any_gray8(&file_path)?;
            assert_eq!(back, image, "{name}");
        }

        Ok(())
    }

    #[test]
    fn write_png_is_mono8() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("mono.png");
        let image = gradient()?;

        write_image_gray8(&file_path, &image)?;
        let back = crate::png::read_image_png_mono8(&file_path)?;
        assert_eq!(back, image);

        Ok(())
    }

    #[test]
    fn read_rgb_as_gray() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("white.png");
        image::RgbImage::from_pixel(3, 2, image::Rgb([255, 255, 255])).save(&file_path)?;

        let gray = read_image_any_gray8(&file_path)?;
        assert_eq!(gray.size().width, 3);
        assert_eq!(gray.size().height, 2);
        assert!(gray.as_slice().iter().all(|&v| v == 255));

        Ok(())
    }

    #[test]
    fn read_missing_file() {
        let res = read_image_any_gray8("does/not/exist.png");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn read_garbage() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("garbage.png");
        std::fs::write(&file_path, b"definitely not an image")?;

        let res = read_image_any_gray8(&file_path);
        assert!(matches!(res, Err(IoError::ImageDecodeError(_))));

        Ok(())
    }

    #[test]
    fn write_unknown_extension() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let res = write_image_gray8(tmp_dir.path().join("out.nope"), &gradient()?);
        assert!(matches!(res, Err(IoError::InvalidFileExtension(_))));
        Ok(())
    }
}
