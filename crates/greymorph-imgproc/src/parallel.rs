use rayon::prelude::*;
use thiserror::Error;

use greymorph_image::Image;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),
}

/// Controls how the rows of an output image are scheduled.
///
/// Every output row depends only on the read-only source image, so all the
/// strategies produce identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool and process rows in parallel.
    #[default]
    ParallelRows,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    Fixed(usize),
}

impl ExecutionStrategy {
    /// Build a strategy from a thread count, `0` meaning the global pool.
    pub fn from_threads(num_threads: usize) -> Self {
        match num_threads {
            0 => ExecutionStrategy::ParallelRows,
            n => ExecutionStrategy::Fixed(n),
        }
    }

    fn validate(&self) -> Result<(), ParallelError> {
        match self {
            ExecutionStrategy::Fixed(0) => Err(ParallelError::InvalidThreadCount(0)),
            _ => Ok(()),
        }
    }
}

// runs `op` inside a freshly built pool of `num_threads` workers
fn install<R: Send>(num_threads: usize, op: impl FnOnce() -> R + Send) -> Result<R, ParallelError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .map_err(|e| ParallelError::BuildError(e.to_string()))?;

    Ok(pool.install(op))
}

/// Apply a function to every row of the destination image.
///
/// The function receives the row index and the mutable row slice of
/// `width * C` samples.
pub fn for_each_row<T, const C: usize>(
    dst: &mut Image<T, C>,
    strategy: ExecutionStrategy,
    f: impl Fn(usize, &mut [T]) + Send + Sync,
) -> Result<(), ParallelError>
where
    T: Send,
{
    strategy.validate()?;

    let stride = dst.cols() * C;
    if stride == 0 {
        return Ok(());
    }

    let rows = dst.as_slice_mut();
    match strategy {
        ExecutionStrategy::Serial => {
            rows.chunks_exact_mut(stride)
                .enumerate()
                .for_each(|(y, row)| f(y, row));
        }
        ExecutionStrategy::ParallelRows => {
            rows.par_chunks_exact_mut(stride)
                .enumerate()
                .for_each(|(y, row)| f(y, row));
        }
        ExecutionStrategy::Fixed(n) => {
            install(n, || {
                rows.par_chunks_exact_mut(stride)
                    .enumerate()
                    .for_each(|(y, row)| f(y, row));
            })?;
        }
    }

    Ok(())
}

/// Apply a function to each sample of the image, pairing source and destination.
///
/// The caller is responsible for checking that both images have the same size.
pub fn par_iter_rows_val<T1, T2, const C: usize>(
    src: &Image<T1, C>,
    dst: &mut Image<T2, C>,
    strategy: ExecutionStrategy,
    f: impl Fn(&T1, &mut T2) + Send + Sync,
) -> Result<(), ParallelError>
where
    T1: Sync,
    T2: Send,
{
    strategy.validate()?;

    let stride = src.cols() * C;
    if stride == 0 {
        return Ok(());
    }

    let src_rows = src.as_slice();
    let dst_rows = dst.as_slice_mut();
    let row_op = |(src_row, dst_row): (&[T1], &mut [T2])| {
        src_row
            .iter()
            .zip(dst_row.iter_mut())
            .for_each(|(src_pixel, dst_pixel)| f(src_pixel, dst_pixel));
    };

    match strategy {
        ExecutionStrategy::Serial => {
            src_rows
                .chunks_exact(stride)
                .zip(dst_rows.chunks_exact_mut(stride))
                .for_each(row_op);
        }
        ExecutionStrategy::ParallelRows => {
            src_rows
                .par_chunks_exact(stride)
                .zip(dst_rows.par_chunks_exact_mut(stride))
                .for_each(row_op);
        }
        ExecutionStrategy::Fixed(n) => {
            install(n, || {
                src_rows
                    .par_chunks_exact(stride)
                    .zip(dst_rows.par_chunks_exact_mut(stride))
                    .for_each(row_op);
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use greymorph_image::{GrayImage, ImageError, ImageSize};

    fn ramp(width: usize, height: usize) -> Result<GrayImage, ImageError> {
        let data = (0..width * height).map(|i| i as u8).collect();
        GrayImage::new(ImageSize { width, height }, data)
    }

    #[test]
    fn test_from_threads() {
        assert_eq!(
            ExecutionStrategy::from_threads(0),
            ExecutionStrategy::ParallelRows
        );
        assert_eq!(
            ExecutionStrategy::from_threads(3),
            ExecutionStrategy::Fixed(3)
        );
    }

    #[test]
    fn test_for_each_row_strategies() -> Result<(), Box<dyn std::error::Error>> {
        for strategy in [
            ExecutionStrategy::Serial,
            ExecutionStrategy::ParallelRows,
            ExecutionStrategy::Fixed(2),
        ] {
            let mut dst = GrayImage::from_size_val(
                ImageSize {
                    width: 3,
                    height: 4,
                },
                0,
            )?;
            for_each_row(&mut dst, strategy, |y, row| {
                row.iter_mut().for_each(|v| *v = y as u8);
            })?;
            assert_eq!(dst.as_slice(), &[0, 0, 0, 1, 1, 1, 2, 2, 2, 3, 3, 3]);
        }
        Ok(())
    }

    #[test]
    fn test_par_iter_rows_val() -> Result<(), Box<dyn std::error::Error>> {
        let src = ramp(4, 2)?;
        let mut serial = GrayImage::from_size_val(src.size(), 0)?;
        let mut parallel = GrayImage::from_size_val(src.size(), 0)?;

        par_iter_rows_val(&src, &mut serial, ExecutionStrategy::Serial, |s, d| {
            *d = *s * 2
        })?;
        par_iter_rows_val(&src, &mut parallel, ExecutionStrategy::ParallelRows, |s, d| {
            *d = *s * 2
        })?;

        assert_eq!(serial.as_slice(), &[0, 2, 4, 6, 8, 10, 12, 14]);
        assert_eq!(serial, parallel);
        Ok(())
    }

    #[test]
    fn test_fixed_zero_threads() -> Result<(), ImageError> {
        let mut dst = ramp(2, 2)?;
        let res = for_each_row(&mut dst, ExecutionStrategy::Fixed(0), |_, _| {});
        assert_eq!(res, Err(ParallelError::InvalidThreadCount(0)));
        Ok(())
    }

    #[test]
    fn test_empty_image_is_noop() -> Result<(), Box<dyn std::error::Error>> {
        let mut dst = GrayImage::new(
            ImageSize {
                width: 0,
                height: 0,
            },
            vec![],
        )?;
        for_each_row(&mut dst, ExecutionStrategy::Serial, |_, _| {
            panic!("no rows expected")
        })?;
        Ok(())
    }
}
