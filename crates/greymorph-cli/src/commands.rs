use std::path::{Path, PathBuf};

use greymorph::image::GrayImage;
use greymorph::imgproc::compare::{self, CompareReport};
use greymorph::io::functional as F;

use crate::args::{Args, Command, MorphOp};
use crate::error::CliError;

/// Splits the positional paths into the two the operations expect.
fn two_paths(
    paths: &[PathBuf],
    first: &'static str,
    second: &'static str,
) -> Result<(PathBuf, PathBuf), CliError> {
    match paths {
        [] => Err(CliError::MissingArgument(first)),
        [_] => Err(CliError::MissingArgument(second)),
        [a, b] => Ok((a.clone(), b.clone())),
        _ => Err(CliError::TooManyArguments(paths.len())),
    }
}

/// Run the command described by `args`.
pub fn run(args: &Args) -> Result<(), CliError> {
    match args.command {
        Command::Compare => {
            let (result, reference) = two_paths(
                &args.paths,
                "no result image specified",
                "no reference image specified",
            )?;
            let report = run_compare(&result, &reference, args.diff.as_deref())?;
            println!("{}", if report.identical { "same" } else { "diff" });
        }
        Command::Morph(op) => {
            if args.diff.is_some() {
                return Err(CliError::UnexpectedOption("--diff"));
            }
            let (input, output) = two_paths(
                &args.paths,
                "no input image specified",
                "no output image specified",
            )?;
            run_morphology(op, &input, &output, args)?;
        }
    }

    Ok(())
}

/// Read `input`, apply `op` and write the result to `output`.
pub fn run_morphology(
    op: MorphOp,
    input: &Path,
    output: &Path,
    args: &Args,
) -> Result<(), CliError> {
    let src = F::read_image_any_gray8(input)?;
    log::debug!("loaded {} ({})", input.display(), src.size());

    let mut dst = GrayImage::from_size_val(src.size(), 0)?;
    op.apply(&src, &mut dst, args.strategy())?;

    F::write_image_gray8(output, &dst)?;
    log::info!("Wrote {} image to {}", op.participle(), output.display());

    Ok(())
}

/// Compare `result` against `reference`, optionally writing `result - reference`.
pub fn run_compare(
    result: &Path,
    reference: &Path,
    diff: Option<&Path>,
) -> Result<CompareReport, CliError> {
    let a = F::read_image_any_gray8(result)?;
    let b = F::read_image_any_gray8(reference)?;

    let report = compare::compare(&a, &b)?;
    log::info!(
        "{} pixels differ, max difference {}",
        report.differing_pixels,
        report.max_abs_difference
    );

    if let Some(diff_path) = diff {
        let mut difference = GrayImage::from_size_val(a.size(), 0)?;
        compare::subtract_saturating(&a, &b, &mut difference)?;
        F::write_image_gray8(diff_path, &difference)?;
        log::info!("Wrote difference image to {}", diff_path.display());
    }

    Ok(report)
}
