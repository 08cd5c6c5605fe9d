use greymorph::image::ImageError;
use greymorph::imgproc::morphology::MorphologyError;
use greymorph::io::error::IoError;

/// Errors surfaced by the command line front-end.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// A required path argument was not supplied.
    #[error("Not enough arguments - {0}")]
    MissingArgument(&'static str),

    /// More path arguments than the operation takes.
    #[error("Too many arguments - expected 2 paths, got {0}")]
    TooManyArguments(usize),

    /// An option was given to a command that does not take it.
    #[error("Unexpected option - {0} is only accepted by compare")]
    UnexpectedOption(&'static str),

    /// Reading or writing an image failed.
    #[error(transparent)]
    Io(#[from] IoError),

    /// The morphological operation failed.
    #[error(transparent)]
    Morphology(#[from] MorphologyError),

    /// The images could not be compared.
    #[error(transparent)]
    Image(#[from] ImageError),
}
