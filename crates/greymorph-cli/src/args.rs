use std::{fmt, path::PathBuf, str::FromStr};

use argh::FromArgs;
use greymorph::image::GrayImage;
use greymorph::imgproc::morphology::{self, MorphologyError};
use greymorph::imgproc::parallel::ExecutionStrategy;

#[derive(FromArgs, Debug)]
/// Greyscale morphology with a 5x5 square structuring element
pub struct Args {
    /// command to run: erode, dilate, open, close or compare
    #[argh(positional)]
    pub command: Command,

    /// input and output image paths, or result and reference for compare
    #[argh(positional, arg_name = "path")]
    pub paths: Vec<PathBuf>,

    /// number of worker threads, 0 uses the global pool (default: 0)
    #[argh(option, short = 't', default = "0")]
    pub threads: usize,

    /// where to write the difference image, compare only
    #[argh(option)]
    pub diff: Option<PathBuf>,
}

impl Args {
    /// The execution strategy selected by `--threads`.
    pub fn strategy(&self) -> ExecutionStrategy {
        ExecutionStrategy::from_threads(self.threads)
    }
}

/// A command selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Apply a morphological operation and write the result.
    Morph(MorphOp),
    /// Compare a result image against a reference.
    Compare,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Command::Morph(op) => fmt::Display::fmt(op, f),
            Command::Compare => f.write_str("compare"),
        }
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("compare") {
            return Ok(Command::Compare);
        }

        s.parse().map(Command::Morph).map_err(|_| {
            format!("unknown command '{s}', expected erode, dilate, open, close or compare")
        })
    }
}

/// A morphological operation with a 5x5 square structuring element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphOp {
    Erode,
    Dilate,
    Open,
    Close,
}

impl MorphOp {
    /// Run the operation on `src`, writing into `dst`.
    pub fn apply(
        &self,
        src: &GrayImage,
        dst: &mut GrayImage,
        strategy: ExecutionStrategy,
    ) -> Result<(), MorphologyError> {
        match self {
            MorphOp::Erode => morphology::erode(src, dst, strategy),
            MorphOp::Dilate => morphology::dilate(src, dst, strategy),
            MorphOp::Open => morphology::open(src, dst, strategy),
            MorphOp::Close => morphology::close(src, dst, strategy),
        }
    }

    /// Past participle used in log messages, e.g. "eroded".
    pub fn participle(&self) -> &'static str {
        match self {
            MorphOp::Erode => "eroded",
            MorphOp::Dilate => "dilated",
            MorphOp::Open => "opened",
            MorphOp::Close => "closed",
        }
    }
}

impl fmt::Display for MorphOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            MorphOp::Erode => "erode",
            MorphOp::Dilate => "dilate",
            MorphOp::Open => "open",
            MorphOp::Close => "close",
        };
        f.write_str(name)
    }
}

impl FromStr for MorphOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "erode" => Ok(MorphOp::Erode),
            "dilate" => Ok(MorphOp::Dilate),
            "open" => Ok(MorphOp::Open),
            "close" => Ok(MorphOp::Close),
            other => Err(format!(
                "unknown operation '{other}', expected erode, dilate, open or close"
            )),
        }
    }
}
