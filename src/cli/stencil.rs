//! Stencil command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, WeaveError};
use crate::output::{display_path, plural, Printer};
use crate::render::{read_png, write_png};
use crate::stencil::{check_stencil, mark_regions, StencilReport};

/// Check whether an image can be cut as a stencil
#[derive(Args, Debug)]
pub struct StencilArgs {
    /// Black-and-white image to check
    #[arg(required = true)]
    pub image: PathBuf,

    /// Write a copy with rejected regions outlined in red
    #[arg(long)]
    pub marked: Option<PathBuf>,
}

pub fn run(args: StencilArgs, printer: &Printer) -> Result<()> {
    let buffer = read_png(&args.image)?;
    printer.status("Checking", &display_path(&args.image));

    match check_stencil(&buffer) {
        StencilReport::Valid { cuts } => {
            printer.status(
                "Valid",
                &format!("stencil, {} made in this image", plural(cuts, "cut", "cuts")),
            );
            Ok(())
        }
        StencilReport::Invalid { white_regions } => {
            let background_regions = white_regions.len() - 1;
            printer.error(
                "Invalid",
                &format!(
                    "stencil, {}",
                    plural(background_regions, "background region", "background regions")
                ),
            );

            if let Some(path) = &args.marked {
                write_png(&mark_regions(&buffer, &white_regions), path, 1)?;
                printer.info("Wrote", &display_path(path));
            }

            Err(WeaveError::InvalidStencil { background_regions })
        }
    }
}
