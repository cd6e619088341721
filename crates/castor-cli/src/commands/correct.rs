//! Magenta star correction command.
//!
//! Loads an image, removes magenta star halos, and writes the result at
//! the input's bit depth.

use crate::CorrectArgs;
use anyhow::Result;
use castor_io::ImageData;
use castor_ops::correct_magenta_stars;
use tracing::{debug, info};

pub fn run(args: CorrectArgs, verbose: bool) -> Result<()> {
    debug!(input = %args.input.display(), amount = args.amount, "correct::run");

    let image = super::load_image(&args.input)?;
    super::ensure_color_image(&image, "correct")?;

    if verbose {
        println!(
            "Correcting {} ({}x{}, amount {:.2})",
            args.input.display(),
            image.width,
            image.height,
            args.amount.clamp(0.0, 1.0)
        );
    }

    let corrected = correct_magenta_stars(&image.to_image_f32()?, args.amount)?;

    // Quantize back to the input's storage format.
    let output = ImageData::from_image(&corrected).convert_to(image.format);
    super::save_image(&args.output, &output)?;

    info!(output = %args.output.display(), "correction written");
    if verbose {
        println!("Wrote {}", args.output.display());
    }

    Ok(())
}
