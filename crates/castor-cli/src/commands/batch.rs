//! Batch correction command

use crate::BatchArgs;
use anyhow::{Result, bail};
use castor_io::ImageData;
use castor_ops::correct_magenta_stars;
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::{info, trace};

pub fn run(args: BatchArgs, verbose: bool) -> Result<()> {
    trace!(pattern = %args.input, "batch::run");

    // Find matching files
    let files: Vec<PathBuf> = glob::glob(&args.input)?.filter_map(|r| r.ok()).collect();

    if files.is_empty() {
        bail!("No files match pattern: {}", args.input);
    }

    info!(files = files.len(), pattern = %args.input, "Starting batch correction");

    if verbose {
        println!("Found {} files matching '{}'", files.len(), args.input);
    }

    // Create output directory
    std::fs::create_dir_all(&args.output_dir)?;

    // Process files in parallel
    let results: Vec<Result<()>> = files
        .par_iter()
        .map(|input| {
            process_file(
                input,
                &args.output_dir,
                args.amount,
                args.format.as_deref(),
                verbose,
            )
        })
        .collect();

    // Report results
    let mut success = 0;
    let mut failed = 0;
    for r in results {
        match r {
            Ok(_) => success += 1,
            Err(e) => {
                failed += 1;
                eprintln!("Error: {}", e);
            }
        }
    }

    info!(success = success, failed = failed, "Batch correction complete");
    println!("Processed: {} success, {} failed", success, failed);

    if failed > 0 {
        bail!("{} files failed", failed);
    }

    Ok(())
}

fn process_file(
    input: &PathBuf,
    output_dir: &PathBuf,
    amount: f32,
    format: Option<&str>,
    verbose: bool,
) -> Result<()> {
    // Determine output path
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let ext = format.unwrap_or_else(|| {
        input
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("tif")
    });

    let output = output_dir.join(format!("{}.{}", stem, ext));

    if verbose {
        println!("Processing {} -> {}", input.display(), output.display());
    }

    let image = super::load_image(input)?;
    super::ensure_color_image(&image, "correct")?;

    let corrected = correct_magenta_stars(&image.to_image_f32()?, amount)?;
    let result = ImageData::from_image(&corrected).convert_to(image.format);

    super::save_image(&output, &result)?;

    Ok(())
}
