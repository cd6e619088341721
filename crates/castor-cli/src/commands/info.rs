//! Image info command.
//!
//! Displays dimensions, channels, bit depth, and optional pixel statistics.

use crate::InfoArgs;
use anyhow::Result;
use castor_io::{Format, ImageData};
use std::fs;

/// Runs the info command, displaying image metadata.
pub fn run(args: InfoArgs, verbose: bool) -> Result<()> {
    for path in &args.input {
        let metadata = fs::metadata(path)?;
        let file_size = metadata.len();
        let format = Format::detect(path).unwrap_or(Format::Unknown);

        let image = super::load_image(path)?;

        if args.json {
            print_json(&args, path, &image, file_size, format);
        } else {
            print_text(&args, path, &image, file_size, format, verbose);
        }

        if args.input.len() > 1 {
            println!();
        }
    }

    Ok(())
}

/// Prints info in human-readable text format.
fn print_text(
    args: &InfoArgs,
    path: &std::path::Path,
    image: &ImageData,
    file_size: u64,
    format: Format,
    verbose: bool,
) {
    println!("{}", path.display());
    println!("  Resolution: {}x{}", image.width, image.height);
    match image.layout() {
        Some(layout) => println!("  Channels:   {} ({})", image.channels, layout),
        None => println!("  Channels:   {}", image.channels),
    }
    println!("  Depth:      {}", image.format);
    println!("  Pixels:     {}", image.width as u64 * image.height as u64);
    println!("  File size:  {}", super::format_size(file_size));

    if args.stats {
        let data = image.to_f32();
        let (min, max, avg) = compute_stats(&data);
        println!("  Min value:  {:.6}", min);
        println!("  Max value:  {:.6}", max);
        println!("  Avg value:  {:.6}", avg);
    }

    if verbose {
        println!("  Format:     {}", format);
        let memory = image.sample_count() as u64 * image.format.bytes_per_channel() as u64;
        println!("  Memory:     {}", super::format_size(memory));
    }
}

/// Prints info in JSON format.
fn print_json(
    args: &InfoArgs,
    path: &std::path::Path,
    image: &ImageData,
    file_size: u64,
    format: Format,
) {
    println!("{{");
    println!(
        "  \"file\": \"{}\",",
        json_escape(&path.display().to_string())
    );
    println!("  \"width\": {},", image.width);
    println!("  \"height\": {},", image.height);
    println!("  \"channels\": {},", image.channels);
    println!("  \"depth\": \"{}\",", image.format);
    println!("  \"format\": \"{}\",", format);

    if args.stats {
        let data = image.to_f32();
        let (min, max, avg) = compute_stats(&data);
        println!("  \"min\": {},", min);
        println!("  \"max\": {},", max);
        println!("  \"avg\": {},", avg);
    }

    println!("  \"size_bytes\": {}", file_size);
    println!("}}");
}

fn json_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

fn compute_stats(data: &[f32]) -> (f32, f32, f32) {
    if data.is_empty() {
        return (0.0, 0.0, 0.0);
    }

    let mut min = f32::MAX;
    let mut max = f32::MIN;
    let mut sum = 0.0f64;

    for &v in data {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
        sum += v as f64;
    }

    (min, max, (sum / data.len() as f64) as f32)
}
