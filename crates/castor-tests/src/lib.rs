//! Integration tests for castor crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between the castor crates: reading a stack from disk, correcting the
//! magenta halos, and writing the result back.

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    /// Test full correction pipeline: load -> correct -> save -> load
    #[test]
    fn test_correction_pipeline() {
        use castor_io::{ImageData, PixelData};
        use castor_ops::correct_magenta_stars;

        let dir = tempdir().unwrap();
        let input_path = dir.path().join("input.png");
        let output_path = dir.path().join("output.png");

        // One magenta halo pixel next to a neutral gray pixel.
        let halo = [58982u16, 19661, 57672];
        let gray = [32768u16, 32768, 32768];
        let data = vec![halo[0], halo[1], halo[2], gray[0], gray[1], gray[2]];
        let image = ImageData::from_u16(2, 1, 3, data);
        castor_io::write(&input_path, &image).expect("Failed to write input");

        let loaded = castor_io::read(&input_path).expect("Failed to read input");
        let corrected = correct_magenta_stars(&loaded.to_image_f32().unwrap(), 0.8).unwrap();
        let result = ImageData::from_image(&corrected).convert_to(loaded.format);
        castor_io::write(&output_path, &result).expect("Failed to write output");

        let final_image = castor_io::read(&output_path).expect("Failed to read output");
        assert_eq!(final_image.width, 2);
        assert_eq!(final_image.height, 1);
        assert_eq!(final_image.channels, 3);

        let samples = match &final_image.data {
            PixelData::U16(samples) => samples.clone(),
            other => panic!("expected 16-bit samples, got {:?}", other),
        };

        // Halo pixel: green filled in, magenta excess reduced.
        let excess_before = (halo[0] as f32 + halo[2] as f32) / 2.0 - halo[1] as f32;
        let excess_after = (samples[0] as f32 + samples[2] as f32) / 2.0 - samples[1] as f32;
        assert!(samples[1] > halo[1]);
        assert!(excess_after < excess_before * 0.6);

        // Neutral pixel survives untouched.
        assert_eq!(&samples[3..6], &[32768, 32768, 32768]);
    }

    #[test]
    fn test_io_roundtrip_png() {
        use castor_io::ImageData;

        let dir = tempdir().unwrap();
        let path = dir.path().join("test.png");

        let width = 32u32;
        let height = 32u32;
        let channels = 4u32;
        let data: Vec<u16> = (0..width * height * channels).map(|i| i as u16).collect();

        let image = ImageData::from_u16(width, height, channels, data);

        castor_io::write(&path, &image).expect("Failed to write PNG");
        let loaded = castor_io::read(&path).expect("Failed to read PNG");

        assert_eq!(loaded, image);
    }

    #[test]
    fn test_io_roundtrip_tiff() {
        use castor_io::ImageData;

        let dir = tempdir().unwrap();
        let path = dir.path().join("test.tiff");

        let width = 32u32;
        let height = 32u32;
        let channels = 3u32;
        let data: Vec<f32> = (0..width * height * channels)
            .map(|i| (i as f32) / ((width * height * channels) as f32))
            .collect();

        let image = ImageData::from_f32(width, height, channels, data.clone());

        castor_io::write(&path, &image).expect("Failed to write TIFF");
        let loaded = castor_io::read(&path).expect("Failed to read TIFF");

        assert_eq!(loaded.width, width);
        assert_eq!(loaded.height, height);
        assert_eq!(loaded.channels, channels);

        let loaded_data = loaded.to_f32();
        for (orig, load) in data.iter().zip(loaded_data.iter()) {
            assert!((orig - load).abs() < 1e-5);
        }
    }

    #[test]
    fn test_full_strength_turns_magenta_white() {
        use castor_io::{ImageData, PixelData};
        use castor_ops::correct_magenta_stars;

        let dir = tempdir().unwrap();
        let input_path = dir.path().join("star.tif");
        let output_path = dir.path().join("fixed.tif");

        let image = ImageData::from_f32(1, 1, 3, vec![1.0, 0.0, 1.0]);
        castor_io::write(&input_path, &image).unwrap();

        let loaded = castor_io::read(&input_path).unwrap();
        let corrected = correct_magenta_stars(&loaded.to_image_f32().unwrap(), 1.0).unwrap();
        castor_io::write(&output_path, &ImageData::from_image(&corrected)).unwrap();

        let final_image = castor_io::read(&output_path).unwrap();
        match &final_image.data {
            PixelData::F32(samples) => assert_eq!(samples.as_slice(), &[1.0, 1.0, 1.0]),
            other => panic!("expected float samples, got {:?}", other),
        }
    }

    #[test]
    fn test_alpha_preserved() {
        use castor_io::{ImageData, PixelData};
        use castor_ops::correct_magenta_stars;

        let dir = tempdir().unwrap();
        let path = dir.path().join("rgba.png");

        // Halo pixel with partial alpha, neutral pixel fully opaque.
        let data = vec![230u8, 77, 224, 128, 100, 100, 100, 255];
        let image = ImageData::from_u8(1, 2, 4, data);
        castor_io::write(&path, &image).unwrap();

        let loaded = castor_io::read(&path).unwrap();
        let corrected = correct_magenta_stars(&loaded.to_image_f32().unwrap(), 0.8).unwrap();
        let result = ImageData::from_image(&corrected).convert_to(loaded.format);

        let samples = match &result.data {
            PixelData::U8(samples) => samples.clone(),
            other => panic!("expected 8-bit samples, got {:?}", other),
        };

        assert_eq!(samples[3], 128);
        assert_eq!(samples[7], 255);
        assert!(samples[1] > 77);
        assert_eq!(&samples[4..7], &[100, 100, 100]);
    }

    #[test]
    fn test_grayscale_rejected() {
        use castor_io::ImageData;
        use castor_ops::correct_magenta_stars;

        let dir = tempdir().unwrap();
        let path = dir.path().join("mono.png");

        let image = ImageData::from_u8(4, 4, 1, vec![128; 16]);
        castor_io::write(&path, &image).expect("Failed to write grayscale");

        let loaded = castor_io::read(&path).expect("Failed to read grayscale");
        assert_eq!(loaded.channels, 1);

        let err = correct_magenta_stars(&loaded.to_image_f32().unwrap(), 0.8).unwrap_err();
        assert!(err.is_invalid_color_space());
    }

    #[test]
    fn test_zero_amount_preserves_data() {
        use castor_io::ImageData;
        use castor_ops::correct_magenta_stars;

        let dir = tempdir().unwrap();
        let path = dir.path().join("frame.png");

        let width = 8u32;
        let height = 8u32;
        let channels = 3u32;
        let data: Vec<u8> = (0..width * height * channels).map(|i| i as u8).collect();
        let image = ImageData::from_u8(width, height, channels, data);
        castor_io::write(&path, &image).unwrap();

        let loaded = castor_io::read(&path).unwrap();
        let corrected = correct_magenta_stars(&loaded.to_image_f32().unwrap(), 0.0).unwrap();
        let result = ImageData::from_image(&corrected).convert_to(loaded.format);

        assert_eq!(result, loaded);
    }

    /// Corrected TIFF stack can be written straight to PNG.
    #[test]
    fn test_cross_format_pipeline() {
        use castor_io::{ImageData, PixelData, SampleFormat};
        use castor_ops::correct_magenta_stars;

        let dir = tempdir().unwrap();
        let input_path = dir.path().join("stack.tif");
        let output_path = dir.path().join("stack.png");

        // Magenta halo pixel, then a pure narrowband-green pixel.
        let data: Vec<u16> = vec![58982, 19661, 57672, 0, 65535, 0];
        let image = ImageData::from_u16(2, 1, 3, data);
        castor_io::write(&input_path, &image).unwrap();

        let loaded = castor_io::read(&input_path).unwrap();
        assert_eq!(loaded.format, SampleFormat::U16);

        let corrected = correct_magenta_stars(&loaded.to_image_f32().unwrap(), 0.8).unwrap();
        let result = ImageData::from_image(&corrected).convert_to(loaded.format);
        castor_io::write(&output_path, &result).unwrap();

        let final_image = castor_io::read(&output_path).unwrap();
        assert_eq!(final_image.format, SampleFormat::U16);
        assert_eq!(final_image.channels, 3);

        let samples = match &final_image.data {
            PixelData::U16(samples) => samples.clone(),
            other => panic!("expected 16-bit samples, got {:?}", other),
        };

        // Green emission stays where it is.
        assert_eq!(&samples[3..6], &[0, 65535, 0]);
    }

    #[test]
    fn test_format_detection() {
        use castor_io::Format;
        use std::path::Path;

        assert_eq!(Format::from_extension(Path::new("stack.png")), Format::Png);
        assert_eq!(Format::from_extension(Path::new("stack.tif")), Format::Tiff);
        assert_eq!(Format::from_extension(Path::new("stack.tiff")), Format::Tiff);
        assert_eq!(Format::from_extension(Path::new("stack.fits")), Format::Unknown);
    }
}
