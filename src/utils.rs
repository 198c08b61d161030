use crate::config::AppError;

use image::Rgb;
use indicatif::{ProgressBar, ProgressStyle};
use palette::Srgb;

pub fn hex_to_rgb(hex: &str) -> Result<Rgb<u8>, AppError> {
    let rgb: Srgb<u8> = hex.parse().map_err(|source| AppError::InvalidColor {
        color: hex.to_string(),
        source,
    })?;
    Ok(Rgb([rgb.red, rgb.green, rgb.blue]))
}

pub fn progress_bar() -> Result<ProgressBar, AppError> {
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {percent}% {msg}")?
            .progress_chars("#>-"),
    );
    Ok(pb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(hex_to_rgb("#1A2B3C").unwrap(), Rgb([0x1a, 0x2b, 0x3c]));
        assert_eq!(hex_to_rgb("ff0000").unwrap(), Rgb([255, 0, 0]));
    }

    #[test]
    fn rejects_garbage() {
        match hex_to_rgb("#GGGGGG") {
            Err(AppError::InvalidColor { color, .. }) => assert_eq!(color, "#GGGGGG"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(hex_to_rgb("").is_err());
        assert!(hex_to_rgb("#12345").is_err());
    }
}
