use image::Rgb;
use rand::Rng;
use std::path::PathBuf;

#[derive(Debug)]
pub struct AppConfig {
    pub width: u32,
    pub height: u32,
    pub theme_path: PathBuf,
    pub colors: Vec<Rgb<u8>>,
}

impl AppConfig {
    /// Uniformly picks a palette color. `colors` is never empty once
    /// `config::parse_palette` has accepted it.
    pub fn random_color<R: Rng>(&self, rng: &mut R) -> Rgb<u8> {
        self.colors[rng.gen_range(0..self.colors.len())]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub x: u32,
    pub y: u32,
    pub radius: u32,
}

impl Circle {
    /// Center anywhere on the canvas, radius bounded by the canvas width.
    pub fn random<R: Rng>(width: u32, height: u32, rng: &mut R) -> Self {
        Circle {
            x: rng.gen_range(0..width),
            y: rng.gen_range(0..height),
            radius: rng.gen_range(0..width),
        }
    }
}
