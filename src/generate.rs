use crate::config::AppError;
use crate::constants::CIRCLE_DENSITY;
use crate::types::{AppConfig, Circle};

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};
use imageproc::drawing::draw_filled_circle_mut;
use indicatif::ProgressBar;
use log::{debug, info};
use rand::Rng;
use rayon::prelude::*;

/// Exclusive upper bound on the number of circles. Collapses to zero for
/// square canvases and for canvases whose sides differ by less than 16.
pub fn circle_bound(width: u32, height: u32) -> u32 {
    height.abs_diff(width) / CIRCLE_DENSITY
}

pub fn circle_count<R: Rng>(width: u32, height: u32, rng: &mut R) -> u32 {
    match circle_bound(width, height) {
        0 => 0,
        bound => rng.gen_range(0..bound),
    }
}

pub fn generate<R: Rng>(config: &AppConfig, rng: &mut R, pb: &ProgressBar) -> RgbImage {
    let (width, height) = (config.width, config.height);
    let mut canvas: RgbImage = ImageBuffer::new(width, height);

    let background = config.random_color(rng);
    let circles = circle_count(width, height, rng);
    info!(
        "Generating {}x{} image with {} circles on {:?}",
        width, height, circles, background
    );
    pb.set_length(height as u64 + circles as u64);

    pb.set_message("Filling background");
    fill_background(&mut canvas, background, pb);

    pb.set_message("Drawing circles");
    for _ in 0..circles {
        let color = config.random_color(rng);
        let circle = Circle::random(width, height, rng);
        debug!("Drawing {:?} in {:?}", circle, color);
        draw_circle(&mut canvas, circle, color);
        pb.inc(1);
    }

    pb.finish_with_message("Image generation complete");
    canvas
}

fn fill_background(canvas: &mut RgbImage, color: Rgb<u8>, pb: &ProgressBar) {
    let row_len = canvas.width() as usize * 3;

    canvas.par_chunks_mut(row_len).for_each(|row| {
        for pixel in row.chunks_exact_mut(3) {
            pixel.copy_from_slice(&color.0);
        }
        pb.inc(1);
    });
}

fn draw_circle(canvas: &mut RgbImage, circle: Circle, color: Rgb<u8>) {
    // A zero-size ellipse covers no pixels.
    if circle.radius == 0 {
        return;
    }
    draw_filled_circle_mut(
        canvas,
        (circle.x as i32, circle.y as i32),
        circle.radius as i32,
        color,
    );
}

pub fn save(canvas: &RgbImage, path: &Path) -> Result<(), AppError> {
    canvas.save(path)?;
    info!("Saved {}x{} image to {:?}", canvas.width(), canvas.height(), path);
    Ok(())
}
