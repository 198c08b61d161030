mod colors;
mod config;
mod constants;
mod generate;
mod types;
mod utils;

use crate::config::{init, AppError};
use crate::constants::OUTPUT_PATH;
use crate::generate::{generate, save};
use crate::types::AppConfig;
use crate::utils::progress_bar;

use std::path::Path;

use env_logger::Env;
use indicatif::ProgressBar;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = init()?;
    info!(
        "Using {} colors from {:?}",
        config.colors.len(),
        config.theme_path
    );
    let mut rng = StdRng::from_entropy();
    let pb = progress_bar()?;

    run(&config, &mut rng, pb, Path::new(OUTPUT_PATH))?;

    Ok(())
}

fn run<R: Rng>(
    config: &AppConfig,
    rng: &mut R,
    pb: ProgressBar,
    output_path: &Path,
) -> Result<(), AppError> {
    let image = generate(config, rng, &pb);
    save(&image, output_path)
}
