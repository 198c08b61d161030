use crate::colors::DEFAULT;
use crate::constants::{USAGE, VERSION};
use crate::types::AppConfig;
use crate::utils::hex_to_rgb;

use clap::{App, Arg, ErrorKind};
use image::Rgb;
use log::info;
use serde_derive::Deserialize;
use std::ffi::OsString;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{} ({})", USAGE, .0)]
    Invocation(String),
    #[error("failed to read theme file {path:?}")]
    ThemeRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("theme file {path:?} is not a JSON array of color strings")]
    ThemeDecode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("theme file {0:?} contains no colors")]
    EmptyPalette(PathBuf),
    #[error("invalid color {color:?}, expected #RRGGBB")]
    InvalidColor {
        color: String,
        #[source]
        source: palette::rgb::FromHexError,
    },
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    ProgressTemplate(#[from] indicatif::style::TemplateError),
}

#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct Theme(Vec<String>);

fn app() -> App<'static> {
    App::new("Background Generator")
        .version(VERSION)
        .author("Taylor Beeston")
        .about("Generates a wallpaper of randomly placed circles from a colorscheme")
        .after_help("The theme file should be a JSON array of hex colors, for example [\"#112233\", \"#AABBCC\"]. If the file does not exist, black and white are used. The result is written to image.png in the current directory.")
        .arg(
            Arg::with_name("Width")
                .help("Image width in pixels")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("Height")
                .help("Image height in pixels")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("Theme")
                .help("Path to the JSON theme file")
                .required(true)
                .index(3),
        )
        .arg(
            Arg::with_name("Extra")
                .hide(true)
                .multiple_values(true)
                .index(4),
        )
}

#[derive(Debug, PartialEq, Eq)]
pub struct Invocation {
    pub width: u32,
    pub height: u32,
    pub theme_path: PathBuf,
}

fn parse_dimension(value: Option<&str>, name: &str) -> Result<u32, AppError> {
    let value = value.unwrap_or_default();
    match value.parse::<u32>() {
        Ok(0) => Err(AppError::Invocation(format!("{} must be non-zero", name))),
        Ok(n) => Ok(n),
        Err(_) => Err(AppError::Invocation(format!(
            "{} must be a positive integer, got {:?}",
            name, value
        ))),
    }
}

pub fn parse_args<I, T>(args: I) -> Result<Invocation, AppError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match app().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let message = e.to_string();
            let reason = message.lines().next().unwrap_or_default();
            return Err(AppError::Invocation(
                reason.trim_start_matches("error: ").to_string(),
            ));
        }
    };

    let width = parse_dimension(matches.value_of("Width"), "width")?;
    let height = parse_dimension(matches.value_of("Height"), "height")?;

    let theme_path = matches.value_of("Theme").unwrap_or_default();
    if theme_path.is_empty() {
        return Err(AppError::Invocation(
            "theme file location must not be empty".to_string(),
        ));
    }

    Ok(Invocation {
        width,
        height,
        theme_path: PathBuf::from(theme_path),
    })
}

pub fn load_theme(path: &Path) -> Result<Vec<String>, AppError> {
    if !path.exists() {
        info!("Theme file {:?} not found, using default palette", path);
        return Ok(DEFAULT.iter().map(|&s| s.to_string()).collect());
    }

    let file = File::open(path).map_err(|source| AppError::ThemeRead {
        path: path.to_path_buf(),
        source,
    })?;
    let theme: Theme =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| AppError::ThemeDecode {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Loaded {} colors from {:?}", theme.0.len(), path);
    Ok(theme.0)
}

pub fn parse_palette(colors: &[String], path: &Path) -> Result<Vec<Rgb<u8>>, AppError> {
    if colors.is_empty() {
        return Err(AppError::EmptyPalette(path.to_path_buf()));
    }
    colors.iter().map(|hex| hex_to_rgb(hex)).collect()
}

pub fn init_from<I, T>(args: I) -> Result<AppConfig, AppError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let Invocation {
        width,
        height,
        theme_path,
    } = parse_args(args)?;

    let colors = load_theme(&theme_path)?;
    let colors = parse_palette(&colors, &theme_path)?;

    Ok(AppConfig {
        width,
        height,
        theme_path,
        colors,
    })
}

pub fn init() -> Result<AppConfig, AppError> {
    init_from(std::env::args_os())
}
