pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const OUTPUT_PATH: &str = "image.png";

pub const USAGE: &str = "the program requires 3 parameters: width, height, and theme file location";

/// Canvas width/height difference per potential circle.
pub const CIRCLE_DENSITY: u32 = 16;
