/// Used when the theme file does not exist.
pub const DEFAULT: [&str; 2] = ["#000000", "#FFFFFF"];
