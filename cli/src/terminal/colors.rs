use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const HOST_UP: Color = Color::BrightWhite;
pub const HOST_DOWN: Color = Color::BrightYellow;
pub const NETWORK: Color = Color::BrightCyan;
pub const BROADCAST: Color = Color::BrightMagenta;
