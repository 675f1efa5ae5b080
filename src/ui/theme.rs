use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(102, 187, 106);
pub const STAR_COLOR: Color = Color::Yellow;
pub const FORK_COLOR: Color = Color::Blue;
pub const LANGUAGE_COLOR: Color = Color::Cyan;

pub const CARD_BORDER: Color = Color::Rgb(55, 55, 75);
pub const SELECTED_BORDER: Color = Color::Rgb(120, 120, 180);
pub const STATUS_BG: Color = Color::Rgb(30, 30, 40);
pub const INPUT_COLOR: Color = Color::Cyan;
pub const DIM_TEXT: Color = Color::Rgb(100, 100, 120);
pub const ERROR_FG: Color = Color::LightRed;
