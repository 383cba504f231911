use ratatui::style::Color;

pub const TITLE_ACCENT: Color = Color::Rgb(0x00, 0x9c, 0x3b);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FOCUS_BORDER: Color = Color::Rgb(0xff, 0xdf, 0x00);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const PROMPT_TEXT: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
