//! Gruvbox Material themes
//! https://github.com/sainnhe/gruvbox-material

use ratatui::style::Color;
use crate::theme::Theme;

/// Gruvbox dark
pub fn dark() -> Theme {
    Theme::default()
}

/// Gruvbox light
pub fn light() -> Theme {
    Theme {
        bg0: Color::Rgb(0xfb, 0xf1, 0xc7),
        bg1: Color::Rgb(0xf4, 0xe8, 0xbe),
        bg2: Color::Rgb(0xeb, 0xdb, 0xb2),
        fg0: Color::Rgb(0x65, 0x47, 0x35),
        fg1: Color::Rgb(0x4f, 0x38, 0x29),
        grey0: Color::Rgb(0xa8, 0x99, 0x84),
        grey1: Color::Rgb(0x92, 0x83, 0x74),
        red: Color::Rgb(0xc1, 0x4a, 0x4a),
        orange: Color::Rgb(0xc3, 0x5e, 0x0a),
        yellow: Color::Rgb(0xb4, 0x71, 0x09),
        green: Color::Rgb(0x6c, 0x78, 0x2e),
        aqua: Color::Rgb(0x4c, 0x7a, 0x5d),
        blue: Color::Rgb(0x45, 0x70, 0x7a),
        purple: Color::Rgb(0x94, 0x5e, 0x80),
        error: Color::Rgb(0xc1, 0x4a, 0x4a),
        accent: Color::Rgb(0x4c, 0x7a, 0x5d),
    }
}
