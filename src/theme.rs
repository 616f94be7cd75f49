//! Centralized theme palettes.
//!
//! Two fixed schemes, light and dark, carrying the same roles. The dark-mode
//! flag is a cosmetic hint only; nothing behavioral reads it.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub danger: Color,
    pub warning: Color,
    pub success: Color,
    pub background: Color,
    pub card: Color,
    pub text: Color,
    pub text_light: Color,
    pub border: Color,
}

pub const LIGHT: Palette = Palette {
    primary: Color::Rgb(0x4a, 0x90, 0xe2),
    danger: Color::Rgb(0xe7, 0x4c, 0x3c),
    warning: Color::Rgb(0xf3, 0x9c, 0x12),
    success: Color::Rgb(0x2e, 0xcc, 0x71),
    background: Color::Rgb(0xf5, 0xf5, 0xf5),
    card: Color::Rgb(0xff, 0xff, 0xff),
    text: Color::Rgb(0x33, 0x33, 0x33),
    text_light: Color::Rgb(0x66, 0x66, 0x66),
    border: Color::Rgb(0xe0, 0xe0, 0xe0),
};

pub const DARK: Palette = Palette {
    primary: Color::Rgb(0x5b, 0xa0, 0xe5),
    danger: Color::Rgb(0xe7, 0x4c, 0x3c),
    warning: Color::Rgb(0xf3, 0x9c, 0x12),
    success: Color::Rgb(0x2e, 0xcc, 0x71),
    background: Color::Rgb(0x1e, 0x1e, 0x1e),
    card: Color::Rgb(0x2d, 0x2d, 0x30),
    text: Color::Rgb(0xcc, 0xcc, 0xcc),
    text_light: Color::Rgb(0x99, 0x99, 0x99),
    border: Color::Rgb(0x44, 0x44, 0x44),
};

#[derive(Debug, Clone, Copy, Default)]
pub struct Theme {
    dark: bool,
}

impl Theme {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn toggle(&mut self) {
        self.dark = !self.dark;
    }

    pub fn palette(&self) -> &'static Palette {
        if self.dark { &DARK } else { &LIGHT }
    }
}
