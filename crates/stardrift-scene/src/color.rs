//! sRGB paint colors and the fixed palette objects are tinted from.

use std::fmt;

/// 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Pack into `0x00RRGGBB`, the framebuffer pixel layout.
    pub const fn pack(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Palette sampled for moons and stepped through for planet rings.
pub const PALETTE: [Color; 8] = [
    Color::from_hex(0xf94144), // red
    Color::from_hex(0xf8961e), // orange
    Color::from_hex(0xf9c74f), // gold
    Color::from_hex(0x90be6d), // green
    Color::from_hex(0x43aa8b), // teal
    Color::from_hex(0x577590), // slate blue
    Color::from_hex(0x9b5de5), // violet
    Color::from_hex(0xf15bb5), // pink
];

/// Fixed color for star-category bodies.
pub const STAR_COLOR: Color = Color::from_hex(0xffffff);

/// Dim stroke used for the static cylindrical track.
pub const TRACK_COLOR: Color = Color::from_hex(0xeeeeee);
