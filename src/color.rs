//! Color type for the RGB pixel buffer.
//!
//! Colors are three 8-bit channels with no alpha: rasterization overwrites
//! pixels, it never blends them.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// RGB color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "scene", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "scene", serde(try_from = "String", into = "String"))]
#[repr(C)]
pub struct Rgb {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Red.
    pub const RED: Self = Self::new(255, 0, 0);
    /// Green.
    pub const GREEN: Self = Self::new(0, 255, 0);
    /// Blue.
    pub const BLUE: Self = Self::new(0, 0, 255);
    /// Yellow.
    pub const YELLOW: Self = Self::new(255, 255, 0);
    /// Cyan.
    pub const CYAN: Self = Self::new(0, 255, 255);
    /// Magenta.
    pub const MAGENTA: Self = Self::new(255, 0, 255);
    /// Purple.
    pub const PURPLE: Self = Self::new(128, 0, 128);
    /// Orange.
    pub const ORANGE: Self = Self::new(255, 165, 0);
    /// Grey.
    pub const GREY: Self = Self::new(128, 128, 128);

    /// Named colors accepted by [`Rgb::from_str`].
    const NAMED: &'static [(&'static str, Self)] = &[
        ("black", Self::BLACK),
        ("white", Self::WHITE),
        ("red", Self::RED),
        ("green", Self::GREEN),
        ("blue", Self::BLUE),
        ("yellow", Self::YELLOW),
        ("cyan", Self::CYAN),
        ("magenta", Self::MAGENTA),
        ("purple", Self::PURPLE),
        ("orange", Self::ORANGE),
        ("grey", Self::GREY),
        ("gray", Self::GREY),
    ];

    /// Create a new color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Rec. 709 luminance in `0.0..=1.0`.
    #[must_use]
    pub fn luma(self) -> f32 {
        0.2126 * (f32::from(self.r) / 255.0)
            + 0.7152 * (f32::from(self.g) / 255.0)
            + 0.0722 * (f32::from(self.b) / 255.0)
    }

    /// Look up a named color (case-insensitive).
    #[must_use]
    pub fn named(name: &str) -> Option<Self> {
        Self::NAMED
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(_, color)| color)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(arr: [u8; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Parse a color name (`"red"`) or a `#rrggbb` hex triplet.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(Error::InvalidColor(s.to_string()));
            }
            let channel = |i: usize| {
                u8::from_str_radix(&hex[i..i + 2], 16)
                    .map_err(|_| Error::InvalidColor(s.to_string()))
            };
            return Ok(Self::new(channel(0)?, channel(2)?, channel(4)?));
        }

        Self::named(s).ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for Rgb {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}
