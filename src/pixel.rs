use std::fmt;

/// The raw 12-bit value of pure green (R=0, G=15, B=0) used as chroma key.
pub const GREEN_SCREEN_KEY: u32 = 0x0f0;

/// A color with three 4-bit channels, as stored in 12-bit `.mem` images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb444 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb444 {
    /// Only bits 0..12 of `value` are looked at.
    pub fn from_bits(value: u32) -> Self {
        Self {
            r: ((value >> 8) & 0xf) as u8,
            g: ((value >> 4) & 0xf) as u8,
            b: (value & 0xf) as u8,
        }
    }

    pub fn from_rgb888([r, g, b]: [u8; 3]) -> Self { Self { r: r >> 4, g: g >> 4, b: b >> 4 } }

    pub fn bits(&self) -> u16 { ((self.r as u16) << 8) | ((self.g as u16) << 4) | self.b as u16 }
}

impl fmt::Display for Rgb444 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{:03x}", self.bits()) }
}

/// A packed 8-bit color: 3 bits red, 3 bits green, 2 bits blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb332(pub u8);

impl Rgb332 {
    /// What [`GREEN_SCREEN_KEY`] always maps to, independent of the reduction.
    pub const GREEN_SCREEN: Rgb332 = Rgb332(0x1c);

    pub fn from_rgb444(color: Rgb444) -> Self {
        let r3 = color.r >> 1;
        let g3 = color.g >> 1;
        let b2 = color.b >> 2;
        Self((r3 << 5) | (g3 << 2) | b2)
    }

    /// Reduces a raw 12-bit value, keeping the green screen key exact.
    pub fn from_12bit(value: u32) -> Self {
        if value == GREEN_SCREEN_KEY {
            Self::GREEN_SCREEN
        } else {
            Self::from_rgb444(Rgb444::from_bits(value))
        }
    }
}

impl fmt::Display for Rgb332 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{:02x}", self.0) }
}
