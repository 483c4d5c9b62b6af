/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Color vocabulary for indexed low-color images

use alloc::vec::Vec;
use core::fmt::Formatter;

/// An 8-bit-per-channel RGB color, immutable once produced
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8
}

/// A packed color value carried bits above the 24 RGB bits
///
/// Returned when a `0x00RRGGBB` integer has its top byte set,
/// we reject such values instead of silently masking them
pub struct InvalidColorValue(pub u32);

impl core::fmt::Debug for InvalidColorValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(
            f,
            "Invalid packed color {:#010X}, bits above the low 24 must be clear",
            self.0
        )
    }
}

impl core::fmt::Display for InvalidColorValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidColorValue {}

impl RgbColor {
    /// Create a color from its three channel values
    pub const fn new(r: u8, g: u8, b: u8) -> RgbColor {
        RgbColor { r, g, b }
    }

    /// Create a color from a packed `0x00RRGGBB` integer
    ///
    /// # Errors
    /// Fails with [`InvalidColorValue`] if any bit above the low
    /// 24 is set
    pub const fn from_packed(packed: u32) -> Result<RgbColor, InvalidColorValue> {
        if packed > 0x00FF_FFFF {
            return Err(InvalidColorValue(packed));
        }
        Ok(RgbColor {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8
        })
    }
}

/// Build a palette of slots from packed `0x00RRGGBB` integers
///
/// The slot order is preserved, it becomes the palette order of the
/// encoded image and pixel indices reference it positionally
///
/// # Errors
/// Fails on the first integer with bits above the low 24 set
pub fn palette_from_packed(packed: &[u32]) -> Result<Vec<Option<RgbColor>>, InvalidColorValue> {
    let mut palette = Vec::with_capacity(packed.len());
    for value in packed {
        palette.push(Some(RgbColor::from_packed(*value)?));
    }
    Ok(palette)
}

/// How densely pixel indices are stored in the encoded image
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ColorFormat {
    /// 16-color images, two pixel indices per byte
    Sixteen,
    /// 256-color images, one pixel index per byte
    TwoFiftySix
}

impl ColorFormat {
    /// The byte value identifying this format on the wire
    pub const fn to_u8(self) -> u8 {
        match self {
            ColorFormat::Sixteen => 1,
            ColorFormat::TwoFiftySix => 2
        }
    }

    /// Number of colors the format can nominally address
    pub const fn max_colors(self) -> usize {
        match self {
            ColorFormat::Sixteen => 16,
            ColorFormat::TwoFiftySix => 256
        }
    }
}

/// How palette colors are reduced to 16-bit words
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PaletteFormat {
    /// Indices into a fixed 25-level reference table, per channel
    Clut,
    /// Direct 15-bit color, truncated channels plus a high flag bit
    Pwm
}

impl PaletteFormat {
    /// The value the reference encoder used to identify this format
    pub const fn to_u8(self) -> u8 {
        match self {
            PaletteFormat::Clut => 0,
            PaletteFormat::Pwm => 1
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::color::{palette_from_packed, RgbColor};

    #[test]
    fn packed_color_splits_channels() {
        let color = RgbColor::from_packed(0x00A0_B0C0).unwrap();
        assert_eq!(color, RgbColor::new(0xA0, 0xB0, 0xC0));
    }

    #[test]
    fn packed_color_rejects_high_bits() {
        assert!(RgbColor::from_packed(0x0100_0000).is_err());
        assert!(RgbColor::from_packed(u32::MAX).is_err());
    }

    #[test]
    fn packed_palette_keeps_order() {
        let palette = palette_from_packed(&[0xFF_0000, 0x00_FF00, 0x00_00FF]).unwrap();
        assert_eq!(palette[0], Some(RgbColor::new(255, 0, 0)));
        assert_eq!(palette[1], Some(RgbColor::new(0, 255, 0)));
        assert_eq!(palette[2], Some(RgbColor::new(0, 0, 255)));
    }
}
