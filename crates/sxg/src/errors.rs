/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use core::fmt::{Debug, Display, Formatter};

use sxg_core::bytestream::SxgIoError;
use sxg_core::color::InvalidColorValue;

/// Errors encountered during encoding
pub enum SxgEncodeErrors {
    /// A pixel references a palette slot that does not exist
    ///
    /// # Arguments
    /// - 1st argument is the offending index
    /// - 2nd argument is the palette length
    ///
    /// The reference encoder read past the palette here, we refuse to
    IndexOutOfRange(usize, usize),
    /// The pixel grid length does not match `width * height`
    ///
    /// # Arguments
    /// - 1st argument is the expected length
    /// - 2nd argument is the length found
    DimensionMismatch(usize, usize),
    /// A packed color value carried bits above the 24 RGB bits
    InvalidColorValue(u32),
    /// A dimension cannot be represented in the 16-bit header fields
    TooLargeDimensions(usize),
    /// The palette byte length cannot be represented in the 16-bit
    /// pixel-displacement field
    TooLargePalette(usize),

    IoError(SxgIoError)
}

impl Debug for SxgEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            SxgEncodeErrors::IndexOutOfRange(index, palette_len) => {
                writeln!(
                    f,
                    "Pixel index {index} is out of range for a palette of {palette_len} colors"
                )
            }
            SxgEncodeErrors::DimensionMismatch(expected, found) => {
                writeln!(
                    f,
                    "Pixel grid length {found} does not match width * height = {expected}"
                )
            }
            SxgEncodeErrors::InvalidColorValue(value) => {
                writeln!(
                    f,
                    "Invalid packed color {value:#010X}, bits above the low 24 must be clear"
                )
            }
            SxgEncodeErrors::TooLargeDimensions(found) => {
                writeln!(
                    f,
                    "Too large image dimension {found}, SXG headers can only hold dimensions up to {}",
                    u16::MAX
                )
            }
            SxgEncodeErrors::TooLargePalette(found) => {
                writeln!(
                    f,
                    "Palette of {found} colors is too large for the 16-bit pixel-displacement field"
                )
            }
            SxgEncodeErrors::IoError(err) => {
                writeln!(f, "I/O error {:?}", err)
            }
        }
    }
}

impl Display for SxgEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SxgEncodeErrors {}

impl From<SxgIoError> for SxgEncodeErrors {
    fn from(value: SxgIoError) -> Self {
        SxgEncodeErrors::IoError(value)
    }
}

impl From<InvalidColorValue> for SxgEncodeErrors {
    fn from(value: InvalidColorValue) -> Self {
        SxgEncodeErrors::InvalidColorValue(value.0)
    }
}
