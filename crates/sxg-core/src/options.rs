/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Encoder options
//!
//! This module exposes the configuration shared by the encoders in
//! the sxg family of crates. Fixed properties of the container, the
//! packing type and the format version, are constants of the format
//! crates and not configurable here.

use crate::color::{ColorFormat, PaletteFormat};

/// Options describing the image to be encoded
///
/// Dimensions are in pixels, the background color is a palette index
/// used by viewers for non-fullscreen images.
#[derive(Debug, Copy, Clone)]
pub struct EncoderOptions {
    width:            usize,
    height:           usize,
    background_color: u8,
    color_format:     ColorFormat,
    palette_format:   PaletteFormat
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            width:            0,
            height:           0,
            background_color: 0,
            color_format:     ColorFormat::Sixteen,
            palette_format:   PaletteFormat::Pwm
        }
    }
}

impl EncoderOptions {
    /// Get the width for which the image will be encoded in
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Get the height for which the image will be encoded in
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get the background color palette index
    pub const fn background_color(&self) -> u8 {
        self.background_color
    }

    /// Get the pixel storage format
    pub const fn color_format(&self) -> ColorFormat {
        self.color_format
    }

    /// Get the palette color reduction algorithm
    pub const fn palette_format(&self) -> PaletteFormat {
        self.palette_format
    }

    /// Set width for the image to be encoded
    pub fn set_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set height for the image to be encoded
    pub fn set_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Set the background color palette index
    pub fn set_background_color(mut self, background_color: u8) -> Self {
        self.background_color = background_color;
        self
    }

    /// Set the pixel storage format
    pub fn set_color_format(mut self, color_format: ColorFormat) -> Self {
        self.color_format = color_format;
        self
    }

    /// Set the palette color reduction algorithm
    pub fn set_palette_format(mut self, palette_format: PaletteFormat) -> Self {
        self.palette_format = palette_format;
        self
    }
}
