/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use sxg_core::bytestream::{SxgByteWriterTrait, SxgWriter};
use sxg_core::color::RgbColor;
use sxg_core::log::warn;
use sxg_core::options::EncoderOptions;

use crate::constants::{
    SXG_FORMAT_VERSION, SXG_HEADER_SIZE, SXG_MAGIC, SXG_PACKING_NONE, SXG_PALETTE_SHIFT
};
use crate::palette::encode_palette;
use crate::pixels::pack_pixels;
use crate::SxgEncodeErrors;

/// SXG image encoder
///
/// Consumes an already-indexed pixel grid plus its RGB palette and
/// produces the encoded byte stream. Quantizing a source image down to
/// the palette is the caller's business, the encoder starts where a
/// palette and indices already exist.
///
/// # Example
/// - Encode a 2 by 2, 16-color image with a two-entry palette
///
/// ```
/// use sxg::{SxgEncoder, SxgEncodeErrors};
/// use sxg::sxg_core::color::{ColorFormat, PaletteFormat, RgbColor};
/// use sxg::sxg_core::options::EncoderOptions;
///
/// fn main() -> Result<(), SxgEncodeErrors> {
///     let pixels = [0, 1, 1, 0];
///     let palette = [
///         Some(RgbColor::new(0, 0, 0)),
///         Some(RgbColor::new(255, 255, 255))
///     ];
///     let options = EncoderOptions::default()
///         .set_width(2)
///         .set_height(2)
///         .set_color_format(ColorFormat::Sixteen)
///         .set_palette_format(PaletteFormat::Pwm);
///
///     let encoder = SxgEncoder::new(&pixels, &palette, options);
///     let mut sink = vec![];
///     let size = encoder.encode(&mut sink)?;
///     assert_eq!(size, sink.len());
///     Ok(())
/// }
/// ```
pub struct SxgEncoder<'a> {
    // row-major palette indices, length must equal width * height
    pixels:  &'a [u8],
    // palette slots, unset ones are legal and format-significant
    palette: &'a [Option<RgbColor>],
    options: EncoderOptions
}

impl<'a> SxgEncoder<'a> {
    /// Create a new encoder which will encode the given pixel grid
    ///
    /// # Arguments
    /// - pixels: Row-major palette indices, length must equal
    ///   `width * height` from `options`
    /// - palette: Ordered palette slots the indices point into
    /// - options: Image dimensions, background color and the two
    ///   format selectors
    pub const fn new(
        pixels: &'a [u8], palette: &'a [Option<RgbColor>], options: EncoderOptions
    ) -> SxgEncoder<'a> {
        SxgEncoder {
            pixels,
            palette,
            options
        }
    }

    /// Return the maximum size the encoded image can occupy
    ///
    /// The actual size may be smaller: PWM palettes shrink by their
    /// unset slots and 16-color pixel data packs two indices per byte
    pub fn max_size(&self) -> usize {
        SXG_HEADER_SIZE + self.palette.len() * 2 + self.pixels.len()
    }

    fn encode_headers<T: SxgByteWriterTrait>(
        &self, stream: &mut SxgWriter<T>, palette_words: usize
    ) -> Result<(), SxgEncodeErrors> {
        stream.write_const_bytes(&SXG_MAGIC)?;
        stream.write_u8_err(SXG_FORMAT_VERSION)?;
        stream.write_u8_err(self.options.background_color())?;
        stream.write_u8_err(SXG_PACKING_NONE)?;
        stream.write_u8_err(self.options.color_format().to_u8())?;

        stream.write_u16_le_err(self.options.width() as u16)?;
        stream.write_u16_le_err(self.options.height() as u16)?;

        // both displacements count from the end of their own field,
        // not from the file start. Legacy viewers parse them that way
        // so "fixing" them into absolute offsets would break decoding.
        stream.write_u16_le_err(SXG_PALETTE_SHIFT)?;
        stream.write_u16_le_err((palette_words * 2) as u16)?;

        Ok(())
    }

    /// Encode the image into `sink`
    ///
    /// Encoding is a pure function of the encoder state: the same
    /// pixels, palette and options always produce an identical byte
    /// stream, and each call recomputes everything from scratch.
    ///
    /// # Returns
    /// - `Ok(size)`: Actual bytes used for encoding
    /// - `Err`: The error encountered during encoding
    pub fn encode<T: SxgByteWriterTrait>(&self, sink: T) -> Result<usize, SxgEncodeErrors> {
        if self.options.width() > usize::from(u16::MAX) {
            return Err(SxgEncodeErrors::TooLargeDimensions(self.options.width()));
        }
        if self.options.height() > usize::from(u16::MAX) {
            return Err(SxgEncodeErrors::TooLargeDimensions(self.options.height()));
        }

        let expected_len = self.options.width() * self.options.height();
        if self.pixels.len() != expected_len {
            return Err(SxgEncodeErrors::DimensionMismatch(
                expected_len,
                self.pixels.len()
            ));
        }

        let addressable = self.options.color_format().max_colors();
        if self.palette.len() > addressable {
            warn!(
                "palette has {} slots but the color format can only address {}",
                self.palette.len(),
                addressable
            );
        }

        // computed once per call and reused for the displacement field
        // and the palette section, they must agree on the word count
        let palette_words = encode_palette(self.palette, self.options.palette_format());
        if palette_words.len() * 2 > usize::from(u16::MAX) {
            return Err(SxgEncodeErrors::TooLargePalette(palette_words.len()));
        }

        let packed_pixels = pack_pixels(
            self.pixels,
            self.options.color_format(),
            self.palette.len()
        )?;

        let mut stream = SxgWriter::new(sink);
        stream.reserve(self.max_size())?;

        self.encode_headers(&mut stream, palette_words.len())?;

        for word in &palette_words {
            stream.write_u16_le_err(*word)?;
        }
        stream.write_all(&packed_pixels)?;

        Ok(stream.bytes_written())
    }
}
