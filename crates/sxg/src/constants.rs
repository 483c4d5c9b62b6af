/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Magic bytes every SXG image starts with
pub const SXG_MAGIC: [u8; 4] = [0x7F, b'S', b'X', b'G'];

/// The only format version the encoder emits
pub const SXG_FORMAT_VERSION: u8 = 2;

/// Packing type byte, 0 means non-packed pixel data
pub const SXG_PACKING_NONE: u8 = 0;

/// Displacement from the end of the palette-offset field to the
/// palette data, fixed because the pixel-offset field sits between them
pub const SXG_PALETTE_SHIFT: u16 = 2;

/// Size of the fixed header, up to and including both offset fields
pub const SXG_HEADER_SIZE: usize = 16;

/// Reference intensity ramp for CLUT palettes, a 0-255 range quantized
/// to 25 steps. Channel words store indices into this table, leaving
/// headroom in the 5-bit fields that max out at 31.
///
/// Read-only, so safe to share process-wide.
pub const SXG_CLUT: [u8; 25] = [
    0, 10, 21, 31, 42, 53, 63, 74, 85, 95, 106, 117, 127, 138, 149, 159, 170, 181, 191, 202, 213,
    223, 234, 245, 255
];
