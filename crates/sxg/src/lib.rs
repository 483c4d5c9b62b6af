/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Encoding support for the SXG low-color image format
//!
//! SXG is a legacy indexed-color format used by certain embedded and
//! mobile displays. An image is a little-endian header, a palette of
//! 16-bit color words and the packed pixel indices:
//! ```text
//! ╔════════╤══════════════════════════════════════════════════════╗
//! ║ Bytes  │ Description                                          ║
//! ╠════════╪══════════════════════════════════════════════════════╣
//! ║ 4      │ 0x7F "SXG" magic value                               ║
//! ╟────────┼──────────────────────────────────────────────────────╢
//! ║ 1      │ format version (always 2)                            ║
//! ╟────────┼──────────────────────────────────────────────────────╢
//! ║ 1      │ background color palette index                       ║
//! ╟────────┼──────────────────────────────────────────────────────╢
//! ║ 1      │ packing type (always 0, non-packed)                  ║
//! ╟────────┼──────────────────────────────────────────────────────╢
//! ║ 1      │ color format (1 = 16-color, 2 = 256-color)           ║
//! ╟────────┼──────────────────────────────────────────────────────╢
//! ║ 2 + 2  │ 16-bit LE width and height in pixels                 ║
//! ╟────────┼──────────────────────────────────────────────────────╢
//! ║ 2 + 2  │ 16-bit LE displacements to palette and pixel data    ║
//! ╟────────┼──────────────────────────────────────────────────────╢
//! ║ N*2    │ palette, 16-bit LE color words                       ║
//! ╟────────┼──────────────────────────────────────────────────────╢
//! ║ M      │ packed pixel indices, row-major                      ║
//! ╚════════╧══════════════════════════════════════════════════════╝
//! ```
//! The two displacement fields are counted from the end of their own
//! field, not from the file start: the palette one is always `2`, the
//! pixel one equals the palette byte length. Legacy viewers expect
//! these exact values.
//!
//! # Features
//! - `std`: enable file-backed sinks and `std::error::Error` impls
//! - `log`: log format quirks (such as the odd-pixel drop) via the
//!    `log` crate
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub use encoder::*;
pub use errors::*;
pub use sxg_core;

pub use crate::clut::nearest_clut_index;
pub use crate::palette::encode_palette;
pub use crate::pixels::pack_pixels;

mod clut;
mod constants;
mod encoder;
mod errors;
mod palette;
mod pixels;
