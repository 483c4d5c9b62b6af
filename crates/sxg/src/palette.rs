/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Palette color reduction to 16-bit SXG color words

use alloc::vec::Vec;

use sxg_core::color::{PaletteFormat, RgbColor};

use crate::clut::nearest_clut_index;

/// Reduce an RGB palette to the 16-bit color words stored in the
/// palette section, in slot order
///
/// The two formats treat unset slots differently and that difference
/// is part of the wire format:
/// - PWM skips unset slots entirely, later colors shift down in the
///   emitted table
/// - CLUT emits one word per slot, unset slots encode as black
///
/// So the returned length equals the slot count for CLUT but may be
/// smaller for PWM.
pub fn encode_palette(palette: &[Option<RgbColor>], format: PaletteFormat) -> Vec<u16> {
    let mut words = Vec::with_capacity(palette.len());

    match format {
        PaletteFormat::Pwm => {
            for slot in palette {
                if let Some(color) = slot {
                    words.push(pwm_word(*color));
                }
            }
        }
        PaletteFormat::Clut => {
            for slot in palette {
                words.push(clut_word(slot.unwrap_or(RgbColor::new(0, 0, 0))));
            }
        }
    }
    words
}

/// Direct 15-bit color: channels truncated to 5 bits (not rounded)
/// packed R,G,B from the high bits down, bit 15 set as a format flag
fn pwm_word(color: RgbColor) -> u16 {
    (u16::from(color.r >> 3) << 10) | (u16::from(color.g >> 3) << 5) | u16::from(color.b >> 3)
        | 0x8000
}

/// Indexed color: each channel mapped to its nearest CLUT ramp index,
/// no flag bit
fn clut_word(color: RgbColor) -> u16 {
    (u16::from(nearest_clut_index(color.r)) << 10)
        | (u16::from(nearest_clut_index(color.g)) << 5)
        | u16::from(nearest_clut_index(color.b))
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use sxg_core::color::{PaletteFormat, RgbColor};

    use crate::encode_palette;

    #[test]
    fn pwm_white_saturates_every_field() {
        let words = encode_palette(&[Some(RgbColor::new(255, 255, 255))], PaletteFormat::Pwm);
        assert_eq!(words, vec![0xFFFF]);
    }

    #[test]
    fn pwm_black_only_carries_the_flag_bit() {
        let words = encode_palette(&[Some(RgbColor::new(0, 0, 0))], PaletteFormat::Pwm);
        assert_eq!(words, vec![0x8000]);
    }

    #[test]
    fn pwm_truncates_channels_without_rounding() {
        // 7 >> 3 == 0, even though 8 (0b01000) is closer in value
        let words = encode_palette(&[Some(RgbColor::new(7, 8, 16))], PaletteFormat::Pwm);
        assert_eq!(words, vec![0x8000 | (1 << 5) | 2]);
    }

    #[test]
    fn pwm_skips_unset_slots() {
        let palette = [
            Some(RgbColor::new(0, 0, 0)),
            None,
            Some(RgbColor::new(255, 255, 255))
        ];
        let words = encode_palette(&palette, PaletteFormat::Pwm);
        // the unset slot emits nothing, white shifts down to index 1
        assert_eq!(words, vec![0x8000, 0xFFFF]);
    }

    #[test]
    fn clut_near_black_maps_to_zero_word() {
        let words = encode_palette(&[Some(RgbColor::new(5, 5, 5))], PaletteFormat::Clut);
        assert_eq!(words, vec![0x0000]);
    }

    #[test]
    fn clut_keeps_unset_slots() {
        let palette = [None, Some(RgbColor::new(255, 255, 255))];
        let words = encode_palette(&palette, PaletteFormat::Clut);
        // unlike PWM, the unset slot still occupies an entry
        assert_eq!(words.len(), 2);
        assert_eq!(words[0], 0x0000);
        assert_eq!(words[1], (24 << 10) | (24 << 5) | 24);
    }

    #[test]
    fn words_follow_slot_order() {
        let palette = [
            Some(RgbColor::new(255, 0, 0)),
            Some(RgbColor::new(0, 255, 0)),
            Some(RgbColor::new(0, 0, 255))
        ];
        let words = encode_palette(&palette, PaletteFormat::Pwm);
        assert_eq!(words, vec![0x8000 | (31 << 10), 0x8000 | (31 << 5), 0x8000 | 31]);
    }
}
