/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use sxg::sxg_core::color::palette_from_packed;
use sxg::sxg_core::color::{ColorFormat, PaletteFormat, RgbColor};
use sxg::sxg_core::options::EncoderOptions;
use sxg::{SxgEncodeErrors, SxgEncoder};

fn encode_to_vec(encoder: &SxgEncoder) -> Vec<u8> {
    let mut sink = Vec::new();
    let size = encoder.encode(&mut sink).unwrap();
    assert_eq!(size, sink.len());
    sink
}

#[test]
fn sixteen_color_clut_image_byte_for_byte() {
    // 4x1 image over a two-color CLUT palette
    let palette = palette_from_packed(&[0x00_0000, 0xFF_FFFF]).unwrap();
    let pixels = [0, 1, 1, 0];
    let options = EncoderOptions::default()
        .set_width(4)
        .set_height(1)
        .set_background_color(1)
        .set_color_format(ColorFormat::Sixteen)
        .set_palette_format(PaletteFormat::Clut);

    let encoder = SxgEncoder::new(&pixels, &palette, options);
    let data = encode_to_vec(&encoder);

    // black -> clut index 0 per channel, white -> 24 per channel
    let white: u16 = (24 << 10) | (24 << 5) | 24;
    let mut expected = vec![
        0x7F, b'S', b'X', b'G', // magic
        2,    // version
        1,    // background color
        0,    // packing type
        1,    // 16-color
        4, 0, // width
        1, 0, // height
        2, 0, // shift to palette
        4, 0, // shift to pixels, two words
    ];
    expected.extend_from_slice(&0x0000_u16.to_le_bytes());
    expected.extend_from_slice(&white.to_le_bytes());
    // (0 << 4) | 1, (1 << 4) | 0
    expected.extend_from_slice(&[0x01, 0x10]);

    assert_eq!(data, expected);
}

#[test]
fn two_fifty_six_color_pwm_image_byte_for_byte() {
    let palette = palette_from_packed(&[0xFF_0000, 0x00_FF00, 0x00_00FF]).unwrap();
    let pixels = [2, 1, 0, 2];
    let options = EncoderOptions::default()
        .set_width(2)
        .set_height(2)
        .set_color_format(ColorFormat::TwoFiftySix)
        .set_palette_format(PaletteFormat::Pwm);

    let encoder = SxgEncoder::new(&pixels, &palette, options);
    let data = encode_to_vec(&encoder);

    assert_eq!(&data[0..4], &[0x7F, b'S', b'X', b'G']);
    assert_eq!(data[7], 2); // 256-color
    assert_eq!(&data[14..16], &6_u16.to_le_bytes()); // three words * 2

    let red: u16 = 0x8000 | (31 << 10);
    let green: u16 = 0x8000 | (31 << 5);
    let blue: u16 = 0x8000 | 31;
    assert_eq!(&data[16..18], &red.to_le_bytes());
    assert_eq!(&data[18..20], &green.to_le_bytes());
    assert_eq!(&data[20..22], &blue.to_le_bytes());

    // 256-color pixels pass through unpacked
    assert_eq!(&data[22..], &pixels);
}

#[test]
fn empty_palette_and_empty_grid_still_produce_a_header() {
    let options = EncoderOptions::default()
        .set_color_format(ColorFormat::TwoFiftySix)
        .set_palette_format(PaletteFormat::Pwm);

    let encoder = SxgEncoder::new(&[], &[], options);
    let data = encode_to_vec(&encoder);

    assert_eq!(data.len(), 16);
    assert_eq!(&data[14..16], &0_u16.to_le_bytes());
}

#[test]
fn invalid_packed_colors_surface_as_encode_errors() {
    fn build_palette() -> Result<Vec<Option<RgbColor>>, SxgEncodeErrors> {
        Ok(palette_from_packed(&[0xFF00_0000])?)
    }

    assert!(matches!(
        build_palette(),
        Err(SxgEncodeErrors::InvalidColorValue(0xFF00_0000))
    ));
}

#[test]
fn file_backed_sink_roundtrip() {
    use std::fs::File;
    use std::io::BufWriter;

    let palette = palette_from_packed(&[0x12_3456]).unwrap();
    let pixels = [0, 0];
    let options = EncoderOptions::default()
        .set_width(2)
        .set_height(1)
        .set_color_format(ColorFormat::TwoFiftySix);

    let encoder = SxgEncoder::new(&pixels, &palette, options);

    let path = std::env::temp_dir().join("sxg_encode_sink_test.sxg");
    {
        let mut writer = BufWriter::new(File::create(&path).unwrap());
        encoder.encode(&mut writer).unwrap();
    }
    let on_disk = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let in_memory = encode_to_vec(&encoder);
    assert_eq!(on_disk, in_memory);
}
