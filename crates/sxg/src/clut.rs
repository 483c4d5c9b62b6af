/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Nearest-value lookup into the fixed CLUT intensity ramp

use crate::constants::SXG_CLUT;

/// Return the index of the [`SXG_CLUT`] entry closest to `value`
///
/// When two entries are equidistant the lower index wins, the scan
/// only moves on a strictly smaller difference. The reference encoder
/// resolved ties the same way, so changing this would shift palette
/// words in otherwise identical images.
pub fn nearest_clut_index(value: u8) -> u8 {
    let mut closest = 0_usize;
    let mut closest_difference = u32::MAX;

    for (index, entry) in SXG_CLUT.iter().enumerate() {
        let difference = i32::from(value).abs_diff(i32::from(*entry));

        if difference < closest_difference {
            closest_difference = difference;
            closest = index;
        }
    }
    closest as u8
}

#[cfg(test)]
mod tests {
    use crate::constants::SXG_CLUT;
    use crate::nearest_clut_index;

    #[test]
    fn extremes_map_to_table_ends() {
        assert_eq!(nearest_clut_index(0), 0);
        assert_eq!(nearest_clut_index(255), 24);
    }

    #[test]
    fn ties_resolve_to_lowest_index() {
        // 5 is equidistant from entries 0 and 10, the first one
        // encountered must win
        assert_eq!(nearest_clut_index(5), 0);
    }

    #[test]
    fn every_byte_maps_to_minimal_entry() {
        for value in 0..=255_u8 {
            let index = usize::from(nearest_clut_index(value));
            assert!(index < SXG_CLUT.len());

            let best = SXG_CLUT
                .iter()
                .map(|entry| i32::from(value).abs_diff(i32::from(*entry)))
                .min()
                .unwrap();
            let chosen = i32::from(value).abs_diff(i32::from(SXG_CLUT[index]));
            assert_eq!(chosen, best, "value {value} mapped to index {index}");
        }
    }
}
