//! Unit tests for the morton-core lookup tables and magic constants.
//!
//! Tests cover: tables.rs, magic.rs

#[cfg(test)]
mod tests {
    use morton_core::magic::{compact, dilate, dilation};
    use morton_core::tables::{
        chunk_axis_mask, compact_table, spread_table, CHUNK_BITS_2D, CHUNK_BITS_3D, COMPACT_2D,
        COMPACT_2D_SHIFTED, COMPACT_3D, COMPACT_3D_SHIFTED, SPREAD_2D, SPREAD_2D_SHIFTED,
        SPREAD_3D, SPREAD_3D_SHIFTED,
    };
    use morton_core::{
        DILATE_2D_32, DILATE_2D_64, DILATE_3D_32, DILATE_3D_64, LAYOUT_2D_32, LAYOUT_2D_64,
        LAYOUT_3D_32, LAYOUT_3D_64,
    };

    // =========================================================================
    // Spread tables
    // =========================================================================

    #[test]
    fn test_spread_known_values() {
        assert_eq!(SPREAD_2D[0], 0);
        assert_eq!(SPREAD_2D[0b1011], 0b01_00_01_01);
        assert_eq!(SPREAD_2D[0xFF], 0x5555);
        assert_eq!(SPREAD_3D[0b11], 0b1001);
        assert_eq!(SPREAD_3D[0xFF], 0x0024_9249);
    }

    #[test]
    fn test_spread_matches_dilation() {
        // Table entries are the magic-bits dilation of the byte
        for byte in 0..256u64 {
            assert_eq!(SPREAD_2D[byte as usize] as u64, dilate(byte, &DILATE_2D_64));
            assert_eq!(SPREAD_3D[byte as usize] as u64, dilate(byte, &DILATE_3D_64));
        }
    }

    #[test]
    fn test_spread_shifted_is_base_shifted_by_axis() {
        for byte in 0..256 {
            for axis in 0..2 {
                assert_eq!(SPREAD_2D_SHIFTED[axis][byte], SPREAD_2D[byte] << axis);
            }
            for axis in 0..3 {
                assert_eq!(SPREAD_3D_SHIFTED[axis][byte], SPREAD_3D[byte] << axis);
            }
        }
    }

    #[test]
    fn test_spread_preserves_popcount() {
        for byte in 0..256usize {
            assert_eq!(SPREAD_2D[byte].count_ones(), byte.count_ones());
            assert_eq!(SPREAD_3D[byte].count_ones(), byte.count_ones());
        }
    }

    // =========================================================================
    // Compaction tables
    // =========================================================================

    #[test]
    fn test_chunk_masks() {
        assert_eq!(chunk_axis_mask(2, CHUNK_BITS_2D), 0x55);
        assert_eq!(chunk_axis_mask(3, CHUNK_BITS_3D), 0x49);
        assert_eq!(COMPACT_2D.len(), 1 << CHUNK_BITS_2D);
        assert_eq!(COMPACT_3D.len(), 1 << CHUNK_BITS_3D);
    }

    #[test]
    fn test_compact_inverts_spread_within_chunk() {
        for nibble in 0..16usize {
            assert_eq!(COMPACT_2D[SPREAD_2D[nibble] as usize] as usize, nibble);
        }
        for triple in 0..8usize {
            assert_eq!(COMPACT_3D[SPREAD_3D[triple] as usize] as usize, triple);
        }
    }

    #[test]
    fn test_compact_ignores_other_axes() {
        // Masking before lookup is redundant for the tables themselves
        for chunk in 0..256usize {
            assert_eq!(COMPACT_2D[chunk], COMPACT_2D[chunk & 0x55]);
        }
        for chunk in 0..512usize {
            assert_eq!(COMPACT_3D[chunk], COMPACT_3D[chunk & 0x49]);
            assert!(COMPACT_3D[chunk] < 8);
        }
    }

    #[test]
    fn test_compact_shifted_matches_base_after_shift() {
        for chunk in 0..256usize {
            for axis in 0..2 {
                assert_eq!(COMPACT_2D_SHIFTED[axis][chunk], COMPACT_2D[chunk >> axis]);
            }
        }
        for chunk in 0..512usize {
            for axis in 0..3 {
                assert_eq!(COMPACT_3D_SHIFTED[axis][chunk], COMPACT_3D[chunk >> axis]);
            }
        }
    }

    #[test]
    fn test_table_generators_are_const() {
        const SPREAD: [u32; 256] = spread_table(3, 2);
        const COMPACT: [u8; 512] = compact_table::<512>(3, 2);
        assert_eq!(SPREAD, SPREAD_3D_SHIFTED[2]);
        assert_eq!(COMPACT, COMPACT_3D_SHIFTED[2]);
    }

    // =========================================================================
    // Magic constants
    // =========================================================================

    #[test]
    fn test_dilation_selection() {
        assert_eq!(*dilation::<2, 32>(), DILATE_2D_32);
        assert_eq!(*dilation::<2, 64>(), DILATE_2D_64);
        assert_eq!(*dilation::<3, 32>(), DILATE_3D_32);
        assert_eq!(*dilation::<3, 64>(), DILATE_3D_64);
    }

    #[test]
    fn test_dilation_steps_halve_shift() {
        for d in [DILATE_2D_32, DILATE_2D_64, DILATE_3D_32, DILATE_3D_64] {
            for pair in d.steps.windows(2) {
                assert_eq!(pair[0].0, pair[1].0 * 2, "{:?}", d);
            }
        }
    }

    #[test]
    fn test_dilate_compact_full_width() {
        for (d, layout) in [
            (DILATE_2D_32, LAYOUT_2D_32),
            (DILATE_2D_64, LAYOUT_2D_64),
            (DILATE_3D_32, LAYOUT_3D_32),
            (DILATE_3D_64, LAYOUT_3D_64),
        ] {
            let max = layout.coord_mask();
            for v in [0, 1, max >> 1, max, 0x5A5A_5A5A & max, 0x0123_4567 & max] {
                let spread = dilate(v, &d);
                assert_eq!(spread & !layout.axis_mask(0), 0, "{:?} v={:#x}", layout, v);
                assert_eq!(compact(spread, &d), v, "{:?} v={:#x}", layout, v);
            }
        }
    }
}
