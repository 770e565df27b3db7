//! Unit tests for the morton-core codec surface.
//!
//! Tests cover: codec.rs, strategy.rs, layout.rs
//! Focus: pinned bit convention, exhaustive agreement with the reference loop,
//! truncation of out-of-range coordinates.

#[path = "../common/mod.rs"]
mod common;

#[cfg(test)]
mod tests {
    use super::common::{
        golden_codes_2d, golden_codes_3d, golden_coords_3d, GOLDEN_SIDE, WORKED_2D, WORKED_3D,
    };
    use morton_core::{
        morton2d_32_encode_for, morton3d_32_decode_lut, morton3d_32_encode_for,
        morton3d_32_encode_lut, morton3d_64_decode_for, morton3d_64_encode_for,
        morton3d_64_encode_magicbits, Strategy, CODECS_2D_32, CODECS_2D_64, CODECS_3D_32,
        CODECS_3D_64, LAYOUT_2D_32, LAYOUT_2D_64, LAYOUT_3D_32, LAYOUT_3D_64,
    };

    // =========================================================================
    // Axis convention
    // =========================================================================

    #[test]
    fn test_worked_table_3d_64() {
        for codec in CODECS_3D_64 {
            for &((x, y, z), expected) in WORKED_3D {
                assert_eq!(
                    (codec.encode)(x, y, z),
                    expected,
                    "{} encode({}, {}, {})",
                    codec.strategy,
                    x,
                    y,
                    z
                );
                assert_eq!((codec.decode)(expected), (x, y, z), "{} decode({:#x})", codec.strategy, expected);
            }
        }
    }

    #[test]
    fn test_worked_table_3d_32() {
        // Same convention, narrower code: only values within 10 bits per axis
        for codec in CODECS_3D_32 {
            for &((x, y, z), expected) in WORKED_3D.iter().filter(|(c, _)| c.0 < 1024 && c.1 < 1024 && c.2 < 1024) {
                assert_eq!((codec.encode)(x as u16, y as u16, z as u16), expected as u32, "{}", codec.strategy);
            }
        }
    }

    #[test]
    fn test_worked_table_2d() {
        for codec in CODECS_2D_32 {
            for &((x, y), expected) in WORKED_2D {
                assert_eq!((codec.encode)(x, y), expected, "{} encode({}, {})", codec.strategy, x, y);
                assert_eq!((codec.decode)(expected), (x, y), "{}", codec.strategy);
            }
        }
        for codec in CODECS_2D_64 {
            for &((x, y), expected) in WORKED_2D {
                assert_eq!((codec.encode)(x as u32, y as u32), expected as u64, "{}", codec.strategy);
            }
        }
    }

    #[test]
    fn test_single_axis_unit_vectors() {
        // Each axis owns one bit of every group
        assert_eq!(morton3d_64_encode_for(1, 0, 0), 1);
        assert_eq!(morton3d_64_encode_for(0, 1, 0), 2);
        assert_eq!(morton3d_64_encode_for(0, 0, 1), 4);
        assert_eq!(morton2d_32_encode_for(1, 0), 1);
        assert_eq!(morton2d_32_encode_for(0, 1), 2);
    }

    // =========================================================================
    // Exhaustive small-range checks
    // =========================================================================

    #[test]
    fn test_encode_3d_64_matches_golden_cube() {
        let golden = golden_codes_3d();
        let n = GOLDEN_SIDE;
        let mut failures = 0;
        for codec in CODECS_3D_64 {
            for i in 0..n {
                for j in 0..n {
                    for k in 0..n {
                        if (codec.encode)(i, j, k) != golden[(k + n * (j + n * i)) as usize] {
                            failures += 1;
                        }
                    }
                }
            }
        }
        assert_eq!(failures, 0, "encode mismatches against golden table");
    }

    #[test]
    fn test_encode_3d_32_matches_golden_cube() {
        let golden = golden_codes_3d();
        let n = GOLDEN_SIDE;
        for codec in CODECS_3D_32 {
            for i in 0..n {
                for j in 0..n {
                    for k in 0..n {
                        let expected = golden[(k + n * (j + n * i)) as usize] as u32;
                        assert_eq!((codec.encode)(i as u16, j as u16, k as u16), expected, "{}", codec.strategy);
                    }
                }
            }
        }
    }

    #[test]
    fn test_decode_3d_first_4096_codes() {
        let coords = golden_coords_3d();
        for (code, &expected) in coords.iter().enumerate() {
            for codec in CODECS_3D_64 {
                assert_eq!((codec.decode)(code as u64), expected, "{} decode({})", codec.strategy, code);
            }
            for codec in CODECS_3D_32 {
                let (x, y, z) = expected;
                assert_eq!(
                    (codec.decode)(code as u32),
                    (x as u16, y as u16, z as u16),
                    "{} decode({})",
                    codec.strategy,
                    code
                );
            }
        }
    }

    #[test]
    fn test_golden_cube_is_a_permutation() {
        // Codes for [0,16)^3 are exactly 0..4096
        let mut codes = golden_codes_3d();
        codes.sort_unstable();
        assert!(codes.iter().enumerate().all(|(i, &c)| c == i as u64));
    }

    #[test]
    fn test_2d_matches_golden_square() {
        let golden = golden_codes_2d();
        let n = GOLDEN_SIDE as u16;
        for codec in CODECS_2D_32 {
            for i in 0..n {
                for j in 0..n {
                    let code = golden[(j + n * i) as usize];
                    assert_eq!((codec.encode)(i, j), code, "{}", codec.strategy);
                    assert_eq!((codec.decode)(code), (i, j), "{}", codec.strategy);
                }
            }
        }
        for codec in CODECS_2D_64 {
            for i in 0..n {
                for j in 0..n {
                    let code = golden[(j + n * i) as usize] as u64;
                    assert_eq!((codec.encode)(i as u32, j as u32), code, "{}", codec.strategy);
                    assert_eq!((codec.decode)(code), (i as u32, j as u32), "{}", codec.strategy);
                }
            }
        }
    }

    #[test]
    fn test_2d_32_every_16_bit_x() {
        // Full effective width of one axis, other axis fixed
        for x in 0..=u16::MAX {
            let reference = morton2d_32_encode_for(x, 0x5A5A);
            for codec in CODECS_2D_32 {
                assert_eq!((codec.encode)(x, 0x5A5A), reference, "{} x={}", codec.strategy, x);
            }
        }
    }

    // =========================================================================
    // Truncation
    // =========================================================================

    #[test]
    fn test_3d_32_truncates_above_10_bits() {
        for codec in CODECS_3D_32 {
            assert_eq!((codec.encode)(0x0400, 0, 0), 0, "{}", codec.strategy);
            assert_eq!((codec.encode)(0xFFFF, 0, 0), 0x0924_9249, "{}", codec.strategy);
            assert_eq!((codec.encode)(0x0401, 0x0400, 0xFC00), 1, "{}", codec.strategy);
        }
    }

    #[test]
    fn test_3d_64_truncates_above_21_bits() {
        for codec in CODECS_3D_64 {
            assert_eq!((codec.encode)(1 << 21, 0, 0), 0, "{}", codec.strategy);
            assert_eq!((codec.encode)(u32::MAX, 0, 0), 0x1249_2492_4924_9249, "{}", codec.strategy);
            assert_eq!((codec.encode)(0, 0, u32::MAX) >> 63, 0, "{}", codec.strategy);
        }
    }

    #[test]
    fn test_3d_decode_ignores_unused_top_bits() {
        // Bits 30, 31 (3D/32) and 63 (3D/64) belong to no representable coordinate bit
        for codec in CODECS_3D_32 {
            assert_eq!((codec.decode)(0xC000_0000), (0, 0, 0), "{}", codec.strategy);
            assert_eq!((codec.decode)(u32::MAX), (0x3FF, 0x3FF, 0x3FF), "{}", codec.strategy);
        }
        for codec in CODECS_3D_64 {
            assert_eq!((codec.decode)(1 << 63), (0, 0, 0), "{}", codec.strategy);
            assert_eq!((codec.decode)(u64::MAX), (0x1F_FFFF, 0x1F_FFFF, 0x1F_FFFF), "{}", codec.strategy);
        }
    }

    #[test]
    fn test_max_coordinates_fill_used_span() {
        assert_eq!(morton3d_32_encode_lut(0x3FF, 0x3FF, 0x3FF) as u64, LAYOUT_3D_32.used_mask());
        assert_eq!(morton3d_64_encode_magicbits(0x1F_FFFF, 0x1F_FFFF, 0x1F_FFFF), LAYOUT_3D_64.used_mask());
        for codec in CODECS_2D_64 {
            assert_eq!((codec.encode)(u32::MAX, u32::MAX), u64::MAX, "{}", codec.strategy);
            assert_eq!((codec.decode)(u64::MAX), (u32::MAX, u32::MAX), "{}", codec.strategy);
        }
    }

    // =========================================================================
    // Layout
    // =========================================================================

    #[test]
    fn test_layout_effective_widths() {
        assert_eq!(LAYOUT_2D_32.coord_bits(), 16);
        assert_eq!(LAYOUT_2D_64.coord_bits(), 32);
        assert_eq!(LAYOUT_3D_32.coord_bits(), 10);
        assert_eq!(LAYOUT_3D_64.coord_bits(), 21);

        assert_eq!(LAYOUT_3D_64.coord_bytes(), 3);
        assert_eq!(LAYOUT_2D_64.coord_mask(), 0xFFFF_FFFF);
        assert_eq!(LAYOUT_2D_64.used_mask(), u64::MAX);
        assert_eq!(LAYOUT_3D_32.used_mask(), 0x3FFF_FFFF);
    }

    #[test]
    fn test_layout_axis_masks_partition_used_span() {
        for layout in [LAYOUT_2D_32, LAYOUT_2D_64, LAYOUT_3D_32, LAYOUT_3D_64] {
            let mut union = 0u64;
            for axis in 0..layout.dims {
                let mask = layout.axis_mask(axis);
                assert_eq!(union & mask, 0, "axis masks overlap in {:?}", layout);
                assert_eq!(mask.count_ones(), layout.coord_bits());
                union |= mask;
            }
            assert_eq!(union, layout.used_mask(), "{:?}", layout);
        }
        assert_eq!(LAYOUT_3D_32.axis_mask(0), 0x0924_9249);
        assert_eq!(LAYOUT_3D_32.axis_mask(1), 0x1249_2492);
        assert_eq!(LAYOUT_3D_32.axis_mask(2), 0x2492_4924);
    }

    // =========================================================================
    // Registry
    // =========================================================================

    #[test]
    fn test_strategy_lookup_returns_matching_codec() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.codec_2d_32().strategy, strategy);
            assert_eq!(strategy.codec_2d_64().strategy, strategy);
            assert_eq!(strategy.codec_3d_32().strategy, strategy);
            assert_eq!(strategy.codec_3d_64().strategy, strategy);
        }

        let reference = Strategy::Loop.codec_3d_64();
        assert_eq!((reference.encode)(5, 9, 12), morton3d_64_encode_for(5, 9, 12));
        assert_eq!((reference.decode)(3395), morton3d_64_decode_for(3395));
        assert_eq!((Strategy::Lut.codec_3d_32().decode)(30), morton3d_32_decode_lut(30));
    }

    #[test]
    fn test_strategy_names() {
        let names: Vec<&str> = Strategy::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["lut", "lut_shifted", "magicbits", "for"]);
        assert_eq!(Strategy::MagicBits.to_string(), "magicbits");
        assert_eq!("lut_shifted".parse::<Strategy>(), Ok(Strategy::LutShifted));
        assert!("LUT".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_named_3d_32_reference_agrees_with_table() {
        for x in 0..1024u16 {
            assert_eq!(morton3d_32_encode_for(x, x ^ 0x2AA, 1023 - x), morton3d_32_encode_lut(x, x ^ 0x2AA, 1023 - x));
        }
    }
}
