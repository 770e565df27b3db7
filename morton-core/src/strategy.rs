//! Strategy selection.
//!
//! [`Strategy`] names one of the interchangeable implementations. The
//! `CODECS_*` tables hold the matching encode/decode function pointers for
//! each (dimension, width) group, indexed by the strategy discriminant, so a
//! caller can pick an implementation at runtime while the signature stays
//! fixed.
//!
//! ```
//! use morton_core::{Strategy, CODECS_3D_64};
//!
//! let reference = Strategy::Loop.codec_3d_64();
//! for codec in CODECS_3D_64 {
//!     assert_eq!((codec.encode)(5, 9, 12), (reference.encode)(5, 9, 12));
//! }
//! ```

use core::fmt;
use core::str::FromStr;

use crate::codec::*;

/// Interchangeable encode/decode implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strategy {
    /// Byte-wise spread/compaction tables with a runtime shift by axis.
    Lut = 0,
    /// Per-axis tables with the axis offset folded in.
    LutShifted = 1,
    /// Mask-and-shift dilation, no table memory.
    MagicBits = 2,
    /// Per-bit reference loop.
    Loop = 3,
}

impl Strategy {
    /// Every strategy, in registry order.
    pub const ALL: [Strategy; 4] = [
        Strategy::Lut,
        Strategy::LutShifted,
        Strategy::MagicBits,
        Strategy::Loop,
    ];

    /// Short identifier, as used in operation names.
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Lut => "lut",
            Strategy::LutShifted => "lut_shifted",
            Strategy::MagicBits => "magicbits",
            Strategy::Loop => "for",
        }
    }

    /// 2D codec with a 32-bit code.
    #[inline]
    pub fn codec_2d_32(self) -> Codec2<u32, u16> {
        CODECS_2D_32[self as usize]
    }

    /// 2D codec with a 64-bit code.
    #[inline]
    pub fn codec_2d_64(self) -> Codec2<u64, u32> {
        CODECS_2D_64[self as usize]
    }

    /// 3D codec with a 32-bit code.
    #[inline]
    pub fn codec_3d_32(self) -> Codec3<u32, u16> {
        CODECS_3D_32[self as usize]
    }

    /// 3D codec with a 64-bit code.
    #[inline]
    pub fn codec_3d_64(self) -> Codec3<u64, u32> {
        CODECS_3D_64[self as usize]
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name a [`Strategy`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownStrategy;

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown strategy (expected lut, lut_shifted, magicbits or for)")
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or(UnknownStrategy)
    }
}

/// Encode/decode pair for 2D coordinates.
#[derive(Clone, Copy, Debug)]
pub struct Codec2<C, K> {
    /// Implementation behind the function pointers.
    pub strategy: Strategy,
    /// `(x, y) -> code`.
    pub encode: fn(K, K) -> C,
    /// `code -> (x, y)`.
    pub decode: fn(C) -> (K, K),
}

/// Encode/decode pair for 3D coordinates.
#[derive(Clone, Copy, Debug)]
pub struct Codec3<C, K> {
    /// Implementation behind the function pointers.
    pub strategy: Strategy,
    /// `(x, y, z) -> code`.
    pub encode: fn(K, K, K) -> C,
    /// `code -> (x, y, z)`.
    pub decode: fn(C) -> (K, K, K),
}

/// 2D/32-bit codecs, indexed by [`Strategy`].
pub static CODECS_2D_32: [Codec2<u32, u16>; 4] = [
    Codec2 {
        strategy: Strategy::Lut,
        encode: morton2d_32_encode_lut,
        decode: morton2d_32_decode_lut,
    },
    Codec2 {
        strategy: Strategy::LutShifted,
        encode: morton2d_32_encode_lut_shifted,
        decode: morton2d_32_decode_lut_shifted,
    },
    Codec2 {
        strategy: Strategy::MagicBits,
        encode: morton2d_32_encode_magicbits,
        decode: morton2d_32_decode_magicbits,
    },
    Codec2 {
        strategy: Strategy::Loop,
        encode: morton2d_32_encode_for,
        decode: morton2d_32_decode_for,
    },
];

/// 2D/64-bit codecs, indexed by [`Strategy`].
pub static CODECS_2D_64: [Codec2<u64, u32>; 4] = [
    Codec2 {
        strategy: Strategy::Lut,
        encode: morton2d_64_encode_lut,
        decode: morton2d_64_decode_lut,
    },
    Codec2 {
        strategy: Strategy::LutShifted,
        encode: morton2d_64_encode_lut_shifted,
        decode: morton2d_64_decode_lut_shifted,
    },
    Codec2 {
        strategy: Strategy::MagicBits,
        encode: morton2d_64_encode_magicbits,
        decode: morton2d_64_decode_magicbits,
    },
    Codec2 {
        strategy: Strategy::Loop,
        encode: morton2d_64_encode_for,
        decode: morton2d_64_decode_for,
    },
];

/// 3D/32-bit codecs, indexed by [`Strategy`].
pub static CODECS_3D_32: [Codec3<u32, u16>; 4] = [
    Codec3 {
        strategy: Strategy::Lut,
        encode: morton3d_32_encode_lut,
        decode: morton3d_32_decode_lut,
    },
    Codec3 {
        strategy: Strategy::LutShifted,
        encode: morton3d_32_encode_lut_shifted,
        decode: morton3d_32_decode_lut_shifted,
    },
    Codec3 {
        strategy: Strategy::MagicBits,
        encode: morton3d_32_encode_magicbits,
        decode: morton3d_32_decode_magicbits,
    },
    Codec3 {
        strategy: Strategy::Loop,
        encode: morton3d_32_encode_for,
        decode: morton3d_32_decode_for,
    },
];

/// 3D/64-bit codecs, indexed by [`Strategy`].
pub static CODECS_3D_64: [Codec3<u64, u32>; 4] = [
    Codec3 {
        strategy: Strategy::Lut,
        encode: morton3d_64_encode_lut,
        decode: morton3d_64_decode_lut,
    },
    Codec3 {
        strategy: Strategy::LutShifted,
        encode: morton3d_64_encode_lut_shifted,
        decode: morton3d_64_decode_lut_shifted,
    },
    Codec3 {
        strategy: Strategy::MagicBits,
        encode: morton3d_64_encode_magicbits,
        decode: morton3d_64_decode_magicbits,
    },
    Codec3 {
        strategy: Strategy::Loop,
        encode: morton3d_64_encode_for,
        decode: morton3d_64_decode_for,
    },
];
