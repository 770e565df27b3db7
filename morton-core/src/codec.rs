// =============================================================================
// Named Codec Operations
// =============================================================================
//
// One free function per (dimension, width, direction, strategy). Functions in
// the same (dimension, width, direction) group share a signature and are
// drop-in replacements for each other.
//
// 32-bit codes take `u16` coordinates, 64-bit codes take `u32` coordinates.
// Coordinate bits beyond the effective width are discarded.

macro_rules! codec_2d {
    ($width:literal, $code:ty, $coord:ty; $( $name:literal: $enc:ident, $dec:ident => $module:ident :: { $e:ident, $d:ident } );+ $(;)?) => {$(
        #[doc = concat!("Encode `(x, y)` into a ", stringify!($width), "-bit 2D Morton code (", $name, ").")]
        #[inline]
        pub fn $enc(x: $coord, y: $coord) -> $code {
            crate::$module::$e::<2, $width>([x as u64, y as u64]) as $code
        }

        #[doc = concat!("Decode a ", stringify!($width), "-bit 2D Morton code into `(x, y)` (", $name, ").")]
        #[inline]
        pub fn $dec(code: $code) -> ($coord, $coord) {
            let [x, y] = crate::$module::$d::<2, $width>(code as u64);
            (x as $coord, y as $coord)
        }
    )+};
}

macro_rules! codec_3d {
    ($width:literal, $code:ty, $coord:ty; $( $name:literal: $enc:ident, $dec:ident => $module:ident :: { $e:ident, $d:ident } );+ $(;)?) => {$(
        #[doc = concat!("Encode `(x, y, z)` into a ", stringify!($width), "-bit 3D Morton code (", $name, ").")]
        #[inline]
        pub fn $enc(x: $coord, y: $coord, z: $coord) -> $code {
            crate::$module::$e::<3, $width>([x as u64, y as u64, z as u64]) as $code
        }

        #[doc = concat!("Decode a ", stringify!($width), "-bit 3D Morton code into `(x, y, z)` (", $name, ").")]
        #[inline]
        pub fn $dec(code: $code) -> ($coord, $coord, $coord) {
            let [x, y, z] = crate::$module::$d::<3, $width>(code as u64);
            (x as $coord, y as $coord, z as $coord)
        }
    )+};
}

// =============================================================================
// 2D
// =============================================================================

codec_2d! { 32, u32, u16;
    "lookup table": morton2d_32_encode_lut, morton2d_32_decode_lut => lut::{encode, decode};
    "preshifted lookup table": morton2d_32_encode_lut_shifted, morton2d_32_decode_lut_shifted => lut::{encode_shifted, decode_shifted};
    "magic bits": morton2d_32_encode_magicbits, morton2d_32_decode_magicbits => magic::{encode, decode};
    "bit loop": morton2d_32_encode_for, morton2d_32_decode_for => naive::{encode, decode};
}

codec_2d! { 64, u64, u32;
    "lookup table": morton2d_64_encode_lut, morton2d_64_decode_lut => lut::{encode, decode};
    "preshifted lookup table": morton2d_64_encode_lut_shifted, morton2d_64_decode_lut_shifted => lut::{encode_shifted, decode_shifted};
    "magic bits": morton2d_64_encode_magicbits, morton2d_64_decode_magicbits => magic::{encode, decode};
    "bit loop": morton2d_64_encode_for, morton2d_64_decode_for => naive::{encode, decode};
}

// =============================================================================
// 3D
// =============================================================================

codec_3d! { 32, u32, u16;
    "lookup table": morton3d_32_encode_lut, morton3d_32_decode_lut => lut::{encode, decode};
    "preshifted lookup table": morton3d_32_encode_lut_shifted, morton3d_32_decode_lut_shifted => lut::{encode_shifted, decode_shifted};
    "magic bits": morton3d_32_encode_magicbits, morton3d_32_decode_magicbits => magic::{encode, decode};
    "bit loop": morton3d_32_encode_for, morton3d_32_decode_for => naive::{encode, decode};
}

codec_3d! { 64, u64, u32;
    "lookup table": morton3d_64_encode_lut, morton3d_64_decode_lut => lut::{encode, decode};
    "preshifted lookup table": morton3d_64_encode_lut_shifted, morton3d_64_decode_lut_shifted => lut::{encode_shifted, decode_shifted};
    "magic bits": morton3d_64_encode_magicbits, morton3d_64_decode_magicbits => magic::{encode, decode};
    "bit loop": morton3d_64_encode_for, morton3d_64_decode_for => naive::{encode, decode};
}
