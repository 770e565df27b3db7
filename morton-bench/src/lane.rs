//! Integer widths flowing through the codec registries.

/// Coordinate or code word of a codec.
///
/// `from_bits` truncates; callers mask to the layout before converting.
pub trait Lane: Copy + Into<u64> {
    fn from_bits(bits: u64) -> Self;
}

macro_rules! impl_lane {
    ($($t:ty),*) => {
        $(
            impl Lane for $t {
                #[inline(always)]
                fn from_bits(bits: u64) -> Self {
                    bits as $t
                }
            }
        )*
    };
}

impl_lane!(u16, u32, u64);
