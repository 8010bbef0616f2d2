// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Numeric Layout
//!
//! The intrinsic layout of each primitive arithmetic type. Every constant in
//! the registry is derived from what is declared here: integer limits from
//! bit width and signedness, float limits from the IEEE-754 field split.
//!
//! ## Highlights
//!
//! - `Arithmetic`: category, bit width and canonical name for all primitives.
//! - `FloatLayout`: mantissa/exponent split, bias and field masks for `f32`
//!   and `f64`, plus bit-pattern conversions.

use crate::category::NumericCategory;
use num_traits::Num;

/// An arithmetic type known to the registry.
///
/// # Examples
///
/// ```rust
/// # use limits_core::{Arithmetic, NumericCategory};
/// assert_eq!(<u8 as Arithmetic>::CATEGORY, NumericCategory::NarrowUnsigned);
/// assert_eq!(<i64 as Arithmetic>::BITS, 64);
/// assert_eq!(<f32 as Arithmetic>::NAME, "f32");
/// ```
pub trait Arithmetic:
    Num + Copy + PartialEq + PartialOrd + core::fmt::Debug + Send + Sync + 'static
{
    /// The category this type belongs to.
    const CATEGORY: NumericCategory;
    /// The storage width in bits.
    const BITS: u32;
    /// The canonical type name.
    const NAME: &'static str;
}

/// The binary interchange layout of a floating-point type.
///
/// `MANTISSA_DIGITS` counts the implicit leading bit, so the stored fraction
/// field is `MANTISSA_DIGITS - 1` bits wide and the exponent field takes the
/// remaining `BITS - MANTISSA_DIGITS` bits after the sign.
pub trait FloatLayout: Arithmetic {
    /// The unsigned integer type with the same width.
    type Bits: Copy + Eq + core::fmt::Debug + core::fmt::LowerHex + Send + Sync + 'static;

    const MANTISSA_DIGITS: u32;
    const FRACTION_BITS: u32;
    const EXPONENT_BITS: u32;
    const EXPONENT_BIAS: u32;

    const SIGN_MASK: Self::Bits;
    const EXPONENT_MASK: Self::Bits;
    const FRACTION_MASK: Self::Bits;

    /// Reinterprets the value as its raw bit pattern.
    fn to_bits(self) -> Self::Bits;

    /// Reinterprets a raw bit pattern as a value.
    fn from_bits(bits: Self::Bits) -> Self;
}

macro_rules! impl_integral_layout {
    ($t:ty, $signed:expr) => {
        impl Arithmetic for $t {
            const CATEGORY: NumericCategory = NumericCategory::integral(<$t>::BITS, $signed);
            const BITS: u32 = <$t>::BITS;
            const NAME: &'static str = stringify!($t);
        }
    };
}

macro_rules! impl_float_layout {
    ($t:ty, $bits:ty) => {
        impl Arithmetic for $t {
            const CATEGORY: NumericCategory = NumericCategory::floating(<$t>::MANTISSA_DIGITS);
            const BITS: u32 = <$bits>::BITS;
            const NAME: &'static str = stringify!($t);
        }

        impl FloatLayout for $t {
            type Bits = $bits;

            const MANTISSA_DIGITS: u32 = <$t>::MANTISSA_DIGITS;
            const FRACTION_BITS: u32 = <$t>::MANTISSA_DIGITS - 1;
            const EXPONENT_BITS: u32 = <$bits>::BITS - <$t>::MANTISSA_DIGITS;
            const EXPONENT_BIAS: u32 = (1 << (Self::EXPONENT_BITS - 1)) - 1;

            const SIGN_MASK: $bits = 1 << (<$bits>::BITS - 1);
            const EXPONENT_MASK: $bits = ((1 << Self::EXPONENT_BITS) - 1) << Self::FRACTION_BITS;
            const FRACTION_MASK: $bits = (1 << Self::FRACTION_BITS) - 1;

            #[inline(always)]
            fn to_bits(self) -> $bits {
                <$t>::to_bits(self)
            }

            #[inline(always)]
            fn from_bits(bits: $bits) -> Self {
                <$t>::from_bits(bits)
            }
        }
    };
}

impl_integral_layout!(i8, true);
impl_integral_layout!(i16, true);
impl_integral_layout!(i32, true);
impl_integral_layout!(i64, true);
impl_integral_layout!(i128, true);
impl_integral_layout!(isize, true);

impl_integral_layout!(u8, false);
impl_integral_layout!(u16, false);
impl_integral_layout!(u32, false);
impl_integral_layout!(u64, false);
impl_integral_layout!(u128, false);
impl_integral_layout!(usize, false);

impl_float_layout!(f32, u32);
impl_float_layout!(f64, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f32_field_split() {
        assert_eq!(<f32 as FloatLayout>::FRACTION_BITS, 23);
        assert_eq!(<f32 as FloatLayout>::EXPONENT_BITS, 8);
        assert_eq!(<f32 as FloatLayout>::EXPONENT_BIAS, 127);
        assert_eq!(<f32 as FloatLayout>::SIGN_MASK, 0x8000_0000);
        assert_eq!(<f32 as FloatLayout>::EXPONENT_MASK, 0x7f80_0000);
        assert_eq!(<f32 as FloatLayout>::FRACTION_MASK, 0x007f_ffff);
    }

    #[test]
    fn test_f64_field_split() {
        assert_eq!(<f64 as FloatLayout>::FRACTION_BITS, 52);
        assert_eq!(<f64 as FloatLayout>::EXPONENT_BITS, 11);
        assert_eq!(<f64 as FloatLayout>::EXPONENT_BIAS, 1023);
        assert_eq!(<f64 as FloatLayout>::SIGN_MASK, 0x8000_0000_0000_0000);
        assert_eq!(<f64 as FloatLayout>::EXPONENT_MASK, 0x7ff0_0000_0000_0000);
        assert_eq!(<f64 as FloatLayout>::FRACTION_MASK, 0x000f_ffff_ffff_ffff);
    }

    #[test]
    fn test_masks_cover_every_bit_once() {
        let f32_all = <f32 as FloatLayout>::SIGN_MASK
            | <f32 as FloatLayout>::EXPONENT_MASK
            | <f32 as FloatLayout>::FRACTION_MASK;
        assert_eq!(f32_all, u32::MAX);
        assert_eq!(
            <f32 as FloatLayout>::EXPONENT_MASK & <f32 as FloatLayout>::FRACTION_MASK,
            0
        );

        let f64_all = <f64 as FloatLayout>::SIGN_MASK
            | <f64 as FloatLayout>::EXPONENT_MASK
            | <f64 as FloatLayout>::FRACTION_MASK;
        assert_eq!(f64_all, u64::MAX);
    }

    #[test]
    fn test_integral_categories() {
        assert_eq!(<i8 as Arithmetic>::CATEGORY, NumericCategory::NarrowSigned);
        assert_eq!(<u16 as Arithmetic>::CATEGORY, NumericCategory::NarrowUnsigned);
        assert_eq!(<i32 as Arithmetic>::CATEGORY, NumericCategory::Signed);
        assert_eq!(<u32 as Arithmetic>::CATEGORY, NumericCategory::Unsigned);
        assert_eq!(<i128 as Arithmetic>::CATEGORY, NumericCategory::WideSigned);
        assert_eq!(<u64 as Arithmetic>::CATEGORY, NumericCategory::WideUnsigned);
        assert_eq!(
            <usize as Arithmetic>::CATEGORY,
            NumericCategory::integral(usize::BITS, false)
        );
    }

    #[test]
    fn test_float_categories() {
        assert_eq!(<f32 as Arithmetic>::CATEGORY, NumericCategory::Single);
        assert_eq!(<f64 as Arithmetic>::CATEGORY, NumericCategory::Double);
        assert_eq!(<crate::LongDouble as Arithmetic>::CATEGORY, NumericCategory::Double);
    }

    #[test]
    fn test_ffi_aliases_share_layout() {
        use core::ffi::{c_char, c_int, c_long, c_uchar};

        assert_eq!(<c_uchar as Arithmetic>::NAME, "u8");
        assert_eq!(<c_int as Arithmetic>::BITS, 32);
        assert_eq!(<c_long as Arithmetic>::BITS, c_long::BITS);
        assert_eq!(<c_char as Arithmetic>::BITS, 8);
    }

    #[test]
    fn test_bits_conversion_is_lossless() {
        let x = -1.5f64;
        assert_eq!(<f64 as FloatLayout>::from_bits(FloatLayout::to_bits(x)), x);
        assert_eq!(FloatLayout::to_bits(1.0f32), 0x3f80_0000);
    }
}
