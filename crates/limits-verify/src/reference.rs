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

//! # Reference Extrema
//!
//! Ground truth for the finite extrema checks, written out as literals and
//! kept apart from the registry's layout-derived constants. The table is a
//! set of associated constants, so it is fixed at compile time and shared by
//! every worker without synchronization.

use limits_core::Arithmetic;

/// A type with a known-correct finite minimum and maximum.
pub trait ReferenceExtrema: Arithmetic {
    const REFERENCE_MIN: Self;
    const REFERENCE_MAX: Self;
}

/// Returns the reference minimum of `T`.
#[inline(always)]
pub const fn reference_min<T: ReferenceExtrema>() -> T {
    T::REFERENCE_MIN
}

/// Returns the reference maximum of `T`.
#[inline(always)]
pub const fn reference_max<T: ReferenceExtrema>() -> T {
    T::REFERENCE_MAX
}

macro_rules! reference_extrema {
    ($($t:ty => ($min:expr, $max:expr);)*) => {
        $(
            impl ReferenceExtrema for $t {
                const REFERENCE_MIN: Self = $min;
                const REFERENCE_MAX: Self = $max;
            }
        )*
    };
}

reference_extrema! {
    i8 => (-128, 127);
    u8 => (0, 255);
    i16 => (-32_768, 32_767);
    u16 => (0, 65_535);
    i32 => (-2_147_483_648, 2_147_483_647);
    u32 => (0, 4_294_967_295);
    i64 => (-9_223_372_036_854_775_808, 9_223_372_036_854_775_807);
    u64 => (0, 18_446_744_073_709_551_615);
    i128 => (
        -170_141_183_460_469_231_731_687_303_715_884_105_728,
        170_141_183_460_469_231_731_687_303_715_884_105_727
    );
    u128 => (0, 340_282_366_920_938_463_463_374_607_431_768_211_455);
    f32 => (-3.402_823_47e+38, 3.402_823_47e+38);
    f64 => (-1.797_693_134_862_315_7e+308, 1.797_693_134_862_315_7e+308);
}

#[cfg(target_pointer_width = "64")]
reference_extrema! {
    isize => (-9_223_372_036_854_775_808, 9_223_372_036_854_775_807);
    usize => (0, 18_446_744_073_709_551_615);
}

#[cfg(target_pointer_width = "32")]
reference_extrema! {
    isize => (-2_147_483_648, 2_147_483_647);
    usize => (0, 4_294_967_295);
}

#[cfg(target_pointer_width = "16")]
reference_extrema! {
    isize => (-32_768, 32_767);
    usize => (0, 65_535);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals_agree_with_intrinsics() {
        assert_eq!(reference_min::<i8>(), i8::MIN);
        assert_eq!(reference_max::<u16>(), u16::MAX);
        assert_eq!(reference_min::<i64>(), i64::MIN);
        assert_eq!(reference_max::<u128>(), u128::MAX);
        assert_eq!(reference_min::<i128>(), i128::MIN);
        assert_eq!(reference_max::<isize>(), isize::MAX);
        assert_eq!(reference_max::<usize>(), usize::MAX);
        assert_eq!(reference_max::<f32>(), f32::MAX);
        assert_eq!(reference_min::<f64>(), f64::MIN);
    }

    #[test]
    fn test_float_literals_are_finite() {
        assert!(reference_max::<f32>().is_finite());
        assert!(reference_min::<f64>().is_finite());
    }
}
