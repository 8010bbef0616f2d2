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

//! # Numeric Limits
//!
//! Associated-constant traits mapping a primitive type to its infinity,
//! machine epsilon and finite extrema, plus `const fn` accessors over them.
//!
//! Dispatch is resolved entirely by trait selection: there is one impl per
//! concrete type and no runtime branching. `Infinity` and `Epsilon` exist only
//! for floating types, so asking for them on an integer does not compile:
//!
//! ```compile_fail
//! let _ = limits_core::infinity_of::<i32>();
//! ```
//!
//! ```compile_fail
//! let _ = limits_core::epsilon_of::<u64>();
//! ```
//!
//! Finite extrema are available for every primitive:
//!
//! ```rust
//! use limits_core::{finite_max_of, finite_min_of};
//!
//! assert_eq!(finite_min_of::<u8>(), 0);
//! assert_eq!(finite_max_of::<u8>(), 255);
//! assert_eq!(finite_min_of::<f32>(), -3.40282347e+38_f32);
//! ```

use crate::layout::{Arithmetic, FloatLayout};

/// A trait for floating types that have a positive infinity.
///
/// The value absorbs itself under addition (`inf + inf == inf`) and is
/// distinct from zero.
pub trait Infinity: FloatLayout {
    /// Positive infinity for the implementing type.
    const INFINITY: Self;
}

/// A trait for floating types that have a machine epsilon.
///
/// `EPSILON` is the smallest `e` with `1 + e != 1`; half of it rounds back
/// to one.
pub trait Epsilon: FloatLayout {
    /// The distance from one to the next representable value.
    const EPSILON: Self;
}

/// A trait for types with finite minimum and maximum values.
///
/// For floats these exclude infinity.
pub trait FiniteMinMax: Arithmetic {
    /// The most negative finite value.
    const FINITE_MIN: Self;
    /// The most positive finite value.
    const FINITE_MAX: Self;
}

/// Returns positive infinity for `T`.
///
/// # Examples
///
/// ```rust
/// # use limits_core::infinity_of;
/// let inf = infinity_of::<f32>();
/// assert_eq!(inf + inf, inf);
/// assert_ne!(inf, 0.0);
/// ```
#[inline(always)]
pub const fn infinity_of<T: Infinity>() -> T {
    T::INFINITY
}

/// Returns the machine epsilon for `T`.
///
/// # Examples
///
/// ```rust
/// # use limits_core::epsilon_of;
/// let eps = epsilon_of::<f64>();
/// assert_ne!(1.0 + eps, 1.0);
/// assert_eq!(1.0 + eps / 2.0, 1.0);
/// ```
#[inline(always)]
pub const fn epsilon_of<T: Epsilon>() -> T {
    T::EPSILON
}

/// Returns the most negative finite value of `T`.
#[inline(always)]
pub const fn finite_min_of<T: FiniteMinMax>() -> T {
    T::FINITE_MIN
}

/// Returns the most positive finite value of `T`.
#[inline(always)]
pub const fn finite_max_of<T: FiniteMinMax>() -> T {
    T::FINITE_MAX
}

macro_rules! impl_signed_limits {
    ($t:ty, $u:ty) => {
        impl FiniteMinMax for $t {
            const FINITE_MAX: Self = (!(0 as $u) >> 1) as $t;
            const FINITE_MIN: Self = !Self::FINITE_MAX;
        }
    };
}

macro_rules! impl_unsigned_limits {
    ($t:ty) => {
        impl FiniteMinMax for $t {
            const FINITE_MIN: Self = 0;
            const FINITE_MAX: Self = !0;
        }
    };
}

// Exponent field all ones with a zero fraction is infinity; one step below
// that with a full fraction is the largest finite value. Epsilon is
// 2^(1 - MANTISSA_DIGITS), i.e. a biased exponent of BIAS + 1 - DIGITS.
macro_rules! impl_float_limits {
    ($t:ty, $bits:ty) => {
        impl Infinity for $t {
            const INFINITY: Self = <$t>::from_bits(<$t as FloatLayout>::EXPONENT_MASK);
        }

        impl Epsilon for $t {
            const EPSILON: Self = <$t>::from_bits(
                ((<$t as FloatLayout>::EXPONENT_BIAS + 1 - <$t as FloatLayout>::MANTISSA_DIGITS)
                    as $bits)
                    << <$t as FloatLayout>::FRACTION_BITS,
            );
        }

        impl FiniteMinMax for $t {
            const FINITE_MAX: Self = <$t>::from_bits(
                (<$t as FloatLayout>::EXPONENT_MASK - (1 << <$t as FloatLayout>::FRACTION_BITS))
                    | <$t as FloatLayout>::FRACTION_MASK,
            );
            const FINITE_MIN: Self = <$t>::from_bits(
                <$t as FloatLayout>::SIGN_MASK | <$t>::to_bits(Self::FINITE_MAX),
            );
        }
    };
}

impl_signed_limits!(i8, u8);
impl_signed_limits!(i16, u16);
impl_signed_limits!(i32, u32);
impl_signed_limits!(i64, u64);
impl_signed_limits!(i128, u128);
impl_signed_limits!(isize, usize);

impl_unsigned_limits!(u8);
impl_unsigned_limits!(u16);
impl_unsigned_limits!(u32);
impl_unsigned_limits!(u64);
impl_unsigned_limits!(u128);
impl_unsigned_limits!(usize);

impl_float_limits!(f32, u32);
impl_float_limits!(f64, u64);
