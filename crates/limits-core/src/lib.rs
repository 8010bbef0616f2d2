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

//! # Limits Core
//!
//! Compile-time numeric limits for every primitive arithmetic type. The
//! registry maps a concrete type to its positive infinity, machine epsilon
//! and finite extrema through associated constants, so lookups resolve at
//! build time and cost nothing at run time.
//!
//! ## Modules
//!
//! - `category`: The closed set of arithmetic type categories
//!   (`NumericCategory`) and the width/precision rules that classify a type.
//! - `layout`: Intrinsic numeric layout (`Arithmetic`, `FloatLayout`): bit
//!   width, signedness, exponent/mantissa split and IEEE-754 bit masks.
//! - `limits`: The constant traits (`Infinity`, `Epsilon`, `FiniteMinMax`)
//!   and their `const fn` accessors.
//!
//! ## Execution Contexts
//!
//! The crate is `no_std`, performs no allocation and holds no mutable state.
//! Every accessor is a `const fn`, which makes it legal in constant
//! evaluation, on the host, inside worker pools and in restricted device
//! kernels alike.
//!
//! ```rust
//! use limits_core::{epsilon_of, finite_max_of, finite_min_of, infinity_of};
//!
//! const F32_MAX: f32 = finite_max_of::<f32>();
//! assert_eq!(F32_MAX, 3.40282347e+38_f32);
//! assert_eq!(finite_min_of::<i32>(), -2147483648);
//! assert!(infinity_of::<f64>().is_infinite());
//! assert_ne!(1.0 + epsilon_of::<f64>(), 1.0);
//! ```

#![cfg_attr(not(test), no_std)]

pub mod category;
pub mod layout;
pub mod limits;

pub use category::NumericCategory;
pub use layout::{Arithmetic, FloatLayout};
pub use limits::{
    Epsilon, FiniteMinMax, Infinity, epsilon_of, finite_max_of, finite_min_of, infinity_of,
};

/// The extended-precision floating type.
///
/// Rust exposes no native extended-precision float, so this aliases `f64`
/// and reports `NumericCategory::Double`. Code written against `LongDouble`
/// keeps compiling unchanged should a wider representation become available.
pub type LongDouble = f64;
