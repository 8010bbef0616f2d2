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

//! # Arithmetic Type Categories
//!
//! A closed classification of the primitive arithmetic types. Categories are
//! derived from a type's layout (bit width and signedness for integers,
//! mantissa precision for floats), never from its name, so aliases such as
//! `core::ffi::c_long` land in the category of the primitive they alias.

/// The category of an arithmetic type.
///
/// # Examples
///
/// ```rust
/// # use limits_core::NumericCategory;
/// assert_eq!(NumericCategory::integral(8, false), NumericCategory::NarrowUnsigned);
/// assert_eq!(NumericCategory::integral(64, true), NumericCategory::WideSigned);
/// assert_eq!(NumericCategory::floating(24), NumericCategory::Single);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumericCategory {
    NarrowSigned,
    NarrowUnsigned,
    Signed,
    Unsigned,
    WideSigned,
    WideUnsigned,
    Single,
    Double,
    /// Floats wider than `f64`. No native Rust type occupies this category.
    Extended,
}

impl NumericCategory {
    /// Every category, in declaration order.
    pub const ALL: [NumericCategory; 9] = [
        NumericCategory::NarrowSigned,
        NumericCategory::NarrowUnsigned,
        NumericCategory::Signed,
        NumericCategory::Unsigned,
        NumericCategory::WideSigned,
        NumericCategory::WideUnsigned,
        NumericCategory::Single,
        NumericCategory::Double,
        NumericCategory::Extended,
    ];

    /// Classifies an integer type by its bit width and signedness.
    ///
    /// Types up to 16 bits are narrow, 32-bit types are regular and anything
    /// wider is wide.
    #[inline]
    pub const fn integral(bits: u32, signed: bool) -> Self {
        match (bits, signed) {
            (0..=16, true) => NumericCategory::NarrowSigned,
            (0..=16, false) => NumericCategory::NarrowUnsigned,
            (17..=32, true) => NumericCategory::Signed,
            (17..=32, false) => NumericCategory::Unsigned,
            (_, true) => NumericCategory::WideSigned,
            (_, false) => NumericCategory::WideUnsigned,
        }
    }

    /// Classifies a floating type by its mantissa precision (implicit bit
    /// included).
    #[inline]
    pub const fn floating(mantissa_digits: u32) -> Self {
        match mantissa_digits {
            24 => NumericCategory::Single,
            53 => NumericCategory::Double,
            _ => NumericCategory::Extended,
        }
    }

    #[inline]
    pub const fn is_floating(self) -> bool {
        matches!(
            self,
            NumericCategory::Single | NumericCategory::Double | NumericCategory::Extended
        )
    }

    #[inline]
    pub const fn is_integral(self) -> bool {
        !self.is_floating()
    }

    /// Returns `true` if the category can represent negative values.
    #[inline]
    pub const fn is_signed(self) -> bool {
        !matches!(
            self,
            NumericCategory::NarrowUnsigned
                | NumericCategory::Unsigned
                | NumericCategory::WideUnsigned
        )
    }

    /// A human-readable name for the category.
    pub const fn name(self) -> &'static str {
        match self {
            NumericCategory::NarrowSigned => "narrow signed integral",
            NumericCategory::NarrowUnsigned => "narrow unsigned integral",
            NumericCategory::Signed => "signed integral",
            NumericCategory::Unsigned => "unsigned integral",
            NumericCategory::WideSigned => "wide signed integral",
            NumericCategory::WideUnsigned => "wide unsigned integral",
            NumericCategory::Single => "single-precision float",
            NumericCategory::Double => "double-precision float",
            NumericCategory::Extended => "extended-precision float",
        }
    }
}

impl core::fmt::Display for NumericCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
