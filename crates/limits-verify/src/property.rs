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

//! # Property Tags
//!
//! Zero-sized markers naming which family of predicates a check evaluates.
//! Tags exist only to pick a `Functor` impl at compile time; they carry no
//! data and are never stored.

/// A marker selecting a predicate family.
pub trait PropertyTag: Copy + Default + Send + Sync + std::fmt::Debug + 'static {
    /// The name used in logs and failure reports.
    const NAME: &'static str;
}

/// Selects the infinity predicates: `inf + inf == inf` and `inf != 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Infinity;

/// Selects the epsilon predicates: `1 + eps != 1` and `1 + eps / 2 == 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Epsilon;

/// Selects the finite extrema predicates against the reference table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FiniteMinMax;

impl PropertyTag for Infinity {
    const NAME: &'static str = "infinity";
}

impl PropertyTag for Epsilon {
    const NAME: &'static str = "epsilon";
}

impl PropertyTag for FiniteMinMax {
    const NAME: &'static str = "finite_min_max";
}
