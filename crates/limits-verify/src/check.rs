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

//! # Numeric Traits Check
//!
//! `NumericTraitsCheck<S, T, P>` verifies one (type, property) pair inside an
//! execution space. It is its own functor: the predicates for property `P`
//! are a `Functor<P>` impl, available only when `T` implements the matching
//! registry trait, so an unsupported pair fails to compile.
//!
//! Each run reduces over a single unit with a fresh zero accumulator. Any
//! nonzero total is reported as `VerificationError::Failed` naming the type,
//! property and space.

use crate::error::{Result, VerificationError};
use crate::policy::{Functor, RangePolicy, parallel_reduce};
use crate::property::{self, PropertyTag};
use crate::reference::{ReferenceExtrema, reference_max, reference_min};
use crate::space::ExecutionSpace;
use limits_core::{
    Arithmetic, Epsilon, FiniteMinMax, Infinity, epsilon_of, finite_max_of, finite_min_of,
    infinity_of,
};
use num_traits::{One, Zero};
use std::marker::PhantomData;

/// Verifies the registry constants of `T` selected by `P` on space `S`.
///
/// # Examples
///
/// ```rust
/// # use limits_verify::check::NumericTraitsCheck;
/// # use limits_verify::property::Infinity;
/// # use limits_verify::space::Serial;
/// let check = NumericTraitsCheck::<_, f32, Infinity>::new(&Serial);
/// assert_eq!(check.errors(), 0);
/// assert!(check.run().is_ok());
/// ```
///
/// Integers have no infinity, so the pair below does not compile:
///
/// ```compile_fail
/// # use limits_verify::check::NumericTraitsCheck;
/// # use limits_verify::property::Infinity;
/// # use limits_verify::space::Serial;
/// let check = NumericTraitsCheck::<_, i32, Infinity>::new(&Serial);
/// check.run().unwrap();
/// ```
pub struct NumericTraitsCheck<'s, S, T, P> {
    space: &'s S,
    _marker: PhantomData<fn() -> (T, P)>,
}

impl<'s, S, T, P> NumericTraitsCheck<'s, S, T, P>
where
    S: ExecutionSpace,
    T: Arithmetic,
    P: PropertyTag,
    Self: Functor<P>,
{
    #[inline]
    pub fn new(space: &'s S) -> Self {
        Self {
            space,
            _marker: PhantomData,
        }
    }

    /// Runs the predicates once inside the space and returns the number of
    /// violations.
    pub fn errors(&self) -> usize {
        let policy = RangePolicy::<S, P>::unit(self.space);
        parallel_reduce(&policy, self)
    }

    /// Runs the predicates and fails if any was violated.
    pub fn run(&self) -> Result<()> {
        let errors = self.errors();
        if errors == 0 {
            tracing::info!(
                type_name = T::NAME,
                property = P::NAME,
                space = S::NAME,
                "numeric traits verified"
            );
            return Ok(());
        }

        tracing::warn!(
            type_name = T::NAME,
            property = P::NAME,
            space = S::NAME,
            errors,
            "numeric traits verification failed"
        );
        Err(VerificationError::Failed {
            type_name: T::NAME,
            property: P::NAME,
            space: S::NAME,
            errors,
        })
    }
}

impl<'s, S, T, P> std::fmt::Debug for NumericTraitsCheck<'s, S, T, P>
where
    S: ExecutionSpace,
    T: Arithmetic,
    P: PropertyTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NumericTraitsCheck")
            .field("space", &S::NAME)
            .field("type_name", &T::NAME)
            .field("property", &P::NAME)
            .finish()
    }
}

/// Counts violations of `inf + inf == inf` and `inf != zero`.
#[inline(always)]
fn infinity_violations<T: Arithmetic>(inf: T, zero: T) -> usize {
    usize::from(inf + inf != inf) + usize::from(inf == zero)
}

/// Counts violations of `one + eps != one` and `one + eps / 2 == one`.
#[inline(always)]
fn epsilon_violations<T: Arithmetic>(one: T, eps: T) -> usize {
    let two = one + one;
    usize::from(one + eps == one) + usize::from(one + eps / two != one)
}

/// Counts mismatches between registry extrema and reference extrema.
#[inline(always)]
fn extrema_violations<T: Arithmetic>((min, max): (T, T), (ref_min, ref_max): (T, T)) -> usize {
    usize::from(min != ref_min) + usize::from(max != ref_max)
}

impl<'s, S, T> Functor<property::Infinity> for NumericTraitsCheck<'s, S, T, property::Infinity>
where
    S: Sync,
    T: Infinity,
{
    #[inline]
    fn apply(&self, _: property::Infinity, _: usize, errors: &mut usize) {
        *errors += infinity_violations(infinity_of::<T>(), <T as Zero>::zero());
    }
}

impl<'s, S, T> Functor<property::Epsilon> for NumericTraitsCheck<'s, S, T, property::Epsilon>
where
    S: Sync,
    T: Epsilon,
{
    #[inline]
    fn apply(&self, _: property::Epsilon, _: usize, errors: &mut usize) {
        *errors += epsilon_violations(<T as One>::one(), epsilon_of::<T>());
    }
}

impl<'s, S, T> Functor<property::FiniteMinMax>
    for NumericTraitsCheck<'s, S, T, property::FiniteMinMax>
where
    S: Sync,
    T: FiniteMinMax + ReferenceExtrema,
{
    #[inline]
    fn apply(&self, _: property::FiniteMinMax, _: usize, errors: &mut usize) {
        *errors += extrema_violations(
            (finite_min_of::<T>(), finite_max_of::<T>()),
            (reference_min::<T>(), reference_max::<T>()),
        );
    }
}

/// Verifies property `P` of type `T` on `space`.
///
/// # Examples
///
/// ```rust
/// # use limits_verify::check::verify;
/// # use limits_verify::property::FiniteMinMax;
/// # use limits_verify::space::Serial;
/// verify::<i16, FiniteMinMax, _>(&Serial).unwrap();
/// ```
pub fn verify<'s, T, P, S>(space: &'s S) -> Result<()>
where
    S: ExecutionSpace,
    T: Arithmetic,
    P: PropertyTag,
    NumericTraitsCheck<'s, S, T, P>: Functor<P>,
{
    NumericTraitsCheck::<S, T, P>::new(space).run()
}
