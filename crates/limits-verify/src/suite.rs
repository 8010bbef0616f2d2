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

//! # Verification Suite
//!
//! Runs the complete matrix of (type, property) checks on one execution
//! space and collects a per-case report:
//!
//! - infinity and epsilon for `f32`, `f64` and `LongDouble`;
//! - finite min/max for the C-named integer aliases, the 128-bit and
//!   pointer-sized integers and every float.
//!
//! Every case runs even after a failure, so a report lists all failing pairs
//! at once.

use crate::check::NumericTraitsCheck;
use crate::error::{Result, VerificationError};
use crate::policy::Functor;
use crate::property::{self, PropertyTag};
use crate::space::ExecutionSpace;
use limits_core::{Arithmetic, LongDouble};
use std::ffi::{
    c_char, c_int, c_long, c_longlong, c_schar, c_short, c_uchar, c_uint, c_ulong, c_ulonglong,
    c_ushort,
};

/// The outcome of a single (type, property) case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseOutcome {
    pub type_name: &'static str,
    pub property: &'static str,
    pub errors: usize,
}

impl CaseOutcome {
    #[inline]
    pub fn passed(&self) -> bool {
        self.errors == 0
    }
}

impl std::fmt::Display for CaseOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}<{}>: {}",
            self.property,
            self.type_name,
            if self.passed() { "ok" } else { "FAILED" }
        )
    }
}

/// The outcomes of a suite run on one space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteReport {
    space: &'static str,
    cases: Vec<CaseOutcome>,
}

impl SuiteReport {
    #[inline]
    pub fn space(&self) -> &'static str {
        self.space
    }

    #[inline]
    pub fn cases(&self) -> &[CaseOutcome] {
        &self.cases
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Returns `true` if every case passed.
    #[inline]
    pub fn passed(&self) -> bool {
        self.cases.iter().all(CaseOutcome::passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.cases.iter().filter(|case| !case.passed())
    }

    /// The total number of violated predicates across all cases.
    pub fn total_errors(&self) -> usize {
        self.cases.iter().map(|case| case.errors).sum()
    }

    /// Converts the report into an error naming the first failing case.
    pub fn into_result(self) -> Result<Self> {
        let first = self.failures().next().copied();
        match first {
            Some(case) => Err(VerificationError::Failed {
                type_name: case.type_name,
                property: case.property,
                space: self.space,
                errors: case.errors,
            }),
            None => Ok(self),
        }
    }
}

impl std::fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "SuiteReport(space: {}, cases: {}, failed: {})",
            self.space,
            self.cases.len(),
            self.failures().count()
        )?;
        for case in &self.cases {
            writeln!(f, "  {}", case)?;
        }
        Ok(())
    }
}

/// The full verification matrix bound to one execution space.
#[derive(Debug)]
pub struct Suite<'s, S> {
    space: &'s S,
}

impl<'s, S> Suite<'s, S>
where
    S: ExecutionSpace,
{
    #[inline]
    pub fn new(space: &'s S) -> Self {
        Self { space }
    }

    /// Runs every case and returns the report.
    pub fn run(&self) -> SuiteReport {
        let mut cases = Vec::new();

        macro_rules! case {
            ($t:ty, $p:ty) => {
                cases.push(self.case::<$t, $p>(stringify!($t)))
            };
        }

        case!(f32, property::Infinity);
        case!(f64, property::Infinity);
        case!(LongDouble, property::Infinity);

        case!(f32, property::Epsilon);
        case!(f64, property::Epsilon);
        case!(LongDouble, property::Epsilon);

        case!(c_char, property::FiniteMinMax);
        case!(c_schar, property::FiniteMinMax);
        case!(c_uchar, property::FiniteMinMax);
        case!(c_short, property::FiniteMinMax);
        case!(c_ushort, property::FiniteMinMax);
        case!(c_int, property::FiniteMinMax);
        case!(c_uint, property::FiniteMinMax);
        case!(c_long, property::FiniteMinMax);
        case!(c_ulong, property::FiniteMinMax);
        case!(c_longlong, property::FiniteMinMax);
        case!(c_ulonglong, property::FiniteMinMax);
        case!(i128, property::FiniteMinMax);
        case!(u128, property::FiniteMinMax);
        case!(isize, property::FiniteMinMax);
        case!(usize, property::FiniteMinMax);
        case!(f32, property::FiniteMinMax);
        case!(f64, property::FiniteMinMax);
        case!(LongDouble, property::FiniteMinMax);

        let report = SuiteReport {
            space: S::NAME,
            cases,
        };
        tracing::info!(
            space = S::NAME,
            cases = report.len(),
            failed = report.failures().count(),
            "verification suite finished"
        );
        report
    }

    fn case<T, P>(&self, label: &'static str) -> CaseOutcome
    where
        T: Arithmetic,
        P: PropertyTag,
        NumericTraitsCheck<'s, S, T, P>: Functor<P>,
    {
        let errors = NumericTraitsCheck::<S, T, P>::new(self.space).errors();
        if errors > 0 {
            tracing::warn!(
                type_name = label,
                property = P::NAME,
                space = S::NAME,
                errors,
                "suite case failed"
            );
        }
        CaseOutcome {
            type_name: label,
            property: P::NAME,
            errors,
        }
    }
}
