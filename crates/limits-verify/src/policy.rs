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

//! # Range Policies and Reductions
//!
//! A `RangePolicy` names an iteration range, the space it runs on and the
//! property tag whose `Functor` overload each unit invokes. `parallel_reduce`
//! drives the functor through the space and returns the summed accumulator.

use crate::error::{Result, VerificationError};
use crate::property::PropertyTag;
use crate::space::ExecutionSpace;
use std::marker::PhantomData;
use std::ops::Range;

/// A per-unit body selected by a property tag.
///
/// Implementations must be pure apart from incrementing `errors`; a space is
/// free to run units on any worker and in any order.
pub trait Functor<P>: Sync
where
    P: PropertyTag,
{
    fn apply(&self, tag: P, i: usize, errors: &mut usize);
}

/// An iteration range bound to an execution space and a property tag.
///
/// # Examples
///
/// ```rust
/// # use limits_verify::policy::RangePolicy;
/// # use limits_verify::property::Epsilon;
/// # use limits_verify::space::Serial;
/// let policy = RangePolicy::<_, Epsilon>::new(&Serial, 0, 4).unwrap();
/// assert_eq!(policy.len(), 4);
/// assert!(RangePolicy::<_, Epsilon>::new(&Serial, 2, 2).is_err());
/// ```
pub struct RangePolicy<'s, S, P> {
    space: &'s S,
    begin: usize,
    end: usize,
    _tag: PhantomData<P>,
}

impl<'s, S, P> RangePolicy<'s, S, P>
where
    S: ExecutionSpace,
    P: PropertyTag,
{
    /// Creates a policy over `[begin, end)`.
    ///
    /// Returns `InvalidRange` if the range holds no units.
    pub fn new(space: &'s S, begin: usize, end: usize) -> Result<Self> {
        if begin >= end {
            return Err(VerificationError::InvalidRange { begin, end });
        }
        Ok(Self {
            space,
            begin,
            end,
            _tag: PhantomData,
        })
    }

    /// A policy over exactly one unit, `[0, 1)`.
    #[inline]
    pub fn unit(space: &'s S) -> Self {
        Self {
            space,
            begin: 0,
            end: 1,
            _tag: PhantomData,
        }
    }

    #[inline]
    pub fn space(&self) -> &'s S {
        self.space
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.begin..self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    /// Always `false`; construction rejects empty ranges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<'s, S, P> std::fmt::Debug for RangePolicy<'s, S, P>
where
    S: ExecutionSpace,
    P: PropertyTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangePolicy")
            .field("space", &S::NAME)
            .field("tag", &P::NAME)
            .field("begin", &self.begin)
            .field("end", &self.end)
            .finish()
    }
}

impl<'s, S, P> std::fmt::Display for RangePolicy<'s, S, P>
where
    S: ExecutionSpace,
    P: PropertyTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RangePolicy({}, {}, [{}, {}))",
            S::NAME,
            P::NAME,
            self.begin,
            self.end
        )
    }
}

/// Runs `functor` once per unit of `policy` and returns the summed count.
pub fn parallel_reduce<S, P, F>(policy: &RangePolicy<'_, S, P>, functor: &F) -> usize
where
    S: ExecutionSpace,
    P: PropertyTag,
    F: Functor<P>,
{
    let space = policy.space();
    tracing::debug!(
        space = S::NAME,
        property = P::NAME,
        begin = policy.begin,
        end = policy.end,
        concurrency = space.concurrency(),
        "starting reduction"
    );

    let total = space.reduce_sum(policy.range(), |i, errors| {
        functor.apply(P::default(), i, errors);
        tracing::trace!(property = P::NAME, unit = i, errors = *errors, "unit finished");
    });

    tracing::trace!(space = S::NAME, property = P::NAME, total, "reduction finished");
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{Epsilon, Infinity};
    use crate::space::{Serial, Threads};

    struct CountOdd;

    impl Functor<Epsilon> for CountOdd {
        fn apply(&self, _: Epsilon, i: usize, errors: &mut usize) {
            *errors += i % 2;
        }
    }

    impl Functor<Infinity> for CountOdd {
        fn apply(&self, _: Infinity, _: usize, errors: &mut usize) {
            *errors += 100;
        }
    }

    #[test]
    fn test_tag_selects_overload() {
        let eps = RangePolicy::<_, Epsilon>::new(&Serial, 0, 10).unwrap();
        let inf = RangePolicy::<_, Infinity>::new(&Serial, 0, 10).unwrap();
        assert_eq!(parallel_reduce(&eps, &CountOdd), 5);
        assert_eq!(parallel_reduce(&inf, &CountOdd), 1000);
    }

    #[test]
    fn test_unit_policy_runs_once() {
        let policy = RangePolicy::<_, Infinity>::unit(&Serial);
        assert_eq!(policy.range(), 0..1);
        assert_eq!(policy.len(), 1);
        assert_eq!(parallel_reduce(&policy, &CountOdd), 100);
    }

    #[test]
    fn test_offset_range_on_threads() {
        let space = Threads::with_workers(4).unwrap();
        let policy = RangePolicy::<_, Epsilon>::new(&space, 5, 15).unwrap();
        assert_eq!(parallel_reduce(&policy, &CountOdd), 5);
    }

    #[test]
    fn test_rejects_empty_and_inverted_ranges() {
        assert!(matches!(
            RangePolicy::<_, Epsilon>::new(&Serial, 4, 4),
            Err(VerificationError::InvalidRange { begin: 4, end: 4 })
        ));
        assert!(matches!(
            RangePolicy::<_, Epsilon>::new(&Serial, 9, 1),
            Err(VerificationError::InvalidRange { begin: 9, end: 1 })
        ));
    }

    #[test]
    fn test_display() {
        let policy = RangePolicy::<_, Epsilon>::unit(&Serial);
        assert_eq!(format!("{}", policy), "RangePolicy(serial, epsilon, [0, 1))");
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_traces_every_unit() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let policy = RangePolicy::<_, Epsilon>::new(&Serial, 0, 3).unwrap();
        let total = tracing::subscriber::with_default(subscriber, || {
            parallel_reduce(&policy, &CountOdd)
        });
        assert_eq!(total, 1);

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert_eq!(output.matches("unit finished").count(), 3);
        assert!(output.contains("unit=1"));
        assert!(output.contains("reduction finished"));
    }
}
