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

//! # Execution Spaces
//!
//! An execution space runs a body once per logical unit of an iteration
//! range, hands every unit a fresh zero accumulator and folds the partials
//! by summation. Summation is associative and commutative, so the total does
//! not depend on how units are split across workers or in which order they
//! run.
//!
//! - `Serial`: every unit on the calling thread, one after another.
//! - `Threads`: units distributed over a rayon pool, either the global pool
//!   or a dedicated one with a fixed worker count.

use crate::config::VerifierConfig;
use crate::error::Result;
use rayon::prelude::*;
use std::ops::Range;

/// A place where reductions run.
pub trait ExecutionSpace: Send + Sync {
    /// The name used in logs and failure reports.
    const NAME: &'static str;

    /// The number of workers units may be spread across.
    fn concurrency(&self) -> usize;

    /// Runs `body` once per index in `range` with a fresh zero accumulator
    /// and returns the sum of all accumulators.
    fn reduce_sum<F>(&self, range: Range<usize>, body: F) -> usize
    where
        F: Fn(usize, &mut usize) + Sync + Send;
}

#[inline(always)]
fn run_unit<F>(body: &F, i: usize) -> usize
where
    F: Fn(usize, &mut usize),
{
    let mut acc = 0;
    body(i, &mut acc);
    acc
}

/// Runs every unit on the calling thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Serial;

impl ExecutionSpace for Serial {
    const NAME: &'static str = "serial";

    #[inline]
    fn concurrency(&self) -> usize {
        1
    }

    fn reduce_sum<F>(&self, range: Range<usize>, body: F) -> usize
    where
        F: Fn(usize, &mut usize) + Sync + Send,
    {
        range.map(|i| run_unit(&body, i)).sum()
    }
}

/// Distributes units over a rayon thread pool.
///
/// # Examples
///
/// ```rust
/// # use limits_verify::space::{ExecutionSpace, Threads};
/// let space = Threads::with_workers(4).unwrap();
/// assert_eq!(space.concurrency(), 4);
/// assert_eq!(space.reduce_sum(0..10, |i, acc| *acc += i), 45);
/// ```
#[derive(Debug, Default)]
pub struct Threads {
    pool: Option<rayon::ThreadPool>,
}

impl Threads {
    /// A space backed by rayon's global pool.
    #[inline]
    pub fn global() -> Self {
        Self { pool: None }
    }

    /// A space backed by a dedicated pool of `workers` threads.
    pub fn with_workers(workers: usize) -> Result<Self> {
        Self::from_config(&VerifierConfig::default().with_workers(workers))
    }

    /// Builds the space described by `config`.
    ///
    /// Without a configured worker count the global pool is used.
    pub fn from_config(config: &VerifierConfig) -> Result<Self> {
        let Some(workers) = config.workers() else {
            return Ok(Self::global());
        };

        let prefix = config.thread_name_prefix().to_owned();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(move |i| format!("{prefix}-{i}"))
            .build()?;

        tracing::debug!(workers, "built dedicated verification pool");
        Ok(Self { pool: Some(pool) })
    }

    /// Returns `true` if this space owns a dedicated pool.
    #[inline]
    pub fn is_dedicated(&self) -> bool {
        self.pool.is_some()
    }
}

impl ExecutionSpace for Threads {
    const NAME: &'static str = "threads";

    #[inline]
    fn concurrency(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    fn reduce_sum<F>(&self, range: Range<usize>, body: F) -> usize
    where
        F: Fn(usize, &mut usize) + Sync + Send,
    {
        let reduce = || {
            range
                .into_par_iter()
                .fold(|| 0usize, |acc, i| acc + run_unit(&body, i))
                .sum::<usize>()
        };

        match &self.pool {
            Some(pool) => pool.install(reduce),
            None => reduce(),
        }
    }
}
