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

//! # Limits Verify
//!
//! Verifies the `limits_core` registry from inside an execution space. Each
//! check runs its predicates through a parallel reduction, so a constant is
//! proven correct as evaluated by the workers that will use it, not merely
//! as evaluated on the calling thread.
//!
//! ## Modules
//!
//! - `property`: Zero-sized property tags (`Infinity`, `Epsilon`,
//!   `FiniteMinMax`) selecting a predicate family at compile time.
//! - `space`: The `ExecutionSpace` abstraction with a single-worker `Serial`
//!   space and a rayon-backed `Threads` space.
//! - `policy`: `RangePolicy`, the `Functor` seam and `parallel_reduce`.
//! - `reference`: The independently authored reference extrema table.
//! - `check`: `NumericTraitsCheck`, the per-(type, property) verifier.
//! - `suite`: The full verification matrix with a per-case report.
//! - `config`: Worker configuration, optionally read from the environment.
//! - `error`: `VerificationError` and the crate `Result` alias.
//!
//! ## Usage
//!
//! ```rust
//! use limits_verify::check::verify;
//! use limits_verify::property::{Epsilon, FiniteMinMax};
//! use limits_verify::space::{Serial, Threads};
//!
//! verify::<f64, Epsilon, _>(&Serial).unwrap();
//! verify::<u8, FiniteMinMax, _>(&Threads::global()).unwrap();
//! ```

pub mod check;
pub mod config;
pub mod error;
pub mod policy;
pub mod property;
pub mod reference;
pub mod space;
pub mod suite;

pub use error::{Result, VerificationError};
