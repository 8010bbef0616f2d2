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

//! # Verification Errors
//!
//! Runtime failures of the verifier. Unsupported (type, property) pairs never
//! reach this point; they are rejected at compile time.

use thiserror::Error;

/// Errors reported by the verifier.
#[derive(Debug, Error)]
pub enum VerificationError {
    /// At least one predicate was violated for a (type, property) pair.
    #[error("{property} check failed for `{type_name}` on {space}: {errors} violated predicate(s)")]
    Failed {
        type_name: &'static str,
        property: &'static str,
        space: &'static str,
        errors: usize,
    },

    /// A range policy was built over an empty range.
    #[error("invalid iteration range [{begin}, {end}): the range must contain at least one unit")]
    InvalidRange { begin: usize, end: usize },

    /// The dedicated worker pool could not be created.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl VerificationError {
    /// Returns the violated predicate count for `Failed`, `None` otherwise.
    pub fn error_count(&self) -> Option<usize> {
        match self {
            VerificationError::Failed { errors, .. } => Some(*errors),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, VerificationError>;
