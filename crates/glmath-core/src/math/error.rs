// Copyright 2025 the glmath authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the error types for the math primitives.

use std::fmt;

/// An error produced by a math-type operation.
///
/// Degenerate numeric cases (near-zero lengths, division by zero) are *not*
/// errors; they follow the documented fallback or IEEE-754 semantics of the
/// operation that hits them. The only failure modes are structural ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// A component index past the homogeneous slot was requested.
    IndexOutOfBounds {
        /// The index that was requested.
        index: usize,
        /// The number of addressable components.
        len: usize,
    },
    /// A component slice had an unusable number of elements.
    InvalidComponentCount {
        /// The largest number of components the constructor accepts.
        expected_max: usize,
        /// The number of components that were provided.
        got: usize,
    },
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::IndexOutOfBounds { index, len } => {
                write!(f, "Component index {index} out of bounds (len {len})")
            }
            MathError::InvalidComponentCount { expected_max, got } => {
                write!(
                    f,
                    "Expected between 1 and {expected_max} components, got {got}"
                )
            }
        }
    }
}

impl std::error::Error for MathError {}
