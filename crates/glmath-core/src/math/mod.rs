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

//! Foundational math primitives for homogeneous-coordinate 3D geometry.
//!
//! All angular functions in this module operate in **radians** unless
//! explicitly specified otherwise (e.g., `degrees_to_radians`).

// --- Fundamental Constants ---

/// The near-zero threshold shared by de-homogenization, degenerate
/// normalization and approximate equality.
///
/// A floating-point magnitude below this value is treated as exactly zero.
pub const EPSILON: f32 = 2e-7;

// Re-export standard mathematical constants for convenience.
pub use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, PI, SQRT_2, TAU};

/// The factor to convert degrees to radians (PI / 180.0).
pub const DEG_TO_RAD: f32 = PI / 180.0;
/// The factor to convert radians to degrees (180.0 / PI).
pub const RAD_TO_DEG: f32 = 180.0 / PI;

// --- Declare Sub-Modules ---

pub mod error;
pub mod matrix;
pub mod quaternion;
pub mod vector;

// --- Re-export Principal Types ---

pub use self::error::MathError;
pub use self::matrix::Mat4;
pub use self::quaternion::Quaternion;
pub use self::vector::Vector;

// --- Utility Functions ---

/// Returns `true` if `value` is within [`EPSILON`] of zero.
///
/// Exact zero is near zero; NaN is not.
///
/// # Examples
///
/// ```
/// use glmath_core::math::near_zero;
/// assert!(near_zero(0.0));
/// assert!(near_zero(1e-9));
/// assert!(!near_zero(1e-3));
/// ```
#[inline]
pub fn near_zero(value: f32) -> bool {
    value.abs() < EPSILON
}

/// Converts an angle from degrees to radians.
///
/// # Examples
///
/// ```
/// use glmath_core::math::{degrees_to_radians, PI};
/// assert_eq!(degrees_to_radians(180.0), PI);
/// ```
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

/// Converts an angle from radians to degrees.
///
/// # Examples
///
/// ```
/// use glmath_core::math::{radians_to_degrees, PI};
/// assert_eq!(radians_to_degrees(PI), 180.0);
/// ```
#[inline]
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * RAD_TO_DEG
}

/// Performs an approximate equality comparison between two floats with a
/// custom tolerance.
///
/// # Examples
///
/// ```
/// use glmath_core::math::approx_eq_eps;
/// assert!(approx_eq_eps(0.001, 0.002, 1e-2));
/// assert!(!approx_eq_eps(0.001, 0.002, 1e-4));
/// ```
#[inline]
pub fn approx_eq_eps(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Performs an approximate equality comparison using the module's default
/// [`EPSILON`].
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    approx_eq_eps(a, b, EPSILON)
}
