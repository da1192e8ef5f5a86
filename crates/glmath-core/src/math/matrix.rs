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

//! Defines the [`Mat4`] type and its homogeneous transform of [`Vector`].
//!
//! Only the transform contract lives here: a 4x4 matrix multiplied with a
//! vector's implicit homogeneous form, followed by de-homogenization of the
//! result. Anything beyond that (inversion, projection builders, full
//! matrix algebra) is out of scope for this crate.

use super::Vector;
use std::ops::Mul;

/// A 4x4 column-major matrix.
///
/// `cols[0]` is the first column, and so on; `cols[c][r]` addresses column
/// `c`, row `r`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat4 {
    /// The columns of the matrix.
    pub cols: [[f32; 4]; 4],
}

impl Mat4 {
    /// The 4x4 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Creates a new matrix from four column arrays.
    #[inline]
    pub const fn from_cols(c0: [f32; 4], c1: [f32; 4], c2: [f32; 4], c3: [f32; 4]) -> Self {
        Self {
            cols: [c0, c1, c2, c3],
        }
    }

    /// Creates a translation matrix.
    ///
    /// Translation affects points (`w = 1`) and leaves directions (`w = 0`)
    /// unchanged, which is the entire purpose of the homogeneous form.
    #[inline]
    pub fn from_translation(v: Vector) -> Self {
        Self::from_cols(
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [v.x, v.y, v.z, 1.0],
        )
    }

    /// Creates a scaling matrix.
    #[inline]
    pub fn from_scale(scale: Vector) -> Self {
        Self::from_cols(
            [scale.x, 0.0, 0.0, 0.0],
            [0.0, scale.y, 0.0, 0.0],
            [0.0, 0.0, scale.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    /// Transforms `v` by this matrix.
    ///
    /// The vector is taken as the homogeneous 4-vector `(x, y, z, w)` with
    /// its implicit `w`, multiplied through, and the result is
    /// de-homogenized by the same rule as
    /// [`Vector::from_homogeneous`]: a transform that drives `w'` away from
    /// 1 (a perspective-style last row) divides through, and a near-zero
    /// `w'` yields a direction.
    pub fn transform(&self, v: Vector) -> Vector {
        let [c0, c1, c2, c3] = self.cols;
        let w = v.w();
        Vector::from_homogeneous(
            c0[0] * v.x + c1[0] * v.y + c2[0] * v.z + c3[0] * w,
            c0[1] * v.x + c1[1] * v.y + c2[1] * v.z + c3[1] * w,
            c0[2] * v.x + c1[2] * v.y + c2[2] * v.z + c3[2] * w,
            c0[3] * v.x + c1[3] * v.y + c2[3] * v.z + c3[3] * w,
        )
    }
}

impl Default for Mat4 {
    /// Returns the identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vector> for Mat4 {
    type Output = Vector;
    /// Transforms a [`Vector`] by this matrix. See [`Mat4::transform`].
    #[inline]
    fn mul(self, rhs: Vector) -> Self::Output {
        self.transform(rhs)
    }
}

// --- Tests ---
