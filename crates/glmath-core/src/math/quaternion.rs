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

//! Provides a [`Quaternion`] type for representing 3D rotations.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use super::{near_zero, MathError, Vector, RAD_TO_DEG};
use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Not, Sub};

/// A rotation represented as four components `(x, y, z, w)`.
///
/// `[x, y, z]` is the vector part and `w` the scalar part. Rotation
/// quaternions built via [`rotation`](Self::rotation) are unit length by
/// construction; nothing else enforces or restores that property, and the
/// arithmetic operators never auto-normalize.
///
/// The axis-angle view ([`axis`](Self::axis), [`angle`](Self::angle),
/// [`degrees`](Self::degrees) and their setters) decomposes and rebuilds the
/// quaternion through the half-angle identities `w = cos(angle/2)`,
/// `(x, y, z) = sin(angle/2) * axis`.
///
/// Beware: `*` between two quaternions multiplies **component-wise**; it is
/// not the Hamilton product and does not compose rotations. This is an
/// inherited contract, kept as-is. See the `Mul` impl.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Encode, Decode)]
#[repr(C)]
pub struct Quaternion {
    /// The x component of the vector part.
    pub x: f32,
    /// The y component of the vector part.
    pub y: f32,
    /// The z component of the vector part.
    pub z: f32,
    /// The scalar (real) part.
    pub w: f32,
}

impl Quaternion {
    /// The identity quaternion, representing no rotation.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Creates a quaternion from its raw components.
    ///
    /// No normalization takes place. For creating rotations, prefer
    /// [`rotation`](Self::rotation).
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a quaternion from a vector part alone.
    ///
    /// The scalar part defaults to `1.0`, the identity's scalar (a zero
    /// rotation when the vector part is zero).
    #[inline]
    pub const fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Creates a quaternion by positionally filling components from a slice.
    ///
    /// Missing trailing components default to `y = 0`, `z = 0`, `w = 1`.
    /// Empty slices and slices longer than four components are an
    /// [`InvalidComponentCount`](MathError::InvalidComponentCount) error.
    pub fn from_slice(components: &[f32]) -> Result<Self, MathError> {
        if components.is_empty() || components.len() > 4 {
            return Err(MathError::InvalidComponentCount {
                expected_max: 4,
                got: components.len(),
            });
        }
        Ok(Self::new(
            components[0],
            components.get(1).copied().unwrap_or(0.0),
            components.get(2).copied().unwrap_or(0.0),
            components.get(3).copied().unwrap_or(1.0),
        ))
    }

    /// Creates the quaternion encoding a rotation of `angle_radians` around
    /// `axis`.
    ///
    /// The axis need not be normalized; it is run through [`Vector`]'s
    /// degenerate-aware normalization internally, so a zero axis yields the
    /// zero vector part `(0, 0, 0, cos(angle/2))`.
    #[inline]
    pub fn rotation(axis: Vector, angle_radians: f32) -> Self {
        let unit_axis = axis.normalized();
        let half_angle = angle_radians * 0.5;
        let s = half_angle.sin();
        Self {
            x: unit_axis.x * s,
            y: unit_axis.y * s,
            z: unit_axis.z * s,
            w: half_angle.cos(),
        }
    }

    /// Creates the quaternion encoding a rotation of `angle_radians` around
    /// the axis `(x, y, z)`. See [`rotation`](Self::rotation).
    #[inline]
    pub fn rotation_xyz(x: f32, y: f32, z: f32, angle_radians: f32) -> Self {
        Self::rotation(Vector::new(x, y, z), angle_radians)
    }

    /// Returns the rotation angle in radians, `2 * acos(w)`.
    ///
    /// A scalar part outside `[-1, 1]` (a non-unit quaternion) yields NaN,
    /// following `acos` semantics.
    #[inline]
    pub fn angle(&self) -> f32 {
        2.0 * self.w.acos()
    }

    /// Returns the rotation angle in radians. Alias for
    /// [`angle`](Self::angle).
    #[inline]
    pub fn radians(&self) -> f32 {
        self.angle()
    }

    /// Returns the rotation angle in degrees.
    #[inline]
    pub fn degrees(&self) -> f32 {
        self.angle() * RAD_TO_DEG
    }

    /// Returns the unit rotation axis, `(x, y, z) / sin(angle / 2)`.
    ///
    /// At angle ≈ 0 the decomposition is degenerate (any axis encodes the
    /// identity); the zero vector is returned in that case.
    pub fn axis(&self) -> Vector {
        let s = (self.angle() * 0.5).sin();
        if near_zero(s) {
            return Vector::new(0.0, 0.0, 0.0);
        }
        Vector::new(self.x / s, self.y / s, self.z / s)
    }

    /// Rebuilds this quaternion around a new axis, preserving the current
    /// angle.
    #[inline]
    pub fn set_axis(&mut self, axis: Vector) {
        *self = Self::rotation(axis, self.angle());
    }

    /// Rebuilds this quaternion with a new angle in radians, preserving the
    /// current axis.
    #[inline]
    pub fn set_angle(&mut self, angle_radians: f32) {
        *self = Self::rotation(self.axis(), angle_radians);
    }

    /// Rebuilds this quaternion with a new angle in degrees, preserving the
    /// current axis.
    #[inline]
    pub fn set_degrees(&mut self, angle_degrees: f32) {
        self.set_angle(angle_degrees * super::DEG_TO_RAD);
    }

    /// Returns a negated copy of this quaternion.
    #[inline]
    pub fn negated(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }

    /// Adds two quaternions component-wise.
    /// Note: this is not a rotation operation.
    #[inline]
    pub fn add(&self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }

    /// Subtracts `other` from this quaternion component-wise.
    #[inline]
    pub fn sub(&self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }

    /// Scales all four components by `factor`.
    #[inline]
    pub fn scaled(&self, factor: f32) -> Self {
        Self::new(
            self.x * factor,
            self.y * factor,
            self.z * factor,
            self.w * factor,
        )
    }

    /// Takes the element-wise reciprocal of the vector part.
    ///
    /// The result is `(1/x, 1/y, 1/z)` fed through the 3-component
    /// constructor, so its scalar part is that constructor's default `1.0`
    /// regardless of this quaternion's `w`. Zero components become IEEE
    /// infinities; nothing is guarded.
    #[inline]
    pub fn invert(&self) -> Self {
        Self::from_xyz(1.0 / self.x, 1.0 / self.y, 1.0 / self.z)
    }

    /// Computes the dot product over all four components.
    ///
    /// Unlike [`Vector::dot`], the scalar part participates.
    #[inline]
    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Calculates the squared length (magnitude) over all four components.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Calculates the length (magnitude) over all four components.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Normalizes this quaternion in place by scaling with `1 / length()`.
    ///
    /// There is no degenerate guard, unlike [`Vector::normalize`]: the zero
    /// quaternion divides by zero and its components become NaN, per
    /// IEEE-754.
    #[inline]
    pub fn normalize(&mut self) {
        let inv_len = 1.0 / self.length();
        *self = self.scaled(inv_len);
    }

    /// Returns a normalized copy of this quaternion. See
    /// [`normalize`](Self::normalize).
    #[inline]
    pub fn normalized(&self) -> Self {
        let mut copy = *self;
        copy.normalize();
        copy
    }
}

impl Default for Quaternion {
    /// Returns the identity quaternion, representing no rotation.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

// --- Comparison ---

/// Tolerant, component-wise equality over all four components.
impl PartialEq for Quaternion {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        let diff = self.sub(*other);
        near_zero(diff.x) && near_zero(diff.y) && near_zero(diff.z) && near_zero(diff.w)
    }
}

/// Length-based ordering, with the same deliberate `PartialEq` inconsistency
/// as [`Vector`]: equal-length quaternions satisfy `<=` and `>=` even when
/// `==` is false.
impl PartialOrd for Quaternion {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.length().partial_cmp(&other.length())
    }
}

// --- Operator Overloads ---

impl Neg for Quaternion {
    type Output = Self;
    /// Negates all components. See [`Quaternion::negated`].
    #[inline]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl Not for Quaternion {
    type Output = Self;
    /// Element-wise reciprocal of the vector part. See
    /// [`Quaternion::invert`].
    #[inline]
    fn not(self) -> Self::Output {
        self.invert()
    }
}

impl Add for Quaternion {
    type Output = Self;
    /// Adds two quaternions component-wise. See [`Quaternion::add`].
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Quaternion::add(&self, rhs)
    }
}

impl Sub for Quaternion {
    type Output = Self;
    /// Subtracts two quaternions component-wise. See [`Quaternion::sub`].
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Quaternion::sub(&self, rhs)
    }
}

impl Mul<Quaternion> for Quaternion {
    type Output = Self;
    /// Multiplies two quaternions **component-wise**.
    ///
    /// This is *not* the Hamilton product and does not compose rotations;
    /// the simplification is inherited from the original contract and kept
    /// deliberately.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.x * rhs.x,
            self.y * rhs.y,
            self.z * rhs.z,
            self.w * rhs.w,
        )
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;
    /// Scales all four components by a scalar. See [`Quaternion::scaled`].
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        self.scaled(rhs)
    }
}

impl Mul<Quaternion> for f32 {
    type Output = Quaternion;
    /// Multiplies a scalar by a quaternion.
    #[inline]
    fn mul(self, rhs: Quaternion) -> Self::Output {
        rhs.scaled(self)
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{approx_eq, degrees_to_radians, EPSILON, FRAC_PI_2};
    use approx::assert_relative_eq;

    // Coarser than EPSILON: half-angle trig on f32 loses a few bits.
    const TRIG_EPS: f32 = 1e-5;

    #[test]
    fn test_default_is_identity() {
        let q = Quaternion::default();
        assert_eq!(q.x, 0.0);
        assert_eq!(q.y, 0.0);
        assert_eq!(q.z, 0.0);
        assert_eq!(q.w, 1.0);
        assert_eq!(q, Quaternion::IDENTITY);
    }

    #[test]
    fn test_from_xyz_scalar_default() {
        let q = Quaternion::from_xyz(1.0, 2.0, 3.0);
        assert_eq!(q.x, 1.0);
        assert_eq!(q.y, 2.0);
        assert_eq!(q.z, 3.0);
        assert_eq!(q.w, 1.0);
    }

    #[test]
    fn test_new_raw() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.w, 4.0);
        // No normalization happens.
        assert!(q.length() > 1.0);
    }

    #[test]
    fn test_from_slice_fills_defaults() {
        let q = Quaternion::from_slice(&[0.0, 1.0, 2.0, 3.0]).unwrap();
        assert_eq!(q, Quaternion::new(0.0, 1.0, 2.0, 3.0));

        let q = Quaternion::from_slice(&[0.1, 0.2]).unwrap();
        assert_relative_eq!(q.x, 0.1, epsilon = EPSILON);
        assert_relative_eq!(q.y, 0.2, epsilon = EPSILON);
        assert_eq!(q.z, 0.0);
        assert_eq!(q.w, 1.0);

        let q = Quaternion::from_slice(&[5.0]).unwrap();
        assert_eq!(q, Quaternion::new(5.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_from_slice_bad_arity() {
        assert_eq!(
            Quaternion::from_slice(&[]),
            Err(MathError::InvalidComponentCount {
                expected_max: 4,
                got: 0
            })
        );
        assert_eq!(
            Quaternion::from_slice(&[1.0; 5]),
            Err(MathError::InvalidComponentCount {
                expected_max: 4,
                got: 5
            })
        );
    }

    #[test]
    fn test_rotation_half_angle_formula() {
        let angle = FRAC_PI_2;
        let q = Quaternion::rotation(Vector::Y, angle);

        let half = angle * 0.5;
        assert_relative_eq!(q.x, 0.0, epsilon = TRIG_EPS);
        assert_relative_eq!(q.y, half.sin(), epsilon = TRIG_EPS);
        assert_relative_eq!(q.z, 0.0, epsilon = TRIG_EPS);
        assert_relative_eq!(q.w, half.cos(), epsilon = TRIG_EPS);
        assert_relative_eq!(q.length(), 1.0, epsilon = TRIG_EPS);
    }

    #[test]
    fn test_rotation_normalizes_axis() {
        let q1 = Quaternion::rotation(Vector::new(0.0, 5.0, 0.0), FRAC_PI_2);
        let q2 = Quaternion::rotation(Vector::Y, FRAC_PI_2);
        assert_eq!(q1, q2);
    }

    #[test]
    fn test_rotation_xyz_matches_vector_form() {
        let q1 = Quaternion::rotation_xyz(0.0, 1.0, 0.0, 1.25);
        let q2 = Quaternion::rotation(Vector::Y, 1.25);
        assert_eq!(q1, q2);
    }

    #[test]
    fn test_rotation_zero_axis() {
        // The degenerate axis normalizes to the zero vector.
        let q = Quaternion::rotation(Vector::new(0.0, 0.0, 0.0), FRAC_PI_2);
        assert_eq!(q.x, 0.0);
        assert_eq!(q.y, 0.0);
        assert_eq!(q.z, 0.0);
        assert_relative_eq!(q.w, (FRAC_PI_2 * 0.5).cos(), epsilon = TRIG_EPS);
    }

    #[test]
    fn test_axis_angle_round_trip() {
        let cases = [
            (Vector::Z, FRAC_PI_2),
            (Vector::X, 0.75),
            (Vector::Y, 2.5),
            (Vector::new(1.0, 2.0, -3.0).normalized(), 1.85),
            (Vector::new(-1.0, 0.5, 0.25).normalized(), 0.1),
        ];
        for (axis, angle) in cases {
            let q = Quaternion::rotation(axis, angle);
            assert_relative_eq!(q.angle(), angle, epsilon = TRIG_EPS);
            let back = q.axis();
            assert_relative_eq!(back.x, axis.x, epsilon = TRIG_EPS);
            assert_relative_eq!(back.y, axis.y, epsilon = TRIG_EPS);
            assert_relative_eq!(back.z, axis.z, epsilon = TRIG_EPS);
        }
    }

    #[test]
    fn test_angle_aliases_and_degrees() {
        let q = Quaternion::rotation(Vector::X, degrees_to_radians(90.0));
        assert_relative_eq!(q.angle(), FRAC_PI_2, epsilon = TRIG_EPS);
        assert_relative_eq!(q.radians(), q.angle(), epsilon = EPSILON);
        assert_relative_eq!(q.degrees(), 90.0, epsilon = 1e-3);
    }

    #[test]
    fn test_axis_from_raw_components() {
        // (1, 0, 0, cos(45°)) encodes a 90° rotation whose axis reads back
        // as unit X once the sin(half) division is applied.
        let q = Quaternion::new(1.0, 0.0, 0.0, (0.5 * FRAC_PI_2).cos());
        assert_relative_eq!(q.angle(), FRAC_PI_2, epsilon = TRIG_EPS);
        let axis = q.axis();
        assert_relative_eq!(axis.x, 1.0 / (0.5 * FRAC_PI_2).sin(), epsilon = TRIG_EPS);
        assert_relative_eq!(axis.y, 0.0, epsilon = TRIG_EPS);
        assert_relative_eq!(axis.z, 0.0, epsilon = TRIG_EPS);
    }

    #[test]
    fn test_axis_degenerate_at_zero_angle() {
        let q = Quaternion::IDENTITY;
        assert_relative_eq!(q.angle(), 0.0, epsilon = TRIG_EPS);
        let axis = q.axis();
        assert_eq!(axis.x, 0.0);
        assert_eq!(axis.y, 0.0);
        assert_eq!(axis.z, 0.0);
    }

    #[test]
    fn test_set_axis_preserves_angle() {
        let angle = 0.1_f32;
        let mut q = Quaternion::new(1.0, 1.0, 1.0, (0.5 * angle).cos());
        q.set_axis(Vector::new(0.0, 1.0, 0.0));
        let axis = q.axis();
        assert_relative_eq!(axis.x, 0.0, epsilon = TRIG_EPS);
        assert_relative_eq!(axis.y, 1.0, epsilon = TRIG_EPS);
        assert_relative_eq!(axis.z, 0.0, epsilon = TRIG_EPS);
        assert_relative_eq!(q.angle(), angle, epsilon = TRIG_EPS);
    }

    #[test]
    fn test_set_angle_preserves_axis() {
        let mut q = Quaternion::rotation(Vector::Z, 1.0);
        q.set_angle(0.5);
        assert_relative_eq!(q.angle(), 0.5, epsilon = TRIG_EPS);
        let axis = q.axis();
        assert_relative_eq!(axis.z, 1.0, epsilon = TRIG_EPS);
    }

    #[test]
    fn test_set_degrees() {
        let mut q = Quaternion::rotation(Vector::Y, 1.0);
        q.set_degrees(90.0);
        assert_relative_eq!(q.angle(), FRAC_PI_2, epsilon = TRIG_EPS);
        assert_relative_eq!(q.degrees(), 90.0, epsilon = 1e-3);
        let axis = q.axis();
        assert_relative_eq!(axis.y, 1.0, epsilon = TRIG_EPS);
    }

    #[test]
    fn test_neg() {
        let q = Quaternion::new(1.0, 0.0, 2.0, -1.0);
        let n = -q;
        assert_relative_eq!(n.x, -1.0, epsilon = EPSILON);
        assert_relative_eq!(n.y, 0.0, epsilon = EPSILON);
        assert_relative_eq!(n.z, -2.0, epsilon = EPSILON);
        assert_relative_eq!(n.w, 1.0, epsilon = EPSILON);
        assert_eq!(-n, q);
    }

    #[test]
    fn test_add_sub() {
        let q1 = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let q2 = Quaternion::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(q1 + q2, Quaternion::new(1.1, 2.2, 3.3, 4.4));
        assert_eq!(q1 - q2, Quaternion::new(0.9, 1.8, 2.7, 3.6));
    }

    #[test]
    fn test_mul_is_component_wise() {
        // Pinned: not the Hamilton product. i * i would be -1 under Hamilton
        // composition; component-wise it is (1, 0, 0, 0).
        let i = Quaternion::new(1.0, 0.0, 0.0, 0.0);
        assert_eq!(i * i, Quaternion::new(1.0, 0.0, 0.0, 0.0));

        let q1 = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let q2 = Quaternion::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(q1 * q2, Quaternion::new(5.0, 12.0, 21.0, 32.0));
    }

    #[test]
    fn test_scalar_mul() {
        let q = Quaternion::new(1.0, 2.0, 5.0, 10.0);
        assert_eq!(q * 0.5, Quaternion::new(0.5, 1.0, 2.5, 5.0));
        assert_eq!(2.0 * q, Quaternion::new(2.0, 4.0, 10.0, 20.0));
    }

    #[test]
    fn test_invert() {
        let q = Quaternion::new(2.0, 4.0, 0.5, 7.0);
        let inv = !q;
        assert_relative_eq!(inv.x, 0.5, epsilon = EPSILON);
        assert_relative_eq!(inv.y, 0.25, epsilon = EPSILON);
        assert_relative_eq!(inv.z, 2.0, epsilon = EPSILON);
        // The receiver's w plays no part; the result carries the
        // 3-component constructor's default.
        assert_eq!(inv.w, 1.0);
        assert_eq!(q.invert(), inv);
    }

    #[test]
    fn test_invert_zero_component_is_infinite() {
        let inv = Quaternion::new(0.0, 1.0, -2.0, 3.0).invert();
        assert!(inv.x.is_infinite() && inv.x > 0.0);
        assert_relative_eq!(inv.y, 1.0, epsilon = EPSILON);
        assert_relative_eq!(inv.z, -0.5, epsilon = EPSILON);
    }

    #[test]
    fn test_dot_includes_w() {
        let qx = Quaternion::new(1.0, 0.0, 0.0, 0.0);
        let qw = Quaternion::new(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(qx.dot(qw), 0.0, epsilon = EPSILON);
        assert_relative_eq!(qw.dot(qw), 1.0, epsilon = EPSILON);

        let a = Quaternion::new(10.0, 20.0, 50.0, 100.0);
        let b = Quaternion::new(0.1, 0.05, 0.02, 0.01);
        assert_relative_eq!(a.dot(b), 4.0, epsilon = 1e-5);
    }

    #[test]
    fn test_length() {
        assert!(approx_eq(Quaternion::new(1.0, 0.0, 0.0, 0.0).length(), 1.0));
        assert!(approx_eq(
            Quaternion::new(1.0, 1.0, 1.0, 1.0).length(),
            2.0
        ));
        assert!(approx_eq(
            Quaternion::new(1.0, 2.0, 3.0, 4.0).length_squared(),
            30.0
        ));
    }

    #[test]
    fn test_normalize() {
        let mut q = Quaternion::new(1.0, 1.0, 1.0, 1.0);
        q.normalize();
        assert!(approx_eq(q.length(), 1.0));
        assert_relative_eq!(q.x, 0.5, epsilon = TRIG_EPS);

        let original = Quaternion::new(1.0, 1.0, 1.0, 1.0);
        let n = original.normalized();
        assert!(approx_eq(n.length(), 1.0));
        // The receiver is untouched.
        assert_eq!(original, Quaternion::new(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_normalize_zero_is_nan() {
        // No degenerate guard: the zero quaternion divides by zero.
        let n = Quaternion::new(0.0, 0.0, 0.0, 0.0).normalized();
        assert!(n.x.is_nan());
        assert!(n.w.is_nan());
    }

    #[test]
    fn test_eq_tolerant() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q, q);

        let mut nudged = q;
        nudged.w += EPSILON / 2.0;
        assert_eq!(q, nudged);

        let mut shifted = q;
        shifted.w += EPSILON * 10.0;
        assert_ne!(q, shifted);
    }

    #[test]
    fn test_ordering_by_length_only() {
        let q1 = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let q2 = Quaternion::new(4.0, 3.0, 2.0, 1.0);
        let q3 = Quaternion::new(1.0, 0.0, -1.0, 0.0);

        // Same length, different components.
        assert!(q1 <= q2);
        assert!(q1 >= q2);
        assert!(!(q1 < q2));
        assert!(!(q1 > q2));
        assert_ne!(q1, q2);

        // Strictly shorter.
        assert!(q3 < q1);
        assert!(q1 > q3);
        assert!(q1 >= q3);
        assert!(!(q1 <= q3));
    }

    #[test]
    fn test_serialization_four_floats() {
        let config = bincode::config::standard();
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let bytes = bincode::encode_to_vec(q, config).unwrap();
        assert_eq!(bytes.len(), 16);
        let (back, _): (Quaternion, usize) =
            bincode::decode_from_slice(&bytes, config).unwrap();
        assert_eq!(back, q);

        let json = serde_json::to_string(&q).unwrap();
        let back: Quaternion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }
}
