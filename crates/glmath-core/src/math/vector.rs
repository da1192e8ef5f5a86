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

//! Provides the homogeneous-coordinate-aware 3D [`Vector`] type.

use bincode::{Decode, Encode};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{near_zero, MathError};
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// A point or direction in 3D space, stored in de-homogenized form.
///
/// A homogeneous coordinate is a 4-component value `(x, y, z, w)` where
/// `w = 1` denotes the point at `(x, y, z)` and `w = 0` denotes the pure
/// direction `(x, y, z)`. Transformations such as perspective projection can
/// drive `w` away from those two values; this type always divides through by
/// `w` on construction, so the stored triple is the canonical coordinate and
/// the observable `w` is exactly `0.0` or `1.0`.
///
/// Equality is tolerant (per-axis within [`EPSILON`](super::EPSILON), `w`
/// ignored) and the ordering operators compare by [`length`](Self::length)
/// alone. See the `PartialEq`/`PartialOrd` impls for the consequences.
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Vector {
    /// The x component of the vector.
    pub x: f32,
    /// The y component of the vector.
    pub y: f32,
    /// The z component of the vector.
    pub z: f32,
    /// Homogeneous marker, always exactly 0.0 (direction) or 1.0 (point).
    w: f32,
}

impl Vector {
    /// The point at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };
    /// The point with all spatial components set to `1.0`.
    pub const ONE: Self = Self {
        x: 1.0,
        y: 1.0,
        z: 1.0,
        w: 1.0,
    };
    /// The unit vector along the positive X-axis.
    pub const X: Self = Self {
        x: 1.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };
    /// The unit vector along the positive Y-axis.
    pub const Y: Self = Self {
        x: 0.0,
        y: 1.0,
        z: 0.0,
        w: 1.0,
    };
    /// The unit vector along the positive Z-axis.
    pub const Z: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 1.0,
        w: 1.0,
    };

    /// Creates a new point at `(x, y, z)` (implicit `w = 1`).
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, w: 1.0 }
    }

    /// Creates a point from the contents of a float array.
    #[inline]
    pub const fn from_array(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    /// Creates a de-homogenized vector from raw homogeneous components.
    ///
    /// If `w` is near zero the triple is stored verbatim and the result is a
    /// direction (`w = 0`); otherwise the components are divided by `w` and
    /// the result is a point (`w = 1`). The raw `w` is never stored.
    #[inline]
    pub fn from_homogeneous(x: f32, y: f32, z: f32, w: f32) -> Self {
        if near_zero(w) {
            Self { x, y, z, w: 0.0 }
        } else {
            Self {
                x: x / w,
                y: y / w,
                z: z / w,
                w: 1.0,
            }
        }
    }

    /// Re-homogenizes this vector's triple with a new `w`, applying the same
    /// rule as [`from_homogeneous`](Self::from_homogeneous).
    #[inline]
    pub fn with_w(&self, w: f32) -> Self {
        Self::from_homogeneous(self.x, self.y, self.z, w)
    }

    /// Returns the implicit homogeneous component, exactly `0.0` or `1.0`.
    #[inline]
    pub fn w(&self) -> f32 {
        self.w
    }

    /// Returns `true` if this vector represents a specific point (`w = 1`).
    #[inline]
    pub fn is_point(&self) -> bool {
        self.w == 1.0
    }

    /// Returns `true` if this vector represents a pure direction (`w = 0`).
    #[inline]
    pub fn is_direction(&self) -> bool {
        self.w == 0.0
    }

    /// Retrieves a component by index.
    ///
    /// Indices 0 to 2 are the spatial components; index 3 is the implicit
    /// (read-only) homogeneous component. Anything past that is an
    /// [`IndexOutOfBounds`](MathError::IndexOutOfBounds) error.
    #[inline]
    pub fn get(&self, index: usize) -> Result<f32, MathError> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            3 => Ok(self.w),
            _ => Err(MathError::IndexOutOfBounds { index, len: 4 }),
        }
    }

    /// Returns a negated copy of this vector. The result is a point.
    #[inline]
    pub fn negated(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }

    /// Adds two vectors component-wise. The result is a point.
    #[inline]
    pub fn add(&self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Subtracts `other` from this vector component-wise. The result is a
    /// point.
    #[inline]
    pub fn sub(&self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Returns a copy of this vector scaled by `factor`. The result is a
    /// point.
    #[inline]
    pub fn scaled(&self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Computes the cross product of this vector and another, using the
    /// right-handed convention.
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Computes the Euclidean dot product of the three spatial components.
    ///
    /// The homogeneous component takes no part, unlike
    /// [`Quaternion::dot`](super::Quaternion::dot).
    #[inline]
    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the squared length (magnitude) of the vector.
    /// This is faster than `length()` as it avoids a square root.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Calculates the length (magnitude) of the vector, using the Euclidean
    /// norm over the three spatial components.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Overwrites the spatial triple, leaving the homogeneous marker alone.
    #[inline]
    fn set_xyz(&mut self, x: f32, y: f32, z: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Picks the signed axis-aligned unit triple matching the dominant,
    /// sign-respecting component of `(x, y, z)`.
    ///
    /// Tie-break order: x against y and z, then y against z, then the sign
    /// of z (ties resolve to the positive axis).
    fn dominant_axis(x: f32, y: f32, z: f32) -> (f32, f32, f32) {
        if x >= y && x >= z && x >= 0.0 {
            (1.0, 0.0, 0.0)
        } else if x <= y && x <= z && x <= 0.0 {
            (-1.0, 0.0, 0.0)
        } else if y >= z && y >= 0.0 {
            (0.0, 1.0, 0.0)
        } else if y <= z && y <= 0.0 {
            (0.0, -1.0, 0.0)
        } else if z >= 0.0 {
            (0.0, 0.0, 1.0)
        } else {
            (0.0, 0.0, -1.0)
        }
    }

    /// Normalizes this vector in place, giving it unit length.
    ///
    /// Degenerate-case policy:
    /// 1. If all three components are near zero, the result is the exact
    ///    zero vector (the zero vector has no direction to keep).
    /// 2. Else if the length itself is near zero, the vector snaps to the
    ///    axis-aligned unit vector matching its dominant, sign-respecting
    ///    component, so no division by a near-zero length ever happens.
    /// 3. Otherwise every component is scaled by `1 / length()`.
    pub fn normalize(&mut self) {
        // The zero-vector stays the zero-vector.
        if near_zero(self.x) && near_zero(self.y) && near_zero(self.z) {
            self.set_xyz(0.0, 0.0, 0.0);
            return;
        }

        let len = self.length();

        // Very little vectors get stretched to a unit vector in one direction.
        if near_zero(len) {
            log::trace!(
                "snapping tiny vector ({}, {}, {}) to a unit axis",
                self.x,
                self.y,
                self.z
            );
            let (x, y, z) = Self::dominant_axis(self.x, self.y, self.z);
            self.set_xyz(x, y, z);
        } else {
            let inv_len = 1.0 / len;
            self.set_xyz(self.x * inv_len, self.y * inv_len, self.z * inv_len);
        }
    }

    /// Returns a normalized copy of this vector, with the same degenerate
    /// handling as [`normalize`](Self::normalize).
    #[inline]
    pub fn normalized(&self) -> Self {
        let mut copy = *self;
        copy.normalize();
        copy
    }

    /// Linearly interpolates between this vector and `other`.
    ///
    /// `t = 0.0` yields `self`, `t = 1.0` yields `other`. `t` is *not*
    /// clamped; values outside `[0, 1]` extrapolate.
    #[inline]
    pub fn lerp(&self, other: Self, t: f32) -> Self {
        self.add(other.sub(*self).scaled(t))
    }
}

impl Default for Vector {
    /// Returns the point at the origin.
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

// --- Comparison ---

/// Tolerant, component-wise equality.
///
/// Two vectors are equal when each spatial difference is near zero; the
/// homogeneous component is ignored. Note that `==` and the ordering
/// operators answer *different* questions here (see `PartialOrd`).
impl PartialEq for Vector {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        let diff = self.sub(*other);
        near_zero(diff.x) && near_zero(diff.y) && near_zero(diff.z)
    }
}

/// Length-based ordering.
///
/// `<`, `<=`, `>` and `>=` compare `length()` only, so two equal-length
/// vectors pointing in different directions satisfy both `<=` and `>=`
/// while `==` reports them unequal. This intentionally violates the usual
/// `PartialEq`/`PartialOrd` consistency expectation; it is the inherited
/// comparison contract of these types.
impl PartialOrd for Vector {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.length().partial_cmp(&other.length())
    }
}

// --- Operator Overloads ---

impl Neg for Vector {
    type Output = Self;
    /// Negates the vector. See [`Vector::negated`].
    #[inline]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl Add for Vector {
    type Output = Self;
    /// Adds two vectors component-wise. See [`Vector::add`].
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Vector::add(&self, rhs)
    }
}

impl Sub for Vector {
    type Output = Self;
    /// Subtracts two vectors component-wise. See [`Vector::sub`].
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Vector::sub(&self, rhs)
    }
}

impl Mul<f32> for Vector {
    type Output = Self;
    /// Multiplies the vector by a scalar. See [`Vector::scaled`].
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        self.scaled(rhs)
    }
}

impl Mul<Vector> for f32 {
    type Output = Vector;
    /// Multiplies a scalar by a vector.
    #[inline]
    fn mul(self, rhs: Vector) -> Self::Output {
        rhs.scaled(self)
    }
}

impl AddAssign for Vector {
    /// Adds `rhs` to this vector in place. The homogeneous marker is left
    /// untouched.
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.set_xyz(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z);
    }
}

impl SubAssign for Vector {
    /// Subtracts `rhs` from this vector in place. The homogeneous marker is
    /// left untouched.
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.set_xyz(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z);
    }
}

impl MulAssign<f32> for Vector {
    /// Scales this vector in place. The homogeneous marker is left
    /// untouched.
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        self.set_xyz(self.x * rhs, self.y * rhs, self.z * rhs);
    }
}

impl Index<usize> for Vector {
    type Output = f32;
    /// Allows accessing a component by index, including the read-only
    /// homogeneous slot at index 3.
    ///
    /// # Panics
    /// Panics if `index` is not between 0 and 3. Use [`Vector::get`] for a
    /// fallible variant.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Index out of bounds for Vector"),
        }
    }
}

impl IndexMut<usize> for Vector {
    /// Allows mutably accessing a spatial component by index.
    ///
    /// # Panics
    /// Panics if `index` is not 0, 1, or 2. The homogeneous slot is a
    /// derived value and cannot be written.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Index out of bounds for Vector"),
        }
    }
}

// --- Serialization ---

/// A `Vector` streams as exactly three floats, `x`, `y`, `z`, in order.
/// The homogeneous component is never persisted.
impl Serialize for Vector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.x, self.y, self.z].serialize(serializer)
    }
}

/// Reading reconstructs a point via the 3-component constructor.
impl<'de> Deserialize<'de> for Vector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [x, y, z] = <[f32; 3]>::deserialize(deserializer)?;
        Ok(Self::new(x, y, z))
    }
}

impl Encode for Vector {
    fn encode<E: bincode::enc::Encoder>(
        &self,
        encoder: &mut E,
    ) -> Result<(), bincode::error::EncodeError> {
        self.x.encode(encoder)?;
        self.y.encode(encoder)?;
        self.z.encode(encoder)
    }
}

impl<Context> Decode<Context> for Vector {
    fn decode<D: bincode::de::Decoder<Context = Context>>(
        decoder: &mut D,
    ) -> Result<Self, bincode::error::DecodeError> {
        let x = f32::decode(decoder)?;
        let y = f32::decode(decoder)?;
        let z = f32::decode(decoder)?;
        Ok(Self::new(x, y, z))
    }
}

bincode::impl_borrow_decode!(Vector);

// --- Tests ---
