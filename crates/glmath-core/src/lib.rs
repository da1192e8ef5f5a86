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

//! # glmath-core
//!
//! Minimal 3D math primitives with homogeneous-coordinate support: a
//! de-homogenizing [`Vector`], a rotation [`Quaternion`] with an axis-angle
//! view, and the [`Mat4`] transform contract between them.
//!
//! The numeric edge-case policy (near-zero tolerance, degenerate
//! normalization, de-homogenization) is part of the public contract and is
//! documented on the types themselves.

#![warn(missing_docs)]

pub mod math;

pub use math::error::MathError;
pub use math::matrix::Mat4;
pub use math::quaternion::Quaternion;
pub use math::vector::Vector;
