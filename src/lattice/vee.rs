/* ************************************************************************ **
** This file is part of qecell, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Free functions on plain `[f64; 3]`.

pub type V3 = [f64; 3];
pub type M33 = [V3; 3];

/// Inner product of vectors.
#[inline(always)]
pub fn dot(a: &V3, b: &V3) -> f64
{ a[0] * b[0] + a[1] * b[1] + a[2] * b[2] }

/// Get the vector's squared magnitude.
#[inline(always)]
pub fn sqnorm(a: &V3) -> f64
{ dot(a, a) }

/// Get the vector's magnitude.
#[inline(always)]
pub fn norm(a: &V3) -> f64
{ sqnorm(a).sqrt() }

#[inline(always)]
pub fn add(a: &V3, b: &V3) -> V3
{ [a[0] + b[0], a[1] + b[1], a[2] + b[2]] }

#[inline(always)]
pub fn sub(a: &V3, b: &V3) -> V3
{ [a[0] - b[0], a[1] - b[1], a[2] - b[2]] }

#[inline(always)]
pub fn scale(a: &V3, s: f64) -> V3
{ [a[0] * s, a[1] * s, a[2] * s] }

/// Cross-product.
#[inline]
pub fn cross(a: &V3, b: &V3) -> V3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Cosine of the angle between two vectors.
///
/// NaN if either vector is zero.
#[inline]
pub fn cos_angle(a: &V3, b: &V3) -> f64
{ dot(a, b) / (norm(a) * norm(b)) }

/// Signed volume `(a x b) . c`.
#[inline]
pub fn det(m: &M33) -> f64
{ dot(&cross(&m[0], &m[1]), &m[2]) }
