/* ************************************************************************ **
** This file is part of qecell, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The two notions of "equal" used by this crate.
//!
//! * [`Tol`] is an `isclose`-style absolute tolerance, used by the classifier
//!   and the secondary resolvers.
//! * [`Rounding`] rounds both operands to a number of decimal digits and
//!   compares the results exactly. It is used only when comparing a regenerated
//!   lattice against the input.
//!
//! The two are deliberately not interchangeable; values that are `Tol`-equal
//! may straddle a rounding boundary and vice versa.
//!
//! [`Tol`]: struct.Tol.html
//! [`Rounding`]: struct.Rounding.html

use std::fmt;

use failure::Fail;
use itertools::izip;

/// Number of decimal digits used to build a [`Tol`].
///
/// [`Tol`]: struct.Tol.html
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-support", serde(transparent))]
pub struct Precision(pub u32);

/// Largest digit count that `Precision` and `Rounding` honor.
///
/// Beyond this, `f64` cannot resolve the tolerance; larger values are clamped.
pub const MAX_DIGITS: u32 = 15;

impl Precision {
    /// Precision of the classifier when none is given.
    pub const CLASSIFY: Precision = Precision(6);

    /// `0.5 * 10^-digits`
    pub fn tol(self) -> Tol
    { Tol(0.5 * 10f64.powi(-(self.0.min(MAX_DIGITS) as i32))) }

    pub fn rounding(self) -> Rounding
    { Rounding(self.0) }
}

impl Default for Precision {
    fn default() -> Self { Precision::CLASSIFY }
}

// Written on a newtype simply to avoid having functions with signatures like
// 'fn f(x: f64, y: f64, tol: f64)' where the arguments could be swapped.
/// Absolute tolerance for approximate equality of lengths and cosines.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tol(pub f64);

impl Tol {
    /// `isclose(f, g, abs_tol=tol)`.
    ///
    /// The comparison is inclusive: a difference of exactly `tol` is equal.
    #[inline]
    pub fn eq(&self, f: f64, g: f64) -> bool
    { is_close(f, g, Tolerances { abs: self.0, rel: 0.0 }) }

    /// Compare magnitudes, ignoring sign.
    #[inline]
    pub fn eq_abs(&self, f: f64, g: f64) -> bool
    { self.eq(f.abs(), g.abs()) }

    /// Test for a (cosine) value that vanishes.
    ///
    /// A tolerance relative to zero degenerates into exact equality with zero,
    /// which no computed cosine can be expected to meet, so this applies the
    /// same absolute threshold as `eq`.
    #[inline]
    pub fn is_zero(&self, f: f64) -> bool
    { self.eq(f, 0.0) }
}

/// Round-then-compare equality at a fixed number of decimal digits.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rounding(pub u32);

impl Rounding {
    /// Round half away from zero to `self.0` decimals.
    #[inline]
    pub fn round(&self, x: f64) -> f64
    {
        let scale = 10f64.powi(self.0.min(MAX_DIGITS) as i32);
        (x * scale).round() / scale
    }

    /// Equal after rounding. (`-0.0` and `0.0` are equal)
    #[inline]
    pub fn eq(&self, x: f64, y: f64) -> bool
    { self.round(x) == self.round(y) }

    pub fn eq_v3(&self, a: &[f64; 3], b: &[f64; 3]) -> bool
    { izip!(a, b).all(|(&x, &y)| self.eq(x, y)) }

    pub fn eq_m33(&self, a: &[[f64; 3]; 3], b: &[[f64; 3]; 3]) -> bool
    { izip!(a, b).all(|(u, v)| self.eq_v3(u, v)) }
}

//---------------------------------------------------------------------------
// Approximate comparison for tests and debug assertions.

/// Test if two values are approximately equal.
///
/// Port of `math.isclose` from Python 3.5, except that the tolerances may be
/// met with equality (as Python does).
#[inline]
pub fn is_close(a: f64, b: f64, Tolerances { abs, rel }: Tolerances) -> bool {
    assert!(rel >= 0.0);
    assert!(abs >= 0.0);

    // catch infinities of same sign
    if a == b { return true; }

    // catch infinities of opposite sign, avoiding infinite relative tolerance
    if a.is_infinite() || b.is_infinite() { return false; }

    // case for general values and NaN.
    (a - b).abs() <= abs.max(rel * a.abs()).max(rel * b.abs())
}

pub const DEFAULT_NONZERO_TOL: f64 = 1e-9;

#[derive(Debug, Copy, Clone)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

#[derive(Debug, Fail)]
pub struct CheckCloseError {
    pub values: (f64, f64),
    pub tol: Tolerances,
}

impl fmt::Display for CheckCloseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (left, right) = self.values;
        write!(f, "failed at:
  left: {:?}
 right: {:?}
   tol: {:?}", left, right, self.tol)
    }
}

pub trait CheckClose<Rhs: ?Sized = Self> {
    /// Test that all values of self and other are close.
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), CheckCloseError>;
}

impl CheckClose for f64 {
    #[inline]
    fn check_close(&self, other: &f64, tol: Tolerances) -> Result<(), CheckCloseError> {
        match is_close(*self, *other, tol) {
            true => Ok(()),
            false => Err(CheckCloseError { values: (*self, *other), tol }),
        }
    }
}

impl<T: CheckClose> CheckClose for [T] {
    fn check_close(&self, other: &[T], tol: Tolerances) -> Result<(), CheckCloseError> {
        assert_eq!(self.len(), other.len());
        izip!(self, other)
            .map(|(a, b)| a.check_close(b, tol))
            .collect()
    }
}

macro_rules! gen_array_impls {
    ($($n:tt)*) => {
        $(
        impl<T: CheckClose> CheckClose for [T; $n] {
            fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
            { self[..].check_close(&other[..], tol) }
        }
        )*
    };
}

gen_array_impls!{ 3 6 }

/// `assert_eq!` for floating point data.
///
/// Accepts `abs=` and `rel=` prefixes; the default is a relative tolerance
/// of `1e-9` and no absolute tolerance.
#[macro_export]
macro_rules! assert_close {
    (abs=$abs:expr, rel=$rel:expr, $a:expr, $b:expr $(,)*) => {
        $crate::assert_close!(@impl $abs, $rel, $a, $b)
    };
    (rel=$rel:expr, abs=$abs:expr, $a:expr, $b:expr $(,)*) => {
        $crate::assert_close!(@impl $abs, $rel, $a, $b)
    };
    (abs=$abs:expr, $a:expr, $b:expr $(,)*) => {
        $crate::assert_close!(@impl $abs, 0.0, $a, $b)
    };
    (rel=$rel:expr, $a:expr, $b:expr $(,)*) => {
        $crate::assert_close!(@impl 0.0, $rel, $a, $b)
    };
    (@impl $abs:expr, $rel:expr, $a:expr, $b:expr) => {{
        let a = $a;
        let b = $b;
        let tol = $crate::tol::Tolerances { abs: $abs, rel: $rel };
        if let Err(e) = $crate::tol::CheckClose::check_close(&a, &b, tol) {
            panic!("not nearly equal! (tolerances: rel={}, abs={})\n left: {:?}\nright: {:?}\n{}",
                tol.rel, tol.abs, a, b, e);
        }
    }};
    ($a:expr, $b:expr $(,)*) => {
        $crate::assert_close!(@impl 0.0, $crate::tol::DEFAULT_NONZERO_TOL, $a, $b)
    };
}
