/* ************************************************************************ **
** This file is part of qecell, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::collections::BTreeMap;

use crate::{Error, Result};
use crate::tol::{CheckClose, CheckCloseError, Rounding, Tolerances};
use crate::vee::{self, V3, M33};

/// Bohr radius in Angstrom, as used by the cell report.
pub const BOHR_TO_ANGSTROM: f64 = 0.529177;

/// The three lattice vectors `a1`, `a2`, `a3` of a cell, stored as rows.
///
/// Units are whatever the caller uses (normally Bohr).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LatticeVectors {
    rows: M33,
}

impl LatticeVectors {
    #[inline]
    pub fn new(rows: M33) -> Self
    { LatticeVectors { rows } }

    #[inline]
    pub fn from_vectors(a1: V3, a2: V3, a3: V3) -> Self
    { Self::new([a1, a2, a3]) }

    /// Read the cell from a mapping with keys `"a1"`, `"a2"` and `"a3"`.
    ///
    /// Other keys are ignored.
    pub fn from_mapping<S, V>(map: &BTreeMap<S, V>) -> Result<Self>
    where
        S: ::std::borrow::Borrow<str> + Ord,
        V: AsRef<[f64]>,
    {
        let get = |key: &'static str| -> Result<V3> {
            let v = map.get(key).ok_or(Error::MissingVector { key })?.as_ref();
            match *v {
                [x, y, z] => Ok([x, y, z]),
                _ => Err(Error::BadVectorLength { key, len: v.len() }),
            }
        };
        let cell = Self::from_vectors(get("a1")?, get("a2")?, get("a3")?);
        cell.check_finite()?;
        Ok(cell)
    }

    /// Matrix where lattice vectors are rows.
    #[inline]
    pub fn matrix(&self) -> &M33
    { &self.rows }

    #[inline]
    pub fn a1(&self) -> &V3 { &self.rows[0] }
    #[inline]
    pub fn a2(&self) -> &V3 { &self.rows[1] }
    #[inline]
    pub fn a3(&self) -> &V3 { &self.rows[2] }

    pub fn norms(&self) -> [f64; 3]
    { [vee::norm(self.a1()), vee::norm(self.a2()), vee::norm(self.a3())] }

    /// Signed volume of the cell.
    pub fn volume(&self) -> f64
    { vee::det(&self.rows) }

    /// Reorder the vectors; `perm[i]` is the index of the vector placed in row `i`.
    pub fn permuted(&self, perm: [usize; 3]) -> Self
    { Self::new([self.rows[perm[0]], self.rows[perm[1]], self.rows[perm[2]]]) }

    pub fn scaled(&self, factor: f64) -> Self
    { Self::new([
        vee::scale(self.a1(), factor),
        vee::scale(self.a2(), factor),
        vee::scale(self.a3(), factor),
    ])}

    /// Largest elementwise absolute difference.
    pub fn max_deviation(&self, other: &LatticeVectors) -> f64 {
        self.rows.iter().flat_map(|v| v.iter())
            .zip(other.rows.iter().flat_map(|v| v.iter()))
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }

    /// Rounding-based comparison (see [`Rounding`]).
    ///
    /// [`Rounding`]: tol/struct.Rounding.html
    pub fn rounded_eq(&self, other: &LatticeVectors, rounding: Rounding) -> bool
    { rounding.eq_m33(&self.rows, &other.rows) }

    /// Reject cells with a zero-length or non-finite vector.
    pub fn check_nondegenerate(&self) -> Result<()> {
        self.check_finite()?;
        for (i, v) in self.rows.iter().enumerate() {
            if vee::sqnorm(v) == 0.0 {
                return Err(Error::DegenerateCell { index: i + 1 });
            }
        }
        Ok(())
    }

    fn check_finite(&self) -> Result<()> {
        match self.rows.iter().position(|v| !v.iter().all(|x| x.is_finite())) {
            Some(i) => Err(Error::NonFiniteVector { index: i + 1 }),
            None => Ok(()),
        }
    }
}

impl From<M33> for LatticeVectors {
    fn from(rows: M33) -> Self { LatticeVectors::new(rows) }
}

impl CheckClose for LatticeVectors {
    fn check_close(&self, other: &LatticeVectors, tol: Tolerances) -> ::std::result::Result<(), CheckCloseError>
    { self.rows.check_close(&other.rows, tol) }
}

/// Lengths of the lattice vectors and the cosines of the angles between them.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub struct Abc {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    /// `cos(a1, a2)`
    pub cos_ab: f64,
    /// `cos(a2, a3)`
    pub cos_bc: f64,
    /// `cos(a1, a3)`
    pub cos_ac: f64,
}

impl Abc {
    /// Unrounded lengths and cosines, in the units of the vectors.
    pub fn from_vectors(vectors: &LatticeVectors) -> Abc {
        let [a, b, c] = vectors.norms();
        let (a1, a2, a3) = (vectors.a1(), vectors.a2(), vectors.a3());
        Abc {
            a, b, c,
            cos_ab: vee::dot(a1, a2) / a / b,
            cos_bc: vee::dot(a2, a3) / b / c,
            cos_ac: vee::dot(a3, a1) / c / a,
        }
    }

    /// Lengths converted from Bohr to Angstrom, everything rounded
    /// to the given number of decimals.
    pub fn to_angstrom_report(&self, digits: u32) -> Abc {
        let r = Rounding(digits);
        Abc {
            a: r.round(self.a * BOHR_TO_ANGSTROM),
            b: r.round(self.b * BOHR_TO_ANGSTROM),
            c: r.round(self.c * BOHR_TO_ANGSTROM),
            cos_ab: r.round(self.cos_ab),
            cos_bc: r.round(self.cos_bc),
            cos_ac: r.round(self.cos_ac),
        }
    }

    /// `(a, b, c, cos_ab, cos_bc, cos_ac)`
    pub fn to_array(&self) -> [f64; 6]
    { [self.a, self.b, self.c, self.cos_ab, self.cos_bc, self.cos_ac] }
}

impl CheckClose for Abc {
    fn check_close(&self, other: &Abc, tol: Tolerances) -> ::std::result::Result<(), CheckCloseError>
    { self.to_array().check_close(&other.to_array(), tol) }
}
