/* ************************************************************************ **
** This file is part of qecell, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;

use crate::BravaisIndex::{self, *};
use crate::cell::LatticeVectors;
use crate::tol::{CheckClose, CheckCloseError, Tolerances};
use crate::vee::{self, dot, norm};

/// The `celldm(1..6)` parameters of a cell.
///
/// `celldm(1)` is the lattice parameter `a` (a length); `celldm(2)` and
/// `celldm(3)` are `b/a` and `c/a`; `celldm(4..6)` are cosines whose meaning
/// depends on the Bravais index. Slots that an index does not use hold zero.
///
/// Indexing is 1-based to match the usual notation, e.g. `celldm[4]`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-support", serde(transparent))]
pub struct CellDm(pub [f64; 6]);

impl CellDm {
    /// The lattice parameter, `celldm(1)`.
    pub fn alat(&self) -> f64 { self.0[0] }

    /// Zero every slot not used by `ibrav`.
    pub fn masked(&self, ibrav: BravaisIndex) -> CellDm {
        let mut out = CellDm::default();
        for &slot in used_slots(ibrav) {
            out[slot] = self[slot];
        }
        out
    }

    fn set_abc(&mut self, a: f64, b: f64, c: f64) {
        self[1] = a;
        self[2] = b / a;
        self[3] = c / a;
    }
}

impl ::std::ops::Index<usize> for CellDm {
    type Output = f64;

    fn index(&self, slot: usize) -> &f64 {
        assert!(1 <= slot && slot <= 6, "celldm slot out of range: {}", slot);
        &self.0[slot - 1]
    }
}

impl ::std::ops::IndexMut<usize> for CellDm {
    fn index_mut(&mut self, slot: usize) -> &mut f64 {
        assert!(1 <= slot && slot <= 6, "celldm slot out of range: {}", slot);
        &mut self.0[slot - 1]
    }
}

impl fmt::Display for CellDm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 { write!(f, " ")?; }
            write!(f, "{:.10}", x)?;
        }
        Ok(())
    }
}

impl CheckClose for CellDm {
    fn check_close(&self, other: &CellDm, tol: Tolerances) -> Result<(), CheckCloseError>
    { self.0.check_close(&other.0, tol) }
}

/// The (1-based) celldm slots meaningful for a Bravais index.
pub fn used_slots(ibrav: BravaisIndex) -> &'static [usize] {
    match ibrav {
        Free | CubicP | CubicF | CubicI | CubicIAlt => &[1],
        Hexagonal | TetragonalP | TetragonalI => &[1, 3],
        TrigonalR | TrigonalR111 => &[1, 4],
        OrthorhombicP | OrthorhombicC | OrthorhombicCAlt | OrthorhombicA
        | OrthorhombicF | OrthorhombicI => &[1, 2, 3],
        MonoclinicP | MonoclinicC => &[1, 2, 3, 4],
        MonoclinicPAxisB | MonoclinicCAxisB => &[1, 2, 3, 5],
        Triclinic => &[1, 2, 3, 4, 5, 6],
    }
}

/// Compute the celldm of a cell, assuming it follows the conventions of `ibrav`.
///
/// Only norms and dot products are used, so the result does not depend on the
/// orientation of the cell. Whether the vectors really do describe that kind of
/// lattice is not checked here; see [`check_round_trip`].
///
/// [`check_round_trip`]: ../compare/fn.check_round_trip.html
pub fn celldm_from_vectors(ibrav: BravaisIndex, vectors: &LatticeVectors) -> CellDm {
    let (a1, a2, a3) = (vectors.a1(), vectors.a2(), vectors.a3());
    let cos = vee::cos_angle;
    let sum = vee::add;
    let diff = vee::sub;

    let mut out = CellDm::default();
    match ibrav {
        Free | CubicP => out[1] = norm(a1),
        CubicF => out[1] = norm(a1) * 2f64.sqrt(),
        CubicI | CubicIAlt => out[1] = 2.0 * norm(a1) / 3f64.sqrt(),

        Hexagonal | TetragonalP => out.set_abc(norm(a1), norm(a1), norm(a3)),

        TrigonalR | TrigonalR111 => {
            out[1] = norm(a1);
            out[4] = cos(a1, a2);
        },

        // a1 = (a/2)(1, -1, c/a),  a2 = (a/2)(1, 1, c/a)
        TetragonalI => {
            let a = (2.0 * (dot(a1, a1) - dot(a1, a2))).sqrt();
            let c = 2.0 * dot(a1, a2).sqrt();
            out.set_abc(a, a, c);
        },

        OrthorhombicP => out.set_abc(norm(a1), norm(a2), norm(a3)),

        // a1 = (a/2, b/2, 0),  a2 = (-a/2, b/2, 0)
        OrthorhombicC => out.set_abc(norm(&diff(a1, a2)), norm(&sum(a1, a2)), norm(a3)),

        // a1 = (a/2, -b/2, 0),  a2 = (a/2, b/2, 0)
        OrthorhombicCAlt => out.set_abc(norm(&sum(a1, a2)), norm(&diff(a2, a1)), norm(a3)),

        // a2 = (0, b/2, -c/2),  a3 = (0, b/2, c/2)
        OrthorhombicA => out.set_abc(norm(a1), norm(&sum(a2, a3)), norm(&diff(a3, a2))),

        // a1 = (a/2, 0, c/2),  a2 = (a/2, b/2, 0),  a3 = (0, b/2, c/2)
        OrthorhombicF => {
            let a = 2.0 * dot(a1, a2).sqrt();
            let b = 2.0 * dot(a2, a3).sqrt();
            let c = 2.0 * dot(a1, a3).sqrt();
            out.set_abc(a, b, c);
        },

        // a1 = (a/2, b/2, c/2),  a2 = (-a/2, b/2, c/2),  a3 = (-a/2, -b/2, c/2)
        OrthorhombicI => out.set_abc(norm(&diff(a1, a2)), norm(&diff(a2, a3)), norm(&sum(a1, a3))),

        MonoclinicP => {
            out.set_abc(norm(a1), norm(a2), norm(a3));
            out[4] = cos(a1, a2);
        },

        MonoclinicPAxisB => {
            out.set_abc(norm(a1), norm(a2), norm(a3));
            out[5] = cos(a1, a3);
        },

        // a1 = (a/2, 0, -c/2),  a3 = (a/2, 0, c/2)
        MonoclinicC => {
            let a_vec = sum(a1, a3);
            out.set_abc(norm(&a_vec), norm(a2), norm(&diff(a3, a1)));
            out[4] = cos(&a_vec, a2);
        },

        // a1 = (a/2, b/2, 0),  a2 = (-a/2, b/2, 0)
        MonoclinicCAxisB => {
            let a_vec = diff(a1, a2);
            out.set_abc(norm(&a_vec), norm(&sum(a1, a2)), norm(a3));
            out[5] = cos(&a_vec, a3);
        },

        Triclinic => {
            out.set_abc(norm(a1), norm(a2), norm(a3));
            out[4] = cos(a2, a3);
            out[5] = cos(a1, a3);
            out[6] = cos(a1, a2);
        },
    }
    out.masked(ibrav)
}
