/* ************************************************************************ **
** This file is part of qecell, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Two-stage identification of the Bravais index of a set of lattice vectors.
//!
//! The first stage ([`classify`]) only looks at the lengths and cosines.
//! Where those cannot tell the candidates apart, it returns a tagged candidate
//! set, which the second stage ([`Candidates::resolve`]) narrows down to a
//! single index by inspecting individual components of the vectors.
//!
//! Both stages depend on the order of the vectors: `a1`, `a2` and `a3` play
//! different roles and no attempt is made to find a better permutation.
//!
//! [`classify`]: fn.classify.html
//! [`Candidates::resolve`]: enum.Candidates.html#method.resolve

use crate::BravaisIndex::{self, *};
use crate::cell::{Abc, LatticeVectors};
use crate::tol::Tol;

/// Outcome of the first stage of classification.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Candidates {
    /// Lengths and angles were enough.
    Unique(BravaisIndex),
    /// Either 5 or -5.
    Trigonal,
    /// Either 7 or 3.
    TetragonalOrCubicI,
    /// One of 9, -9, or 14.
    BaseCenteredOrthorhombic,
    /// Either 11 or 14.
    BodyCenteredOrthorhombic,
    /// Either 10 or 14.
    FaceCenteredOrthorhombic,
    /// No rule matched.
    Fallback,
}

impl Candidates {
    /// Every index that the second stage may produce.
    pub fn indices(&self) -> Vec<BravaisIndex> {
        match *self {
            Candidates::Unique(ibrav) => vec![ibrav],
            Candidates::Trigonal => vec![TrigonalR, TrigonalR111],
            Candidates::TetragonalOrCubicI => vec![TetragonalI, CubicI],
            Candidates::BaseCenteredOrthorhombic => vec![OrthorhombicC, OrthorhombicCAlt, Triclinic],
            Candidates::BodyCenteredOrthorhombic => vec![OrthorhombicI, Triclinic],
            Candidates::FaceCenteredOrthorhombic => vec![OrthorhombicF, Triclinic],
            Candidates::Fallback => vec![Triclinic],
        }
    }

    /// Pick a single index by examining the components of the vectors.
    pub fn resolve(&self, vectors: &LatticeVectors, tol: Tol) -> BravaisIndex {
        let at = vectors.matrix();
        match *self {
            Candidates::Unique(ibrav) => ibrav,
            Candidates::Trigonal => resolve_trigonal(at, tol),
            Candidates::TetragonalOrCubicI => resolve_tetragonal_i(at, tol),
            Candidates::BaseCenteredOrthorhombic => resolve_base_centered(at, tol),
            Candidates::BodyCenteredOrthorhombic => resolve_body_centered(at, tol),
            Candidates::FaceCenteredOrthorhombic => resolve_face_centered(at, tol),
            Candidates::Fallback => Triclinic,
        }
    }
}

/// First stage of classification.
pub fn classify(abc: &Abc, tol: Tol) -> Candidates {
    let &Abc { a, b, c, cos_ab: cab, cos_bc: cbc, cos_ac: cac } = abc;
    let eq = |f, g| tol.eq(f, g);
    let zero = |f| tol.is_zero(f);

    if eq(a, b) && eq(b, c) {
        if eq(cab, cac) && eq(cab, cbc) {
            if zero(cab) {
                Candidates::Unique(CubicP)
            } else if eq(cab, 0.5) {
                Candidates::Unique(CubicF)
            } else if eq(cab, -1.0 / 3.0) {
                Candidates::Unique(CubicIAlt)
            } else {
                Candidates::Trigonal
            }
        } else if eq(cab, cac) && !eq(cab, cbc) {
            Candidates::TetragonalOrCubicI
        } else if eq(cab, -cac) && eq(cab, cbc) && eq(cab, 1.0 / 3.0) {
            Candidates::Unique(CubicI)
        } else {
            Candidates::BodyCenteredOrthorhombic
        }
    } else if eq(a, b) && !eq(a, c) {
        if zero(cab) && zero(cac) && zero(cbc) {
            Candidates::Unique(TetragonalP)
        } else if eq(cab, -0.5) && zero(cac) && zero(cbc) {
            Candidates::Unique(Hexagonal)
        } else if zero(cac) && zero(cbc) {
            Candidates::BaseCenteredOrthorhombic
        } else if eq(cac, -cbc) {
            Candidates::Unique(MonoclinicCAxisB)
        } else {
            Candidates::Fallback
        }
    } else if eq(a, c) && !eq(a, b) {
        Candidates::Unique(MonoclinicC)
    } else if eq(b, c) && !eq(a, b) {
        // NOTE: no angle is examined here; any cell with |a2| = |a3| != |a1|
        //       is assigned the A-type base-centered description.
        Candidates::Unique(OrthorhombicA)
    } else if !eq(a, b) && !eq(a, c) && !eq(b, c) {
        match (zero(cab), zero(cac), zero(cbc)) {
            (true, true, true) => Candidates::Unique(OrthorhombicP),
            (false, true, true) => Candidates::Unique(MonoclinicP),
            (true, false, true) => Candidates::Unique(MonoclinicPAxisB),
            (false, false, false) => Candidates::FaceCenteredOrthorhombic,
            _ => Candidates::Fallback,
        }
    } else {
        // only reachable with a non-transitive tolerance
        // (e.g. a ≈ b and b ≈ c but not a ≈ c)
        Candidates::Fallback
    }
}

// In all of the below, `at[i]` is vector a{i+1} and `at[i][j]` its j-th
// cartesian component.

/// 3-fold axis along z puts all three vectors at the same height.
fn resolve_trigonal(at: &[[f64; 3]; 3], tol: Tol) -> BravaisIndex {
    if tol.eq(at[0][2], at[1][2]) && tol.eq(at[1][2], at[2][2]) {
        TrigonalR
    } else {
        TrigonalR111
    }
}

/// Body-centered tetragonal vectors `(a/2)(1,-1,c/a)`, `(a/2)(1,1,c/a)`, ...
fn resolve_tetragonal_i(at: &[[f64; 3]; 3], tol: Tol) -> BravaisIndex {
    if tol.eq(at[0][0], -at[0][1]) && tol.eq(at[1][0], at[1][1]) {
        TetragonalI
    } else {
        CubicI
    }
}

fn resolve_base_centered(at: &[[f64; 3]; 3], tol: Tol) -> BravaisIndex {
    if tol.eq(at[0][0], at[1][0]) && tol.eq(at[0][1], -at[1][1]) {
        OrthorhombicCAlt
    } else if tol.eq(at[0][0], -at[1][0]) && tol.eq(at[0][1], at[1][1]) {
        OrthorhombicC
    } else {
        Triclinic
    }
}

fn resolve_body_centered(at: &[[f64; 3]; 3], tol: Tol) -> BravaisIndex {
    if tol.eq_abs(at[0][0], at[1][0]) && tol.eq_abs(at[0][1], at[1][1]) {
        OrthorhombicI
    } else {
        Triclinic
    }
}

/// Face-centered orthorhombic: `a1 = (a,0,c)/2`, `a2 = (a,b,0)/2`, `a3 = (0,b,c)/2`.
///
/// Each vector lies in a coordinate plane, and each pair shares one half-edge.
fn resolve_face_centered(at: &[[f64; 3]; 3], tol: Tol) -> BravaisIndex {
    let in_planes = tol.is_zero(at[0][1]) && tol.is_zero(at[1][2]) && tol.is_zero(at[2][0]);
    let shared_edges = {
        tol.eq(at[0][0], at[1][0])
            && tol.eq(at[1][1], at[2][1])
            && tol.eq(at[0][2], at[2][2])
    };
    let nonzero_edges = !tol.is_zero(at[0][0]) && !tol.is_zero(at[1][1]) && !tol.is_zero(at[0][2]);

    if in_planes && shared_edges && nonzero_edges {
        OrthorhombicF
    } else {
        Triclinic
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use crate::tol::Precision;

    fn abc(a: f64, b: f64, c: f64, cos_ab: f64, cos_bc: f64, cos_ac: f64) -> Abc
    { Abc { a, b, c, cos_ab, cos_bc, cos_ac } }

    fn classify6(a: f64, b: f64, c: f64, cos_ab: f64, cos_bc: f64, cos_ac: f64) -> Candidates
    { classify(&abc(a, b, c, cos_ab, cos_bc, cos_ac), Precision::CLASSIFY.tol()) }

    #[test]
    fn equal_lengths() {
        let third = 1.0 / 3.0;
        assert_eq!(classify6(2.0, 2.0, 2.0, 0.0, 0.0, 0.0), Candidates::Unique(CubicP));
        assert_eq!(classify6(2.0, 2.0, 2.0, 0.5, 0.5, 0.5), Candidates::Unique(CubicF));
        assert_eq!(classify6(2.0, 2.0, 2.0, -third, -third, -third), Candidates::Unique(CubicIAlt));
        assert_eq!(classify6(2.0, 2.0, 2.0, 0.3, 0.3, 0.3), Candidates::Trigonal);
        assert_eq!(classify6(2.0, 2.0, 2.0, 0.4, 0.1, 0.4), Candidates::TetragonalOrCubicI);
        assert_eq!(classify6(2.0, 2.0, 2.0, third, third, -third), Candidates::Unique(CubicI));
        assert_eq!(classify6(2.0, 2.0, 2.0, 0.7, 0.4, 0.1), Candidates::BodyCenteredOrthorhombic);
    }

    #[test]
    fn two_equal_lengths() {
        assert_eq!(classify6(2.0, 2.0, 3.0, 0.0, 0.0, 0.0), Candidates::Unique(TetragonalP));
        assert_eq!(classify6(2.0, 2.0, 3.0, -0.5, 0.0, 0.0), Candidates::Unique(Hexagonal));
        assert_eq!(classify6(2.0, 2.0, 3.0, 0.2, 0.0, 0.0), Candidates::BaseCenteredOrthorhombic);
        assert_eq!(classify6(2.0, 2.0, 3.0, 0.2, -0.1, 0.1), Candidates::Unique(MonoclinicCAxisB));
        assert_eq!(classify6(2.0, 2.0, 3.0, 0.2, 0.1, 0.3), Candidates::Fallback);
        assert_eq!(classify6(2.0, 3.0, 2.0, 0.2, 0.1, 0.3), Candidates::Unique(MonoclinicC));
        // whatever the angles
        assert_eq!(classify6(3.0, 2.0, 2.0, 0.2, 0.1, 0.3), Candidates::Unique(OrthorhombicA));
        assert_eq!(classify6(3.0, 2.0, 2.0, 0.0, 0.0, 0.0), Candidates::Unique(OrthorhombicA));
    }

    #[test]
    fn distinct_lengths() {
        assert_eq!(classify6(2.0, 3.0, 4.0, 0.0, 0.0, 0.0), Candidates::Unique(OrthorhombicP));
        assert_eq!(classify6(2.0, 3.0, 4.0, 0.2, 0.0, 0.0), Candidates::Unique(MonoclinicP));
        assert_eq!(classify6(2.0, 3.0, 4.0, 0.0, 0.0, 0.2), Candidates::Unique(MonoclinicPAxisB));
        assert_eq!(classify6(2.0, 3.0, 4.0, 0.1, 0.2, 0.3), Candidates::FaceCenteredOrthorhombic);
        // only cos_bc nonzero has no dedicated index
        assert_eq!(classify6(2.0, 3.0, 4.0, 0.0, 0.2, 0.0), Candidates::Fallback);
    }

    #[test]
    fn length_tolerance_boundary() {
        // exactly representable tolerance of 0.5
        let tol = Precision(0).tol();
        let at_boundary = abc(2.0, 2.5, 2.0, 0.0, 0.0, 0.0);
        assert_eq!(classify(&at_boundary, tol), Candidates::Unique(CubicP));
        let past_boundary = abc(2.0, 2.5000001, 2.0, 0.0, 0.0, 0.0);
        assert_eq!(classify(&past_boundary, tol), Candidates::Unique(MonoclinicC));

        let tol = Precision::CLASSIFY.tol();
        assert_eq!(classify(&abc(2.0, 2.0 + 4e-7, 3.0, 0.0, 0.0, 0.0), tol), Candidates::Unique(TetragonalP));
        assert_eq!(classify(&abc(2.0, 2.0 + 6e-7, 3.0, 0.0, 0.0, 0.0), tol), Candidates::Unique(OrthorhombicP));
    }

    #[test]
    fn candidate_sets() {
        assert_eq!(Candidates::BaseCenteredOrthorhombic.indices(), vec![OrthorhombicC, OrthorhombicCAlt, Triclinic]);
        assert_eq!(Candidates::Unique(CubicP).indices(), vec![CubicP]);
        assert_eq!(Candidates::Fallback.indices(), vec![Triclinic]);
    }

    #[test]
    fn resolvers() {
        let tol = Precision::CLASSIFY.tol();
        let resolve = |cands: Candidates, rows| cands.resolve(&LatticeVectors::new(rows), tol);

        let (x, y, z) = (0.5, 0.75, 2.0);
        assert_eq!(resolve(Candidates::BaseCenteredOrthorhombic, [[x, y, 0.0], [-x, y, 0.0], [0.0, 0.0, z]]), OrthorhombicC);
        assert_eq!(resolve(Candidates::BaseCenteredOrthorhombic, [[x, -y, 0.0], [x, y, 0.0], [0.0, 0.0, z]]), OrthorhombicCAlt);
        assert_eq!(resolve(Candidates::BaseCenteredOrthorhombic, [[x, y, 0.0], [y, x, 0.0], [0.0, 0.0, z]]), Triclinic);

        assert_eq!(resolve(Candidates::BodyCenteredOrthorhombic, [[x, y, z], [-x, y, z], [-x, -y, z]]), OrthorhombicI);
        assert_eq!(resolve(Candidates::BodyCenteredOrthorhombic, [[x, y, z], [y, x, z], [-x, -y, z]]), Triclinic);

        assert_eq!(resolve(Candidates::FaceCenteredOrthorhombic, [[x, 0.0, z], [x, y, 0.0], [0.0, y, z]]), OrthorhombicF);
        assert_eq!(resolve(Candidates::FaceCenteredOrthorhombic, [[x, 0.0, 0.0], [y, z, 0.0], [0.1, 0.2, z]]), Triclinic);

        assert_eq!(resolve(Candidates::TetragonalOrCubicI, [[x, -x, z], [x, x, z], [-x, -x, z]]), TetragonalI);
        assert_eq!(resolve(Candidates::TetragonalOrCubicI, [[x, x, x], [-x, x, x], [-x, -x, x]]), CubicI);

        assert_eq!(resolve(Candidates::Trigonal, [[x, -y, z], [0.0, y, z], [-x, -y, z]]), TrigonalR);
        assert_eq!(resolve(Candidates::Trigonal, [[z, x, x], [x, z, x], [x, x, z]]), TrigonalR111);

        assert_eq!(resolve(Candidates::Unique(Hexagonal), [[0.0; 3]; 3]), Hexagonal);
        assert_eq!(resolve(Candidates::Fallback, [[0.0; 3]; 3]), Triclinic);
    }
}
