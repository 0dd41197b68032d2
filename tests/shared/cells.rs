/* ************************************************************************ **
** This file is part of qecell, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// (not every test uses every helper)
#![allow(dead_code)]

use qecell_lattice::{BravaisIndex, CellDm, LatticeVectors, lattice_from_celldm};

/// A celldm for each generable index, chosen so that no accidental
/// symmetry makes the lattice look like a different index.
pub fn representative_celldm(ibrav: BravaisIndex) -> CellDm {
    use BravaisIndex::*;

    let a = 5.0;
    CellDm(match ibrav {
        Free | CubicP | CubicF | CubicI | CubicIAlt => [a, 0.0, 0.0, 0.0, 0.0, 0.0],
        Hexagonal => [a, 0.0, 1.6, 0.0, 0.0, 0.0],
        TrigonalR | TrigonalR111 => [a, 0.0, 0.0, 0.3, 0.0, 0.0],
        TetragonalP | TetragonalI => [a, 0.0, 1.5, 0.0, 0.0, 0.0],
        OrthorhombicP | OrthorhombicC | OrthorhombicCAlt | OrthorhombicA
        | OrthorhombicF | OrthorhombicI => [a, 1.5, 2.0, 0.0, 0.0, 0.0],
        MonoclinicP | MonoclinicC => [a, 1.5, 2.0, 0.2, 0.0, 0.0],
        MonoclinicPAxisB | MonoclinicCAxisB => [a, 1.5, 2.0, 0.0, 0.2, 0.0],
        Triclinic => [a, 1.5, 2.0, 0.1, 0.2, 0.3],
    })
}

/// Every index that can be built from celldm alone.
pub fn generable() -> Vec<BravaisIndex> {
    BravaisIndex::ALL.iter().cloned()
        .filter(|&ibrav| ibrav != BravaisIndex::Free)
        .collect()
}

pub fn representative_cell(ibrav: BravaisIndex) -> LatticeVectors {
    lattice_from_celldm(ibrav, &representative_celldm(ibrav))
        .unwrap_or_else(|e| panic!("ibrav = {}: {}", ibrav, e))
}

pub fn diagonal(a: f64, b: f64, c: f64) -> LatticeVectors {
    LatticeVectors::new([[a, 0.0, 0.0], [0.0, b, 0.0], [0.0, 0.0, c]])
}
