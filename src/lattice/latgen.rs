/* ************************************************************************ **
** This file is part of qecell, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Lattice vectors from `(ibrav, celldm)`, in the axis conventions of `pw.x`.

use crate::{Error, Result};
use crate::BravaisIndex::{self, *};
use crate::cell::LatticeVectors;
use crate::celldm::CellDm;

/// Build the lattice vectors described by `celldm` for the index `ibrav`.
///
/// Only the slots used by `ibrav` are read. The vectors come out in the
/// units of `celldm(1)`.
pub fn lattice_from_celldm(ibrav: BravaisIndex, celldm: &CellDm) -> Result<LatticeVectors> {
    let check = Checker { ibrav, celldm };
    let a = check.positive(1)?;

    let rows = match ibrav {
        Free => return Err(Error::NotGenerable { ibrav }),

        CubicP => [[a, 0.0, 0.0], [0.0, a, 0.0], [0.0, 0.0, a]],

        CubicF => {
            let h = a / 2.0;
            [[-h, 0.0, h], [0.0, h, h], [-h, h, 0.0]]
        },

        CubicI => {
            let h = a / 2.0;
            [[h, h, h], [-h, h, h], [-h, -h, h]]
        },

        CubicIAlt => {
            let h = a / 2.0;
            [[-h, h, h], [h, -h, h], [h, h, -h]]
        },

        Hexagonal => {
            let c = a * check.positive(3)?;
            [[a, 0.0, 0.0], [-a / 2.0, a * 3f64.sqrt() / 2.0, 0.0], [0.0, 0.0, c]]
        },

        TrigonalR | TrigonalR111 => {
            let cos = check.cosine(4, -0.5)?;
            let tx = ((1.0 - cos) / 2.0).sqrt();
            let ty = ((1.0 - cos) / 6.0).sqrt();
            let tz = ((1.0 + 2.0 * cos) / 3.0).sqrt();
            if ibrav == TrigonalR {
                [
                    [a * tx, -a * ty, a * tz],
                    [0.0, 2.0 * a * ty, a * tz],
                    [-a * tx, -a * ty, a * tz],
                ]
            } else {
                let a = a / 3f64.sqrt();
                let u = a * (tz - 2.0 * 2f64.sqrt() * ty);
                let v = a * (tz + 2f64.sqrt() * ty);
                [[u, v, v], [v, u, v], [v, v, u]]
            }
        },

        TetragonalP => {
            let c = a * check.positive(3)?;
            [[a, 0.0, 0.0], [0.0, a, 0.0], [0.0, 0.0, c]]
        },

        TetragonalI => {
            let h = a / 2.0;
            let ch = a * check.positive(3)? / 2.0;
            [[h, -h, ch], [h, h, ch], [-h, -h, ch]]
        },

        OrthorhombicP => {
            let (b, c) = check.edges(a)?;
            [[a, 0.0, 0.0], [0.0, b, 0.0], [0.0, 0.0, c]]
        },

        OrthorhombicC => {
            let (b, c) = check.edges(a)?;
            [[a / 2.0, b / 2.0, 0.0], [-a / 2.0, b / 2.0, 0.0], [0.0, 0.0, c]]
        },

        OrthorhombicCAlt => {
            let (b, c) = check.edges(a)?;
            [[a / 2.0, -b / 2.0, 0.0], [a / 2.0, b / 2.0, 0.0], [0.0, 0.0, c]]
        },

        OrthorhombicA => {
            let (b, c) = check.edges(a)?;
            [[a, 0.0, 0.0], [0.0, b / 2.0, -c / 2.0], [0.0, b / 2.0, c / 2.0]]
        },

        OrthorhombicF => {
            let (b, c) = check.edges(a)?;
            let (a, b, c) = (a / 2.0, b / 2.0, c / 2.0);
            [[a, 0.0, c], [a, b, 0.0], [0.0, b, c]]
        },

        OrthorhombicI => {
            let (b, c) = check.edges(a)?;
            let (a, b, c) = (a / 2.0, b / 2.0, c / 2.0);
            [[a, b, c], [-a, b, c], [-a, -b, c]]
        },

        MonoclinicP => {
            let (b, c) = check.edges(a)?;
            let cos_gamma = check.cosine(4, -1.0)?;
            let sin_gamma = sin_from_cos(cos_gamma);
            [[a, 0.0, 0.0], [b * cos_gamma, b * sin_gamma, 0.0], [0.0, 0.0, c]]
        },

        MonoclinicPAxisB => {
            let (b, c) = check.edges(a)?;
            let cos_beta = check.cosine(5, -1.0)?;
            let sin_beta = sin_from_cos(cos_beta);
            [[a, 0.0, 0.0], [0.0, b, 0.0], [c * cos_beta, 0.0, c * sin_beta]]
        },

        MonoclinicC => {
            let (b, c) = check.edges(a)?;
            let cos_gamma = check.cosine(4, -1.0)?;
            let sin_gamma = sin_from_cos(cos_gamma);
            [
                [a / 2.0, 0.0, -c / 2.0],
                [b * cos_gamma, b * sin_gamma, 0.0],
                [a / 2.0, 0.0, c / 2.0],
            ]
        },

        MonoclinicCAxisB => {
            let (b, c) = check.edges(a)?;
            let cos_beta = check.cosine(5, -1.0)?;
            let sin_beta = sin_from_cos(cos_beta);
            [
                [a / 2.0, b / 2.0, 0.0],
                [-a / 2.0, b / 2.0, 0.0],
                [c * cos_beta, 0.0, c * sin_beta],
            ]
        },

        Triclinic => {
            let (b, c) = check.edges(a)?;
            let cos_alpha = check.cosine(4, -1.0)?;
            let cos_beta = check.cosine(5, -1.0)?;
            let cos_gamma = check.cosine(6, -1.0)?;
            let sin_gamma = sin_from_cos(cos_gamma);

            let volume_term = 1.0 + 2.0 * cos_alpha * cos_beta * cos_gamma
                - cos_alpha * cos_alpha - cos_beta * cos_beta - cos_gamma * cos_gamma;
            if !(volume_term > 0.0) {
                return Err(Error::InvalidCellDm {
                    ibrav, slot: 6, value: cos_gamma,
                    reason: "angles do not form a cell of positive volume",
                });
            }
            [
                [a, 0.0, 0.0],
                [b * cos_gamma, b * sin_gamma, 0.0],
                [
                    c * cos_beta,
                    c * (cos_alpha - cos_beta * cos_gamma) / sin_gamma,
                    c * volume_term.sqrt() / sin_gamma,
                ],
            ]
        },
    };
    Ok(LatticeVectors::new(rows))
}

fn sin_from_cos(cos: f64) -> f64
{ (1.0 - cos * cos).sqrt() }

struct Checker<'a> {
    ibrav: BravaisIndex,
    celldm: &'a CellDm,
}

impl<'a> Checker<'a> {
    fn invalid(&self, slot: usize, reason: &'static str) -> Error {
        let value = self.celldm[slot];
        Error::InvalidCellDm { ibrav: self.ibrav, slot, value, reason }
    }

    fn positive(&self, slot: usize) -> Result<f64> {
        let value = self.celldm[slot];
        match value > 0.0 && value.is_finite() {
            true => Ok(value),
            false => Err(self.invalid(slot, "must be positive")),
        }
    }

    /// Absolute `b` and `c`.
    fn edges(&self, a: f64) -> Result<(f64, f64)>
    { Ok((a * self.positive(2)?, a * self.positive(3)?)) }

    /// A cosine strictly between `lower` and 1.
    fn cosine(&self, slot: usize, lower: f64) -> Result<f64> {
        let value = self.celldm[slot];
        if !(value < 1.0) {
            return Err(self.invalid(slot, "cosine must be less than 1"));
        }
        if !(value > lower) {
            return Err(match lower == -1.0 {
                true => self.invalid(slot, "cosine must be greater than -1"),
                false => self.invalid(slot, "cosine must be greater than -1/2"),
            });
        }
        Ok(value)
    }
}
