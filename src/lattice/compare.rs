/* ************************************************************************ **
** This file is part of qecell, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Error, Result};
use crate::BravaisIndex;
use crate::cell::LatticeVectors;
use crate::celldm::CellDm;
use crate::diagnostics::Diagnostics;
use crate::latgen::lattice_from_celldm;
use crate::tol::Rounding;

/// Equality of two cells after rounding every component.
pub fn compare_vectors(v1: &LatticeVectors, v2: &LatticeVectors, rounding: Rounding) -> bool
{ v1.rounded_eq(v2, rounding) }

/// Regenerate the cell from `(ibrav, celldm)` and require it to match `vectors`.
///
/// The comparison is component-wise, so the input must already be in the
/// orientation produced by `pw.x`; a rotated copy of the right lattice fails.
/// A mismatch is reported to `diag` before being returned.
pub fn check_round_trip(
    ibrav: BravaisIndex,
    vectors: &LatticeVectors,
    celldm: &CellDm,
    rounding: Rounding,
    diag: &dyn Diagnostics,
) -> Result<()> {
    let regenerated = match lattice_from_celldm(ibrav, celldm) {
        Ok(regenerated) => regenerated,
        Err(e) => {
            diag.error(format_args!("could not rebuild ibrav = {} from celldm [{}]: {}", ibrav, celldm, e));
            return Err(e);
        },
    };
    diag.debug(format_args!("regenerated ibrav = {} cell: {:?}", ibrav, regenerated.matrix()));

    if compare_vectors(&regenerated, vectors, rounding) {
        return Ok(());
    }

    let max_deviation = regenerated.max_deviation(vectors);
    diag.error(format_args!(
        "cell is not ibrav = {} ({}): regenerated vectors differ by up to {:e}",
        ibrav, ibrav.description(), max_deviation,
    ));
    Err(Error::RoundTripMismatch { ibrav, max_deviation })
}
