/* ************************************************************************ **
** This file is part of qecell, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Bravais lattice indices (`ibrav`) and `celldm` parameters of Quantum ESPRESSO.
//!
//! The main entry points are:
//!
//! * [`ibrav_from_cell`] and [`abc_from_cell`], which guess the index of a cell
//!   from the lengths and angles of its vectors (plus, when those are ambiguous,
//!   the components of the vectors themselves);
//! * [`celldm_from_cell`], which computes the celldm of a cell whose index is
//!   known, and verifies it by rebuilding the cell;
//! * [`lattice_from_celldm`], which builds the vectors of `(ibrav, celldm)`.
//!
//! Classification is sensitive to both the order and the orientation of the
//! vectors. It is meant for cells that were produced by `pw.x` (or follow its
//! conventions), not as a general-purpose lattice reduction.
//!
//! [`ibrav_from_cell`]: fn.ibrav_from_cell.html
//! [`abc_from_cell`]: fn.abc_from_cell.html
//! [`celldm_from_cell`]: fn.celldm_from_cell.html
//! [`lattice_from_celldm`]: fn.lattice_from_celldm.html

#[macro_use]
pub mod tol;

mod errors;
mod vee;
mod bravais;
mod cell;
mod classify;
mod celldm;
mod latgen;
mod compare;
mod diagnostics;
mod convert;

//---------------------------
// public reexports; API

pub use crate::errors::{Error, Result};

pub use crate::bravais::{BravaisIndex, AltAxes, qe_ibrav};
pub use crate::cell::{LatticeVectors, Abc, BOHR_TO_ANGSTROM};
pub use crate::celldm::{CellDm, celldm_from_vectors, used_slots};
pub use crate::classify::{Candidates, classify};
pub use crate::latgen::lattice_from_celldm;
pub use crate::compare::{compare_vectors, check_round_trip};
pub use crate::diagnostics::{Diagnostics, LogDiagnostics, Collector, Silent};
pub use crate::tol::{Precision, Tol, Rounding, MAX_DIGITS};

pub use crate::convert::{
    Settings,
    ibrav_from_cell,
    abc_from_cell,
    celldm_from_cell,
    celldm_for_ibrav,
    abc_from_celldm,
};

pub use crate::vee::{V3, M33};
