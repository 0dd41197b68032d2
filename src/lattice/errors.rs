/* ************************************************************************ **
** This file is part of qecell, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use failure::Fail;

use crate::BravaisIndex;

pub type Result<T> = ::std::result::Result<T, Error>;

/// Everything that can go wrong while converting between cell representations.
///
/// Falling back to the triclinic index when no rule matches is *not* an error.
#[derive(Debug, Clone, PartialEq, Fail)]
pub enum Error {
    #[fail(display = "not a valid ibrav: {} (expected one of -13, -12, -9, -5, -3, 0..=14, 91)", value)]
    BadBravaisIndex { value: i32 },

    #[fail(display = "bravais_index {} is outside of 0..=14", value)]
    BadSchemaIndex { value: i32 },

    #[fail(display = "alt_axes {:?} is not valid for bravais_index {}", tag, bravais_index)]
    BadAltAxes { bravais_index: u8, tag: String },

    #[fail(display = "cell vectors are not reproduced by ibrav = {} (max deviation: {:e})", ibrav, max_deviation)]
    RoundTripMismatch { ibrav: BravaisIndex, max_deviation: f64 },

    #[fail(display = "ibrav = {}: bad celldm({}) = {}: {}", ibrav, slot, value, reason)]
    InvalidCellDm { ibrav: BravaisIndex, slot: usize, value: f64, reason: &'static str },

    #[fail(display = "ibrav = {} cannot be generated from celldm alone", ibrav)]
    NotGenerable { ibrav: BravaisIndex },

    #[fail(display = "cell is missing lattice vector '{}'", key)]
    MissingVector { key: &'static str },

    #[fail(display = "lattice vector '{}' has {} components, expected 3", key, len)]
    BadVectorLength { key: &'static str, len: usize },

    #[fail(display = "lattice vector a{} has zero length", index)]
    DegenerateCell { index: usize },

    #[fail(display = "lattice vector a{} has a non-finite component", index)]
    NonFiniteVector { index: usize },

    #[fail(display = "{} = {} is too large (at most {} digits are supported)", name, value, max)]
    TooManyDigits { name: &'static str, value: u32, max: u32 },
}
