/* ************************************************************************ **
** This file is part of qecell, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Bravais lattice index (`ibrav`) in the Quantum ESPRESSO convention.
///
/// Negative values (and 91) select an alternative choice of axes for the
/// same symmetry class as the corresponding positive index.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BravaisIndex {
    /// `ibrav = 0`: lattice vectors are given explicitly.
    Free,
    /// `ibrav = 1`
    CubicP,
    /// `ibrav = 2`
    CubicF,
    /// `ibrav = 3`
    CubicI,
    /// `ibrav = -3`, more symmetric axes.
    CubicIAlt,
    /// `ibrav = 4`, hexagonal and trigonal P.
    Hexagonal,
    /// `ibrav = 5`, trigonal R with the 3-fold axis along z.
    TrigonalR,
    /// `ibrav = -5`, trigonal R with the 3-fold axis along (111).
    TrigonalR111,
    /// `ibrav = 6`
    TetragonalP,
    /// `ibrav = 7`
    TetragonalI,
    /// `ibrav = 8`
    OrthorhombicP,
    /// `ibrav = 9`, base-centered (C) orthorhombic.
    OrthorhombicC,
    /// `ibrav = -9`, as 9 with the alternate description.
    OrthorhombicCAlt,
    /// `ibrav = 91`, one-face base-centered (A-type) orthorhombic.
    OrthorhombicA,
    /// `ibrav = 10`
    OrthorhombicF,
    /// `ibrav = 11`
    OrthorhombicI,
    /// `ibrav = 12`, unique axis c.
    MonoclinicP,
    /// `ibrav = -12`, unique axis b.
    MonoclinicPAxisB,
    /// `ibrav = 13`, unique axis c.
    MonoclinicC,
    /// `ibrav = -13`, unique axis b.
    MonoclinicCAxisB,
    /// `ibrav = 14`
    Triclinic,
}

use self::BravaisIndex::*;

impl BravaisIndex {
    /// Every index, in the order of the numbering used by `pw.x` documentation.
    pub const ALL: [BravaisIndex; 21] = [
        Free, CubicP, CubicF, CubicI, CubicIAlt, Hexagonal, TrigonalR, TrigonalR111,
        TetragonalP, TetragonalI, OrthorhombicP, OrthorhombicC, OrthorhombicCAlt,
        OrthorhombicA, OrthorhombicF, OrthorhombicI, MonoclinicP, MonoclinicPAxisB,
        MonoclinicC, MonoclinicCAxisB, Triclinic,
    ];

    pub fn from_i32(value: i32) -> Result<Self> {
        Ok(match value {
            0 => Free,
            1 => CubicP,
            2 => CubicF,
            3 => CubicI,
            -3 => CubicIAlt,
            4 => Hexagonal,
            5 => TrigonalR,
            -5 => TrigonalR111,
            6 => TetragonalP,
            7 => TetragonalI,
            8 => OrthorhombicP,
            9 => OrthorhombicC,
            -9 => OrthorhombicCAlt,
            91 => OrthorhombicA,
            10 => OrthorhombicF,
            11 => OrthorhombicI,
            12 => MonoclinicP,
            -12 => MonoclinicPAxisB,
            13 => MonoclinicC,
            -13 => MonoclinicCAxisB,
            14 => Triclinic,
            _ => return Err(Error::BadBravaisIndex { value }),
        })
    }

    pub fn to_i32(self) -> i32 {
        match self {
            Free => 0,
            CubicP => 1,
            CubicF => 2,
            CubicI => 3,
            CubicIAlt => -3,
            Hexagonal => 4,
            TrigonalR => 5,
            TrigonalR111 => -5,
            TetragonalP => 6,
            TetragonalI => 7,
            OrthorhombicP => 8,
            OrthorhombicC => 9,
            OrthorhombicCAlt => -9,
            OrthorhombicA => 91,
            OrthorhombicF => 10,
            OrthorhombicI => 11,
            MonoclinicP => 12,
            MonoclinicPAxisB => -12,
            MonoclinicC => 13,
            MonoclinicCAxisB => -13,
            Triclinic => 14,
        }
    }

    /// The `(bravais_index, alt_axes)` pair used by the XML schema.
    ///
    /// Inverse of [`qe_ibrav`].
    ///
    /// [`qe_ibrav`]: fn.qe_ibrav.html
    pub fn schema_form(self) -> (u8, Option<AltAxes>) {
        match self {
            CubicIAlt => (3, Some(AltAxes::BccSymmetric)),
            TrigonalR111 => (5, Some(AltAxes::ThreeFold111)),
            OrthorhombicCAlt => (9, Some(AltAxes::MinusBAC)),
            OrthorhombicA => (9, Some(AltAxes::BcoAType)),
            MonoclinicPAxisB => (12, Some(AltAxes::UniqueAxisB)),
            MonoclinicCAxisB => (13, Some(AltAxes::UniqueAxisB)),
            other => (other.to_i32() as u8, None),
        }
    }

    /// Short human-readable name of the lattice.
    pub fn description(self) -> &'static str {
        match self {
            Free => "free lattice",
            CubicP => "cubic P (sc)",
            CubicF => "cubic F (fcc)",
            CubicI => "cubic I (bcc)",
            CubicIAlt => "cubic I (bcc), more symmetric axes",
            Hexagonal => "hexagonal and trigonal P",
            TrigonalR => "trigonal R, 3-fold axis c",
            TrigonalR111 => "trigonal R, 3-fold axis <111>",
            TetragonalP => "tetragonal P (st)",
            TetragonalI => "tetragonal I (bct)",
            OrthorhombicP => "orthorhombic P",
            OrthorhombicC => "orthorhombic base-centered (bco)",
            OrthorhombicCAlt => "orthorhombic base-centered, alternate description",
            OrthorhombicA => "orthorhombic one-face base-centered A-type",
            OrthorhombicF => "orthorhombic face-centered",
            OrthorhombicI => "orthorhombic body-centered",
            MonoclinicP => "monoclinic P, unique axis c",
            MonoclinicPAxisB => "monoclinic P, unique axis b",
            MonoclinicC => "monoclinic base-centered, unique axis c",
            MonoclinicCAxisB => "monoclinic base-centered, unique axis b",
            Triclinic => "triclinic",
        }
    }
}

impl fmt::Display for BravaisIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Display::fmt(&self.to_i32(), f) }
}

/// Values of the `alt_axes` attribute of the XML schema.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AltAxes {
    /// `"b:a-b+c:-c"`
    BccSymmetric,
    /// `"3fold-111"`
    ThreeFold111,
    /// `"-b:a:c"`
    MinusBAC,
    /// `"bcoA-type"`
    BcoAType,
    /// `"unique-axis-b"`
    UniqueAxisB,
}

impl AltAxes {
    pub fn as_str(self) -> &'static str {
        match self {
            AltAxes::BccSymmetric => "b:a-b+c:-c",
            AltAxes::ThreeFold111 => "3fold-111",
            AltAxes::MinusBAC => "-b:a:c",
            AltAxes::BcoAType => "bcoA-type",
            AltAxes::UniqueAxisB => "unique-axis-b",
        }
    }
}

impl FromStr for AltAxes {
    type Err = ();

    fn from_str(s: &str) -> ::std::result::Result<AltAxes, ()> {
        Ok(match s {
            "b:a-b+c:-c" => AltAxes::BccSymmetric,
            "3fold-111" => AltAxes::ThreeFold111,
            "-b:a:c" => AltAxes::MinusBAC,
            "bcoA-type" => AltAxes::BcoAType,
            "unique-axis-b" => AltAxes::UniqueAxisB,
            _ => return Err(()),
        })
    }
}

impl fmt::Display for AltAxes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { f.write_str(self.as_str()) }
}

/// Map the schema's `bravais_index` and `alt_axes` to a signed `ibrav`.
///
/// The tag is only examined for indices that have an alternative setting;
/// any tag given for another index, or a tag that does not belong to the
/// index, is rejected.
pub fn qe_ibrav(bravais_index: i32, alt_axes: Option<&str>) -> Result<BravaisIndex> {
    if bravais_index < 0 || bravais_index > 14 {
        return Err(Error::BadSchemaIndex { value: bravais_index });
    }
    let base = BravaisIndex::from_i32(bravais_index)?;

    let alt_axes = match alt_axes {
        None => return Ok(base),
        Some(tag) => tag,
    };
    let bad_tag = || Error::BadAltAxes {
        bravais_index: bravais_index as u8,
        tag: alt_axes.to_string(),
    };

    let tag = alt_axes.parse::<AltAxes>().map_err(|()| bad_tag())?;
    match (base, tag) {
        (CubicI, AltAxes::BccSymmetric) => Ok(CubicIAlt),
        (TrigonalR, AltAxes::ThreeFold111) => Ok(TrigonalR111),
        (OrthorhombicC, AltAxes::MinusBAC) => Ok(OrthorhombicCAlt),
        (OrthorhombicC, AltAxes::BcoAType) => Ok(OrthorhombicA),
        (MonoclinicP, AltAxes::UniqueAxisB) => Ok(MonoclinicPAxisB),
        (MonoclinicC, AltAxes::UniqueAxisB) => Ok(MonoclinicCAxisB),
        _ => Err(bad_tag()),
    }
}
