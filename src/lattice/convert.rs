/* ************************************************************************ **
** This file is part of qecell, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Conversions between lattice vectors and `(ibrav, celldm)`.

use crate::{Error, Result};
use crate::BravaisIndex;
use crate::bravais::qe_ibrav;
use crate::cell::{Abc, LatticeVectors};
use crate::celldm::{CellDm, celldm_from_vectors};
use crate::classify::{classify, Candidates};
use crate::compare::check_round_trip;
use crate::diagnostics::Diagnostics;
use crate::latgen::lattice_from_celldm;
use crate::tol::{Precision, Rounding, MAX_DIGITS};

/// Numeric knobs of the conversions.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-support", serde(rename_all = "kebab-case"))]
#[cfg_attr(feature = "serde-support", serde(default))]
pub struct Settings {
    /// Decimal digits of the classification tolerance.
    pub classify_digits: u32,
    /// Decimal digits kept when comparing a regenerated cell to the input.
    pub compare_digits: u32,
    /// Decimal digits of the `Abc` report.
    pub report_digits: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            classify_digits: Precision::CLASSIFY.0,
            compare_digits: 5,
            report_digits: 5,
        }
    }
}

impl Settings {
    pub fn precision(&self) -> Precision { Precision(self.classify_digits) }
    pub fn rounding(&self) -> Rounding { Rounding(self.compare_digits) }

    /// Reject digit counts beyond [`MAX_DIGITS`].
    ///
    /// [`MAX_DIGITS`]: constant.MAX_DIGITS.html
    pub fn validate(&self) -> Result<()> {
        check_digits("classify-digits", self.classify_digits)?;
        check_digits("compare-digits", self.compare_digits)?;
        check_digits("report-digits", self.report_digits)?;
        Ok(())
    }
}

fn check_digits(name: &'static str, value: u32) -> Result<()> {
    match value {
        v if v <= MAX_DIGITS => Ok(()),
        _ => Err(Error::TooManyDigits { name, value, max: MAX_DIGITS }),
    }
}

/// Determine the Bravais index of a cell from its vectors.
///
/// Cells that fit no rule are triclinic; only degenerate cells are an error.
/// The result depends on the order of the vectors.
pub fn ibrav_from_cell(vectors: &LatticeVectors, precision: Precision, diag: &dyn Diagnostics) -> Result<BravaisIndex> {
    check_digits("classify-digits", precision.0)?;
    vectors.check_nondegenerate()?;

    let abc = Abc::from_vectors(vectors);
    Ok(ibrav_from_abc(vectors, &abc, precision, diag))
}

fn ibrav_from_abc(vectors: &LatticeVectors, abc: &Abc, precision: Precision, diag: &dyn Diagnostics) -> BravaisIndex {
    let tol = precision.tol();
    let candidates = classify(abc, tol);
    diag.debug(format_args!("candidates: {:?} (tolerance {:e})", candidates.indices(), tol.0));

    let ibrav = candidates.resolve(vectors, tol);
    if ibrav == BravaisIndex::Triclinic {
        diag.info(format_args!("no lattice rule matched; treating the cell as triclinic (ibrav = {})", ibrav));
    } else if candidates != Candidates::Unique(ibrav) {
        diag.debug(format_args!("resolved to ibrav = {}", ibrav));
    }
    ibrav
}

/// Classify the cell and report its lengths (in Angstrom) and cosines.
///
/// The vectors are expected in Bohr.
pub fn abc_from_cell(
    vectors: &LatticeVectors,
    precision: Precision,
    report_digits: u32,
    diag: &dyn Diagnostics,
) -> Result<(BravaisIndex, Abc)> {
    check_digits("classify-digits", precision.0)?;
    check_digits("report-digits", report_digits)?;
    vectors.check_nondegenerate()?;

    let abc = Abc::from_vectors(vectors);
    let ibrav = ibrav_from_abc(vectors, &abc, precision, diag);
    Ok((ibrav, abc.to_angstrom_report(report_digits)))
}

/// Compute the celldm of a cell whose Bravais index is already known.
///
/// `bravais_index` and `alt_axes` are interpreted as in the XML schema (see
/// [`qe_ibrav`]). Unless the index is 0, the celldm is used to rebuild the
/// cell, which must reproduce `vectors` at `settings.compare_digits`.
///
/// [`qe_ibrav`]: fn.qe_ibrav.html
pub fn celldm_from_cell(
    vectors: &LatticeVectors,
    bravais_index: i32,
    alt_axes: Option<&str>,
    settings: &Settings,
    diag: &dyn Diagnostics,
) -> Result<(BravaisIndex, CellDm)> {
    let ibrav = qe_ibrav(bravais_index, alt_axes)?;
    let celldm = celldm_for_ibrav(ibrav, vectors, settings, diag)?;
    Ok((ibrav, celldm))
}

/// Like [`celldm_from_cell`], but with an index that has already been decoded.
///
/// [`celldm_from_cell`]: fn.celldm_from_cell.html
pub fn celldm_for_ibrav(
    ibrav: BravaisIndex,
    vectors: &LatticeVectors,
    settings: &Settings,
    diag: &dyn Diagnostics,
) -> Result<CellDm> {
    settings.validate()?;
    vectors.check_nondegenerate()?;

    let celldm = celldm_from_vectors(ibrav, vectors);
    diag.debug(format_args!("ibrav = {}: celldm = [{}]", ibrav, celldm));

    if ibrav != BravaisIndex::Free {
        check_round_trip(ibrav, vectors, &celldm, settings.rounding(), diag)?;
    }
    Ok(celldm)
}

/// Lengths (in the units of `celldm(1)`) and cosines of a cell given by celldm.
pub fn abc_from_celldm(ibrav: BravaisIndex, celldm: &CellDm) -> Result<Abc> {
    let vectors = lattice_from_celldm(ibrav, celldm)?;
    Ok(Abc::from_vectors(&vectors))
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use crate::diagnostics::{Collector, Silent};
    use log::Level;

    #[test]
    fn default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.precision(), Precision(6));
        assert_eq!(settings.rounding(), Rounding(5));
        assert_eq!(settings.report_digits, 5);
    }

    #[test]
    fn fallback_is_reported() {
        // no rule for distinct lengths with only cos(a2, a3) nonzero
        let cell = LatticeVectors::new([[2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.5, 4.0]]);
        let diag = Collector::new();
        assert_eq!(ibrav_from_cell(&cell, Precision::CLASSIFY, &diag), Ok(BravaisIndex::Triclinic));
        assert_eq!(diag.at_least(Level::Info).len(), 1);

        // rejected by the face-centered resolver
        let cell = LatticeVectors::new([[2.0, 0.0, 0.0], [0.5, 3.0, 0.0], [0.7, 0.2, 4.0]]);
        let diag = Collector::new();
        assert_eq!(ibrav_from_cell(&cell, Precision::CLASSIFY, &diag), Ok(BravaisIndex::Triclinic));
        assert_eq!(diag.at_least(Level::Info).len(), 1);

        let cubic = LatticeVectors::new([[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]]);
        let diag = Collector::new();
        assert_eq!(ibrav_from_cell(&cubic, Precision::CLASSIFY, &diag), Ok(BravaisIndex::CubicP));
        assert_eq!(diag.at_least(Level::Info).len(), 0);
    }

    #[test]
    fn abc_report_is_in_angstrom() {
        let cell = LatticeVectors::new([[10.0, 0.0, 0.0], [0.0, 10.0, 0.0], [0.0, 0.0, 10.0]]);
        let (ibrav, abc) = abc_from_cell(&cell, Precision::CLASSIFY, 5, &Silent).unwrap();
        assert_eq!(ibrav, BravaisIndex::CubicP);
        assert_eq!(abc.a, 5.29177);
        assert_eq!(abc.c, abc.a);
        assert_eq!(abc.cos_ab, 0.0);
    }

    #[test]
    fn celldm_of_claimed_index() {
        let cell = lattice_from_celldm(BravaisIndex::TetragonalI, &CellDm([3.0, 0.0, 1.5, 0.0, 0.0, 0.0])).unwrap();
        let (ibrav, celldm) = celldm_from_cell(&cell, 7, None, &Settings::default(), &Silent).unwrap();
        assert_eq!(ibrav, BravaisIndex::TetragonalI);
        assert_close!(abs=1e-12, celldm, CellDm([3.0, 0.0, 1.5, 0.0, 0.0, 0.0]));
    }

    #[test]
    fn free_lattice_skips_validation() {
        let cell = LatticeVectors::new([[2.0, 0.0, 0.0], [0.5, 3.0, 0.0], [0.7, 0.2, 4.0]]);
        let (ibrav, celldm) = celldm_from_cell(&cell, 0, None, &Settings::default(), &Silent).unwrap();
        assert_eq!(ibrav, BravaisIndex::Free);
        assert_eq!(celldm, CellDm([2.0, 0.0, 0.0, 0.0, 0.0, 0.0]));
    }

    #[test]
    fn errors_propagate() {
        let cell = LatticeVectors::new([[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]]);
        let settings = Settings::default();
        assert_eq!(
            celldm_from_cell(&cell, 15, None, &settings, &Silent),
            Err(Error::BadSchemaIndex { value: 15 }),
        );
        assert_eq!(
            celldm_from_cell(&cell, 1, Some("3fold-111"), &settings, &Silent),
            Err(Error::BadAltAxes { bravais_index: 1, tag: "3fold-111".into() }),
        );

        let flat = LatticeVectors::new([[2.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 2.0]]);
        assert_eq!(
            celldm_from_cell(&flat, 8, None, &settings, &Silent),
            Err(Error::DegenerateCell { index: 2 }),
        );
    }

    #[test]
    fn degenerate_cells_are_not_classified() {
        let zero = LatticeVectors::new([[0.0; 3]; 3]);
        assert_eq!(ibrav_from_cell(&zero, Precision::CLASSIFY, &Silent), Err(Error::DegenerateCell { index: 1 }));

        // a = c with a zero-length a2 would otherwise look monoclinic
        let flat = LatticeVectors::new([[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        assert_eq!(ibrav_from_cell(&flat, Precision::CLASSIFY, &Silent), Err(Error::DegenerateCell { index: 2 }));
        assert_eq!(
            abc_from_cell(&flat, Precision::CLASSIFY, 5, &Silent),
            Err(Error::DegenerateCell { index: 2 }),
        );

        let infinite = LatticeVectors::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, ::std::f64::INFINITY]]);
        assert_eq!(ibrav_from_cell(&infinite, Precision::CLASSIFY, &Silent), Err(Error::NonFiniteVector { index: 3 }));
    }

    #[test]
    fn digit_counts_are_bounded() {
        let cell = LatticeVectors::new([[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]]);
        let settings = Settings { classify_digits: 2_147_483_648, ..Settings::default() };
        assert_eq!(
            settings.validate(),
            Err(Error::TooManyDigits { name: "classify-digits", value: 2_147_483_648, max: MAX_DIGITS }),
        );
        assert!(ibrav_from_cell(&cell, settings.precision(), &Silent).is_err());

        let settings = Settings { compare_digits: 309, ..Settings::default() };
        assert_eq!(
            celldm_from_cell(&cell, 1, None, &settings, &Silent),
            Err(Error::TooManyDigits { name: "compare-digits", value: 309, max: MAX_DIGITS }),
        );
        assert!(abc_from_cell(&cell, Precision::CLASSIFY, 16, &Silent).is_err());

        let settings = Settings { classify_digits: 15, compare_digits: 15, report_digits: 15 };
        assert_eq!(settings.validate(), Ok(()));
    }

    #[test]
    fn abc_of_celldm() {
        let abc = abc_from_celldm(BravaisIndex::Hexagonal, &CellDm([2.0, 0.0, 1.6, 0.0, 0.0, 0.0])).unwrap();
        assert_close!(abs=1e-12, abc.to_array(), [2.0, 2.0, 3.2, -0.5, 0.0, 0.0]);
        assert!(abc_from_celldm(BravaisIndex::Free, &CellDm::default()).is_err());
    }
}
