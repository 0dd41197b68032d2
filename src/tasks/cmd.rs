/* ************************************************************************ **
** This file is part of qecell, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use crate::config::Input;

use qecell_lattice::{
    Abc, BravaisIndex, CellDm, LatticeVectors, LogDiagnostics, Settings, V3,
    abc_from_cell, celldm_for_ibrav, celldm_from_cell, lattice_from_celldm,
};

/// Result of `qecell-ibrav`.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct IbravOutput {
    /// Signed index, as used in `pw.x` input.
    pub ibrav: i32,
    /// The same index as written in the XML schema.
    pub bravais_index: u8,
    pub alt_axes: Option<String>,
    pub celldm: CellDm,
    /// Lengths in Angstrom.
    pub abc: Abc,
}

/// Lattice vectors, in the same layout as the `cell` of an [`Input`].
///
/// [`Input`]: struct.Input.html
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct CellOutput {
    pub a1: V3,
    pub a2: V3,
    pub a3: V3,
}

impl From<LatticeVectors> for CellOutput {
    fn from(vectors: LatticeVectors) -> Self {
        let &[a1, a2, a3] = vectors.matrix();
        CellOutput { a1, a2, a3 }
    }
}

/// Determine `(ibrav, celldm)` of the cell in `input`.
///
/// If the input names a Bravais index, that index is used; otherwise the cell is
/// classified. Either way, the celldm must reproduce the cell.
pub fn run_ibrav(input: &Input, settings: &Settings) -> FailResult<IbravOutput> {
    settings.validate()?;
    let vectors = LatticeVectors::from_mapping(&input.cell)?;
    let diag = LogDiagnostics::default();

    let (ibrav, celldm, abc) = match input.bravais_index {
        Some(index) => {
            let alt_axes = input.alt_axes.as_ref().map(|s| &s[..]);
            let (ibrav, celldm) = celldm_from_cell(&vectors, index, alt_axes, settings, &diag)?;
            let abc = Abc::from_vectors(&vectors).to_angstrom_report(settings.report_digits);
            (ibrav, celldm, abc)
        },
        None => {
            if let Some(tag) = &input.alt_axes {
                bail!("'alt-axes: {}' was given without 'bravais-index'", tag);
            }
            let (ibrav, abc) = abc_from_cell(&vectors, settings.precision(), settings.report_digits, &diag)?;
            info!("Classified cell as ibrav = {} ({})", ibrav, ibrav.description());
            let celldm = celldm_for_ibrav(ibrav, &vectors, settings, &diag)?;
            (ibrav, celldm, abc)
        },
    };

    let (bravais_index, alt_axes) = ibrav.schema_form();
    Ok(IbravOutput {
        ibrav: ibrav.to_i32(),
        bravais_index,
        alt_axes: alt_axes.map(|tag| tag.to_string()),
        celldm,
        abc,
    })
}

/// Build the lattice vectors of `(ibrav, celldm)`.
pub fn run_latgen(ibrav: i32, celldm: &[f64]) -> FailResult<CellOutput> {
    let ibrav = BravaisIndex::from_i32(ibrav)?;
    if celldm.len() > 6 {
        bail!("expected at most 6 celldm values, got {}", celldm.len());
    }

    let mut full = CellDm::default();
    full.0[..celldm.len()].copy_from_slice(celldm);
    debug!("ibrav = {} ({}), celldm = [{}]", ibrav, ibrav.description(), full);

    Ok(lattice_from_celldm(ibrav, &full)?.into())
}
