/* ************************************************************************ **
** This file is part of qecell, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

#[macro_use] extern crate pretty_assertions;

#[path = "shared/cells.rs"]
mod cells;

use std::collections::BTreeMap;
use log::Level;

use qecell_lattice::{BravaisIndex, CellDm, Collector, Error, LatticeVectors, Settings, Silent};
use qecell_lattice::{celldm_from_cell, ibrav_from_cell, lattice_from_celldm, qe_ibrav, Precision};

#[test]
fn claimed_index_does_not_fit() {
    let cell = cells::representative_cell(BravaisIndex::Hexagonal);
    let diag = Collector::new();

    match celldm_from_cell(&cell, 1, None, &Settings::default(), &diag) {
        Err(Error::RoundTripMismatch { ibrav, max_deviation }) => {
            assert_eq!(ibrav, BravaisIndex::CubicP);
            assert!(max_deviation > 1.0);
        },
        other => panic!("expected a mismatch, got {:?}", other),
    }
    assert_eq!(diag.at_least(Level::Error).len(), 1);
}

#[test]
fn right_lattice_wrong_setting() {
    // a trigonal cell in the 3-fold-along-z setting, claimed to be in the (111) setting
    let cell = cells::representative_cell(BravaisIndex::TrigonalR);
    let result = celldm_from_cell(&cell, 5, Some("3fold-111"), &Settings::default(), &Silent);
    match result {
        Err(Error::RoundTripMismatch { ibrav: BravaisIndex::TrigonalR111, .. }) => {},
        other => panic!("expected a mismatch, got {:?}", other),
    }
}

#[test]
fn bad_schema_values() {
    assert_eq!(qe_ibrav(15, None), Err(Error::BadSchemaIndex { value: 15 }));
    assert_eq!(qe_ibrav(-1, None), Err(Error::BadSchemaIndex { value: -1 }));
    assert_eq!(
        qe_ibrav(1, Some("3fold-111")),
        Err(Error::BadAltAxes { bravais_index: 1, tag: "3fold-111".to_string() }),
    );
    assert_eq!(BravaisIndex::from_i32(-7), Err(Error::BadBravaisIndex { value: -7 }));
}

#[test]
fn bad_celldm() {
    let celldm = |values: [f64; 6]| CellDm(values);

    match lattice_from_celldm(BravaisIndex::CubicF, &celldm([-1.0, 0.0, 0.0, 0.0, 0.0, 0.0])) {
        Err(Error::InvalidCellDm { slot: 1, value, .. }) => assert_eq!(value, -1.0),
        other => panic!("{:?}", other),
    }
    match lattice_from_celldm(BravaisIndex::MonoclinicP, &celldm([1.0, 1.0, 1.0, 1.5, 0.0, 0.0])) {
        Err(Error::InvalidCellDm { slot: 4, .. }) => {},
        other => panic!("{:?}", other),
    }
    assert_eq!(
        lattice_from_celldm(BravaisIndex::Free, &celldm([1.0, 0.0, 0.0, 0.0, 0.0, 0.0])),
        Err(Error::NotGenerable { ibrav: BravaisIndex::Free }),
    );
}

#[test]
fn bad_cells() {
    let mut map = BTreeMap::new();
    map.insert("a1", vec![1.0, 0.0, 0.0]);
    map.insert("a3", vec![0.0, 0.0, 1.0]);
    assert_eq!(LatticeVectors::from_mapping(&map), Err(Error::MissingVector { key: "a2" }));

    map.insert("a2", vec![0.0, 1.0, 0.0, 0.0]);
    assert_eq!(LatticeVectors::from_mapping(&map), Err(Error::BadVectorLength { key: "a2", len: 4 }));

    let flat = cells::diagonal(1.0, 1.0, 0.0);
    assert_eq!(
        celldm_from_cell(&flat, 6, None, &Settings::default(), &Silent),
        Err(Error::DegenerateCell { index: 3 }),
    );

    // degenerate cells are rejected before classification too
    let zero = cells::diagonal(0.0, 0.0, 0.0);
    assert_eq!(ibrav_from_cell(&zero, Precision::CLASSIFY, &Silent), Err(Error::DegenerateCell { index: 1 }));
    let missing_b = cells::diagonal(1.0, 0.0, 1.0);
    assert_eq!(ibrav_from_cell(&missing_b, Precision::CLASSIFY, &Silent), Err(Error::DegenerateCell { index: 2 }));

    map.insert("a2", vec![0.0, ::std::f64::INFINITY, 0.0]);
    assert_eq!(LatticeVectors::from_mapping(&map), Err(Error::NonFiniteVector { index: 2 }));
}

#[test]
fn error_messages() {
    let message = Error::RoundTripMismatch { ibrav: BravaisIndex::OrthorhombicA, max_deviation: 0.25 }.to_string();
    assert!(message.contains("ibrav = 91"), "{}", message);

    let message = Error::BadAltAxes { bravais_index: 4, tag: "3fold-111".into() }.to_string();
    assert!(message.contains("3fold-111") && message.contains('4'), "{}", message);
}
