//! Escenarios contra el set por defecto de 42 patrones. La química la
//! responde el motor (aquí el mock declara los matches conocidos de cada
//! molécula); lo que se verifica es la correspondencia columna-patrón y el
//! manejo de entradas inválidas del computador de fingerprints.

use odor_domain::{Molecule, MoleculeEntry, MoleculeSet};
use odor_fingerprint::{fingerprint_molecules, MockSubstructureEngine, ODORANT_PATTERNS_ELIFE22};
use serde_json::json;

/// Mock con la química declarada: etanol tiene hidroxilo sobre carbono
/// saturado y un oxígeno; benceno tiene anillo aromático de seis carbonos.
fn odorant_chemistry() -> MockSubstructureEngine {
    let set = &*ODORANT_PATTERNS_ELIFE22;
    let smarts_of = |label: &str| set.get(set.label_index(label).unwrap()).unwrap().smarts().to_string();

    MockSubstructureEngine::new().with_match(&smarts_of("alcohol"), "CCO")
                                 .with_match(&smarts_of("oxygen"), "CCO")
                                 .with_match(&smarts_of("benzyl"), "c1ccccc1")
                                 .with_match(&smarts_of("ring"), "c1ccccc1")
}

#[test]
fn ethanol_against_default_set() {
    let engine = odorant_chemistry();
    let batch = MoleculeSet::new(vec![Molecule::named("CCO", "ethanol").unwrap().into()], json!({}));
    let matrix = fingerprint_molecules(&engine, &batch).unwrap();

    assert_eq!(matrix.shape(), (1, 42));
    assert_eq!(matrix.get(0, 5), Some(1.0)); // alcohol
    assert_eq!(matrix.get(0, 23), Some(1.0)); // oxygen
    assert_eq!(matrix.get(0, 21), Some(0.0)); // sulfur
    assert_eq!(matrix.get(0, 22), Some(0.0)); // nitrogen
    assert_eq!(matrix.get(0, 24), Some(0.0)); // ring
    // Sin anillos: ningún patrón aromático ni de scaffold puede estar presente
    for aromatic_or_scaffold in [6, 8, 9, 13, 14, 15, 16, 26, 27, 28, 29, 30, 31, 32, 33, 34] {
        assert_eq!(matrix.get(0, aromatic_or_scaffold), Some(0.0), "column {} should be absent", aromatic_or_scaffold);
    }
}

#[test]
fn benzene_against_default_set() {
    let engine = odorant_chemistry();
    let batch = MoleculeSet::new(vec![Molecule::named("c1ccccc1", "benzene").unwrap().into()], json!({}));
    let matrix = fingerprint_molecules(&engine, &batch).unwrap();

    assert_eq!(matrix.get(0, 6), Some(1.0)); // benzyl
    assert_eq!(matrix.get(0, 24), Some(1.0)); // ring
    assert_eq!(matrix.get(0, 23), Some(0.0)); // oxygen
    assert_eq!(matrix.get(0, 5), Some(0.0)); // alcohol
}

#[test]
fn second_entry_invalid_gets_missing_row() {
    let engine = odorant_chemistry();
    let batch = MoleculeSet::new(vec![Molecule::named("CCO", "ethanol").unwrap().into(),
                                      MoleculeEntry::Invalid],
                                 json!({}));
    let matrix = fingerprint_molecules(&engine, &batch).unwrap();

    assert_eq!(matrix.shape(), (2, 42));
    assert!(matrix.row(0).unwrap().iter().all(|v| !v.is_nan()));
    assert!(matrix.row(1).unwrap().iter().all(|v| v.is_nan()));
}

#[test]
fn column_labels_follow_default_set() {
    let engine = odorant_chemistry();
    let batch = MoleculeSet::new(vec![], json!({}));
    let matrix = fingerprint_molecules(&engine, &batch).unwrap();

    let labels = matrix.column_labels();
    assert_eq!(labels.len(), 42);
    assert_eq!(labels[0], "carboxylic acid");
    assert_eq!(labels[5], "alcohol");
    assert_eq!(labels[41], "eleven C single bond");
}
