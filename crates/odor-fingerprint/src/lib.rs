//! Fingerprints binarios de subestructuras para odorantes.
//!
//! Este crate es el núcleo de cálculo:
//! - Expone `patterns` con el diccionario SMARTS (el set por defecto
//!   `ODORANT_PATTERNS_ELIFE22` tiene 42 patrones de química de odorantes).
//! - Expone `engine` con la frontera hacia el toolkit externo que compila
//!   SMARTS y resuelve el matching de subestructuras.
//! - Expone `compiled` y `matrix` para compilar un set una sola vez y
//!   producir matrices densas (moléculas × patrones) con soporte de valores
//!   faltantes (NaN para entradas inválidas).
//!
//! El parseo de moléculas y la persistencia de la matriz quedan fuera: las
//! moléculas llegan ya construidas (`odor_domain`) y la matriz pertenece al
//! llamador.

pub mod compiled;
pub mod engine;
pub mod errors;
pub mod matrix;
pub mod patterns;

pub use compiled::CompiledPatterns;
pub use engine::mock::MockSubstructureEngine;
pub use engine::SubstructureEngine;
pub use errors::FingerprintError;
pub use matrix::{FingerprintMatrix, MISSING};
pub use patterns::{PatternSet, SmartsPattern, ODORANT_PATTERNS_ELIFE22};

#[cfg(feature = "rdkit")]
pub use engine::rdkit::{RdkitEngine, RdkitError};

use odor_domain::MoleculeSet;

/// Fingerprint del lote contra el set por defecto elife22: compila el set
/// con el motor dado y calcula la matriz en una sola llamada.
pub fn fingerprint_molecules<E>(engine: &E, set: &MoleculeSet) -> Result<FingerprintMatrix, FingerprintError>
    where E: SubstructureEngine
{
    ODORANT_PATTERNS_ELIFE22.compile(engine)?.fingerprint(set)
}
