//! Compilación única de un `PatternSet` y cálculo de la matriz.
//!
//! - `PatternSet::compile` valida y compila cada expresión exactamente una
//!   vez, fallando con el índice del patrón ofensivo antes de cualquier
//!   matching.
//! - `CompiledPatterns::fingerprint` produce la matriz completa (una fila
//!   por entrada, una columna por patrón en orden ascendente de índice).
//! - Las filas son independientes entre sí; `fingerprint_parallel` las
//!   reparte con rayon compartiendo las consultas en modo solo lectura.

use rayon::prelude::*;

use odor_domain::{MoleculeEntry, MoleculeSet};

use crate::engine::SubstructureEngine;
use crate::errors::FingerprintError;
use crate::matrix::{FingerprintMatrix, MISSING};
use crate::patterns::PatternSet;

impl PatternSet {
    /// Compila cada patrón del set con el motor dado, en orden de índice.
    ///
    /// # Errores
    /// Retorna `FingerprintError::PatternCompilation` con índice, etiqueta y
    /// expresión del primer patrón que el motor rechace.
    pub fn compile<'e, E>(&self, engine: &'e E) -> Result<CompiledPatterns<'e, E>, FingerprintError>
        where E: SubstructureEngine
    {
        let mut queries = Vec::with_capacity(self.len());
        for (index, pattern) in self.iter().enumerate() {
            let query = engine.compile(pattern.smarts()).map_err(|e| {
                                                            FingerprintError::PatternCompilation {
                            index,
                            label: pattern.label().to_string(),
                            smarts: pattern.smarts().to_string(),
                            reason: e.to_string(),
                        }
                                                        })?;
            queries.push(query);
        }
        Ok(CompiledPatterns { engine,
                              source: self.clone(),
                              queries })
    }
}

/// Producto inmutable de `PatternSet::compile`: el set origen más una
/// consulta compilada por patrón, ligadas al motor que las compiló. Se
/// comparte en modo solo lectura entre llamadas y entre hilos.
#[derive(Debug)]
pub struct CompiledPatterns<'e, E: SubstructureEngine> {
    engine: &'e E,
    source: PatternSet,
    queries: Vec<E::Query>,
}

impl<'e, E: SubstructureEngine> CompiledPatterns<'e, E> {
    pub fn engine(&self) -> &E {
        self.engine
    }

    pub fn source(&self) -> &PatternSet {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// Fila para una entrada: marcadores faltantes si es inválida (sin
    /// consultar ningún patrón), presencia/ausencia en caso contrario.
    fn row_for(&self, entry: &MoleculeEntry) -> Result<Vec<f64>, FingerprintError> {
        let molecule = match entry {
            MoleculeEntry::Invalid => return Ok(vec![MISSING; self.queries.len()]),
            MoleculeEntry::Valid(molecule) => molecule,
        };
        let mut row = vec![0.0; self.queries.len()];
        for (cell, query) in row.iter_mut().zip(&self.queries) {
            let hit = self.engine
                          .has_match(molecule, query)
                          .map_err(|e| FingerprintError::Engine(e.to_string()))?;
            if hit {
                *cell = 1.0;
            }
        }
        Ok(row)
    }

    /// Calcula la matriz completa, fila por fila en el orden del lote.
    /// O se retorna la matriz entera o el primer fallo atribuido al motor;
    /// nunca un resultado parcial.
    pub fn fingerprint(&self, set: &MoleculeSet) -> Result<FingerprintMatrix, FingerprintError> {
        let mut rows = Vec::with_capacity(set.len());
        for entry in set {
            rows.push(self.row_for(entry)?);
        }
        Ok(self.assemble(set, rows))
    }

    /// Variante paralela por filas; produce una matriz bit a bit idéntica a
    /// la de `fingerprint`.
    pub fn fingerprint_parallel(&self, set: &MoleculeSet) -> Result<FingerprintMatrix, FingerprintError>
        where E: Sync,
              E::Query: Sync
    {
        let rows = set.entries()
                      .par_iter()
                      .map(|entry| self.row_for(entry))
                      .collect::<Result<Vec<_>, _>>()?;
        Ok(self.assemble(set, rows))
    }

    fn assemble(&self, set: &MoleculeSet, rows: Vec<Vec<f64>>) -> FingerprintMatrix {
        let provenance = serde_json::json!({
            "engine": self.engine.name(),
            "engine_version": self.engine.version(),
            "pattern_set_hash": self.source.set_hash(),
            "molecule_set_hash": set.set_hash(),
        });
        FingerprintMatrix::from_rows(rows, self.queries.len(), self.source.labels(), provenance)
    }
}
