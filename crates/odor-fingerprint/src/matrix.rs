//! Matriz densa de fingerprints (moléculas × patrones).
//!
//! Cada celda vale `1.0` (subestructura presente), `0.0` (ausente) o
//! `MISSING` (NaN, fila completa de una entrada inválida). La matriz se crea
//! completa en cada llamada y pertenece al llamador; no hay estado
//! compartido entre cálculos.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marcador de valor faltante: "desconocido", no "ausente".
pub const MISSING: f64 = f64::NAN;

const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FingerprintMatrix {
    n_molecules: usize,
    n_patterns: usize,
    values: Vec<f64>, // row-major, n_molecules * n_patterns
    column_labels: Vec<String>,
    provenance: serde_json::Value,
    schema_version: u32,
}

impl FingerprintMatrix {
    pub(crate) fn from_rows(rows: Vec<Vec<f64>>,
                            n_patterns: usize,
                            column_labels: Vec<String>,
                            provenance: serde_json::Value)
                            -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == n_patterns));
        debug_assert_eq!(column_labels.len(), n_patterns);
        let n_molecules = rows.len();
        let mut values = Vec::with_capacity(n_molecules * n_patterns);
        for row in rows {
            values.extend(row);
        }
        FingerprintMatrix { n_molecules,
                            n_patterns,
                            values,
                            column_labels,
                            provenance,
                            schema_version: SCHEMA_VERSION }
    }

    /// (filas, columnas) = (moléculas, patrones)
    pub fn shape(&self) -> (usize, usize) {
        (self.n_molecules, self.n_patterns)
    }

    pub fn n_molecules(&self) -> usize {
        self.n_molecules
    }

    pub fn n_patterns(&self) -> usize {
        self.n_patterns
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.n_molecules || col >= self.n_patterns {
            return None;
        }
        Some(self.values[row * self.n_patterns + col])
    }

    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.n_molecules {
            return None;
        }
        let start = row * self.n_patterns;
        Some(&self.values[start..start + self.n_patterns])
    }

    /// Indica si la celda existe y es el marcador faltante
    pub fn is_missing(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(f64::is_nan)
    }

    /// Valores en orden row-major
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Etiquetas de columna en orden ascendente de índice de patrón
    pub fn column_labels(&self) -> &[String] {
        &self.column_labels
    }

    pub fn provenance(&self) -> &serde_json::Value {
        &self.provenance
    }

    pub fn schema_version(&self) -> u32 {
        self.schema_version
    }
}

// Igualdad bit a bit de los valores: NaN == NaN por patrón de bits, así dos
// corridas idénticas producen matrices iguales aun con filas faltantes.
impl PartialEq for FingerprintMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.n_molecules == other.n_molecules
        && self.n_patterns == other.n_patterns
        && self.column_labels == other.column_labels
        && self.provenance == other.provenance
        && self.schema_version == other.schema_version
        && self.values.len() == other.values.len()
        && self.values.iter().zip(&other.values).all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl fmt::Display for FingerprintMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FingerprintMatrix({} x {})", self.n_molecules, self.n_patterns)
    }
}
