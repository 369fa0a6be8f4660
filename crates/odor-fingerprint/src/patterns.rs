//! Diccionario de patrones SMARTS para odorantes.
//!
//! - `SmartsPattern`: par (expresión SMARTS, etiqueta legible).
//! - `PatternSet`: diccionario ordenado e inmutable; la posición de cada
//!   patrón es su índice de columna en la matriz de fingerprints.
//! - `ODORANT_PATTERNS_ELIFE22`: el set por defecto de 42 patrones
//!   (Burton et al. 2022, eLife 11:e80470).

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt;

use crate::FingerprintError;

/// Par inmutable (expresión SMARTS, etiqueta legible). La identidad de un
/// patrón dentro de un set es su posición, no su contenido.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SmartsPattern {
    smarts: String,
    label: String,
}

impl SmartsPattern {
    pub fn new(smarts: impl Into<String>, label: impl Into<String>) -> Self {
        SmartsPattern { smarts: smarts.into(),
                        label: label.into() }
    }

    pub fn smarts(&self) -> &str {
        &self.smarts
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for SmartsPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.label, self.smarts)
    }
}

/// Diccionario ordenado e inmutable de patrones. Se construye una vez,
/// valida su forma al construirse y nunca se muta; quien quiera otro set de
/// columnas construye su propia instancia en vez de modificar la compartida.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternSet {
    patterns: Vec<SmartsPattern>,
    by_label: IndexMap<String, usize>,
    set_hash: String,
    provenance: serde_json::Value,
}

impl PatternSet {
    /// Crea un set a partir de un iterador ordenado de patrones.
    ///
    /// # Errores
    /// Retorna `FingerprintError::EmptySmarts` si alguna expresión está
    /// vacía y `FingerprintError::DuplicateLabel` si una etiqueta se repite.
    pub fn new<I>(patterns: I, provenance: serde_json::Value) -> Result<Self, FingerprintError>
        where I: IntoIterator<Item = SmartsPattern>
    {
        let patterns: Vec<SmartsPattern> = patterns.into_iter().collect();
        let mut by_label = IndexMap::with_capacity(patterns.len());
        for (index, pattern) in patterns.iter().enumerate() {
            if pattern.smarts().trim().is_empty() {
                return Err(FingerprintError::EmptySmarts { index });
            }
            if by_label.insert(pattern.label().to_string(), index).is_some() {
                return Err(FingerprintError::DuplicateLabel { label: pattern.label().to_string() });
            }
        }
        let set_hash = Self::calculate_set_hash(&patterns);
        Ok(PatternSet { patterns,
                        by_label,
                        set_hash,
                        provenance })
    }

    /// Crea un set a partir de pares `(índice, patrón)` en cualquier orden.
    /// Los índices deben ser densos y contiguos desde 0; cualquier hueco o
    /// repetición se rechaza aquí, antes de cualquier trabajo de matching.
    pub fn from_indexed<I>(entries: I, provenance: serde_json::Value) -> Result<Self, FingerprintError>
        where I: IntoIterator<Item = (usize, SmartsPattern)>
    {
        let mut ordered = BTreeMap::new();
        for (index, pattern) in entries {
            if ordered.insert(index, pattern).is_some() {
                return Err(FingerprintError::DuplicateIndex { index });
            }
        }
        for (position, index) in ordered.keys().enumerate() {
            if position != *index {
                return Err(FingerprintError::NonContiguousIndices { expected: position,
                                                                    found: *index });
            }
        }
        Self::new(ordered.into_values(), provenance)
    }

    /// Hash de la secuencia (expresión, etiqueta); identifica el set de
    /// columnas para la procedencia de las matrices derivadas.
    fn calculate_set_hash(patterns: &[SmartsPattern]) -> String {
        let mut hasher = Sha256::new();
        for pattern in patterns {
            hasher.update(pattern.smarts().as_bytes());
            hasher.update([0u8]);
            hasher.update(pattern.label().as_bytes());
            hasher.update([0u8]);
        }
        format!("{:x}", hasher.finalize())
    }

    // Getters
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SmartsPattern> {
        self.patterns.get(index)
    }

    /// Índice de columna de una etiqueta, si existe
    pub fn label_index(&self, label: &str) -> Option<usize> {
        self.by_label.get(label).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SmartsPattern> {
        self.patterns.iter()
    }

    /// Etiquetas en orden ascendente de índice (cabeceras de columna)
    pub fn labels(&self) -> Vec<String> {
        self.patterns.iter().map(|p| p.label().to_string()).collect()
    }

    pub fn set_hash(&self) -> &str {
        &self.set_hash
    }

    pub fn provenance(&self) -> &serde_json::Value {
        &self.provenance
    }

    pub fn is_equivalent(&self, other: &PatternSet) -> bool {
        self.set_hash == other.set_hash
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a SmartsPattern;
    type IntoIter = std::slice::Iter<'a, SmartsPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

impl fmt::Display for PatternSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let short = &self.set_hash[..self.set_hash.len().min(12)];
        write!(f, "PatternSet({} patterns, hash: {})", self.patterns.len(), short)
    }
}

/// Tabla de subestructuras de la figura de fingerprints de eLife 2022.
/// El orden define los índices de columna y no debe alterarse.
const ELIFE22_TABLE: [(&str, &str); 42] = [("*-C(=O)-[OH1]", "carboxylic acid"),
                                           ("[CH1]=O", "aldehyde"),
                                           ("C-C(=O)-[O]-C", "ester"),
                                           ("C-C(=O)-[S]-C", "thioester"),
                                           ("[!O&!S]-C(=O)-[!O&!S]", "ketone"),
                                           ("[OX2H][CX4&!$(C([OX2H])[O,S,#7,#15]),c]", "alcohol"),
                                           ("c1ccccc1", "benzyl"),
                                           ("C~C(~C)~C~C~C~C(~C)~C", "monoterpene"),
                                           ("[#8]1~[#6]~[#6]~[#6]~[#6]1", "furanoid"),
                                           ("o1cccc1", "furan"),
                                           ("[NH2][C]", "primary amine"),
                                           ("[NH](C)C", "secondary amine"),
                                           ("[NH0](C)(C)C", "tertiary amine"),
                                           ("[N,n]1~[C,c]~[C,c]~[C,c]~[C,c]~[C,c]1", "pyridine"),
                                           ("[n,N]1~[C,c]~[C,c]~[C,c]~[C,c]1", "pyrrole"),
                                           ("[N,n]1~[C,c]~[C,c]~[N,n]~[C,c]~[C,c]1", "pyrazine"),
                                           ("[#16]1~[#6]~[#7]~[#6]~[#6]1", "thiazoline"),
                                           ("[!#8]~C-S-C~[!#8]", "thioether"),
                                           ("[$(C-S-S-C),$(C-S-S-S-C)]", "sulfide"),
                                           ("[#6]-[SH]", "thiol"),
                                           ("[#6]=[#6]", "Alkene"),
                                           ("[#16]", "sulfur"),
                                           ("[#7]", "nitrogen"),
                                           ("[#8]", "oxygen"),
                                           ("[R]", "ring"),
                                           ("[CH3]-*-[CH2]-*", "terminal 4-bond chain"),
                                           ("*!@*@*!@*", "ortho-substituted ring"),
                                           ("*!@*@*@*!@*", "meta-substituted rings"),
                                           ("*1(!@*)@*@*@*(!@*)@*@*@1", "para-substituted 6-ring\n(but not fused ring)"),
                                           ("C~C(~C)~[R1]1~[R1]~[R1]~[R1](~C)~[R1]~[R1]~1", "menthane scaffold"),
                                           ("C~C(~C)~2~[R2]1~[R2]~2~[R1]~[R1](~C)~[R1]~[R1]~1", "carene scaffold"),
                                           ("C~C(~C)~[R2]12~[R1]~[R2]~2~[R1](~C)~[R1]~[R1]~1", "thujane scaffold"),
                                           ("C~C2(~C)~[R]1~[R]~[R]~2~[R](~C)~[R]~[R]~1", "pinane scaffold"),
                                           ("[!H]~[!H]2(~[!H])~[R]1~[R]~[R]~[R](~[!H])~2~[R]~[R]~1", "camphane scaffold"),
                                           ("[!H]~[!H]2(~[!H])~[R]~[R](~[!H])1~[R]~[R]~2~[R]~[R]~1", "fenchane scaffold"),
                                           ("C(-C)(-C)(-C)-C", "quadra C"),
                                           ("C-C-C-C-C-C", "six C single bond"),
                                           ("C-C-C-C-C-C-C", "seven C single bond"),
                                           ("C-C-C-C-C-C-C-C", "eight C single bond"),
                                           ("C-C-C-C-C-C-C-C-C", "nine C single bond"),
                                           ("C-C-C-C-C-C-C-C-C-C", "ten C single bond"),
                                           ("C-C-C-C-C-C-C-C-C-C-C", "eleven C single bond")];

/// Set por defecto, evaluado una sola vez y compartido en modo solo lectura.
pub static ODORANT_PATTERNS_ELIFE22: Lazy<PatternSet> = Lazy::new(|| {
    let patterns = ELIFE22_TABLE.iter().map(|(smarts, label)| SmartsPattern::new(*smarts, *label));
    let provenance = serde_json::json!({
        "source": "Burton et al. (2022), eLife 11:e80470",
        "doi": "10.7554/eLife.80470",
        "set": "elife22",
    });
    PatternSet::new(patterns, provenance).expect("builtin elife22 pattern table is well formed")
});
