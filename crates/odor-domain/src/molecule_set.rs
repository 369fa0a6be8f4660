// molecule_set.rs
use crate::MoleculeEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use uuid::Uuid;

/// Representa un lote ordenado e inmutable de entradas de moléculas con
/// metadatos y verificación de integridad mediante hash. Es la unidad de
/// entrada del cálculo de fingerprints: cada entrada produce exactamente una
/// fila de la matriz, en el mismo orden del lote.
///
/// A diferencia de una familia curada, el lote es posicional: admite
/// duplicados, entradas inválidas en cualquier posición y el lote vacío
/// (que produce una matriz de cero filas).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoleculeSet {
    id: Uuid,
    name: Option<String>,
    set_hash: String,
    provenance: serde_json::Value,
    created_at: DateTime<Utc>,
    entries: Vec<MoleculeEntry>,
}

impl MoleculeSet {
    /// Crea un nuevo lote a partir de un iterador de entradas
    ///
    /// # Argumentos
    /// * `entries` - Entradas en el orden de las filas de salida
    /// * `provenance` - Metadatos sobre el origen del lote
    pub fn new<I>(entries: I, provenance: serde_json::Value) -> Self
        where I: IntoIterator<Item = MoleculeEntry>
    {
        let entries: Vec<MoleculeEntry> = entries.into_iter().collect();
        let set_hash = Self::calculate_set_hash(&entries);
        MoleculeSet { id: Uuid::new_v4(),
                      name: None,
                      set_hash,
                      provenance,
                      created_at: Utc::now(),
                      entries }
    }

    /// Calcula el hash del lote sobre la secuencia de entradas. El hash es
    /// sensible al orden y distingue entradas inválidas de las válidas.
    fn calculate_set_hash(entries: &[MoleculeEntry]) -> String {
        let mut hasher = Sha256::new();
        for entry in entries {
            match entry {
                MoleculeEntry::Valid(molecule) => {
                    hasher.update([1u8]);
                    hasher.update(molecule.smiles().as_bytes());
                }
                MoleculeEntry::Invalid => hasher.update([0u8]),
            }
        }
        format!("{:x}", hasher.finalize())
    }

    /// Crea una nueva instancia con nombre modificado
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        let mut new_set = self.clone();
        new_set.name = Some(name.into());
        new_set.id = Uuid::new_v4(); // Nuevo ID para la nueva versión
        new_set
    }

    /// Verifica la integridad del lote recalculando y comparando el hash
    pub fn verify_integrity(&self) -> bool {
        Self::calculate_set_hash(&self.entries) == self.set_hash
    }

    // Getters
    pub fn entries(&self) -> &[MoleculeEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&MoleculeEntry> {
        self.entries.get(index)
    }

    /// Indica cuántas entradas contiene el lote (filas de la matriz)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Número de entradas con molécula válida
    pub fn valid_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_valid()).count()
    }

    /// Número de entradas inválidas (filas que serán marcadores faltantes)
    pub fn invalid_count(&self) -> usize {
        self.entries.len() - self.valid_count()
    }

    /// Obtiene el hash único que identifica la secuencia de entradas
    pub fn set_hash(&self) -> &str {
        &self.set_hash
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> Option<&String> {
        self.name.as_ref()
    }

    pub fn provenance(&self) -> &serde_json::Value {
        &self.provenance
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Compara si dos lotes son equivalentes basándose en su hash
    pub fn is_equivalent(&self, other: &MoleculeSet) -> bool {
        self.set_hash == other.set_hash
    }
}

// Implementación de IntoIterator para referencia
impl<'a> IntoIterator for &'a MoleculeSet {
    type Item = &'a MoleculeEntry;
    type IntoIter = std::slice::Iter<'a, MoleculeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// Implementación de IntoIterator para consumo
impl IntoIterator for MoleculeSet {
    type Item = MoleculeEntry;
    type IntoIter = std::vec::IntoIter<MoleculeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl fmt::Display for MoleculeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "MoleculeSet(id: {}, name: {}, entries: {}, invalid: {})",
               self.id,
               self.name.as_deref().unwrap_or("sin nombre"),
               self.entries.len(),
               self.invalid_count())
    }
}

// Implementación de PartialEq basada en el hash del lote
impl PartialEq for MoleculeSet {
    fn eq(&self, other: &Self) -> bool {
        self.is_equivalent(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DomainError, Molecule};
    use serde_json::json;

    #[test]
    fn test_set_creation_preserves_order() -> Result<(), DomainError> {
        let entries = vec![MoleculeEntry::from(Molecule::new("CCO")?),
                           MoleculeEntry::Invalid,
                           MoleculeEntry::from(Molecule::new("c1ccccc1")?)];
        let set = MoleculeSet::new(entries, json!({"source": "test"}));

        assert_eq!(set.len(), 3);
        assert_eq!(set.valid_count(), 2);
        assert_eq!(set.invalid_count(), 1);
        assert!(set.get(0).unwrap().is_valid());
        assert!(!set.get(1).unwrap().is_valid());
        assert!(set.verify_integrity());
        Ok(())
    }

    #[test]
    fn test_empty_set_allowed() {
        let set = MoleculeSet::new(Vec::new(), json!({}));
        assert!(set.is_empty());
        assert!(set.verify_integrity());
    }

    #[test]
    fn test_duplicates_allowed() -> Result<(), DomainError> {
        // El lote es posicional: la misma molécula puede aparecer dos veces
        let mol = Molecule::new("CCO")?;
        let set = MoleculeSet::new(vec![mol.clone().into(), mol.into()], json!({}));
        assert_eq!(set.len(), 2);
        Ok(())
    }

    #[test]
    fn test_hash_is_order_sensitive() -> Result<(), DomainError> {
        let a = Molecule::new("CCO")?;
        let b = Molecule::new("CCN")?;
        let set_ab = MoleculeSet::new(vec![a.clone().into(), b.clone().into()], json!({}));
        let set_ba = MoleculeSet::new(vec![b.into(), a.into()], json!({}));
        assert_ne!(set_ab.set_hash(), set_ba.set_hash());
        assert!(!set_ab.is_equivalent(&set_ba));
        Ok(())
    }

    #[test]
    fn test_hash_distinguishes_invalid_position() -> Result<(), DomainError> {
        let mol = Molecule::new("CCO")?;
        let first = MoleculeSet::new(vec![MoleculeEntry::Invalid, mol.clone().into()], json!({}));
        let second = MoleculeSet::new(vec![mol.into(), MoleculeEntry::Invalid], json!({}));
        assert_ne!(first.set_hash(), second.set_hash());
        Ok(())
    }

    #[test]
    fn test_with_name_keeps_hash() -> Result<(), DomainError> {
        let set = MoleculeSet::new(vec![Molecule::new("CCO")?.into()], json!({}));
        let named = set.with_name("odorants");
        assert_eq!(named.name(), Some(&"odorants".to_string()));
        assert_ne!(named.id(), set.id());
        assert!(named.is_equivalent(&set));
        Ok(())
    }
}
