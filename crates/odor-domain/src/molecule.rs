use serde::{Deserialize, Serialize};

use crate::DomainError;
use std::fmt;

/// Molécula inmutable identificada por su SMILES.
///
/// La estructura química llega ya construida por un toolkit externo; aquí
/// solo se valida la forma superficial de la cadena (no vacía, sin espacios,
/// brackets balanceados), nunca la química.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Molecule {
    smiles: String,
    name: Option<String>,
    metadata: serde_json::Value,
}

impl Molecule {
    pub fn new(smiles: &str) -> Result<Self, DomainError> {
        Self::with_metadata(smiles, serde_json::Value::Null)
    }

    pub fn with_metadata(smiles: &str, metadata: serde_json::Value) -> Result<Self, DomainError> {
        validate_smiles_shape(smiles)?;
        Ok(Molecule { smiles: smiles.to_string(),
                      name: None,
                      metadata })
    }

    /// Crea una nueva instancia con nombre legible (p. ej. "ethanol")
    pub fn named(smiles: &str, name: impl Into<String>) -> Result<Self, DomainError> {
        let mut molecule = Self::new(smiles)?;
        molecule.name = Some(name.into());
        Ok(molecule)
    }

    pub fn smiles(&self) -> &str {
        &self.smiles
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn metadata(&self) -> &serde_json::Value {
        &self.metadata
    }

    pub fn compare(&self, other: &Molecule) -> bool {
        self.smiles == other.smiles
    }
}

/// Chequeo de forma, no de química: el parseo real es del motor externo.
fn validate_smiles_shape(smiles: &str) -> Result<(), DomainError> {
    if smiles.is_empty() {
        return Err(DomainError::Validation("SMILES vacío".to_string()));
    }
    if smiles.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(DomainError::Validation(format!("SMILES contiene espacios o caracteres de control: {:?}", smiles)));
    }
    let mut parens = 0i32;
    let mut brackets = 0i32;
    for c in smiles.chars() {
        match c {
            '(' => parens += 1,
            ')' => parens -= 1,
            '[' => brackets += 1,
            ']' => brackets -= 1,
            _ => {}
        }
        if parens < 0 || brackets < 0 {
            return Err(DomainError::Validation(format!("SMILES con brackets desbalanceados: {}", smiles)));
        }
    }
    if parens != 0 || brackets != 0 {
        return Err(DomainError::Validation(format!("SMILES con brackets desbalanceados: {}", smiles)));
    }
    Ok(())
}

impl fmt::Display for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "<{}: {}>", name, self.smiles),
            None => write!(f, "<{}>", self.smiles),
        }
    }
}
