use std::collections::{HashMap, HashSet};
use thiserror::Error;

use odor_domain::Molecule;

use crate::engine::SubstructureEngine;

/// Motor de respuestas enlatadas para tests y consumidores sin toolkit
/// químico: se declara qué SMILES matchea cada SMARTS y qué expresiones se
/// consideran malformadas.
#[derive(Debug)]
pub struct MockSubstructureEngine {
    pub name: String,
    pub version: String,
    matches: HashMap<String, HashSet<String>>,
    malformed: HashSet<String>,
    failing: HashSet<String>,
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum MockEngineError {
    #[error("SMARTS could not be compiled: {0}")]
    Malformed(String),
    #[error("engine fault while matching {0}")]
    QueryFault(String),
}

#[derive(Debug, Clone)]
pub struct MockQuery {
    smarts: String,
    matching: HashSet<String>,
}

impl MockQuery {
    pub fn smarts(&self) -> &str {
        &self.smarts
    }
}

impl MockSubstructureEngine {
    pub fn new() -> Self {
        MockSubstructureEngine { name: "mock-engine".to_string(),
                                 version: "0.1.0".to_string(),
                                 matches: HashMap::new(),
                                 malformed: HashSet::new(),
                                 failing: HashSet::new() }
    }

    /// Declara que `smiles` contiene el patrón `smarts`
    pub fn with_match(mut self, smarts: &str, smiles: &str) -> Self {
        self.declare_match(smarts, smiles);
        self
    }

    /// Declara una expresión que fallará al compilar
    pub fn with_malformed(mut self, smarts: &str) -> Self {
        self.malformed.insert(smarts.to_string());
        self
    }

    /// Declara un SMILES cuya consulta provocará un fallo del motor
    pub fn with_failing_molecule(mut self, smiles: &str) -> Self {
        self.failing.insert(smiles.to_string());
        self
    }

    pub fn declare_match(&mut self, smarts: &str, smiles: &str) {
        self.matches.entry(smarts.to_string()).or_default().insert(smiles.to_string());
    }
}

impl Default for MockSubstructureEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SubstructureEngine for MockSubstructureEngine {
    type Query = MockQuery;
    type Error = MockEngineError;

    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn compile(&self, smarts: &str) -> Result<MockQuery, MockEngineError> {
        if self.malformed.contains(smarts) {
            return Err(MockEngineError::Malformed(smarts.to_string()));
        }
        Ok(MockQuery { smarts: smarts.to_string(),
                       matching: self.matches.get(smarts).cloned().unwrap_or_default() })
    }

    fn has_match(&self, molecule: &Molecule, query: &MockQuery) -> Result<bool, MockEngineError> {
        if self.failing.contains(molecule.smiles()) {
            return Err(MockEngineError::QueryFault(molecule.smiles().to_string()));
        }
        Ok(query.matching.contains(molecule.smiles()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use odor_domain::DomainError;

    #[test]
    fn test_declared_match_answers_true() -> Result<(), DomainError> {
        let engine = MockSubstructureEngine::new().with_match("[#8]", "CCO");
        let query = engine.compile("[#8]").unwrap();
        let ethanol = Molecule::new("CCO")?;
        let benzene = Molecule::new("c1ccccc1")?;
        assert!(engine.has_match(&ethanol, &query).unwrap());
        assert!(!engine.has_match(&benzene, &query).unwrap());
        Ok(())
    }

    #[test]
    fn test_undeclared_smarts_compiles_to_empty_query() {
        let engine = MockSubstructureEngine::new();
        let query = engine.compile("[R]").unwrap();
        assert_eq!(query.smarts(), "[R]");
    }

    #[test]
    fn test_malformed_smarts_fails_compilation() {
        let engine = MockSubstructureEngine::new().with_malformed("c1ccc");
        assert_eq!(engine.compile("c1ccc").unwrap_err(),
                   MockEngineError::Malformed("c1ccc".to_string()));
    }
}
