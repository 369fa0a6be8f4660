//! Errores del cálculo de fingerprints: autoría del diccionario, forma de
//! los índices, compilación de patrones y fallos del motor externo.

use odor_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FingerprintError {
    #[error("pattern {index} has an empty SMARTS expression")]
    EmptySmarts { index: usize },
    #[error("duplicate pattern label '{label}'")]
    DuplicateLabel { label: String },
    #[error("duplicate pattern index {index}")]
    DuplicateIndex { index: usize },
    #[error("pattern indices must be contiguous from 0: expected {expected}, found {found}")]
    NonContiguousIndices { expected: usize, found: usize },
    #[error("pattern {index} ('{label}', SMARTS '{smarts}') failed to compile: {reason}")]
    PatternCompilation { index: usize,
                         label: String,
                         smarts: String,
                         reason: String },
    #[error("substructure engine fault: {0}")]
    Engine(String),
    #[error("domain: {0}")]
    Domain(#[from] DomainError),
}
