// errors.rs
use thiserror::Error;

/// Error del dominio para moléculas y colecciones de moléculas
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DomainError {
    #[error("Error de validación: {0}")]
    Validation(String),
}
