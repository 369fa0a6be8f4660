//! Frontera con el motor externo de subestructuras.
//!
//! El núcleo nunca implementa el isomorfismo de subgrafos: entrega una
//! expresión SMARTS y recibe un booleano "hay al menos una ocurrencia".
//! Cualquier toolkit capaz de compilar SMARTS y consultar una molécula
//! puede implementar este trait.

pub mod mock;
#[cfg(feature = "rdkit")]
pub mod rdkit;

use odor_domain::Molecule;
use std::fmt;

pub trait SubstructureEngine {
    /// Objeto de consulta producido al compilar una expresión SMARTS.
    type Query;
    /// Fallo de compilación o de consulta, atribuible al motor.
    type Error: fmt::Display;

    fn name(&self) -> &str;
    fn version(&self) -> &str;

    /// Compila una expresión SMARTS en un objeto de consulta reutilizable.
    fn compile(&self, smarts: &str) -> Result<Self::Query, Self::Error>;

    /// Indica si la molécula contiene al menos una ocurrencia de la
    /// consulta. Ocurrencias múltiples o solapadas cuentan igual que una.
    fn has_match(&self, molecule: &Molecule, query: &Self::Query) -> Result<bool, Self::Error>;
}
