use serde::{Deserialize, Serialize};

use crate::Molecule;
use std::fmt;

/// Resultado del parseo externo de una estructura: o bien una molécula
/// válida, o bien una entrada inválida de primera clase (el upstream no pudo
/// parsear la representación). La variante inválida es dato normal, no un
/// error: su fila del fingerprint se rellena con el marcador faltante.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "molecule", rename_all = "snake_case")]
pub enum MoleculeEntry {
    Valid(Molecule),
    Invalid,
}

impl MoleculeEntry {
    pub fn is_valid(&self) -> bool {
        matches!(self, MoleculeEntry::Valid(_))
    }

    pub fn molecule(&self) -> Option<&Molecule> {
        match self {
            MoleculeEntry::Valid(molecule) => Some(molecule),
            MoleculeEntry::Invalid => None,
        }
    }
}

// Un parser upstream entrega Option<Molecule>; None se vuelve Invalid.
impl From<Option<Molecule>> for MoleculeEntry {
    fn from(parsed: Option<Molecule>) -> Self {
        match parsed {
            Some(molecule) => MoleculeEntry::Valid(molecule),
            None => MoleculeEntry::Invalid,
        }
    }
}

impl From<Molecule> for MoleculeEntry {
    fn from(molecule: Molecule) -> Self {
        MoleculeEntry::Valid(molecule)
    }
}

impl fmt::Display for MoleculeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoleculeEntry::Valid(molecule) => write!(f, "{}", molecule),
            MoleculeEntry::Invalid => write!(f, "<invalid>"),
        }
    }
}
