// odor-domain library entry point
pub mod entry;
pub mod errors;
pub mod molecule;
pub mod molecule_set;
pub use entry::MoleculeEntry;
pub use errors::DomainError;
pub use molecule::Molecule;
pub use molecule_set::MoleculeSet;
