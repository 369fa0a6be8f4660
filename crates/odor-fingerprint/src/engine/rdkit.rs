//! Motor RDKit embebido vía Python (feature `rdkit`).
//!
//! Carga `python/rdkit_wrapper.py` una sola vez en un `OnceLock`; la
//! compilación de SMARTS y el matching quedan del lado de RDKit. Requiere
//! un Python con RDKit instalado; `PYTHON_PATH` puede fijarse en `.env`.

use pyo3::ffi::c_str;
use pyo3::prelude::*;
use pyo3::types::PyModule;
use std::ffi::CString;
use std::sync::OnceLock;
use thiserror::Error;

use odor_domain::Molecule;

use crate::engine::SubstructureEngine;

static RDKIT_MODULE: OnceLock<Py<PyModule>> = OnceLock::new();

#[derive(Debug, Error)]
pub enum RdkitError {
    #[error("Error inicializando Python/RDKit: {0}")]
    Init(PyErr),
    #[error("SMARTS rechazado por RDKit: {0}")]
    BadSmarts(String),
    #[error("Error consultando subestructura: {0}")]
    Query(PyErr),
}

fn init_python() -> PyResult<String> {
    dotenvy::dotenv().ok();
    if let Ok(python_path) = std::env::var("PYTHON_PATH") {
        std::env::set_var("PYTHON_SYS_EXECUTABLE", python_path);
    }
    Python::attach(|py| {
        let code = CString::new(include_str!("../../python/rdkit_wrapper.py"))?;
        let module = PyModule::from_code(py, code.as_c_str(), c_str!("rdkit_wrapper.py"), c_str!("rdkit_wrapper"))?;
        let version: String = module.getattr("rdkit_version")?.call0()?.extract()?;
        // Guardamos el módulo en el OnceLock como Py<PyModule>
        RDKIT_MODULE.set(module.unbind()).ok();
        Ok(version)
    })
}

fn get_module(py: Python<'_>) -> PyResult<Py<PyModule>> {
    RDKIT_MODULE.get().map(|module| module.clone_ref(py)).ok_or_else(|| {
                                                             PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(
            "RdkitEngine::init() debe llamarse antes de consultar"
        )
                                                         })
}

pub struct RdkitEngine {
    version: String,
}

impl RdkitEngine {
    pub fn init() -> Result<Self, RdkitError> {
        let version = init_python().map_err(RdkitError::Init)?;
        Ok(RdkitEngine { version })
    }
}

/// Consulta compilada: RDKit cachea el objeto patrón del lado Python,
/// aquí solo viaja la expresión ya validada.
pub struct RdkitQuery {
    smarts: String,
}

impl SubstructureEngine for RdkitEngine {
    type Query = RdkitQuery;
    type Error = RdkitError;

    fn name(&self) -> &str {
        "rdkit"
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn compile(&self, smarts: &str) -> Result<RdkitQuery, RdkitError> {
        let ok: bool = Python::attach(|py| {
                           let module = get_module(py)?;
                           module.bind(py).getattr("compile_smarts")?.call1((smarts,))?.extract()
                       }).map_err(RdkitError::Query)?;
        if !ok {
            return Err(RdkitError::BadSmarts(smarts.to_string()));
        }
        Ok(RdkitQuery { smarts: smarts.to_string() })
    }

    fn has_match(&self, molecule: &Molecule, query: &RdkitQuery) -> Result<bool, RdkitError> {
        Python::attach(|py| {
            let module = get_module(py)?;
            module.bind(py)
                  .getattr("has_substruct_match")?
                  .call1((molecule.smiles(), query.smarts.as_str()))?
                  .extract()
        }).map_err(RdkitError::Query)
    }
}
