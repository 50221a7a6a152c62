//! Stockage des enregistrements (employés, shifts, affectations, config).
//!
//! Le moteur d'affectation ne connaît que le trait [`RecordStore`] ; chaque
//! appel est un point de suspension async. Deux implémentations :
//! [`JsonStore`] (fichiers, écriture atomique) et [`MemoryStore`].

mod document;
mod json;
mod memory;

pub use document::RosterData;
pub use json::JsonStore;
pub use memory::MemoryStore;

use crate::model::{
    Assignment, Config, Employee, EmployeeDetails, EmployeeId, ModelError, Shift, ShiftId,
};
use std::future::Future;
use std::path::PathBuf;
use thiserror::Error;

/// Échecs d'infrastructure du stockage.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("reading {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("writing {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    InvalidConfig { path: PathBuf, source: ModelError },
    #[error("shift already exists: {0}")]
    DuplicateShift(ShiftId),
    #[error("background write task failed")]
    Join(#[from] tokio::task::JoinError),
}

/// Contrat du stockage consommé par le [`Scheduler`](crate::Scheduler).
pub trait RecordStore: Send + Sync {
    fn find_employee(
        &self,
        id: &EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, StoreError>> + Send;

    fn find_shift(
        &self,
        id: &ShiftId,
    ) -> impl Future<Output = Result<Option<Shift>, StoreError>> + Send;

    fn find_assignment(
        &self,
        employee: &EmployeeId,
        shift: &ShiftId,
    ) -> impl Future<Output = Result<Option<Assignment>, StoreError>> + Send;

    /// Shifts déjà affectés à l'employé (ordre du stockage).
    fn employee_shifts(
        &self,
        employee: &EmployeeId,
    ) -> impl Future<Output = Result<Vec<Shift>, StoreError>> + Send;

    fn config(&self) -> impl Future<Output = Result<Config, StoreError>> + Send;

    /// Enregistre la paire sans aucune vérification.
    fn add_assignment(
        &self,
        employee: &EmployeeId,
        shift: &ShiftId,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn list_employees(&self) -> impl Future<Output = Result<Vec<Employee>, StoreError>> + Send;

    fn list_shifts(&self) -> impl Future<Output = Result<Vec<Shift>, StoreError>> + Send;

    /// Crée l'employé ; l'identifiant est alloué par le stockage.
    fn insert_employee(
        &self,
        details: EmployeeDetails,
    ) -> impl Future<Output = Result<Employee, StoreError>> + Send;

    /// `None` si l'employé n'existe pas.
    fn update_employee(
        &self,
        id: &EmployeeId,
        details: EmployeeDetails,
    ) -> impl Future<Output = Result<Option<Employee>, StoreError>> + Send;

    fn add_shift(&self, shift: Shift) -> impl Future<Output = Result<(), StoreError>> + Send;
}
