#![forbid(unsafe_code)]
//! Shiftbook — gestion d'employés, de shifts et d'affectations.
//!
//! - Stockage fichiers (JSON) ou mémoire, derrière un trait async.
//! - Affectation validée : existence, doublon, plafond d'heures journalier.
//! - Import/export CSV.

pub mod io;
pub mod model;
pub mod scheduler;
pub mod storage;

pub use model::{Assignment, Config, Employee, EmployeeDetails, EmployeeId, Shift, ShiftId};
pub use scheduler::{AssignOutcome, SchedError, ScheduledShift, Scheduler};
pub use storage::{JsonStore, MemoryStore, RecordStore, RosterData, StoreError};
