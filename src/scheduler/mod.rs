mod assignment;
pub mod duration;
mod locks;
mod types;
pub mod workload;

pub use duration::compute_shift_duration;
pub use types::{AssignOutcome, SchedError, ScheduledShift};
pub use workload::daily_hours;

use crate::model::{Employee, EmployeeDetails, EmployeeId, Shift, ShiftId};
use crate::storage::RecordStore;
use locks::EmployeeLocks;
use tracing::info;

/// Scheduler : point d'entrée des opérations, possède le handle de stockage.
///
/// Aucun état métier n'est conservé entre deux appels ; seuls les verrous
/// par employé survivent.
#[derive(Debug)]
pub struct Scheduler<S> {
    store: S,
    locks: EmployeeLocks,
}

impl<S: RecordStore> Scheduler<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            locks: EmployeeLocks::default(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Affecte un employé à un shift après les vérifications, dans l'ordre :
    /// employé, shift, doublon, plafond journalier. Rien n'est écrit en cas de refus.
    pub async fn assign_shift(
        &self,
        employee_id: &EmployeeId,
        shift_id: &ShiftId,
    ) -> Result<AssignOutcome, SchedError> {
        assignment::assign_shift(self, employee_id, shift_id).await
    }

    pub async fn register_employee(&self, name: &str, phone: &str) -> Result<Employee, SchedError> {
        let details = EmployeeDetails::new(name, phone)?;
        let employee = self.store.insert_employee(details).await?;
        info!(employee = %employee.employee_id, "employee registered");
        Ok(employee)
    }

    pub async fn update_employee(
        &self,
        employee_id: &EmployeeId,
        name: &str,
        phone: &str,
    ) -> Result<Employee, SchedError> {
        let details = EmployeeDetails::new(name, phone)?;
        self.store
            .update_employee(employee_id, details)
            .await?
            .ok_or_else(|| SchedError::UnknownEmployee(employee_id.clone()))
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, SchedError> {
        Ok(self.store.list_employees().await?)
    }

    pub async fn list_shifts(&self) -> Result<Vec<Shift>, SchedError> {
        Ok(self.store.list_shifts().await?)
    }

    pub async fn add_shift(&self, shift: Shift) -> Result<(), SchedError> {
        let id = shift.shift_id.clone();
        self.store.add_shift(shift).await?;
        info!(shift = %id, "shift created");
        Ok(())
    }

    /// Planning chronologique (date puis heure de début) d'un employé.
    pub async fn employee_schedule(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Vec<ScheduledShift>, SchedError> {
        if self.store.find_employee(employee_id).await?.is_none() {
            return Err(SchedError::UnknownEmployee(employee_id.clone()));
        }
        let mut shifts = self.store.employee_shifts(employee_id).await?;
        shifts.sort_by_key(|s| (s.date, s.start_time));
        Ok(shifts
            .into_iter()
            .map(|shift| ScheduledShift {
                hours: compute_shift_duration(shift.start_time, shift.end_time),
                is_morning: shift.is_morning(),
                shift,
            })
            .collect())
    }
}
