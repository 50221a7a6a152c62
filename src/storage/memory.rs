use super::{RecordStore, RosterData, StoreError};
use crate::model::{Assignment, Config, Employee, EmployeeDetails, EmployeeId, Shift, ShiftId};
use tokio::sync::Mutex;

/// Stockage en mémoire (tests, intégration embarquée).
#[derive(Debug)]
pub struct MemoryStore {
    data: Mutex<RosterData>,
    config: Config,
}

impl MemoryStore {
    pub fn new(config: Config) -> Self {
        Self::with_data(RosterData::default(), config)
    }

    pub fn with_data(data: RosterData, config: Config) -> Self {
        Self {
            data: Mutex::new(data),
            config,
        }
    }

    /// Copie de l'état courant.
    pub async fn snapshot(&self) -> RosterData {
        self.data.lock().await.clone()
    }
}

impl RecordStore for MemoryStore {
    async fn find_employee(&self, id: &EmployeeId) -> Result<Option<Employee>, StoreError> {
        Ok(self.data.lock().await.find_employee(id).cloned())
    }

    async fn find_shift(&self, id: &ShiftId) -> Result<Option<Shift>, StoreError> {
        Ok(self.data.lock().await.find_shift(id).cloned())
    }

    async fn find_assignment(
        &self,
        employee: &EmployeeId,
        shift: &ShiftId,
    ) -> Result<Option<Assignment>, StoreError> {
        Ok(self.data.lock().await.find_assignment(employee, shift).cloned())
    }

    async fn employee_shifts(&self, employee: &EmployeeId) -> Result<Vec<Shift>, StoreError> {
        Ok(self.data.lock().await.employee_shifts(employee))
    }

    async fn config(&self) -> Result<Config, StoreError> {
        Ok(self.config)
    }

    async fn add_assignment(&self, employee: &EmployeeId, shift: &ShiftId) -> Result<(), StoreError> {
        self.data.lock().await.add_assignment(employee, shift);
        Ok(())
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError> {
        Ok(self.data.lock().await.employees.clone())
    }

    async fn list_shifts(&self) -> Result<Vec<Shift>, StoreError> {
        Ok(self.data.lock().await.shifts.clone())
    }

    async fn insert_employee(&self, details: EmployeeDetails) -> Result<Employee, StoreError> {
        Ok(self.data.lock().await.insert_employee(details))
    }

    async fn update_employee(
        &self,
        id: &EmployeeId,
        details: EmployeeDetails,
    ) -> Result<Option<Employee>, StoreError> {
        Ok(self.data.lock().await.update_employee(id, details))
    }

    async fn add_shift(&self, shift: Shift) -> Result<(), StoreError> {
        self.data.lock().await.add_shift(shift)
    }
}
