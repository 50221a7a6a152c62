use crate::model::EmployeeId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::Mutex as AsyncMutex;

/// Un verrou async par employé : les affectations d'un même employé
/// s'exécutent l'une après l'autre, celles d'employés différents en parallèle.
#[derive(Debug, Default)]
pub(super) struct EmployeeLocks {
    scopes: Mutex<HashMap<EmployeeId, Arc<AsyncMutex<()>>>>,
}

impl EmployeeLocks {
    pub(super) fn scope(&self, employee: &EmployeeId) -> Arc<AsyncMutex<()>> {
        let mut scopes = self.scopes.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(scopes.entry(employee.clone()).or_default())
    }
}
