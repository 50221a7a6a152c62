use crate::model::{EmployeeId, ModelError, Shift, ShiftId};
use crate::storage::StoreError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Résultat d'une demande d'affectation.
///
/// Les refus métier sont des valeurs, pas des erreurs : l'appelant doit
/// traiter chaque cas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignOutcome {
    Ok,
    EmployeeNotFound,
    ShiftNotFound,
    DuplicateAssignment,
    DailyLimitExceeded,
}

impl AssignOutcome {
    pub fn is_ok(self) -> bool {
        self == AssignOutcome::Ok
    }

    /// Message destiné à l'utilisateur.
    pub fn message(self) -> &'static str {
        match self {
            AssignOutcome::Ok => "Shift Recorded",
            AssignOutcome::EmployeeNotFound => "Employee does not exist",
            AssignOutcome::ShiftNotFound => "Shift does not exist",
            AssignOutcome::DuplicateAssignment => "Employee already assigned to shift",
            AssignOutcome::DailyLimitExceeded => "Daily hour limit exceeded",
        }
    }
}

impl std::fmt::Display for AssignOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Shift du planning d'un employé, prêt pour l'affichage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledShift {
    pub shift: Shift,
    pub hours: Decimal,
    pub is_morning: bool,
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("unknown employee: {0}")]
    UnknownEmployee(EmployeeId),
    #[error("malformed shift {0}: end must be after start")]
    MalformedShift(ShiftId),
    #[error(transparent)]
    Invalid(#[from] ModelError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
