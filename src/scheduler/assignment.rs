use super::{duration::shift_duration_minutes, workload, AssignOutcome, SchedError, Scheduler};
use crate::model::{EmployeeId, Shift, ShiftId};
use crate::storage::RecordStore;
use rust_decimal::Decimal;
use tracing::{info, warn};

pub(super) async fn assign_shift<S: RecordStore>(
    scheduler: &Scheduler<S>,
    employee_id: &EmployeeId,
    shift_id: &ShiftId,
) -> Result<AssignOutcome, SchedError> {
    let store = &scheduler.store;

    if store.find_employee(employee_id).await?.is_none() {
        return Ok(reject(employee_id, shift_id, AssignOutcome::EmployeeNotFound));
    }
    let Some(shift) = store.find_shift(shift_id).await? else {
        return Ok(reject(employee_id, shift_id, AssignOutcome::ShiftNotFound));
    };

    // Vérification et écriture sous le même verrou employé.
    let scope = scheduler.locks.scope(employee_id);
    let _guard = scope.lock().await;

    if store.find_assignment(employee_id, shift_id).await?.is_some() {
        return Ok(reject(employee_id, shift_id, AssignOutcome::DuplicateAssignment));
    }

    let existing = store.employee_shifts(employee_id).await?;
    let config = store.config().await?;

    let new_minutes = checked_minutes(&shift)?;
    for same_day in existing.iter().filter(|s| s.date == shift.date) {
        checked_minutes(same_day)?;
    }
    let total_minutes = workload::daily_minutes(&existing, shift.date) + new_minutes;

    if exceeds_limit(total_minutes, config.max_daily_hours) {
        return Ok(reject(employee_id, shift_id, AssignOutcome::DailyLimitExceeded));
    }

    store.add_assignment(employee_id, shift_id).await?;
    info!(
        employee = %employee_id,
        shift = %shift_id,
        date = %shift.date,
        total_minutes,
        "shift assigned"
    );
    Ok(AssignOutcome::Ok)
}

fn reject(employee_id: &EmployeeId, shift_id: &ShiftId, outcome: AssignOutcome) -> AssignOutcome {
    warn!(employee = %employee_id, shift = %shift_id, ?outcome, "assignment rejected");
    outcome
}

/// Durée en minutes, refusée si nulle ou négative.
fn checked_minutes(shift: &Shift) -> Result<i64, SchedError> {
    let minutes = shift_duration_minutes(shift.start_time, shift.end_time);
    if minutes <= 0 {
        return Err(SchedError::MalformedShift(shift.shift_id.clone()));
    }
    Ok(minutes)
}

/// Strictement supérieur : un total égal au plafond est accepté.
pub(super) fn exceeds_limit(total_minutes: i64, max_daily_hours: Decimal) -> bool {
    match max_daily_hours.checked_mul(Decimal::from(60)) {
        Some(limit) => Decimal::from(total_minutes) > limit,
        None => false,
    }
}
