use super::StoreError;
use crate::model::{Assignment, Employee, EmployeeDetails, EmployeeId, Shift, ShiftId};
use serde::{Deserialize, Serialize};

/// Contenu complet d'un roster persisté.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterData {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub shifts: Vec<Shift>,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    /// Prochain numéro d'employé ; absent des anciens fichiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_employee_seq: Option<u64>,
}

impl RosterData {
    pub fn find_employee(&self, id: &EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| &e.employee_id == id)
    }

    pub fn find_shift(&self, id: &ShiftId) -> Option<&Shift> {
        self.shifts.iter().find(|s| &s.shift_id == id)
    }

    pub fn find_assignment(&self, employee: &EmployeeId, shift: &ShiftId) -> Option<&Assignment> {
        self.assignments
            .iter()
            .find(|a| &a.employee_id == employee && &a.shift_id == shift)
    }

    pub fn employee_shifts(&self, employee: &EmployeeId) -> Vec<Shift> {
        let assigned: Vec<&ShiftId> = self
            .assignments
            .iter()
            .filter(|a| &a.employee_id == employee)
            .map(|a| &a.shift_id)
            .collect();
        self.shifts
            .iter()
            .filter(|s| assigned.contains(&&s.shift_id))
            .cloned()
            .collect()
    }

    pub fn add_assignment(&mut self, employee: &EmployeeId, shift: &ShiftId) {
        self.assignments.push(Assignment {
            employee_id: employee.clone(),
            shift_id: shift.clone(),
        });
    }

    /// Alloue l'identifiant suivant puis ajoute l'employé. Un numéro n'est
    /// jamais réutilisé, même si le compteur persisté est en retard.
    pub fn insert_employee(&mut self, details: EmployeeDetails) -> Employee {
        let highest = self
            .employees
            .iter()
            .filter_map(|e| e.employee_id.seq())
            .max()
            .unwrap_or(0);
        let seq = self.next_employee_seq.unwrap_or(1).max(highest + 1);
        self.next_employee_seq = Some(seq + 1);

        let employee = details.into_employee(EmployeeId::from_seq(seq));
        self.employees.push(employee.clone());
        employee
    }

    pub fn update_employee(&mut self, id: &EmployeeId, details: EmployeeDetails) -> Option<Employee> {
        let slot = self.employees.iter_mut().find(|e| &e.employee_id == id)?;
        *slot = details.into_employee(id.clone());
        Some(slot.clone())
    }

    pub fn add_shift(&mut self, shift: Shift) -> Result<(), StoreError> {
        if self.find_shift(&shift.shift_id).is_some() {
            return Err(StoreError::DuplicateShift(shift.shift_id));
        }
        self.shifts.push(shift);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_clock;
    use chrono::NaiveDate;

    fn details(name: &str) -> EmployeeDetails {
        EmployeeDetails::new(name, "1234-5678").unwrap()
    }

    fn shift(id: &str, day: u32) -> Shift {
        Shift::new(
            ShiftId::new(id),
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            parse_clock("09:00").unwrap(),
            parse_clock("10:00").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn ids_are_sequential_from_one() {
        let mut data = RosterData::default();
        assert_eq!(data.insert_employee(details("A")).employee_id.as_str(), "E001");
        assert_eq!(data.insert_employee(details("B")).employee_id.as_str(), "E002");
        assert_eq!(data.next_employee_seq, Some(3));
    }

    #[test]
    fn legacy_file_without_counter_continues_after_highest_id() {
        let mut data = RosterData::default();
        data.employees.push(details("Old").into_employee(EmployeeId::new("E041")));
        data.employees.push(details("Older").into_employee(EmployeeId::new("E007")));
        assert_eq!(data.insert_employee(details("New")).employee_id.as_str(), "E042");
    }

    #[test]
    fn counter_is_never_rewound() {
        let mut data = RosterData::default();
        data.next_employee_seq = Some(10);
        let first = data.insert_employee(details("A"));
        assert_eq!(first.employee_id.as_str(), "E010");
        data.employees.clear();
        assert_eq!(data.insert_employee(details("B")).employee_id.as_str(), "E011");
    }

    #[test]
    fn employee_shifts_joins_assignments() {
        let mut data = RosterData::default();
        let e = data.insert_employee(details("A")).employee_id;
        let other = data.insert_employee(details("B")).employee_id;
        for (id, day) in [("S1", 1), ("S2", 2), ("S3", 3)] {
            data.add_shift(shift(id, day)).unwrap();
        }
        data.add_assignment(&e, &ShiftId::new("S3"));
        data.add_assignment(&e, &ShiftId::new("S1"));
        data.add_assignment(&other, &ShiftId::new("S2"));

        let ids: Vec<_> = data
            .employee_shifts(&e)
            .into_iter()
            .map(|s| s.shift_id)
            .collect();
        assert_eq!(ids, vec![ShiftId::new("S1"), ShiftId::new("S3")]);
    }

    #[test]
    fn duplicate_shift_id_is_rejected() {
        let mut data = RosterData::default();
        data.add_shift(shift("S1", 1)).unwrap();
        assert!(matches!(
            data.add_shift(shift("S1", 2)),
            Err(StoreError::DuplicateShift(_))
        ));
        assert_eq!(data.shifts.len(), 1);
    }

    #[test]
    fn update_unknown_employee_returns_none() {
        let mut data = RosterData::default();
        assert!(data.update_employee(&EmployeeId::new("E999"), details("X")).is_none());
    }
}
