use super::duration::{minutes_to_hours, shift_duration_minutes};
use crate::model::Shift;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Total des minutes déjà planifiées à la date donnée (ordre indifférent).
pub fn daily_minutes(shifts: &[Shift], date: NaiveDate) -> i64 {
    shifts
        .iter()
        .filter(|s| s.date == date)
        .map(|s| shift_duration_minutes(s.start_time, s.end_time))
        .sum()
}

/// Total des heures déjà planifiées à la date donnée ; `0` si aucun shift.
pub fn daily_hours(shifts: &[Shift], date: NaiveDate) -> Decimal {
    minutes_to_hours(daily_minutes(shifts, date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{parse_clock, ShiftId};

    fn shift(id: &str, date: &str, start: &str, end: &str) -> Shift {
        Shift::new(
            ShiftId::new(id),
            date.parse().unwrap(),
            parse_clock(start).unwrap(),
            parse_clock(end).unwrap(),
        )
        .unwrap()
    }

    fn sample() -> Vec<Shift> {
        vec![
            shift("S1", "2024-01-01", "09:00", "12:00"),
            shift("S2", "2024-01-01", "13:00", "15:00"),
            shift("S3", "2024-01-02", "09:00", "10:00"),
        ]
    }

    fn day(raw: &str) -> NaiveDate {
        raw.parse().unwrap()
    }

    #[test]
    fn sums_only_matching_date() {
        let shifts = sample();
        assert_eq!(daily_hours(&shifts, day("2024-01-01")), Decimal::from(5));
        assert_eq!(daily_hours(&shifts, day("2024-01-02")), Decimal::from(1));
        assert_eq!(daily_hours(&shifts, day("2024-01-03")), Decimal::ZERO);
    }

    #[test]
    fn order_does_not_matter() {
        let mut shifts = sample();
        shifts.reverse();
        assert_eq!(daily_minutes(&shifts, day("2024-01-01")), 300);
    }

    #[test]
    fn empty_list_is_zero() {
        assert_eq!(daily_hours(&[], day("2024-01-01")), Decimal::ZERO);
    }
}
