use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

const MINUTES_PER_HOUR: i64 = 60;

/// Minutes écoulées depuis minuit (les secondes sont ignorées).
pub fn minutes_since_midnight(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * MINUTES_PER_HOUR + i64::from(time.minute())
}

/// Durée signée en minutes ; nulle ou négative si `end` n'est pas après `start`.
pub fn shift_duration_minutes(start: NaiveTime, end: NaiveTime) -> i64 {
    minutes_since_midnight(end) - minutes_since_midnight(start)
}

/// Durée d'un shift en heures décimales.
///
/// N'échoue jamais : une plage inversée donne une valeur nulle ou négative,
/// que l'appelant doit traiter comme une donnée invalide.
pub fn compute_shift_duration(start: NaiveTime, end: NaiveTime) -> Decimal {
    minutes_to_hours(shift_duration_minutes(start, end))
}

pub fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::from(minutes) / Decimal::from(MINUTES_PER_HOUR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_clock;

    fn hours(start: &str, end: &str) -> Decimal {
        compute_shift_duration(parse_clock(start).unwrap(), parse_clock(end).unwrap())
    }

    #[test]
    fn whole_and_half_hours() {
        assert_eq!(hours("09:00", "17:00"), Decimal::from(8));
        assert_eq!(hours("09:30", "10:00"), Decimal::new(5, 1));
        assert_eq!(hours("00:00", "23:59"), Decimal::from(1439) / Decimal::from(60));
    }

    #[test]
    fn inverted_range_is_not_positive() {
        assert_eq!(hours("10:00", "10:00"), Decimal::ZERO);
        assert_eq!(hours("10:00", "09:30"), Decimal::new(-5, 1));
    }

    #[test]
    fn seconds_are_ignored() {
        let start = NaiveTime::from_hms_opt(9, 0, 59).unwrap();
        let end = NaiveTime::from_hms_opt(9, 45, 0).unwrap();
        assert_eq!(shift_duration_minutes(start, end), 45);
    }
}
