use chrono::{NaiveDate, NaiveTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Erreurs de validation des enregistrements.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("name cannot be empty")]
    EmptyName,
    #[error("phone must be 4 digits - 4 digits, got {0:?}")]
    InvalidPhone(String),
    #[error("invalid clock value {0:?}, expected HH:MM")]
    InvalidClock(String),
    #[error("invalid time range: end must be after start")]
    InvalidTimeRange,
    #[error("shift id cannot be empty")]
    EmptyShiftId,
    #[error("max daily hours must be positive")]
    NonPositiveLimit,
}

/// Identifiant fort pour Employee (`E001`, `E002`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }

    /// Construit l'identifiant à partir d'un numéro de séquence (`7` → `E007`).
    pub fn from_seq(seq: u64) -> Self {
        let mut buf = itoa::Buffer::new();
        let digits = buf.format(seq);
        Self(format!("E{digits:0>3}"))
    }

    /// Numéro de séquence encodé dans l'identifiant, s'il est bien formé.
    pub fn seq(&self) -> Option<u64> {
        self.0.strip_prefix('E')?.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Employé
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub employee_id: EmployeeId,
    pub name: String,
    pub phone: String,
}

/// Champs saisis pour créer ou modifier un employé, validés et normalisés.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDetails {
    name: String,
    phone: String,
}

impl EmployeeDetails {
    /// Nettoie (trim) puis valide nom et téléphone.
    pub fn new<N: AsRef<str>, P: AsRef<str>>(name: N, phone: P) -> Result<Self, ModelError> {
        let name = name.as_ref().trim();
        let phone = phone.as_ref().trim();
        if name.is_empty() {
            return Err(ModelError::EmptyName);
        }
        if !is_valid_phone(phone) {
            return Err(ModelError::InvalidPhone(phone.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            phone: phone.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn into_employee(self, employee_id: EmployeeId) -> Employee {
        Employee {
            employee_id,
            name: self.name,
            phone: self.phone,
        }
    }
}

fn is_valid_phone(phone: &str) -> bool {
    let bytes = phone.as_bytes();
    bytes.len() == 9
        && bytes[4] == b'-'
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[5..].iter().all(u8::is_ascii_digit)
}

/// Identifiant fort pour Shift (attribué à l'extérieur)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShiftId(String);

impl ShiftId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShiftId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse strict d'une heure `HH:MM` (00-23, 00-59, deux chiffres chacun).
pub fn parse_clock(raw: &str) -> Result<NaiveTime, ModelError> {
    let invalid = || ModelError::InvalidClock(raw.to_string());
    let bytes = raw.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return Err(invalid());
    }
    if !bytes[..2].iter().chain(&bytes[3..]).all(u8::is_ascii_digit) {
        return Err(invalid());
    }
    let hours: u32 = raw[..2].parse().map_err(|_| invalid())?;
    let minutes: u32 = raw[3..].parse().map_err(|_| invalid())?;
    NaiveTime::from_hms_opt(hours, minutes, 0).ok_or_else(invalid)
}

/// Sérialisation `HH:MM` des heures de début/fin.
mod clock {
    use chrono::NaiveTime;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, ser: S) -> Result<S::Ok, S::Error> {
        ser.collect_str(&time.format("%H:%M"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(de)?;
        super::parse_clock(&raw).map_err(D::Error::custom)
    }
}

/// Forme brute d'un shift, validée à la désérialisation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawShift {
    shift_id: ShiftId,
    date: NaiveDate,
    #[serde(with = "clock")]
    start_time: NaiveTime,
    #[serde(with = "clock")]
    end_time: NaiveTime,
}

impl TryFrom<RawShift> for Shift {
    type Error = ModelError;

    fn try_from(raw: RawShift) -> Result<Self, Self::Error> {
        Shift::new(raw.shift_id, raw.date, raw.start_time, raw.end_time)
    }
}

/// Créneau de travail sur une seule journée (pas de shift de nuit).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawShift")]
pub struct Shift {
    pub shift_id: ShiftId,
    pub date: NaiveDate,
    #[serde(serialize_with = "clock::serialize")]
    pub start_time: NaiveTime,
    #[serde(serialize_with = "clock::serialize")]
    pub end_time: NaiveTime,
}

impl Shift {
    /// Crée un shift en validant que `end_time > start_time`.
    pub fn new(
        shift_id: ShiftId,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<Self, ModelError> {
        if shift_id.as_str().trim().is_empty() {
            return Err(ModelError::EmptyShiftId);
        }
        if end_time <= start_time {
            return Err(ModelError::InvalidTimeRange);
        }
        Ok(Self {
            shift_id,
            date,
            start_time,
            end_time,
        })
    }

    /// Shift du matin : commence avant midi.
    pub fn is_morning(&self) -> bool {
        self.start_time.hour() < 12
    }
}

/// Affectation d'un employé à un shift
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub employee_id: EmployeeId,
    pub shift_id: ShiftId,
}

/// Configuration métier (plafond d'heures par jour et par employé).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(with = "rust_decimal::serde::float")]
    pub max_daily_hours: Decimal,
}

impl Config {
    pub fn new(max_daily_hours: Decimal) -> Result<Self, ModelError> {
        if max_daily_hours <= Decimal::ZERO {
            return Err(ModelError::NonPositiveLimit);
        }
        Ok(Self { max_daily_hours })
    }
}
