use crate::model::Employee;
#[cfg(feature = "csv")]
use crate::{
    model::{parse_clock, EmployeeDetails, Shift, ShiftId},
    scheduler::ScheduledShift,
};
#[cfg(feature = "csv")]
use anyhow::{bail, Context};
#[cfg(feature = "csv")]
use chrono::NaiveDate;
#[cfg(feature = "csv")]
use csv::{ReaderBuilder, WriterBuilder};
use std::fmt::Write as _;
#[cfg(feature = "csv")]
use std::path::Path;

/// Import d'employés depuis CSV: header `name,phone`
#[cfg(feature = "csv")]
pub fn import_employees_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<EmployeeDetails>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?;
        let phone = rec.get(1).context("missing phone")?;
        let details = EmployeeDetails::new(name, phone)
            .with_context(|| format!("invalid employee row {}", line + 1))?;
        out.push(details);
    }
    Ok(out)
}

/// Import de shifts: header `shiftId,date,startTime,endTime` (`YYYY-MM-DD`, `HH:MM`)
#[cfg(feature = "csv")]
pub fn import_shifts_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Shift>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let id = rec.get(0).context("missing shiftId")?.trim();
        if id.is_empty() {
            bail!("invalid shift row (empty shiftId)");
        }
        let date = rec.get(1).context("missing date")?.trim();
        let start = rec.get(2).context("missing startTime")?.trim();
        let end = rec.get(3).context("missing endTime")?.trim();
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .with_context(|| format!("invalid date for shift {id}"))?;
        let start = parse_clock(start).with_context(|| format!("startTime of shift {id}"))?;
        let end = parse_clock(end).with_context(|| format!("endTime of shift {id}"))?;
        let shift = Shift::new(ShiftId::new(id), date, start, end)
            .with_context(|| format!("invalid shift {id}"))?;
        out.push(shift);
    }
    Ok(out)
}

/// Export CSV d'un planning: header `date,start,end`
#[cfg(feature = "csv")]
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, schedule: &[ScheduledShift]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["date", "start", "end"])?;
    for entry in schedule {
        let date = entry.shift.date.format("%Y-%m-%d").to_string();
        let start = entry.shift.start_time.format("%H:%M").to_string();
        let end = entry.shift.end_time.format("%H:%M").to_string();
        w.write_record([date.as_str(), start.as_str(), end.as_str()])?;
    }
    w.flush()?;
    Ok(())
}

/// Tableau à largeur fixe de la liste des employés.
pub fn render_employee_table(employees: &[Employee]) -> String {
    let mut out = String::new();
    out.push_str("Employee ID  Name                Phone\n");
    out.push_str("-----------  ------------------- ---------\n");
    for emp in employees {
        let _ = writeln!(
            out,
            "{:<13}{:<20}{}",
            emp.employee_id.as_str(),
            emp.name,
            emp.phone
        );
    }
    out
}
