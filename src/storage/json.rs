use super::{RecordStore, RosterData, StoreError};
use crate::model::{Assignment, Config, Employee, EmployeeDetails, EmployeeId, Shift, ShiftId};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::sync::Mutex;
use tracing::debug;

/// Stockage fichiers : un `roster.json` (employés, shifts, affectations) et un
/// `config.json` (plafond journalier). Chaque lecture relit le disque.
#[derive(Debug)]
pub struct JsonStore {
    roster_path: PathBuf,
    config_path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonStore {
    pub fn open<R: AsRef<Path>, C: AsRef<Path>>(roster_path: R, config_path: C) -> Self {
        Self {
            roster_path: roster_path.as_ref().to_path_buf(),
            config_path: config_path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn roster_path(&self) -> &Path {
        &self.roster_path
    }

    /// Charge le roster ; un fichier absent donne un roster vide.
    pub async fn load(&self) -> Result<RosterData, StoreError> {
        let bytes = match tokio::fs::read(&self.roster_path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.roster_path.display(), "roster file missing, starting empty");
                return Ok(RosterData::default());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.roster_path.clone(),
                    source,
                })
            }
        };
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
            path: self.roster_path.clone(),
            source,
        })
    }

    /// Remplace le fichier de configuration (écriture atomique).
    pub async fn save_config(&self, config: &Config) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let json = serde_json::to_vec_pretty(config).map_err(|source| StoreError::Parse {
            path: self.config_path.clone(),
            source,
        })?;
        persist(self.config_path.clone(), json).await
    }

    async fn save(&self, data: &RosterData) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(data).map_err(|source| StoreError::Parse {
            path: self.roster_path.clone(),
            source,
        })?;
        persist(self.roster_path.clone(), json).await
    }

    /// Lecture-modification-écriture sérialisée par `write_lock`.
    async fn update<T, F>(&self, mutate: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut RosterData) -> Result<T, StoreError> + Send,
        T: Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut data = self.load().await?;
        let out = mutate(&mut data)?;
        self.save(&data).await?;
        debug!(path = %self.roster_path.display(), "roster saved");
        Ok(out)
    }
}

async fn persist(path: PathBuf, bytes: Vec<u8>) -> Result<(), StoreError> {
    tokio::task::spawn_blocking(move || {
        write_atomic(&path, &bytes).map_err(|source| StoreError::Write { path, source })
    })
    .await?
}

fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}

impl RecordStore for JsonStore {
    async fn find_employee(&self, id: &EmployeeId) -> Result<Option<Employee>, StoreError> {
        Ok(self.load().await?.find_employee(id).cloned())
    }

    async fn find_shift(&self, id: &ShiftId) -> Result<Option<Shift>, StoreError> {
        Ok(self.load().await?.find_shift(id).cloned())
    }

    async fn find_assignment(
        &self,
        employee: &EmployeeId,
        shift: &ShiftId,
    ) -> Result<Option<Assignment>, StoreError> {
        Ok(self.load().await?.find_assignment(employee, shift).cloned())
    }

    async fn employee_shifts(&self, employee: &EmployeeId) -> Result<Vec<Shift>, StoreError> {
        Ok(self.load().await?.employee_shifts(employee))
    }

    async fn config(&self) -> Result<Config, StoreError> {
        let bytes = tokio::fs::read(&self.config_path)
            .await
            .map_err(|source| StoreError::Read {
                path: self.config_path.clone(),
                source,
            })?;
        let raw: Config = serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
            path: self.config_path.clone(),
            source,
        })?;
        Config::new(raw.max_daily_hours).map_err(|source| StoreError::InvalidConfig {
            path: self.config_path.clone(),
            source,
        })
    }

    async fn add_assignment(&self, employee: &EmployeeId, shift: &ShiftId) -> Result<(), StoreError> {
        self.update(|data| {
            data.add_assignment(employee, shift);
            Ok(())
        })
        .await
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError> {
        Ok(self.load().await?.employees)
    }

    async fn list_shifts(&self) -> Result<Vec<Shift>, StoreError> {
        Ok(self.load().await?.shifts)
    }

    async fn insert_employee(&self, details: EmployeeDetails) -> Result<Employee, StoreError> {
        self.update(|data| Ok(data.insert_employee(details))).await
    }

    async fn update_employee(
        &self,
        id: &EmployeeId,
        details: EmployeeDetails,
    ) -> Result<Option<Employee>, StoreError> {
        self.update(|data| Ok(data.update_employee(id, details))).await
    }

    async fn add_shift(&self, shift: Shift) -> Result<(), StoreError> {
        self.update(|data| data.add_shift(shift)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use tempfile::tempdir;

    #[tokio::test]
    async fn missing_roster_is_empty_but_missing_config_fails() {
        let dir = tempdir().unwrap();
        let store = JsonStore::open(dir.path().join("roster.json"), dir.path().join("config.json"));
        assert_eq!(store.load().await.unwrap(), RosterData::default());
        assert!(matches!(store.config().await, Err(StoreError::Read { .. })));
    }

    #[tokio::test]
    async fn writes_survive_reopen() {
        let dir = tempdir().unwrap();
        let roster = dir.path().join("roster.json");
        let config = dir.path().join("config.json");

        let store = JsonStore::open(&roster, &config);
        store
            .save_config(&Config::new(Decimal::from(8)).unwrap())
            .await
            .unwrap();
        let alice = store
            .insert_employee(EmployeeDetails::new("Alice", "1111-2222").unwrap())
            .await
            .unwrap();
        store.add_assignment(&alice.employee_id, &ShiftId::new("S1")).await.unwrap();
        drop(store);

        let reopened = JsonStore::open(&roster, &config);
        assert_eq!(reopened.config().await.unwrap().max_daily_hours, Decimal::from(8));
        assert_eq!(reopened.list_employees().await.unwrap(), vec![alice.clone()]);
        assert!(reopened
            .find_assignment(&alice.employee_id, &ShiftId::new("S1"))
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn malformed_roster_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let roster = dir.path().join("roster.json");
        std::fs::write(&roster, b"{ not json").unwrap();
        let store = JsonStore::open(&roster, dir.path().join("config.json"));
        assert!(matches!(
            store.find_employee(&EmployeeId::new("E001")).await,
            Err(StoreError::Parse { .. })
        ));
    }

    #[tokio::test]
    async fn non_positive_limit_is_rejected() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("config.json");
        std::fs::write(&config, br#"{"maxDailyHours": 0}"#).unwrap();
        let store = JsonStore::open(dir.path().join("roster.json"), &config);
        assert!(matches!(store.config().await, Err(StoreError::InvalidConfig { .. })));
    }
}
