//! Store for per-vehicle maintenance schedules
//!
//! Keyed by "vehicle_id/service_type" so each pair has exactly one row.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use garagelog_domain::model::ScheduleRecord;
use garagelog_domain::repository::ScheduleRepository;
use garagelog_types::Result;

/// Persistent store for maintenance schedules
pub struct ScheduleStore {
    store_path: PathBuf,
    schedules: HashMap<String, ScheduleRecord>,
}

fn key(vehicle_id: &str, service_type: &str) -> String {
    format!("{}/{}", vehicle_id, service_type)
}

impl ScheduleStore {
    /// Create or load a schedule store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("schedules.json");

        let schedules = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_default()
        } else {
            HashMap::new()
        };

        Ok(Self { store_path, schedules })
    }

    fn persist(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.schedules)?;
        Ok(())
    }

    /// Get total schedule count
    pub fn count(&self) -> usize {
        self.schedules.len()
    }
}

impl ScheduleRepository for ScheduleStore {
    fn save(&mut self, schedule: &ScheduleRecord) -> Result<()> {
        self.schedules.insert(
            key(&schedule.vehicle_id, &schedule.service_type),
            schedule.clone(),
        );
        self.persist()
    }

    fn find(&self, vehicle_id: &str, service_type: &str) -> Result<Option<ScheduleRecord>> {
        Ok(self.schedules.get(&key(vehicle_id, service_type)).cloned())
    }

    fn find_by_vehicle(&self, vehicle_id: &str) -> Result<Vec<ScheduleRecord>> {
        Ok(self
            .schedules
            .values()
            .filter(|s| s.vehicle_id == vehicle_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    #[test]
    fn test_upsert_replaces_pair() {
        let dir = tempdir().unwrap();
        let mut store = ScheduleStore::open(dir.path().to_path_buf()).unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();

        store
            .save(&ScheduleRecord {
                vehicle_id: "v1".to_string(),
                service_type: "Oil Change".to_string(),
                last_performed_km: 40_000,
                last_performed_date: Some(date),
            })
            .unwrap();
        store
            .save(&ScheduleRecord {
                vehicle_id: "v1".to_string(),
                service_type: "Oil Change".to_string(),
                last_performed_km: 45_000,
                last_performed_date: Some(date),
            })
            .unwrap();

        assert_eq!(store.count(), 1);
        let schedule = store.find("v1", "Oil Change").unwrap().unwrap();
        assert_eq!(schedule.last_performed_km, 45_000);
    }

    #[test]
    fn test_missing_pair_is_none() {
        let dir = tempdir().unwrap();
        let store = ScheduleStore::open(dir.path().to_path_buf()).unwrap();
        assert!(store.find("v1", "Tire Rotation").unwrap().is_none());
    }

    #[test]
    fn test_reload_from_disk() {
        let dir = tempdir().unwrap();
        {
            let mut store = ScheduleStore::open(dir.path().to_path_buf()).unwrap();
            store
                .save(&ScheduleRecord::never_performed("v1", "Brake Inspection"))
                .unwrap();
        }
        let store = ScheduleStore::open(dir.path().to_path_buf()).unwrap();
        let schedule = store.find("v1", "Brake Inspection").unwrap().unwrap();
        assert_eq!(schedule.last_performed_km, 0);
        assert!(schedule.last_performed_date.is_none());
    }
}
