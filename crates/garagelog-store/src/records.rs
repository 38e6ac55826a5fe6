//! Store for logged service records

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use garagelog_domain::model::ServiceRecord;
use garagelog_domain::repository::ServiceRecordRepository;
use garagelog_types::Result;

/// Persistent store for service history
pub struct ServiceRecordStore {
    store_path: PathBuf,
    records: HashMap<String, ServiceRecord>,
}

impl ServiceRecordStore {
    /// Create or load a service record store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("service_records.json");

        let records = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_default()
        } else {
            HashMap::new()
        };

        Ok(Self { store_path, records })
    }

    fn persist(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.records)?;
        Ok(())
    }

    /// Get total record count
    pub fn count(&self) -> usize {
        self.records.len()
    }

    fn sorted_newest_first(mut records: Vec<ServiceRecord>) -> Vec<ServiceRecord> {
        // Newest first; mileage breaks same-day ties
        records.sort_by(|a, b| b.date.cmp(&a.date).then(b.mileage_km.cmp(&a.mileage_km)));
        records
    }
}

impl ServiceRecordRepository for ServiceRecordStore {
    fn save(&mut self, record: &ServiceRecord) -> Result<()> {
        self.records.insert(record.id.clone(), record.clone());
        self.persist()
    }

    fn find_by_vehicle(&self, vehicle_id: &str) -> Result<Vec<ServiceRecord>> {
        let records: Vec<_> = self
            .records
            .values()
            .filter(|r| r.vehicle_id == vehicle_id)
            .cloned()
            .collect();
        Ok(Self::sorted_newest_first(records))
    }

    fn find_all(&self) -> Result<Vec<ServiceRecord>> {
        Ok(Self::sorted_newest_first(
            self.records.values().cloned().collect(),
        ))
    }
}
