//! Vehicle store for registered vehicles

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use garagelog_domain::model::Vehicle;
use garagelog_domain::repository::VehicleRepository;
use garagelog_types::{Error, Result};

/// Persistent store for registered vehicles
pub struct VehicleStore {
    store_path: PathBuf,
    vehicles: HashMap<String, Vehicle>,
}

impl VehicleStore {
    /// Create or load a vehicle store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("vehicles.json");

        let vehicles = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_default()
        } else {
            HashMap::new()
        };

        Ok(Self { store_path, vehicles })
    }

    /// Save store to disk
    fn persist(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.vehicles)?;
        Ok(())
    }

    /// Add a new vehicle, returning its ID
    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<String> {
        let id = vehicle.id.clone();
        self.vehicles.insert(id.clone(), vehicle);
        self.persist()?;
        Ok(id)
    }

    /// Remove a vehicle by ID
    pub fn remove_vehicle(&mut self, id: &str) -> Result<bool> {
        let removed = self.vehicles.remove(id).is_some();
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Get all vehicles sorted by label
    pub fn all_vehicles(&self) -> Vec<&Vehicle> {
        let mut vehicles: Vec<_> = self.vehicles.values().collect();
        vehicles.sort_by_key(|v| v.label());
        vehicles
    }

    /// Resolve a user-supplied reference: exact ID, unique ID prefix,
    /// or license plate.
    pub fn resolve(&self, reference: &str) -> Result<Vehicle> {
        if let Some(v) = self.vehicles.get(reference) {
            return Ok(v.clone());
        }
        if let Some(v) = self.vehicles.values().find(|v| {
            v.license_plate
                .as_ref()
                .map(|p| p == reference)
                .unwrap_or(false)
        }) {
            return Ok(v.clone());
        }
        let matches: Vec<_> = self
            .vehicles
            .values()
            .filter(|v| v.id.starts_with(reference))
            .collect();
        match matches.len() {
            0 => Err(Error::VehicleNotFound(reference.to_string())),
            1 => Ok(matches[0].clone()),
            _ => Err(Error::AmbiguousVehicle(reference.to_string())),
        }
    }

    /// Get total vehicle count
    pub fn count(&self) -> usize {
        self.vehicles.len()
    }
}

impl VehicleRepository for VehicleStore {
    fn save(&mut self, vehicle: &Vehicle) -> Result<()> {
        self.vehicles.insert(vehicle.id.clone(), vehicle.clone());
        self.persist()
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Vehicle>> {
        Ok(self.vehicles.get(id).cloned())
    }

    fn find_by_plate(&self, plate: &str) -> Result<Option<Vehicle>> {
        Ok(self
            .vehicles
            .values()
            .find(|v| v.license_plate.as_deref() == Some(plate))
            .cloned())
    }

    fn find_all(&self) -> Result<Vec<Vehicle>> {
        Ok(self.all_vehicles().into_iter().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn corolla() -> Vehicle {
        Vehicle {
            id: "6f1c9c2e-0000-4000-8000-000000000001".to_string(),
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2020,
            mileage_km: 45_000,
            color: Some("White".to_string()),
            license_plate: Some("ABC-123".to_string()),
            vin: None,
        }
    }

    #[test]
    fn test_add_and_reload() {
        let dir = tempdir().unwrap();
        {
            let mut store = VehicleStore::open(dir.path().to_path_buf()).unwrap();
            store.add_vehicle(corolla()).unwrap();
            assert_eq!(store.count(), 1);
        }
        let store = VehicleStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(store.count(), 1);
        assert_eq!(store.all_vehicles()[0].make, "Toyota");
    }

    #[test]
    fn test_resolve_by_prefix_and_plate() {
        let dir = tempdir().unwrap();
        let mut store = VehicleStore::open(dir.path().to_path_buf()).unwrap();
        store.add_vehicle(corolla()).unwrap();

        assert_eq!(store.resolve("6f1c9c2e").unwrap().model, "Corolla");
        assert_eq!(store.resolve("ABC-123").unwrap().model, "Corolla");
        assert!(matches!(
            store.resolve("nope"),
            Err(Error::VehicleNotFound(_))
        ));
    }

    #[test]
    fn test_remove_vehicle() {
        let dir = tempdir().unwrap();
        let mut store = VehicleStore::open(dir.path().to_path_buf()).unwrap();
        let id = store.add_vehicle(corolla()).unwrap();
        assert!(store.remove_vehicle(&id).unwrap());
        assert!(!store.remove_vehicle(&id).unwrap());
        assert_eq!(store.count(), 0);
    }
}
