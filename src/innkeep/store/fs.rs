use super::DataStore;
use crate::error::Result;
use crate::model::{Customer, Hotel, HotelId, Reservation};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const HOTELS_FILE: &str = "hotels.json";
const CUSTOMERS_FILE: &str = "customers.json";
const RESERVATIONS_FILE: &str = "reservations.json";

pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir)?;
        }
        Ok(())
    }

    fn load_json<T: DeserializeOwned + Default>(&self, filename: &str) -> Result<T> {
        let path = self.data_dir.join(filename);
        if !path.exists() {
            // First run: no store yet
            return Ok(T::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Writes to `<filename>.tmp` and renames over the target, so an
    /// interrupted save never leaves a half-written store behind.
    fn save_json<T: Serialize>(&self, filename: &str, value: &T) -> Result<()> {
        self.ensure_dir()?;
        let path = self.data_dir.join(filename);
        let tmp = self.data_dir.join(format!("{}.tmp", filename));
        let content = serde_json::to_string_pretty(value)?;
        fs::write(&tmp, content)?;
        fs::rename(tmp, path)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_hotels(&self) -> Result<BTreeMap<HotelId, Hotel>> {
        self.load_json(HOTELS_FILE)
    }

    fn save_hotels(&mut self, hotels: &BTreeMap<HotelId, Hotel>) -> Result<()> {
        self.save_json(HOTELS_FILE, hotels)
    }

    fn load_customers(&self) -> Result<Vec<Customer>> {
        self.load_json(CUSTOMERS_FILE)
    }

    fn save_customers(&mut self, customers: &[Customer]) -> Result<()> {
        self.save_json(CUSTOMERS_FILE, &customers)
    }

    fn load_reservations(&self) -> Result<Vec<Reservation>> {
        self.load_json(RESERVATIONS_FILE)
    }

    fn save_reservations(&mut self, reservations: &[Reservation]) -> Result<()> {
        self.save_json(RESERVATIONS_FILE, &reservations)
    }
}
