use super::DataStore;
use crate::error::Result;
use crate::model::{Customer, Hotel, HotelId, Reservation};
use std::collections::BTreeMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    hotels: BTreeMap<HotelId, Hotel>,
    customers: Vec<Customer>,
    reservations: Vec<Reservation>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load_hotels(&self) -> Result<BTreeMap<HotelId, Hotel>> {
        Ok(self.hotels.clone())
    }

    fn save_hotels(&mut self, hotels: &BTreeMap<HotelId, Hotel>) -> Result<()> {
        self.hotels = hotels.clone();
        Ok(())
    }

    fn load_customers(&self) -> Result<Vec<Customer>> {
        Ok(self.customers.clone())
    }

    fn save_customers(&mut self, customers: &[Customer]) -> Result<()> {
        self.customers = customers.to_vec();
        Ok(())
    }

    fn load_reservations(&self) -> Result<Vec<Reservation>> {
        Ok(self.reservations.clone())
    }

    fn save_reservations(&mut self, reservations: &[Reservation]) -> Result<()> {
        self.reservations = reservations.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Seeds raw store state, bypassing the registry, for tests that need
    /// a pre-existing (possibly inconsistent) store.
    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_hotel(mut self, id: HotelId, name: &str, rooms: u32) -> Self {
            let mut hotels = self.store.load_hotels().unwrap();
            hotels.insert(id, Hotel::new(name.to_string(), rooms));
            self.store.save_hotels(&hotels).unwrap();
            self
        }

        pub fn with_linked_hotel(
            mut self,
            id: HotelId,
            name: &str,
            rooms: u32,
            reservations: &[u32],
        ) -> Self {
            let mut hotels = self.store.load_hotels().unwrap();
            let mut hotel = Hotel::new(name.to_string(), rooms);
            hotel.reservations = reservations.to_vec();
            hotels.insert(id, hotel);
            self.store.save_hotels(&hotels).unwrap();
            self
        }

        pub fn with_customer(mut self, id: u32, name: &str) -> Self {
            let mut customers = self.store.load_customers().unwrap();
            customers.push(Customer::new(
                id,
                name.to_string(),
                "555-0100".to_string(),
                format!("{}@example.com", name.to_lowercase()),
            ));
            self.store.save_customers(&customers).unwrap();
            self
        }

        pub fn with_reservation(mut self, id: u32, customer_id: u32, room_count: u32) -> Self {
            let mut reservations = self.store.load_reservations().unwrap();
            reservations.push(Reservation::new(id, customer_id, room_count));
            self.store.save_reservations(&reservations).unwrap();
            self
        }
    }
}
