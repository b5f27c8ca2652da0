//! # Registry
//!
//! The registry is the exclusive owner of the three in-memory collections
//! (hotels, customers, reservations) and the only mutator of persisted
//! state. It deserializes into typed records exactly once at [`Registry::open`]
//! and persists whole collections through the [`DataStore`] gateway after
//! every mutating operation. Read operations never write.
//!
//! Every operation returns a typed value or an [`InnkeepError`](crate::error::InnkeepError);
//! nothing here touches stdout, stderr, or process exit codes.

use crate::error::{InnkeepError, Result};
use crate::model::{Customer, CustomerId, Hotel, HotelId, Reservation, ReservationId};
use crate::store::DataStore;
use std::collections::{BTreeMap, BTreeSet};

/// Partial update for a hotel. `None` leaves the field unchanged;
/// `Some(value)` replaces it, so rooms can be set to 0 explicitly.
#[derive(Debug, Clone, Default)]
pub struct HotelUpdate {
    pub name: Option<String>,
    pub rooms: Option<u32>,
}

/// Partial update for a customer. `Some("")` clears phone or email;
/// the name must stay non-empty.
#[derive(Debug, Clone, Default)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Report from the `doctor` operation.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DoctorReport {
    /// Reservation ids dropped from hotel link lists (no backing record).
    pub dropped_links: usize,
    /// Reservation records removed because no hotel links them.
    pub removed_orphans: usize,
}

impl DoctorReport {
    pub fn is_clean(&self) -> bool {
        self.dropped_links == 0 && self.removed_orphans == 0
    }
}

pub struct Registry<S: DataStore> {
    store: S,
    hotels: BTreeMap<HotelId, Hotel>,
    customers: Vec<Customer>,
    reservations: Vec<Reservation>,
    next_hotel_id: HotelId,
    next_customer_id: CustomerId,
    next_reservation_id: ReservationId,
}

impl<S: DataStore> Registry<S> {
    /// Loads all three collections and prepares the registry for use.
    ///
    /// Id counters resume from the highest persisted id, so deleting a
    /// record never frees its id for reuse. Hotel link lists are pruned of
    /// reservation ids with no backing record before the registry is
    /// handed out (the record write is always the second of the two saves,
    /// so a crash can leave a link ahead of its record).
    pub fn open(store: S) -> Result<Self> {
        let hotels = store.load_hotels()?;
        let customers = store.load_customers()?;
        let reservations = store.load_reservations()?;

        let next_hotel_id = hotels.keys().max().copied().unwrap_or(0) + 1;
        let next_customer_id = customers
            .iter()
            .map(|c| c.customer_id)
            .max()
            .unwrap_or(0)
            + 1;
        let next_reservation_id = reservations
            .iter()
            .map(|r| r.reservation_id)
            .chain(hotels.values().flat_map(|h| h.reservations.iter().copied()))
            .max()
            .unwrap_or(0)
            + 1;

        let mut registry = Self {
            store,
            hotels,
            customers,
            reservations,
            next_hotel_id,
            next_customer_id,
            next_reservation_id,
        };
        registry.prune_dangling_links();
        Ok(registry)
    }

    // --- Hotels ---

    pub fn create_hotel(&mut self, name: &str, rooms: u32) -> Result<HotelId> {
        if name.trim().is_empty() {
            return Err(InnkeepError::Invalid("hotel name must not be empty".into()));
        }
        let id = self.next_hotel_id;
        self.next_hotel_id += 1;
        self.hotels.insert(id, Hotel::new(name.to_string(), rooms));
        self.store.save_hotels(&self.hotels)?;
        Ok(id)
    }

    /// Removes a hotel. Blocked while the hotel has active reservations,
    /// symmetric with [`Registry::delete_customer`].
    pub fn delete_hotel(&mut self, id: HotelId) -> Result<Hotel> {
        let hotel = self
            .hotels
            .get(&id)
            .ok_or(InnkeepError::HotelNotFound(id))?;
        if !hotel.reservations.is_empty() {
            return Err(InnkeepError::HotelHasReservations(id));
        }
        let hotel = self
            .hotels
            .remove(&id)
            .ok_or(InnkeepError::HotelNotFound(id))?;
        self.store.save_hotels(&self.hotels)?;
        Ok(hotel)
    }

    pub fn update_hotel(&mut self, id: HotelId, update: HotelUpdate) -> Result<&Hotel> {
        let hotel = self
            .hotels
            .get_mut(&id)
            .ok_or(InnkeepError::HotelNotFound(id))?;
        if matches!(update.name.as_deref(), Some(n) if n.trim().is_empty()) {
            return Err(InnkeepError::Invalid("hotel name must not be empty".into()));
        }
        if let Some(name) = update.name {
            hotel.name = name;
        }
        if let Some(rooms) = update.rooms {
            hotel.rooms = rooms;
        }
        self.store.save_hotels(&self.hotels)?;
        self.hotel(id)
    }

    pub fn hotel(&self, id: HotelId) -> Result<&Hotel> {
        self.hotels.get(&id).ok_or(InnkeepError::HotelNotFound(id))
    }

    pub fn hotels(&self) -> &BTreeMap<HotelId, Hotel> {
        &self.hotels
    }

    // --- Customers ---

    pub fn create_customer(&mut self, name: &str, phone: &str, email: &str) -> Result<&Customer> {
        if name.trim().is_empty() {
            return Err(InnkeepError::Invalid(
                "customer name must not be empty".into(),
            ));
        }
        let id = self.next_customer_id;
        self.next_customer_id += 1;
        self.customers.push(Customer::new(
            id,
            name.to_string(),
            phone.to_string(),
            email.to_string(),
        ));
        self.store.save_customers(&self.customers)?;
        self.customer(id)
    }

    pub fn update_customer(&mut self, id: CustomerId, update: CustomerUpdate) -> Result<&Customer> {
        let customer = self
            .customers
            .iter_mut()
            .find(|c| c.customer_id == id)
            .ok_or(InnkeepError::CustomerNotFound(id))?;
        if matches!(update.name.as_deref(), Some(n) if n.trim().is_empty()) {
            return Err(InnkeepError::Invalid(
                "customer name must not be empty".into(),
            ));
        }
        if let Some(name) = update.name {
            customer.name = name;
        }
        if let Some(phone) = update.phone {
            customer.phone = phone;
        }
        if let Some(email) = update.email {
            customer.email = email;
        }
        self.store.save_customers(&self.customers)?;
        self.customer(id)
    }

    /// Removes a customer. Blocked while any reservation references the
    /// customer id.
    pub fn delete_customer(&mut self, id: CustomerId) -> Result<Customer> {
        let pos = self
            .customers
            .iter()
            .position(|c| c.customer_id == id)
            .ok_or(InnkeepError::CustomerNotFound(id))?;
        if self.reservations.iter().any(|r| r.customer_id == id) {
            return Err(InnkeepError::CustomerHasReservations(id));
        }
        let customer = self.customers.remove(pos);
        self.store.save_customers(&self.customers)?;
        Ok(customer)
    }

    pub fn customer(&self, id: CustomerId) -> Result<&Customer> {
        self.customers
            .iter()
            .find(|c| c.customer_id == id)
            .ok_or(InnkeepError::CustomerNotFound(id))
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    // --- Reservations ---

    /// Books `room_count` rooms at a hotel for an existing customer.
    ///
    /// Persist order is part of the contract: hotels are written before
    /// reservations, so a crash between the two writes leaves the on-disk
    /// capacity view conservative (undercounts availability, never
    /// overcounts).
    pub fn make_reservation(
        &mut self,
        hotel_id: HotelId,
        customer_id: CustomerId,
        room_count: u32,
    ) -> Result<&Reservation> {
        if room_count == 0 {
            return Err(InnkeepError::Invalid("room count must be at least 1".into()));
        }
        if !self.customers.iter().any(|c| c.customer_id == customer_id) {
            return Err(InnkeepError::CustomerNotFound(customer_id));
        }
        let hotel = self
            .hotels
            .get_mut(&hotel_id)
            .ok_or(InnkeepError::HotelNotFound(hotel_id))?;
        if room_count > hotel.rooms {
            return Err(InnkeepError::NoVacancy {
                hotel_id,
                requested: room_count,
                available: hotel.rooms,
            });
        }

        let reservation_id = self.next_reservation_id;
        self.next_reservation_id += 1;
        hotel.rooms -= room_count;
        hotel.reservations.push(reservation_id);
        self.reservations
            .push(Reservation::new(reservation_id, customer_id, room_count));

        self.store.save_hotels(&self.hotels)?;
        self.store.save_reservations(&self.reservations)?;

        self.reservations
            .iter()
            .find(|r| r.reservation_id == reservation_id)
            .ok_or(InnkeepError::ReservationNotFound(reservation_id))
    }

    /// Cancels a reservation and refunds its rooms to the hotel. The
    /// reservation must be charged against the given hotel; a reservation
    /// held at a different hotel is not found from this hotel's view.
    pub fn cancel_reservation(
        &mut self,
        hotel_id: HotelId,
        reservation_id: ReservationId,
    ) -> Result<Reservation> {
        if !self.hotels.contains_key(&hotel_id) {
            return Err(InnkeepError::HotelNotFound(hotel_id));
        }
        let pos = self
            .reservations
            .iter()
            .position(|r| r.reservation_id == reservation_id)
            .ok_or(InnkeepError::ReservationNotFound(reservation_id))?;
        let hotel = self
            .hotels
            .get_mut(&hotel_id)
            .ok_or(InnkeepError::HotelNotFound(hotel_id))?;
        if !hotel.reservations.contains(&reservation_id) {
            return Err(InnkeepError::ReservationNotFound(reservation_id));
        }

        let reservation = self.reservations.remove(pos);
        hotel.rooms += reservation.room_count;
        hotel.reservations.retain(|id| *id != reservation_id);

        self.store.save_hotels(&self.hotels)?;
        self.store.save_reservations(&self.reservations)?;
        Ok(reservation)
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    // --- Consistency ---

    /// Repairs hotel↔reservation linkage and persists any change.
    ///
    /// Link lists are treated as authoritative for membership: a record no
    /// hotel links is removed, and a link with no backing record is
    /// dropped. Both shapes are the residue of a crash between the two
    /// collection writes (hotels are always written first).
    pub fn doctor(&mut self) -> Result<DoctorReport> {
        let dropped_links = self.prune_dangling_links();

        let linked: BTreeSet<ReservationId> = self
            .hotels
            .values()
            .flat_map(|h| h.reservations.iter().copied())
            .collect();
        let before = self.reservations.len();
        self.reservations
            .retain(|r| linked.contains(&r.reservation_id));
        let removed_orphans = before - self.reservations.len();

        if dropped_links > 0 {
            self.store.save_hotels(&self.hotels)?;
        }
        if removed_orphans > 0 {
            self.store.save_reservations(&self.reservations)?;
        }
        Ok(DoctorReport {
            dropped_links,
            removed_orphans,
        })
    }

    fn prune_dangling_links(&mut self) -> usize {
        let known: BTreeSet<ReservationId> = self
            .reservations
            .iter()
            .map(|r| r.reservation_id)
            .collect();
        let mut dropped = 0;
        for hotel in self.hotels.values_mut() {
            let before = hotel.reservations.len();
            hotel.reservations.retain(|id| known.contains(id));
            dropped += before - hotel.reservations.len();
        }
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fs::FileStore;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn registry() -> Registry<InMemoryStore> {
        Registry::open(InMemoryStore::new()).unwrap()
    }

    fn registry_with_guest() -> (Registry<InMemoryStore>, HotelId, CustomerId) {
        let mut reg = registry();
        let hotel_id = reg.create_hotel("Test Hotel", 10).unwrap();
        let customer_id = reg
            .create_customer("A", "555", "a@x.com")
            .unwrap()
            .customer_id;
        (reg, hotel_id, customer_id)
    }

    #[test]
    fn create_hotel_assigns_sequential_ids() {
        let mut reg = registry();
        assert_eq!(reg.create_hotel("First", 10).unwrap(), 1);
        assert_eq!(reg.create_hotel("Second", 20).unwrap(), 2);
        assert_eq!(reg.hotel(1).unwrap().rooms, 10);
        assert_eq!(reg.hotel(2).unwrap().rooms, 20);
    }

    #[test]
    fn create_hotel_rejects_empty_name() {
        let mut reg = registry();
        assert!(matches!(
            reg.create_hotel("  ", 10),
            Err(InnkeepError::Invalid(_))
        ));
        assert!(reg.hotels().is_empty());
    }

    #[test]
    fn hotel_ids_are_not_reused_after_delete() {
        let mut reg = registry();
        reg.create_hotel("One", 1).unwrap();
        let second = reg.create_hotel("Two", 2).unwrap();
        reg.delete_hotel(second).unwrap();
        assert_eq!(reg.create_hotel("Three", 3).unwrap(), 3);
    }

    #[test]
    fn delete_missing_hotel_is_not_found() {
        let mut reg = registry();
        reg.create_hotel("Keeper", 5).unwrap();
        assert!(matches!(
            reg.delete_hotel(9),
            Err(InnkeepError::HotelNotFound(9))
        ));
        assert_eq!(reg.hotels().len(), 1);
    }

    #[test]
    fn delete_hotel_with_active_reservations_is_blocked() {
        let (mut reg, hotel_id, customer_id) = registry_with_guest();
        reg.make_reservation(hotel_id, customer_id, 2).unwrap();

        assert!(matches!(
            reg.delete_hotel(hotel_id),
            Err(InnkeepError::HotelHasReservations(_))
        ));

        let reservation_id = reg.reservations()[0].reservation_id;
        reg.cancel_reservation(hotel_id, reservation_id).unwrap();
        assert!(reg.delete_hotel(hotel_id).is_ok());
    }

    #[test]
    fn update_hotel_replaces_only_given_fields() {
        let mut reg = registry();
        let id = reg.create_hotel("Old Name", 10).unwrap();

        reg.update_hotel(
            id,
            HotelUpdate {
                name: Some("New Name".into()),
                rooms: None,
            },
        )
        .unwrap();
        assert_eq!(reg.hotel(id).unwrap().name, "New Name");
        assert_eq!(reg.hotel(id).unwrap().rooms, 10);

        reg.update_hotel(
            id,
            HotelUpdate {
                name: None,
                rooms: Some(25),
            },
        )
        .unwrap();
        assert_eq!(reg.hotel(id).unwrap().name, "New Name");
        assert_eq!(reg.hotel(id).unwrap().rooms, 25);
    }

    #[test]
    fn update_hotel_with_no_fields_is_a_no_op() {
        let mut reg = registry();
        let id = reg.create_hotel("Stable", 7).unwrap();
        reg.update_hotel(id, HotelUpdate::default()).unwrap();
        assert_eq!(reg.hotel(id).unwrap().name, "Stable");
        assert_eq!(reg.hotel(id).unwrap().rooms, 7);
    }

    #[test]
    fn update_hotel_can_set_rooms_to_zero() {
        let mut reg = registry();
        let id = reg.create_hotel("Full", 7).unwrap();
        reg.update_hotel(
            id,
            HotelUpdate {
                name: None,
                rooms: Some(0),
            },
        )
        .unwrap();
        assert_eq!(reg.hotel(id).unwrap().rooms, 0);
    }

    #[test]
    fn update_hotel_rejects_empty_name() {
        let mut reg = registry();
        let id = reg.create_hotel("Named", 3).unwrap();
        assert!(matches!(
            reg.update_hotel(
                id,
                HotelUpdate {
                    name: Some("".into()),
                    rooms: None
                }
            ),
            Err(InnkeepError::Invalid(_))
        ));
        assert_eq!(reg.hotel(id).unwrap().name, "Named");
    }

    #[test]
    fn update_missing_hotel_is_not_found() {
        let mut reg = registry();
        assert!(matches!(
            reg.update_hotel(1, HotelUpdate::default()),
            Err(InnkeepError::HotelNotFound(1))
        ));
    }

    #[test]
    fn create_customer_returns_the_record() {
        let mut reg = registry();
        let customer = reg.create_customer("A", "555", "a@x.com").unwrap();
        assert_eq!(customer.customer_id, 1);
        assert_eq!(customer.name, "A");
        assert_eq!(customer.phone, "555");
        assert_eq!(customer.email, "a@x.com");
    }

    #[test]
    fn customer_ids_are_not_reused_after_delete() {
        let mut reg = registry();
        reg.create_customer("A", "1", "a@x.com").unwrap();
        reg.create_customer("B", "2", "b@x.com").unwrap();
        reg.delete_customer(2).unwrap();
        let customer = reg.create_customer("C", "3", "c@x.com").unwrap();
        assert_eq!(customer.customer_id, 3);
    }

    #[test]
    fn update_customer_replaces_only_given_fields() {
        let mut reg = registry();
        reg.create_customer("A", "555", "a@x.com").unwrap();

        reg.update_customer(
            1,
            CustomerUpdate {
                phone: Some("777".into()),
                ..Default::default()
            },
        )
        .unwrap();
        let customer = reg.customer(1).unwrap();
        assert_eq!(customer.name, "A");
        assert_eq!(customer.phone, "777");
        assert_eq!(customer.email, "a@x.com");
    }

    #[test]
    fn update_customer_can_clear_phone() {
        let mut reg = registry();
        reg.create_customer("A", "555", "a@x.com").unwrap();
        reg.update_customer(
            1,
            CustomerUpdate {
                phone: Some("".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(reg.customer(1).unwrap().phone, "");
    }

    #[test]
    fn update_customer_with_no_fields_is_a_no_op() {
        let mut reg = registry();
        reg.create_customer("A", "555", "a@x.com").unwrap();
        reg.update_customer(1, CustomerUpdate::default()).unwrap();
        let customer = reg.customer(1).unwrap();
        assert_eq!(
            (customer.name.as_str(), customer.phone.as_str()),
            ("A", "555")
        );
    }

    #[test]
    fn update_missing_customer_is_not_found() {
        let mut reg = registry();
        assert!(matches!(
            reg.update_customer(4, CustomerUpdate::default()),
            Err(InnkeepError::CustomerNotFound(4))
        ));
    }

    #[test]
    fn delete_customer_blocked_iff_reserved() {
        let (mut reg, hotel_id, customer_id) = registry_with_guest();
        reg.make_reservation(hotel_id, customer_id, 2).unwrap();

        assert!(matches!(
            reg.delete_customer(customer_id),
            Err(InnkeepError::CustomerHasReservations(_))
        ));

        let reservation_id = reg.reservations()[0].reservation_id;
        reg.cancel_reservation(hotel_id, reservation_id).unwrap();
        assert!(reg.delete_customer(customer_id).is_ok());
        assert!(reg.customers().is_empty());
    }

    #[test]
    fn delete_missing_customer_is_not_found() {
        let mut reg = registry();
        assert!(matches!(
            reg.delete_customer(1),
            Err(InnkeepError::CustomerNotFound(1))
        ));
    }

    #[test]
    fn booking_deducts_rooms_and_links_the_hotel() {
        let (mut reg, hotel_id, customer_id) = registry_with_guest();

        let reservation = reg.make_reservation(hotel_id, customer_id, 2).unwrap();
        assert_eq!(reservation.reservation_id, 1);
        assert_eq!(reservation.customer_id, customer_id);
        assert_eq!(reservation.room_count, 2);

        let hotel = reg.hotel(hotel_id).unwrap();
        assert_eq!(hotel.rooms, 8);
        assert_eq!(hotel.reservations, vec![1]);
        assert_eq!(reg.reservations().len(), 1);
    }

    #[test]
    fn booking_then_cancelling_restores_rooms() {
        let (mut reg, hotel_id, customer_id) = registry_with_guest();

        let reservation_id = reg
            .make_reservation(hotel_id, customer_id, 2)
            .unwrap()
            .reservation_id;
        assert_eq!(reg.hotel(hotel_id).unwrap().rooms, 8);

        reg.cancel_reservation(hotel_id, reservation_id).unwrap();
        let hotel = reg.hotel(hotel_id).unwrap();
        assert_eq!(hotel.rooms, 10);
        assert!(hotel.reservations.is_empty());
        assert!(reg.reservations().is_empty());
    }

    #[test]
    fn overbooking_fails_and_leaves_rooms_untouched() {
        let (mut reg, hotel_id, customer_id) = registry_with_guest();

        let err = reg.make_reservation(hotel_id, customer_id, 11).unwrap_err();
        assert!(matches!(
            err,
            InnkeepError::NoVacancy {
                requested: 11,
                available: 10,
                ..
            }
        ));
        assert_eq!(reg.hotel(hotel_id).unwrap().rooms, 10);
        assert!(reg.reservations().is_empty());
    }

    #[test]
    fn booking_zero_rooms_is_rejected() {
        let (mut reg, hotel_id, customer_id) = registry_with_guest();
        assert!(matches!(
            reg.make_reservation(hotel_id, customer_id, 0),
            Err(InnkeepError::Invalid(_))
        ));
    }

    #[test]
    fn booking_at_unknown_hotel_is_not_found() {
        let (mut reg, _, customer_id) = registry_with_guest();
        assert!(matches!(
            reg.make_reservation(9, customer_id, 1),
            Err(InnkeepError::HotelNotFound(9))
        ));
    }

    #[test]
    fn booking_for_unknown_customer_is_not_found() {
        let (mut reg, hotel_id, _) = registry_with_guest();
        assert!(matches!(
            reg.make_reservation(hotel_id, 9, 1),
            Err(InnkeepError::CustomerNotFound(9))
        ));
        assert_eq!(reg.hotel(hotel_id).unwrap().rooms, 10);
    }

    #[test]
    fn cancelling_unknown_reservation_is_not_found() {
        let (mut reg, hotel_id, _) = registry_with_guest();
        assert!(matches!(
            reg.cancel_reservation(hotel_id, 5),
            Err(InnkeepError::ReservationNotFound(5))
        ));
    }

    #[test]
    fn cancelling_against_the_wrong_hotel_is_not_found() {
        let (mut reg, hotel_id, customer_id) = registry_with_guest();
        let other = reg.create_hotel("Other", 4).unwrap();
        let reservation_id = reg
            .make_reservation(hotel_id, customer_id, 2)
            .unwrap()
            .reservation_id;

        assert!(matches!(
            reg.cancel_reservation(other, reservation_id),
            Err(InnkeepError::ReservationNotFound(_))
        ));
        // Still cancellable at the right hotel
        assert!(reg.cancel_reservation(hotel_id, reservation_id).is_ok());
    }

    #[test]
    fn reopening_restores_persisted_state() {
        let dir = tempfile::tempdir().unwrap();

        {
            let mut reg = Registry::open(FileStore::new(dir.path().to_path_buf())).unwrap();
            let hotel_id = reg.create_hotel("Test Hotel", 10).unwrap();
            let customer_id = reg
                .create_customer("A", "555", "a@x.com")
                .unwrap()
                .customer_id;
            reg.make_reservation(hotel_id, customer_id, 2).unwrap();
        }

        let mut reg = Registry::open(FileStore::new(dir.path().to_path_buf())).unwrap();
        assert_eq!(reg.hotel(1).unwrap().rooms, 8);
        assert_eq!(reg.hotel(1).unwrap().reservations, vec![1]);
        assert_eq!(reg.customer(1).unwrap().name, "A");
        assert_eq!(reg.reservations().len(), 1);

        // The linkage survives the restart: cancellation still works
        reg.cancel_reservation(1, 1).unwrap();
        assert_eq!(reg.hotel(1).unwrap().rooms, 10);
    }

    #[test]
    fn id_counters_resume_from_persisted_maximum() {
        let fixture = StoreFixture::new()
            .with_hotel(7, "Seventh", 3)
            .with_customer(3, "Cara");
        let mut reg = Registry::open(fixture.store).unwrap();

        assert_eq!(reg.create_hotel("Next", 1).unwrap(), 8);
        let customer = reg.create_customer("D", "4", "d@x.com").unwrap();
        assert_eq!(customer.customer_id, 4);
    }

    #[test]
    fn open_prunes_links_without_backing_records() {
        let fixture = StoreFixture::new()
            .with_linked_hotel(1, "Crashed", 6, &[1, 2])
            .with_customer(1, "Ana")
            .with_reservation(1, 1, 2);
        let mut reg = Registry::open(fixture.store).unwrap();

        assert_eq!(reg.hotel(1).unwrap().reservations, vec![1]);
        assert_eq!(reg.reservations().len(), 1);

        // The pruned id stays burned
        let next = reg.make_reservation(1, 1, 1).unwrap().reservation_id;
        assert_eq!(next, 3);
    }

    #[test]
    fn doctor_removes_orphaned_reservation_records() {
        let fixture = StoreFixture::new()
            .with_hotel(1, "Clean", 6)
            .with_customer(1, "Ana")
            .with_reservation(4, 1, 2);
        let mut reg = Registry::open(fixture.store).unwrap();
        assert_eq!(reg.reservations().len(), 1);

        let report = reg.doctor().unwrap();
        assert_eq!(report.removed_orphans, 1);
        assert_eq!(report.dropped_links, 0);
        assert!(reg.reservations().is_empty());
        // The orphan no longer pins its customer
        assert!(reg.delete_customer(1).is_ok());
    }

    #[test]
    fn doctor_reports_clean_on_consistent_state() {
        let (mut reg, hotel_id, customer_id) = registry_with_guest();
        reg.make_reservation(hotel_id, customer_id, 2).unwrap();

        let report = reg.doctor().unwrap();
        assert!(report.is_clean());
        assert_eq!(reg.reservations().len(), 1);
    }
}
