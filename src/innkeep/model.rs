use serde::{Deserialize, Serialize};
use std::fmt;

pub type HotelId = u32;
pub type CustomerId = u32;
pub type ReservationId = u32;

/// A hotel and its currently available (unbooked) rooms.
///
/// `reservations` holds the ids of active reservations charged against
/// this hotel. The sum of their room counts equals what has been deducted
/// from `rooms` since creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    pub rooms: u32,
    // Stores written by older layouts have no reservation list
    #[serde(default)]
    pub reservations: Vec<ReservationId>,
}

impl Hotel {
    pub fn new(name: String, rooms: u32) -> Self {
        Self {
            name,
            rooms,
            reservations: Vec::new(),
        }
    }
}

impl fmt::Display for Hotel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hotel Name: {}", self.name)?;
        writeln!(f, "Rooms: {}", self.rooms)?;
        write!(f, "Reservations: {}", self.reservations.len())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Customer {
    pub fn new(customer_id: CustomerId, name: String, phone: String, email: String) -> Self {
        Self {
            customer_id,
            name,
            phone,
            email,
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Customer ID: {}", self.customer_id)?;
        writeln!(f, "Customer Name: {}", self.name)?;
        writeln!(f, "Phone: {}", self.phone)?;
        write!(f, "Email: {}", self.email)
    }
}

/// An active reservation. Cancelled reservations are removed outright;
/// there is no tombstone state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub reservation_id: ReservationId,
    pub customer_id: CustomerId,
    pub room_count: u32,
}

impl Reservation {
    pub fn new(reservation_id: ReservationId, customer_id: CustomerId, room_count: u32) -> Self {
        Self {
            reservation_id,
            customer_id,
            room_count,
        }
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reservation ID: {}", self.reservation_id)?;
        writeln!(f, "Customer ID: {}", self.customer_id)?;
        write!(f, "Room Count: {}", self.room_count)
    }
}
