use crate::model::{CustomerId, HotelId, ReservationId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InnkeepError {
    #[error("Hotel not found: {0}")]
    HotelNotFound(HotelId),

    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),

    #[error("Reservation not found: {0}")]
    ReservationNotFound(ReservationId),

    #[error("Hotel {hotel_id} does not have {requested} rooms available ({available} left)")]
    NoVacancy {
        hotel_id: HotelId,
        requested: u32,
        available: u32,
    },

    #[error("Customer {0} has active reservations; cancel them first")]
    CustomerHasReservations(CustomerId),

    #[error("Hotel {0} has active reservations; cancel them first")]
    HotelHasReservations(HotelId),

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, InnkeepError>;
