//! # Storage Layer
//!
//! This module defines the persistence gateway for innkeep. The
//! [`DataStore`] trait allows the registry to work with different storage
//! backends.
//!
//! ## Design Rationale
//!
//! Storage sits behind a trait so that:
//! - The registry can be tested against `InMemoryStore` without touching
//!   the filesystem
//! - A different backend (database, remote store) can be swapped in
//!   without changing registry logic
//! - Persistence details never leak into invariant checks
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage, one JSON document
//!   per collection under a data directory
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data-dir>/
//! ├── hotels.json        # JSON object: id → {name, rooms, reservations}
//! ├── customers.json     # JSON array of customer records
//! └── reservations.json  # JSON array of reservation records
//! ```
//!
//! A missing file is the expected first-run state and loads as an empty
//! collection. A file that exists but does not parse is a decode error and
//! propagates to the caller; data is never silently discarded.

use crate::error::Result;
use crate::model::{Customer, Hotel, HotelId, Reservation};
use std::collections::BTreeMap;

pub mod fs;
pub mod memory;

/// Abstract interface for the three collection stores.
///
/// `load_*` returns an empty collection when the store does not exist yet.
/// `save_*` rewrites the whole collection; there is no incremental path.
pub trait DataStore {
    fn load_hotels(&self) -> Result<BTreeMap<HotelId, Hotel>>;

    fn save_hotels(&mut self, hotels: &BTreeMap<HotelId, Hotel>) -> Result<()>;

    fn load_customers(&self) -> Result<Vec<Customer>>;

    fn save_customers(&mut self, customers: &[Customer]) -> Result<()>;

    fn load_reservations(&self) -> Result<Vec<Reservation>>;

    fn save_reservations(&mut self, reservations: &[Reservation]) -> Result<()>;
}
