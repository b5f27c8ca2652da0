//! # Innkeep Architecture
//!
//! Innkeep is a **UI-agnostic reservation-management library**. The CLI in
//! `main.rs` is a thin client; every business rule lives here, behind
//! typed function arguments and `Result` returns.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Registry (registry.rs)                                     │
//! │  - Exclusive owner of the in-memory collections             │
//! │  - Enforces capacity and referential invariants             │
//! │  - Persists through the store after every mutation          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `registry.rs` inward, code takes regular Rust arguments, returns
//! `Result` types, and **never** writes to stdout/stderr, calls
//! `std::process::exit`, or assumes a terminal. The same core could serve
//! a REST API or any other front end.
//!
//! ## Consistency Model
//!
//! One registry instance per process per data directory; operations are
//! synchronous and run to completion. Each mutation rewrites the affected
//! collection files whole, hotels before reservations, so an interrupted
//! booking or cancellation can only leave the on-disk capacity view
//! conservative. `Registry::open` prunes any resulting dangling links, and
//! the `doctor` operation repairs both directions explicitly.
//!
//! ## Module Overview
//!
//! - [`registry`]: The registry — entry point for all operations
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Hotel`, `Customer`, `Reservation`)
//! - [`error`]: Error types

pub mod error;
pub mod model;
pub mod registry;
pub mod store;
