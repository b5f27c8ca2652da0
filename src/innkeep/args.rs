use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "innkeep", bin_name = "innkeep", version)]
#[command(about = "File-backed hotel reservation manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory (defaults to $INNKEEP_DATA, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage hotels
    #[command(subcommand)]
    Hotel(HotelCommands),

    /// Manage guests
    #[command(subcommand)]
    Guest(GuestCommands),

    /// Book rooms at a hotel for a guest
    #[command(display_order = 1)]
    Book {
        hotel_id: u32,
        guest_id: u32,
        /// Number of rooms to reserve
        rooms: u32,
    },

    /// Cancel a reservation
    #[command(display_order = 2)]
    Cancel {
        hotel_id: u32,
        reservation_id: u32,
    },

    /// List active reservations
    #[command(alias = "res", display_order = 3)]
    Reservations,

    /// Check and repair hotel↔reservation linkage
    #[command(display_order = 4)]
    Doctor,
}

#[derive(Subcommand, Debug)]
pub enum HotelCommands {
    /// Add a hotel
    #[command(display_order = 1)]
    Add {
        name: String,
        /// Number of available rooms
        #[arg(long, default_value_t = 0)]
        rooms: u32,
    },

    /// Remove a hotel
    #[command(alias = "rm", display_order = 2)]
    Remove { id: u32 },

    /// Change a hotel's name or room count
    #[command(display_order = 3)]
    Set {
        id: u32,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New number of available rooms
        #[arg(long)]
        rooms: Option<u32>,
    },

    /// Show one hotel
    #[command(display_order = 4)]
    Show { id: u32 },

    /// List hotels
    #[command(alias = "ls", display_order = 5)]
    List,
}

#[derive(Subcommand, Debug)]
pub enum GuestCommands {
    /// Add a guest
    #[command(display_order = 1)]
    Add {
        name: String,
        phone: String,
        email: String,
    },

    /// Remove a guest
    #[command(alias = "rm", display_order = 2)]
    Remove { id: u32 },

    /// Change a guest's name, phone, or email
    #[command(display_order = 3)]
    Set {
        id: u32,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New phone number (pass "" to clear)
        #[arg(long)]
        phone: Option<String>,

        /// New email address (pass "" to clear)
        #[arg(long)]
        email: Option<String>,
    },

    /// Show one guest
    #[command(display_order = 4)]
    Show { id: u32 },

    /// List guests
    #[command(alias = "ls", display_order = 5)]
    List,
}
