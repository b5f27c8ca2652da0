use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use innkeep::error::Result;
use innkeep::model::{Customer, Hotel, HotelId};
use innkeep::registry::{CustomerUpdate, HotelUpdate, Registry};
use innkeep::store::fs::FileStore;
use innkeep::store::DataStore;
use std::collections::BTreeMap;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, GuestCommands, HotelCommands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir);
    let mut registry = Registry::open(FileStore::new(data_dir))?;

    match cli.command {
        Commands::Hotel(cmd) => handle_hotel(&mut registry, cmd),
        Commands::Guest(cmd) => handle_guest(&mut registry, cmd),
        Commands::Book {
            hotel_id,
            guest_id,
            rooms,
        } => handle_book(&mut registry, hotel_id, guest_id, rooms),
        Commands::Cancel {
            hotel_id,
            reservation_id,
        } => handle_cancel(&mut registry, hotel_id, reservation_id),
        Commands::Reservations => {
            print_reservations(&registry);
            Ok(())
        }
        Commands::Doctor => handle_doctor(&mut registry),
    }
}

fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    if let Ok(dir) = std::env::var("INNKEEP_DATA") {
        return PathBuf::from(dir);
    }
    let proj_dirs =
        ProjectDirs::from("com", "innkeep", "innkeep").expect("Could not determine data dir");
    proj_dirs.data_dir().to_path_buf()
}

fn handle_hotel<S: DataStore>(registry: &mut Registry<S>, cmd: HotelCommands) -> Result<()> {
    match cmd {
        HotelCommands::Add { name, rooms } => {
            let id = registry.create_hotel(&name, rooms)?;
            println!("{}", format!("Hotel created ({}): {}", id, name).green());
        }
        HotelCommands::Remove { id } => {
            let hotel = registry.delete_hotel(id)?;
            println!("{}", format!("Hotel removed ({}): {}", id, hotel.name).green());
        }
        HotelCommands::Set { id, name, rooms } => {
            let hotel = registry.update_hotel(id, HotelUpdate { name, rooms })?;
            println!("{}", format!("Hotel updated ({}): {}", id, hotel.name).green());
        }
        HotelCommands::Show { id } => {
            let hotel = registry.hotel(id)?;
            println!("Hotel ID: {}", id);
            println!("{}", hotel);
        }
        HotelCommands::List => print_hotels(registry.hotels()),
    }
    Ok(())
}

fn handle_guest<S: DataStore>(registry: &mut Registry<S>, cmd: GuestCommands) -> Result<()> {
    match cmd {
        GuestCommands::Add { name, phone, email } => {
            let customer = registry.create_customer(&name, &phone, &email)?;
            println!(
                "{}",
                format!("Guest created ({}): {}", customer.customer_id, customer.name).green()
            );
        }
        GuestCommands::Remove { id } => {
            let customer = registry.delete_customer(id)?;
            println!(
                "{}",
                format!("Guest removed ({}): {}", id, customer.name).green()
            );
        }
        GuestCommands::Set {
            id,
            name,
            phone,
            email,
        } => {
            let customer = registry.update_customer(id, CustomerUpdate { name, phone, email })?;
            println!(
                "{}",
                format!("Guest updated ({}): {}", id, customer.name).green()
            );
        }
        GuestCommands::Show { id } => {
            println!("{}", registry.customer(id)?);
        }
        GuestCommands::List => print_guests(registry.customers()),
    }
    Ok(())
}

fn handle_book<S: DataStore>(
    registry: &mut Registry<S>,
    hotel_id: u32,
    guest_id: u32,
    rooms: u32,
) -> Result<()> {
    let reservation = registry.make_reservation(hotel_id, guest_id, rooms)?;
    println!(
        "{}",
        format!(
            "Reservation made ({}): {} rooms at hotel {}",
            reservation.reservation_id, reservation.room_count, hotel_id
        )
        .green()
    );
    Ok(())
}

fn handle_cancel<S: DataStore>(
    registry: &mut Registry<S>,
    hotel_id: u32,
    reservation_id: u32,
) -> Result<()> {
    let reservation = registry.cancel_reservation(hotel_id, reservation_id)?;
    println!(
        "{}",
        format!(
            "Reservation cancelled ({}): {} rooms returned to hotel {}",
            reservation.reservation_id, reservation.room_count, hotel_id
        )
        .green()
    );
    Ok(())
}

fn handle_doctor<S: DataStore>(registry: &mut Registry<S>) -> Result<()> {
    let report = registry.doctor()?;
    if report.is_clean() {
        println!("{}", "Store is consistent.".green());
    } else {
        println!(
            "{}",
            format!(
                "Repaired: {} dangling links dropped, {} orphaned reservations removed",
                report.dropped_links, report.removed_orphans
            )
            .yellow()
        );
    }
    Ok(())
}

const NAME_WIDTH: usize = 32;

fn print_hotels(hotels: &BTreeMap<HotelId, Hotel>) {
    if hotels.is_empty() {
        println!("No hotels yet.");
        return;
    }
    for (id, hotel) in hotels {
        let idx = format!("{:>4} ", format!("{}.", id));
        println!(
            "{}{}  {:>5} rooms  {}",
            idx.yellow(),
            pad_to_width(&hotel.name, NAME_WIDTH),
            hotel.rooms,
            format!("{:>3} active", hotel.reservations.len()).dimmed()
        );
    }
}

fn print_guests(customers: &[Customer]) {
    if customers.is_empty() {
        println!("No guests yet.");
        return;
    }
    for customer in customers {
        let idx = format!("{:>4} ", format!("{}.", customer.customer_id));
        println!(
            "{}{}  {}  {}",
            idx.yellow(),
            pad_to_width(&customer.name, NAME_WIDTH),
            pad_to_width(&customer.phone, 14),
            customer.email.dimmed()
        );
    }
}

fn print_reservations<S: DataStore>(registry: &Registry<S>) {
    let reservations = registry.reservations();
    if reservations.is_empty() {
        println!("No reservations.");
        return;
    }
    for reservation in reservations {
        let place = registry
            .hotels()
            .iter()
            .find(|(_, h)| h.reservations.contains(&reservation.reservation_id))
            .map(|(id, h)| format!("{} ({})", h.name, id))
            .unwrap_or_else(|| "-".to_string());
        let idx = format!("{:>4} ", format!("{}.", reservation.reservation_id));
        println!(
            "{}guest {:<4} {:>3} rooms  {}",
            idx.yellow(),
            reservation.customer_id,
            reservation.room_count,
            pad_to_width(&place, NAME_WIDTH).dimmed()
        );
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
