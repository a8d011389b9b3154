use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use booking_core::{
    catalog::CatalogIntent,
    seed,
    session::{Intent, SessionOptions, StorefrontSession},
};
use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use shared::{
    domain::{
        AuthIdentity, FilterUpdate, ReservationId, ReservationStatus, RoomId, RoomTypeFilter,
        UserId,
    },
    error::{BookingError, Notice},
};
use storage::LocalStore;
use uuid::Uuid;

mod config;

#[derive(Parser, Debug)]
#[command(name = "luxestay", about = "LuxeStay storefront CLI")]
struct Args {
    /// Override the directory used for persisted state.
    #[arg(long)]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List rooms, optionally filtered and paginated.
    Rooms {
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long)]
        min_price: Option<u32>,
        #[arg(long)]
        max_price: Option<u32>,
        /// Room type id, e.g. "Suite". Omit (or pass "all") for all types.
        #[arg(long)]
        room_type: Option<String>,
    },
    /// Show the details of one room.
    Room { id: String },
    /// Log in with an identity; any payload is accepted.
    Login {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Create an account and log in.
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Log out and clear the persisted identity.
    Logout,
    /// Book a room for a date range (dates as YYYY-MM-DD).
    Book {
        room_id: String,
        #[arg(long)]
        check_in: NaiveDate,
        #[arg(long)]
        check_out: NaiveDate,
    },
    /// Cancel a reservation and free its room.
    Cancel { reservation_id: String },
    /// Show your reservations and lifetime spend.
    Dashboard,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = config::load_settings();
    if let Some(data_dir) = args.data_dir {
        settings.data_dir = data_dir;
    }

    let store = LocalStore::open(&settings.data_dir)?;
    let options = SessionOptions {
        rooms_per_page: settings.rooms_per_page,
        booking_delay: Duration::from_millis(settings.booking_delay_ms),
    };
    let mut session = StorefrontSession::open(store, seed::rooms(), options);

    match args.command {
        Command::Rooms {
            page,
            min_price,
            max_price,
            room_type,
        } => {
            let price_range = match (min_price, max_price) {
                (None, None) => None,
                (lo, hi) => Some((lo.unwrap_or(0), hi.unwrap_or(1000))),
            };
            let room_type = room_type.map(|value| {
                if value == "all" {
                    RoomTypeFilter::All
                } else {
                    RoomTypeFilter::Type(value)
                }
            });
            session.dispatch(Intent::Catalog(CatalogIntent::SetFilters(FilterUpdate {
                price_range,
                room_type,
            })))?;
            session.dispatch(Intent::Catalog(CatalogIntent::SetCurrentPage(page)))?;

            let catalog = session.catalog();
            let found = catalog.filtered_rooms().len();
            println!(
                "{found} {} found (page {} of {})",
                if found == 1 { "room" } else { "rooms" },
                catalog.current_page,
                catalog.total_pages()
            );
            for room in catalog.visible_rooms() {
                println!(
                    "{:<8} {:<12} ${}/night  {} guests  [{}]",
                    room.id,
                    room.room_type,
                    room.price_per_night,
                    room.capacity,
                    if room.availability {
                        "available"
                    } else {
                        "unavailable"
                    }
                );
            }
        }
        Command::Room { id } => {
            let room_id = RoomId(id);
            session.dispatch(Intent::Catalog(CatalogIntent::SetSelectedRoom(Some(
                room_id.clone(),
            ))))?;
            match session.catalog().selected_room() {
                Some(room) => {
                    println!("{} ({})", room.room_type, room.id);
                    println!("${}/night, up to {} guests", room.price_per_night, room.capacity);
                    println!("{}", room.description);
                    println!("Amenities: {}", room.amenities.join(", "));
                    println!(
                        "Status: {}",
                        if room.availability {
                            "available"
                        } else {
                            "unavailable"
                        }
                    );
                }
                None => println!("{}", Notice::error(format!("Room '{room_id}' was not found"))),
            }
        }
        Command::Login { name, email } => {
            let identity = new_identity(name.clone(), email);
            session.login(identity)?;
            println!("{}", Notice::success(format!("Welcome back, {name}!")));
        }
        Command::Signup { name, email } => {
            let identity = new_identity(name.clone(), email);
            session.signup(identity)?;
            println!("{}", Notice::success(format!("Welcome, {name}!")));
        }
        Command::Logout => {
            session.logout()?;
            println!("{}", Notice::success("Logged out"));
        }
        Command::Book {
            room_id,
            check_in,
            check_out,
        } => {
            let room_id = RoomId(room_id);
            let check_in = check_in.and_time(NaiveTime::MIN).and_utc();
            let check_out = check_out.and_time(NaiveTime::MIN).and_utc();

            match session.book(&room_id, Some(check_in), Some(check_out)).await {
                Ok(reservation) => {
                    println!(
                        "{}",
                        Notice::success_with(
                            "Booking confirmed!",
                            format!(
                                "Your reservation for {} has been confirmed.",
                                reservation.room_type
                            ),
                        )
                    );
                    println!(
                        "{}  total ${}",
                        reservation.id, reservation.total_price
                    );
                }
                Err(err) => match err.downcast_ref::<BookingError>() {
                    Some(booking_err) => println!("{}", Notice::from(booking_err)),
                    None => return Err(err),
                },
            }
        }
        Command::Cancel { reservation_id } => {
            let reservation_id = ReservationId(reservation_id);
            let room_id = session
                .reservations()
                .get(&reservation_id)
                .map(|reservation| reservation.room_id.clone());

            session.cancel_reservation(&reservation_id)?;
            // Freeing the room is a second, separate action.
            if let Some(room_id) = room_id {
                session.restore_room_availability(&room_id)?;
            }
            println!("{}", Notice::success("Reservation cancelled successfully"));
        }
        Command::Dashboard => {
            let auth = session.auth();
            let Some(user) = auth.user.clone().filter(|_| auth.is_authenticated) else {
                println!("{}", Notice::error("Please login to view your dashboard"));
                return Ok(());
            };

            let reservations = session.reservations();
            println!("Welcome back, {}!", user.name);
            println!("Account: {}", user.email);
            println!(
                "Active reservations: {}",
                reservations
                    .for_user(&user.id)
                    .iter()
                    .filter(|r| r.status == ReservationStatus::Confirmed)
                    .count()
            );
            println!("Total spent: ${}", reservations.total_spent(&user.id));
            for reservation in reservations.for_user(&user.id) {
                println!(
                    "{}  {:<12} {} to {}  ${}  [{}]",
                    reservation.id,
                    reservation.room_type,
                    reservation.check_in.format("%Y-%m-%d"),
                    reservation.check_out.format("%Y-%m-%d"),
                    reservation.total_price,
                    reservation.status
                );
            }
        }
    }

    Ok(())
}

fn new_identity(name: String, email: String) -> AuthIdentity {
    AuthIdentity {
        id: UserId(format!("user_{}", Uuid::new_v4().simple())),
        name,
        email,
    }
}
