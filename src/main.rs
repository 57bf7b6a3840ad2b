use tracing::info;
use tracing_subscriber::EnvFilter;

use hotel_registry::{Hotel, RoomNumber};

fn parse_rooms(raw: &str) -> Result<Vec<RoomNumber>, std::num::ParseIntError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let rooms_raw = std::env::var("HOTEL_ROOMS").unwrap_or_else(|_| "4,6,8,10,12".into());
    let rooms = parse_rooms(&rooms_raw)?;
    let print_snapshot = std::env::var("HOTEL_PRINT_SNAPSHOT")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    let mut hotel = Hotel::new(&rooms);
    info!("hotel open with rooms {rooms:?}");

    let days1 = [6, 5, 8, 9, 3, 4];
    if !hotel.is_room_booked(&days1, 4)? {
        let booked = hotel.book_room("REF1", &days1, 4)?;
        info!("REF1 in room 4: {booked}");
    }

    let days2 = [7, 10, 18, 9, 13, 5];
    info!("room 4 busy on {days2:?}: {}", hotel.is_room_booked(&days2, 4)?);

    let days3 = [7, 10, 18, 90, 13, 5];
    info!("REF1 moved: {}", hotel.update_booking("REF1", &days3, 4)?);
    hotel.cancel_booking("REF1")?;
    info!("REF2 in room 4: {}", hotel.book_room("REF2", &days3, 4)?);

    let group = [8, 10, 12];
    let booked = hotel.book_rooms("BookingREF3", &[13, 15, 16, 19, 18], &group)?;
    info!("BookingREF3 in rooms {group:?}: {booked}");
    let moved = hotel.update_booking_rooms("BookingREF3", &[23, 25, 26, 29, 28], &group)?;
    info!("BookingREF3 moved: {moved}");

    // Day 28 is already held in room 12, so nothing is booked
    let booked = hotel.book_rooms("BookingREF5", &[33, 35, 36, 39, 28], &[4, 6, 12])?;
    info!("BookingREF5 in rooms [4, 6, 12]: {booked}");

    hotel.book_room("BookingRef6", &[43, 45, 46, 49, 48], 12)?;
    hotel.book_room("BookingRef7", &[53, 55, 56, 59, 58], 12)?;
    hotel.book_room("BookingRef9", &[63, 65, 66, 69, 68], 12)?;
    let moved = hotel.update_booking("BookingRef7", &[53, 55, 106, 59, 58], 12)?;
    info!("BookingRef7 moved: {moved}");

    info!("{} active bookings", hotel.active_bookings());
    if print_snapshot {
        println!("{}", serde_json::to_string_pretty(&hotel.snapshot())?);
    }
    Ok(())
}
