use hotel_registry::{Day, DaySet, Hotel, HotelError};

// ── Test infrastructure ──────────────────────────────────────

fn front_desk() -> Hotel {
    Hotel::new(&[4, 6, 8, 10, 12])
}

fn set(days: &[Day]) -> DaySet {
    days.iter().copied().collect()
}

// ── Tests ────────────────────────────────────────────────────

#[test]
fn demo_sequence() {
    let mut hotel = front_desk();

    let days1 = [6, 5, 8, 9, 3, 4];
    assert_eq!(hotel.is_room_booked(&days1, 4), Ok(false));
    assert_eq!(hotel.book_room("REF1", &days1, 4), Ok(true));

    // Days 5 and 9 are taken
    let days2 = [7, 10, 18, 9, 13, 5];
    assert_eq!(hotel.is_room_booked(&days2, 4), Ok(true));

    // Updating onto its own day 5 is fine
    let days3 = [7, 10, 18, 90, 13, 5];
    assert_eq!(hotel.update_booking("REF1", &days3, 4), Ok(true));
    hotel.cancel_booking("REF1").unwrap();

    assert_eq!(hotel.book_room("REF2", &days3, 4), Ok(true));

    let days4 = [13, 15, 16, 19, 18];
    assert_eq!(hotel.book_rooms("BookingREF3", &days4, &[8, 10, 12]), Ok(true));

    let days5 = [23, 25, 26, 29, 28];
    assert_eq!(
        hotel.update_booking_rooms("BookingREF3", &days5, &[8, 10, 12]),
        Ok(true)
    );

    // Day 28 collides with BookingREF3 in room 12
    let days6 = [33, 35, 36, 39, 28];
    assert_eq!(hotel.book_rooms("BookingREF5", &days6, &[4, 6, 12]), Ok(false));
    assert!(!hotel.is_active("BookingREF5"));
    assert!(hotel.room(6).unwrap().is_vacant());

    assert_eq!(hotel.book_room("BookingRef6", &[43, 45, 46, 49, 48], 12), Ok(true));
    assert_eq!(hotel.book_room("BookingRef7", &[53, 55, 56, 59, 58], 12), Ok(true));
    assert_eq!(hotel.book_room("BookingRef9", &[63, 65, 66, 69, 68], 12), Ok(true));

    assert_eq!(
        hotel.update_booking("BookingRef7", &[53, 55, 106, 59, 58], 12),
        Ok(true)
    );

    assert_eq!(hotel.active_bookings(), 5);
    assert_eq!(hotel.booked_days(4).unwrap(), set(&days3));
    assert_eq!(
        hotel.room(12).unwrap().days_for("BookingRef7"),
        Some(&set(&[53, 55, 58, 59, 106]))
    );
}

#[test]
fn cancel_then_rebook_same_days() {
    let mut hotel = front_desk();
    assert_eq!(hotel.book_room("A", &[5, 6], 4), Ok(true));
    assert_eq!(hotel.is_room_booked(&[6, 7], 4), Ok(true));
    assert_eq!(hotel.is_room_booked(&[7, 8], 4), Ok(false));
    assert_eq!(hotel.update_booking("A", &[9, 10], 4), Ok(true));
    hotel.cancel_booking("A").unwrap();
    assert_eq!(hotel.is_room_booked(&[9, 10], 4), Ok(false));
    assert_eq!(
        hotel.cancel_booking("A"),
        Err(HotelError::NoSuchBooking("A".into()))
    );
    assert_eq!(hotel.book_room("D", &[9, 10], 4), Ok(true));
}

#[test]
fn partial_multi_room_conflict_books_nothing() {
    let mut hotel = front_desk();
    assert_eq!(hotel.book_rooms("B", &[1, 2], &[8, 10, 12]), Ok(true));
    assert_eq!(hotel.book_rooms("C", &[2, 3], &[4, 6, 12]), Ok(false));
    assert_eq!(hotel.is_room_booked(&[2, 3], 4), Ok(false));
    assert_eq!(hotel.is_room_booked(&[2, 3], 6), Ok(false));
    assert_eq!(hotel.booking("C"), None);

    // The free rooms are still free for C on their own
    assert_eq!(hotel.book_rooms("C", &[2, 3], &[4, 6]), Ok(true));
}

#[test]
fn snapshot_round_trips_through_json() {
    let mut hotel = front_desk();
    hotel.book_rooms("B", &[1, 2], &[8, 10]).unwrap();
    let json = serde_json::to_string(&hotel.snapshot()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["bookings"][0]["rooms"], serde_json::json!([8, 10]));
    assert_eq!(value["rooms"].as_array().map(Vec::len), Some(5));
}
