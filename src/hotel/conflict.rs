use std::collections::BTreeSet;

use crate::limits::*;
use crate::model::*;

use super::HotelError;

pub(crate) fn validate_reference(reference: &str) -> Result<(), HotelError> {
    if reference.is_empty() {
        return Err(HotelError::LimitExceeded("empty booking reference"));
    }
    if reference.len() > MAX_REFERENCE_LEN {
        return Err(HotelError::LimitExceeded("booking reference too long"));
    }
    Ok(())
}

pub(crate) fn validate_days(days: &DaySet) -> Result<(), HotelError> {
    if days.is_empty() {
        return Err(HotelError::EmptyDays);
    }
    if days.len() > MAX_DAYS_PER_BOOKING {
        return Err(HotelError::LimitExceeded("too many days in booking"));
    }
    Ok(())
}

/// Deduplicate a caller-supplied room list.
pub(crate) fn validate_room_list(rooms: &[RoomNumber]) -> Result<BTreeSet<RoomNumber>, HotelError> {
    let rooms: BTreeSet<RoomNumber> = rooms.iter().copied().collect();
    if rooms.is_empty() {
        return Err(HotelError::EmptyRooms);
    }
    if rooms.len() > MAX_ROOMS_PER_BOOKING {
        return Err(HotelError::LimitExceeded("too many rooms in booking"));
    }
    Ok(rooms)
}

pub(crate) fn overlaps(requested: &DaySet, booked: &DaySet) -> bool {
    !requested.is_disjoint(booked)
}

/// Phase 1 of every mutation: find the first room whose existing bookings
/// intersect `days`. With `skip` set, that reference's own days are ignored
/// so an update never conflicts with itself.
pub(crate) fn first_conflict<'a>(
    rooms: impl IntoIterator<Item = &'a Room>,
    days: &DaySet,
    skip: Option<&str>,
) -> Option<RoomNumber> {
    if days.is_empty() {
        return None;
    }
    rooms
        .into_iter()
        .find(|room| {
            let booked = match skip {
                Some(reference) => room.all_booked_days_except(reference),
                None => room.all_booked_days(),
            };
            overlaps(days, &booked)
        })
        .map(Room::number)
}
