use tracing::debug;

use crate::model::*;
use crate::observability::{self, OUTCOME_CONFLICT, OUTCOME_REJECTED};

use super::conflict::{first_conflict, validate_days, validate_reference, validate_room_list};
use super::{Hotel, HotelError};

impl Hotel {
    /// Book a single room. Same contract as [`Hotel::book_rooms`].
    pub fn book_room(
        &mut self,
        reference: &str,
        days: &[Day],
        room: RoomNumber,
    ) -> Result<bool, HotelError> {
        self.book_rooms(reference, days, &[room])
    }

    /// Atomically book `days` in every listed room under a new reference.
    ///
    /// Returns `Ok(false)` without touching any room if one of them already
    /// has any of the days booked. Errors are reserved for misuse: an active
    /// reference, an unknown room, or an empty or oversized request.
    pub fn book_rooms(
        &mut self,
        reference: &str,
        days: &[Day],
        rooms: &[RoomNumber],
    ) -> Result<bool, HotelError> {
        let result = self.try_book_rooms(reference, days, rooms);
        if result.is_err() {
            observability::record_operation("book", OUTCOME_REJECTED);
        }
        result
    }

    fn try_book_rooms(
        &mut self,
        reference: &str,
        days: &[Day],
        rooms: &[RoomNumber],
    ) -> Result<bool, HotelError> {
        validate_reference(reference)?;
        if self.index.contains_key(reference) {
            return Err(HotelError::DuplicateBooking(reference.to_string()));
        }
        let days = day_set(days);
        validate_days(&days)?;
        let rooms = validate_room_list(rooms)?;

        // Phase 1: every room must be free on every day.
        let targets = self.require_rooms(&rooms)?;
        if let Some(busy) = first_conflict(targets, &days, None) {
            debug!("booking {reference} rejected: room {busy} already booked on requested days");
            observability::record_operation("book", OUTCOME_CONFLICT);
            return Ok(false);
        }

        // Phase 2: commit to all rooms.
        let event = Event::BookingConfirmed {
            reference: reference.to_string(),
            rooms,
            days,
        };
        self.apply(&event);
        Ok(true)
    }

    /// Replace the days of an active booking in one of its rooms.
    pub fn update_booking(
        &mut self,
        reference: &str,
        days: &[Day],
        room: RoomNumber,
    ) -> Result<bool, HotelError> {
        self.update_booking_rooms(reference, days, &[room])
    }

    /// Atomically replace the days of an active booking in the listed rooms.
    ///
    /// The booking's own current days never count as a conflict. If any
    /// listed room has another reference on one of the new days, nothing
    /// changes and `Ok(false)` is returned. The set of rooms the booking
    /// occupies is fixed: every listed room must already belong to it.
    pub fn update_booking_rooms(
        &mut self,
        reference: &str,
        days: &[Day],
        rooms: &[RoomNumber],
    ) -> Result<bool, HotelError> {
        let result = self.try_update_booking_rooms(reference, days, rooms);
        if result.is_err() {
            observability::record_operation("update", OUTCOME_REJECTED);
        }
        result
    }

    fn try_update_booking_rooms(
        &mut self,
        reference: &str,
        days: &[Day],
        rooms: &[RoomNumber],
    ) -> Result<bool, HotelError> {
        let held = self
            .index
            .get(reference)
            .ok_or_else(|| HotelError::NoSuchBooking(reference.to_string()))?;
        let days = day_set(days);
        validate_days(&days)?;
        let rooms = validate_room_list(rooms)?;

        let targets = self.require_rooms(&rooms)?;
        if let Some(&room) = rooms.iter().find(|n| !held.contains(*n)) {
            return Err(HotelError::RoomNotInBooking {
                reference: reference.to_string(),
                room,
            });
        }

        // Phase 1: check against everyone else's days.
        if let Some(busy) = first_conflict(targets, &days, Some(reference)) {
            debug!("update of {reference} rejected: room {busy} booked by another reference");
            observability::record_operation("update", OUTCOME_CONFLICT);
            return Ok(false);
        }

        // Phase 2
        let event = Event::BookingUpdated {
            reference: reference.to_string(),
            rooms,
            days,
        };
        self.apply(&event);
        Ok(true)
    }

    /// Release every room held by `reference`. The reference may be reused
    /// afterwards.
    pub fn cancel_booking(&mut self, reference: &str) -> Result<(), HotelError> {
        let result = self.try_cancel_booking(reference);
        if result.is_err() {
            observability::record_operation("cancel", OUTCOME_REJECTED);
        }
        result
    }

    fn try_cancel_booking(&mut self, reference: &str) -> Result<(), HotelError> {
        let rooms = self
            .index
            .get(reference)
            .cloned()
            .ok_or_else(|| HotelError::NoSuchBooking(reference.to_string()))?;
        let event = Event::BookingCancelled {
            reference: reference.to_string(),
            rooms,
        };
        self.apply(&event);
        Ok(())
    }
}
