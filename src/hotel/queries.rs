use std::collections::{BTreeMap, BTreeSet};

use crate::model::*;

use super::conflict::{first_conflict, overlaps};
use super::{Hotel, HotelError};

impl Hotel {
    /// True iff any of `days` is already booked in `room`, under any reference.
    pub fn is_room_booked(&self, days: &[Day], room: RoomNumber) -> Result<bool, HotelError> {
        let room = self.require_room(room)?;
        if days.is_empty() {
            return Ok(false);
        }
        Ok(overlaps(&day_set(days), &room.all_booked_days()))
    }

    /// True iff at least one of `rooms` has any of `days` booked.
    pub fn are_rooms_booked(&self, days: &[Day], rooms: &[RoomNumber]) -> Result<bool, HotelError> {
        let targets = rooms
            .iter()
            .map(|n| self.require_room(*n))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(first_conflict(targets, &day_set(days), None).is_some())
    }

    pub fn room_numbers(&self) -> impl Iterator<Item = RoomNumber> + '_ {
        self.rooms.keys().copied()
    }

    pub fn room(&self, number: RoomNumber) -> Option<&Room> {
        self.rooms.get(&number)
    }

    pub fn booked_days(&self, room: RoomNumber) -> Result<DaySet, HotelError> {
        Ok(self.require_room(room)?.all_booked_days())
    }

    pub fn is_active(&self, reference: &str) -> bool {
        self.index.contains_key(reference)
    }

    pub fn active_bookings(&self) -> usize {
        self.index.len()
    }

    pub fn booking_rooms(&self, reference: &str) -> Option<&BTreeSet<RoomNumber>> {
        self.index.get(reference)
    }

    pub fn booking(&self, reference: &str) -> Option<BookingInfo> {
        let rooms = self.index.get(reference)?;
        let days: BTreeMap<RoomNumber, DaySet> = rooms
            .iter()
            .filter_map(|n| {
                let held = self.rooms.get(n)?.days_for(reference)?;
                Some((*n, held.clone()))
            })
            .collect();
        Some(BookingInfo {
            reference: reference.to_string(),
            rooms: rooms.clone(),
            days,
        })
    }

    /// Point-in-time copy of every room and booking, ordered by room number
    /// and reference.
    pub fn snapshot(&self) -> HotelSnapshot {
        HotelSnapshot {
            rooms: self.rooms.values().map(RoomInfo::from).collect(),
            bookings: self
                .index
                .keys()
                .filter_map(|reference| self.booking(reference))
                .collect(),
        }
    }
}
