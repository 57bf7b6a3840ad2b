mod conflict;
mod error;
mod mutations;
mod queries;

pub use error::HotelError;

use std::collections::{BTreeMap, BTreeSet};

use tracing::{info, warn};

use crate::model::*;
use crate::observability;

/// Booking registry for one hotel.
///
/// Every mutation runs in two phases. Phase 1 validates the request against
/// every affected room (`conflict.rs`) without touching state. Phase 2 builds
/// an [`Event`] and hands it to [`Hotel::apply`], which commits it to all
/// rooms and to the reference index at once. A call that fails phase 1 leaves
/// the hotel exactly as it was.
#[derive(Debug, Clone)]
pub struct Hotel {
    rooms: BTreeMap<RoomNumber, Room>,
    /// Reverse lookup: booking reference → rooms it occupies.
    /// A key is present iff some room holds days under that reference.
    index: BTreeMap<String, BTreeSet<RoomNumber>>,
    /// Booked (room, day) pairs across all rooms, kept in step by `apply`.
    booked_room_days: usize,
}

impl Hotel {
    pub fn new(room_numbers: &[RoomNumber]) -> Self {
        let mut rooms = BTreeMap::new();
        for &number in room_numbers {
            if rooms.insert(number, Room::new(number)).is_some() {
                warn!("duplicate room number {number} collapsed into one room");
            }
        }
        Self {
            rooms,
            index: BTreeMap::new(),
            booked_room_days: 0,
        }
    }

    /// Lookup room, failing on numbers the hotel was not built with.
    pub(super) fn require_room(&self, number: RoomNumber) -> Result<&Room, HotelError> {
        self.rooms
            .get(&number)
            .ok_or(HotelError::UnknownRoom(number))
    }

    pub(super) fn require_rooms(
        &self,
        numbers: &BTreeSet<RoomNumber>,
    ) -> Result<Vec<&Room>, HotelError> {
        numbers.iter().map(|n| self.require_room(*n)).collect()
    }

    /// Phase 2: commit a validated event. No checks happen here. The caller
    /// must already have resolved every room and cleared every conflict.
    fn apply(&mut self, event: &Event) {
        let affected = match event {
            Event::BookingConfirmed { rooms, .. }
            | Event::BookingUpdated { rooms, .. }
            | Event::BookingCancelled { rooms, .. } => rooms,
        };
        let before = self.room_days(affected);
        match event {
            Event::BookingConfirmed {
                reference,
                rooms,
                days,
            } => {
                for number in rooms {
                    self.room_mut(*number).book(reference, days.clone());
                }
                self.index.insert(reference.clone(), rooms.clone());
                info!("booking {reference} confirmed for rooms {rooms:?} on days {days:?}");
            }
            Event::BookingUpdated {
                reference,
                rooms,
                days,
            } => {
                for number in rooms {
                    self.room_mut(*number).book(reference, days.clone());
                }
                info!("booking {reference} updated in rooms {rooms:?} to days {days:?}");
            }
            Event::BookingCancelled { reference, rooms } => {
                for number in rooms {
                    if let Err(e) = self.room_mut(*number).cancel_booking(reference) {
                        panic!("booking index out of sync with room {number}: {e}");
                    }
                }
                self.index.remove(reference);
                info!("booking {reference} cancelled, released rooms {rooms:?}");
            }
        }
        let after = self.room_days(affected);
        self.booked_room_days = self.booked_room_days - before + after;
        observability::record_operation(
            observability::event_label(event),
            observability::OUTCOME_COMMITTED,
        );
        self.publish_gauges();
    }

    /// Distinct booked days summed over `rooms`.
    fn room_days(&self, rooms: &BTreeSet<RoomNumber>) -> usize {
        rooms
            .iter()
            .filter_map(|n| self.rooms.get(n))
            .map(|room| room.all_booked_days().len())
            .sum()
    }

    fn room_mut(&mut self, number: RoomNumber) -> &mut Room {
        match self.rooms.get_mut(&number) {
            Some(room) => room,
            None => panic!("validated event names unknown room {number}"),
        }
    }

    fn publish_gauges(&self) {
        metrics::gauge!(observability::ACTIVE_BOOKINGS).set(self.index.len() as f64);
        metrics::gauge!(observability::BOOKED_ROOM_DAYS).set(self.booked_room_days as f64);
    }
}
