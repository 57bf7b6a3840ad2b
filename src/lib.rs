//! In-memory room-booking registry for a single hotel.
//!
//! A [`Hotel`] owns a fixed set of rooms and tracks which days each booking
//! reference holds in each room. Bookings, updates and cancellations that
//! span several rooms are all-or-nothing.

pub mod hotel;
pub mod limits;
pub mod model;
pub mod observability;

pub use hotel::{Hotel, HotelError};
pub use model::{BookingInfo, Day, DaySet, Event, HotelSnapshot, Room, RoomInfo, RoomNumber};
