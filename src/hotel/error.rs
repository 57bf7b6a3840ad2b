use crate::model::RoomNumber;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotelError {
    NoSuchBooking(String),
    UnknownRoom(RoomNumber),
    DuplicateBooking(String),
    RoomNotInBooking {
        reference: String,
        room: RoomNumber,
    },
    EmptyDays,
    EmptyRooms,
    LimitExceeded(&'static str),
}

impl std::fmt::Display for HotelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HotelError::NoSuchBooking(r) => write!(f, "no such booking: {r}"),
            HotelError::UnknownRoom(n) => write!(f, "unknown room: {n}"),
            HotelError::DuplicateBooking(r) => write!(f, "booking already active: {r}"),
            HotelError::RoomNotInBooking { reference, room } => {
                write!(f, "booking {reference} does not hold room {room}")
            }
            HotelError::EmptyDays => write!(f, "no days given"),
            HotelError::EmptyRooms => write!(f, "no rooms given"),
            HotelError::LimitExceeded(msg) => write!(f, "limit exceeded: {msg}"),
        }
    }
}

impl std::error::Error for HotelError {}
