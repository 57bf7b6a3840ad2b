/// Longest accepted booking reference, in bytes.
pub const MAX_REFERENCE_LEN: usize = 256;

/// Most distinct days a single booking may hold in one room.
pub const MAX_DAYS_PER_BOOKING: usize = 3660;

/// Most rooms a single booking may span.
pub const MAX_ROOMS_PER_BOOKING: usize = 1024;
