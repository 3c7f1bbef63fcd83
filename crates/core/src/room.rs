//! Room names offered by the UI.
//!
//! Storage accepts any non-empty room up to [`MAX_ROOM_LEN`] characters;
//! this list only drives the select box.

/// Rooms shown in the room picker, in display order.
pub const ROOM_NAMES: [&str; 10] = [
    "Kitchen",
    "Dining Room",
    "Living Room",
    "Bedroom",
    "Bathroom",
    "Office",
    "Garage",
    "Basement",
    "Attic",
    "Other",
];

/// Width of the `room` column (`VARCHAR(100)`).
pub const MAX_ROOM_LEN: usize = 100;

#[must_use]
pub fn is_known_room(room: &str) -> bool {
    ROOM_NAMES.iter().any(|r| r.eq_ignore_ascii_case(room.trim()))
}
