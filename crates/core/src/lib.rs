//! Core types for box-tracker
//!
//! Domain types shared by the storage, service, HTTP and client crates.

mod constants;
mod env_config;
mod error;
mod moving_box;
mod room;

pub use constants::*;
pub use env_config::env_parse_with_default;
pub use error::ValidationError;
pub use moving_box::{BoxUpdate, MovingBox, NewBox, normalize_image_url};
pub use room::{MAX_ROOM_LEN, ROOM_NAMES, is_known_room};
