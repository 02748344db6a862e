//! Core type aliases used throughout the crate.

/// Player index into the game's roster (0-based, fixed at construction).
pub type PlayerId = u8;

/// Unique identifier for a land parcel (sequential from 0).
pub type LandId = u32;
