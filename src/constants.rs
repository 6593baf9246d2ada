//! Application constants and configuration

use std::ops::RangeInclusive;
use std::time::Duration;

pub const CAT_API_URL: &str = "https://cataas.com/cat";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "Paws and Preferences";

/// Number of cats drawn for one session (inclusive)
pub const DECK_SIZE: RangeInclusive<usize> = 10..=20;

// Swipe interaction, fixed by design
pub const SWIPE_THRESHOLD: f32 = 100.0;
pub const THROW_DISTANCE: f32 = 500.0;
pub const SETTLE_DELAY: Duration = Duration::from_millis(200);
pub const ROTATION_DIVISOR: f32 = 20.0;
pub const CARD_TRANSITION_SECS: f32 = 0.3;

/// Largest image body accepted from the server
pub const MAX_IMAGE_BYTES: u64 = 20 * 1024 * 1024;

/// Upper bound on concurrent image fetches
pub const MAX_PARALLEL_FETCHES: usize = 4;
