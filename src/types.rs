//! Common types and data structures

use std::collections::HashMap;
use std::fmt;

/// Swipe / button decision for the current card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn is_like(self) -> bool {
        self == Direction::Right
    }

    /// Sign of the throw animation along x
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => f.write_str("left"),
            Direction::Right => f.write_str("right"),
        }
    }
}

/// Opaque reference to one cat image
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatImage {
    url: String,
}

impl CatImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Load state of the card currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardLoad {
    #[default]
    Loading,
    Loaded,
}

/// Identifies the session and card a deferred effect was created for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionToken {
    pub generation: u64,
    pub position: usize,
}

/// Fetch status for individual cat images
#[derive(Clone)]
pub enum ImageStatus {
    Pending,
    Fetching(u64, u64), // (downloaded_bytes, total_bytes)
    Ready(egui::ColorImage),
    Cancelled,
    Failed(String),
}

impl ImageStatus {
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            ImageStatus::Ready(_) | ImageStatus::Cancelled | ImageStatus::Failed(_)
        )
    }
}

/// Shared state between the UI thread and fetch workers
#[derive(Default)]
pub struct ImageState {
    pub images: HashMap<String, ImageStatus>, // url -> status
}

impl ImageState {
    /// Take decoded pixels for `url` so the UI thread can upload them
    pub fn take_ready(&mut self, url: &str) -> Option<egui::ColorImage> {
        if !matches!(self.images.get(url), Some(ImageStatus::Ready(_))) {
            return None;
        }
        match self.images.remove(url) {
            Some(ImageStatus::Ready(img)) => Some(img),
            _ => None,
        }
    }
}
