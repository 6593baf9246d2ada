//! UI module - contains UI rendering components
//!
//! Standalone helpers shared by the deck and summary screens.

pub mod components;
