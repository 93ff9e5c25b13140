//! Spawn Director
//!
//! Team-aware spawn point selection for arena matches. The engine ranks a
//! fixed pool of candidate points by distance to the nearest opposing player,
//! inside a configurable distance window, and supports two strategies for
//! learning each point's world position: eager resolution at setup, or
//! exploratory discovery from deploy observations.
//!
//! # Features
//!
//! - `sim` - In-memory simulation world used by the demo binary and benches (enabled by default)

pub mod config;
pub mod engine;
pub mod util;
pub mod world;

// Feature-gated modules (enabled by default)
#[cfg(feature = "sim")]
pub mod sim;
