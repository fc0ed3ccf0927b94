//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used across the engine (host-facing).
//! - `adapters`: the find/replace pipeline and the in-memory host.

pub mod adapters;
pub mod ports;
