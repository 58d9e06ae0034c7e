//! Application services
//!
//! Services orchestrate domain logic and depend on boundary traits.

pub mod store;

pub use store::{LookupMode, ParcelStore};
