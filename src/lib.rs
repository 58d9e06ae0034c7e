//! Campus parcel pickup store.
//!
//! A four-level tree (root, stations, carrier groups, parcels) with
//! pickup-code and recipient lookup, pickup confirmation and a level-order
//! inventory. See [`application::ParcelStore`].

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::{LookupMode, ParcelStore};
