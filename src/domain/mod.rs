//! Domain layer: parcel records, the owned tree and the fixed campus tables
//!
//! This layer is independent of external concerns (no I/O, no randomness, no config loading).

pub mod carrier;
pub mod error;
pub mod inventory;
pub mod record;
pub mod station;
pub mod tree;

pub use carrier::{display_name_for_code, Carrier, UNKNOWN_CARRIER_NAME};
pub use error::{DomainError, DomainResult};
pub use inventory::{Inventory, InventoryEntry};
pub use record::{ParcelRecord, PickupCode, PICKUP_CODE_ALPHABET, PICKUP_CODE_LEN};
pub use station::{resolve_station, ROOT_LABEL, STATIONS};
pub use tree::{LevelOrder, Node, NodePath, SearchPolicy};
