//! Infrastructure layer: boundary implementations and DI container
//!
//! This layer implements boundary traits and wires up services.

pub mod di;
pub mod traits;

pub use di::ServiceContainer;
pub use traits::{PickupCodeSource, RandomCodeSource};
