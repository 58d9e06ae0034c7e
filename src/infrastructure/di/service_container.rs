//! Service container for dependency injection
//!
//! Wires up the parcel store with its code source.

use tracing::debug;

use crate::application::ParcelStore;
use crate::config::Settings;
use crate::infrastructure::traits::{PickupCodeSource, RandomCodeSource};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Settings,

    /// The parcel store, alive for the whole session
    pub store: ParcelStore,
}

impl ServiceContainer {
    /// Create a new service container with a random code source
    /// (seeded from `settings.seed` when set).
    pub fn new(settings: Settings) -> Self {
        let codes = match settings.seed {
            Some(seed) => {
                debug!("pickup codes seeded with {seed}");
                RandomCodeSource::seeded(seed)
            }
            None => RandomCodeSource::from_entropy(),
        };
        Self::with_deps(settings, Box::new(codes))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, codes: Box<dyn PickupCodeSource>) -> Self {
        Self {
            settings,
            store: ParcelStore::new(codes),
        }
    }
}
