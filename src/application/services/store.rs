//! Parcel store service
//!
//! Owns the campus tree (root -> stations -> carrier groups -> parcels) and
//! implements insertion, pickup-code and recipient lookup, pickup confirmation
//! and the level-order inventory.

use std::fmt;

use tracing::{debug, instrument};

use crate::application::ApplicationResult;
use crate::domain::{
    Carrier, DomainError, Inventory, Node, ParcelRecord, SearchPolicy, ROOT_LABEL, STATIONS,
};
use crate::infrastructure::traits::{PickupCodeSource, RandomCodeSource};

/// Which record field a lookup key is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMode {
    /// Exact pickup code; stops at the first match in level order.
    PickupCode,
    /// Case-sensitive substring of the recipient; collects every match.
    Recipient,
}

impl LookupMode {
    fn policy(self) -> SearchPolicy {
        match self {
            LookupMode::PickupCode => SearchPolicy::FirstMatch,
            LookupMode::Recipient => SearchPolicy::Exhaustive,
        }
    }

    fn matches(self, record: &ParcelRecord, key: &str) -> bool {
        match self {
            LookupMode::PickupCode => record.pickup_code().as_str() == key,
            LookupMode::Recipient => record.recipient().contains(key),
        }
    }
}

/// Service holding the parcel tree.
pub struct ParcelStore {
    root: Node,
    codes: Box<dyn PickupCodeSource>,
}

impl fmt::Debug for ParcelStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParcelStore")
            .field("stations", &self.root.children().len())
            .field("records", &self.record_count())
            .finish()
    }
}

impl Default for ParcelStore {
    fn default() -> Self {
        Self::new(Box::new(RandomCodeSource::from_entropy()))
    }
}

impl ParcelStore {
    /// Create the root and the fixed stations.
    pub fn new(codes: Box<dyn PickupCodeSource>) -> Self {
        let stations = STATIONS.iter().map(|name| Node::category(*name)).collect();
        let root = Node::category_with(ROOT_LABEL, stations);
        debug!("bootstrap: {} stations", STATIONS.len());
        Self { root, codes }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn station_names(&self) -> impl Iterator<Item = &str> {
        self.root.children().iter().map(Node::name)
    }

    pub fn station(&self, name: &str) -> ApplicationResult<&Node> {
        self.root
            .find_child(name)
            .ok_or_else(|| DomainError::UnknownStation(name.to_string()).into())
    }

    pub fn record_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Store a new parcel and return it with its generated pickup code.
    ///
    /// Checks run in order: station, carrier code, duplicate id within the
    /// carrier group. Any failure leaves the tree unchanged.
    #[instrument(level = "debug", skip(self))]
    pub fn insert(
        &mut self,
        station: &str,
        carrier_code: &str,
        record_id: &str,
        recipient: &str,
    ) -> ApplicationResult<ParcelRecord> {
        // only category children of the root are stations
        let Some(Node::Category {
            children: groups, ..
        }) = self.root.find_child_mut(station)
        else {
            return Err(DomainError::UnknownStation(station.to_string()).into());
        };

        let carrier: Carrier = carrier_code.parse()?;

        if groups
            .iter()
            .find(|group| group.name() == carrier_code)
            .and_then(|group| group.find_child(record_id))
            .is_some()
        {
            return Err(DomainError::DuplicateRecord {
                station: station.to_string(),
                carrier: carrier_code.to_string(),
                record_id: record_id.to_string(),
            }
            .into());
        }

        let record = ParcelRecord::new(record_id, recipient, self.codes.next_code(), carrier);
        debug!("insert: {} -> {} / {}", record.id(), station, carrier_code);
        let leaf = Node::leaf(record.clone());
        let existing = groups.iter_mut().find(|group| group.name() == carrier_code);
        match existing {
            Some(Node::Category {
                children: parcels, ..
            }) => parcels.push(leaf),
            _ => {
                debug!("insert: new carrier group {carrier_code} at {station}");
                groups.push(Node::category_with(carrier_code, vec![leaf]));
            }
        }
        Ok(record)
    }

    /// Search a station's parcels.
    ///
    /// An unknown station is an error; a known station without matches
    /// yields an empty list.
    #[instrument(level = "debug", skip(self))]
    pub fn lookup(
        &self,
        station: &str,
        key: &str,
        mode: LookupMode,
    ) -> ApplicationResult<Vec<&ParcelRecord>> {
        let station_node = self.station(station)?;
        let hits = station_node.search_leaves(mode.policy(), |record| mode.matches(record, key));
        debug!("lookup: {} hit(s)", hits.len());

        Ok(hits
            .iter()
            .filter_map(|path| station_node.descendant(path))
            .filter_map(Node::record)
            .collect())
    }

    /// First parcel in level order carrying `code`.
    pub fn find_by_code(&self, station: &str, code: &str) -> ApplicationResult<Option<&ParcelRecord>> {
        Ok(self
            .lookup(station, code, LookupMode::PickupCode)?
            .into_iter()
            .next())
    }

    pub fn find_by_recipient(&self, station: &str, name: &str) -> ApplicationResult<Vec<&ParcelRecord>> {
        self.lookup(station, name, LookupMode::Recipient)
    }

    /// Mark the parcel with `code` as picked up.
    ///
    /// Fails with `NotFound` if no parcel carries the code and with
    /// `AlreadyPicked` if it was collected before.
    #[instrument(level = "debug", skip(self))]
    pub fn confirm_pickup(&mut self, station: &str, code: &str) -> ApplicationResult<&ParcelRecord> {
        let station_node = self
            .root
            .find_child_mut(station)
            .ok_or_else(|| DomainError::UnknownStation(station.to_string()))?;

        let not_found = || DomainError::NotFound {
            station: station.to_string(),
            code: code.to_string(),
        };

        let path = station_node
            .search_leaves(SearchPolicy::FirstMatch, |record| {
                LookupMode::PickupCode.matches(record, code)
            })
            .into_iter()
            .next()
            .ok_or_else(not_found)?;

        let record = station_node
            .descendant_mut(&path)
            .and_then(Node::record_mut)
            .ok_or_else(not_found)?;

        record.mark_picked()?;
        debug!("confirm_pickup: {} picked up", record.id());
        Ok(record)
    }

    /// Level-order snapshot of the whole tree.
    #[instrument(level = "debug", skip(self))]
    pub fn enumerate(&self) -> Inventory {
        Inventory::collect(&self.root)
    }
}
