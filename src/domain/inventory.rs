//! Level-order inventory report of the whole store.

use std::fmt;

use crate::domain::carrier::display_name_for_code;
use crate::domain::record::ParcelRecord;
use crate::domain::tree::Node;

/// One visited node, rendered according to its level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryEntry {
    Root { label: String },
    Station { name: String, parcels: usize },
    CarrierGroup { code: String, name: &'static str },
    Parcel(ParcelRecord),
}

/// Snapshot of the tree, grouped by level (index 0 = root).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Inventory {
    levels: Vec<Vec<InventoryEntry>>,
}

impl Inventory {
    /// Walk `root` once in level order and record every node.
    pub fn collect(root: &Node) -> Self {
        let mut levels: Vec<Vec<InventoryEntry>> = Vec::new();

        for (depth, node) in root.level_order() {
            let entry = match (depth, node) {
                (_, Node::Leaf(record)) => InventoryEntry::Parcel(record.clone()),
                (0, _) => InventoryEntry::Root {
                    label: node.name().to_string(),
                },
                (1, _) => InventoryEntry::Station {
                    name: node.name().to_string(),
                    parcels: node.children().iter().map(|group| group.children().len()).sum(),
                },
                (_, _) => InventoryEntry::CarrierGroup {
                    code: node.name().to_string(),
                    name: display_name_for_code(node.name()),
                },
            };
            if levels.len() <= depth {
                levels.resize_with(depth + 1, Vec::new);
            }
            levels[depth].push(entry);
        }

        Self { levels }
    }

    pub fn levels(&self) -> &[Vec<InventoryEntry>] {
        &self.levels
    }

    pub fn entries(&self) -> impl Iterator<Item = &InventoryEntry> {
        self.levels.iter().flatten()
    }

    pub fn records(&self) -> impl Iterator<Item = &ParcelRecord> {
        self.entries().filter_map(|entry| match entry {
            InventoryEntry::Parcel(record) => Some(record),
            _ => None,
        })
    }

    pub fn record_count(&self) -> usize {
        self.records().count()
    }

    /// True when no station holds any parcel.
    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }

    /// (station, parcel count) pairs in station order.
    pub fn station_counts(&self) -> Vec<(&str, usize)> {
        self.entries()
            .filter_map(|entry| match entry {
                InventoryEntry::Station { name, parcels } => Some((name.as_str(), *parcels)),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Display for InventoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InventoryEntry::Root { label } => write!(f, "Root: {label}"),
            InventoryEntry::Station { name, parcels } => {
                write!(f, "  Station: {name} ({parcels} parcels)")
            }
            InventoryEntry::CarrierGroup { code, name } => write!(f, "    Carrier: {name} ({code})"),
            InventoryEntry::Parcel(record) => write!(f, "      Parcel: {record}"),
        }
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.entries() {
            writeln!(f, "{entry}")?;
        }
        if self.is_empty() {
            writeln!(f, "no records")?;
        }
        Ok(())
    }
}
