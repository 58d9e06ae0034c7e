//! Fixed campus layout.

/// Label of the root node.
pub const ROOT_LABEL: &str = "Campus Parcel Center";

/// Pickup stations created at startup, in display order.
pub const STATIONS: [&str; 3] = ["South Gate Station", "North Gate Station", "West Gate Station"];

/// Resolve a station by 1-based menu number or by exact name.
pub fn resolve_station(input: &str) -> Option<&'static str> {
    let input = input.trim();
    if let Ok(number) = input.parse::<usize>() {
        return number.checked_sub(1).and_then(|idx| STATIONS.get(idx)).copied();
    }
    STATIONS.iter().find(|name| **name == input).copied()
}
