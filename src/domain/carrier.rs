//! Fixed carrier table: code <-> display name

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Display name reported for codes outside the carrier table.
pub const UNKNOWN_CARRIER_NAME: &str = "Unknown";

/// Parcel carriers served by the campus stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Carrier {
    SfExpress,
    Zto,
    JdLogistics,
    Yunda,
    ChinaPost,
}

/// (carrier, code, display name), in menu order.
static CARRIER_TABLE: [(Carrier, &str, &str); 5] = [
    (Carrier::SfExpress, "SF", "SF Express"),
    (Carrier::Zto, "ZT", "ZTO Express"),
    (Carrier::JdLogistics, "JD", "JD Logistics"),
    (Carrier::Yunda, "YD", "Yunda Express"),
    (Carrier::ChinaPost, "YZ", "China Post"),
];

impl Carrier {
    /// All carriers in table order.
    pub fn all() -> impl Iterator<Item = Carrier> {
        CARRIER_TABLE.iter().map(|(carrier, _, _)| *carrier)
    }

    /// Resolve a carrier code. Codes are matched exactly (upper case).
    pub fn from_code(code: &str) -> Option<Self> {
        CARRIER_TABLE
            .iter()
            .find(|(_, c, _)| *c == code)
            .map(|(carrier, _, _)| *carrier)
    }

    pub fn code(self) -> &'static str {
        self.entry().1
    }

    pub fn display_name(self) -> &'static str {
        self.entry().2
    }

    fn entry(self) -> &'static (Carrier, &'static str, &'static str) {
        // rows follow variant declaration order
        &CARRIER_TABLE[self as usize]
    }
}

/// Display name for a raw carrier code, `Unknown` if the code is not in the table.
pub fn display_name_for_code(code: &str) -> &'static str {
    Carrier::from_code(code)
        .map(Carrier::display_name)
        .unwrap_or(UNKNOWN_CARRIER_NAME)
}

impl FromStr for Carrier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| DomainError::UnknownCarrier(s.to_string()))
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name(), self.code())
    }
}
