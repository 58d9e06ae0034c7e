//! Parcel records and pickup codes

use std::fmt;

use chrono::{DateTime, Local};

use crate::domain::carrier::Carrier;
use crate::domain::error::{DomainError, DomainResult};

/// Number of characters in a pickup code.
pub const PICKUP_CODE_LEN: usize = 6;

/// Characters a pickup code is drawn from.
pub const PICKUP_CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Short token handed to the recipient for collecting a parcel.
///
/// Always `PICKUP_CODE_LEN` characters from `PICKUP_CODE_ALPHABET`.
/// Not unique: two parcels may share a code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PickupCode(String);

impl PickupCode {
    pub fn new(code: impl Into<String>) -> DomainResult<Self> {
        let code = code.into();
        if Self::is_valid(&code) {
            Ok(Self(code))
        } else {
            Err(DomainError::InvalidPickupCode(code))
        }
    }

    /// Build a code by asking `pick` for an alphabet index at every position.
    /// Out-of-range indices wrap around.
    pub fn from_picks(mut pick: impl FnMut(usize) -> usize) -> Self {
        let alphabet_len = PICKUP_CODE_ALPHABET.len();
        Self(
            (0..PICKUP_CODE_LEN)
                .map(|_| PICKUP_CODE_ALPHABET[pick(alphabet_len) % alphabet_len] as char)
                .collect(),
        )
    }

    pub fn is_valid(code: &str) -> bool {
        code.len() == PICKUP_CODE_LEN && code.bytes().all(|b| PICKUP_CODE_ALPHABET.contains(&b))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PickupCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single parcel stored at a station.
///
/// The `picked` flag only moves from `false` to `true`, through [`ParcelRecord::mark_picked`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParcelRecord {
    id: String,
    recipient: String,
    pickup_code: PickupCode,
    carrier: Carrier,
    picked: bool,
    stored_at: DateTime<Local>,
}

impl ParcelRecord {
    pub fn new(
        id: impl Into<String>,
        recipient: impl Into<String>,
        pickup_code: PickupCode,
        carrier: Carrier,
    ) -> Self {
        Self {
            id: id.into(),
            recipient: recipient.into(),
            pickup_code,
            carrier,
            picked: false,
            stored_at: Local::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn pickup_code(&self) -> &PickupCode {
        &self.pickup_code
    }

    pub fn carrier(&self) -> Carrier {
        self.carrier
    }

    pub fn carrier_code(&self) -> &'static str {
        self.carrier.code()
    }

    pub fn carrier_name(&self) -> &'static str {
        self.carrier.display_name()
    }

    pub fn is_picked(&self) -> bool {
        self.picked
    }

    pub fn stored_at(&self) -> DateTime<Local> {
        self.stored_at
    }

    /// Flip the parcel to picked up. A second call is rejected.
    pub fn mark_picked(&mut self) -> DomainResult<()> {
        if self.picked {
            return Err(DomainError::AlreadyPicked {
                record_id: self.id.clone(),
            });
        }
        self.picked = true;
        Ok(())
    }

    pub fn status_label(&self) -> &'static str {
        if self.picked {
            "picked up"
        } else {
            "awaiting pickup"
        }
    }
}

impl fmt::Display for ParcelRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id={} | recipient={} | code={} | carrier={} | status={} | stored={}",
            self.id,
            self.recipient,
            self.pickup_code,
            self.carrier,
            self.status_label(),
            self.stored_at.format("%Y-%m-%d %H:%M"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ParcelRecord {
        ParcelRecord::new(
            "SF1001",
            "John Smith",
            PickupCode::new("AB12CD").unwrap(),
            Carrier::SfExpress,
        )
    }

    #[test]
    fn pickup_code_validation() {
        assert!(PickupCode::new("A1B2C3").is_ok());
        assert!(PickupCode::new("a1b2c3").is_err());
        assert!(PickupCode::new("A1B2C").is_err());
        assert!(PickupCode::new("A1B2C3D").is_err());
        assert!(PickupCode::new("A1-2C3").is_err());
    }

    #[test]
    fn from_picks_wraps_indices() {
        let mut next = 0;
        let code = PickupCode::from_picks(|len| {
            next += 35;
            next % (len + 1)
        });
        assert!(PickupCode::is_valid(code.as_str()));
        assert_eq!(PickupCode::from_picks(|_| 0).as_str(), "AAAAAA");
        assert_eq!(PickupCode::from_picks(|len| len - 1).as_str(), "999999");
    }

    #[test]
    fn new_record_is_not_picked() {
        let rec = record();
        assert!(!rec.is_picked());
        assert_eq!(rec.carrier_code(), "SF");
        assert_eq!(rec.carrier_name(), "SF Express");
    }

    #[test]
    fn mark_picked_is_one_way() {
        let mut rec = record();
        rec.mark_picked().unwrap();
        assert!(rec.is_picked());

        let err = rec.mark_picked().unwrap_err();
        assert_eq!(
            err,
            DomainError::AlreadyPicked {
                record_id: "SF1001".into()
            }
        );
        assert!(rec.is_picked());
    }

    #[test]
    fn display_lists_every_field() {
        let mut rec = record();
        rec.mark_picked().unwrap();
        let line = rec.to_string();
        assert!(
            line.starts_with(
                "id=SF1001 | recipient=John Smith | code=AB12CD | carrier=SF Express (SF) | status=picked up | stored="
            ),
            "unexpected line: {line}"
        );
    }
}
