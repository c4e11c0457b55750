//! Document type module - the closed vocabulary of logistics document kinds

use serde::{Deserialize, Serialize};

/// Kind of logistics document a chunk was produced from
///
/// Every chunk of one processed document carries the same `DocType`, detected
/// once from the document header. The type drives retrieval filtering,
/// diversity selection, and extraction merge priority:
/// - ShipperRc: customer-facing rate confirmation (what the shipper pays)
/// - CarrierRc: carrier-facing rate confirmation (what the carrier receives)
/// - Bol: bill of lading (authoritative for shipper/consignee parties)
/// - Unknown: no recognizable document-type cue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocType {
    /// Shipper-side rate confirmation (customer rate)
    ShipperRc,

    /// Carrier-side rate confirmation (carrier pay)
    CarrierRc,

    /// Bill of lading
    Bol,

    /// Unrecognized document type
    Unknown,
}

impl DocType {
    /// Get the wire string used in index metadata and prompts
    pub fn as_str(&self) -> &'static str {
        match self {
            DocType::ShipperRc => "shipper_rc",
            DocType::CarrierRc => "carrier_rc",
            DocType::Bol => "bol",
            DocType::Unknown => "unknown",
        }
    }

    /// Parse a wire string back into a DocType
    ///
    /// Unrecognized values map to `Unknown` rather than failing, since
    /// external index metadata is string-typed and not under our control.
    pub fn parse(s: &str) -> Self {
        match s {
            "shipper_rc" => DocType::ShipperRc,
            "carrier_rc" => DocType::CarrierRc,
            "bol" => DocType::Bol,
            _ => DocType::Unknown,
        }
    }
}

impl std::fmt::Display for DocType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DocType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
