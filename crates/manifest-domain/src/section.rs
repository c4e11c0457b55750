//! Section type module - the classification vocabulary for document sections

use serde::{Deserialize, Serialize};

/// Section classification attached to every chunk
///
/// Assigned by the chunker through an ordered first-match keyword scan.
/// `Header` and `FullDocument` are structural: the header block is always
/// chunk 0, and `FullDocument` marks the whole-document fallback chunk
/// emitted when no section headers were found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    /// Document header block (always chunk 0)
    Header,
    /// Rate breakdown tables
    Rates,
    /// Pickup stop details
    Pickup,
    /// Delivery stop details
    Delivery,
    /// Driver name / phone / truck details
    DriverDetails,
    /// Special instructions
    Instructions,
    /// Carrier company details
    CarrierInfo,
    /// Customer company details
    CustomerInfo,
    /// Commodity and weight details
    CommodityDetails,
    /// No recognized section keyword
    General,
    /// Whole-document fallback when no headers were found
    FullDocument,
}

impl SectionType {
    /// Get the wire string used in index metadata and prompts
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Header => "header",
            SectionType::Rates => "rates",
            SectionType::Pickup => "pickup",
            SectionType::Delivery => "delivery",
            SectionType::DriverDetails => "driver_details",
            SectionType::Instructions => "instructions",
            SectionType::CarrierInfo => "carrier_info",
            SectionType::CustomerInfo => "customer_info",
            SectionType::CommodityDetails => "commodity_details",
            SectionType::General => "general",
            SectionType::FullDocument => "full_document",
        }
    }

    /// Parse a wire string back into a SectionType
    ///
    /// Unrecognized values map to `General`.
    pub fn parse(s: &str) -> Self {
        match s {
            "header" => SectionType::Header,
            "rates" => SectionType::Rates,
            "pickup" => SectionType::Pickup,
            "delivery" => SectionType::Delivery,
            "driver_details" => SectionType::DriverDetails,
            "instructions" => SectionType::Instructions,
            "carrier_info" => SectionType::CarrierInfo,
            "customer_info" => SectionType::CustomerInfo,
            "commodity_details" => SectionType::CommodityDetails,
            "full_document" => SectionType::FullDocument,
            _ => SectionType::General,
        }
    }
}

impl std::fmt::Display for SectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
