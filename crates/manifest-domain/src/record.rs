//! Extraction record module - the fixed 11-field structured schema

use crate::doc_type::DocType;
use serde::{Deserialize, Serialize};

/// The fixed extraction schema, one entry per record field, in wire order
pub const RECORD_FIELDS: [&str; 11] = [
    "shipment_id",
    "shipper",
    "consignee",
    "pickup_datetime",
    "delivery_datetime",
    "equipment_type",
    "mode",
    "rate",
    "currency",
    "weight",
    "carrier_name",
];

/// The structured record extracted from one document type
///
/// Every field is optional: missing information is `None` (serialized as
/// JSON null), never an empty string. `rate` and `weight` are numeric;
/// datetimes are ISO-format strings as produced by the extraction prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    /// Load / shipment identifier
    pub shipment_id: Option<String>,

    /// Shipper (origin party) name
    pub shipper: Option<String>,

    /// Consignee (destination party) name
    pub consignee: Option<String>,

    /// Pickup date/time, ISO format
    pub pickup_datetime: Option<String>,

    /// Delivery date/time, ISO format
    pub delivery_datetime: Option<String>,

    /// Equipment type (e.g. "53' Dry Van")
    pub equipment_type: Option<String>,

    /// Transport mode (e.g. "FTL")
    pub mode: Option<String>,

    /// Rate amount, numeric only - customer rate or carrier pay depending
    /// on the source document type
    pub rate: Option<f64>,

    /// Rate currency code
    pub currency: Option<String>,

    /// Shipment weight, numeric
    pub weight: Option<f64>,

    /// Carrier company name
    pub carrier_name: Option<String>,
}

impl ExtractionRecord {
    /// A record with every field null
    ///
    /// Used as the recovery value when the completion service returns
    /// unparsable output for one document type.
    pub fn null_record() -> Self {
        Self::default()
    }

    /// Whether every field is null
    pub fn is_null(&self) -> bool {
        *self == Self::default()
    }
}

/// Sidecar metadata attached to a merged record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeMetadata {
    /// Document types that contributed an extraction at all
    pub sources: Vec<DocType>,

    /// Shipper rate minus carrier rate, present only when both group
    /// extractions carried a numeric rate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,

    /// Human-readable note about how the record was assembled
    pub extraction_note: String,
}

/// The merged extraction result: one record plus its `_metadata` sidecar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRecord {
    /// The merged 11-field record
    #[serde(flatten)]
    pub record: ExtractionRecord,

    /// Merge provenance sidecar
    #[serde(rename = "_metadata")]
    pub metadata: MergeMetadata,
}
