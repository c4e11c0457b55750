//! Priority-based merging of per-type extractions

use manifest_domain::{DocType, ExtractionRecord, MergeMetadata, MergedRecord};

/// Customer-facing rate preferred
const RATE_PRIORITY: [DocType; 3] = [DocType::ShipperRc, DocType::CarrierRc, DocType::Bol];

/// The carrier confirmation names the carrier authoritatively
const CARRIER_NAME_PRIORITY: [DocType; 3] = [DocType::CarrierRc, DocType::ShipperRc, DocType::Bol];

/// The bill of lading names the parties authoritatively
const PARTY_PRIORITY: [DocType; 3] = [DocType::Bol, DocType::ShipperRc, DocType::CarrierRc];

/// Fallback order for every other field
const DEFAULT_PRIORITY: [DocType; 3] = [DocType::ShipperRc, DocType::CarrierRc, DocType::Bol];

const EXTRACTION_NOTE: &str = "Merged from multiple document types with priority rules";

/// First non-null value of one field, walking the priority order
fn pick<T: Clone>(
    extractions: &[(DocType, ExtractionRecord)],
    priority: &[DocType],
    field: impl Fn(&ExtractionRecord) -> &Option<T>,
) -> Option<T> {
    priority
        .iter()
        .filter_map(|doc_type| {
            extractions
                .iter()
                .find(|(t, _)| t == doc_type)
                .and_then(|(_, record)| field(record).clone())
        })
        .next()
}

/// Rate of one specific group, regardless of merge priority
fn group_rate(extractions: &[(DocType, ExtractionRecord)], doc_type: DocType) -> Option<f64> {
    extractions
        .iter()
        .find(|(t, _)| *t == doc_type)
        .and_then(|(_, record)| record.rate)
}

/// Merge per-type extractions into one record with provenance metadata
///
/// Each field resolves to the first non-null value along its own source
/// priority; a field null in every group stays null. The margin is derived
/// from the raw shipper_rc and carrier_rc group rates, not from the merged
/// rate, because the merged rate is always the customer-facing one.
pub fn merge_extractions(extractions: &[(DocType, ExtractionRecord)]) -> MergedRecord {
    let record = ExtractionRecord {
        shipment_id: pick(extractions, &DEFAULT_PRIORITY, |r| &r.shipment_id),
        shipper: pick(extractions, &PARTY_PRIORITY, |r| &r.shipper),
        consignee: pick(extractions, &PARTY_PRIORITY, |r| &r.consignee),
        pickup_datetime: pick(extractions, &DEFAULT_PRIORITY, |r| &r.pickup_datetime),
        delivery_datetime: pick(extractions, &DEFAULT_PRIORITY, |r| &r.delivery_datetime),
        equipment_type: pick(extractions, &DEFAULT_PRIORITY, |r| &r.equipment_type),
        mode: pick(extractions, &DEFAULT_PRIORITY, |r| &r.mode),
        rate: pick(extractions, &RATE_PRIORITY, |r| &r.rate),
        currency: pick(extractions, &DEFAULT_PRIORITY, |r| &r.currency),
        weight: pick(extractions, &DEFAULT_PRIORITY, |r| &r.weight),
        carrier_name: pick(extractions, &CARRIER_NAME_PRIORITY, |r| &r.carrier_name),
    };

    let margin = match (
        group_rate(extractions, DocType::ShipperRc),
        group_rate(extractions, DocType::CarrierRc),
    ) {
        (Some(customer_rate), Some(carrier_rate)) => Some(customer_rate - carrier_rate),
        _ => None,
    };

    MergedRecord {
        record,
        metadata: MergeMetadata {
            sources: extractions.iter().map(|(t, _)| *t).collect(),
            margin,
            extraction_note: EXTRACTION_NOTE.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_rate(rate: f64) -> ExtractionRecord {
        ExtractionRecord {
            rate: Some(rate),
            ..Default::default()
        }
    }

    #[test]
    fn test_rate_priority_and_margin() {
        let extractions = vec![
            (DocType::ShipperRc, record_with_rate(500.0)),
            (DocType::CarrierRc, record_with_rate(400.0)),
            (DocType::Bol, record_with_rate(450.0)),
        ];

        let merged = merge_extractions(&extractions);
        assert_eq!(merged.record.rate, Some(500.0));
        assert_eq!(merged.metadata.margin, Some(100.0));
    }

    #[test]
    fn test_rate_falls_through_priority() {
        let extractions = vec![
            (DocType::ShipperRc, ExtractionRecord::null_record()),
            (DocType::CarrierRc, record_with_rate(400.0)),
        ];

        let merged = merge_extractions(&extractions);
        assert_eq!(merged.record.rate, Some(400.0));
        // Margin requires both sides of the pair
        assert_eq!(merged.metadata.margin, None);
    }

    #[test]
    fn test_carrier_name_prefers_carrier_rc() {
        let extractions = vec![
            (
                DocType::ShipperRc,
                ExtractionRecord {
                    carrier_name: Some("Swift From Shipper Doc".to_string()),
                    ..Default::default()
                },
            ),
            (
                DocType::CarrierRc,
                ExtractionRecord {
                    carrier_name: Some("Swift Transportation".to_string()),
                    ..Default::default()
                },
            ),
        ];

        let merged = merge_extractions(&extractions);
        assert_eq!(
            merged.record.carrier_name.as_deref(),
            Some("Swift Transportation")
        );
    }

    #[test]
    fn test_parties_prefer_bol() {
        let extractions = vec![
            (
                DocType::ShipperRc,
                ExtractionRecord {
                    shipper: Some("Acme (per RC)".to_string()),
                    ..Default::default()
                },
            ),
            (
                DocType::Bol,
                ExtractionRecord {
                    shipper: Some("Acme Manufacturing".to_string()),
                    consignee: Some("Globex Distribution".to_string()),
                    ..Default::default()
                },
            ),
        ];

        let merged = merge_extractions(&extractions);
        assert_eq!(merged.record.shipper.as_deref(), Some("Acme Manufacturing"));
        assert_eq!(
            merged.record.consignee.as_deref(),
            Some("Globex Distribution")
        );
    }

    #[test]
    fn test_absent_everywhere_resolves_null() {
        let extractions = vec![(DocType::Bol, ExtractionRecord::null_record())];
        let merged = merge_extractions(&extractions);
        assert!(merged.record.is_null());
        assert_eq!(merged.metadata.sources, vec![DocType::Bol]);
    }

    #[test]
    fn test_empty_extractions() {
        let merged = merge_extractions(&[]);
        assert!(merged.record.is_null());
        assert!(merged.metadata.sources.is_empty());
        assert_eq!(merged.metadata.margin, None);
    }

    #[test]
    fn test_sources_keep_insertion_order() {
        let extractions = vec![
            (DocType::CarrierRc, ExtractionRecord::null_record()),
            (DocType::ShipperRc, ExtractionRecord::null_record()),
        ];
        let merged = merge_extractions(&extractions);
        assert_eq!(
            merged.metadata.sources,
            vec![DocType::CarrierRc, DocType::ShipperRc]
        );
    }
}
