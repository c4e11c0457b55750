//! Lenient parsing of extraction responses

use manifest_domain::ExtractionRecord;
use serde_json::Value;
use tracing::warn;

/// Parse the model's extraction output into a record
///
/// Strips a markdown code fence when present, then reads the fixed fields
/// from the JSON object. Numeric fields additionally accept numeric strings
/// (models occasionally quote them despite the prompt rules). Anything
/// unparsable degrades to an all-null record rather than failing the
/// extraction for that document type.
pub fn parse_extraction_response(text: &str) -> ExtractionRecord {
    let body = strip_code_fence(text);

    let value: Value = match serde_json::from_str(body.trim()) {
        Ok(value) => value,
        Err(e) => {
            warn!("Unparsable extraction response ({}), substituting null record", e);
            return ExtractionRecord::null_record();
        }
    };

    let Some(obj) = value.as_object() else {
        warn!("Extraction response is not a JSON object, substituting null record");
        return ExtractionRecord::null_record();
    };

    ExtractionRecord {
        shipment_id: string_field(obj.get("shipment_id")),
        shipper: string_field(obj.get("shipper")),
        consignee: string_field(obj.get("consignee")),
        pickup_datetime: string_field(obj.get("pickup_datetime")),
        delivery_datetime: string_field(obj.get("delivery_datetime")),
        equipment_type: string_field(obj.get("equipment_type")),
        mode: string_field(obj.get("mode")),
        rate: numeric_field(obj.get("rate")),
        currency: string_field(obj.get("currency")),
        weight: numeric_field(obj.get("weight")),
        carrier_name: string_field(obj.get("carrier_name")),
    }
}

/// Extract the body of a ```json fence, or return the text unchanged
fn strip_code_fence(text: &str) -> &str {
    if let Some(after_open) = text.split("```json").nth(1) {
        after_open.split("```").next().unwrap_or(after_open)
    } else {
        text
    }
}

fn string_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn numeric_field(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        // Tolerate "1500", "1,500" and "$1,500" despite the prompt rules
        Value::String(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                .collect();
            cleaned.parse().ok()
        }
        _ => None,
    }
}
