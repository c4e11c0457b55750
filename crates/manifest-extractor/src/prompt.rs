//! Extraction prompt assembly

use manifest_domain::DocType;

/// The 11-field schema, rendered as the JSON shape the model must return
const SCHEMA_BLOCK: &str = r#"{
  "shipment_id": "string or null",
  "shipper": "string or null",
  "consignee": "string or null",
  "pickup_datetime": "ISO format or null",
  "delivery_datetime": "ISO format or null",
  "equipment_type": "string or null",
  "mode": "string or null",
  "rate": "number or null",
  "currency": "string or null",
  "weight": "number or null",
  "carrier_name": "string or null"
}"#;

/// The doc-type-conditional rate instruction
///
/// The two rate confirmations carry different rate concepts; the prompt must
/// steer each extraction to its own side of the pair.
fn rate_instruction(doc_type: DocType) -> &'static str {
    match doc_type {
        DocType::CarrierRc => {
            "For 'rate': Extract CARRIER PAY (what carrier receives), NOT customer rate"
        }
        DocType::ShipperRc => {
            "For 'rate': Extract CUSTOMER RATE (what shipper pays), NOT carrier pay"
        }
        _ => "For 'rate': Extract the main rate/charge amount",
    }
}

/// Assemble the strict-JSON extraction prompt for one document-type group
pub fn build_extraction_prompt(content: &str, doc_type: DocType) -> String {
    format!(
        "Extract logistics information from this {} document:\n\n\
         {}\n\n\
         Return JSON with these fields (use null if not found):\n\
         {}\n\n\
         RULES:\n\
         - Extract ONLY explicit information, do not infer\n\
         - {}\n\
         - For dates, use ISO format (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)\n\
         - For rate, extract numeric value only (no $ or currency symbols)\n\
         - Use null for missing fields, not empty strings\n\
         - For shipper/consignee, extract the NAME, not full address\n\n\
         JSON:",
        doc_type.as_str().to_uppercase(),
        content,
        SCHEMA_BLOCK,
        rate_instruction(doc_type)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carrier_prompt_steers_to_carrier_pay() {
        let prompt = build_extraction_prompt("Carrier Pay: $1,200", DocType::CarrierRc);
        assert!(prompt.contains("CARRIER_RC document"));
        assert!(prompt.contains("Extract CARRIER PAY"));
        assert!(prompt.contains("NOT customer rate"));
    }

    #[test]
    fn test_shipper_prompt_steers_to_customer_rate() {
        let prompt = build_extraction_prompt("Customer Rate: $1,500", DocType::ShipperRc);
        assert!(prompt.contains("SHIPPER_RC document"));
        assert!(prompt.contains("Extract CUSTOMER RATE"));
    }

    #[test]
    fn test_generic_prompt_for_other_types() {
        let prompt = build_extraction_prompt("Freight charges", DocType::Bol);
        assert!(prompt.contains("BOL document"));
        assert!(prompt.contains("the main rate/charge amount"));
    }

    #[test]
    fn test_prompt_carries_schema_and_rules() {
        let prompt = build_extraction_prompt("text", DocType::Bol);
        assert!(prompt.contains("\"shipment_id\": \"string or null\""));
        assert!(prompt.contains("\"carrier_name\": \"string or null\""));
        assert!(prompt.contains("Use null for missing fields"));
        assert!(prompt.ends_with("JSON:"));
    }
}
