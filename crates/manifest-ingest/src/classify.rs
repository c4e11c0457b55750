//! Keyword classification for document types and section types
//!
//! Both classifiers are explicit ordered dispatch tables of (predicate,
//! label) pairs evaluated in fixed sequence, first match wins. Keeping the
//! priority order as data makes it auditable and testable in isolation.

use manifest_domain::{DocType, SectionType};

type Rule<T> = (fn(&str) -> bool, T);

fn is_shipper_doc(text: &str) -> bool {
    text.contains("customer rate") || text.contains("customer details")
}

fn is_carrier_doc(text: &str) -> bool {
    text.contains("carrier rate") || text.contains("carrier details")
}

fn is_bol_doc(text: &str) -> bool {
    text.contains("bill of lading")
}

/// Document type rules, highest priority first.
///
/// Order is significant: a document containing both "customer details" and
/// "carrier rate" resolves to ShipperRc because that rule runs first.
static DOC_TYPE_RULES: &[Rule<DocType>] = &[
    (is_shipper_doc, DocType::ShipperRc),
    (is_carrier_doc, DocType::CarrierRc),
    (is_bol_doc, DocType::Bol),
];

/// Detect the document type from full document text
pub fn detect_doc_type(text: &str) -> DocType {
    let lower = text.to_lowercase();
    for (predicate, doc_type) in DOC_TYPE_RULES {
        if predicate(&lower) {
            return *doc_type;
        }
    }
    DocType::Unknown
}

fn is_rates(text: &str) -> bool {
    text.contains("rate") && text.contains("breakdown")
}

fn is_pickup(text: &str) -> bool {
    text.contains("pickup") || (text.contains("stop") && text.contains('1'))
}

fn is_delivery(text: &str) -> bool {
    text.contains("delivery") || text.contains("drop") || (text.contains("stop") && text.contains('2'))
}

fn is_driver(text: &str) -> bool {
    text.contains("driver")
}

fn is_instructions(text: &str) -> bool {
    text.contains("instruction")
}

fn is_carrier_info(text: &str) -> bool {
    text.contains("carrier details")
}

fn is_customer_info(text: &str) -> bool {
    text.contains("customer details")
}

fn is_commodity(text: &str) -> bool {
    text.contains("commodity") || text.contains("weight")
}

/// Section classification rules, highest priority first.
static SECTION_RULES: &[Rule<SectionType>] = &[
    (is_rates, SectionType::Rates),
    (is_pickup, SectionType::Pickup),
    (is_delivery, SectionType::Delivery),
    (is_driver, SectionType::DriverDetails),
    (is_instructions, SectionType::Instructions),
    (is_carrier_info, SectionType::CarrierInfo),
    (is_customer_info, SectionType::CustomerInfo),
    (is_commodity, SectionType::CommodityDetails),
];

/// Classify one document section by keyword scan
pub fn classify_section(section: &str) -> SectionType {
    let lower = section.to_lowercase();
    for (predicate, section_type) in SECTION_RULES {
        if predicate(&lower) {
            return *section_type;
        }
    }
    SectionType::General
}
