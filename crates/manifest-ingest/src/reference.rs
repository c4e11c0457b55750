//! Reference id extraction from document text

use manifest_domain::UNKNOWN_REFERENCE;
use once_cell::sync::Lazy;
use regex::Regex;

/// The five reference-id patterns, tried in order; first match wins.
///
/// 1. Table row: `| Reference ID | LD53657 |`
/// 2. Bold label: `**Reference ID:** LD53657`
/// 3. Plain label: `Reference ID: LD53657`
/// 4. Load ID label: `Load ID: LD53657`
/// 5. Direct token: `LD#####` or `BOL#####`
static REFERENCE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\|\s*Reference\s+ID\s*\|\s*([A-Z0-9]+)",
        r"(?i)\*\*Reference\s+ID[:\s]*\*\*\s*([A-Z0-9]+)",
        r"(?i)Reference\s+ID[:\s]+([A-Z0-9]+)",
        r"(?i)Load\s+ID[:\s]+([A-Z0-9]+)",
        r"\b(LD[0-9]{5}|BOL[0-9]{5})\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("reference pattern must compile"))
    .collect()
});

/// Extract the load / BOL reference id from document text
///
/// Tries the five patterns in priority order and returns the first capture.
/// Returns `"UNKNOWN"` when nothing matches.
pub fn extract_reference_id(text: &str) -> String {
    for pattern in REFERENCE_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(text) {
            if let Some(id) = captures.get(1) {
                return id.as_str().to_string();
            }
        }
    }

    UNKNOWN_REFERENCE.to_string()
}
