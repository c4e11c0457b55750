//! Question-intent filtering and diversity re-ranking

use manifest_domain::{DocType, MetadataFilter, RetrievedChunk};
use std::collections::VecDeque;

/// An intent cue: if the predicate matches the lowercased question, narrow
/// the filter to the paired doc type. Evaluated in declaration order,
/// first match wins.
type Cue = (fn(&str) -> bool, DocType);

fn mentions_carrier_side(q: &str) -> bool {
    q.contains("carrier pay") || q.contains("carrier cost")
}

fn mentions_customer_side(q: &str) -> bool {
    q.contains("customer rate") || q.contains("customer pay")
}

fn mentions_bol(q: &str) -> bool {
    q.contains("bill of lading") || q.contains("bol")
}

/// Doc-type cues in priority order. Only narrow, unambiguous phrasings
/// appear here; a generic "rate" question must keep broad recall because it
/// may need both the customer and the carrier figure.
static FILTER_CUES: &[Cue] = &[
    (mentions_carrier_side, DocType::CarrierRc),
    (mentions_customer_side, DocType::ShipperRc),
    (mentions_bol, DocType::Bol),
];

/// Build the metadata filter for a question
///
/// Always includes `reference_id` when given. The doc-type dimension is set
/// only when the question carries a narrow cue from [`FILTER_CUES`].
pub fn build_filter(question: &str, reference_id: Option<&str>) -> MetadataFilter {
    let mut filter = match reference_id {
        Some(id) => MetadataFilter::for_reference(id),
        None => MetadataFilter::default(),
    };

    let question_lower = question.to_lowercase();
    for (matches, doc_type) in FILTER_CUES {
        if matches(&question_lower) {
            filter = filter.with_doc_type(*doc_type);
            break;
        }
    }

    filter
}

/// Re-rank a candidate pool for doc-type diversity
///
/// Groups candidates by doc type (groups ordered by first appearance, each
/// group keeping its original relevance order), then round-robins across the
/// groups taking one result per type per round until `target` results are
/// collected or every group is exhausted. A question backed by multiple
/// document types is never answered from a single type's chunks alone.
pub fn diversify(results: Vec<RetrievedChunk>, target: usize) -> Vec<RetrievedChunk> {
    if results.is_empty() {
        return Vec::new();
    }

    let mut order: Vec<DocType> = Vec::new();
    let mut groups: Vec<VecDeque<RetrievedChunk>> = Vec::new();
    for result in results {
        let doc_type = result.doc_type();
        match order.iter().position(|t| *t == doc_type) {
            Some(idx) => groups[idx].push_back(result),
            None => {
                order.push(doc_type);
                groups.push(VecDeque::from([result]));
            }
        }
    }

    let max_per_type = target / order.len() + 1;
    let mut diversified = Vec::with_capacity(target);

    'rounds: for _ in 0..max_per_type {
        for group in &mut groups {
            if diversified.len() >= target {
                break 'rounds;
            }
            if let Some(next) = group.pop_front() {
                diversified.push(next);
            }
        }
    }

    diversified.truncate(target);
    diversified
}
