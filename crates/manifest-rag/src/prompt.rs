//! Prompt assembly for grounded answer generation

use manifest_domain::RetrievedChunk;

/// Question words that signal a cross-document verification intent
const VERIFICATION_CUES: &[&str] = &["same", "consistent", "match", "all documents", "across"];

const VERIFICATION_INSTRUCTIONS: &str = "\
CRITICAL INSTRUCTIONS:
1. This is a verification question - check ALL sources provided
2. Look for the specific value in EACH source
3. Answer \"Yes\" only if ALL sources show the same value
4. Answer \"No\" if sources differ or if some sources don't mention it
5. Be specific about which sources have what values
6. Keep answer to 2-3 sentences";

const ANSWER_INSTRUCTIONS: &str = "\
CRITICAL INSTRUCTIONS:
1. Answer ONLY the specific question asked
2. If asked about ONE thing, answer ONLY that
3. If asked generically about \"the rate\", explain there are two rates
4. Keep answer focused and concise (2-3 sentences)
5. Cite sources in brackets like [Source 1]";

/// Whether the question asks about cross-document consistency
pub fn is_verification_question(question: &str) -> bool {
    let question_lower = question.to_lowercase();
    VERIFICATION_CUES
        .iter()
        .any(|cue| question_lower.contains(cue))
}

/// Format the retrieved chunks as a labeled context block
pub fn build_context(results: &[RetrievedChunk]) -> String {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "[Source {} - {} - {}]\n{}",
                i + 1,
                r.chunk.metadata.doc_type,
                r.chunk.metadata.section_type,
                r.chunk.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n---\n\n")
}

/// Assemble the full answer-generation prompt
///
/// Verification questions get source-by-source comparison instructions;
/// everything else gets focused-answer instructions with ordinal citations.
pub fn build_answer_prompt(
    question: &str,
    results: &[RetrievedChunk],
    reference_id: Option<&str>,
) -> String {
    let context = build_context(results);

    let instructions = if is_verification_question(question) {
        VERIFICATION_INSTRUCTIONS
    } else {
        ANSWER_INSTRUCTIONS
    };

    let scope = match reference_id {
        Some(id) => format!("shipment {}", id),
        None => "logistics documents".to_string(),
    };

    format!(
        "You are analyzing logistics documents for {}.\n\n\
         Context from multiple documents:\n{}\n\n\
         Question: {}\n\n\
         {}\n\n\
         Answer:",
        scope, context, question, instructions
    )
}
