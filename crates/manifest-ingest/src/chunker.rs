//! Section-aware document chunking

use crate::classify::{classify_section, detect_doc_type};
use crate::reference::extract_reference_id;
use manifest_domain::{Chunk, ChunkMetadata, SectionType};
use tracing::debug;

/// Splits a parsed markdown document into retrieval chunks
///
/// Sections stay intact: each `##` section becomes one chunk, prefixed with
/// the document header block so every chunk carries enough standalone context
/// for retrieval. The header block itself is always chunk 0.
#[derive(Debug, Default)]
pub struct DocumentChunker;

impl DocumentChunker {
    /// Create a new chunker
    pub fn new() -> Self {
        Self
    }

    /// Process one parsed document into an ordered chunk sequence
    ///
    /// Reference id and document type are computed once from the whole text
    /// and propagated to every chunk. An empty document yields a single
    /// header chunk with empty content; a non-empty document without section
    /// headers yields the header chunk plus a whole-document fallback chunk.
    pub fn process(&self, markdown: &str) -> Vec<Chunk> {
        let reference_id = extract_reference_id(markdown);
        let doc_type = detect_doc_type(markdown);

        debug!(
            reference_id = %reference_id,
            doc_type = %doc_type,
            "processing document"
        );

        let sections = split_sections(markdown);
        let header = sections[0].trim().to_string();

        let mut chunks = Vec::with_capacity(sections.len());

        // The header block carries the core identifiers and is indexed on
        // its own as chunk 0.
        chunks.push(Chunk::new(
            header.clone(),
            ChunkMetadata {
                reference_id: reference_id.clone(),
                doc_type,
                chunk_id: 0,
                section_type: SectionType::Header,
                has_table: false,
            },
        ));

        for (i, section) in sections.iter().enumerate().skip(1) {
            let content = format!("{}\n\n{}", header, section);
            chunks.push(Chunk::new(
                content,
                ChunkMetadata {
                    reference_id: reference_id.clone(),
                    doc_type,
                    chunk_id: i,
                    section_type: classify_section(section),
                    has_table: section.contains('|'),
                },
            ));
        }

        // No section headers found: fall back to one whole-document chunk.
        // The header chunk is kept alongside it, overlap and all, since
        // callers rely on chunk 0 always being the header.
        if chunks.len() == 1 && !markdown.trim().is_empty() {
            debug!("no section headers found, emitting full-document fallback chunk");
            chunks.push(Chunk::new(
                markdown,
                ChunkMetadata {
                    reference_id,
                    doc_type,
                    chunk_id: 1,
                    section_type: SectionType::FullDocument,
                    has_table: markdown.contains('|'),
                },
            ));
        }

        chunks
    }
}

/// Split markdown at top-level `##` section headers
///
/// The first element is the header block; each following element starts with
/// its `##` line. Split points need a preceding newline, so a `##` title on
/// the very first line stays in the header block and keeps prefixing the
/// section chunks. Deeper headers (`###`) do not split.
fn split_sections(markdown: &str) -> Vec<String> {
    let mut sections = vec![String::new()];

    for (i, line) in markdown.lines().enumerate() {
        if i > 0 && is_section_header(line) {
            sections.push(String::new());
        }

        let current = sections.last_mut().expect("sections is never empty");
        if !current.is_empty() {
            current.push('\n');
        }
        current.push_str(line);
    }

    sections
}

/// A top-level section header is `##` followed by whitespace (or nothing),
/// which excludes `###` and deeper.
fn is_section_header(line: &str) -> bool {
    match line.strip_prefix("##") {
        Some(rest) => rest.is_empty() || rest.starts_with(char::is_whitespace),
        None => false,
    }
}
