use lopdf::Document;

/// Page numbers of a document in reading order (1-based)
pub fn page_numbers(doc: &Document) -> Vec<u32> {
    doc.get_pages().keys().copied().collect()
}

/// Extract the text of a single page
pub fn page_text(doc: &Document, page_number: u32) -> Result<String, lopdf::Error> {
    doc.extract_text(&[page_number])
}
