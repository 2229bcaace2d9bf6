//! PDF helpers: text extraction, overlay rendering and stamping

pub mod fonts;
pub mod layer;
pub mod overlay;
pub mod stamp;
pub mod text;

#[cfg(test)]
pub(crate) mod test_support;

use std::path::Path;

pub use fonts::builtin_font;
pub use overlay::{render_text_overlay, OverlayStyle};
pub use stamp::{has_stamp, stamp_pages, stamped_page_count};

/// Compress all streams and write the document to `destination`
pub fn save_compressed(doc: &mut lopdf::Document, destination: &Path) -> Result<(), lopdf::Error> {
    doc.compress();
    doc.save(destination)?;
    Ok(())
}
