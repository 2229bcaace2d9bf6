//! Single-page text overlay rendered with printpdf

use printpdf::{BuiltinFont, Mm, PdfDocument, PdfPage, PdfSaveOptions, Pt};

use crate::config::defaults::{CANVAS_HEIGHT_MM, CANVAS_WIDTH_MM};

use super::layer::LayerBuilder;

/// How the overlay text is placed on the canvas
#[derive(Debug, Clone, Copy)]
pub struct OverlayStyle {
    pub font: BuiltinFont,
    /// Font size in points
    pub font_size: f32,
    /// Counter-clockwise rotation in degrees, applied before positioning
    pub rotation: f32,
    /// Position in points, in the rotated coordinate system
    pub x: f32,
    pub y: f32,
}

/// Render `text` onto a blank single-page canvas and return the PDF bytes
pub fn render_text_overlay(text: &str, style: &OverlayStyle) -> Vec<u8> {
    let mut layer = LayerBuilder::new();
    layer.save_graphics_state();
    layer.rotate(style.rotation);
    layer.use_text_builtin(text, style.font_size, Pt(style.x), Pt(style.y), style.font);
    layer.restore_graphics_state();

    let page = PdfPage::new(Mm(CANVAS_WIDTH_MM), Mm(CANVAS_HEIGHT_MM), layer.into_ops());

    let mut doc = PdfDocument::new("Overlay");
    doc.with_pages(vec![page]);

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    if !warnings.is_empty() {
        log::debug!("Overlay rendering produced {} warning(s)", warnings.len());
    }
    bytes
}
