//! Operation collector for printpdf canvases

use printpdf::{BuiltinFont, CurTransMat, Op, PdfFontHandle, Point, Pt, TextItem};

/// A builder that collects PDF operations for one page
#[derive(Default)]
pub struct LayerBuilder {
    ops: Vec<Op>,
}

impl LayerBuilder {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Get the collected operations
    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    /// Get a reference to the operations (for inspection)
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Save graphics state
    pub fn save_graphics_state(&mut self) {
        self.ops.push(Op::SaveGraphicsState);
    }

    /// Restore graphics state
    pub fn restore_graphics_state(&mut self) {
        self.ops.push(Op::RestoreGraphicsState);
    }

    /// Rotate the coordinate system counter-clockwise around the origin
    ///
    /// Applies to all subsequent drawing operations until the graphics
    /// state is restored.
    pub fn rotate(&mut self, degrees: f32) {
        if degrees == 0.0 {
            return;
        }
        self.ops.push(Op::SetTransformationMatrix {
            matrix: CurTransMat::Rotate(degrees),
        });
    }

    /// Draw text with a builtin font, position given in points
    pub fn use_text_builtin<S: Into<String>>(
        &mut self,
        text: S,
        font_size: f32,
        x: Pt,
        y: Pt,
        font: BuiltinFont,
    ) {
        let text_str = text.into();
        if text_str.is_empty() {
            return;
        }

        self.ops.push(Op::StartTextSection);
        self.ops.push(Op::SetTextCursor {
            pos: Point { x, y },
        });
        self.ops.push(Op::SetFont {
            size: Pt(font_size),
            font: PdfFontHandle::Builtin(font),
        });
        self.ops.push(Op::ShowText {
            items: vec![TextItem::Text(text_str)],
        });
        self.ops.push(Op::EndTextSection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_skipped() {
        let mut layer = LayerBuilder::new();
        layer.use_text_builtin("", 12.0, Pt(0.0), Pt(0.0), BuiltinFont::Helvetica);
        assert!(layer.ops().is_empty());
    }

    #[test]
    fn test_zero_rotation_is_skipped() {
        let mut layer = LayerBuilder::new();
        layer.rotate(0.0);
        assert!(layer.ops().is_empty());
        layer.rotate(90.0);
        assert_eq!(layer.ops().len(), 1);
    }

    #[test]
    fn test_text_section_is_balanced() {
        let mut layer = LayerBuilder::new();
        layer.use_text_builtin("SO1234", 20.0, Pt(10.0), Pt(20.0), BuiltinFont::Helvetica);
        let ops = layer.into_ops();
        assert_eq!(ops.len(), 5);
        assert!(matches!(ops.first(), Some(Op::StartTextSection)));
        assert!(matches!(ops.last(), Some(Op::EndTextSection)));
    }
}
