use printpdf::BuiltinFont;

/// Resolve a PostScript font name to one of the standard 14 PDF fonts
pub fn builtin_font(name: &str) -> Option<BuiltinFont> {
    let font = match name {
        "Helvetica" => BuiltinFont::Helvetica,
        "Helvetica-Bold" => BuiltinFont::HelveticaBold,
        "Helvetica-Oblique" => BuiltinFont::HelveticaOblique,
        "Helvetica-BoldOblique" => BuiltinFont::HelveticaBoldOblique,
        "Times-Roman" => BuiltinFont::TimesRoman,
        "Times-Bold" => BuiltinFont::TimesBold,
        "Times-Italic" => BuiltinFont::TimesItalic,
        "Times-BoldItalic" => BuiltinFont::TimesBoldItalic,
        "Courier" => BuiltinFont::Courier,
        "Courier-Bold" => BuiltinFont::CourierBold,
        "Courier-Oblique" => BuiltinFont::CourierOblique,
        "Courier-BoldOblique" => BuiltinFont::CourierBoldOblique,
        "Symbol" => BuiltinFont::Symbol,
        "ZapfDingbats" => BuiltinFont::ZapfDingbats,
        _ => return None,
    };
    Some(font)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_faces() {
        assert!(matches!(builtin_font("Helvetica"), Some(BuiltinFont::Helvetica)));
        assert!(matches!(
            builtin_font("Courier-Bold"),
            Some(BuiltinFont::CourierBold)
        ));
        assert!(matches!(builtin_font("Times-Roman"), Some(BuiltinFont::TimesRoman)));
    }

    #[test]
    fn test_unknown_face() {
        assert!(builtin_font("Comic Sans").is_none());
        assert!(builtin_font("helvetica").is_none());
    }
}
