use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Byte order mark, left at the start of some spreadsheet exports
const BOM: char = '\u{FEFF}';

/// Canonicalize text for comparison: lower-case, strip accents, trim.
///
/// "Ñandú " → "nandu". Total and idempotent.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .collect();

    folded
        .trim_matches(|c: char| c.is_whitespace() || c == BOM)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_accents() {
        assert_eq!(normalize("ÓSDE"), "osde");
        assert_eq!(normalize("Ñandú"), "nandu");
        assert_eq!(normalize("Unión Personal"), "union personal");
        assert_eq!(normalize("ÓSDE"), normalize("osde"));
    }

    #[test]
    fn test_trim() {
        assert_eq!(normalize("  IOMA \t"), "ioma");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_trim_strips_bom() {
        assert_eq!(normalize("\u{FEFF}OSDE"), "osde");
        assert_eq!(normalize(" Sanidad\u{FEFF} "), "sanidad");
        assert_eq!(normalize("\u{FEFF}"), "");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_idempotent() {
        for s in ["ÓSDE", " Sanidad ", "Ñ", "açaí", "OSPRERA, O.S.P.R.E.R.A.", "", "Ünïcödé  "] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn test_keeps_non_latin_marks_outside_block() {
        // U+20D7 (combining right arrow above) is outside U+0300–U+036F
        assert_eq!(normalize("a\u{20D7}"), "a\u{20D7}");
    }
}
