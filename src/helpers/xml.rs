//! XML text helpers for values that end up inside spreadsheet XML parts.

use quick_xml::escape::escape;
use std::borrow::Cow;

/// Returns true for characters XML 1.0 does not allow anywhere in a document.
#[inline]
fn is_illegal_xml_char(character: char) -> bool {
    matches!(character, '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}')
}

/// Makes a raw string safe for an XML attribute or text node.
///
/// Escapes `& " ' < >` and drops characters XML cannot carry at all.
/// Must be applied to raw text exactly once: `&amp;` escapes to `&amp;amp;`.
pub(crate) fn escape_xml_text(raw: &str) -> Cow<'_, str> {
    if raw.chars().any(is_illegal_xml_char) {
        let cleaned: String = raw.chars().filter(|c| !is_illegal_xml_char(*c)).collect();
        Cow::Owned(escape(cleaned).into_owned())
    } else {
        escape(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape_xml_text(r#"a & b < "c" > 'd'"#), "a &amp; b &lt; &quot;c&quot; &gt; &apos;d&apos;");
    }

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(escape_xml_text("Amount"), Cow::Borrowed("Amount")));
    }

    #[test]
    fn escaping_is_not_idempotent() {
        let once = escape_xml_text("R&D");
        assert_eq!(once, "R&amp;D");
        assert_eq!(escape_xml_text(&once), "R&amp;amp;D");
    }

    #[test]
    fn drops_illegal_characters() {
        assert_eq!(escape_xml_text("a\u{1}b\tc"), "ab\tc");
    }
}
