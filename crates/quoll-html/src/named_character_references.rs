//! Named character reference lookup table.
//!
//! [§ 13.5 Named character references](https://html.spec.whatwg.org/multipage/named-characters.html#named-character-references)
//!
//! The full standard defines 2,231 names; this table carries a small fixed
//! set chosen to keep the compiler footprint low. Numeric references
//! (`&#123;`, `&#x1AB;`) cover everything else and are parsed by the
//! tokenizer, not looked up here.

use std::collections::HashMap;
use std::sync::LazyLock;

/// The named character reference table.
///
/// Maps entity names, as they appear between `&` and `;`, to their
/// replacement text. Names compare case-sensitively: `&Aacute;` and
/// `&aacute;` spell different letters.
static NAMED_ENTITIES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // The references basic markup cannot do without.
        ("lt", "<"),
        ("gt", ">"),
        ("nbsp", "\u{00A0}"),
        ("amp", "&"),
        // Latin-1 accented letters, upper case.
        ("Aacute", "\u{00C1}"),
        ("Acirc", "\u{00C2}"),
        ("Agrave", "\u{00C0}"),
        ("Atilde", "\u{00C3}"),
        ("Auml", "\u{00C4}"),
        ("Ccedil", "\u{00C7}"),
        ("Eacute", "\u{00C9}"),
        ("Ecirc", "\u{00CA}"),
        ("Egrave", "\u{00C8}"),
        ("Euml", "\u{00CB}"),
        ("Iacute", "\u{00CD}"),
        ("Icirc", "\u{00CE}"),
        ("Igrave", "\u{00CC}"),
        ("Iuml", "\u{00CF}"),
        ("Oacute", "\u{00D3}"),
        ("Ocirc", "\u{00D4}"),
        ("Ograve", "\u{00D2}"),
        ("Otilde", "\u{00D5}"),
        ("Ouml", "\u{00D6}"),
        ("Uacute", "\u{00DA}"),
        ("Ucirc", "\u{00DB}"),
        ("Ugrave", "\u{00D9}"),
        ("Uuml", "\u{00DC}"),
        // Latin-1 accented letters, lower case.
        ("aacute", "\u{00E1}"),
        ("acirc", "\u{00E2}"),
        ("agrave", "\u{00E0}"),
        ("atilde", "\u{00E3}"),
        ("auml", "\u{00E4}"),
        ("ccedil", "\u{00E7}"),
        ("eacute", "\u{00E9}"),
        ("ecirc", "\u{00EA}"),
        ("egrave", "\u{00E8}"),
        ("euml", "\u{00EB}"),
        ("iacute", "\u{00ED}"),
        ("icirc", "\u{00EE}"),
        ("igrave", "\u{00EC}"),
        ("iuml", "\u{00EF}"),
        ("oacute", "\u{00F3}"),
        ("ocirc", "\u{00F4}"),
        ("ograve", "\u{00F2}"),
        ("otilde", "\u{00F5}"),
        ("ouml", "\u{00F6}"),
        ("uacute", "\u{00FA}"),
        ("ucirc", "\u{00FB}"),
        ("ugrave", "\u{00F9}"),
        ("uuml", "\u{00FC}"),
    ])
});

/// Decode a named character reference.
///
/// `name` is the text captured between `&` and `;`, with neither delimiter
/// included and no leading `#`. Returns the replacement text, or `None`
/// when the name is not in the table; the caller picks the fallback,
/// typically passing the raw reference through or reporting a diagnostic.
///
/// # Example
/// ```
/// use quoll_html::decode_entity;
///
/// assert_eq!(decode_entity("amp"), Some("&"));
/// assert_eq!(decode_entity("Aacute"), Some("\u{00C1}"));
/// assert_eq!(decode_entity("bogus"), None);
/// ```
#[must_use]
pub fn decode_entity(name: &str) -> Option<&'static str> {
    NAMED_ENTITIES.get(name).copied()
}
