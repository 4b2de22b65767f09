//! Registry of tag grammar rules keyed by lower-case tag name.
//!
//! [§ 13.1.2.4 Optional tags](https://html.spec.whatwg.org/multipage/syntax.html#optional-tags)
//!
//! The table encodes the practical subset of the tag-omission rules the
//! template parser needs, plus void elements, raw-text content modes, and
//! the two foreign-content roots. It does not fully conform to the HTML5
//! tag-omission rules; tags it leaves out parse permissively with the
//! shared default definition.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::tag_definition::{TagContentType, TagDefinition, TagDescriptor};

/// Grammar rules for every tag name the parser treats specially.
///
/// Keys are lower-case; [`get_tag_definition`] folds its input before the
/// lookup. `ng-content` is the void content-projection slot recognized by
/// the template front end alongside the standard HTML void elements.
static TAG_DEFINITIONS: LazyLock<HashMap<&'static str, TagDefinition>> = LazyLock::new(|| {
    HashMap::from([
        // [§ 13.1.2 Void elements]: no contents, no end tag.
        (
            "link",
            TagDefinition::new(TagDescriptor {
                is_void: true,
                ..TagDescriptor::default()
            }),
        ),
        (
            "ng-content",
            TagDefinition::new(TagDescriptor {
                is_void: true,
                ..TagDescriptor::default()
            }),
        ),
        (
            "img",
            TagDefinition::new(TagDescriptor {
                is_void: true,
                ..TagDescriptor::default()
            }),
        ),
        (
            "input",
            TagDefinition::new(TagDescriptor {
                is_void: true,
                ..TagDescriptor::default()
            }),
        ),
        (
            "hr",
            TagDefinition::new(TagDescriptor {
                is_void: true,
                ..TagDescriptor::default()
            }),
        ),
        (
            "br",
            TagDefinition::new(TagDescriptor {
                is_void: true,
                ..TagDescriptor::default()
            }),
        ),
        (
            "wbr",
            TagDefinition::new(TagDescriptor {
                is_void: true,
                ..TagDescriptor::default()
            }),
        ),
        // "A p element's end tag can be omitted if the p element is
        // immediately followed by an address, article, aside, ... element, or
        // if there is no more content in the parent element."
        (
            "p",
            TagDefinition::new(TagDescriptor {
                closed_by_children: &[
                    "address", "article", "aside", "blockquote", "div", "dl", "fieldset",
                    "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hgroup",
                    "hr", "main", "nav", "ol", "p", "pre", "section", "table", "ul",
                ],
                closed_by_parent: true,
                ..TagDescriptor::default()
            }),
        ),
        // Table sections close each other; a row demands a section parent
        // and gets a tbody invented when it has none.
        (
            "thead",
            TagDefinition::new(TagDescriptor {
                closed_by_children: &["tbody", "tfoot"],
                ..TagDescriptor::default()
            }),
        ),
        (
            "tbody",
            TagDefinition::new(TagDescriptor {
                closed_by_children: &["tbody", "tfoot"],
                closed_by_parent: true,
                ..TagDescriptor::default()
            }),
        ),
        (
            "tfoot",
            TagDefinition::new(TagDescriptor {
                closed_by_children: &["tbody"],
                closed_by_parent: true,
                ..TagDescriptor::default()
            }),
        ),
        (
            "tr",
            TagDefinition::new(TagDescriptor {
                closed_by_children: &["tr"],
                closed_by_parent: true,
                required_parents: &["tbody", "tfoot", "thead"],
                ..TagDescriptor::default()
            }),
        ),
        (
            "td",
            TagDefinition::new(TagDescriptor {
                closed_by_children: &["td", "th"],
                closed_by_parent: true,
                ..TagDescriptor::default()
            }),
        ),
        (
            "th",
            TagDefinition::new(TagDescriptor {
                closed_by_children: &["td", "th"],
                closed_by_parent: true,
                ..TagDescriptor::default()
            }),
        ),
        (
            "col",
            TagDefinition::new(TagDescriptor {
                closed_by_children: &["col"],
                required_parents: &["colgroup"],
                ..TagDescriptor::default()
            }),
        ),
        // Foreign-content roots: the element and its unprefixed descendants
        // belong to the SVG or MathML namespace.
        (
            "svg",
            TagDefinition::new(TagDescriptor {
                implicit_namespace_prefix: Some("svg"),
                ..TagDescriptor::default()
            }),
        ),
        (
            "math",
            TagDefinition::new(TagDescriptor {
                implicit_namespace_prefix: Some("math"),
                ..TagDescriptor::default()
            }),
        ),
        (
            "li",
            TagDefinition::new(TagDescriptor {
                closed_by_children: &["li"],
                closed_by_parent: true,
                ..TagDescriptor::default()
            }),
        ),
        (
            "dt",
            TagDefinition::new(TagDescriptor {
                closed_by_children: &["dt", "dd"],
                ..TagDescriptor::default()
            }),
        ),
        (
            "dd",
            TagDefinition::new(TagDescriptor {
                closed_by_children: &["dt", "dd"],
                closed_by_parent: true,
                ..TagDescriptor::default()
            }),
        ),
        // Ruby annotation containers. rtc is not closed by rt: an rt may
        // nest under the open rtc.
        (
            "rb",
            TagDefinition::new(TagDescriptor {
                closed_by_children: &["rb", "rt", "rtc", "rp"],
                closed_by_parent: true,
                ..TagDescriptor::default()
            }),
        ),
        (
            "rt",
            TagDefinition::new(TagDescriptor {
                closed_by_children: &["rb", "rt", "rtc", "rp"],
                closed_by_parent: true,
                ..TagDescriptor::default()
            }),
        ),
        (
            "rtc",
            TagDefinition::new(TagDescriptor {
                closed_by_children: &["rb", "rtc", "rp"],
                closed_by_parent: true,
                ..TagDescriptor::default()
            }),
        ),
        (
            "rp",
            TagDefinition::new(TagDescriptor {
                closed_by_children: &["rb", "rt", "rtc", "rp"],
                closed_by_parent: true,
                ..TagDescriptor::default()
            }),
        ),
        (
            "optgroup",
            TagDefinition::new(TagDescriptor {
                closed_by_children: &["optgroup"],
                closed_by_parent: true,
                ..TagDescriptor::default()
            }),
        ),
        (
            "option",
            TagDefinition::new(TagDescriptor {
                closed_by_children: &["option", "optgroup"],
                closed_by_parent: true,
                ..TagDescriptor::default()
            }),
        ),
        // Raw-text and escapable-raw-text bodies per [§ 13.1.2 Elements].
        (
            "style",
            TagDefinition::new(TagDescriptor {
                content_type: TagContentType::RawText,
                ..TagDescriptor::default()
            }),
        ),
        (
            "script",
            TagDefinition::new(TagDescriptor {
                content_type: TagContentType::RawText,
                ..TagDescriptor::default()
            }),
        ),
        (
            "title",
            TagDefinition::new(TagDescriptor {
                content_type: TagContentType::EscapableRawText,
                ..TagDescriptor::default()
            }),
        ),
        (
            "textarea",
            TagDefinition::new(TagDescriptor {
                content_type: TagContentType::EscapableRawText,
                ..TagDescriptor::default()
            }),
        ),
    ])
});

/// Definition shared by every tag name missing from [`TAG_DEFINITIONS`].
///
/// Unknown tags, custom elements included, are valid HTML and parse
/// permissively: not void, no closing rules, no parent constraint, body
/// parsed as markup.
static DEFAULT_TAG_DEFINITION: LazyLock<TagDefinition> = LazyLock::new(TagDefinition::default);

/// Look up the grammar rules for `tag_name`.
///
/// Tag names are ASCII case-insensitive, so the input is lower-cased before
/// the lookup; a name that is already lower-case probes the table without
/// allocating. Every unregistered name maps to the same shared default
/// definition, which makes the function total: any input string, the empty
/// string included, yields a usable definition.
#[must_use]
pub fn get_tag_definition(tag_name: &str) -> &'static TagDefinition {
    let definition = if tag_name.bytes().any(|byte| byte.is_ascii_uppercase()) {
        TAG_DEFINITIONS.get(tag_name.to_ascii_lowercase().as_str())
    } else {
        TAG_DEFINITIONS.get(tag_name)
    };
    definition.unwrap_or_else(|| LazyLock::force(&DEFAULT_TAG_DEFINITION))
}
