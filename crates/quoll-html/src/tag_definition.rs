//! Tag grammar records and the content model enumeration.
//!
//! [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#elements-2)
//! [§ 13.1.2.4 Optional tags](https://html.spec.whatwg.org/multipage/syntax.html#optional-tags)
//!
//! A [`TagDefinition`] bundles everything irregular about one tag name so the
//! tokenizer and tree builder can stay regular, table-driven state machines:
//! which start tags implicitly close it, whether closing its parent closes it,
//! which parents it demands, and how its body is scanned.

use std::collections::HashSet;

use strum_macros::Display;

/// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#elements-2)
///
/// The scanning and decoding discipline the tokenizer applies to an element's
/// body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum TagContentType {
    /// "Raw text elements can have text, though it has restrictions."
    ///
    /// The body is opaque text up to the matching end tag: no child elements
    /// and no character references (`script`, `style`).
    RawText,
    /// "Escapable raw text elements can have text and character references."
    ///
    /// The body is text-only, but character references are still decoded
    /// (`title`, `textarea`).
    EscapableRawText,
    /// "Normal elements can have text, character references, other
    /// elements, and comments."
    ///
    /// The body is parsed as nested markup. Every tag that does not opt into
    /// a raw-text mode uses this.
    #[default]
    ParsableData,
}

/// Options record for building a [`TagDefinition`].
///
/// Mirrors the shape of the registry table: every field defaults to its
/// neutral value, so each table entry spells out only the rules that apply
/// to its tag.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TagDescriptor {
    /// Child tag names whose start tag implicitly closes this element.
    pub closed_by_children: &'static [&'static str],
    /// Closing the parent also closes this element.
    pub closed_by_parent: bool,
    /// Tag names this element must sit directly under. The first entry
    /// doubles as the parent to synthesize when the constraint is violated.
    pub required_parents: &'static [&'static str],
    /// Namespace prefix for the element and its unprefixed descendants.
    pub implicit_namespace_prefix: Option<&'static str>,
    /// Body scanning mode.
    pub content_type: TagContentType,
    /// The element can never have contents or an end tag.
    pub is_void: bool,
}

/// [§ 13.1.2.4 Optional tags](https://html.spec.whatwg.org/multipage/syntax.html#optional-tags)
///
/// The grammar rules for one tag name.
///
/// "Certain tags can be omitted." The parser answers each omission decision
/// by querying the definition of the tag on top of its open-element stack;
/// the definition itself never changes after construction, so lookups are
/// safe to share across parser threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDefinition {
    /// Child tag names whose start tag implicitly closes this element,
    /// stored lower-case.
    closed_by_children: HashSet<&'static str>,
    /// "A p element's end tag can be omitted if ... there is no more content
    /// in the parent element." Closing the parent closes this element too.
    /// Always `true` for void elements.
    pub closed_by_parent: bool,
    /// Tag names this element is valid directly under, stored lower-case.
    /// `None` when any parent is acceptable.
    required_parents: Option<HashSet<&'static str>>,
    /// First declared required parent. The tree builder inserts an element
    /// with this name when [`TagDefinition::require_extra_parent`] reports a
    /// violation.
    pub parent_to_add: Option<&'static str>,
    /// Namespace hint (`"svg"`, `"math"`) applied to the element and its
    /// unprefixed descendants.
    pub implicit_namespace_prefix: Option<&'static str>,
    /// Body scanning mode.
    pub content_type: TagContentType,
    /// [§ 13.1.2 Void elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)
    ///
    /// "Void elements only have a start tag; end tags must not be specified
    /// for void elements."
    pub is_void: bool,
}

impl TagDefinition {
    /// Build a definition from a descriptor, deriving the dependent fields.
    ///
    /// A void element is always closed by its parent, and the first declared
    /// required parent becomes [`TagDefinition::parent_to_add`]. Deriving
    /// both here keeps the registry table unable to express an inconsistent
    /// definition.
    pub(crate) fn new(descriptor: TagDescriptor) -> Self {
        let TagDescriptor {
            closed_by_children,
            closed_by_parent,
            required_parents,
            implicit_namespace_prefix,
            content_type,
            is_void,
        } = descriptor;

        let parent_to_add = required_parents.first().copied();

        Self {
            closed_by_children: closed_by_children.iter().copied().collect(),
            closed_by_parent: closed_by_parent || is_void,
            required_parents: (!required_parents.is_empty())
                .then(|| required_parents.iter().copied().collect()),
            parent_to_add,
            implicit_namespace_prefix,
            content_type,
            is_void,
        }
    }

    /// Whether the tree builder must synthesize [`TagDefinition::parent_to_add`]
    /// before inserting this element under `current_parent`.
    ///
    /// Always `false` for unconstrained tags. With a constraint, `true` when
    /// there is no parent context at all, and otherwise whenever the parent
    /// is not one of the required parents (compared ASCII case-insensitively).
    ///
    /// This implements the informal rule "a `tr` with no enclosing `tbody`,
    /// `thead`, or `tfoot` gets one invented".
    #[must_use]
    pub fn require_extra_parent(&self, current_parent: Option<&str>) -> bool {
        let Some(required) = &self.required_parents else {
            return false;
        };
        match current_parent {
            // No parent context: the constraint is unsatisfiable.
            None | Some("") => true,
            Some(parent) => !contains_tag(required, parent),
        }
    }

    /// Whether a start tag named `name`, seen while this element is the
    /// current node, implicitly closes this element first.
    ///
    /// "An li element's end tag can be omitted if the li element is
    /// immediately followed by another li element." A void element reports
    /// `true` for every `name`: it has no body the child could belong to, so
    /// a caller that pushed one onto its open-element stack anyway still
    /// pops it before inserting anything else.
    #[must_use]
    pub fn is_closed_by_child(&self, name: &str) -> bool {
        self.is_void || contains_tag(&self.closed_by_children, name)
    }
}

impl Default for TagDefinition {
    /// The permissive definition unknown tags parse with: not void, no
    /// closing rules, no parent constraint, body parsed as markup.
    fn default() -> Self {
        Self::new(TagDescriptor::default())
    }
}

/// Membership test against a set of lower-case tag names.
///
/// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
/// "Append the lowercase version of the current input character ... to the
/// current tag token's tag name." Tag names compare ASCII
/// case-insensitively; input that is already lower-case probes the set
/// without allocating.
fn contains_tag(set: &HashSet<&'static str>, name: &str) -> bool {
    if name.bytes().any(|byte| byte.is_ascii_uppercase()) {
        set.contains(name.to_ascii_lowercase().as_str())
    } else {
        set.contains(name)
    }
}
