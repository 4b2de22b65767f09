//! HTML tag grammar tables for the Quoll template compiler.
//!
//! # Scope
//!
//! This crate implements the two lookup tables the HTML tokenizer and tree
//! builder consult while parsing component templates:
//!
//! - **Tag definition registry** ([WHATWG § 13.1.2.4 Optional tags](https://html.spec.whatwg.org/multipage/syntax.html#optional-tags))
//!   - Content model per tag: raw text, escapable raw text, or parsable data
//!   - Implicit-close rules (a second `<li>` closes the first)
//!   - Required-parent rules (a stray `<tr>` gets a `<tbody>` invented)
//!   - Void elements, including the `<ng-content>` projection slot
//!   - Namespace hints for the `<svg>` and `<math>` foreign-content roots
//!
//! - **Named character references** ([WHATWG § 13.5](https://html.spec.whatwg.org/multipage/named-characters.html#named-character-references))
//!   - A reduced, fixed table of named entities (`&amp;`, `&Aacute;`, …)
//!
//! Both tables are built once on first use and never mutated; every lookup
//! is a pure read over immutable data, safe for unsynchronized concurrent
//! use by any number of parser instances. Every operation is total: unknown
//! tags resolve to a shared permissive default and unknown entity names
//! report `None`, so no input can make this crate fail.
//!
//! # Out of Scope
//!
//! - The tokenizer and tree builder themselves; they consume these answers
//! - Numeric character references (`&#123;`, `&#x1AB;`)
//! - Attribute parsing and namespace resolution beyond the per-tag hint

/// Named character reference lookup table per § 13.5.
pub mod named_character_references;
/// Tag definition lookup keyed by tag name.
pub mod registry;
/// Tag grammar records and the content model enumeration.
pub mod tag_definition;

pub use named_character_references::decode_entity;
pub use registry::get_tag_definition;
pub use tag_definition::{TagContentType, TagDefinition};
