//! Integration tests for the tag definition registry.

use quoll_html::{TagContentType, TagDefinition, get_tag_definition};

#[test]
fn test_void_elements() {
    for tag in ["link", "ng-content", "img", "input", "hr", "br", "wbr"] {
        let definition = get_tag_definition(tag);
        assert!(definition.is_void, "{tag} should be void");
        assert!(definition.closed_by_parent, "{tag} closes with its parent");
    }
}

#[test]
fn test_void_element_is_closed_by_any_child() {
    let br = get_tag_definition("br");
    assert!(br.is_closed_by_child("div"));
    assert!(br.is_closed_by_child("span"));
    assert!(br.is_closed_by_child("not-a-real-tag"));
    assert!(br.is_closed_by_child(""));
}

#[test]
fn test_lookup_is_case_insensitive() {
    let li = get_tag_definition("li");
    assert!(std::ptr::eq(li, get_tag_definition("LI")));
    assert!(std::ptr::eq(li, get_tag_definition("Li")));
    assert!(std::ptr::eq(li, get_tag_definition("lI")));

    let textarea = get_tag_definition("textarea");
    assert!(std::ptr::eq(textarea, get_tag_definition("TEXTAREA")));
}

#[test]
fn test_child_names_are_case_folded() {
    let p = get_tag_definition("p");
    assert!(p.is_closed_by_child("DIV"));
    assert!(p.is_closed_by_child("Table"));

    let tr = get_tag_definition("tr");
    assert!(!tr.require_extra_parent(Some("TBODY")));
    assert!(!tr.require_extra_parent(Some("tHeAd")));
}

#[test]
fn test_p_closed_by_block_children() {
    let p = get_tag_definition("p");
    assert!(p.is_closed_by_child("div"));
    assert!(p.is_closed_by_child("p"));
    assert!(p.is_closed_by_child("table"));
    assert!(p.is_closed_by_child("h3"));
    assert!(!p.is_closed_by_child("span"));
    assert!(!p.is_closed_by_child("em"));
    assert!(p.closed_by_parent);
    assert!(!p.is_void);
}

#[test]
fn test_table_section_closing_rules() {
    let thead = get_tag_definition("thead");
    assert!(thead.is_closed_by_child("tbody"));
    assert!(thead.is_closed_by_child("tfoot"));
    assert!(!thead.is_closed_by_child("thead"));
    assert!(!thead.closed_by_parent);

    let tbody = get_tag_definition("tbody");
    assert!(tbody.is_closed_by_child("tbody"));
    assert!(tbody.is_closed_by_child("tfoot"));
    assert!(tbody.closed_by_parent);

    let tfoot = get_tag_definition("tfoot");
    assert!(tfoot.is_closed_by_child("tbody"));
    assert!(!tfoot.is_closed_by_child("tfoot"));
    assert!(tfoot.closed_by_parent);
}

#[test]
fn test_table_cell_closing_rules() {
    for tag in ["td", "th"] {
        let cell = get_tag_definition(tag);
        assert!(cell.is_closed_by_child("td"), "{tag} closed by td");
        assert!(cell.is_closed_by_child("th"), "{tag} closed by th");
        assert!(!cell.is_closed_by_child("tr"), "{tag} not closed by tr");
        assert!(cell.closed_by_parent);
    }
}

#[test]
fn test_tr_requires_table_section_parent() {
    let tr = get_tag_definition("tr");
    assert!(tr.require_extra_parent(None));
    assert!(tr.require_extra_parent(Some("")));
    assert!(tr.require_extra_parent(Some("div")));
    assert!(tr.require_extra_parent(Some("table")));
    assert!(!tr.require_extra_parent(Some("tbody")));
    assert!(!tr.require_extra_parent(Some("thead")));
    assert!(!tr.require_extra_parent(Some("tfoot")));
}

#[test]
fn test_tr_synthesizes_tbody() {
    // First declared required parent is the one to insert.
    assert_eq!(get_tag_definition("tr").parent_to_add, Some("tbody"));
}

#[test]
fn test_col_requires_colgroup() {
    let col = get_tag_definition("col");
    assert!(col.is_closed_by_child("col"));
    assert!(col.require_extra_parent(Some("table")));
    assert!(!col.require_extra_parent(Some("colgroup")));
    assert_eq!(col.parent_to_add, Some("colgroup"));
    assert!(!col.closed_by_parent);
    assert!(!col.is_void);
}

#[test]
fn test_unconstrained_tag_never_requires_parent() {
    let div = get_tag_definition("div");
    assert!(!div.require_extra_parent(None));
    assert!(!div.require_extra_parent(Some("")));
    assert!(!div.require_extra_parent(Some("anything")));
    assert_eq!(div.parent_to_add, None);
}

#[test]
fn test_list_item_closing_rules() {
    let li = get_tag_definition("li");
    assert!(li.is_closed_by_child("li"));
    assert!(!li.is_closed_by_child("ul"));
    assert!(li.closed_by_parent);
}

#[test]
fn test_definition_list_closing_rules() {
    let dt = get_tag_definition("dt");
    assert!(dt.is_closed_by_child("dt"));
    assert!(dt.is_closed_by_child("dd"));
    assert!(!dt.closed_by_parent);

    let dd = get_tag_definition("dd");
    assert!(dd.is_closed_by_child("dt"));
    assert!(dd.is_closed_by_child("dd"));
    assert!(dd.closed_by_parent);
}

#[test]
fn test_ruby_annotation_closing_rules() {
    for tag in ["rb", "rt", "rp"] {
        let definition = get_tag_definition(tag);
        for child in ["rb", "rt", "rtc", "rp"] {
            assert!(definition.is_closed_by_child(child), "{tag} closed by {child}");
        }
        assert!(definition.closed_by_parent);
    }

    // rtc is not closed by rt: an rt may nest under the open rtc.
    let rtc = get_tag_definition("rtc");
    assert!(rtc.is_closed_by_child("rb"));
    assert!(rtc.is_closed_by_child("rtc"));
    assert!(rtc.is_closed_by_child("rp"));
    assert!(!rtc.is_closed_by_child("rt"));
    assert!(rtc.closed_by_parent);
}

#[test]
fn test_select_option_closing_rules() {
    let optgroup = get_tag_definition("optgroup");
    assert!(optgroup.is_closed_by_child("optgroup"));
    assert!(!optgroup.is_closed_by_child("option"));
    assert!(optgroup.closed_by_parent);

    let option = get_tag_definition("option");
    assert!(option.is_closed_by_child("option"));
    assert!(option.is_closed_by_child("optgroup"));
    assert!(option.closed_by_parent);
}

#[test]
fn test_content_types() {
    assert_eq!(get_tag_definition("script").content_type, TagContentType::RawText);
    assert_eq!(get_tag_definition("style").content_type, TagContentType::RawText);
    assert_eq!(get_tag_definition("title").content_type, TagContentType::EscapableRawText);
    assert_eq!(get_tag_definition("textarea").content_type, TagContentType::EscapableRawText);
    assert_eq!(get_tag_definition("div").content_type, TagContentType::ParsableData);
    assert_eq!(get_tag_definition("p").content_type, TagContentType::ParsableData);
}

#[test]
fn test_content_type_display() {
    assert_eq!(TagContentType::RawText.to_string(), "RawText");
    assert_eq!(TagContentType::EscapableRawText.to_string(), "EscapableRawText");
    assert_eq!(TagContentType::ParsableData.to_string(), "ParsableData");
}

#[test]
fn test_foreign_content_namespace_hints() {
    assert_eq!(get_tag_definition("svg").implicit_namespace_prefix, Some("svg"));
    assert_eq!(get_tag_definition("math").implicit_namespace_prefix, Some("math"));
    assert_eq!(get_tag_definition("div").implicit_namespace_prefix, None);
    assert_eq!(get_tag_definition("p").implicit_namespace_prefix, None);

    // The namespace roots carry no other special rules.
    let svg = get_tag_definition("svg");
    assert!(!svg.is_void);
    assert!(!svg.closed_by_parent);
    assert_eq!(svg.content_type, TagContentType::ParsableData);
}

#[test]
fn test_unknown_tag_gets_default_definition() {
    let unknown = get_tag_definition("unknown-custom-tag");
    assert_eq!(*unknown, TagDefinition::default());
    assert!(!unknown.is_void);
    assert!(!unknown.closed_by_parent);
    assert_eq!(unknown.content_type, TagContentType::ParsableData);
    assert_eq!(unknown.parent_to_add, None);
    assert_eq!(unknown.implicit_namespace_prefix, None);
    assert!(!unknown.require_extra_parent(None));
    assert!(!unknown.is_closed_by_child("div"));
}

#[test]
fn test_unknown_tags_share_one_definition() {
    let first = get_tag_definition("x-panel");
    let second = get_tag_definition("y-widget");
    assert!(std::ptr::eq(first, second));
    assert!(std::ptr::eq(first, get_tag_definition("")));
}

#[test]
fn test_repeated_lookups_are_stable() {
    let first = get_tag_definition("p");
    let second = get_tag_definition("p");
    assert!(std::ptr::eq(first, second));
    assert_eq!(first, second);
}
