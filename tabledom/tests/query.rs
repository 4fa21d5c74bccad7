use tabledom::{
    element_at, find_element, find_element_mut, inner_text, path_to, query_all, sibling_index,
    text_content, Element, Tag,
};

fn sample() -> Element {
    Element::table()
        .id("t")
        .child(
            Element::thead()
                .id("head")
                .child(Element::header_row_of(["Name", "Age"]).id("hr")),
        )
        .child(
            Element::tbody()
                .id("body")
                .child(Element::row_of(["Bob", "30"]).id("r0"))
                .child(Element::row_of(["Ann", "5"]).id("r1")),
        )
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_find_element_by_id() {
    let root = sample();
    assert_eq!(find_element(&root, "r1").map(|e| &e.tag), Some(&Tag::Tr));
    assert!(find_element(&root, "missing").is_none());
}

#[test]
fn test_find_element_mut_edits_in_place() {
    let mut root = sample();
    find_element_mut(&mut root, "r0").unwrap().set_attr("class", "first");
    assert_eq!(
        find_element(&root, "r0").unwrap().get_attr("class"),
        Some("first")
    );
}

#[test]
fn test_query_all_is_document_order() {
    let root = sample();
    let headers: Vec<String> = query_all(&root, &Tag::Th)
        .into_iter()
        .map(inner_text)
        .collect();
    assert_eq!(headers, ["Name", "Age"]);

    let cells = query_all(&root, &Tag::Td);
    assert_eq!(cells.len(), 4);
    assert_eq!(inner_text(cells[2]), "Ann");
}

#[test]
fn test_path_and_element_at_agree() {
    let root = sample();
    let path = path_to(&root, "r1").unwrap();
    assert_eq!(path, vec![1, 1]);
    assert_eq!(element_at(&root, &path).unwrap().id, "r1");
    assert_eq!(path_to(&root, "t"), Some(vec![]));
    assert!(element_at(&root, &[5]).is_none());
}

#[test]
fn test_sibling_index() {
    let root = sample();
    let age = query_all(&root, &Tag::Th)[1].id.clone();
    assert_eq!(sibling_index(&root, &age), Some(1));
    assert_eq!(sibling_index(&root, "t"), None);
    assert_eq!(sibling_index(&root, "missing"), None);
}

// ============================================================================
// Text
// ============================================================================

#[test]
fn test_inner_text_collapses_whitespace() {
    let cell = Element::td("  12 \n  items ");
    assert_eq!(inner_text(&cell), "12 items");
    assert_eq!(text_content(&cell), "  12 \n  items ");
}

#[test]
fn test_inner_text_concatenates_children() {
    let cell = Element::new(Tag::Td)
        .child(Element::span("$"))
        .child(Element::span("12"));
    assert_eq!(inner_text(&cell), "$12");
}

#[test]
fn test_inner_text_skips_hidden() {
    let cell = Element::new(Tag::Td)
        .child(Element::span("sort-key").hidden(true))
        .child(Element::span("Visible"));
    assert_eq!(inner_text(&cell), "Visible");
    assert_eq!(text_content(&cell), "sort-keyVisible");
    assert_eq!(inner_text(&Element::td("x").hidden(true)), "");
}

#[test]
fn test_hidden_toggle() {
    let el = Element::td("x").hidden(true).hidden(false);
    assert!(!el.is_hidden());
}
