//! Tree lookups. Elements are owned by their parent, so positions are
//! expressed as paths of child indices from the root.

use crate::element::{Content, Element, Tag};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    let path = path_to(root, id)?;
    element_at_mut(root, &path)
}

/// All elements with the given tag, in document (pre-)order.
pub fn query_all<'a>(root: &'a Element, tag: &Tag) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_tagged(root, tag, &mut found);
    found
}

fn collect_tagged<'a>(element: &'a Element, tag: &Tag, out: &mut Vec<&'a Element>) {
    if element.tag == *tag {
        out.push(element);
    }
    for child in element.child_nodes() {
        collect_tagged(child, tag, out);
    }
}

/// Child-index path from `root` to the element with `id`.
/// The root itself has an empty path.
pub fn path_to(root: &Element, id: &str) -> Option<Vec<usize>> {
    if root.id == id {
        return Some(Vec::new());
    }

    for (i, child) in root.child_nodes().iter().enumerate() {
        if let Some(mut path) = path_to(child, id) {
            path.insert(0, i);
            return Some(path);
        }
    }

    None
}

pub fn element_at<'a>(root: &'a Element, path: &[usize]) -> Option<&'a Element> {
    path.iter()
        .try_fold(root, |element, &i| element.child_nodes().get(i))
}

pub fn element_at_mut<'a>(root: &'a mut Element, path: &[usize]) -> Option<&'a mut Element> {
    let mut element = root;
    for &i in path {
        element = element.child_nodes_mut()?.get_mut(i)?;
    }
    Some(element)
}

/// Position of the element among its parent's children.
/// `None` for the root or an unknown id.
pub fn sibling_index(root: &Element, id: &str) -> Option<usize> {
    path_to(root, id)?.last().copied()
}

/// Raw concatenation of all descendant text.
pub fn text_content(element: &Element) -> String {
    let mut out = String::new();
    push_text(element, false, &mut out);
    out
}

/// Text as a reader would see it: hidden subtrees skipped, whitespace runs
/// collapsed to one space, leading and trailing whitespace removed.
pub fn inner_text(element: &Element) -> String {
    if element.is_hidden() {
        return String::new();
    }
    let mut raw = String::new();
    push_text(element, true, &mut raw);
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn push_text(element: &Element, skip_hidden: bool, out: &mut String) {
    if skip_hidden && element.is_hidden() {
        return;
    }
    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(text),
        Content::Children(children) => {
            for child in children {
                push_text(child, skip_hidden, out);
            }
        }
    }
}
