mod content;
mod node;

pub use content::Content;
pub use node::{Element, Tag};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.content.children() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Mutable variant of [`find_element`].
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// IDs from `id` up to and including the root, innermost first.
/// Returns None if `id` is not in the tree.
pub fn ancestry(root: &Element, id: &str) -> Option<Vec<String>> {
    if root.id == id {
        return Some(vec![root.id.clone()]);
    }

    for child in root.content.children() {
        if let Some(mut path) = ancestry(child, id) {
            path.push(root.id.clone());
            return Some(path);
        }
    }

    None
}

/// Collect descendants of `root` (excluding `root` itself) in document order.
pub fn descendants<'a>(
    root: &'a Element,
    predicate: &dyn Fn(&Element) -> bool,
) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect(root, predicate, &mut found);
    found
}

fn collect<'a>(
    element: &'a Element,
    predicate: &dyn Fn(&Element) -> bool,
    found: &mut Vec<&'a Element>,
) {
    for child in element.content.children() {
        if predicate(child) {
            found.push(child);
        }
        collect(child, predicate, found);
    }
}
