//! Merge a single-page overlay PDF onto every page of a document.
//!
//! The overlay page is imported once as a form XObject. Each target page
//! gets the form in its `/XObject` resources and two extra content streams:
//! one saving the graphics state before the original content, one restoring
//! it and drawing the form on top.

use std::collections::BTreeSet;

use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use crate::error::FilterError;

/// Parent chain depth after which inherited lookups give up
const MAX_PAGE_TREE_DEPTH: usize = 64;

/// A4 portrait in points, used when the overlay page has no MediaBox
const DEFAULT_MEDIA_BOX: [f32; 4] = [0.0, 0.0, 595.28, 841.89];

/// Stamp `overlay_pdf` (first page) onto every page of `doc` under the
/// resource name `name`. Returns the number of stamped pages.
pub fn stamp_pages(doc: &mut Document, overlay_pdf: &[u8], name: &str) -> Result<usize, FilterError> {
    let form_id = import_overlay_form(doc, overlay_pdf)?;

    let open_id = doc.add_object(Object::Stream(Stream::new(
        Dictionary::new(),
        b"q\n".to_vec(),
    )));
    let draw = format!("\nQ\nq /{} Do Q\n", name);
    let close_id = doc.add_object(Object::Stream(Stream::new(
        Dictionary::new(),
        draw.into_bytes(),
    )));

    let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();
    for &page_id in &page_ids {
        let mut resources = page_resources(doc, page_id);
        let mut xobjects = resources
            .get(b"XObject")
            .ok()
            .cloned()
            .map(|object| resolve_dictionary(doc, object))
            .unwrap_or_else(Dictionary::new);
        xobjects.set(name, Object::Reference(form_id));
        resources.set("XObject", Object::Dictionary(xobjects));

        let mut contents = vec![Object::Reference(open_id)];
        contents.extend(page_contents(doc, page_id));
        contents.push(Object::Reference(close_id));

        let page = doc.get_object_mut(page_id)?.as_dict_mut()?;
        page.set("Resources", Object::Dictionary(resources));
        page.set("Contents", Object::Array(contents));
    }

    Ok(page_ids.len())
}

/// Whether the first page already carries a stamp named `name`
pub fn has_stamp(doc: &Document, name: &str) -> bool {
    doc.get_pages()
        .values()
        .next()
        .is_some_and(|&page_id| page_has_stamp(doc, page_id, name))
}

/// Number of pages carrying a stamp named `name`
pub fn stamped_page_count(doc: &Document, name: &str) -> usize {
    doc.get_pages()
        .values()
        .filter(|&&page_id| page_has_stamp(doc, page_id, name))
        .count()
}

fn page_has_stamp(doc: &Document, page_id: ObjectId, name: &str) -> bool {
    page_resources(doc, page_id)
        .get(b"XObject")
        .ok()
        .cloned()
        .map(|object| resolve_dictionary(doc, object).has(name.as_bytes()))
        .unwrap_or(false)
}

/// Copy the overlay's first page into `doc` as a form XObject
fn import_overlay_form(doc: &mut Document, overlay_pdf: &[u8]) -> Result<ObjectId, FilterError> {
    let mut overlay = Document::load_mem(overlay_pdf)?;
    overlay.renumber_objects_with(doc.max_id + 1);

    let page_id = overlay
        .get_pages()
        .values()
        .next()
        .copied()
        .ok_or_else(|| FilterError::Render("overlay document has no pages".to_string()))?;

    let content = overlay.get_page_content(page_id)?;
    let resources = page_resources(&overlay, page_id);
    let media_box = inherited_attribute(&overlay, page_id, b"MediaBox").unwrap_or_else(|| {
        Object::Array(DEFAULT_MEDIA_BOX.iter().map(|&v| Object::Real(v)).collect())
    });

    // Bring over fonts and anything else the overlay resources point at
    let mut seen = BTreeSet::new();
    copy_referenced(
        &overlay,
        &Object::Dictionary(resources.clone()),
        doc,
        &mut seen,
    );
    doc.max_id = doc.max_id.max(overlay.max_id);

    let mut form = Dictionary::new();
    form.set("Type", Object::Name(b"XObject".to_vec()));
    form.set("Subtype", Object::Name(b"Form".to_vec()));
    form.set("BBox", media_box);
    form.set("Resources", Object::Dictionary(resources));

    Ok(doc.add_object(Object::Stream(Stream::new(form, content))))
}

fn copy_referenced(
    source: &Document,
    object: &Object,
    target: &mut Document,
    seen: &mut BTreeSet<ObjectId>,
) {
    match object {
        Object::Reference(id) => {
            if !seen.insert(*id) {
                return;
            }
            if let Ok(referenced) = source.get_object(*id) {
                target.objects.insert(*id, referenced.clone());
                copy_referenced(source, referenced, target, seen);
            }
        }
        Object::Array(items) => {
            for item in items {
                copy_referenced(source, item, target, seen);
            }
        }
        Object::Dictionary(dict) => {
            for (_, value) in dict.iter() {
                copy_referenced(source, value, target, seen);
            }
        }
        Object::Stream(stream) => {
            for (_, value) in stream.dict.iter() {
                copy_referenced(source, value, target, seen);
            }
        }
        _ => {}
    }
}

/// Resources of a page, following inheritance and indirect references
fn page_resources(doc: &Document, page_id: ObjectId) -> Dictionary {
    inherited_attribute(doc, page_id, b"Resources")
        .map(|object| resolve_dictionary(doc, object))
        .unwrap_or_else(Dictionary::new)
}

/// Content stream references of a page, flattened
fn page_contents(doc: &Document, page_id: ObjectId) -> Vec<Object> {
    let Ok(contents) = doc.get_dictionary(page_id).and_then(|page| page.get(b"Contents")) else {
        return Vec::new();
    };
    match contents {
        Object::Array(items) => items.clone(),
        Object::Reference(id) => match doc.get_object(*id) {
            Ok(Object::Array(items)) => items.clone(),
            _ => vec![Object::Reference(*id)],
        },
        _ => Vec::new(),
    }
}

/// Look up a page attribute, walking up the page tree when it is inherited
fn inherited_attribute(doc: &Document, page_id: ObjectId, key: &[u8]) -> Option<Object> {
    let mut current = Some(page_id);
    for _ in 0..MAX_PAGE_TREE_DEPTH {
        let dict = doc.get_dictionary(current?).ok()?;
        if let Ok(value) = dict.get(key) {
            return Some(value.clone());
        }
        current = dict.get(b"Parent").and_then(Object::as_reference).ok();
    }
    None
}

fn resolve_dictionary(doc: &Document, object: Object) -> Dictionary {
    match object {
        Object::Dictionary(dict) => dict,
        Object::Reference(id) => doc
            .get_dictionary(id)
            .cloned()
            .unwrap_or_else(|_| Dictionary::new()),
        _ => Dictionary::new(),
    }
}
