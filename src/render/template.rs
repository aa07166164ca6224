//! Fixed page template
//!
//! The page is a self-contained playlist browser. The script keeps the
//! current position in local storage, opens the watch URL in a new tab on
//! navigation and highlights the current entry in the list.

/// Substitution marker for the page title (appears twice)
pub const TITLE_SLOT: &str = "{page_title}";

/// Substitution marker for the serialized entry array
pub const ENTRIES_SLOT: &str = "{lectures}";

/// Page template with `{page_title}` and `{lectures}` slots
pub const PAGE_TEMPLATE: &str = include_str!("page.html");

/// Fill the template slots in a single pass.
///
/// Inserted values are never scanned for markers, so a title that happens
/// to contain `{lectures}` is reproduced as-is.
pub fn fill(template: &str, page_title: &str, entries: &str) -> String {
    let mut out = String::with_capacity(template.len() + entries.len() + 2 * page_title.len());
    let mut rest = template;

    loop {
        let next = [(TITLE_SLOT, page_title), (ENTRIES_SLOT, entries)]
            .into_iter()
            .filter_map(|(slot, value)| rest.find(slot).map(|pos| (pos, slot, value)))
            .min_by_key(|(pos, _, _)| *pos);

        match next {
            Some((pos, slot, value)) => {
                out.push_str(&rest[..pos]);
                out.push_str(value);
                rest = &rest[pos + slot.len()..];
            }
            None => {
                out.push_str(rest);
                return out;
            }
        }
    }
}
