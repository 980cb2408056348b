use crate::environment::types::Identified;

/// `entries` with every item whose id matches `updated` replaced by it
pub fn replace_by_id<T: Identified + Clone>(entries: &im::Vector<T>, updated: &T) -> im::Vector<T> {
    entries
        .iter()
        .map(|entry| {
            if entry.id() == updated.id() {
                updated.clone()
            } else {
                entry.clone()
            }
        })
        .collect()
}

/// `entries` with `created` at the end
pub fn append<T: Clone>(entries: &im::Vector<T>, created: T) -> im::Vector<T> {
    let mut entries = entries.clone();
    entries.push_back(created);
    entries
}

/// The collection exactly as the server sent it
pub fn replace_all<T: Clone>(payload: Vec<T>) -> im::Vector<T> {
    payload.into_iter().collect()
}
