use crate::{DocId, SearchEngine};
use std::collections::BTreeSet;

/// Remove documents whose vocabulary equals that of a lower-id document.
///
/// Word counts and ratings are ignored; only the set of distinct non-stop words
/// is compared. Returns the removed ids in ascending order.
pub fn remove_duplicates(engine: &mut SearchEngine) -> Vec<DocId> {
    let mut seen: BTreeSet<BTreeSet<String>> = BTreeSet::new();
    let mut duplicates = Vec::new();
    for id in engine.document_ids() {
        let words: BTreeSet<String> = engine.word_frequencies(id).into_keys().collect();
        if !seen.insert(words) {
            duplicates.push(id);
        }
    }
    for &id in &duplicates {
        engine.remove_document(id);
        tracing::info!(doc_id = id, "found duplicate document id {id}");
    }
    duplicates
}
