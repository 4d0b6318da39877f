use crate::document::{average_rating, DocumentStatus};
use crate::tokenizer::{split_no_stop, StopWords};
use crate::{DocId, Execution, Result, SearchError};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocMeta {
    pub rating: i32,
    pub status: DocumentStatus,
}

/// Term/document weights kept in both directions.
///
/// Both maps are private; every mutation goes through [`InvertedIndex::add_document`]
/// or [`InvertedIndex::remove_document`], which update the two views together.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    term_to_docs: BTreeMap<String, BTreeMap<DocId, f64>>,
    doc_to_terms: BTreeMap<DocId, BTreeMap<String, f64>>,
    docs: BTreeMap<DocId, DocMeta>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    pub fn add_document(
        &mut self,
        id: DocId,
        text: &str,
        ratings: &[i32],
        status: DocumentStatus,
        stop_words: &StopWords,
    ) -> Result<()> {
        if id < 0 {
            return Err(SearchError::NegativeId(id));
        }
        if self.docs.contains_key(&id) {
            return Err(SearchError::DuplicateId(id));
        }
        // Validation happens here, before anything is written.
        let words = split_no_stop(text, stop_words)?;

        let mut row: BTreeMap<String, f64> = BTreeMap::new();
        let inv_word_count = 1.0 / words.len() as f64;
        for word in &words {
            *row.entry((*word).to_string()).or_insert(0.0) += inv_word_count;
        }
        for (term, &tf) in &row {
            self.term_to_docs.entry(term.clone()).or_default().insert(id, tf);
        }
        tracing::debug!(doc_id = id, terms = row.len(), "indexed document");
        self.doc_to_terms.insert(id, row);
        self.docs.insert(id, DocMeta { rating: average_rating(ratings), status });
        Ok(())
    }

    /// Remove `id` from every structure. Unknown ids are ignored.
    pub fn remove_document(&mut self, execution: Execution, id: DocId) {
        let Some(row) = self.doc_to_terms.remove(&id) else {
            return;
        };
        match execution {
            Execution::Sequential => {
                for term in row.keys() {
                    if let Some(docs) = self.term_to_docs.get_mut(term) {
                        docs.remove(&id);
                        if docs.is_empty() {
                            self.term_to_docs.remove(term);
                        }
                    }
                }
            }
            Execution::Parallel => {
                execution.for_each_value_mut(&mut self.term_to_docs, |docs| {
                    docs.remove(&id);
                });
                self.term_to_docs.retain(|_, docs| !docs.is_empty());
            }
        }
        self.docs.remove(&id);
        tracing::debug!(doc_id = id, "removed document");
    }

    pub fn word_frequencies(&self, id: DocId) -> BTreeMap<String, f64> {
        self.doc_to_terms.get(&id).cloned().unwrap_or_default()
    }

    pub fn document_count(&self) -> usize { self.docs.len() }

    pub fn document_ids(&self) -> impl Iterator<Item = DocId> + '_ { self.docs.keys().copied() }

    #[cfg(test)]
    pub(crate) fn contains(&self, id: DocId) -> bool { self.docs.contains_key(&id) }

    pub fn meta(&self, id: DocId) -> Option<DocMeta> { self.docs.get(&id).copied() }

    /// Postings of `term`: document id to term frequency.
    pub fn postings(&self, term: &str) -> Option<&BTreeMap<DocId, f64>> { self.term_to_docs.get(term) }

    pub fn document_terms(&self, id: DocId) -> Option<&BTreeMap<String, f64>> { self.doc_to_terms.get(&id) }

    /// `ln(N / df)`. Only meaningful for terms present in the index.
    pub fn inverse_document_frequency(&self, term: &str) -> f64 {
        let df = self.term_to_docs.get(term).map_or(0, |docs| docs.len());
        (self.document_count() as f64 / df as f64).ln()
    }

    #[cfg(test)]
    pub(crate) fn term_count(&self) -> usize { self.term_to_docs.len() }
}
